//! Documentation entities: namespaces and methods.

use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::{FileId, TextRange, ident};

use super::ids::{MethodId, NamespaceId};
use super::tags::Docstring;

/// Whether a method is invoked on instances or on the namespace itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MethodScope {
    Instance,
    Class,
}

impl MethodScope {
    /// Separator used when rendering qualified method paths.
    pub fn separator(&self) -> &'static str {
        match self {
            MethodScope::Instance => "#",
            MethodScope::Class => ".",
        }
    }
}

/// Declared visibility of a method.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// The kind of a namespace entity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NamespaceKind {
    /// `module Foo`
    Module,
    /// `class Foo`
    Class,
    /// `Foo = SomeOther::Const` — renames another entity; resolution
    /// follows `value` until a terminal namespace is reached.
    Constant,
}

/// Reader/writer halves of a logical attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttrInfo {
    pub read: Option<MethodId>,
    pub write: Option<MethodId>,
}

/// A module/class-like container that owns methods.
#[derive(Clone, Debug)]
pub struct NamespaceEntity {
    pub id: NamespaceId,
    /// Lexically enclosing namespace; `None` only for the root.
    pub parent: Option<NamespaceId>,
    /// Simple name, e.g. `Bar` for `Foo::Bar`.
    pub name: SmolStr,
    /// Qualified `::`-joined path; empty for the root.
    pub path: Arc<str>,
    pub kind: NamespaceKind,
    /// For `Constant` kind: the constant path this entity renames, as
    /// written in source.
    pub value: Option<Arc<str>>,
    /// Alias method entity → the name it aliases. Order is declaration
    /// order; lookups against the target name happen on (re)definition.
    pub aliases: IndexMap<MethodId, SmolStr>,
    /// Logical attribute name (per scope) → reader/writer pair. Filled by
    /// the attribute handlers; completed here when plain definitions
    /// supply a missing half.
    pub attributes: IndexMap<(MethodScope, SmolStr), AttrInfo>,
    /// False while the namespace only exists because something referenced
    /// it (a forward reference), true once concretely defined.
    pub explicit: bool,
}

impl NamespaceEntity {
    /// Remove every alias record whose target name equals `name`.
    ///
    /// An alias pointing at a name is only valid until that name is
    /// redefined with genuine content; stale records would shadow the
    /// real definition in lookups. Returns the purged alias entities.
    pub fn invalidate_aliases(&mut self, name: &str) -> Vec<MethodId> {
        let purged: Vec<MethodId> = self
            .aliases
            .iter()
            .filter(|(_, target)| target.as_str() == name)
            .map(|(&id, _)| id)
            .collect();
        self.aliases
            .retain(|_, target| target.as_str() != name);
        purged
    }

    /// Attribute info for the logical attribute `name` in `scope`.
    pub fn attr_info(&self, scope: MethodScope, name: &str) -> Option<AttrInfo> {
        self.attributes.get(&(scope, SmolStr::new(name))).copied()
    }
}

/// One `(name, default-or-absent)` documentation parameter pair.
///
/// Splat, double-splat, and block parameters keep their `*`/`**`/`&`
/// marker in `name`; defaults are opaque source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocParam {
    pub name: SmolStr,
    pub default: Option<Arc<str>>,
}

impl DocParam {
    pub fn new(name: impl Into<SmolStr>, default: Option<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            default,
        }
    }
}

/// A documented method definition, keyed by (owner, name, scope).
#[derive(Clone, Debug)]
pub struct MethodEntity {
    pub id: MethodId,
    /// Owning namespace; a non-owning back-reference into the registry.
    pub owner: NamespaceId,
    /// The name exactly as declared; may end in `?`, `!`, or `=`.
    pub name: SmolStr,
    pub scope: MethodScope,
    pub visibility: Visibility,
    /// Canonical rendered signature, e.g. `def foo(a, b = 1)`.
    pub signature: Arc<str>,
    /// Ordered parameter pairs.
    pub parameters: Vec<DocParam>,
    /// True once a concrete definition (not just a reference) has been
    /// processed.
    pub explicit: bool,
    pub docstring: Docstring,
    /// Where the definition was seen; overwritten on re-registration.
    pub file: Option<FileId>,
    pub range: Option<TextRange>,
}

impl MethodEntity {
    pub(crate) fn new(
        id: MethodId,
        owner: NamespaceId,
        name: SmolStr,
        scope: MethodScope,
    ) -> Self {
        Self {
            id,
            owner,
            name,
            scope,
            visibility: Visibility::default(),
            signature: Arc::from(""),
            parameters: Vec::new(),
            explicit: false,
            docstring: Docstring::default(),
            file: None,
            range: None,
        }
    }

    /// True if this method is `owner`'s designated initializer.
    pub fn is_constructor(&self, owner: &NamespaceEntity) -> bool {
        self.name == "initialize"
            && self.scope == MethodScope::Instance
            && owner.kind == NamespaceKind::Class
    }

    /// True for predicate-named methods (`empty?`).
    pub fn is_predicate(&self) -> bool {
        ident::is_predicate_name(&self.name)
    }

    /// True for writer-named methods (`name=`).
    pub fn is_writer(&self) -> bool {
        ident::is_writer_name(&self.name)
    }

    /// The logical attribute name (writer suffix stripped).
    pub fn attr_name(&self) -> &str {
        ident::attr_name(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_namespace(kind: NamespaceKind) -> NamespaceEntity {
        NamespaceEntity {
            id: NamespaceId::new(0),
            parent: None,
            name: SmolStr::new("Widget"),
            path: Arc::from("Widget"),
            kind,
            value: None,
            aliases: IndexMap::new(),
            attributes: IndexMap::new(),
            explicit: true,
        }
    }

    #[test]
    fn test_invalidate_aliases_purges_matching_targets() {
        let mut ns = make_namespace(NamespaceKind::Class);
        ns.aliases.insert(MethodId::new(1), SmolStr::new("foo"));
        ns.aliases.insert(MethodId::new(2), SmolStr::new("bar"));
        ns.aliases.insert(MethodId::new(3), SmolStr::new("foo"));

        let purged = ns.invalidate_aliases("foo");

        assert_eq!(purged, vec![MethodId::new(1), MethodId::new(3)]);
        assert_eq!(ns.aliases.len(), 1);
        assert_eq!(ns.aliases.get(&MethodId::new(2)).unwrap(), "bar");
    }

    #[test]
    fn test_invalidate_aliases_empty_table_is_noop() {
        let mut ns = make_namespace(NamespaceKind::Module);
        assert!(ns.invalidate_aliases("foo").is_empty());
    }

    #[test]
    fn test_constructor_detection() {
        let class = make_namespace(NamespaceKind::Class);
        let module = make_namespace(NamespaceKind::Module);

        let init = MethodEntity::new(
            MethodId::new(0),
            class.id,
            SmolStr::new("initialize"),
            MethodScope::Instance,
        );
        assert!(init.is_constructor(&class));
        assert!(!init.is_constructor(&module));

        let class_init = MethodEntity::new(
            MethodId::new(1),
            class.id,
            SmolStr::new("initialize"),
            MethodScope::Class,
        );
        assert!(!class_init.is_constructor(&class));
    }

    #[test]
    fn test_method_name_helpers() {
        let setter = MethodEntity::new(
            MethodId::new(0),
            NamespaceId::new(0),
            SmolStr::new("name="),
            MethodScope::Instance,
        );
        assert!(setter.is_writer());
        assert_eq!(setter.attr_name(), "name");

        let pred = MethodEntity::new(
            MethodId::new(1),
            NamespaceId::new(0),
            SmolStr::new("valid?"),
            MethodScope::Instance,
        );
        assert!(pred.is_predicate());
    }

    #[test]
    fn test_scope_separator() {
        assert_eq!(MethodScope::Instance.separator(), "#");
        assert_eq!(MethodScope::Class.separator(), ".");
    }
}
