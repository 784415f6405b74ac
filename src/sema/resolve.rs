//! Owner resolution for method definitions.
//!
//! Maps a definition's receiver to the concrete namespace that owns the
//! method: the current namespace for instance definitions and `self`,
//! a resolved constant path for explicit receivers. Constant-alias
//! entities are dereferenced until a terminal namespace is reached.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::trace;

use crate::base::ident;
use crate::model::{NamespaceId, NamespaceKind, Registry};
use crate::syntax::Receiver;

use super::error::SemaError;

/// Resolves receivers and constant paths against the registry, creating
/// forward-reference namespaces for paths nothing has defined yet.
pub struct PathResolver<'a> {
    registry: &'a mut Registry,
}

impl<'a> PathResolver<'a> {
    pub fn new(registry: &'a mut Registry) -> Self {
        Self { registry }
    }

    /// Resolve the receiver of a singleton definition to the owning
    /// namespace.
    ///
    /// Fails with [`SemaError::Undocumentable`] when the receiver is a
    /// local variable or other non-constant identifier; nothing is
    /// created or mutated in that case.
    pub fn resolve_receiver(
        &mut self,
        current: NamespaceId,
        receiver: &Receiver,
    ) -> Result<NamespaceId, SemaError> {
        let resolved = match receiver {
            Receiver::SelfRef => current,
            Receiver::Name(name) => {
                if !ident::is_constant_name(name) {
                    return Err(SemaError::Undocumentable {
                        receiver: name.clone(),
                    });
                }
                self.resolve_constant_path(current, std::slice::from_ref(name))
            }
            Receiver::Path(segments) => self.resolve_constant_path(current, segments),
        };
        self.dereference(resolved)
    }

    /// Resolve a constant path relative to `from`.
    ///
    /// The first segment is looked up along the enclosing namespace chain
    /// outward to the root; unresolved segments become forward-reference
    /// namespaces under the deepest resolved prefix.
    pub fn resolve_constant_path(
        &mut self,
        from: NamespaceId,
        segments: &[SmolStr],
    ) -> NamespaceId {
        let Some((first, rest)) = segments.split_first() else {
            return from;
        };

        let mut base = match self.lookup_enclosing(from, first) {
            Some(found) => found,
            None => self.registry.reference_namespace(from, first),
        };
        for segment in rest {
            base = match self.registry.lookup_namespace(base, segment) {
                Some(found) => found,
                None => self.registry.reference_namespace(base, segment),
            };
        }
        base
    }

    /// Follow constant-alias indirection until a terminal, non-alias
    /// entity is found.
    ///
    /// Bounded by a visited set: revisiting an entity means the chain is
    /// cyclic, which fails with [`SemaError::CyclicAlias`].
    pub fn dereference(&mut self, id: NamespaceId) -> Result<NamespaceId, SemaError> {
        let mut current = id;
        let mut visited = FxHashSet::default();
        visited.insert(current);

        while self.registry.namespace(current).kind == NamespaceKind::Constant {
            let ns = self.registry.namespace(current);
            let Some(value) = ns.value.clone() else {
                // A constant with no recorded target is already terminal.
                break;
            };
            let parent = ns.parent.unwrap_or(self.registry.root());
            trace!(from = %ns.path, target = %value, "following constant alias");

            let segments: Vec<SmolStr> = value.split("::").map(SmolStr::new).collect();
            let next = self.resolve_constant_path(parent, &segments);
            if !visited.insert(next) {
                return Err(SemaError::CyclicAlias {
                    path: self.registry.namespace(id).path.clone(),
                });
            }
            current = next;
        }
        Ok(current)
    }

    /// Look `name` up as a direct child of `from` or any of its enclosing
    /// namespaces, nearest first.
    fn lookup_enclosing(&self, from: NamespaceId, name: &str) -> Option<NamespaceId> {
        let mut scope = Some(from);
        while let Some(ns) = scope {
            if let Some(found) = self.registry.lookup_namespace(ns, name) {
                return Some(found);
            }
            scope = self.registry.namespace(ns).parent;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NamespaceKind;

    fn registry_with_nested() -> (Registry, NamespaceId, NamespaceId) {
        let mut registry = Registry::new();
        let root = registry.root();
        let outer = registry.define_namespace(root, "Outer", NamespaceKind::Module);
        let inner = registry.define_namespace(outer, "Inner", NamespaceKind::Class);
        (registry, outer, inner)
    }

    #[test]
    fn test_self_receiver_resolves_to_current() {
        let (mut registry, _outer, inner) = registry_with_nested();
        let mut resolver = PathResolver::new(&mut registry);
        let owner = resolver.resolve_receiver(inner, &Receiver::SelfRef).unwrap();
        assert_eq!(owner, inner);
    }

    #[test]
    fn test_local_identifier_receiver_is_undocumentable() {
        let (mut registry, _outer, inner) = registry_with_nested();
        let count_before = registry.namespaces().count();

        let mut resolver = PathResolver::new(&mut registry);
        let err = resolver
            .resolve_receiver(inner, &Receiver::Name("obj".into()))
            .unwrap_err();

        assert_eq!(
            err,
            SemaError::Undocumentable {
                receiver: "obj".into()
            }
        );
        // Nothing was created for the failed receiver.
        assert_eq!(registry.namespaces().count(), count_before);
    }

    #[test]
    fn test_constant_receiver_walks_enclosing_scopes() {
        let (mut registry, outer, inner) = registry_with_nested();
        let helper = registry.define_namespace(outer, "Helper", NamespaceKind::Class);

        let mut resolver = PathResolver::new(&mut registry);
        let owner = resolver
            .resolve_receiver(inner, &Receiver::Name("Helper".into()))
            .unwrap();
        assert_eq!(owner, helper);
    }

    #[test]
    fn test_unknown_constant_creates_forward_reference() {
        let (mut registry, _outer, inner) = registry_with_nested();
        let mut resolver = PathResolver::new(&mut registry);
        let owner = resolver
            .resolve_receiver(inner, &Receiver::Name("Ghost".into()))
            .unwrap();

        let ns = registry.namespace(owner);
        assert_eq!(ns.path.as_ref(), "Outer::Inner::Ghost");
        assert!(!ns.explicit);
    }

    #[test]
    fn test_explicit_path_resolves_segments() {
        let (mut registry, outer, inner) = registry_with_nested();
        let mut resolver = PathResolver::new(&mut registry);
        let owner = resolver
            .resolve_receiver(
                inner,
                &Receiver::Path(vec!["Outer".into(), "Inner".into()]),
            )
            .unwrap();
        assert_eq!(owner, inner);
        let _ = outer;
    }

    #[test]
    fn test_dereference_follows_alias_chain() {
        let mut registry = Registry::new();
        let root = registry.root();
        let real = registry.define_namespace(root, "Real", NamespaceKind::Class);
        registry.define_constant(root, "Mid", "Real");
        let alias = registry.define_constant(root, "Short", "Mid");

        let mut resolver = PathResolver::new(&mut registry);
        assert_eq!(resolver.dereference(alias).unwrap(), real);
    }

    #[test]
    fn test_dereference_detects_cycles() {
        let mut registry = Registry::new();
        let root = registry.root();
        registry.define_constant(root, "A", "B");
        let a = registry.lookup_namespace(root, "A").unwrap();
        registry.define_constant(root, "B", "A");

        let mut resolver = PathResolver::new(&mut registry);
        let err = resolver.dereference(a).unwrap_err();
        assert!(matches!(err, SemaError::CyclicAlias { .. }));
    }
}
