//! Method synthesis — the core of the documentation pass.
//!
//! Given a parsed method definition, [`MethodSynthesizer`] determines the
//! method's scope, resolves its owning namespace, upserts the method
//! entity, purges stale aliases, applies tag inference, and hands the
//! body to the nested-scope visitor.

use std::sync::Arc;

use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::base::FileId;
use crate::model::{
    MethodId, MethodScope, NamespaceId, Registry, Tag, TagKind, Visibility,
};
use crate::syntax::MethodDef;

use super::error::SemaError;
use super::params::{extract_params, local_names, method_signature};
use super::resolve::PathResolver;
use super::scope::{BlockContext, LexicalScope, NestedVisitor, SelfBinding};

/// Class-level callback names that are implicitly private when left
/// undocumented.
const LIFECYCLE_HOOKS: &[&str] = &[
    "inherited",
    "included",
    "extended",
    "method_added",
    "method_removed",
    "method_undefined",
];

/// Traversal state a method definition is processed under.
#[derive(Clone, Debug)]
pub struct SynthesisContext {
    /// File the definition came from.
    pub file: FileId,
    /// The lexically enclosing namespace.
    pub namespace: NamespaceId,
    /// Scope of the enclosing block (`class << self` bodies are Class).
    pub scope: MethodScope,
    /// Visibility in effect at the definition site.
    pub visibility: Visibility,
    /// Lexical scope of the enclosing block.
    pub lexical_scope: Arc<LexicalScope>,
}

impl SynthesisContext {
    /// Context at the top of a namespace body: instance scope, public
    /// visibility, fresh lexical root.
    pub fn new(file: FileId, namespace: NamespaceId) -> Self {
        Self {
            file,
            namespace,
            scope: MethodScope::Instance,
            visibility: Visibility::default(),
            lexical_scope: Arc::new(LexicalScope::root()),
        }
    }

    pub fn with_scope(mut self, scope: MethodScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// Builds method entities from definition nodes.
pub struct MethodSynthesizer<'a> {
    registry: &'a mut Registry,
    visitor: &'a mut dyn NestedVisitor,
}

impl<'a> MethodSynthesizer<'a> {
    pub fn new(registry: &'a mut Registry, visitor: &'a mut dyn NestedVisitor) -> Self {
        Self { registry, visitor }
    }

    /// Process a batch of definitions in source order, recovering at the
    /// per-node boundary: a failed node is skipped and the rest of the
    /// batch is unaffected. Returns the entities that were built.
    pub fn process_all<'n>(
        &mut self,
        ctx: &SynthesisContext,
        nodes: impl IntoIterator<Item = &'n MethodDef>,
    ) -> Vec<MethodId> {
        let mut built = Vec::new();
        for node in nodes {
            match self.process(ctx, node) {
                Ok(id) => built.push(id),
                Err(err) => {
                    debug!(method = %node.name, %err, "skipping definition");
                }
            }
        }
        built
    }

    /// Process one method definition.
    ///
    /// All fallible resolution happens before the entity is created, so a
    /// failed node leaves the registry without a new or mutated method.
    pub fn process(
        &mut self,
        ctx: &SynthesisContext,
        node: &MethodDef,
    ) -> Result<MethodId, SemaError> {
        let mut mscope = ctx.scope;

        let owner = {
            let mut resolver = PathResolver::new(self.registry);
            match node.receiver() {
                None => resolver.dereference(ctx.namespace)?,
                Some(receiver) => {
                    mscope = MethodScope::Class;
                    resolver.resolve_receiver(ctx.namespace, receiver)?
                }
            }
        };

        // Create and update share one code path: an upsert.
        let id = self
            .registry
            .find_or_create_method(owner, &node.name, mscope);
        {
            let method = self.registry.method_mut(id);
            method.signature = method_signature(&node.name, node.params.as_ref());
            method.parameters = extract_params(node.params.as_ref());
            method.explicit = true;
            method.visibility = ctx.visibility;
            method.file = Some(node.file);
            method.range = Some(node.range);
            if let Some(docstring) = &node.docstring {
                method.docstring = docstring.clone();
            }
        }
        trace!(path = %self.registry.method_path(id), "registered method");

        // The name now has genuine content; aliases pointing at it are
        // stale and would shadow it in lookups.
        let purged = self
            .registry
            .namespace_mut(owner)
            .invalidate_aliases(&node.name);
        if !purged.is_empty() {
            debug!(method = %node.name, purged = purged.len(), "removed stale aliases");
        }

        self.infer_tags(id, owner);
        self.synthesize_option_params(id);
        self.pair_attribute(id, owner, mscope);

        // The body's lexical scope is keyed by the qualified method path
        // and binds the explicit parameters as locals.
        let mut body_scope =
            LexicalScope::child(ctx.lexical_scope.clone(), self.registry.method_path(id));
        if let Some(params) = &node.params {
            for name in local_names(params) {
                body_scope.bind(name);
            }
        }

        let self_binding =
            if ctx.scope == MethodScope::Class || mscope == MethodScope::Class {
                SelfBinding::Class
            } else {
                SelfBinding::Instance
            };
        // Mainly for yield/exception documentation nested in the body.
        self.visitor.visit(
            &node.body,
            BlockContext {
                owner: id,
                namespace: owner,
                self_binding,
                lexical_scope: Arc::new(body_scope),
            },
        );

        Ok(id)
    }

    /// The inference rules, evaluated in fixed priority order with early
    /// exit. A rule fires when its guard matches, even when its body then
    /// adds nothing — a constructor with an explicit `@return` still
    /// shadows the predicate rule.
    fn infer_tags(&mut self, id: MethodId, owner: NamespaceId) {
        if self.constructor_rule(id, owner) {
            return;
        }
        if self.lifecycle_rule(id) {
            return;
        }
        self.predicate_rule(id);
    }

    /// Constructors without an explicit `@return` get one describing a
    /// new instance of the owning namespace.
    fn constructor_rule(&mut self, id: MethodId, owner: NamespaceId) -> bool {
        let owner_entity = self.registry.namespace(owner);
        let method = self.registry.method(id);
        if !method.is_constructor(owner_entity) {
            return false;
        }
        if !method.docstring.has_tag(TagKind::Return) {
            let namespace_name = owner_entity.name.clone();
            let tag = Tag::new(
                TagKind::Return,
                format!("a new instance of {namespace_name}"),
            )
            .with_types([namespace_name]);
            self.registry.method_mut(id).docstring.add_tag(tag);
        }
        true
    }

    /// Undocumented class-level lifecycle hooks are implicitly private.
    fn lifecycle_rule(&mut self, id: MethodId) -> bool {
        let method = self.registry.method(id);
        if method.scope != MethodScope::Class
            || !method.docstring.is_blank()
            || !LIFECYCLE_HOOKS.contains(&method.name.as_str())
        {
            return false;
        }
        self.registry
            .method_mut(id)
            .docstring
            .add_tag(Tag::new(TagKind::Private, ""));
        true
    }

    /// Predicate-named methods return `Boolean` unless something else
    /// already declared a return type.
    fn predicate_rule(&mut self, id: MethodId) -> bool {
        let method = self.registry.method(id);
        if !method.is_predicate() {
            return false;
        }
        let return_types_empty = method
            .docstring
            .tag(TagKind::Return)
            .map(|tag| tag.types.is_empty());
        match return_types_empty {
            Some(true) => {
                if let Some(tag) = self
                    .registry
                    .method_mut(id)
                    .docstring
                    .tag_mut(TagKind::Return)
                {
                    tag.types = vec![SmolStr::new("Boolean")];
                }
            }
            Some(false) => {}
            None => {
                let declared_by_overload = method
                    .docstring
                    .tags(TagKind::Overload)
                    .any(|overload| overload.nested_tag(TagKind::Return).is_some());
                if !declared_by_overload {
                    self.registry
                        .method_mut(id)
                        .docstring
                        .add_tag(Tag::new(TagKind::Return, "").with_types(["Boolean"]));
                }
            }
        }
        true
    }

    /// Every `@option` tag whose parameter has no `@param` tag gets one
    /// synthesized options-hash parameter. Runs independently of the
    /// inference chain; pre-existing `@param`s are never duplicated.
    fn synthesize_option_params(&mut self, id: MethodId) {
        let method = self.registry.method(id);
        let mut missing: Vec<SmolStr> = Vec::new();
        for option in method.docstring.tags(TagKind::Option) {
            let Some(expected) = &option.name else {
                continue;
            };
            let covered = method
                .docstring
                .tags(TagKind::Param)
                .any(|param| param.name.as_ref() == Some(expected));
            if !covered && !missing.contains(expected) {
                missing.push(expected.clone());
            }
        }
        for name in missing {
            let tag = Tag::new(TagKind::Param, "a customizable set of options")
                .with_types(["Hash"])
                .with_name(name);
            self.registry.method_mut(id).docstring.add_tag(tag);
        }
    }

    /// Complete a reader/writer pair when this method supplies the
    /// missing half of a registered attribute.
    fn pair_attribute(&mut self, id: MethodId, owner: NamespaceId, scope: MethodScope) {
        let (attr, is_writer) = {
            let method = self.registry.method(id);
            (SmolStr::new(method.attr_name()), method.is_writer())
        };
        let namespace = self.registry.namespace_mut(owner);
        if let Some(info) = namespace.attributes.get_mut(&(scope, attr)) {
            if is_writer {
                if info.read.is_some() {
                    info.write = Some(id);
                }
            } else if info.write.is_some() && info.read.is_none() {
                info.read = Some(id);
            }
        }
    }
}
