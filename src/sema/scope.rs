//! Lexical scopes and the nested-block visitor contract.

use std::sync::Arc;

use indexmap::IndexSet;
use smol_str::SmolStr;

use crate::model::{MethodId, NamespaceId};
use crate::syntax::Body;

/// What `self` refers to inside a block.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelfBinding {
    Instance,
    Class,
}

/// A chain of named lexical scopes with local-name bindings.
///
/// Each method body gets a scope keyed by the method's qualified path,
/// chained to the scope of the enclosing block; its explicit parameters
/// are bound as locals.
#[derive(Clone, Debug, Default)]
pub struct LexicalScope {
    /// The qualified name this scope is keyed by.
    name: Arc<str>,
    /// Locals bound in this scope, in binding order.
    locals: IndexSet<SmolStr>,
    /// Enclosing scope for nested lookups.
    parent: Option<Arc<LexicalScope>>,
}

impl LexicalScope {
    /// A root scope with no parent.
    pub fn root() -> Self {
        Self::default()
    }

    /// A child scope keyed by `name`.
    pub fn child(parent: Arc<LexicalScope>, name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            locals: IndexSet::new(),
            parent: Some(parent),
        }
    }

    /// The qualified name this scope is keyed by.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bind a local name in this scope.
    pub fn bind(&mut self, name: impl Into<SmolStr>) {
        self.locals.insert(name.into());
    }

    /// True if `name` is bound in this scope or any enclosing scope.
    pub fn is_local(&self, name: &str) -> bool {
        if self.locals.contains(name) {
            return true;
        }
        match &self.parent {
            Some(parent) => parent.is_local(name),
            None => false,
        }
    }

    /// Locals bound directly in this scope, in binding order.
    pub fn locals(&self) -> impl Iterator<Item = &SmolStr> {
        self.locals.iter()
    }
}

/// Context handed to the nested-scope visitor along with a method body.
#[derive(Clone, Debug)]
pub struct BlockContext {
    /// The method entity the body belongs to.
    pub owner: MethodId,
    /// The namespace the method was registered under.
    pub namespace: NamespaceId,
    /// What `self` is bound to inside the body.
    pub self_binding: SelfBinding,
    /// The body's lexical scope, parameters bound.
    pub lexical_scope: Arc<LexicalScope>,
}

/// Visits a method body to build entities nested lexically inside it
/// (yield documentation, exception documentation, nested definitions).
///
/// Fire-and-forget: the synthesizer consumes no return value.
pub trait NestedVisitor {
    fn visit(&mut self, body: &Body, ctx: BlockContext);
}

/// A visitor that traverses nothing.
#[derive(Debug, Default)]
pub struct NullVisitor;

impl NestedVisitor for NullVisitor {
    fn visit(&mut self, _body: &Body, _ctx: BlockContext) {}
}
