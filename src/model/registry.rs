//! The entity registry.
//!
//! A single arena owns every documentation entity produced by a pass.
//! Entities are addressed by typed ids; lookup maps key namespaces by
//! qualified path and methods by (owner, name, scope). The registry is
//! passed explicitly through the traversal — there is no process-global
//! state — and nothing is ever deleted: entities live for the whole pass.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::entity::{MethodEntity, MethodScope, NamespaceEntity, NamespaceKind};
use super::ids::{MethodId, NamespaceId};

/// Process-wide store of documentation entities for one analysis pass.
#[derive(Debug)]
pub struct Registry {
    /// The single source of truth for all namespaces.
    namespaces: Vec<NamespaceEntity>,
    /// The single source of truth for all methods, in creation order.
    methods: Vec<MethodEntity>,
    /// Qualified path → namespace.
    namespace_paths: FxHashMap<Arc<str>, NamespaceId>,
    /// (owner, name, scope) → method.
    method_keys: FxHashMap<(NamespaceId, SmolStr, MethodScope), MethodId>,
    root: NamespaceId,
}

impl Registry {
    /// Create a registry holding only the root namespace.
    pub fn new() -> Self {
        let root = NamespaceEntity {
            id: NamespaceId::new(0),
            parent: None,
            name: SmolStr::default(),
            path: Arc::from(""),
            kind: NamespaceKind::Module,
            value: None,
            aliases: IndexMap::new(),
            attributes: IndexMap::new(),
            explicit: true,
        };
        let mut namespace_paths = FxHashMap::default();
        namespace_paths.insert(root.path.clone(), root.id);
        Self {
            namespaces: vec![root],
            methods: Vec::new(),
            namespace_paths,
            method_keys: FxHashMap::default(),
            root: NamespaceId::new(0),
        }
    }

    /// The root namespace.
    pub fn root(&self) -> NamespaceId {
        self.root
    }

    pub fn namespace(&self, id: NamespaceId) -> &NamespaceEntity {
        &self.namespaces[id.index()]
    }

    pub fn namespace_mut(&mut self, id: NamespaceId) -> &mut NamespaceEntity {
        &mut self.namespaces[id.index()]
    }

    pub fn method(&self, id: MethodId) -> &MethodEntity {
        &self.methods[id.index()]
    }

    pub fn method_mut(&mut self, id: MethodId) -> &mut MethodEntity {
        &mut self.methods[id.index()]
    }

    /// Look up a direct child namespace by simple name.
    pub fn lookup_namespace(&self, parent: NamespaceId, name: &str) -> Option<NamespaceId> {
        let path = self.child_path(parent, name);
        self.namespace_paths.get(path.as_str()).copied()
    }

    /// Look up a namespace by its full qualified path.
    pub fn lookup_namespace_path(&self, path: &str) -> Option<NamespaceId> {
        self.namespace_paths.get(path).copied()
    }

    /// Find or create a child namespace. An existing entity is marked
    /// explicit and upgraded from `Module` to `Class` when a concrete
    /// class definition arrives; it is never downgraded.
    pub fn define_namespace(
        &mut self,
        parent: NamespaceId,
        name: &str,
        kind: NamespaceKind,
    ) -> NamespaceId {
        let id = self.intern_namespace(parent, name, kind);
        let ns = self.namespace_mut(id);
        ns.explicit = true;
        if ns.kind == NamespaceKind::Module && kind == NamespaceKind::Class {
            ns.kind = NamespaceKind::Class;
        }
        id
    }

    /// Create a forward-reference namespace: it exists only because
    /// something pointed at it.
    pub fn reference_namespace(&mut self, parent: NamespaceId, name: &str) -> NamespaceId {
        self.intern_namespace(parent, name, NamespaceKind::Module)
    }

    /// Find or create a constant-alias entity renaming `value`.
    pub fn define_constant(
        &mut self,
        parent: NamespaceId,
        name: &str,
        value: impl Into<Arc<str>>,
    ) -> NamespaceId {
        let id = self.intern_namespace(parent, name, NamespaceKind::Constant);
        let ns = self.namespace_mut(id);
        ns.kind = NamespaceKind::Constant;
        ns.value = Some(value.into());
        ns.explicit = true;
        id
    }

    fn intern_namespace(
        &mut self,
        parent: NamespaceId,
        name: &str,
        kind: NamespaceKind,
    ) -> NamespaceId {
        let path: Arc<str> = Arc::from(self.child_path(parent, name).as_str());
        if let Some(&id) = self.namespace_paths.get(&path) {
            return id;
        }
        let id = NamespaceId::new(self.namespaces.len() as u32);
        self.namespaces.push(NamespaceEntity {
            id,
            parent: Some(parent),
            name: SmolStr::new(name),
            path: path.clone(),
            kind,
            value: None,
            aliases: IndexMap::new(),
            attributes: IndexMap::new(),
            explicit: false,
        });
        self.namespace_paths.insert(path, id);
        id
    }

    fn child_path(&self, parent: NamespaceId, name: &str) -> String {
        let parent_path = &self.namespace(parent).path;
        if parent_path.is_empty() {
            name.to_string()
        } else {
            format!("{parent_path}::{name}")
        }
    }

    /// Find an existing method entity.
    pub fn find_method(
        &self,
        owner: NamespaceId,
        name: &str,
        scope: MethodScope,
    ) -> Option<MethodId> {
        self.method_keys
            .get(&(owner, SmolStr::new(name), scope))
            .copied()
    }

    /// Idempotent upsert: the entity for (owner, name, scope) is unique,
    /// and reprocessing the same definition returns the existing id.
    pub fn find_or_create_method(
        &mut self,
        owner: NamespaceId,
        name: &str,
        scope: MethodScope,
    ) -> MethodId {
        let key = (owner, SmolStr::new(name), scope);
        if let Some(&id) = self.method_keys.get(&key) {
            return id;
        }
        let id = MethodId::new(self.methods.len() as u32);
        self.methods
            .push(MethodEntity::new(id, owner, key.1.clone(), scope));
        self.method_keys.insert(key, id);
        id
    }

    /// The reader/writer pair a method belongs to, if its owner has the
    /// logical attribute registered.
    pub fn method_attr_info(&self, id: MethodId) -> Option<super::entity::AttrInfo> {
        let method = self.method(id);
        self.namespace(method.owner)
            .attr_info(method.scope, method.attr_name())
    }

    /// Qualified path of a method: `Owner::Path#name` for instance
    /// methods, `Owner::Path.name` for class methods.
    pub fn method_path(&self, id: MethodId) -> String {
        let method = self.method(id);
        let owner = self.namespace(method.owner);
        format!("{}{}{}", owner.path, method.scope.separator(), method.name)
    }

    /// All method entities, in creation order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodEntity> {
        self.methods.iter()
    }

    /// All namespace entities, in creation order.
    pub fn namespaces(&self) -> impl Iterator<Item = &NamespaceEntity> {
        self.namespaces.iter()
    }

    /// Number of method entities.
    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    /// True when no method has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
