//! Documentation model — entities, tags, and the registry that owns them.
//!
//! Entities are arena-allocated in a [`Registry`] and addressed by typed
//! ids. A [`MethodEntity`] is unique per (owner, name, scope); alias and
//! attribute records live on the owning [`NamespaceEntity`].

mod entity;
mod ids;
mod registry;
mod tags;

pub use entity::{
    AttrInfo, DocParam, MethodEntity, MethodScope, NamespaceEntity, NamespaceKind, Visibility,
};
pub use ids::{MethodId, NamespaceId};
pub use registry::Registry;
pub use tags::{Docstring, Tag, TagKind};
