//! # rudoc-base
//!
//! Core library for extracting structured documentation metadata from
//! parsed Ruby method definitions.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! sema    → Method synthesis: owner resolution, tag inference
//!   ↓
//! model   → Documentation entities, tags, registry
//!   ↓
//! syntax  → Method-definition syntax nodes consumed by this core
//!   ↓
//! base    → Primitives (FileId, spans, identifier classification)
//! ```
//!
//! The entry point is [`sema::MethodSynthesizer`]: given a parsed
//! [`syntax::MethodDef`], it upserts a [`model::MethodEntity`] into the
//! [`model::Registry`], applies tag inference, and hands the method body
//! to a [`sema::NestedVisitor`] for nested traversal.

/// Foundation types: FileId, spans, identifier classification
pub mod base;

/// Syntax nodes for method definitions
pub mod syntax;

/// Documentation model: entities, tags, registry
pub mod model;

/// Semantic analysis: method synthesis and tag inference
pub mod sema;

// Re-export the types most callers touch
pub use base::{FileId, LineCol, LineIndex, TextRange, TextSize};
pub use model::{MethodEntity, MethodId, MethodScope, NamespaceEntity, NamespaceId, Registry};
pub use sema::{MethodSynthesizer, SemaError, SynthesisContext};
