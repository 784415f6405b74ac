//! Semantic analysis — turning definition nodes into documentation
//! entities.
//!
//! [`MethodSynthesizer`] is the orchestrator; [`PathResolver`] maps
//! receivers to owning namespaces, `params` converts parameter nodes to
//! documentation pairs, and [`NestedVisitor`] is the hand-off point for
//! traversing method bodies.

mod error;
mod method;
mod params;
mod resolve;
mod scope;

pub use error::SemaError;
pub use method::{MethodSynthesizer, SynthesisContext};
pub use params::{extract_params, local_names, method_signature};
pub use resolve::PathResolver;
pub use scope::{BlockContext, LexicalScope, NestedVisitor, NullVisitor, SelfBinding};
