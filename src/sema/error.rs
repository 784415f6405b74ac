//! Recoverable per-node analysis failures.

use std::sync::Arc;

use smol_str::SmolStr;
use thiserror::Error;

/// A condition that aborts processing of one definition node without
/// aborting the pass. Callers catch these at the per-node boundary, skip
/// the node, and continue; the registry is left untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SemaError {
    /// The receiver of a singleton definition is a local variable or other
    /// non-constant expression, so the method's true owner cannot be
    /// determined statically.
    #[error("method defined on object instance `{receiver}`")]
    Undocumentable { receiver: SmolStr },

    /// Constant-alias dereferencing revisited an entity: the alias chain
    /// is cyclic and has no terminal namespace.
    #[error("constant alias cycle while resolving `{path}`")]
    CyclicAlias { path: Arc<str> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SemaError::Undocumentable {
            receiver: "obj".into(),
        };
        assert_eq!(err.to_string(), "method defined on object instance `obj`");

        let err = SemaError::CyclicAlias {
            path: Arc::from("A::B"),
        };
        assert_eq!(err.to_string(), "constant alias cycle while resolving `A::B`");
    }
}
