//! Method-definition syntax nodes.
//!
//! This is the closed node model the documentation core consumes. The
//! text parser that produces these nodes lives outside this crate; every
//! node kind the core reacts to is an exhaustively-matched variant here.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::{FileId, TextRange};
use crate::model::Docstring;

use super::params::ParamList;

/// The receiver of a singleton method definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Receiver {
    /// `def self.name`
    SelfRef,
    /// `def x.name` / `def Foo.name` — a bare identifier; whether it is a
    /// constant or a local is a lexical property of the name itself.
    Name(SmolStr),
    /// `def Foo::Bar.name` — an explicit constant path.
    Path(Vec<SmolStr>),
}

impl Receiver {
    /// Render the receiver as written.
    pub fn source(&self) -> String {
        match self {
            Receiver::SelfRef => "self".to_string(),
            Receiver::Name(name) => name.to_string(),
            Receiver::Path(segments) => segments.join("::"),
        }
    }
}

/// Whether a definition is an instance method or a singleton method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefKind {
    /// `def name`
    Instance,
    /// `def <receiver>.name`
    Singleton(Receiver),
}

impl DefKind {
    pub fn is_singleton(&self) -> bool {
        matches!(self, DefKind::Singleton(_))
    }
}

/// The body of a method definition.
///
/// Opaque to this core: it is handed as-is to the nested-scope visitor,
/// which discovers definitions nested lexically inside the method.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Body {
    /// Verbatim source of the body region.
    pub source: Arc<str>,
    /// Range of the body within its file.
    pub range: Option<TextRange>,
}

impl Body {
    pub fn new(source: impl Into<Arc<str>>, range: Option<TextRange>) -> Self {
        Self {
            source: source.into(),
            range,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.source.trim().is_empty()
    }
}

/// A parsed method definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDef {
    /// Instance or singleton, with the singleton receiver.
    pub kind: DefKind,
    /// The method name exactly as declared; may end in `?`, `!`, or `=`.
    pub name: SmolStr,
    /// The formal parameter list; `None` when declared without one.
    pub params: Option<ParamList>,
    /// The method body.
    pub body: Body,
    /// Docstring attached by the comment parser, tags already structured.
    pub docstring: Option<Docstring>,
    /// File containing the definition.
    pub file: FileId,
    /// Range of the whole definition.
    pub range: TextRange,
}

impl MethodDef {
    /// The singleton receiver, if this is a singleton definition.
    pub fn receiver(&self) -> Option<&Receiver> {
        match &self.kind {
            DefKind::Instance => None,
            DefKind::Singleton(recv) => Some(recv),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receiver_source() {
        assert_eq!(Receiver::SelfRef.source(), "self");
        assert_eq!(Receiver::Name("Foo".into()).source(), "Foo");
        assert_eq!(
            Receiver::Path(vec!["A".into(), "B".into()]).source(),
            "A::B"
        );
    }

    #[test]
    fn test_def_kind_singleton() {
        assert!(DefKind::Singleton(Receiver::SelfRef).is_singleton());
        assert!(!DefKind::Instance.is_singleton());
    }

    #[test]
    fn test_body_emptiness() {
        assert!(Body::default().is_empty());
        assert!(Body::new("  \n", None).is_empty());
        assert!(!Body::new("42", None).is_empty());
    }
}
