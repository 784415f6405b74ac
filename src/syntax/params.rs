//! Parameter-list syntax nodes.
//!
//! A [`ParamList`] carries the formal parameters of a method definition,
//! split into the categories Ruby declares them in. Default expressions
//! are opaque source text; nothing here evaluates anything.

use std::sync::Arc;

use smol_str::SmolStr;

/// A single formal parameter as written in source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    /// The parameter name, without any `*`/`**`/`&` marker.
    pub name: SmolStr,
}

impl Param {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self { name: name.into() }
    }
}

/// An optional parameter: name plus the default expression's source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionalParam {
    pub name: SmolStr,
    /// Verbatim source of the default expression, e.g. `1` or `{}.freeze`.
    pub default: Arc<str>,
}

impl OptionalParam {
    pub fn new(name: impl Into<SmolStr>, default: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
        }
    }
}

/// A declared keyword parameter (`k:` or `k: expr`).
///
/// The name keeps its declared spelling including the trailing colon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordParam {
    pub name: SmolStr,
    pub default: Option<Arc<str>>,
}

impl KeywordParam {
    pub fn required(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    pub fn defaulted(name: impl Into<SmolStr>, default: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
        }
    }
}

/// The full formal parameter list of a method definition.
///
/// Categories absent from the source are empty/`None`. `source` is the
/// rendered text of the whole list, used verbatim in signatures.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParamList {
    /// Required leading parameters.
    pub required: Vec<Param>,
    /// Optional parameters with default expressions.
    pub optional: Vec<OptionalParam>,
    /// The single splat/rest parameter (`*rest`), if any.
    pub rest: Option<Param>,
    /// Declared keyword parameters (`k:`, `k: 1`).
    pub keywords: Vec<KeywordParam>,
    /// The single double-splat parameter (`**opts`), if any.
    pub keyword_rest: Option<Param>,
    /// Required parameters declared after the splat.
    pub trailing: Vec<Param>,
    /// The single block parameter (`&blk`), if any.
    pub block: Option<Param>,
    /// Verbatim source text of the list, without surrounding parentheses.
    pub source: Arc<str>,
}

impl ParamList {
    /// True when no category holds any parameter.
    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
            && self.optional.is_empty()
            && self.rest.is_none()
            && self.keywords.is_empty()
            && self.keyword_rest.is_none()
            && self.trailing.is_empty()
            && self.block.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_param_list() {
        let list = ParamList::default();
        assert!(list.is_empty());
    }

    #[test]
    fn test_any_category_makes_list_non_empty() {
        let list = ParamList {
            block: Some(Param::new("blk")),
            ..ParamList::default()
        };
        assert!(!list.is_empty());
    }
}
