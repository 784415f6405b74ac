//! Parameter extraction and signature rendering.
//!
//! Purely syntactic: default expressions stay verbatim source text and
//! are never evaluated.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::model::DocParam;
use crate::syntax::ParamList;

/// Convert a parameter-list node into ordered documentation pairs.
///
/// Emission order: required-leading, optional (with default source),
/// `*`-prefixed splat, declared keyword parameters, `**`-prefixed
/// double-splat, required-trailing, `&`-prefixed block parameter.
/// Keyword parameters keep their declared `k:` spelling; defaulted ones
/// carry the default source like optionals.
pub fn extract_params(params: Option<&ParamList>) -> Vec<DocParam> {
    let Some(args) = params else {
        return Vec::new();
    };
    let mut pairs = Vec::new();
    for p in &args.required {
        pairs.push(DocParam::new(p.name.clone(), None));
    }
    for p in &args.optional {
        pairs.push(DocParam::new(p.name.clone(), Some(p.default.clone())));
    }
    if let Some(rest) = &args.rest {
        pairs.push(DocParam::new(format!("*{}", rest.name), None));
    }
    for p in &args.keywords {
        pairs.push(DocParam::new(p.name.clone(), p.default.clone()));
    }
    if let Some(kwrest) = &args.keyword_rest {
        pairs.push(DocParam::new(format!("**{}", kwrest.name), None));
    }
    for p in &args.trailing {
        pairs.push(DocParam::new(p.name.clone(), None));
    }
    if let Some(block) = &args.block {
        pairs.push(DocParam::new(format!("&{}", block.name), None));
    }
    pairs
}

/// The local names a parameter list binds inside the method body:
/// marker prefixes are absent and keyword spellings lose the trailing
/// colon.
pub fn local_names(params: &ParamList) -> Vec<SmolStr> {
    let mut names = Vec::new();
    names.extend(params.required.iter().map(|p| p.name.clone()));
    names.extend(params.optional.iter().map(|p| p.name.clone()));
    names.extend(params.rest.iter().map(|p| p.name.clone()));
    names.extend(
        params
            .keywords
            .iter()
            .map(|p| SmolStr::new(p.name.trim_end_matches(':'))),
    );
    names.extend(params.keyword_rest.iter().map(|p| p.name.clone()));
    names.extend(params.trailing.iter().map(|p| p.name.clone()));
    names.extend(params.block.iter().map(|p| p.name.clone()));
    names
}

/// Render the canonical signature for a method definition.
pub fn method_signature(name: &str, params: Option<&ParamList>) -> Arc<str> {
    match params {
        Some(args) if !args.is_empty() => Arc::from(format!("def {}({})", name, args.source)),
        _ => Arc::from(format!("def {name}")),
    }
}
