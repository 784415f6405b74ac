//! Documentation tags and docstrings.
//!
//! Tags arrive already parsed — the docstring-tag parser is an external
//! collaborator. This module is the structured form the analysis core
//! reads, synthesizes, and rewrites.

use std::sync::Arc;

use smol_str::SmolStr;

/// The kind of a documentation tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `@return` — return value description and types.
    Return,
    /// `@param` — one formal parameter.
    Param,
    /// `@option` — one key of an options hash parameter.
    Option,
    /// `@overload` — an alternative signature with its own tag list.
    Overload,
    /// `@private` — excluded from public output.
    Private,
    /// `@raise` — an exception the method may raise.
    Raise,
    /// `@yield` — block invocation description.
    Yield,
    /// `@example` — usage example.
    Example,
    /// `@deprecated` — deprecation notice.
    Deprecated,
    /// `@see` — cross-reference.
    See,
}

impl TagKind {
    /// The tag name as written in source, without the `@`.
    pub fn name(&self) -> &'static str {
        match self {
            TagKind::Return => "return",
            TagKind::Param => "param",
            TagKind::Option => "option",
            TagKind::Overload => "overload",
            TagKind::Private => "private",
            TagKind::Raise => "raise",
            TagKind::Yield => "yield",
            TagKind::Example => "example",
            TagKind::Deprecated => "deprecated",
            TagKind::See => "see",
        }
    }
}

impl Default for TagKind {
    fn default() -> Self {
        TagKind::Return
    }
}

/// A structured documentation annotation.
///
/// `nested` carries the tag list of an `@overload` tag (an overload
/// declares a full alternative signature, return tag included); it is
/// empty for every other kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tag {
    pub kind: TagKind,
    /// Freeform label/description text.
    pub text: Arc<str>,
    /// Declared types, e.g. `["String", "nil"]`. May be empty.
    pub types: Vec<SmolStr>,
    /// Associated name: the parameter for `@param`/`@option`.
    pub name: Option<SmolStr>,
    /// Tags nested under this one (`@overload` only).
    pub nested: Vec<Tag>,
}

impl Tag {
    /// A tag with text only.
    pub fn new(kind: TagKind, text: impl Into<Arc<str>>) -> Self {
        Self {
            kind,
            text: text.into(),
            types: Vec::new(),
            name: None,
            nested: Vec::new(),
        }
    }

    /// Attach declared types.
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Attach an associated name.
    pub fn with_name(mut self, name: impl Into<SmolStr>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a nested tag (for `@overload`).
    pub fn with_nested(mut self, tag: Tag) -> Self {
        self.nested.push(tag);
        self
    }

    /// First nested tag of the given kind.
    pub fn nested_tag(&self, kind: TagKind) -> Option<&Tag> {
        self.nested.iter().find(|t| t.kind == kind)
    }
}

/// A docstring: freeform text plus its ordered tag list.
///
/// Tags are not unique by kind — several `@param` tags coexist in
/// declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Docstring {
    pub text: Arc<str>,
    tags: Vec<Tag>,
}

impl Docstring {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self {
            text: text.into(),
            tags: Vec::new(),
        }
    }

    /// Builder-style tag attachment.
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// True when there is neither text nor any tag.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty() && self.tags.is_empty()
    }

    /// Whether any tag of `kind` exists.
    pub fn has_tag(&self, kind: TagKind) -> bool {
        self.tags.iter().any(|t| t.kind == kind)
    }

    /// First tag of `kind`, if any.
    pub fn tag(&self, kind: TagKind) -> Option<&Tag> {
        self.tags.iter().find(|t| t.kind == kind)
    }

    /// Mutable access to the first tag of `kind`.
    pub fn tag_mut(&mut self, kind: TagKind) -> Option<&mut Tag> {
        self.tags.iter_mut().find(|t| t.kind == kind)
    }

    /// All tags of `kind`, in declaration order.
    pub fn tags(&self, kind: TagKind) -> impl Iterator<Item = &Tag> {
        self.tags.iter().filter(move |t| t.kind == kind)
    }

    /// Every tag, in declaration order.
    pub fn all_tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Append a tag.
    pub fn add_tag(&mut self, tag: Tag) {
        self.tags.push(tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_docstring() {
        assert!(Docstring::default().is_blank());
        assert!(Docstring::new("   ").is_blank());
        assert!(!Docstring::new("does a thing").is_blank());
        assert!(
            !Docstring::default()
                .with_tag(Tag::new(TagKind::Private, ""))
                .is_blank()
        );
    }

    #[test]
    fn test_tag_lookup_order() {
        let mut doc = Docstring::new("");
        doc.add_tag(Tag::new(TagKind::Param, "first").with_name("a"));
        doc.add_tag(Tag::new(TagKind::Param, "second").with_name("b"));
        doc.add_tag(Tag::new(TagKind::Return, "result"));

        assert!(doc.has_tag(TagKind::Param));
        assert_eq!(doc.tag(TagKind::Param).unwrap().text.as_ref(), "first");
        assert_eq!(doc.tags(TagKind::Param).count(), 2);
        assert_eq!(doc.tags(TagKind::Option).count(), 0);
    }

    #[test]
    fn test_tag_mut_rewrites_types() {
        let mut doc = Docstring::new("").with_tag(Tag::new(TagKind::Return, "ok"));
        doc.tag_mut(TagKind::Return).unwrap().types = vec!["Boolean".into()];
        assert_eq!(
            doc.tag(TagKind::Return).unwrap().types,
            vec![smol_str::SmolStr::new("Boolean")]
        );
    }

    #[test]
    fn test_overload_nested_return() {
        let overload = Tag::new(TagKind::Overload, "check(value)")
            .with_nested(Tag::new(TagKind::Return, "").with_types(["Boolean"]));
        assert!(overload.nested_tag(TagKind::Return).is_some());
        assert!(overload.nested_tag(TagKind::Param).is_none());
    }

    #[test]
    fn test_tag_kind_names() {
        assert_eq!(TagKind::Return.name(), "return");
        assert_eq!(TagKind::Option.name(), "option");
    }
}
