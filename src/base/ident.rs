//! Identifier classification for method and constant names.
//!
//! Ruby distinguishes name kinds lexically: constants start with an
//! uppercase letter, method names may end in `?`, `!`, or `=`. The
//! resolver and the tag-inference rules both key off these shapes.

use unicode_ident::{is_xid_continue, is_xid_start};

/// True if `name` is a constant name: an uppercase XID-start character
/// followed by XID-continue characters (digits and `_` included).
///
/// A singleton definition receiver that fails this check is a local
/// variable or method call, and its owner cannot be determined statically.
pub fn is_constant_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_uppercase() && is_xid_start(first)) {
        return false;
    }
    chars.all(is_xid_continue)
}

/// True if `name` is a plain local/identifier name (lowercase or `_`
/// start, XID-continue rest).
pub fn is_local_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if first != '_' && !(first.is_lowercase() && is_xid_start(first)) {
        return false;
    }
    chars.all(is_xid_continue)
}

/// True for predicate method names (`empty?`, `valid?`).
pub fn is_predicate_name(name: &str) -> bool {
    name.ends_with('?')
}

/// True for attribute-writer method names (`name=`).
pub fn is_writer_name(name: &str) -> bool {
    name.ends_with('=')
}

/// The logical attribute name shared by a reader/writer pair: the method
/// name with a trailing `=` stripped.
pub fn attr_name(name: &str) -> &str {
    name.strip_suffix('=').unwrap_or(name)
}
