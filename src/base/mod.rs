//! Foundation types for the documentation pass.
//!
//! - [`FileId`] - Source file handles
//! - [`TextRange`], [`TextSize`] - Source positions
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`ident`] - Lexical classification of names
//!
//! This module has NO dependencies on other rudoc modules.

pub mod ident;
mod source;

pub use source::{FileId, LineCol, LineIndex, TextRange, TextSize};
