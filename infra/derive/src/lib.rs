#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared across the workspace.
//! Today this is the error-enum attribute used by every crate that can fail.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! capgate-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into a workspace error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and for
///   `Result<T, SourceError>` of every variant holding a source.
/// * `From<SourceError>` for variants with a source field.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant is present.
/// * `kind()` returning the variant name, for reporting.
/// * A module-level `format_context` helper for display strings, so keep one error enum per module.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. Context-carrying variants use a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping another error name the field `source` (or mark it `#[source]`/`#[from]`)
///    and must also carry a context field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[capgate_derive::capgate_error]
/// pub enum VersionError {
///     #[error("Unparsable release version{}: {source}", format_context(.context))]
///     Parse { source: semver::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal version error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(raw: &str) -> Result<semver::Version, VersionError> {
///     semver::Version::parse(raw).context("Parsing the cluster release")
/// }
/// ```
#[proc_macro_attribute]
pub fn capgate_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
