//! Error types with rich diagnostics using miette
//!
//! The geometry itself never fails. These errors come out of the textual style
//! form accepted by [`Style::from_str`](crate::Style) and out of SVG document
//! serialization.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Name given to style strings in diagnostics
pub(crate) const STYLE_SOURCE_NAME: &str = "<style>";

/// Errors that occur while parsing a [`Style`](crate::Style) from text
#[derive(Error, Diagnostic, Debug)]
pub enum ParseStyleError {
    #[error("empty style")]
    #[diagnostic(
        code(squircle::style::empty),
        help("expected `circular`, `continuous`, `smooth` or `smooth(<factor>)`")
    )]
    Empty,

    #[error("unknown style: {name}")]
    #[diagnostic(
        code(squircle::style::unknown),
        help("expected `circular`, `continuous`, `smooth` or `smooth(<factor>)`")
    )]
    UnknownStyle {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a style")]
        span: SourceSpan,
    },

    #[error("invalid smoothness factor: {text}")]
    #[diagnostic(code(squircle::style::invalid_factor))]
    InvalidFactor {
        text: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("expected a number, optionally followed by `%`")]
        span: SourceSpan,
    },

    #[error("smoothness factor must be finite")]
    #[diagnostic(code(squircle::style::non_finite))]
    NonFiniteFactor {
        #[source_code]
        src: NamedSource<String>,
        #[label("this value is NaN or infinite")]
        span: SourceSpan,
    },

    #[error("unbalanced parentheses")]
    #[diagnostic(code(squircle::style::unbalanced))]
    Unbalanced {
        #[source_code]
        src: NamedSource<String>,
        #[label("missing `)`")]
        span: SourceSpan,
    },
}

/// Errors from writing SVG documents
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("XML serialization error: {0}")]
    #[diagnostic(code(squircle::svg::serialize))]
    Serialize(String),
}

/// Create a NamedSource for a style string
pub(crate) fn style_source(input: &str) -> NamedSource<String> {
    NamedSource::new(STYLE_SOURCE_NAME, input.to_string())
}
