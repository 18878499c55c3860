//! Default presentation collaborators
//!
//! Implementations of the formatter's `Translator`, `UrlBuilder` and
//! `Escaper` ports used unless the caller supplies its own.

mod catalog;
mod escape;
mod urls;

pub use catalog::StringCatalog;
pub use escape::HtmlEscaper;
pub use urls::PathUrlBuilder;
