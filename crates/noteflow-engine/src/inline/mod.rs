//! # Inline Markup
//!
//! Regex-driven cascading substitution over a single line of text.
//!
//! ## Architecture
//!
//! Inline processing runs after block segmentation, on the text of one heading,
//! paragraph line, list item, quote line or table cell at a time. Both
//! renderers share a single ordered rule table (`rules`); what each construct
//! turns into is supplied by an [`InlineFlavor`] (`flavor`).
//!
//! ## Rule Order
//!
//! Each rule is applied across the whole segment before the next one runs:
//!
//! 1. inline code
//! 2. bold-italic `***x***`
//! 3. bold `**x**`, `__x__`
//! 4. italic `*x*`, `_x_`
//! 5. strikethrough `~~x~~`
//! 6. wiki links `[[target]]`, `[[target|alias]]`
//! 7. images `![alt](url)`
//! 8. links `[text](url)`
//!
//! The order is part of the contract. Code spans are substituted before any
//! emphasis delimiter is looked at, and images must be consumed before the
//! generic link rule sees their `[alt](url)` tail.

pub mod flavor;
pub mod rules;

pub use flavor::{HtmlInline, InlineFlavor, PlainInline, escape_html};
pub use rules::process_inline;
