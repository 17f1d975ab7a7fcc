//! # Block Kinds
//!
//! Each block kind owns its delimiters and line matchers. The classifier and
//! the segmenter call these; they never hardcode `#`, `>` or `|` themselves.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{BulletItem, OrderedItem};
pub use table::Table;
pub use thematic_break::ThematicBreak;
