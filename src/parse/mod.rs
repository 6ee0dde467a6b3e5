//! Line-oriented parsers for the three input sources.
//!
//! Each source has exactly one recognized line shape, matched with an
//! anchored regex; everything else on a line is either silently skipped
//! (unrelated definitions) or diagnosed, per source. Parsers never fail:
//! they return whatever they could extract plus diagnostics.

pub mod catalog;
pub mod declarations;
pub mod tables;

pub use catalog::parse_catalog;
pub use declarations::parse_declarations;
pub use tables::parse_tables;
