//! Output emitters.
//!
//! Both emitters are pure renderers over the grouped associations: they
//! take the grouper's ordering as-is and produce the full artifact text.
//! Writing to disk is the driver's job.

pub mod report;
pub mod table;

pub use report::render_report;
pub use table::render_table;
