//! Feedback report output
//!
//! Writes the generated feedback to a plain text file under a fixed banner.

mod writer;

pub use writer::{render_report, write_report, BANNER_WIDTH, DEFAULT_REPORT_FILE, REPORT_TITLE};
