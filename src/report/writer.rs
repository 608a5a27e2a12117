use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Default file name for saved feedback.
pub const DEFAULT_REPORT_FILE: &str = "negotiation_feedback.txt";

/// Title line of the report banner.
pub const REPORT_TITLE: &str = "NEGOTIATION FEEDBACK ANALYSIS";

/// Width of the `=` rules around the title.
pub const BANNER_WIDTH: usize = 60;

/// Render the full report: banner, blank line, feedback verbatim, trailing newline.
pub fn render_report(feedback: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("{rule}\n{REPORT_TITLE}\n{rule}\n\n{feedback}\n")
}

/// Write the report to `path`, replacing any existing file.
pub fn write_report(path: &Path, feedback: &str) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(render_report(feedback).as_bytes())?;
    writer.flush()
}
