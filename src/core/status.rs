//! Status artifact rendering.
//!
//! Renders a sync report as a Markdown table and splices it into a status
//! file between marker comments, appending the block when the markers are
//! absent. The caller decides whether an update is allowed at all; the
//! policy is that only clean live runs ever reach the artifact.

use std::path::Path;

use crate::core::report::SyncReport;
use crate::error::Result;

pub const MARKER_START: &str = "<!-- fanout:status:start -->";
pub const MARKER_END: &str = "<!-- fanout:status:end -->";

/// Render the report as a Markdown status block (without markers).
pub fn render(report: &SyncReport) -> String {
    let mut out = format!(
        "Last sync: {} ({} of {} items)\n\n",
        report.timestamp.format("%Y-%m-%d %H:%M UTC"),
        report.success_count,
        report.total_count,
    );

    out.push_str("| Target | Name | Kind | Status |\n");
    out.push_str("|--------|------|------|--------|\n");
    for outcome in &report.outcomes {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            outcome.target_identifier,
            outcome.name,
            outcome.kind,
            if outcome.succeeded { "✓" } else { "✗" },
        ));
    }

    out
}

/// Write the status block into `path`, replacing an existing marker pair or
/// appending one. Creates the file when missing.
pub fn update_file(path: &Path, report: &SyncReport) -> Result<()> {
    let existing = if path.exists() {
        std::fs::read_to_string(path)?
    } else {
        String::new()
    };

    let block = format!("{MARKER_START}\n{}{MARKER_END}", render(report));

    let updated = match (existing.find(MARKER_START), existing.find(MARKER_END)) {
        (Some(start), Some(end)) if end >= start => {
            let after = end + MARKER_END.len();
            format!("{}{}{}", &existing[..start], block, &existing[after..])
        }
        _ => {
            let mut out = existing;
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&block);
            out.push('\n');
            out
        }
    };

    std::fs::write(path, updated)?;
    Ok(())
}
