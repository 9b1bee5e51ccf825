use crate::application::dto::DialectDiff;
use crate::package_listing::domain::PackageSnapshot;
use crate::ports::outbound::SnapshotFormatter;
use crate::shared::Result;

/// Markdown table header for package information
const TABLE_HEADER: &str = "| Package | Version |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---------|---------|\n";

/// Markdown table header for differences
const DIFF_TABLE_HEADER: &str = "| Change | Package | Old Version | New Version |\n";

/// Markdown table separator line for differences
const DIFF_TABLE_SEPARATOR: &str = "|--------|---------|-------------|-------------|\n";

/// MarkdownFormatter adapter for human-readable package tables
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and line breaks for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|")
            .replace("\r\n", " ")
            .replace(['\r', '\n'], " ")
    }

    fn render_snapshot(&self, output: &mut String, snapshot: &PackageSnapshot) {
        output.push_str(&format!("## {}\n\n", snapshot.dialect));
        if let Some(directory) = &snapshot.directory {
            output.push_str(&format!("- Directory: `{}`\n", directory));
        }
        output.push_str(&format!("- Collected at: {}\n\n", snapshot.collected_at));

        if snapshot.packages.is_empty() {
            output.push_str("No packages reported.\n\n");
        } else {
            output.push_str(TABLE_HEADER);
            output.push_str(TABLE_SEPARATOR);
            for (name, version) in snapshot.packages.iter() {
                output.push_str(&format!(
                    "| {} | {} |\n",
                    Self::escape_markdown_table_cell(name),
                    Self::escape_markdown_table_cell(version)
                ));
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "_{} package(s), {} unrecognized line(s) skipped_\n\n",
            snapshot.packages.len(),
            snapshot.skipped_lines
        ));
    }

    fn render_diff(&self, output: &mut String, dialect_diff: &DialectDiff) {
        output.push_str(&format!("## {}\n\n", dialect_diff.dialect));

        let diff = &dialect_diff.diff;
        if diff.is_empty() {
            output.push_str("No changes.\n\n");
            return;
        }

        output.push_str(DIFF_TABLE_HEADER);
        output.push_str(DIFF_TABLE_SEPARATOR);
        for (name, version) in &diff.added {
            self.push_diff_row(output, "Added", name, "-", version);
        }
        for (name, version) in &diff.removed {
            self.push_diff_row(output, "Removed", name, version, "-");
        }
        for change in &diff.changed {
            self.push_diff_row(output, "Changed", &change.name, &change.from, &change.to);
        }
        output.push('\n');
    }

    fn push_diff_row(&self, output: &mut String, kind: &str, name: &str, old: &str, new: &str) {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            kind,
            Self::escape_markdown_table_cell(name),
            Self::escape_markdown_table_cell(old),
            Self::escape_markdown_table_cell(new)
        ));
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotFormatter for MarkdownFormatter {
    fn format_snapshots(&self, snapshots: &[PackageSnapshot]) -> Result<String> {
        let mut output = String::from("# Package Facts\n\n");
        for snapshot in snapshots {
            self.render_snapshot(&mut output, snapshot);
        }
        Ok(output)
    }

    fn format_diff(&self, diffs: &[DialectDiff]) -> Result<String> {
        let mut output = String::from("# Package Facts Diff\n\n");
        for diff in diffs {
            self.render_diff(&mut output, diff);
        }
        Ok(output)
    }
}
