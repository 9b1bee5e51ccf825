use crate::package_listing::domain::{CompiledPattern, DialectPattern, PackageRecord, PackageSet};
use crate::shared::Result;

/// Outcome of parsing one block of list output, with diagnostics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    pub packages: PackageSet,
    /// Lines that contributed a package
    pub matched_lines: usize,
    /// Non-blank lines that did not match the pattern
    pub skipped_lines: usize,
    /// Names seen more than once, in the order their version was overridden
    pub overridden: Vec<String>,
}

/// PackageListParser - converts list command output into a PackageSet
///
/// Every line is matched on its own. Lines that do not match are not
/// errors: headers, summaries, and warnings are part of normal output.
pub struct PackageListParser;

impl PackageListParser {
    /// Compiles `pattern` and parses `output` with it
    ///
    /// # Errors
    /// Returns `FactsError::InvalidPattern` if the pattern does not compile.
    /// The output is never inspected in that case.
    pub fn parse(pattern: &DialectPattern, output: &str) -> Result<PackageSet> {
        let compiled = pattern.compile()?;
        Ok(Self::parse_compiled(&compiled, output))
    }

    /// Parses `output` with an already compiled pattern
    pub fn parse_compiled(pattern: &CompiledPattern, output: &str) -> PackageSet {
        Self::parse_with_report(pattern, output).packages
    }

    /// Parses `output`, keeping counts of matched and skipped lines
    pub fn parse_with_report(pattern: &CompiledPattern, output: &str) -> ParseReport {
        let mut report = ParseReport::default();

        for line in output.lines() {
            match Self::parse_line(pattern, line) {
                Some(record) => {
                    let name = record.name().to_string();
                    if report.packages.insert(record).is_some() {
                        report.overridden.push(name);
                    }
                    report.matched_lines += 1;
                }
                None if line.trim().is_empty() => {}
                None => report.skipped_lines += 1,
            }
        }

        report
    }

    fn parse_line(pattern: &CompiledPattern, line: &str) -> Option<PackageRecord> {
        let (name, version) = pattern.captures(line)?;
        let name = if pattern.lowercase_names() {
            name.to_lowercase()
        } else {
            name.to_string()
        };
        PackageRecord::new(name, version.to_string()).ok()
    }
}
