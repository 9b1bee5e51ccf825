use crate::package_listing::services::ListCommandBuilder;
use crate::shared::error::FactsError;
use crate::shared::Result;
use regex::Regex;

/// Named capture group holding the package name
const NAME_GROUP: &str = "name";

/// Named capture group holding the package version
const VERSION_GROUP: &str = "version";

/// Uncompiled line-matching rule for one package manager's list output
///
/// The pattern either names its groups `name` and `version`, or captures
/// the name in group 1 and the version in group 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectPattern {
    dialect: String,
    source: String,
    lowercase_names: bool,
}

impl DialectPattern {
    pub fn new(dialect: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            dialect: dialect.into(),
            source: source.into(),
            lowercase_names: false,
        }
    }

    /// Lowercases captured names, for package managers whose names are case-insensitive
    pub fn with_lowercase_names(mut self, lowercase_names: bool) -> Self {
        self.lowercase_names = lowercase_names;
        self
    }

    pub fn dialect(&self) -> &str {
        &self.dialect
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn lowercase_names(&self) -> bool {
        self.lowercase_names
    }

    /// Compiles the pattern
    ///
    /// # Errors
    /// Returns `FactsError::InvalidPattern` naming this dialect if the
    /// expression does not compile or does not expose a name and a version group.
    pub fn compile(&self) -> Result<CompiledPattern> {
        let regex = Regex::new(&self.source).map_err(|e| self.invalid(e.to_string()))?;

        let has_group = |wanted: &str| regex.capture_names().flatten().any(|g| g == wanted);

        let groups = if has_group(NAME_GROUP) && has_group(VERSION_GROUP) {
            CaptureGroups::Named
        } else if regex.captures_len() >= 3 {
            CaptureGroups::Positional
        } else {
            return Err(self.invalid(format!(
                "pattern captures {} group(s); a name group and a version group are required",
                regex.captures_len().saturating_sub(1)
            )));
        };

        Ok(CompiledPattern {
            dialect: self.dialect.clone(),
            regex,
            groups,
            lowercase_names: self.lowercase_names,
        })
    }

    fn invalid(&self, details: String) -> anyhow::Error {
        FactsError::InvalidPattern {
            dialect: self.dialect.clone(),
            details,
        }
        .into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureGroups {
    Named,
    Positional,
}

/// A dialect pattern that compiled successfully
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    dialect: String,
    regex: Regex,
    groups: CaptureGroups,
    lowercase_names: bool,
}

impl CompiledPattern {
    pub fn dialect(&self) -> &str {
        &self.dialect
    }

    /// Matches a single line, returning the raw `(name, version)` captures
    ///
    /// Returns `None` when the line does not match or either capture
    /// did not participate in the match.
    pub fn captures<'l>(&self, line: &'l str) -> Option<(&'l str, &'l str)> {
        let caps = self.regex.captures(line)?;
        let (name, version) = match self.groups {
            CaptureGroups::Named => (caps.name(NAME_GROUP)?, caps.name(VERSION_GROUP)?),
            CaptureGroups::Positional => (caps.get(1)?, caps.get(2)?),
        };
        Some((name.as_str(), version.as_str()))
    }

    pub fn lowercase_names(&self) -> bool {
        self.lowercase_names
    }
}

/// A package manager the tool knows how to list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingDialect {
    id: String,
    list_command: String,
    pattern: DialectPattern,
    description: String,
}

impl ListingDialect {
    pub fn new(
        id: impl Into<String>,
        list_command: impl Into<String>,
        pattern_source: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let id = id.into();
        Self {
            pattern: DialectPattern::new(id.clone(), pattern_source),
            id,
            list_command: list_command.into(),
            description: description.into(),
        }
    }

    pub fn with_lowercase_names(mut self, lowercase_names: bool) -> Self {
        self.pattern = self.pattern.with_lowercase_names(lowercase_names);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn base_command(&self) -> &str {
        &self.list_command
    }

    pub fn pattern(&self) -> &DialectPattern {
        &self.pattern
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Shell command listing this dialect's packages, optionally inside `directory`
    pub fn list_command(&self, directory: Option<&str>) -> String {
        ListCommandBuilder::build(&self.list_command, directory)
    }
}
