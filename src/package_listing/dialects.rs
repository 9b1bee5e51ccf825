use crate::package_listing::domain::ListingDialect;
use crate::shared::error::FactsError;
use crate::shared::Result;
use std::collections::BTreeMap;

/// `npm list` tree lines: `├── name@version` / `└── name@version`
pub const NPM_PATTERN: &str = r"^[└├]──\s*([a-zA-Z0-9-]+)@([0-9.]+)$";

/// `pip freeze` lines: `name==version`
pub const PIP_PATTERN: &str = r"^([a-zA-Z0-9_.+-]+)==([0-9A-Za-z.+!-]+)$";

/// `gem list` lines: `name (version[, older versions])`, default gems included
pub const GEM_PATTERN: &str = r"^([a-zA-Z0-9_.+-]+) \((?:default: )?([0-9A-Za-z.]+)[^)]*\)$";

/// `dpkg -l` rows for installed packages, architecture suffix dropped from the name
pub const DEB_PATTERN: &str = r"^ii\s+([a-zA-Z0-9+.-]+)(?::[a-z0-9]+)?\s+(\S+)";

/// `rpm -qa --queryformat '%{NAME} %{VERSION}-%{RELEASE}\n'` lines
pub const RPM_PATTERN: &str = r"^(\S+) (\S+)$";

/// `brew list --versions` lines: `name version [older versions]`
pub const BREW_PATTERN: &str = r"^([a-zA-Z0-9@+._-]+) (\S+)";

/// Set of dialects available to the tool, keyed by id
#[derive(Debug, Clone)]
pub struct DialectRegistry {
    dialects: BTreeMap<String, ListingDialect>,
}

impl DialectRegistry {
    /// Registry containing only the built-in dialects
    pub fn builtin() -> Self {
        let builtins = vec![
            ListingDialect::new(
                "npm",
                "npm list -g --depth=0",
                NPM_PATTERN,
                "Globally installed npm packages",
            ),
            ListingDialect::new("pip", "pip freeze", PIP_PATTERN, "Installed Python packages")
                .with_lowercase_names(true),
            ListingDialect::new("gem", "gem list --local", GEM_PATTERN, "Installed Ruby gems"),
            ListingDialect::new("deb", "dpkg -l", DEB_PATTERN, "Installed Debian packages"),
            ListingDialect::new(
                "rpm",
                r"rpm -qa --queryformat '%{NAME} %{VERSION}-%{RELEASE}\n'",
                RPM_PATTERN,
                "Installed RPM packages",
            ),
            ListingDialect::new(
                "brew",
                "brew list --versions",
                BREW_PATTERN,
                "Installed Homebrew formulae",
            ),
        ];

        Self {
            dialects: builtins
                .into_iter()
                .map(|d| (d.id().to_string(), d))
                .collect(),
        }
    }

    /// Adds dialects, replacing built-ins that share an id
    pub fn with_custom(mut self, custom: impl IntoIterator<Item = ListingDialect>) -> Self {
        for dialect in custom {
            self.dialects.insert(dialect.id().to_string(), dialect);
        }
        self
    }

    /// Looks up a dialect by id
    ///
    /// # Errors
    /// Returns `FactsError::UnknownDialect` listing the known ids
    pub fn get(&self, id: &str) -> Result<&ListingDialect> {
        self.dialects.get(id).ok_or_else(|| {
            FactsError::UnknownDialect {
                dialect: id.to_string(),
                available: self.ids().join(", "),
            }
            .into()
        })
    }

    /// Known dialect ids in sorted order
    pub fn ids(&self) -> Vec<&str> {
        self.dialects.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ListingDialect> {
        self.dialects.values()
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
