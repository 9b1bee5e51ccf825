/// ListCommandBuilder - builds the shell command that lists packages
///
/// Pure string construction; nothing is executed here.
pub struct ListCommandBuilder;

impl ListCommandBuilder {
    /// Builds the list command, changing into `directory` first when one is given
    ///
    /// # Arguments
    /// * `base_command` - The dialect's list command (e.g., `npm list -g --depth=0`)
    /// * `directory` - Optional working directory; empty or whitespace-only means none
    ///
    /// # Returns
    /// `base_command` unchanged, or `cd <directory> && <base_command>`
    ///
    /// The directory is used verbatim; surrounding whitespace is part of the path.
    pub fn build(base_command: &str, directory: Option<&str>) -> String {
        match directory.filter(|d| !d.trim().is_empty()) {
            Some(dir) => format!("cd {} && {}", Self::quote(&Self::as_operand(dir)), base_command),
            None => base_command.to_string(),
        }
    }

    /// `cd` reads a leading `-` as an option (or `$OLDPWD`), so anchor it as `./-...`
    fn as_operand(dir: &str) -> String {
        if dir.starts_with('-') {
            format!("./{}", dir)
        } else {
            dir.to_string()
        }
    }

    /// Single-quotes a shell word unless every character is shell-safe
    fn quote(word: &str) -> String {
        let is_safe = |c: char| c.is_ascii_alphanumeric() || "_@%+=:,./-~".contains(c);
        if word.chars().all(is_safe) {
            return word.to_string();
        }
        format!("'{}'", word.replace('\'', r#"'"'"'"#))
    }
}
