/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use pkgfacts::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture(name: &str) -> String {
    fixtures_path().join(name).to_string_lossy().to_string()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("pkgfacts").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("pkgfacts")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("pkgfacts")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("pkgfacts")
            .args(["-f", "invalid_format", "dialects"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid format"));
    }

    /// Exit code 3: Application error - unknown dialect
    #[test]
    fn test_exit_code_unknown_dialect() {
        cargo_bin_cmd!("pkgfacts")
            .args(["command", "-d", "cargo"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Unknown dialect: 'cargo'"))
            .stderr(predicate::str::contains("npm"));
    }

    /// Exit code 3: Application error - missing input file
    #[test]
    fn test_exit_code_missing_input() {
        cargo_bin_cmd!("pkgfacts")
            .args(["parse", "-d", "npm", "-i", "/nonexistent/npm_list.txt"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read file"));
    }

    /// Exit code 1: diff found changes
    #[test]
    fn test_exit_code_diff_changes() {
        cargo_bin_cmd!("pkgfacts")
            .args(["diff", fixture("snapshot_old.json").as_str(), fixture("snapshot_new.json").as_str()])
            .assert()
            .code(1);
    }

    /// Exit code 0: diff of a document with itself
    #[test]
    fn test_exit_code_diff_identical() {
        cargo_bin_cmd!("pkgfacts")
            .args(["diff", fixture("snapshot_old.json").as_str(), fixture("snapshot_old.json").as_str()])
            .assert()
            .code(0);
    }
}

mod command_tests {
    use super::*;

    #[test]
    fn test_command_with_directory() {
        cargo_bin_cmd!("pkgfacts")
            .args(["command", "-d", "npm", "--dir", "/srv/app"])
            .assert()
            .success()
            .stdout("cd /srv/app && npm list -g --depth=0\n");
    }

    #[test]
    fn test_command_without_directory() {
        cargo_bin_cmd!("pkgfacts")
            .args(["command", "-d", "npm"])
            .assert()
            .success()
            .stdout("npm list -g --depth=0\n");
    }

    #[test]
    fn test_command_empty_directory() {
        cargo_bin_cmd!("pkgfacts")
            .args(["command", "-d", "npm", "--dir", ""])
            .assert()
            .success()
            .stdout("npm list -g --depth=0\n");
    }

    #[test]
    fn test_command_quotes_directory_with_spaces() {
        cargo_bin_cmd!("pkgfacts")
            .args(["command", "-d", "npm", "--dir", "/srv/my app"])
            .assert()
            .success()
            .stdout("cd '/srv/my app' && npm list -g --depth=0\n");
    }

    #[test]
    fn test_dialects_lists_builtins() {
        cargo_bin_cmd!("pkgfacts")
            .arg("dialects")
            .assert()
            .success()
            .stdout(predicate::str::contains("npm list -g --depth=0"))
            .stdout(predicate::str::contains("pip freeze"))
            .stdout(predicate::str::contains("dpkg -l"));
    }
}

mod parse_tests {
    use super::*;

    #[test]
    fn test_parse_fixture_as_json() {
        let output = cargo_bin_cmd!("pkgfacts")
            .args(["parse", "-d", "npm", "-i", fixture("npm_list.txt").as_str()])
            .output()
            .unwrap();
        assert!(output.status.success());

        let document: FactsDocument = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(document.tool, "pkgfacts");
        let snapshot = document.snapshot("npm").unwrap();
        assert_eq!(snapshot.packages.len(), 2);
        assert_eq!(snapshot.packages.get("eslint"), Some("7.32.0"));
        assert_eq!(snapshot.packages.get("typescript"), Some("4.4.3"));
        assert_eq!(snapshot.skipped_lines, 1);
    }

    #[test]
    fn test_parse_stdin() {
        let output = cargo_bin_cmd!("pkgfacts")
            .args(["parse", "-d", "npm", "--dir", "/srv/app"])
            .write_stdin("└──lodash@4.1.0\n└──lodash@4.2.0\n")
            .output()
            .unwrap();
        assert!(output.status.success());

        let document: FactsDocument = serde_json::from_slice(&output.stdout).unwrap();
        let snapshot = document.snapshot("npm").unwrap();
        assert_eq!(snapshot.directory.as_deref(), Some("/srv/app"));
        assert_eq!(snapshot.packages.len(), 1);
        assert_eq!(snapshot.packages.get("lodash"), Some("4.2.0"));
    }

    #[test]
    fn test_parse_stdin_with_invalid_utf8() {
        let mut input = "/usr/local\n└── eslint@7.32.0\n".as_bytes().to_vec();
        input.extend_from_slice(b"npm WARN caf\xe9 note\n");

        let output = cargo_bin_cmd!("pkgfacts")
            .args(["parse", "-d", "npm"])
            .write_stdin(input)
            .output()
            .unwrap();
        assert!(output.status.success());

        let document: FactsDocument = serde_json::from_slice(&output.stdout).unwrap();
        let snapshot = document.snapshot("npm").unwrap();
        assert_eq!(snapshot.packages.len(), 1);
        assert_eq!(snapshot.packages.get("eslint"), Some("7.32.0"));
        assert_eq!(snapshot.skipped_lines, 2);
    }

    #[test]
    fn test_parse_markdown() {
        cargo_bin_cmd!("pkgfacts")
            .args(["parse", "-d", "npm", "-i", fixture("npm_list.txt").as_str(), "-f", "markdown"])
            .assert()
            .success()
            .stdout(predicate::str::contains("## npm"))
            .stdout(predicate::str::contains("| eslint | 7.32.0 |"))
            .stderr(predicate::str::contains("Generating Markdown output"));
    }

    #[test]
    fn test_parse_verbose_reports_skipped_lines() {
        cargo_bin_cmd!("pkgfacts")
            .args(["parse", "-d", "npm", "-i", fixture("npm_list.txt").as_str(), "-v"])
            .assert()
            .success()
            .stderr(predicate::str::contains("2 line(s) matched, 1 skipped"));
    }

    #[test]
    fn test_parse_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let output_path = dir.path().join("facts.json");

        cargo_bin_cmd!("pkgfacts")
            .args(["parse", "-d", "npm", "-i", fixture("npm_list.txt").as_str(), "-o"])
            .arg(&output_path)
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Output complete"));

        let content = fs::read_to_string(&output_path).unwrap();
        let document: FactsDocument = serde_json::from_str(&content).unwrap();
        assert_eq!(document.snapshots.len(), 1);
    }
}

mod diff_tests {
    use super::*;

    #[test]
    fn test_diff_json_lists_changes() {
        let output = cargo_bin_cmd!("pkgfacts")
            .args(["diff", fixture("snapshot_old.json").as_str(), fixture("snapshot_new.json").as_str()])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(1));

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let diffs = value["diffs"].as_array().unwrap();
        assert_eq!(diffs.len(), 2);
        assert_eq!(diffs[0]["dialect"], "npm");
        assert_eq!(diffs[0]["added"]["pnpm"], "8.6.0");
        assert_eq!(diffs[0]["removed"]["yarn"], "1.22.17");
        assert_eq!(diffs[0]["changed"][0]["name"], "eslint");
        assert_eq!(diffs[1]["dialect"], "pip");
    }

    #[test]
    fn test_diff_markdown_single_dialect() {
        cargo_bin_cmd!("pkgfacts")
            .args([
                "diff",
                fixture("snapshot_old.json").as_str(),
                fixture("snapshot_new.json").as_str(),
                "-d",
                "npm",
                "-f",
                "md",
            ])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("| Changed | eslint | 7.32.0 | 8.0.0 |"))
            .stdout(predicate::str::contains("## pip").not());
    }

    #[test]
    fn test_diff_invalid_snapshot() {
        let dir = TempDir::new().unwrap();
        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();

        cargo_bin_cmd!("pkgfacts")
            .arg("diff")
            .arg(&broken)
            .arg(fixture("snapshot_new.json"))
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse snapshot file"));
    }
}

mod config_tests {
    use super::*;

    fn write_config(dir: &TempDir, content: &str) {
        fs::write(dir.path().join("pkgfacts.config.yml"), content).unwrap();
    }

    #[test]
    fn test_auto_discovered_custom_dialect() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
custom_dialects:
  - id: yarn
    command: "yarn global list --depth=0"
    pattern: '^info "(?P<name>[a-z0-9-]+)@(?P<version>[0-9.]+)"'
"#,
        );

        cargo_bin_cmd!("pkgfacts")
            .current_dir(dir.path())
            .args(["command", "-d", "yarn", "--dir", "/home/dev"])
            .assert()
            .success()
            .stdout("cd /home/dev && yarn global list --depth=0\n");
    }

    #[test]
    fn test_config_format_applies_and_cli_overrides() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "format: markdown\n");

        cargo_bin_cmd!("pkgfacts")
            .current_dir(dir.path())
            .args(["parse", "-d", "npm", "-i", fixture("npm_list.txt").as_str()])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("# Package Facts"));

        cargo_bin_cmd!("pkgfacts")
            .current_dir(dir.path())
            .args(["parse", "-d", "npm", "-i", fixture("npm_list.txt").as_str(), "-f", "json"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("{"));
    }

    #[test]
    fn test_broken_custom_pattern_names_dialect() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
custom_dialects:
  - id: broken
    command: "broken list"
    pattern: '^(unclosed'
"#,
        );

        cargo_bin_cmd!("pkgfacts")
            .current_dir(dir.path())
            .args(["parse", "-d", "broken", "-i", fixture("npm_list.txt").as_str()])
            .assert()
            .code(3)
            .stderr(predicate::str::contains(
                "Invalid package list pattern for dialect 'broken'",
            ));
    }

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("elsewhere.yml");
        fs::write(
            &config_path,
            "custom_dialects:\n  - id: pipx\n    command: pipx list --short\n    pattern: '^(\\S+) (\\S+)$'\n",
        )
        .unwrap();

        cargo_bin_cmd!("pkgfacts")
            .arg("-c")
            .arg(&config_path)
            .args(["command", "-d", "pipx"])
            .assert()
            .success()
            .stdout("pipx list --short\n");
    }

    #[test]
    fn test_explicit_config_missing() {
        cargo_bin_cmd!("pkgfacts")
            .args(["-c", "/nonexistent/pkgfacts.config.yml", "dialects"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_empty_custom_command_rejected() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            "custom_dialects:\n  - id: yarn\n    command: ''\n    pattern: '^(\\S+) (\\S+)$'\n",
        );

        cargo_bin_cmd!("pkgfacts")
            .current_dir(dir.path())
            .arg("dialects")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("command must not be empty"));
    }

    #[test]
    fn test_unknown_config_field_warns() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "format: json\nshiny_feature: true\n");

        cargo_bin_cmd!("pkgfacts")
            .current_dir(dir.path())
            .arg("dialects")
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Unknown config field 'shiny_feature'",
            ));
    }

    /// Runs a real shell command through `collect`
    #[cfg(unix)]
    #[test]
    fn test_collect_runs_configured_dialects() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
dialects:
  - fake
command_timeout_secs: 10
custom_dialects:
  - id: fake
    command: 'printf "Alpha 1.0\nbeta 2.0\nnot a package line here\n"'
    pattern: '^(\S+) (\S+)$'
    lowercase_names: true
"#,
        );

        let output = cargo_bin_cmd!("pkgfacts")
            .current_dir(dir.path())
            .args(["collect", "--dir", "."])
            .output()
            .unwrap();
        assert!(output.status.success());

        let document: FactsDocument = serde_json::from_slice(&output.stdout).unwrap();
        let snapshot = document.snapshot("fake").unwrap();
        assert_eq!(snapshot.directory.as_deref(), Some("."));
        assert_eq!(snapshot.packages.get("alpha"), Some("1.0"));
        assert_eq!(snapshot.packages.get("beta"), Some("2.0"));
        assert_eq!(snapshot.skipped_lines, 1);
    }
}
