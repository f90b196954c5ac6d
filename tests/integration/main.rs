//! Integration tests for patchbump

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Binary isolated from the user's global and local config
    fn patchbump(config_dir: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("patchbump");
        cmd.env("PATCHBUMP_CONFIG", config_dir.join("config.toml"))
            .arg("--no-local");
        cmd
    }

    fn npm_project(version_json: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            format!(r#"{{"name":"test-npm-package"{version_json}}}"#),
        )
        .unwrap();
        dir
    }

    fn pypi_project(body: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pyproject.toml"), body).unwrap();
        dir
    }

    #[test]
    fn help_displays() {
        let config = TempDir::new().unwrap();
        patchbump(config.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("patch version"));
    }

    #[test]
    fn version_displays() {
        let config = TempDir::new().unwrap();
        patchbump(config.path())
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("patchbump"));
    }

    #[test]
    fn show_npm_package() {
        let config = TempDir::new().unwrap();
        let project = npm_project(r#","version":"1.2.3""#);

        patchbump(config.path())
            .args(["show", "--format", "json", "--path"])
            .arg(project.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""ecosystem": "npm""#))
            .stdout(predicate::str::contains(r#""name": "test-npm-package""#))
            .stdout(predicate::str::contains(r#""version": "1.2.3""#));
    }

    #[test]
    fn bump_npm_package() {
        let config = TempDir::new().unwrap();
        let project = npm_project(r#","version":"1.2.3""#);

        patchbump(config.path())
            .args(["bump", "--path"])
            .arg(project.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("1.2.3 -> 1.2.4"));

        let content = fs::read_to_string(project.path().join("package.json")).unwrap();
        assert!(content.contains(r#""version": "1.2.4""#));
    }

    #[test]
    fn bump_pypi_package_json_output() {
        let config = TempDir::new().unwrap();
        let project =
            pypi_project("[project]\nname=\"test-pypi-package\"\nversion=\"0.1.0\"\n");

        patchbump(config.path())
            .args(["bump", "-f", "json", "-p"])
            .arg(project.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""ecosystem": "pypi""#))
            .stdout(predicate::str::contains(r#""previous": "0.1.0""#))
            .stdout(predicate::str::contains(r#""version": "0.1.1""#));

        let persisted: toml::Value =
            toml::from_str(&fs::read_to_string(project.path().join("pyproject.toml")).unwrap())
                .unwrap();
        assert_eq!(persisted["project"]["version"].as_str(), Some("0.1.1"));
    }

    #[test]
    fn dry_run_leaves_manifest_alone() {
        let config = TempDir::new().unwrap();
        let project = npm_project(r#","version":"4.5.6""#);
        let before = fs::read_to_string(project.path().join("package.json")).unwrap();

        patchbump(config.path())
            .args(["bump", "--dry-run", "--path"])
            .arg(project.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("4.5.7"));

        let after = fs::read_to_string(project.path().join("package.json")).unwrap();
        assert_eq!(before, after);
    }

    // Known quirk: npm defaults a missing version to 0.0.0, pypi does not.
    #[test]
    fn missing_version_asymmetry() {
        let config = TempDir::new().unwrap();

        let npm = npm_project("");
        patchbump(config.path())
            .args(["bump", "--path"])
            .arg(npm.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("0.0.1"));

        let pypi = pypi_project("[project]\nname = \"no-version\"\n");
        patchbump(config.path())
            .args(["bump", "--path"])
            .arg(pypi.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("No `version` in `project` section"));
    }

    #[test]
    fn invalid_version_fails() {
        let config = TempDir::new().unwrap();
        let project = npm_project(r#","version":"1.02.3""#);

        patchbump(config.path())
            .args(["bump", "--path"])
            .arg(project.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid version format"))
            .stderr(predicate::str::contains("1.02.3"));
    }

    #[test]
    fn no_package_found() {
        let config = TempDir::new().unwrap();
        let empty = TempDir::new().unwrap();

        patchbump(config.path())
            .args(["show", "--path"])
            .arg(empty.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "No pyproject.toml or package.json found",
            ))
            .stderr(predicate::str::contains("Hint:"));
    }

    #[test]
    fn config_path() {
        let config = TempDir::new().unwrap();
        patchbump(config.path())
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let config = TempDir::new().unwrap();
        patchbump(config.path())
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[general]"));
    }

    #[test]
    fn config_init_then_json_default() {
        let config = TempDir::new().unwrap();
        patchbump(config.path())
            .args(["config", "init"])
            .assert()
            .success();
        assert!(config.path().join("config.toml").exists());

        fs::write(
            config.path().join("config.toml"),
            "[output]\nformat = \"json\"\n",
        )
        .unwrap();
        let project = npm_project(r#","version":"1.0.0""#);

        patchbump(config.path())
            .args(["show", "--path"])
            .arg(project.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""version": "1.0.0""#));
    }
}
