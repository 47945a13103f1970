//! End-to-end integration tests for the tablewright CLI

use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

/// Get the tablewright CLI binary
fn tablewright_cli() -> Command {
    Command::new(cargo::cargo_bin!("tablewright"))
}

const USERS_CONFIG: &str = r#"
[[tables]]
name = "users"
primaryColumn = "id"
timestamps = true

[tables.columns.email]
type = "VARCHAR(255)"
"#;

const EXPECTED_CREATE: &str = "\
CREATE TABLE `users` (
  id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT,
  email VARCHAR(255) NOT NULL,
  created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
  updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
  PRIMARY KEY (id)
);
";

fn write_config(temp: &TempDir, content: &str) {
    std::fs::write(temp.path().join("tablewright.toml"), content).unwrap();
}

mod init {
    use super::*;

    #[test]
    fn init_creates_config_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("tablewright.toml");

        tablewright_cli()
            .current_dir(temp.path())
            .arg("init")
            .assert()
            .success()
            .stdout(predicate::str::contains("Created tablewright.toml"));

        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[[tables]]"));
        assert!(content.contains("primaryColumn = \"id\""));
    }

    #[test]
    fn init_fails_if_config_exists() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, USERS_CONFIG);

        tablewright_cli()
            .current_dir(temp.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn init_then_check_succeeds() {
        let temp = TempDir::new().unwrap();

        tablewright_cli()
            .current_dir(temp.path())
            .arg("init")
            .assert()
            .success();

        tablewright_cli()
            .current_dir(temp.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("users"));
    }
}

mod create {
    use super::*;

    #[test]
    fn create_prints_statement() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, USERS_CONFIG);

        tablewright_cli()
            .current_dir(temp.path())
            .arg("create")
            .assert()
            .success()
            .stdout(EXPECTED_CREATE);
    }

    #[test]
    fn create_writes_out_file() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, USERS_CONFIG);

        tablewright_cli()
            .current_dir(temp.path())
            .args(["create", "--out", "schema.sql"])
            .assert()
            .success()
            .stdout(predicate::str::contains("schema.sql"));

        let sql = std::fs::read_to_string(temp.path().join("schema.sql")).unwrap();
        assert_eq!(sql, EXPECTED_CREATE);
    }

    #[test]
    fn create_with_custom_config_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        std::fs::write(&path, USERS_CONFIG).unwrap();

        tablewright_cli()
            .arg("--config")
            .arg(&path)
            .arg("create")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("CREATE TABLE `users` ("));
    }

    #[test]
    fn create_unknown_table_fails() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, USERS_CONFIG);

        tablewright_cli()
            .current_dir(temp.path())
            .args(["create", "--table", "posts"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("table 'posts' not found"));
    }

    #[test]
    fn missing_config_fails() {
        let temp = TempDir::new().unwrap();

        tablewright_cli()
            .current_dir(temp.path())
            .arg("create")
            .assert()
            .failure()
            .stderr(predicate::str::contains("config not found"));
    }
}

mod alter {
    use super::*;

    #[test]
    fn alter_prints_add_column_clauses() {
        let temp = TempDir::new().unwrap();
        write_config(
            &temp,
            r#"
[[tables]]
name = "users"

[tables.columns.age]
type = "INT"
nullable = true

[tables.columns.status]
type = "VARCHAR(16)"
defaultValue = "active"
after = "age"
"#,
        );

        tablewright_cli()
            .current_dir(temp.path())
            .arg("alter")
            .assert()
            .success()
            .stdout(
                "ALTER TABLE users\n\
                 ADD COLUMN age INT,\n\
                 ADD COLUMN status VARCHAR(16) NOT NULL DEFAULT 'active' AFTER age;\n",
            );
    }

    #[test]
    fn alter_missing_type_fails() {
        let temp = TempDir::new().unwrap();
        write_config(
            &temp,
            r#"
[[tables]]
name = "users"

[tables.columns.foo]
defaultValue = 1
"#,
        );

        tablewright_cli()
            .current_dir(temp.path())
            .arg("alter")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Column 'type' missing for foo"));
    }
}

mod check {
    use super::*;

    #[test]
    fn check_reports_tables() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, USERS_CONFIG);

        tablewright_cli()
            .current_dir(temp.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("4 columns"));
    }

    #[test]
    fn check_uses_singular_for_one_column() {
        let temp = TempDir::new().unwrap();
        write_config(
            &temp,
            r#"
[[tables]]
name = "tags"
primaryColumn = "id"
"#,
        );

        tablewright_cli()
            .current_dir(temp.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("(1 column)"));
    }

    #[test]
    fn check_rejects_invalid_toml() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, "[[tables]\nname = ");

        tablewright_cli()
            .current_dir(temp.path())
            .arg("check")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse"));
    }
}
