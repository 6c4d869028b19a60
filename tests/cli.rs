// ABOUTME: Integration tests for the cf-resource binary.
// ABOUTME: Drives check, in, and out through stdin/stdout with a scripted cf stand-in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn resource_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("cf-resource"))
}

#[test]
fn help_shows_commands() {
    resource_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("in"))
        .stdout(predicate::str::contains("out"));
}

#[test]
fn check_reports_no_versions() {
    resource_cmd()
        .arg("check")
        .write_stdin(r#"{"source": {}}"#)
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn in_echoes_requested_version() {
    let dest = tempfile::tempdir().unwrap();

    resource_cmd()
        .arg("in")
        .arg(dest.path())
        .write_stdin(r#"{"source": {}, "version": {"timestamp": "2024-03-01T10:00:00Z"}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"version":{"timestamp":"2024-03-01T10:00:00Z"},"metadata":[]}"#,
        ));
}

#[test]
fn in_rejects_malformed_request() {
    let dest = tempfile::tempdir().unwrap();

    resource_cmd()
        .arg("in")
        .arg(dest.path())
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error running command:"));
}

#[cfg(unix)]
mod scripted {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// A cf stand-in that appends its arguments to `$CF_LOG` and fails on
    /// `push` when `$CF_FAIL_PUSH` is set.
    fn fake_cf(dir: &Path) -> std::path::PathBuf {
        let script = dir.join("cf");
        fs::write(
            &script,
            "#!/bin/sh\n\
             echo \"$@\" >> \"$CF_LOG\"\n\
             if [ \"$1\" = push ] && [ -n \"$CF_FAIL_PUSH\" ]; then exit 1; fi\n\
             exit 0\n",
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    fn out_request() -> &'static str {
        r#"{
            "source": {
                "api": "https://api.run.example.com",
                "client_id": "pipeline",
                "client_secret": "s3cret",
                "organization": "secret",
                "space": "volcano-base"
            },
            "params": {
                "manifest": "repo/manifest.yml",
                "current_app_name": "my-app"
            }
        }"#
    }

    fn sources() -> tempfile::TempDir {
        let sources = tempfile::tempdir().unwrap();
        fs::create_dir(sources.path().join("repo")).unwrap();
        fs::write(
            sources.path().join("repo/manifest.yml"),
            "applications:\n- name: my-app\n",
        )
        .unwrap();
        sources
    }

    #[test]
    fn out_pushes_with_zero_downtime() {
        let bin = tempfile::tempdir().unwrap();
        let sources = sources();
        let log = bin.path().join("cf.log");

        resource_cmd()
            .arg("out")
            .arg(sources.path())
            .env("CF_RESOURCE_CF_BIN", fake_cf(bin.path()))
            .env("CF_LOG", &log)
            .write_stdin(out_request())
            .assert()
            .success()
            .stdout(predicate::str::contains(
                r#""metadata":[{"name":"organization","value":"secret"},{"name":"space","value":"volcano-base"}]"#,
            ));

        let manifest = sources.path().join("repo/manifest.yml");
        let log = fs::read_to_string(&log).unwrap();
        let commands: Vec<&str> = log.lines().collect();
        assert_eq!(
            commands,
            vec![
                "api https://api.run.example.com".to_string(),
                "auth --client-credentials pipeline s3cret".to_string(),
                "target -o secret -s volcano-base".to_string(),
                "rename my-app my-app-venerable".to_string(),
                format!("push my-app -f {}", manifest.display()),
                "delete -f my-app-venerable".to_string(),
            ]
        );
    }

    #[test]
    fn failed_push_rolls_back_and_exits_nonzero() {
        let bin = tempfile::tempdir().unwrap();
        let sources = sources();
        let log = bin.path().join("cf.log");

        resource_cmd()
            .arg("out")
            .arg(sources.path())
            .env("CF_RESOURCE_CF_BIN", fake_cf(bin.path()))
            .env("CF_LOG", &log)
            .env("CF_FAIL_PUSH", "1")
            .write_stdin(out_request())
            .assert()
            .failure()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("error running command:"));

        let log = fs::read_to_string(&log).unwrap();
        assert_eq!(log.lines().last(), Some("rename my-app-venerable my-app"));
    }

    #[test]
    fn invoked_through_link_named_check() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("check");
        std::os::unix::fs::symlink(assert_cmd::cargo::cargo_bin!("cf-resource"), &link).unwrap();

        Command::new(&link)
            .write_stdin("{}")
            .assert()
            .success()
            .stdout("[]\n");
    }
}
