//! End-to-end tests for the dropsync binary
//!
//! Dropbox is never contacted: runs either stop before the network or use
//! `--mirror` to write into a temporary directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn dropsync(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dropsync").unwrap();
    cmd.env_remove("DROPBOX_APP_KEY")
        .env_remove("DROPBOX_APP_SECRET")
        .env_remove("DROPSYNC_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(config_dir.path().join("config.json"));
    cmd
}

// =============================================================================
// Startup
// =============================================================================

mod startup_tests {
    use super::*;

    #[test]
    fn test_missing_app_key_is_fatal() {
        let config = TempDir::new().unwrap();
        let source = TempDir::new().unwrap();

        dropsync(&config)
            .args(["sync", "--local-folder"])
            .arg(source.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("DROPBOX_APP_KEY"));
    }

    #[test]
    fn test_missing_app_secret_is_fatal() {
        let config = TempDir::new().unwrap();

        dropsync(&config)
            .env("DROPBOX_APP_KEY", "key")
            .arg("whoami")
            .assert()
            .failure()
            .stderr(predicate::str::contains("DROPBOX_APP_SECRET"));
    }

    #[test]
    fn test_sync_without_token_asks_for_auth() {
        let config = TempDir::new().unwrap();
        let source = TempDir::new().unwrap();

        dropsync(&config)
            .env("DROPBOX_APP_KEY", "key")
            .env("DROPBOX_APP_SECRET", "secret")
            .args(["sync", "--local-folder"])
            .arg(source.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("dropsync auth"));
    }

    #[test]
    fn test_auth_requires_credentials() {
        let config = TempDir::new().unwrap();

        dropsync(&config)
            .args(["auth", "--code", "abc"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("DROPBOX_APP_KEY"));
    }
}

// =============================================================================
// Settings
// =============================================================================

mod settings_tests {
    use super::*;

    #[test]
    fn test_config_set_then_show() {
        let config = TempDir::new().unwrap();
        let source = TempDir::new().unwrap();

        dropsync(&config)
            .args(["config", "set", "--dropbox-folder", "/Camera", "--interval", "15"])
            .arg("--local-folder")
            .arg(source.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Settings saved"));

        dropsync(&config)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("/Camera"))
            .stdout(predicate::str::contains("15s"))
            .stdout(predicate::str::contains("Authorized:     No"));
    }

    #[test]
    fn test_config_rejects_zero_interval() {
        let config = TempDir::new().unwrap();

        dropsync(&config)
            .args(["config", "set", "--interval", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Interval"));
    }

    #[test]
    fn test_config_path() {
        let config = TempDir::new().unwrap();

        dropsync(&config)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.json"));
    }

    #[test]
    fn test_logout_when_not_authorized() {
        let config = TempDir::new().unwrap();

        dropsync(&config)
            .args(["config", "logout"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Not authorized"));
    }
}

// =============================================================================
// Mirror Runs
// =============================================================================

mod mirror_tests {
    use super::*;

    #[test]
    fn test_sync_copies_files_into_mirror() {
        let config = TempDir::new().unwrap();
        let source = TempDir::new().unwrap();
        let mirror = TempDir::new().unwrap();
        fs::write(source.path().join("a.txt"), "alpha").unwrap();
        fs::write(source.path().join("b.txt"), "beta").unwrap();

        dropsync(&config)
            .args(["sync", "--dropbox-folder", "/Inbox"])
            .arg("--local-folder")
            .arg(source.path())
            .arg("--mirror")
            .arg(mirror.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("a.txt"))
            .stdout(predicate::str::contains("/Inbox/b.txt"));

        assert_eq!(
            fs::read_to_string(mirror.path().join("Inbox").join("a.txt")).unwrap(),
            "alpha"
        );
        assert_eq!(
            fs::read_to_string(mirror.path().join("Inbox").join("b.txt")).unwrap(),
            "beta"
        );
    }

    #[test]
    fn test_sync_uses_saved_folders() {
        let config = TempDir::new().unwrap();
        let source = TempDir::new().unwrap();
        let mirror = TempDir::new().unwrap();
        fs::write(source.path().join("saved.txt"), "s").unwrap();

        dropsync(&config)
            .args(["config", "set", "--dropbox-folder", "/Saved"])
            .arg("--local-folder")
            .arg(source.path())
            .assert()
            .success();

        dropsync(&config)
            .arg("sync")
            .arg("--mirror")
            .arg(mirror.path())
            .assert()
            .success();

        assert!(mirror.path().join("Saved").join("saved.txt").exists());
    }

    #[test]
    fn test_sync_missing_folder_fails() {
        let config = TempDir::new().unwrap();
        let source = TempDir::new().unwrap();
        let mirror = TempDir::new().unwrap();

        dropsync(&config)
            .arg("sync")
            .arg("--local-folder")
            .arg(source.path().join("missing"))
            .arg("--mirror")
            .arg(mirror.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Local folder not found"));
    }

    #[test]
    fn test_sync_without_local_folder_fails() {
        let config = TempDir::new().unwrap();
        let mirror = TempDir::new().unwrap();

        dropsync(&config)
            .arg("sync")
            .arg("--mirror")
            .arg(mirror.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("No local folder set"));
    }

    #[test]
    fn test_sync_empty_folder() {
        let config = TempDir::new().unwrap();
        let source = TempDir::new().unwrap();
        let mirror = TempDir::new().unwrap();

        dropsync(&config)
            .arg("sync")
            .arg("--local-folder")
            .arg(source.path())
            .arg("--mirror")
            .arg(mirror.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("No new files"));
    }

    #[test]
    fn test_watch_stops_after_max_passes() {
        let config = TempDir::new().unwrap();
        let source = TempDir::new().unwrap();
        let mirror = TempDir::new().unwrap();
        fs::write(source.path().join("photo.jpg"), "jpeg").unwrap();

        dropsync(&config)
            .args(["watch", "--interval", "1", "--max-passes", "2"])
            .arg("--local-folder")
            .arg(source.path())
            .arg("--mirror")
            .arg(mirror.path())
            .timeout(std::time::Duration::from_secs(30))
            .assert()
            .success()
            .stdout(predicate::str::contains("No new files"))
            .stdout(predicate::str::contains("1 file(s) uploaded this session"));

        assert!(mirror.path().join("photo.jpg").exists());
    }

    #[test]
    fn test_watch_zero_max_passes_uploads_nothing() {
        let config = TempDir::new().unwrap();
        let source = TempDir::new().unwrap();
        let mirror = TempDir::new().unwrap();
        fs::write(source.path().join("photo.jpg"), "jpeg").unwrap();

        dropsync(&config)
            .args(["watch", "--interval", "1", "--max-passes", "0"])
            .arg("--local-folder")
            .arg(source.path())
            .arg("--mirror")
            .arg(mirror.path())
            .timeout(std::time::Duration::from_secs(30))
            .assert()
            .success()
            .stdout(predicate::str::contains("0 file(s) uploaded this session"));

        assert!(!mirror.path().join("photo.jpg").exists());
    }
}
