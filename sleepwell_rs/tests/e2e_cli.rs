//! End-to-End CLI Tests for sleepwell

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get path to test fixtures
fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/store.json")
}

/// A sleepwell command running in an empty directory with no backend env
fn sleepwell(cwd: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("sleepwell");
    cmd.current_dir(cwd.path())
        .env_remove("SLEEPWELL_BACKEND_URL")
        .env_remove("SLEEPWELL_ANON_KEY")
        .env_remove("SLEEPWELL_STORE_ID")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn workdir() -> TempDir {
    TempDir::new().expect("temp dir")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let dir = workdir();
        sleepwell(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("quiz"))
            .stdout(predicate::str::contains("recommend"));
    }

    #[test]
    fn shows_version() {
        let dir = workdir();
        sleepwell(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn explicit_missing_config_fails() {
        let dir = workdir();
        sleepwell(&dir)
            .args(["--config", "nope.toml", "compare"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("config file not found"));
    }

    #[test]
    fn malformed_config_fails() {
        let dir = workdir();
        std::fs::create_dir_all(dir.path().join(".sleepwell")).unwrap();
        std::fs::write(dir.path().join(".sleepwell/config.toml"), "[site\n").unwrap();
        sleepwell(&dir)
            .arg("compare")
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid configuration"));
    }
}

// ============================================
// Quiz & Recommendations
// ============================================

mod quiz {
    use super::*;

    #[test]
    fn recommend_prints_rule_result() {
        let dir = workdir();
        sleepwell(&dir)
            .args(["recommend", "--position", "side", "--temperature", "hot", "--concerns", "pain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Stay Cool All Night"))
            .stdout(predicate::str::contains("Cervical Support Pillow"))
            .stdout(predicate::str::contains("Premium Memory Foam Topper"));
    }

    #[test]
    fn recommend_json() {
        let dir = workdir();
        let output = sleepwell(&dir)
            .args([
                "recommend",
                "--position",
                "stomach",
                "--temperature",
                "cold",
                "--concerns",
                "insomnia",
                "--json",
            ])
            .output()
            .expect("run sleepwell");
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
        assert_eq!(json["key"], "stomach-cold-insomnia");
        assert_eq!(json["title"], "Warm & Cozy Setup");
        assert_eq!(
            json["products"],
            serde_json::json!([
                "Cloud Memory Foam Pillow",
                "Weighted Therapy Blanket",
                "Melatonin Sleep Aid"
            ])
        );
    }

    #[test]
    fn recommend_rejects_unknown_option() {
        let dir = workdir();
        sleepwell(&dir)
            .args(["recommend", "--position", "upside-down", "--temperature", "hot", "--concerns", "pain"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not an option for position"));
    }

    #[test]
    fn interactive_quiz_reads_stdin() {
        let dir = workdir();
        sleepwell(&dir)
            .args(["quiz", "--delay-ms", "0"])
            .write_stdin("1\n3\n3\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("[2 of 3]"))
            .stdout(predicate::str::contains("Balanced Comfort"));
    }

    #[test]
    fn interactive_quiz_fails_on_early_eof() {
        let dir = workdir();
        sleepwell(&dir)
            .args(["quiz", "--delay-ms", "0"])
            .write_stdin("side\n")
            .assert()
            .failure()
            .stderr(predicate::str::contains("input ended"));
    }
}

// ============================================
// Comparison
// ============================================

mod compare {
    use super::*;

    #[test]
    fn shows_pillows_by_default() {
        let dir = workdir();
        sleepwell(&dir)
            .arg("compare")
            .assert()
            .success()
            .stdout(predicate::str::contains("CoolBreeze Gel"))
            .stdout(predicate::str::contains("Memory Foam Topper").not());
    }

    #[test]
    fn toppers_json() {
        let dir = workdir();
        let output = sleepwell(&dir)
            .args(["compare", "--view", "toppers", "--json"])
            .output()
            .expect("run sleepwell");
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
        let names: Vec<&str> = json
            .as_array()
            .expect("array")
            .iter()
            .map(|p| p["name"].as_str().expect("name"))
            .collect();
        assert_eq!(names, vec!["Memory Foam Topper", "Cooling Gel Topper"]);
    }
}

// ============================================
// Site Build & Blog
// ============================================

mod build {
    use super::*;

    #[test]
    fn builds_site_from_fixture() {
        let dir = workdir();
        let fixture = fixture();
        sleepwell(&dir)
            .env("SLEEPWELL_STORE_ID", "store-1")
            .args(["build", "--out", "site", "--fixture"])
            .arg(&fixture)
            .assert()
            .success()
            .stdout(predicate::str::contains("Wrote 5 pages"));

        let site = dir.path().join("site");
        let home = std::fs::read_to_string(site.join("index.html")).unwrap();
        assert!(home.starts_with("<!DOCTYPE html>"));
        assert!(home.contains("Shop by Category"));
        assert!(home.contains("Lavender Eye Mask"));
        assert!(home.contains("$119.99"));

        let pillows = std::fs::read_to_string(site.join("collections/c-pillows/index.html")).unwrap();
        assert!(pillows.contains("Products from Pillows"));
        assert!(!pillows.contains("Lavender Eye Mask"));

        let blog = std::fs::read_to_string(site.join("blog/index.html")).unwrap();
        assert!(blog.contains("19 de octubre de 2026"));
        assert!(blog.contains("href=\"/blog/pillow-loft\""));
        assert!(!blog.contains("untitled-draft"));
        assert!(!blog.contains("mattress-guide"));
        assert!(!site.join("blog/mattress-guide/index.html").exists());
        assert!(!blog.contains("other-shop-news"));

        assert!(site.join("blog/cool-bedroom/index.html").exists());
    }

    #[test]
    fn build_without_backend_config_fails() {
        let dir = workdir();
        sleepwell(&dir)
            .arg("build")
            .assert()
            .failure()
            .stderr(predicate::str::contains("backend.url"));
    }

    #[test]
    fn unreadable_fixture_degrades_to_placeholders() {
        let dir = workdir();
        sleepwell(&dir)
            .args(["build", "--out", "site", "--fixture", "missing.json", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"posts\": 0"));

        let blog = std::fs::read_to_string(dir.path().join("site/blog/index.html")).unwrap();
        assert!(blog.contains("No articles available at this time."));
    }

    #[test]
    fn posts_lists_valid_articles_in_configured_locale() {
        let dir = workdir();
        std::fs::create_dir_all(dir.path().join(".sleepwell")).unwrap();
        std::fs::write(
            dir.path().join(".sleepwell/config.toml"),
            "[store]\nid = \"store-1\"\n\n[site]\nlocale = \"en-US\"\n",
        )
        .unwrap();

        sleepwell(&dir)
            .arg("posts")
            .arg("--fixture")
            .arg(fixture())
            .assert()
            .success()
            .stdout(predicate::str::contains("October 19, 2026"))
            .stdout(predicate::str::contains("How to choose pillow loft"))
            .stdout(predicate::str::contains("/blog/cool-bedroom"))
            .stdout(predicate::str::contains("Another shop's news").not())
            .stdout(predicate::str::contains("Mattress guide").not());
    }
}
