//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn repo_scraper() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("repo-scraper"));
    cmd.env_remove("REPO_SCRAPER_EXT")
        .env_remove("REPO_SCRAPER_IGNORE")
        .env_remove("REPO_SCRAPER_CHUNKER")
        .env_remove("RUST_LOG");
    cmd
}

/// root/
///   a.md        "alpha beta"
///   b.txt       "gamma"
///   data/x.md   "in data"
///   metadata/y.md "in metadata"
fn sample_repo() -> TempDir {
    let repo = TempDir::new().expect("temp repo dir");
    let root = repo.path();
    fs::create_dir_all(root.join("data")).expect("mkdir data");
    fs::create_dir_all(root.join("metadata")).expect("mkdir metadata");
    fs::write(root.join("a.md"), "alpha beta\n").expect("write a.md");
    fs::write(root.join("b.txt"), "  gamma  ").expect("write b.txt");
    fs::write(root.join("data/x.md"), "in data").expect("write x.md");
    fs::write(root.join("metadata/y.md"), "in metadata").expect("write y.md");
    repo
}

fn path_arg(repo: &TempDir) -> &str {
    repo.path().to_str().expect("utf8 repo path")
}

#[test]
fn test_cli_version() {
    let mut cmd = repo_scraper();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("repo-scraper"));
}

#[test]
fn test_cli_help() {
    let mut cmd = repo_scraper();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Walk a repository"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("dump"))
        .stdout(predicate::str::contains("chunks"))
        .stdout(predicate::str::contains("file-chunks"));
}

#[test]
fn test_list_rejects_missing_directory() {
    let repo = TempDir::new().expect("temp repo dir");
    let missing = repo.path().join("missing");
    let mut cmd = repo_scraper();
    cmd.args(["list", missing.to_str().expect("utf8 path")]);
    cmd.assert().failure().stderr(predicate::str::contains("Path is not a directory"));
}

#[test]
fn test_list_filters_by_extension_and_ignore_paths() {
    let repo = sample_repo();
    let mut cmd = repo_scraper();
    cmd.args(["list", path_arg(&repo), "--ext", ".md", "--ignore", "data"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("a.md"))
        .stdout(predicate::str::contains("b.txt").not())
        .stdout(predicate::str::contains("x.md").not())
        .stdout(predicate::str::contains("y.md").not());
}

#[test]
fn test_list_json_output() {
    let repo = sample_repo();
    let mut cmd = repo_scraper();
    cmd.args(["list", path_arg(&repo), "--ext", "txt", "--json"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let entries: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    let entries = entries.as_array().expect("array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["index"], 0);
    assert!(entries[0]["path"].as_str().expect("path").ends_with("b.txt"));
}

#[test]
fn test_show_prints_stripped_content() {
    let repo = sample_repo();
    let mut cmd = repo_scraper();
    cmd.args(["show", path_arg(&repo), "--ext", ".txt", "--index", "0"]);
    cmd.assert().success().stdout("gamma\n");
}

#[test]
fn test_show_extended_prints_banner_and_path() {
    let repo = sample_repo();
    let mut cmd = repo_scraper();
    cmd.args(["show", path_arg(&repo), "--ext", ".txt", "-n", "0", "--extended"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("%".repeat(66)))
        .stdout(predicate::str::contains("File 0: "))
        .stdout(predicate::str::contains("b.txt"))
        .stdout(predicate::str::contains("gamma"));
}

#[test]
fn test_show_rejects_out_of_range_indices() {
    let repo = sample_repo();
    for index in ["-1", "1"] {
        let mut cmd = repo_scraper();
        cmd.args(["show", path_arg(&repo), "--ext", ".txt", "--index", index]);
        cmd.assert().failure().stderr(predicate::str::contains(format!(
            "Index {index} is out of range for the files list with length 1."
        )));
    }
}

#[test]
fn test_dump_prints_every_file() {
    let repo = sample_repo();
    let mut cmd = repo_scraper();
    cmd.args(["dump", path_arg(&repo)]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("alpha beta"))
        .stdout(predicate::str::contains("gamma"))
        .stdout(predicate::str::contains("in data"))
        .stdout(predicate::str::contains("in metadata"));
}

#[test]
fn test_chunks_without_chunker_merges_corpus() {
    let repo = sample_repo();
    let mut cmd = repo_scraper();
    cmd.args(["chunks", path_arg(&repo), "--ignore", "data", "--jsonl"]);
    cmd.assert()
        .success()
        .stdout("{\"index\":0,\"content\":\"alpha beta\\n\\ngamma\\n\\n\"}\n");
}

#[test]
fn test_chunks_with_whitespace_chunker() {
    let repo = sample_repo();
    let mut cmd = repo_scraper();
    cmd.args(["chunks", path_arg(&repo), "--ignore", "data", "--chunker", "whitespace"]);
    cmd.assert().success().stdout("alpha\n---\nbeta\n---\ngamma\n");
}

#[test]
fn test_chunker_from_environment() {
    let repo = sample_repo();
    let mut cmd = repo_scraper();
    cmd.env("REPO_SCRAPER_CHUNKER", "whitespace").env("REPO_SCRAPER_EXT", ".txt");
    cmd.args(["chunks", path_arg(&repo)]);
    cmd.assert().success().stdout("gamma\n");
}

#[test]
fn test_file_chunks_requires_chunker() {
    let repo = sample_repo();
    let mut cmd = repo_scraper();
    cmd.args(["file-chunks", path_arg(&repo), "--index", "0"]);
    cmd.assert().failure().stderr(predicate::str::contains("No chunking function configured"));
}

#[test]
fn test_file_chunks_for_single_file() {
    let repo = sample_repo();
    let mut cmd = repo_scraper();
    cmd.args([
        "file-chunks",
        path_arg(&repo),
        "--ext",
        ".md",
        "--ignore",
        "data",
        "--chunker",
        "whitespace",
        "--index",
        "0",
        "--jsonl",
    ]);
    cmd.assert()
        .success()
        .stdout("{\"index\":0,\"content\":\"alpha\"}\n{\"index\":1,\"content\":\"beta\"}\n");
}

#[test]
fn test_config_file_is_discovered() {
    let repo = sample_repo();
    fs::write(
        repo.path().join("repo-scraper.toml"),
        "extensions = [\"md\"]\nignore_paths = [\"data\"]\nchunker = \"whitespace\"\n",
    )
    .expect("write config");

    let mut cmd = repo_scraper();
    cmd.args(["chunks", path_arg(&repo)]);
    cmd.assert().success().stdout("alpha\n---\nbeta\n");
}

#[test]
fn test_cli_flags_override_config_file() {
    let repo = sample_repo();
    let config = repo.path().join("settings.yml");
    fs::write(&config, "extensions: .md\nchunker: whitespace\n").expect("write config");

    let mut cmd = repo_scraper();
    cmd.args([
        "chunks",
        path_arg(&repo),
        "--config",
        config.to_str().expect("utf8 config path"),
        "--ext",
        ".txt",
    ]);
    cmd.assert().success().stdout("gamma\n");
}

#[test]
fn test_invalid_explicit_config_fails() {
    let repo = sample_repo();
    let config = repo.path().join("bad.toml");
    fs::write(&config, "chunker = 42\n").expect("write config");

    let mut cmd = repo_scraper();
    cmd.args(["list", path_arg(&repo), "--config", config.to_str().expect("utf8 config path")]);
    cmd.assert().failure().stderr(predicate::str::contains("Invalid TOML config"));
}

#[test]
fn test_rust_log_is_honored_without_verbose() {
    let repo = sample_repo();
    let mut cmd = repo_scraper();
    cmd.env("RUST_LOG", "debug");
    cmd.args(["list", path_arg(&repo)]);
    cmd.assert().success().stderr(predicate::str::contains("Selected 4 files"));
}

#[test]
fn test_rust_log_can_quiet_verbose() {
    let repo = sample_repo();
    let mut cmd = repo_scraper();
    cmd.env("RUST_LOG", "error");
    cmd.args(["-v", "list", path_arg(&repo)]);
    cmd.assert().success().stderr(predicate::str::contains("Selected").not());
}

#[test]
fn test_verbose_enables_debug_logging() {
    let repo = sample_repo();
    let mut cmd = repo_scraper();
    cmd.args(["--verbose", "list", path_arg(&repo)]);
    cmd.assert().success().stderr(predicate::str::contains("Selected 4 files"));
}

#[test]
fn test_default_logging_is_quiet() {
    let repo = sample_repo();
    let mut cmd = repo_scraper();
    cmd.args(["list", path_arg(&repo)]);
    cmd.assert().success().stderr(predicate::str::is_empty());
}
