//! Manifest line-format behavior exercised through full check runs.

use hashcheck::check::run_check;
use hashcheck::config::CheckConfig;
use hashcheck::hasher;
use hashcheck::report::{OutputFormat, ReportFilter};
use hashcheck::walker::WalkerConfig;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn run_lines(manifest: &Path, data: &Path) -> Vec<String> {
    let config = CheckConfig {
        hash_file: manifest.to_path_buf(),
        check_dir: data.to_path_buf(),
        filter: ReportFilter::default(),
        scan: WalkerConfig::default(),
        format: OutputFormat::Text,
        summary: false,
    };
    let mut out = Vec::new();
    run_check(&config, &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_malformed_lines_are_ignored_not_fatal() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir(&data).unwrap();
    let file = data.join("a.txt");
    fs::write(&file, "alpha").unwrap();
    let hash = hasher::hash_file(&file).unwrap();

    let manifest = temp.path().join("hashes.txt");
    fs::write(
        &manifest,
        format!(
            "this line has no separator\n{} single-space.txt\n{}  {}\n",
            "a".repeat(64),
            hash,
            file.display()
        ),
    )
    .unwrap();

    let lines = run_lines(&manifest, &data);
    assert_eq!(lines, vec![format!("{}  {}: OK", hash, file.display())]);
}

#[test]
fn test_duplicate_entry_last_line_wins() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir(&data).unwrap();
    let file = data.join("a.txt");
    fs::write(&file, "alpha").unwrap();
    let hash = hasher::hash_file(&file).unwrap();

    // Stale digest first, current digest last: the file must be OK.
    let manifest = temp.path().join("hashes.txt");
    fs::write(
        &manifest,
        format!("{}  {}\n{}  {}\n", "b".repeat(64), file.display(), hash, file.display()),
    )
    .unwrap();

    let lines = run_lines(&manifest, &data);
    assert_eq!(lines, vec![format!("{}  {}: OK", hash, file.display())]);
}

#[test]
fn test_duplicate_entry_order_matters() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir(&data).unwrap();
    let file = data.join("a.txt");
    fs::write(&file, "alpha").unwrap();
    let hash = hasher::hash_file(&file).unwrap();

    // Current digest first, stale digest last: the stale one wins.
    let manifest = temp.path().join("hashes.txt");
    fs::write(
        &manifest,
        format!("{}  {}\n{}  {}\n", hash, file.display(), "b".repeat(64), file.display()),
    )
    .unwrap();

    let lines = run_lines(&manifest, &data);
    assert_eq!(lines, vec![format!("{}  {}: MISMATCH", hash, file.display())]);
}

#[test]
fn test_empty_digest_entry_scans_as_new() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir(&data).unwrap();
    let file = data.join("a.txt");
    fs::write(&file, "alpha").unwrap();
    let hash = hasher::hash_file(&file).unwrap();

    let manifest = temp.path().join("hashes.txt");
    fs::write(&manifest, format!("  {}\n", file.display())).unwrap();

    let lines = run_lines(&manifest, &data);
    assert_eq!(lines, vec![format!("{}  {}: NEW", hash, file.display())]);
}

#[test]
fn test_empty_digest_entry_still_reconciled_when_missing() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir(&data).unwrap();

    let gone = data.join("gone.txt");
    let manifest = temp.path().join("hashes.txt");
    fs::write(&manifest, format!("  {}\n", gone.display())).unwrap();

    let lines = run_lines(&manifest, &data);
    assert_eq!(lines, vec![format!("  {}: REMOVED", gone.display())]);
}

#[test]
fn test_filename_with_internal_double_space() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir(&data).unwrap();
    let file = data.join("two  spaces.txt");
    fs::write(&file, "odd name").unwrap();
    let hash = hasher::hash_file(&file).unwrap();

    let manifest = temp.path().join("hashes.txt");
    fs::write(&manifest, format!("{}  {}\n", hash, file.display())).unwrap();

    let lines = run_lines(&manifest, &data);
    assert_eq!(lines, vec![format!("{}  {}: OK", hash, file.display())]);
}
