//! Config file integration: `[scan]` settings flowing into a check run.

use hashcheck::check::run_check;
use hashcheck::config::{CheckConfig, ConfigLoader};
use hashcheck::hasher;
use hashcheck::report::{OutputFormat, ReportFilter};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_scan_section_drives_the_walker() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir_all(data.join(".git")).unwrap();
    fs::write(data.join(".git").join("index"), "internal").unwrap();
    let tracked = data.join("tracked.txt");
    fs::write(&tracked, "content").unwrap();
    let tracked_hash = hasher::hash_file(&tracked).unwrap();

    let manifest = temp.path().join("hashes.txt");
    fs::write(&manifest, format!("{}  {}\n", tracked_hash, tracked.display())).unwrap();

    let config_path = temp.path().join("hashcheck.toml");
    fs::write(&config_path, "[scan]\nignore_patterns = [\".git\"]\n").unwrap();
    let file_config = ConfigLoader::load_from_file(&config_path).unwrap();

    let config = CheckConfig {
        hash_file: manifest,
        check_dir: data,
        filter: ReportFilter::default(),
        scan: file_config.scan,
        format: OutputFormat::Text,
        summary: false,
    };
    let mut out = Vec::new();
    let report = run_check(&config, &mut out).unwrap();

    // Only the tracked file is classified; .git contents never appear.
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("tracked.txt: OK"));
    assert!(!output.contains(".git"));
    assert_eq!(report.summary.total(), 1);
}

#[test]
fn test_max_depth_limits_classification() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir_all(data.join("sub")).unwrap();
    fs::write(data.join("top.txt"), "top").unwrap();
    fs::write(data.join("sub").join("below.txt"), "below").unwrap();

    let manifest = temp.path().join("hashes.txt");
    fs::write(&manifest, "").unwrap();

    let config_path = temp.path().join("hashcheck.toml");
    fs::write(&config_path, "[scan]\nmax_depth = 1\n").unwrap();
    let file_config = ConfigLoader::load_from_file(&config_path).unwrap();

    let config = CheckConfig {
        hash_file: manifest,
        check_dir: data,
        filter: ReportFilter::default(),
        scan: file_config.scan,
        format: OutputFormat::Text,
        summary: false,
    };
    let mut out = Vec::new();
    let report = run_check(&config, &mut out).unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("top.txt: NEW"));
    assert!(!output.contains("below.txt"));
    assert_eq!(report.summary.new, 1);
}
