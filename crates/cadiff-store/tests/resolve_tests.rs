// Integration tests for source pattern resolution

use cadiff_store::resolve_sources;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn touch(dir: &TempDir, rel: &str) -> PathBuf {
    let path = dir.path().join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, "{}").unwrap();
    path
}

fn pattern(dir: &TempDir, rel: &str) -> String {
    dir.path().join(rel).display().to_string()
}

#[test]
fn test_literal_paths_are_kept_in_order() {
    let dir = TempDir::new().unwrap();
    let b = touch(&dir, "b.json");
    let a = touch(&dir, "a.json");

    let resolution =
        resolve_sources(&[b.display().to_string(), a.display().to_string()]).unwrap();

    assert_eq!(resolution.paths, vec![b, a]);
    assert!(resolution.unmatched.is_empty());
}

#[test]
fn test_glob_matches_are_sorted() {
    let dir = TempDir::new().unwrap();
    let v2 = touch(&dir, "design_v2.json");
    let v1 = touch(&dir, "design_v1.json");
    touch(&dir, "notes.txt");

    let resolution = resolve_sources(&[pattern(&dir, "design_*.json")]).unwrap();

    assert_eq!(resolution.paths, vec![v1, v2]);
}

#[test]
fn test_star_does_not_cross_directories() {
    let dir = TempDir::new().unwrap();
    let top = touch(&dir, "top.json");
    touch(&dir, "nested/deep.json");

    let resolution = resolve_sources(&[pattern(&dir, "*.json")]).unwrap();
    assert_eq!(resolution.paths, vec![top]);

    let resolution = resolve_sources(&[pattern(&dir, "**/*.json")]).unwrap();
    assert_eq!(resolution.paths.len(), 2);
}

#[test]
fn test_unmatched_patterns_are_reported() {
    let dir = TempDir::new().unwrap();
    let a = touch(&dir, "a.json");
    let missing_literal = pattern(&dir, "missing.json");
    let missing_glob = pattern(&dir, "*.cadnano");

    let resolution = resolve_sources(&[
        a.display().to_string(),
        missing_literal.clone(),
        missing_glob.clone(),
    ])
    .unwrap();

    assert_eq!(resolution.paths, vec![a]);
    assert_eq!(resolution.unmatched, vec![missing_literal, missing_glob]);
}
