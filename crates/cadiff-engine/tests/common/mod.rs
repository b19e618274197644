use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a cadnano design with the given vstrands into `dir`
#[allow(dead_code)]
pub fn write_design(
    dir: &TempDir,
    file: &str,
    name: &str,
    vstrands: serde_json::Value,
) -> PathBuf {
    let path = dir.path().join(file);
    let doc = serde_json::json!({ "name": name, "vstrands": vstrands });
    fs::write(&path, serde_json::to_vec_pretty(&doc).unwrap()).unwrap();
    path
}
