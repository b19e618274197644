//! Source pattern resolution
//!
//! Turns the command-line file arguments into concrete paths. A leading `~`
//! expands to the home directory. Patterns without glob metacharacters are
//! literal paths; the rest are matched with `globset` over a `walkdir` walk
//! of the pattern's literal directory prefix. `*` and `?` do not cross `/`.

#![allow(clippy::result_large_err)]

use crate::errors::{invalid_pattern, Result};
use globset::GlobBuilder;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolved sources, in argument order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Matched files; each pattern's matches are sorted
    pub paths: Vec<PathBuf>,
    /// Patterns that matched nothing
    pub unmatched: Vec<String>,
}

fn has_glob_meta(s: &str) -> bool {
    s.contains(['*', '?', '[', '{'])
}

/// Expand a leading `~` or `~/` using `HOME`
pub fn expand_home(pattern: &str) -> String {
    let rest = match pattern.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return pattern.to_string(),
    };
    match std::env::var("HOME") {
        Ok(home) => format!("{}{}", home.trim_end_matches('/'), rest),
        Err(_) => pattern.to_string(),
    }
}

/// Split a glob into the directory to walk and the walk depth it needs.
///
/// Depth is `None` when the pattern contains `**`.
fn walk_root(pattern: &str) -> (PathBuf, Option<usize>) {
    let mut root = PathBuf::new();
    let mut remaining = 0;
    let mut in_glob = false;
    for component in Path::new(pattern).components() {
        let text = component.as_os_str().to_string_lossy();
        if !in_glob && !has_glob_meta(&text) {
            root.push(component);
        } else {
            in_glob = true;
            remaining += 1;
        }
    }
    let depth = (!pattern.contains("**")).then_some(remaining);
    (root, depth)
}

/// Expand one glob pattern into sorted matching files.
fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| invalid_pattern(pattern, e))?
        .compile_matcher();

    let (root, depth) = walk_root(pattern);
    let relative = root.as_os_str().is_empty();
    let walk_from = if relative { PathBuf::from(".") } else { root };

    let mut walker = WalkDir::new(&walk_from);
    if let Some(depth) = depth {
        walker = walker.max_depth(depth);
    }

    let mut matches: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let path = e.into_path();
            match path.strip_prefix(".") {
                Ok(stripped) if relative => stripped.to_path_buf(),
                _ => path,
            }
        })
        .filter(|path| matcher.is_match(path))
        .collect();
    matches.sort();
    Ok(matches)
}

/// Resolve source patterns to paths
///
/// # Errors
///
/// `InvalidPattern` if a pattern is not a valid glob.
pub fn resolve_sources<S: AsRef<str>>(patterns: &[S]) -> Result<Resolution> {
    let mut resolution = Resolution::default();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let expanded = expand_home(pattern);

        let found = if has_glob_meta(&expanded) {
            expand_glob(&expanded)?
        } else {
            let path = PathBuf::from(&expanded);
            if path.exists() {
                vec![path]
            } else {
                Vec::new()
            }
        };

        tracing::debug!(pattern, matches = found.len(), "Resolved source pattern");

        if found.is_empty() {
            resolution.unmatched.push(pattern.to_string());
        }
        resolution.paths.extend(found);
    }

    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_root_stops_at_first_glob_component() {
        let (root, depth) = walk_root("designs/v2/*.json");
        assert_eq!(root, PathBuf::from("designs/v2"));
        assert_eq!(depth, Some(1));

        let (root, depth) = walk_root("*/tile.json");
        assert_eq!(root, PathBuf::new());
        assert_eq!(depth, Some(2));

        let (_, depth) = walk_root("designs/**/*.json");
        assert_eq!(depth, None);
    }

    #[test]
    fn test_expand_home_only_touches_leading_tilde() {
        assert_eq!(expand_home("a/~b.json"), "a/~b.json");
        assert_eq!(expand_home("~user/x.json"), "~user/x.json");
        if let Ok(home) = std::env::var("HOME") {
            assert_eq!(
                expand_home("~/x.json"),
                format!("{}/x.json", home.trim_end_matches('/'))
            );
        }
    }

    #[test]
    fn test_invalid_glob_is_reported() {
        let err = resolve_sources(&["designs/[.json"]).unwrap_err();
        assert_eq!(
            err.kind(),
            cadiff_core::errors::ExErrorKind::InvalidPattern
        );
    }
}
