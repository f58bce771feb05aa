use std::path::Path;

use crate::error::{CloudError, CloudResult};

/// Read and concatenate every file in `dir` whose name matches `pattern`
/// (`*` and `?` wildcards), in filename order.
///
/// Unreadable or non-UTF-8 files are logged and skipped; the run only fails
/// when the directory itself cannot be listed. An empty result is returned
/// as-is and left to the caller's empty-corpus policy.
pub fn read_corpus(dir: &Path, pattern: &str) -> CloudResult<String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| CloudError::corpus(format!("read dir '{}': {e}", dir.display())))?;

    let mut paths: Vec<_> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| wildcard_match(pattern, n))
        })
        .collect();
    paths.sort();

    let mut text = String::new();
    for path in paths {
        tracing::debug!(path = %path.display(), "reading corpus file");
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                text.push_str(&content);
                text.push(' ');
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
            }
        }
    }
    tracing::info!(chars = text.len(), "corpus assembled");
    Ok(text)
}

/// Glob-lite matcher: `*` matches any run (including empty), `?` matches one
/// character, everything else is literal.
pub fn wildcard_match(pattern: &str, name: &str) -> bool {
    fn rec(p: &[char], n: &[char]) -> bool {
        match (p.first(), n.first()) {
            (None, None) => true,
            (Some('*'), _) => rec(&p[1..], n) || (!n.is_empty() && rec(p, &n[1..])),
            (Some('?'), Some(_)) => rec(&p[1..], &n[1..]),
            (Some(&pc), Some(&nc)) if pc == nc => rec(&p[1..], &n[1..]),
            _ => false,
        }
    }
    let p: Vec<char> = pattern.chars().collect();
    let n: Vec<char> = name.chars().collect();
    rec(&p, &n)
}
