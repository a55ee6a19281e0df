//! Path derivation for dotenv discovery.
//!
//! Responsibilities:
//! - Turn a load hint (or the working directory) into search segments and a file name.
//! - Enumerate candidate file paths from the deepest directory up to the root.
//!
//! Does NOT handle:
//! - Touching the filesystem (see `builder.rs`).
//! - Deciding the default file name (the resolver derives it from the stage).
//!
//! Invariants:
//! - Hint segments are split twice: once on `\` (or `/` when the hint has no
//!   backslash), then again on the platform separator after re-joining.
//! - Whitespace-only hint segments are dropped; working-directory segments are kept as-is.
//! - Only a last segment longer than `MIN_FILE_NAME_LEN` bytes that starts with
//!   a literal `.` is treated as a file name.
//! - Candidates always include the root-level path (`i == 0`).

use std::path::MAIN_SEPARATOR_STR;

use crate::constants::MIN_FILE_NAME_LEN;

/// Search segments and file name for one `load` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSpec {
    segments: Vec<String>,
    file_name: String,
}

impl PathSpec {
    /// Derive the search specification for `hint`.
    ///
    /// An empty hint searches from `working_dir` for `default_file_name`.
    /// A non-empty hint supplies the starting directory and, when its last
    /// segment looks like a dotfile, the file name. When the hint leaves no
    /// directory segments, the search starts from `working_dir` instead.
    pub fn derive(hint: &str, default_file_name: &str, working_dir: &str) -> Self {
        let mut file_name = default_file_name.to_string();

        if hint.is_empty() {
            return Self {
                segments: split_dir(working_dir),
                file_name,
            };
        }

        let mut segments: Vec<String> = split_hint(hint)
            .into_iter()
            .filter(|segment| !segment.trim().is_empty())
            .collect();

        if segments.last().is_some_and(|last| is_file_name(last)) {
            if let Some(last) = segments.pop() {
                file_name = last;
            }
        }

        if segments.is_empty() {
            segments = split_dir(working_dir);
        }

        Self {
            segments,
            file_name,
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Candidate paths, longest first, ending with the root-level candidate.
    ///
    /// Yields `segments().len() + 1` paths. The candidate for `i` segments is
    /// the first `i` segments joined by the platform separator, followed by
    /// the separator and the file name.
    pub fn candidates(&self) -> impl Iterator<Item = String> + '_ {
        (0..=self.segments.len()).rev().map(move |i| {
            let mut candidate = self.segments[..i].join(MAIN_SEPARATOR_STR);
            candidate.push_str(MAIN_SEPARATOR_STR);
            candidate.push_str(&self.file_name);
            candidate
        })
    }
}

/// Returns true if a hint segment names a file rather than a directory.
///
/// `.x` is too short and `a.env` does not start with a dot; both stay directories.
pub fn is_file_name(segment: &str) -> bool {
    segment.len() > MIN_FILE_NAME_LEN && segment.starts_with('.')
}

fn split_hint(hint: &str) -> Vec<String> {
    let first: Vec<&str> = if hint.contains('\\') {
        hint.split('\\').collect()
    } else {
        hint.split('/').collect()
    };

    first
        .join(MAIN_SEPARATOR_STR)
        .split(MAIN_SEPARATOR_STR)
        .map(str::to_string)
        .collect()
}

fn split_dir(dir: &str) -> Vec<String> {
    dir.split(MAIN_SEPARATOR_STR).map(str::to_string).collect()
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hint_uses_working_dir_and_default_name() {
        let spec = PathSpec::derive("", ".env", "/a/b/c");

        assert_eq!(spec.segments(), ["", "a", "b", "c"]);
        assert_eq!(spec.file_name(), ".env");
    }

    #[test]
    fn test_working_dir_candidates_walk_up_to_root() {
        let spec = PathSpec::derive("", ".env", "/a/b/c");
        let candidates: Vec<String> = spec.candidates().collect();

        assert_eq!(
            candidates,
            [
                "/a/b/c/.env",
                "/a/b/.env",
                "/a/.env",
                "/.env",
                "/.env",
            ]
        );
    }

    #[test]
    fn test_hint_dotfile_becomes_file_name() {
        let spec = PathSpec::derive("config/nested/.env.local", ".env", "/work");

        assert_eq!(spec.segments(), ["config", "nested"]);
        assert_eq!(spec.file_name(), ".env.local");
    }

    #[test]
    fn test_hint_without_dotfile_keeps_default_name() {
        let spec = PathSpec::derive("config/custom.env", ".env.dev", "/work");

        assert_eq!(spec.segments(), ["config", "custom.env"]);
        assert_eq!(spec.file_name(), ".env.dev");
    }

    #[test]
    fn test_short_dot_segment_is_a_directory() {
        let spec = PathSpec::derive("config/.x", ".env", "/work");

        assert_eq!(spec.segments(), ["config", ".x"]);
        assert_eq!(spec.file_name(), ".env");
    }

    #[test]
    fn test_four_byte_dot_segment_is_a_file_name() {
        let spec = PathSpec::derive("config/.abc", ".env", "/work");

        assert_eq!(spec.segments(), ["config"]);
        assert_eq!(spec.file_name(), ".abc");
    }

    #[test]
    fn test_lone_file_name_falls_back_to_working_dir() {
        let spec = PathSpec::derive(".env.test", ".env", "/a/b");

        assert_eq!(spec.segments(), ["", "a", "b"]);
        assert_eq!(spec.file_name(), ".env.test");
    }

    #[test]
    fn test_whitespace_only_hint_falls_back_to_working_dir() {
        let spec = PathSpec::derive("  ", ".env", "/a");

        assert_eq!(spec.segments(), ["", "a"]);
        assert_eq!(spec.file_name(), ".env");
    }

    #[test]
    fn test_hint_drops_empty_and_whitespace_segments() {
        let spec = PathSpec::derive("/srv// /app/.env.prod", ".env", "/work");

        assert_eq!(spec.segments(), ["srv", "app"]);
        let candidates: Vec<String> = spec.candidates().collect();
        assert_eq!(
            candidates,
            ["srv/app/.env.prod", "srv/.env.prod", "/.env.prod"]
        );
    }

    #[test]
    fn test_backslash_hint_is_split_then_resplit() {
        // Split on `\` first; the `/` inside the second piece is split on the
        // second pass.
        let spec = PathSpec::derive("a\\b/c\\.env.ci", ".env", "/work");

        assert_eq!(spec.segments(), ["a", "b", "c"]);
        assert_eq!(spec.file_name(), ".env.ci");
    }

    #[test]
    fn test_is_file_name_rule() {
        assert!(is_file_name(".env"));
        assert!(is_file_name(".env.production"));
        assert!(!is_file_name(".x"));
        assert!(!is_file_name(".ab"));
        assert!(!is_file_name("a.env"));
        assert!(!is_file_name("custom.env"));
    }
}
