//! Virtual path utilities.
//!
//! Virtual paths are app-relative asset addresses such as
//! `~/Themes/Flex/Content/site.less` or `/Themes/Flex/Content/site.less`.
//! Both spellings address the same asset.

use std::path::{Path, PathBuf};

/// Normalize a virtual path to rooted form.
///
/// - `~/a/b` and `a/b` become `/a/b`
/// - backslashes become `/`
/// - repeated separators collapse
#[inline]
pub fn normalize(path: &str) -> String {
    let trimmed = path.strip_prefix('~').unwrap_or(path);
    let mut out = String::with_capacity(trimmed.len() + 1);
    for segment in trimmed.split(['/', '\\']).filter(|s| !s.is_empty()) {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

/// Final segment of a virtual path (empty for `/`).
#[inline]
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Check whether `path` ends with `.{ext}`, ASCII case-insensitive.
///
/// A bare `/.less` counts; only the suffix matters.
#[inline]
pub fn has_extension(path: &str, ext: &str) -> bool {
    let (path, ext) = (path.as_bytes(), ext.as_bytes());
    path.len() > ext.len()
        && path[path.len() - ext.len() - 1] == b'.'
        && path[path.len() - ext.len()..].eq_ignore_ascii_case(ext)
}

/// Split `/{themes_segment}/{theme}/{rest}` into `(theme, rest)`.
///
/// `rest` is returned without a leading separator. Matching of the
/// themes segment is ASCII case-insensitive.
pub fn split_theme<'a>(path: &'a str, themes_segment: &str) -> Option<(&'a str, &'a str)> {
    let path = path.strip_prefix('~').unwrap_or(path);
    let path = path.trim_start_matches(['/', '\\']);
    let (segment, tail) = path.split_once(['/', '\\'])?;
    if !segment.eq_ignore_ascii_case(themes_segment) {
        return None;
    }
    let (theme, rest) = tail.split_once(['/', '\\'])?;
    if theme.is_empty() || rest.is_empty() {
        return None;
    }
    Some((theme, rest))
}

/// Join a virtual path onto a physical root directory.
///
/// Every segment is pushed separately so the result uses the platform
/// separator. `.` and `..` segments are dropped; virtual paths never
/// escape the root.
pub fn to_physical(root: &Path, path: &str) -> PathBuf {
    let mut out = root.to_path_buf();
    for segment in path
        .strip_prefix('~')
        .unwrap_or(path)
        .split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
    {
        out.push(segment);
    }
    out
}
