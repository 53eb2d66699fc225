//! Content-hash stripping for output filenames.
//!
//! Bundlers embed content hashes in emitted filenames (`main-3f9a8c1d.js`),
//! which makes the same logical asset look different from one build to the
//! next. [`normalize`] replaces the hash with `*` so assets can be compared
//! across builds by name.

use std::sync::LazyLock;

use regex::Regex;

/// Hash run delimited by `-` or `.` and followed by the final extension.
static DELIMITED_HASH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*[-.])(?i:[0-9a-f]{8,})(\.[a-z]+)$").expect("valid delimited hash regex")
});

/// Any standalone run of hex characters long enough to be a hash.
static BARE_HASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?i:[0-9a-f]{8,})\b").expect("valid bare hash regex"));

/// Replace the content hash in `path`'s base name with `*`.
///
/// The preferred match is a run of at least 8 hex characters sitting between
/// a `-`/`.` delimiter and the file extension. When the base name has no such
/// run, every standalone run of 8+ hex characters is replaced instead. That
/// fallback is best-effort: a meaningful word made only of hex letters
/// (`deadbeefcafe.js`) is stripped too.
///
/// The directory part is kept as-is; a leading `.` directory is dropped.
///
/// # Examples
///
/// ```
/// use bundle_report::normalize;
///
/// assert_eq!(normalize("dist/assets/main-abc123ef.js"), "dist/assets/main-*.js");
/// assert_eq!(normalize("main-abc.js"), "main-abc.js");
/// ```
pub fn normalize(path: &str) -> String {
    let (dir, base) = match path.rfind('/') {
        Some(idx) => (Some(&path[..idx]), &path[idx + 1..]),
        None => (None, path),
    };

    let stripped = match DELIMITED_HASH.captures(base) {
        Some(caps) => format!("{}*{}", &caps[1], &caps[2]),
        None => BARE_HASH.replace_all(base, "*").into_owned(),
    };

    match dir {
        None | Some(".") => stripped,
        Some(dir) => format!("{dir}/{stripped}"),
    }
}
