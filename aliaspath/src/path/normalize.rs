//! Path normalization functions.
//!
//! These are the string-level path primitives the resolver is built on:
//! - Expanding tilde (~) to the home directory
//! - Classifying paths as absolute or relative
//! - Resolving `.` and `..` components
//! - Normalizing separators to `/`
//!
//! None of these functions touch the filesystem, and none of them fail.

/// Expand a leading tilde (~) to the home directory.
///
/// Handles `~` and `~/path` but not `~user` syntax, which is returned
/// unchanged, as is everything when the home directory cannot be determined.
///
/// # Examples
///
/// ```
/// use aliaspath::path::normalize::expand_tilde;
///
/// // Leaves other paths unchanged
/// assert_eq!(expand_tilde("/absolute"), "/absolute");
/// assert_eq!(expand_tilde("~user/x"), "~user/x");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if !path.starts_with('~') {
        return path.to_string();
    }

    let rest = if path == "~" {
        ""
    } else if let Some(rest) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        rest
    } else {
        return path.to_string();
    };

    let Some(home) = home::home_dir() else {
        return path.to_string();
    };
    let home = normalize_separators(&home.to_string_lossy());

    if rest.is_empty() {
        home
    } else {
        join(&home, rest)
    }
}

/// Convert every backslash separator to a forward slash.
///
/// # Examples
///
/// ```
/// use aliaspath::path::normalize::normalize_separators;
///
/// assert_eq!(normalize_separators("C:\\app\\public"), "C:/app/public");
/// ```
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Split a path with `/` separators into its root and the remainder.
///
/// The root is `/` for Unix-style paths, `X:/` for Windows drive roots, and
/// empty for relative paths.
fn split_root(path: &str) -> (String, &str) {
    if let Some(rest) = path.strip_prefix('/') {
        return ("/".to_string(), rest);
    }

    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        let drive = &path[..2];
        if bytes.len() == 2 {
            return (format!("{drive}/"), "");
        }
        if bytes[2] == b'/' {
            return (format!("{drive}/"), &path[3..]);
        }
    }

    (String::new(), path)
}

/// Check whether a path is absolute.
///
/// A path is absolute if it starts with a separator or with a Windows drive
/// root (`C:`, `C:/`, `C:\`). The empty string is relative.
///
/// # Examples
///
/// ```
/// use aliaspath::path::normalize::is_absolute;
///
/// assert!(is_absolute("/srv/app"));
/// assert!(is_absolute("C:\\app"));
/// assert!(!is_absolute("public/files"));
/// assert!(!is_absolute(""));
/// ```
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    !split_root(&normalize_separators(path)).0.is_empty()
}

/// Check whether a path is relative.
#[must_use]
pub fn is_relative(path: &str) -> bool {
    !is_absolute(path)
}

/// Canonicalize a path string.
///
/// This function:
/// 1. Expands a leading tilde
/// 2. Converts separators to `/` and collapses duplicates
/// 3. Drops `.` components
/// 4. Resolves `..` against the preceding component
///
/// `..` components that would climb above an absolute root are discarded;
/// leading `..` components of a relative path are kept. Trailing separators
/// are removed, and a relative path that reduces to nothing becomes `.`.
/// Canonicalization is idempotent.
///
/// # Examples
///
/// ```
/// use aliaspath::path::normalize::canonicalize;
///
/// assert_eq!(canonicalize("/a/./b/../c"), "/a/c");
/// assert_eq!(canonicalize("/a/b/../../c"), "/c");
/// assert_eq!(canonicalize("/../a"), "/a");
/// assert_eq!(canonicalize("../a/b/.."), "../a");
/// assert_eq!(canonicalize("a//b/"), "a/b");
/// assert_eq!(canonicalize("./"), ".");
/// ```
#[must_use]
pub fn canonicalize(path: &str) -> String {
    let unified = normalize_separators(&expand_tilde(path));
    let (root, rest) = split_root(&unified);

    let mut components: Vec<&str> = Vec::new();
    for component in rest.split('/') {
        match component {
            "" | "." => {}
            ".." => match components.last() {
                Some(&last) if last != ".." => {
                    components.pop();
                }
                // Relative paths keep leading "..", absolute ones stop at root
                _ if root.is_empty() => components.push(".."),
                _ => {}
            },
            normal => components.push(normal),
        }
    }

    let joined = components.join("/");
    if root.is_empty() {
        if joined.is_empty() {
            ".".to_string()
        } else {
            joined
        }
    } else {
        format!("{root}{joined}")
    }
}

/// Join a path onto a base directory and canonicalize the result.
///
/// Absolute paths (after tilde expansion) are only canonicalized.
///
/// # Examples
///
/// ```
/// use aliaspath::path::normalize::make_absolute;
///
/// assert_eq!(make_absolute("public/files", "/srv/app"), "/srv/app/public/files");
/// assert_eq!(make_absolute("../shared", "/srv/app"), "/srv/shared");
/// assert_eq!(make_absolute("/tmp/x", "/srv/app"), "/tmp/x");
/// ```
#[must_use]
pub fn make_absolute(path: &str, base: &str) -> String {
    let expanded = expand_tilde(path);
    if is_absolute(&expanded) {
        canonicalize(&expanded)
    } else {
        canonicalize(&join(base, &expanded))
    }
}

/// Append a segment to a base path with a single `/` between them.
///
/// No canonicalization is performed.
///
/// # Examples
///
/// ```
/// use aliaspath::path::normalize::join;
///
/// assert_eq!(join("/srv/app/", "public"), "/srv/app/public");
/// assert_eq!(join("/", "tmp"), "/tmp");
/// assert_eq!(join("", "tmp"), "tmp");
/// ```
#[must_use]
pub fn join(base: &str, segment: &str) -> String {
    if base.is_empty() {
        return segment.to_string();
    }
    if segment.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base.trim_end_matches(['/', '\\']), segment)
}
