/// Path normalization and syntax checks (RFC 3986 section 3.3 and 5.2.4)
use crate::compat::{String, ToString, Vec};
use crate::error::{Error, Result};

/// Resolve `.` and `..` segments in `path`.
///
/// `.` segments are dropped, `..` removes the previous segment. A `..` with
/// nothing left to remove is dropped, so the result never climbs above the
/// start of the path. Percent-encoding is not interpreted.
///
/// An absolute path that collapses entirely (`/..`, `/a/..`) yields `/`, not `""`.
pub fn normalize_path(path: &str) -> String {
    // Fast path: no dot segments possible
    if memchr::memchr(b'.', path.as_bytes()).is_none() {
        return path.to_string();
    }

    let absolute = path.starts_with('/');
    let mut output: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "." => {}
            ".." => {
                // Never pop the empty root segment of an absolute path
                if output.len() > usize::from(absolute) {
                    output.pop();
                }
            }
            _ => output.push(segment),
        }
    }

    if absolute && output.len() == 1 {
        return "/".to_string();
    }
    output.join("/")
}

/// Check that `path` is syntactically valid given which URL components
/// precede it.
pub fn validate_path(path: &str, has_scheme: bool, has_authority: bool) -> Result<()> {
    if has_authority {
        // RFC 3986 section 3.3: with an authority the path is empty or absolute
        if !path.is_empty() && !path.starts_with('/') {
            return Err(reject(
                "For absolute URLs, path must be empty or begin with '/'",
            ));
        }
    } else if path.starts_with("//") {
        return Err(reject(
            "URLs with no authority component cannot have a path starting with '//'",
        ));
    }

    if !has_scheme && !has_authority {
        // The first segment would be read as a scheme
        let first_segment = path.split('/').next().unwrap_or_default();
        if first_segment.contains(':') {
            return Err(reject(
                "Relative URLs cannot have a path segment containing ':' before the first '/'",
            ));
        }
    }

    Ok(())
}

fn reject(reason: &'static str) -> Error {
    tracing::debug!(component = "path", reason, "rejected URL path");
    Error::invalid_url(reason)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/path/./to/somewhere/.."), "/path/to");
        assert_eq!(normalize_path("/a/b/c/./../../g"), "/a/g");
        assert_eq!(normalize_path("mid/content=5/../6"), "mid/6");
        assert_eq!(normalize_path("/no/dots/here"), "/no/dots/here");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn test_normalize_path_trailing_slash() {
        assert_eq!(normalize_path("/a/b/"), "/a/b/");
        assert_eq!(normalize_path("/a/./b/"), "/a/b/");
        assert_eq!(normalize_path("/a/b/../"), "/a/");
        assert_eq!(normalize_path("/a/b/./"), "/a/b/");
    }

    #[test]
    fn test_normalize_path_leading_parent() {
        assert_eq!(normalize_path("/../a"), "/a");
        assert_eq!(normalize_path("/.."), "/");
        assert_eq!(normalize_path("/."), "/");
        assert_eq!(normalize_path("../a"), "a");
        assert_eq!(normalize_path("a/../.."), "");
    }

    #[test]
    fn test_normalize_path_keeps_dotted_names() {
        assert_eq!(normalize_path("/file.txt"), "/file.txt");
        assert_eq!(normalize_path("/.hidden/..."), "/.hidden/...");
        assert_eq!(normalize_path("/%2e%2e/a"), "/%2e%2e/a");
    }

    #[test]
    fn test_normalize_path_idempotent() {
        for path in [
            "/path/./to/somewhere/..",
            "/a/b/../",
            "/..",
            "a/./b/../../..",
            "//a/../b",
            "/a/b/./",
        ] {
            let once = normalize_path(path);
            assert_eq!(normalize_path(&once), once, "path {path:?}");
        }
    }

    #[test]
    fn test_validate_path_with_authority() {
        assert!(validate_path("", true, true).is_ok());
        assert!(validate_path("/x", true, true).is_ok());
        let err = validate_path("x", false, true).unwrap_err();
        assert!(err.is_invalid_url());
        assert!(validate_path("x", true, true).is_err());
    }

    #[test]
    fn test_validate_path_without_authority() {
        assert!(validate_path("//x", false, false).is_err());
        assert!(validate_path("//x", true, false).is_err());
        assert!(validate_path("/x", true, false).is_ok());
        assert!(validate_path("x:y", true, false).is_ok());
    }

    #[test]
    fn test_validate_path_relative_colon() {
        assert!(validate_path("a:b", false, false).is_err());
        assert!(validate_path(":a", false, false).is_err());
        assert!(validate_path("a/b:c", false, false).is_ok());
        assert!(validate_path("./a:b", false, false).is_ok());
        assert!(validate_path("", false, false).is_ok());
    }
}
