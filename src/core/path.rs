//! Path rules: directory indexes, dot segments, duplicate and trailing slashes.
//!
//! All of them skip opaque paths (see [`ParsedUrl::has_hierarchical_path`]).

use std::sync::LazyLock;

use regex::Regex;

use crate::types::ParsedUrl;

static DIRECTORY_INDEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|/)(?:default|index)\.[0-9A-Za-z_]{1,4}$").unwrap());
static DUPLICATE_SLASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/{2,}").unwrap());

/// Strip a trailing `default.<ext>` or `index.<ext>` file name, keeping the `/`.
///
/// Matching is literal: `Index.html` and `default` without extension stay.
pub fn remove_directory_index(url: &mut ParsedUrl) {
    if url.path.is_empty() || !url.has_hierarchical_path() {
        return;
    }
    url.path = DIRECTORY_INDEX.replace(&url.path, "$1").into_owned();
}

/// Resolve `.` and `..` segments (RFC 3986 §5.2.4).
///
/// `..` never climbs above the root. The result always starts with `/`,
/// relative references included (`a/./b/../c` becomes `/a/c`). When the last
/// segment was a dot segment the result ends with `/`, since it names a
/// directory.
pub fn remove_dot_segments(url: &mut ParsedUrl) {
    if url.path.is_empty() || !url.has_hierarchical_path() {
        return;
    }

    let mut segments: Vec<&str> = Vec::new();
    let mut last_is_dot = false;
    for segment in url.path.split('/') {
        match segment {
            ".." => {
                segments.pop();
            }
            "." => {}
            _ => segments.push(segment),
        }
        last_is_dot = segment == "." || segment == "..";
    }

    let mut path = segments.join("/");
    if !path.starts_with('/') {
        path.insert(0, '/');
    }
    if last_is_dot && !path.ends_with('/') {
        path.push('/');
    }
    url.path = path;
}

/// Collapse every run of `/` into a single one.
pub fn remove_duplicate_slashes(url: &mut ParsedUrl) {
    if !url.has_hierarchical_path() {
        return;
    }
    url.path = DUPLICATE_SLASHES.replace_all(&url.path, "/").into_owned();
}

/// Trim all trailing slashes; a bare `/` path becomes empty.
pub fn remove_trailing_slash(url: &mut ParsedUrl) {
    if !url.has_hierarchical_path() {
        return;
    }
    let trimmed = url.path.trim_end_matches('/').len();
    url.path.truncate(trimmed);
}

/// Append `/` to the path, including the empty path of a URL with a host.
pub fn add_trailing_slash(url: &mut ParsedUrl) {
    if !url.has_hierarchical_path() || (url.path.is_empty() && !url.has_authority()) {
        return;
    }
    if !url.path.ends_with('/') {
        url.path.push('/');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_after(input: &str, rule: fn(&mut ParsedUrl)) -> String {
        let mut url = ParsedUrl::parse(input).unwrap();
        rule(&mut url);
        url.to_string()
    }

    #[test]
    fn test_remove_directory_index() {
        let rule = remove_directory_index;
        assert_eq!(path_after("HTTP://root/a/b/c/default.aspx", rule), "HTTP://root/a/b/c/");
        assert_eq!(path_after("http://root/index.html?x=1", rule), "http://root/?x=1");
        assert_eq!(path_after("HTTP://root/a/b/c/default#a=b", rule), "HTTP://root/a/b/c/default#a=b");
        assert_eq!(path_after("http://root/a/myindex.html", rule), "http://root/a/myindex.html");
        assert_eq!(path_after("http://root/a/Index.html", rule), "http://root/a/Index.html");
        assert_eq!(path_after("http://root/a/index.shtml5", rule), "http://root/a/index.shtml5");
        assert_eq!(path_after("index.php", rule), "");
    }

    #[test]
    fn test_remove_dot_segments() {
        let cases = [
            ("HTTP://root/a/b/./../../c/", "HTTP://root/c/"),
            ("HTTP://root/../a/b/./../c/../d", "HTTP://root/a/d"),
            ("http://test.example/foo/bar/.", "http://test.example/foo/bar/"),
            ("http://test.example/foo/bar/./", "http://test.example/foo/bar/"),
            ("http://test.example/foo/bar/..", "http://test.example/foo/"),
            ("http://test.example/foo/bar/../", "http://test.example/foo/"),
            ("http://test.example/foo/bar/../baz", "http://test.example/foo/baz"),
            ("http://test.example/foo/bar/../..", "http://test.example/"),
            ("http://test.example/foo/bar/../../", "http://test.example/"),
            ("http://test.example/foo/bar/../../baz", "http://test.example/baz"),
            ("http://test.example/foo/bar/../../../baz", "http://test.example/baz"),
            ("http://test.example/foo/bar/../../../../baz", "http://test.example/baz"),
            ("http://test.example/./foo", "http://test.example/foo"),
            ("http://test.example/../foo", "http://test.example/foo"),
            ("http://test.example/foo.", "http://test.example/foo."),
            ("http://test.example/.foo", "http://test.example/.foo"),
            ("http://test.example/foo..", "http://test.example/foo.."),
            ("http://test.example/..foo", "http://test.example/..foo"),
            ("http://test.example/./../foo", "http://test.example/foo"),
            ("http://test.example/./foo/.", "http://test.example/foo/"),
            ("http://test.example/foo/./bar", "http://test.example/foo/bar"),
            ("http://test.example/foo/../bar", "http://test.example/bar"),
            ("http://test.example/..", "http://test.example/"),
            ("http://test.example", "http://test.example"),
        ];

        for (input, expected) in cases {
            assert_eq!(path_after(input, remove_dot_segments), expected, "failed for: {}", input);
        }
    }

    #[test]
    fn test_remove_dot_segments_relative_and_opaque() {
        assert_eq!(path_after("a/./b/../c", remove_dot_segments), "/a/c");
        assert_eq!(path_after("../../a", remove_dot_segments), "/a");
        assert_eq!(path_after("a/b/..", remove_dot_segments), "/a/");
        assert_eq!(path_after("..?q", remove_dot_segments), "/?q");
        assert_eq!(path_after("urn:a/../b", remove_dot_segments), "urn:a/../b");
    }

    #[test]
    fn test_remove_duplicate_slashes() {
        let rule = remove_duplicate_slashes;
        assert_eq!(
            path_after("https://root/a//b///c////default#toto=tata", rule),
            "https://root/a/b/c/default#toto=tata"
        );
        assert_eq!(
            path_after("https://root//a//b///c////default#toto=tata", rule),
            "https://root/a/b/c/default#toto=tata"
        );
        assert_eq!(path_after("https://root/a/b?x=//", rule), "https://root/a/b?x=//");
    }

    #[test]
    fn test_remove_trailing_slash() {
        let rule = remove_trailing_slash;
        assert_eq!(path_after("HTTP://www.SRC.ca:80/", rule), "HTTP://www.SRC.ca:80");
        assert_eq!(path_after("HTTP://www.SRC.ca:80/toto/titi/", rule), "HTTP://www.SRC.ca:80/toto/titi");
        assert_eq!(
            path_after("HTTP://www.SRC.ca:80/toto/titi/fin/?a=1", rule),
            "HTTP://www.SRC.ca:80/toto/titi/fin?a=1"
        );
        assert_eq!(path_after("http://host/a//", rule), "http://host/a");
        assert_eq!(path_after("http://host/a", rule), "http://host/a");
    }

    #[test]
    fn test_add_trailing_slash() {
        let rule = add_trailing_slash;
        assert_eq!(path_after("HTTP://www.SRC.ca:80", rule), "HTTP://www.SRC.ca:80/");
        assert_eq!(
            path_after("HTTP://www.SRC.ca:80/toto/titi.html", rule),
            "HTTP://www.SRC.ca:80/toto/titi.html/"
        );
        assert_eq!(
            path_after("HTTP://www.SRC.ca:80/toto/titi/fin?a=1", rule),
            "HTTP://www.SRC.ca:80/toto/titi/fin/?a=1"
        );
        assert_eq!(path_after("http://host/a/", rule), "http://host/a/");
        assert_eq!(path_after("?q=1", rule), "?q=1");
        assert_eq!(path_after("mailto:joe@example.com", rule), "mailto:joe@example.com");
    }
}
