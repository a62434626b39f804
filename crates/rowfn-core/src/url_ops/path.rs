//! Directory/filename split of a URL path.

/// Splits a URL path into its directory (always ending in `/`) and filename.
///
/// Trailing slashes of the directory collapse to one unless it is made of
/// slashes only. An empty directory becomes `/`.
pub fn split_directory(path: &str) -> (String, String) {
    let cut = path.rfind('/').map_or(0, |i| i + 1);
    let (head, filename) = path.split_at(cut);
    let head = if head.bytes().any(|b| b != b'/') {
        head.trim_end_matches('/')
    } else {
        head
    };
    let mut directory = head.to_string();
    if !directory.ends_with('/') {
        directory.push('/');
    }
    (directory, filename.to_string())
}

/// Splits `p` into `(root, extension)`, the extension including its dot.
///
/// Leading dots of the last segment do not start an extension (`.bashrc`).
pub(super) fn split_ext(p: &str) -> (&str, &str) {
    let base_start = p.rfind('/').map_or(0, |i| i + 1);
    if let Some(dot) = p.rfind('.') {
        if dot >= base_start && p[base_start..dot].bytes().any(|b| b != b'.') {
            return p.split_at(dot);
        }
    }
    (p, "")
}

/// Extension of `filename` without its leading dot.
pub(super) fn extension(filename: &str) -> &str {
    let (_, ext) = split_ext(filename);
    ext.strip_prefix('.').unwrap_or(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_path() {
        assert_eq!(
            split_directory("/apath/bpath/fname.pdf"),
            ("/apath/bpath/".to_string(), "fname.pdf".to_string())
        );
    }

    #[test]
    fn root_file() {
        assert_eq!(
            split_directory("/search.csv"),
            ("/".to_string(), "search.csv".to_string())
        );
    }

    #[test]
    fn trailing_slash_has_no_filename() {
        assert_eq!(split_directory("/dir/"), ("/dir/".to_string(), String::new()));
    }

    #[test]
    fn empty_and_relative() {
        assert_eq!(split_directory(""), ("/".to_string(), String::new()));
        assert_eq!(
            split_directory("fname.pdf"),
            ("/".to_string(), "fname.pdf".to_string())
        );
    }

    #[test]
    fn repeated_slashes() {
        assert_eq!(split_directory("/a//b"), ("/a/".to_string(), "b".to_string()));
        assert_eq!(split_directory("//"), ("//".to_string(), String::new()));
    }

    #[test]
    fn extensions() {
        assert_eq!(extension("search.csv"), "csv");
        assert_eq!(extension("archive.tar.gz"), "gz");
        assert_eq!(extension(".bashrc"), "");
        assert_eq!(extension("noext"), "");
        assert_eq!(split_ext("/a.b/c"), ("/a.b/c", ""));
    }
}
