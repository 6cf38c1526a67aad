use derive_more::{Deref, Display};
use snafu::Snafu;

/// Separator between the segments of a namespace path.
pub const SEPARATOR: char = '/';

/// A parsed, slash-separated namespace path.
///
/// Paths are always relative to the namespace root and never name the root
/// itself, so a parsed path holds at least one segment and none of its
/// segments is empty.
#[derive(Debug, Clone, PartialEq, Eq, Deref, Display)]
#[display("{}", _0.join("/"))]
pub struct NamespacePath(Vec<String>);

impl NamespacePath {
    pub fn parse(path: &str) -> Result<Self, PathError> {
        if path.is_empty() {
            return Err(PathError::Undefined);
        }

        let segments = path
            .split(SEPARATOR)
            .map(str::to_string)
            .collect::<Vec<_>>();

        if segments.iter().any(String::is_empty) {
            return Err(PathError::EmptySegment {
                path: path.to_string(),
            });
        }

        Ok(NamespacePath(segments))
    }

    /// Splits the path into the segments leading to the parent and the last segment.
    pub fn parent_and_name(&self) -> (&[String], &str) {
        // `parse` guarantees at least one segment
        let last = self.0.len() - 1;
        (&self.0[..last], self.0[last].as_str())
    }

    /// Whether `other` is this path or lies underneath it.
    pub fn contains(&self, other: &NamespacePath) -> bool {
        other.0.starts_with(&self.0)
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum PathError {
    #[snafu(display("Path is undefined"))]
    Undefined,
    #[snafu(display("Path {} contains an empty segment", path))]
    EmptySegment { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn parse_splits_on_separator() {
        let path = NamespacePath::parse("a/b/c").unwrap();
        assert_eq!(path.as_slice(), ["a", "b", "c"]);
        assert_eq!(path.to_string(), "a/b/c");
    }

    #[test]
    fn parse_rejects_empty_string() {
        assert_eq!(NamespacePath::parse(""), Err(PathError::Undefined));
    }

    #[rstest]
    #[case("/a")]
    #[case("a/")]
    #[case("a//b")]
    #[case("/")]
    fn parse_rejects_empty_segments(#[case] raw: &str) {
        let result = NamespacePath::parse(raw);
        assert_eq!(
            result,
            Err(PathError::EmptySegment {
                path: raw.to_string()
            })
        );
    }

    #[test]
    fn parent_and_name_separates_parent_and_name() {
        let path = NamespacePath::parse("fruits/apples/fuji").unwrap();
        let (parent, name) = path.parent_and_name();
        assert_eq!(parent, ["fruits", "apples"]);
        assert_eq!(name, "fuji");

        let single = NamespacePath::parse("fruits").unwrap();
        let (parent, name) = single.parent_and_name();
        assert!(parent.is_empty());
        assert_eq!(name, "fruits");
    }

    #[rstest]
    #[case("a", "a", true)]
    #[case("a", "a/b", true)]
    #[case("a/b", "a/b/c/d", true)]
    #[case("a", "ab", false)]
    #[case("a/b", "a", false)]
    #[case("a/b", "a/c", false)]
    fn contains_compares_whole_segments(
        #[case] outer: &str,
        #[case] inner: &str,
        #[case] expected: bool,
    ) {
        let outer = NamespacePath::parse(outer).unwrap();
        let inner = NamespacePath::parse(inner).unwrap();
        assert_eq!(outer.contains(&inner), expected);
    }
}
