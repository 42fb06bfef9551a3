//! Package paths and segment joining.
//!
//! A [`PackagePath`] is an ordered, validated list of name segments such as
//! `["com", "github", "username"]`. [`join_segments`] turns any list of
//! segments into a relative [`PathBuf`] using the platform separator.

use std::fmt;
use std::path::{MAIN_SEPARATOR, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Check that a single segment can be used as one path component.
pub fn validate_segment(segment: &str) -> Result<(), DomainError> {
    if segment.is_empty() {
        return Err(DomainError::invalid_segment(segment, "segment is empty"));
    }
    if segment == "." || segment == ".." {
        return Err(DomainError::invalid_segment(
            segment,
            "relative path markers are not allowed",
        ));
    }
    if segment
        .chars()
        .any(|c| c == '/' || c == '\\' || c == MAIN_SEPARATOR || c == '\0')
    {
        return Err(DomainError::invalid_segment(
            segment,
            "segment contains a path separator",
        ));
    }
    Ok(())
}

/// Join segments into a relative path, preserving their order.
///
/// Fails with [`DomainError::InvalidSegment`] when the list is empty or any
/// segment is malformed; a malformed path is never produced.
pub fn join_segments<S: AsRef<str>>(segments: &[S]) -> Result<PathBuf, DomainError> {
    if segments.is_empty() {
        return Err(DomainError::invalid_segment("", "no segments to join"));
    }

    let mut path = PathBuf::new();
    for segment in segments {
        let segment = segment.as_ref();
        validate_segment(segment)?;
        path.push(segment);
    }
    Ok(path)
}

/// An ordered, non-empty sequence of validated package segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PackagePath {
    segments: Vec<String>,
}

impl PackagePath {
    /// Build a package path, validating every segment.
    pub fn new<I, S>(segments: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        // join_segments performs the full validation
        join_segments(&segments)?;
        Ok(Self { segments })
    }

    /// Like [`PackagePath::new`], reporting an empty list against `field`.
    pub fn for_field<I, S>(field: &'static str, segments: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(DomainError::EmptyPackagePath { field });
        }
        Self::new(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments of `self` followed by the segments of `other`.
    pub fn concat(&self, other: &PackagePath) -> PackagePath {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        PackagePath { segments }
    }

    /// Join the segments into a relative path.
    pub fn to_path(&self) -> Result<PathBuf, DomainError> {
        join_segments(&self.segments)
    }
}

impl TryFrom<Vec<String>> for PackagePath {
    type Error = DomainError;

    fn try_from(segments: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(segments)
    }
}

impl From<PackagePath> for Vec<String> {
    fn from(path: PackagePath) -> Self {
        path.segments
    }
}

/// Dotted form, e.g. `com.github.username`.
impl fmt::Display for PackagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn joins_in_order_with_platform_separator() {
        let path = join_segments(&["src", "main", "app"]).unwrap();
        assert_eq!(path, Path::new("src").join("main").join("app"));
        assert_eq!(
            path.to_string_lossy(),
            format!("src{MAIN_SEPARATOR}main{MAIN_SEPARATOR}app")
        );
    }

    #[test]
    fn join_round_trips_through_components() {
        let inputs: [&[&str]; 4] = [
            &["com"],
            &["com", "github", "username"],
            &["a", "b", "c", "d", "e"],
            &["Lib.scala"],
        ];

        for segments in inputs {
            let path = join_segments(segments).unwrap();
            let split: Vec<String> = path
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            assert_eq!(split.len(), segments.len());
            assert_eq!(split, segments);
        }
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            join_segments(&empty),
            Err(DomainError::InvalidSegment { .. })
        ));
    }

    #[test]
    fn malformed_segments_are_rejected() {
        for bad in ["", ".", "..", "a/b", "a\\b", "nul\0"] {
            let err = join_segments(&["com", bad]).unwrap_err();
            match err {
                DomainError::InvalidSegment { segment, .. } => assert_eq!(segment, bad),
                other => panic!("unexpected error for {bad:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn package_path_validates_on_construction() {
        assert!(PackagePath::new(["com", "example"]).is_ok());
        assert!(PackagePath::new(["com", ""]).is_err());
        assert!(PackagePath::new(Vec::<String>::new()).is_err());
    }

    #[test]
    fn for_field_names_the_empty_field() {
        let err = PackagePath::for_field("app package", Vec::<String>::new()).unwrap_err();
        assert_eq!(
            err,
            DomainError::EmptyPackagePath {
                field: "app package"
            }
        );
    }

    #[test]
    fn concat_preserves_order() {
        let root = PackagePath::new(["src", "main", "scala"]).unwrap();
        let base = PackagePath::new(["org", "example"]).unwrap();
        let joined = root.concat(&base);
        assert_eq!(joined.segments(), ["src", "main", "scala", "org", "example"]);
        assert_eq!(joined.len(), 5);
    }

    #[test]
    fn displays_dotted() {
        let path = PackagePath::new(["com", "github", "username"]).unwrap();
        assert_eq!(path.to_string(), "com.github.username");
    }
}
