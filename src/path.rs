//! Full BIP44 paths: parsing, formatting, and incremental derivation.
//!
//! The grammar is small but load-bearing: the canonical form is `m` followed
//! by `/`-separated decimal indices, each optionally suffixed with `'` for
//! hardened derivation. Spaces anywhere after the root marker are tolerated
//! on input and never reproduced on output.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::element::{PathElement, MAX_INDEX};
use crate::errors::{PathError, Result};

/// Root marker every textual path starts with.
pub const PATH_PREFIX: &str = "m";

/// An ordered sequence of [`PathElement`]s from the tree root.
///
/// May be empty, which is the bare root `m`. Element order is the tree depth
/// order and is preserved exactly as parsed or supplied. Equality and
/// hashing are structural over the sequence, so paths work as map and set
/// keys. Instances are immutable; [`DerivationPath::increment`] returns a
/// new path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DerivationPath {
    elements: Vec<PathElement>,
}

impl DerivationPath {
    /// The bare root `m`, with no elements.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from pre-constructed elements.
    ///
    /// Order is preserved; nothing is validated beyond what
    /// [`PathElement::new`] already guaranteed.
    pub fn from_elements(elements: Vec<PathElement>) -> Self {
        Self { elements }
    }

    /// Parse the textual notation into a path.
    ///
    /// The input is trimmed and must begin with the root marker `m`
    /// (case-sensitive). An optional `/` after the marker and every space
    /// character in the remainder are discarded, so `"m/44 ' "` parses the
    /// same as `"m/44'"`. `"m"` and `"m/"` both parse to the root.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::MalformedPath`] when the root marker is missing,
    /// a segment is empty (for example a trailing `/`), a segment's numeric
    /// part is not a base-10 non-negative integer, or an index exceeds the
    /// 31-bit range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hdpaths::DerivationPath;
    ///
    /// let path = DerivationPath::parse("m/44'/0'/0/1")?;
    /// assert_eq!(path.depth(), 4);
    /// assert!(DerivationPath::parse("abc").is_err());
    /// assert!(DerivationPath::parse("m/0/").is_err());
    /// # Ok::<(), hdpaths::PathError>(())
    /// ```
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace"))]
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let rest = trimmed
            .strip_prefix(PATH_PREFIX)
            .ok_or_else(|| PathError::MalformedPath {
                reason: format!("must start with '{PATH_PREFIX}'"),
                input: text.to_string(),
            })?;
        let rest = rest.strip_prefix('/').unwrap_or(rest).replace(' ', "");

        if rest.is_empty() {
            return Ok(Self::root());
        }

        let mut elements = Vec::new();
        for segment in rest.split('/') {
            elements.push(parse_segment(segment, text)?);
        }
        Ok(Self { elements })
    }

    /// The elements in tree depth order, root first.
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Number of elements below the root.
    pub fn depth(&self) -> usize {
        self.elements.len()
    }

    /// Whether this is the bare root `m`.
    pub fn is_root(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, PathElement> {
        self.elements.iter()
    }

    /// A new path with the last element's index advanced by one.
    ///
    /// The last element's hardened flag and every other element are left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptyPath`] on the bare root, which has no
    /// element to advance, and [`PathError::IndexOverflow`] when the last
    /// index is already at the 31-bit maximum — incrementing must never wrap
    /// into the hardening bit.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hdpaths::DerivationPath;
    ///
    /// let path = DerivationPath::parse("m/0/1/2'")?;
    /// assert_eq!(path.increment()?.to_string(), "m/0/1/3'");
    /// assert!(DerivationPath::root().increment().is_err());
    /// # Ok::<(), hdpaths::PathError>(())
    /// ```
    pub fn increment(&self) -> Result<Self> {
        let (last, front) = self.elements.split_last().ok_or(PathError::EmptyPath)?;
        if last.index() == MAX_INDEX {
            return Err(PathError::IndexOverflow(MAX_INDEX + 1));
        }
        let mut elements = front.to_vec();
        elements.push(PathElement::new(last.hardened(), last.index() + 1)?);
        Ok(Self { elements })
    }
}

fn parse_segment(segment: &str, input: &str) -> Result<PathElement> {
    if segment.is_empty() {
        return Err(PathError::MalformedPath {
            reason: "empty path segment".to_string(),
            input: input.to_string(),
        });
    }
    let (digits, hardened) = match segment.strip_suffix('\'') {
        Some(stripped) => (stripped, true),
        None => (segment, false),
    };
    let index: u32 = digits.parse().map_err(|_| PathError::MalformedPath {
        reason: format!("not a number '{segment}'"),
        input: input.to_string(),
    })?;
    PathElement::new(hardened, index).map_err(|_| PathError::MalformedPath {
        reason: format!("index '{digits}' exceeds the 31-bit range"),
        input: input.to_string(),
    })
}

impl fmt::Display for DerivationPath {
    /// The canonical, whitespace-free form. Root formats to exactly `m`
    /// with no trailing slash.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PATH_PREFIX)?;
        for element in &self.elements {
            write!(f, "/{element}")?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Vec<PathElement>> for DerivationPath {
    fn from(elements: Vec<PathElement>) -> Self {
        Self::from_elements(elements)
    }
}

impl<'a> IntoIterator for &'a DerivationPath {
    type Item = &'a PathElement;
    type IntoIter = std::slice::Iter<'a, PathElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for DerivationPath {
    type Item = PathElement;
    type IntoIter = std::vec::IntoIter<PathElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

// Paths serialize through their canonical string form, so they embed
// naturally in JSON and config documents. Deserialization re-runs the full
// parser.
impl Serialize for DerivationPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DerivationPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}
