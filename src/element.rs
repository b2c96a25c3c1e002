//! A single level of a BIP44 derivation tree.
//!
//! Each level is an index plus a hardened flag. The two are kept separate in
//! the data model; the historical convention of folding hardening into bit
//! 31 of a 32-bit index only appears in [`PathElement::encoded_index`].

use std::fmt;

use crate::errors::{PathError, Result};

/// Bit 31, set on the encoded index of hardened elements.
pub const HARDENING_FLAG: u32 = 0x8000_0000;

/// Largest child index representable in 31 bits.
pub const MAX_INDEX: u32 = 0x7FFF_FFFF;

/// One level of a derivation path.
///
/// A plain immutable value: structural equality and hashing, `Copy`, no
/// interior state. The index always fits in 31 bits; hardening never touches
/// the lower 31 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathElement {
    hardened: bool,
    index: u32,
}

impl PathElement {
    /// Create an element, checking that `index` fits in 31 bits.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::IndexOverflow`] if `index` is larger than
    /// [`MAX_INDEX`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use hdpaths::PathElement;
    ///
    /// let purpose = PathElement::new(true, 44)?;
    /// assert_eq!(purpose.to_string(), "44'");
    /// assert!(PathElement::new(false, 0x8000_0000).is_err());
    /// # Ok::<(), hdpaths::PathError>(())
    /// ```
    pub fn new(hardened: bool, index: u32) -> Result<Self> {
        if index > MAX_INDEX {
            return Err(PathError::IndexOverflow(index));
        }
        Ok(Self { hardened, index })
    }

    /// Whether this level requires hardened derivation.
    pub fn hardened(&self) -> bool {
        self.hardened
    }

    /// The child index, without the hardening bit.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The index with the hardening bit applied.
    ///
    /// For `(hardened, 0)` this is `0x8000_0000`; for an unhardened element
    /// it is the index unchanged.
    pub fn encoded_index(&self) -> u32 {
        if self.hardened {
            self.index | HARDENING_FLAG
        } else {
            self.index
        }
    }

    /// The encoded index under the historical signed 32-bit interpretation,
    /// where hardened elements read as negative numbers.
    pub fn encoded_index_signed(&self) -> i32 {
        self.encoded_index() as i32
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index)?;
        if self.hardened {
            f.write_str("'")?;
        }
        Ok(())
    }
}
