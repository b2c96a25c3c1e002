//! # BIP44 derivation paths
//!
//! Parsing, formatting, and incremental derivation of BIP44-style
//! hierarchical deterministic key paths — the `m/44'/60'/0'/0/0` notation
//! wallets use to address keys in a tree.
//!
//! Everything here is pure: no I/O, no shared state. A [`DerivationPath`] is
//! either fully parsed or never constructed, and is immutable afterwards, so
//! values can be shared freely across threads.
//!
//! Downstream key-derivation code trusts this grammar; a wrong parse
//! silently derives the wrong key. The parser is therefore strict about
//! structure (root marker, non-empty segments, 31-bit indices) while staying
//! lenient about spaces, which wallets routinely paste in.
//!
//! # Example
//!
//! ```rust
//! use hdpaths::{DerivationPath, PathElement};
//!
//! let path = DerivationPath::parse("m/44'/60'/0'/0/0")?;
//! assert_eq!(path.depth(), 5);
//! assert_eq!(path.to_string(), "m/44'/60'/0'/0/0");
//!
//! let next = path.increment()?;
//! assert_eq!(next.to_string(), "m/44'/60'/0'/0/1");
//!
//! let purpose = path.elements()[0];
//! assert!(purpose.hardened());
//! assert_eq!(purpose.index(), 44);
//! assert_eq!(purpose.encoded_index(), 0x8000_002c);
//! # Ok::<(), hdpaths::PathError>(())
//! ```

pub mod element;
pub mod errors;
pub mod path;

pub use element::{PathElement, HARDENING_FLAG, MAX_INDEX};
pub use errors::{PathError, Result};
pub use path::{DerivationPath, PATH_PREFIX};
