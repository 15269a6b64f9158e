//! Identifier types for the marketplace.
//!
//! Two identifier families exist:
//!
//! - `AccountId`: the caller identity assigned by the hosting platform, a
//!   validated lowercase account name such as `ayoub.test`.
//! - Sequential ids (`CourseId`, `ModuleId`, `LessonId`): `u64` newtypes
//!   assigned by each collection's own counter, starting at 0 and never
//!   reused. The `seq_id_type!` macro keeps their implementations uniform.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length of an account name.
pub const MAX_ACCOUNT_ID_LEN: usize = 64;

/// Minimum length of an account name.
pub const MIN_ACCOUNT_ID_LEN: usize = 2;

/// An account identifier assigned by the hosting platform.
///
/// Account names are lowercase ASCII consisting of `a-z`, `0-9`, `.`, `_`
/// and `-`, and never start or end with a separator. The NUL byte is
/// excluded by construction, which lets the storage layer use `0x00` as a
/// key separator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    /// Parse and validate an account name.
    ///
    /// # Errors
    ///
    /// Returns `IdError::InvalidAccountId` if the name is too short, too
    /// long, contains a character outside `[a-z0-9._-]`, or starts or ends
    /// with a separator.
    pub fn new(name: impl Into<String>) -> Result<Self, IdError> {
        let name = name.into();
        if name.len() < MIN_ACCOUNT_ID_LEN || name.len() > MAX_ACCOUNT_ID_LEN {
            return Err(IdError::InvalidAccountId { name });
        }
        let valid_char = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || "._-".contains(c);
        if !name.chars().all(valid_char) {
            return Err(IdError::InvalidAccountId { name });
        }
        let separator = |c: char| "._-".contains(c);
        if name.starts_with(separator) || name.ends_with(separator) {
            return Err(IdError::InvalidAccountId { name });
        }
        Ok(Self(name))
    }

    /// View the account name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccountId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self.0)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for AccountId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl AsRef<[u8]> for AccountId {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// Macro to define a sequential `u64` identifier type.
///
/// Generates a newtype wrapper with:
/// - `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - transparent `Serialize`/`Deserialize` (plain integer on the wire)
/// - `Display`, `Debug`, `FromStr`
/// - `to_be_bytes`/`from_be_bytes` for order-preserving storage keys
/// - `next()` for counter advancement
macro_rules! seq_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// The first identifier handed out by a fresh collection.
            pub const ZERO: Self = Self(0);

            /// Wrap a raw sequence number.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// The raw sequence number.
            #[must_use]
            pub const fn value(self) -> u64 {
                self.0
            }

            /// The identifier following this one.
            #[must_use]
            pub const fn next(self) -> Self {
                Self(self.0 + 1)
            }

            /// Big-endian byte encoding, order-preserving for key iteration.
            #[must_use]
            pub const fn to_be_bytes(self) -> [u8; 8] {
                self.0.to_be_bytes()
            }

            /// Decode from big-endian bytes.
            #[must_use]
            pub const fn from_be_bytes(bytes: [u8; 8]) -> Self {
                Self(u64::from_be_bytes(bytes))
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<u64>()
                    .map(Self)
                    .map_err(|_| IdError::InvalidSequence)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

seq_id_type!(CourseId, "A course identifier, assigned sequentially from 0.");
seq_id_type!(ModuleId, "A module identifier, assigned sequentially from 0.");
seq_id_type!(LessonId, "A lesson identifier, assigned sequentially from 0.");

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The account name is not a valid platform account identifier.
    #[error("invalid account id: {name}")]
    InvalidAccountId {
        /// The rejected name.
        name: String,
    },

    /// The input is not a valid sequence number.
    #[error("invalid sequence number")]
    InvalidSequence,
}
