//! Strongly-typed entity labels used across the domain.
//!
//! Every inventory entity carries a human-readable label such as `BIN000042`:
//! a three-letter prefix followed by zero-padded decimal digits, nine
//! characters in total. Uniqueness is enforced by the store at insert time,
//! not here.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Total width of a canonical label, prefix included.
pub const LABEL_WIDTH: usize = 9;

macro_rules! impl_label_newtype {
    ($t:ident, $prefix:literal, $name:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            /// Prefix of the canonical label form.
            pub const PREFIX: &'static str = $prefix;

            /// Accept any non-empty identifier string.
            ///
            /// The canonical prefix+digits shape is deliberately not enforced
            /// at this boundary; see `is_canonical` for the strict check.
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                if value.is_empty() {
                    return Err(DomainError::invalid_id(concat!($name, " must not be empty")));
                }
                Ok(Self(value))
            }

            /// Render the canonical zero-padded label for a serial number.
            pub fn from_serial(serial: u32) -> Self {
                Self(format!(
                    "{}{:0width$}",
                    $prefix,
                    serial,
                    width = LABEL_WIDTH - $prefix.len()
                ))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the label matches `PREFIX` + zero-padded digits at the
            /// canonical width.
            pub fn is_canonical(&self) -> bool {
                self.0.len() == LABEL_WIDTH
                    && self.0.starts_with($prefix)
                    && self.0[$prefix.len()..].bytes().all(|b| b.is_ascii_digit())
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_label_newtype!(BinId, "BIN", "BinId");
impl_label_newtype!(SkuId, "SKU", "SkuId");
impl_label_newtype!(BatchId, "BAT", "BatchId");
