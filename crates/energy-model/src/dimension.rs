//! The behaviour shared by every dimension type.
//!
//! Each dimension is a plain `Copy` enum whose canonical fields live in a
//! [`DimensionTable`]. Parsing, field access, listing and integer conversion
//! are default methods of [`EnergyDimension`], so a dimension type only
//! supplies its table.
//!
//! # Comparing with strings
//!
//! Every dimension type implements `PartialEq` against `str`, `&str` and
//! `String` in both directions. Such a comparison **parses the string first**
//! and then compares values, so `AccountClass::SmallCommercial == "sc."` is
//! true and any two unparseable strings compare equal to `Unrecognized`.

use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::error::{DimensionError, Result};
use crate::kind::DimensionKind;
use crate::normalize;
use crate::table::{CanonicalValue, DimensionTable};

/// A categorical energy attribute parsed from vendor strings.
pub trait EnergyDimension: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Which dimension this type models.
    const KIND: DimensionKind;

    /// The fallback value (id 0) returned for unmatched input.
    const UNRECOGNIZED: Self;

    /// Canonical values and aliases of this dimension.
    fn table() -> &'static DimensionTable<Self>;

    /// Parses free-form input. Never fails: unmatched input yields
    /// [`EnergyDimension::UNRECOGNIZED`].
    fn parse(input: &str) -> Self {
        let token = normalize::token(input);
        match Self::table().lookup(&token) {
            Some(value) => {
                trace!(
                    kind = %Self::KIND,
                    token = %token,
                    value = ?value,
                    "dimension value recognized"
                );
                value
            }
            None => {
                debug!(kind = %Self::KIND, token = %token, "dimension value unrecognized");
                Self::UNRECOGNIZED
            }
        }
    }

    /// [`EnergyDimension::parse`] for possibly absent input.
    fn parse_optional(input: Option<&str>) -> Self {
        input.map_or(Self::UNRECOGNIZED, Self::parse)
    }

    /// Parses input, returning `None` exactly when the result would be
    /// Unrecognized.
    fn try_parse(input: &str) -> Option<Self> {
        let value = Self::parse(input);
        value.is_recognized().then_some(value)
    }

    /// Parses input, treating Unrecognized as an error.
    fn parse_strict(input: &str) -> Result<Self> {
        Self::try_parse(input).ok_or_else(|| DimensionError::Unrecognized {
            kind: Self::KIND,
            input: input.to_string(),
        })
    }

    /// Every recognized value in declaration order. The returned vector is
    /// a fresh copy.
    fn all() -> Vec<Self> {
        Self::table().values().collect()
    }

    fn canonical(&self) -> &'static CanonicalValue {
        Self::table().canonical(*self)
    }

    fn id(&self) -> u32 {
        self.canonical().id()
    }

    fn name(&self) -> &'static str {
        self.canonical().name()
    }

    fn code(&self) -> &'static str {
        self.canonical().code()
    }

    fn display_name(&self) -> &'static str {
        self.canonical().display_name()
    }

    fn is_recognized(&self) -> bool {
        *self != Self::UNRECOGNIZED
    }
}

/// Conversions, formatting, ordering and string comparison for a dimension
/// enum that implements [`EnergyDimension`].
macro_rules! impl_dimension_traits {
    ($ty:ty) => {
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", $crate::EnergyDimension::name(self))
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::DimensionError;

            /// Strict parse: unrecognized input is an error.
            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <$ty as $crate::EnergyDimension>::parse_strict(s)
            }
        }

        impl ::std::cmp::PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl ::std::cmp::Ord for $ty {
            /// Orders by id.
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                $crate::EnergyDimension::id(self).cmp(&$crate::EnergyDimension::id(other))
            }
        }

        impl From<&str> for $ty {
            fn from(value: &str) -> Self {
                <$ty as $crate::EnergyDimension>::parse(value)
            }
        }

        impl From<String> for $ty {
            fn from(value: String) -> Self {
                <$ty as $crate::EnergyDimension>::parse(&value)
            }
        }

        impl From<Option<&str>> for $ty {
            fn from(value: Option<&str>) -> Self {
                <$ty as $crate::EnergyDimension>::parse_optional(value)
            }
        }

        impl From<$ty> for u32 {
            fn from(value: $ty) -> u32 {
                $crate::EnergyDimension::id(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                $crate::EnergyDimension::name(&value).to_string()
            }
        }

        impl PartialEq<str> for $ty {
            fn eq(&self, other: &str) -> bool {
                *self == <$ty as $crate::EnergyDimension>::parse(other)
            }
        }

        impl PartialEq<&str> for $ty {
            fn eq(&self, other: &&str) -> bool {
                *self == <$ty as $crate::EnergyDimension>::parse(other)
            }
        }

        impl PartialEq<String> for $ty {
            fn eq(&self, other: &String) -> bool {
                *self == <$ty as $crate::EnergyDimension>::parse(other)
            }
        }

        impl PartialEq<$ty> for str {
            fn eq(&self, other: &$ty) -> bool {
                other == self
            }
        }

        impl PartialEq<$ty> for &str {
            fn eq(&self, other: &$ty) -> bool {
                other == *self
            }
        }

        impl PartialEq<$ty> for String {
            fn eq(&self, other: &$ty) -> bool {
                other == self.as_str()
            }
        }
    };
}

pub(crate) use impl_dimension_traits;
