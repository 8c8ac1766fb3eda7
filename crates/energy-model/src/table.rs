//! Canonical value tables shared by every dimension kind.
//!
//! A [`DimensionTable`] pairs each variant of a dimension enum with its
//! [`CanonicalValue`] (id, name, code, display name) and owns the alias map
//! used by the parsers. Tables are built once, inside a `LazyLock`, and every
//! structural defect is caught while building:
//!
//! - a blank canonical name;
//! - a second value with id 0, or a duplicate id;
//! - an alias that is not already a normalized token, or that is claimed by
//!   two values;
//! - a canonical name whose own token is missing from its aliases.
//!
//! Any of these is a programming error in the static table definitions and
//! aborts initialization with a panic.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::kind::DimensionKind;
use crate::normalize::{is_token, token};

/// Name shared by the fallback value of every kind.
pub const UNRECOGNIZED_NAME: &str = "Unrecognized";

/// Standardized fields of one canonical value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CanonicalValue {
    id: u32,
    name: &'static str,
    code: String,
    display_name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    abbreviation: Option<String>,
}

impl CanonicalValue {
    /// Stable identifier; 0 only for the Unrecognized value.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Canonical human-readable name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Short standardized code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Name used for titles.
    pub fn display_name(&self) -> &str {
        self.display_name
    }

    /// Unit symbol, present only in tables built with abbreviations.
    pub fn abbreviation(&self) -> Option<&str> {
        self.abbreviation.as_deref()
    }
}

/// Definition of a canonical value before defaults are applied.
#[derive(Debug, Clone, Copy)]
pub struct CanonicalDef {
    id: u32,
    name: &'static str,
    code: Option<&'static str>,
    display_name: Option<&'static str>,
    abbreviation: Option<&'static str>,
}

impl CanonicalDef {
    pub fn new(id: u32, name: &'static str) -> Self {
        Self {
            id,
            name,
            code: None,
            display_name: None,
            abbreviation: None,
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: &'static str) -> Self {
        self.display_name = Some(display_name);
        self
    }

    #[must_use]
    pub fn with_abbreviation(mut self, abbreviation: &'static str) -> Self {
        self.abbreviation = Some(abbreviation);
        self
    }

    /// Applies defaults and produces the canonical value.
    ///
    /// - code: explicit code, else the upper-cased abbreviation, else the
    ///   upper-cased first letter of the name;
    /// - display name: the name;
    /// - abbreviation (only when `abbreviated`): the upper-cased first letter
    ///   of the name.
    ///
    /// # Panics
    ///
    /// Panics if the name is blank.
    fn build(self, abbreviated: bool) -> CanonicalValue {
        assert!(
            !self.name.trim().is_empty(),
            "canonical dimension value {} must have a non-empty name",
            self.id
        );
        let initial: String = self
            .name
            .chars()
            .next()
            .map(|ch| ch.to_uppercase().collect())
            .unwrap_or_default();
        let code = match (self.code, self.abbreviation) {
            (Some(code), _) => code.to_string(),
            (None, Some(abbreviation)) => abbreviation.to_uppercase(),
            (None, None) => initial.clone(),
        };
        let abbreviation = abbreviated.then(|| {
            self.abbreviation
                .map_or_else(|| initial.clone(), str::to_string)
        });
        CanonicalValue {
            id: self.id,
            name: self.name,
            code,
            display_name: self.display_name.unwrap_or(self.name),
            abbreviation,
        }
    }
}

/// Canonical values and alias tokens of one dimension kind.
pub struct DimensionTable<D> {
    kind: DimensionKind,
    abbreviated: bool,
    unrecognized: (D, CanonicalValue),
    entries: Vec<(D, CanonicalValue)>,
    tokens: HashMap<&'static str, D>,
}

impl<D> DimensionTable<D>
where
    D: Copy + Eq + fmt::Debug,
{
    /// Creates a table holding only the Unrecognized value (id 0).
    pub fn new(kind: DimensionKind, unrecognized: D) -> Self {
        Self::build_empty(kind, unrecognized, false)
    }

    /// Like [`DimensionTable::new`], but every value carries an abbreviation.
    pub fn with_abbreviations(kind: DimensionKind, unrecognized: D) -> Self {
        Self::build_empty(kind, unrecognized, true)
    }

    fn build_empty(kind: DimensionKind, unrecognized: D, abbreviated: bool) -> Self {
        let record = CanonicalDef::new(0, UNRECOGNIZED_NAME).build(abbreviated);
        Self {
            kind,
            abbreviated,
            unrecognized: (unrecognized, record),
            entries: Vec::new(),
            tokens: HashMap::new(),
        }
    }

    /// Registers a recognized value reachable through `aliases`.
    ///
    /// Values are listed in the order they are registered.
    ///
    /// # Panics
    ///
    /// Panics on any of the table defects listed in the module docs.
    #[must_use]
    pub fn with_value(mut self, value: D, def: CanonicalDef, aliases: &[&'static str]) -> Self {
        let kind = self.kind;
        let record = def.build(self.abbreviated);

        assert!(
            value != self.unrecognized.0 && record.id != 0,
            "{kind}: id 0 is reserved for {UNRECOGNIZED_NAME}"
        );
        assert!(
            self.entries
                .iter()
                .all(|(existing, other)| *existing != value && other.id != record.id),
            "{kind}: {value:?} (id {}) is registered twice",
            record.id
        );
        let name_token = token(record.name);
        assert!(
            aliases.iter().any(|alias| *alias == name_token),
            "{kind}: {value:?} must list its name token {name_token:?} as an alias"
        );
        for &alias in aliases {
            assert!(is_token(alias), "{kind}: alias {alias:?} is not normalized");
            if let Some(previous) = self.tokens.insert(alias, value) {
                panic!("{kind}: alias {alias:?} maps to both {previous:?} and {value:?}");
            }
        }

        self.entries.push((value, record));
        self
    }

    pub fn kind(&self) -> DimensionKind {
        self.kind
    }

    /// The fallback variant.
    pub fn unrecognized(&self) -> D {
        self.unrecognized.0
    }

    /// Finds the value registered for a normalized token.
    pub fn lookup(&self, token: &str) -> Option<D> {
        self.tokens.get(token).copied()
    }

    /// Returns the canonical fields of `value`.
    ///
    /// Variants that were never registered resolve to the Unrecognized record.
    pub fn canonical(&self, value: D) -> &CanonicalValue {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == value)
            .map_or(&self.unrecognized.1, |(_, record)| record)
    }

    /// Recognized values in registration order.
    pub fn values(&self) -> impl Iterator<Item = D> + '_ {
        self.entries.iter().map(|(value, _)| *value)
    }

    /// Number of recognized values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every alias token with the value it maps to, sorted by token.
    pub fn aliases(&self) -> Vec<(&'static str, D)> {
        let mut aliases: Vec<_> = self
            .tokens
            .iter()
            .map(|(token, value)| (*token, *value))
            .collect();
        aliases.sort_unstable_by_key(|(token, _)| *token);
        aliases
    }
}
