//! Identifier registries
//!
//!     An [Identifier] is an ordered set of unique name to value mappings. It is built once
//!     from a literal table and never changes afterwards: the type exposes no mutating API,
//!     so the only way to get a different registry is to build a new one.
//!
//!     Names are symbolic (upper case by convention) and values are small integers. Values
//!     may not repeat. A repeated value is a configuration error reported at the key where
//!     it was detected, together with the key that already owns the value.
//!
//! Typed Identifiers
//!
//!     The catalogs in this crate (books, versification systems, reference forms) are
//!     written once as a compact table through the [identifiers] macro. The macro produces
//!     a plain enum with one variant per entry plus the generic lookups every identifier
//!     needs (value, symbol, reverse lookup, parsing from a symbol, serde). Each typed
//!     identifier can also build its [Identifier] registry from that same table, which is
//!     where value uniqueness is enforced.

use crate::bibleutils::error::ConfigurationError;
use std::collections::HashMap;
use std::slice;

/// An immutable, insertion-ordered name to value registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    entries: Vec<(String, u32)>,
    by_name: HashMap<String, usize>,
}

impl Identifier {
    /// Build a registry from ordered `(name, value)` pairs.
    ///
    /// Fails on the first repeated value or repeated name.
    pub fn new<I, K>(entries: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (K, u32)>,
        K: Into<String>,
    {
        let mut registry = Identifier {
            entries: Vec::new(),
            by_name: HashMap::new(),
        };

        for (name, value) in entries {
            let name = name.into();
            if registry.by_name.contains_key(&name) {
                return Err(ConfigurationError::DuplicateName { name });
            }
            if let Some(existing) = registry.name(value) {
                return Err(ConfigurationError::DuplicateValue {
                    key: name,
                    existing: existing.to_string(),
                    value,
                });
            }
            registry.by_name.insert(name.clone(), registry.entries.len());
            registry.entries.push((name, value));
        }

        Ok(registry)
    }

    /// Value registered under `name`.
    pub fn value(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).map(|&index| self.entries[index].1)
    }

    /// Name registered for `value`.
    pub fn name(&self, value: u32) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(name, _)| name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in insertion order. Every call starts a fresh iteration.
    pub fn names(&self) -> Names<'_> {
        Names {
            inner: self.entries.iter(),
        }
    }

    /// `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

/// Iterator over the names of an [Identifier].
#[derive(Debug, Clone)]
pub struct Names<'a> {
    inner: slice::Iter<'a, (String, u32)>,
}

impl<'a> Iterator for Names<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, _)| name.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Names<'_> {}

impl<'a> IntoIterator for &'a Identifier {
    type Item = &'a str;
    type IntoIter = Names<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.names()
    }
}

/// Declare a typed identifier from a compact `Variant = value => "SYMBOL"` table.
///
/// The string after the enum name is the human readable kind used in error messages.
macro_rules! identifiers {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal => $symbol:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every identifier, in table order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn value(self) -> u32 {
                match self {
                    $($name::$variant => $value),+
                }
            }

            pub const fn symbol(self) -> &'static str {
                match self {
                    $($name::$variant => $symbol),+
                }
            }

            pub fn from_value(value: u32) -> Option<Self> {
                Self::ALL.iter().copied().find(|id| id.value() == value)
            }

            /// Case-insensitive lookup by symbol.
            pub fn from_symbol(symbol: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|id| id.symbol().eq_ignore_ascii_case(symbol))
            }

            /// Build the registry backing this identifier, checking value uniqueness.
            pub fn registry() -> Result<
                $crate::bibleutils::identifier::Identifier,
                $crate::bibleutils::error::ConfigurationError,
            > {
                $crate::bibleutils::identifier::Identifier::new(
                    Self::ALL.iter().map(|id| (id.symbol(), id.value())),
                )
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.symbol())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::bibleutils::error::ConfigurationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_symbol(s).ok_or_else(|| {
                    $crate::bibleutils::error::ConfigurationError::UnknownIdentifier {
                        kind: $kind,
                        name: s.to_string(),
                    }
                })
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.symbol())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let symbol = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                symbol.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use identifiers;
