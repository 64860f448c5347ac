//! Ontology entities and identity.
//!
//! Every class, individual, and property in an ontology is identified by an
//! IRI-like string. Stable identifiers are the prerequisite for everything
//! else: assertions reference entities by identifier, and the reasoner's
//! derived structures are keyed by identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An IRI-like entity identifier.
///
/// Identity is plain string equality; the core performs no IRI resolution or
/// normalization. Loaders are expected to hand over already-expanded
/// identifiers.
///
/// # Examples
///
/// ```
/// use ontolite::Iri;
///
/// let a = Iri::new("http://example.org/uni#PoliTo");
/// let b = Iri::new("http://example.org/uni#PoliTo");
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    /// Creates an identifier from any string-like value.
    #[must_use]
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Iri {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Iri {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The role an entity plays in the ontology.
///
/// Uniqueness is enforced per identifier: once declared, an identifier keeps
/// its kind for the lifetime of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A category; individuals are members of classes.
    Class,
    /// A concrete instance (e.g., a specific university).
    Individual,
    /// A relation between two individuals.
    ObjectProperty,
    /// A relation between an individual and a literal value.
    DataProperty,
}

impl EntityKind {
    /// Returns a human-readable kind name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Individual => "individual",
            Self::ObjectProperty => "object property",
            Self::DataProperty => "data property",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A declared entity: an identifier paired with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    /// The entity identifier.
    pub iri: Iri,
    /// The declared kind.
    pub kind: EntityKind,
}

impl Entity {
    /// Creates an entity declaration.
    #[must_use]
    pub fn new(iri: impl Into<Iri>, kind: EntityKind) -> Self {
        Self {
            iri: iri.into(),
            kind,
        }
    }

    /// Declares a class.
    #[must_use]
    pub fn class(iri: impl Into<Iri>) -> Self {
        Self::new(iri, EntityKind::Class)
    }

    /// Declares an individual.
    #[must_use]
    pub fn individual(iri: impl Into<Iri>) -> Self {
        Self::new(iri, EntityKind::Individual)
    }

    /// Declares an object property.
    #[must_use]
    pub fn object_property(iri: impl Into<Iri>) -> Self {
        Self::new(iri, EntityKind::ObjectProperty)
    }

    /// Declares a data property.
    #[must_use]
    pub fn data_property(iri: impl Into<Iri>) -> Self {
        Self::new(iri, EntityKind::DataProperty)
    }
}
