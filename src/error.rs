//! Error types for the reasoning core.
//!
//! All errors are strongly typed using thiserror and returned as explicit
//! result values. No operation terminates the caller's process, and no
//! failing call leaves partial state behind.

use thiserror::Error;

use crate::entity::{EntityKind, Iri};

/// Errors raised while populating the ontology store.
///
/// A failing call aborts only itself; the store keeps its last valid state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// An assertion referenced an identifier that was never declared.
    #[error("unknown entity: {iri}")]
    UnknownEntity {
        /// The undeclared identifier.
        iri: Iri,
    },

    /// An entity was used in a role that does not match its declared kind.
    #[error("kind mismatch for {iri}: expected {expected}, found {found}")]
    KindMismatch {
        /// The offending identifier.
        iri: Iri,
        /// The kind required by the role.
        expected: EntityKind,
        /// The kind the entity was declared with.
        found: EntityKind,
    },

    /// A property already has a different declared inverse.
    #[error("duplicate inverse for {property}: already paired with {existing}")]
    DuplicateInverse {
        /// The property being paired.
        property: Iri,
        /// Its previously declared inverse.
        existing: Iri,
    },
}

/// Errors raised by classification and reasoning operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReasonerError {
    /// Two or more distinct classes mutually subsume each other.
    #[error("cyclic class hierarchy involving {class} and {other}")]
    CyclicHierarchy {
        /// A class on the cycle.
        class: Iri,
        /// Another class on the same cycle.
        other: Iri,
    },

    /// The ontology violates a declared constraint; nothing was published.
    #[error("inconsistent ontology: {reason}")]
    InconsistentOntology {
        /// Human-readable description of the violation.
        reason: String,
    },

    /// A read operation was requested before `precompute_inferences`.
    #[error("ontology is not classified yet; call precompute_inferences first")]
    NotClassifiedYet,
}

/// Errors raised by the read-only query surface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The requested class identifier is not a declared class.
    #[error("unknown class: {iri}")]
    UnknownClass {
        /// The unrecognized identifier.
        iri: Iri,
    },

    /// The requested property identifier is not a declared property.
    #[error("unknown property: {iri}")]
    UnknownProperty {
        /// The unrecognized identifier.
        iri: Iri,
    },

    /// No classified snapshot is available to answer the query.
    #[error("ontology is not classified yet; call precompute_inferences first")]
    NotClassifiedYet,
}

/// Top-level error type for the crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OntoError {
    /// Store population error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Classification error.
    #[error("reasoner error: {0}")]
    Reasoner(#[from] ReasonerError),

    /// Query error.
    #[error("query error: {0}")]
    Query(#[from] QueryError),
}

impl OntoError {
    /// Returns true if this is a store population error.
    #[must_use]
    pub const fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }

    /// Returns true if this is a classification error.
    #[must_use]
    pub const fn is_reasoner(&self) -> bool {
        matches!(self, Self::Reasoner(_))
    }

    /// Returns true if this is a query error.
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }
}

/// Result type alias for crate operations.
pub type OntoResult<T> = Result<T, OntoError>;
