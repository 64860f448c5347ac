//! # Ontolite - an embeddable ontology reasoning core
//!
//! Ontolite answers consistency, classification, and retrieval questions over
//! a small ontology fragment held entirely in memory: class assertions,
//! subclass axioms, object/data property assertions, declared inverse
//! properties, and class disjointness.
//!
//! ## Core Concepts
//!
//! - **Store**: append-only owner of declared entities, axioms, and
//!   assertions, populated by an external loader
//! - **Classification**: the `precompute_inferences` barrier that derives the
//!   subsumption hierarchy and property indices
//! - **Snapshot**: the immutable result of classification; recomputing
//!   publishes a new snapshot and never mutates an old one
//! - **Façade**: the read-only query surface handed to presentation layers
//!
//! ## Usage
//!
//! ```
//! use ontolite::{Entity, Iri, OntologyStore, QueryFacade, Reasoner};
//!
//! // Write phase: a loader populates the store.
//! let mut store = OntologyStore::new();
//! store.declare(Entity::class("uni:University")).unwrap();
//! store.declare(Entity::individual("uni:PoliTo")).unwrap();
//! store.declare(Entity::data_property("uni:universityName")).unwrap();
//! store.add_class_assertion("uni:PoliTo", "uni:University").unwrap();
//! store
//!     .add_data_property_assertion("uni:PoliTo", "uni:universityName", "Politecnico di Torino")
//!     .unwrap();
//!
//! // Precompute barrier, then read.
//! let mut reasoner = Reasoner::new();
//! reasoner.load(store);
//! reasoner.precompute_inferences().unwrap();
//!
//! let facade = QueryFacade::new(&reasoner).unwrap();
//! let names = facade
//!     .get_property_values(&Iri::new("uni:PoliTo"), &Iri::new("uni:universityName"))
//!     .unwrap();
//! assert_eq!(names.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod axiom;
pub mod consistency;
pub mod diagnostics;
pub mod entity;
pub mod error;
pub mod facade;
pub mod hierarchy;
pub mod index;
pub mod literal;
pub mod reasoner;
pub mod snapshot;
pub mod store;

// Re-export primary types at crate root for convenience
pub use axiom::{
    ClassAssertion, DataPropertyAssertion, DisjointClassesAxiom, InversePropertyDeclaration,
    ObjectPropertyAssertion, SubClassAxiom,
};
pub use consistency::ConsistencyStatus;
pub use diagnostics::PrecomputeDiagnostics;
pub use entity::{Entity, EntityKind, Iri};
pub use error::{OntoError, OntoResult, QueryError, ReasonerError, StoreError};
pub use facade::{PropertyValue, QueryFacade};
pub use hierarchy::ClassHierarchy;
pub use index::PropertyIndex;
pub use literal::Literal;
pub use reasoner::{Reasoner, ReasonerState};
pub use snapshot::InferenceSnapshot;
pub use store::OntologyStore;
