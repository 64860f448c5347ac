//! The reasoner: orchestrates consistency checking, classification, and
//! retrieval over precomputed structures.
//!
//! Lifecycle is `Unloaded -> Loaded -> Classified`. The write phase happens on
//! the store, the `precompute_inferences` barrier derives the hierarchy and
//! property index, and only then do read operations answer. Touching the store
//! after classification drops the reasoner back to `Loaded` and unpublishes
//! its snapshot; readers that already fetched the old snapshot keep it until
//! they re-fetch.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::consistency::{self, ConsistencyStatus};
use crate::diagnostics::PrecomputeDiagnostics;
use crate::entity::{EntityKind, Iri};
use crate::error::{OntoResult, ReasonerError};
use crate::hierarchy::ClassHierarchy;
use crate::index::PropertyIndex;
use crate::literal::Literal;
use crate::snapshot::InferenceSnapshot;
use crate::store::OntologyStore;

/// Lifecycle state of a [`Reasoner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonerState {
    /// No ontology has been loaded.
    #[default]
    Unloaded,
    /// A store is loaded; inferences are not computed (or were invalidated).
    Loaded,
    /// Inferences are precomputed and read operations are available.
    Classified,
}

/// Ontology reasoner over an in-memory store.
///
/// # Examples
///
/// ```
/// use ontolite::{Entity, Iri, OntologyStore, Reasoner};
///
/// let mut store = OntologyStore::new();
/// store.declare(Entity::class("ex:University")).unwrap();
/// store.declare(Entity::individual("ex:PoliTo")).unwrap();
/// store.add_class_assertion("ex:PoliTo", "ex:University").unwrap();
///
/// let mut reasoner = Reasoner::new();
/// reasoner.load(store);
/// reasoner.precompute_inferences().unwrap();
///
/// let instances = reasoner
///     .instances_of(&Iri::new("ex:University"), false)
///     .unwrap();
/// assert_eq!(instances, vec![Iri::new("ex:PoliTo")]);
/// ```
#[derive(Debug, Default)]
pub struct Reasoner {
    store: OntologyStore,
    snapshot: Option<Arc<InferenceSnapshot>>,
    state: ReasonerState,
}

impl Reasoner {
    /// Creates an unloaded reasoner with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a populated store, replacing any previous one.
    ///
    /// Transitions to `Loaded` and unpublishes any previous snapshot.
    pub fn load(&mut self, store: OntologyStore) {
        self.store = store;
        self.snapshot = None;
        self.state = ReasonerState::Loaded;
    }

    /// Read access to the underlying store.
    #[must_use]
    pub const fn store(&self) -> &OntologyStore {
        &self.store
    }

    /// Write access to the underlying store.
    ///
    /// Re-opens the write phase: the reasoner transitions to `Loaded` and its
    /// published snapshot is dropped. Derived artifacts are only rebuilt by an
    /// explicit `precompute_inferences` call; there is no incremental update.
    pub fn store_mut(&mut self) -> &mut OntologyStore {
        self.snapshot = None;
        self.state = ReasonerState::Loaded;
        &mut self.store
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn current_state(&self) -> ReasonerState {
        self.state
    }

    /// Checks the store against its declared constraints.
    ///
    /// Callable in any state; never fails and never touches derived state.
    #[must_use]
    pub fn check_consistency(&self) -> ConsistencyStatus {
        consistency::check(&self.store)
    }

    /// Builds the class hierarchy and property index and publishes them as an
    /// immutable snapshot, transitioning to `Classified`.
    ///
    /// Consistency is checked first. On any failure nothing is published and
    /// the reasoner stays in its previous state.
    ///
    /// # Errors
    ///
    /// Returns [`ReasonerError::InconsistentOntology`] if a declared
    /// constraint is violated, or [`ReasonerError::CyclicHierarchy`] if the
    /// subclass axioms form a cycle among distinct classes.
    pub fn precompute_inferences(&mut self) -> Result<Arc<InferenceSnapshot>, ReasonerError> {
        let start = Instant::now();

        if let ConsistencyStatus::Inconsistent { reason } = self.check_consistency() {
            return Err(ReasonerError::InconsistentOntology { reason });
        }

        let hierarchy = ClassHierarchy::build(&self.store)?;
        let index = PropertyIndex::build(&self.store);

        let diagnostics = PrecomputeDiagnostics {
            classes: self.store.entity_count(EntityKind::Class),
            individuals: self.store.entity_count(EntityKind::Individual),
            object_properties: self.store.entity_count(EntityKind::ObjectProperty),
            data_properties: self.store.entity_count(EntityKind::DataProperty),
            subclass_axioms: self.store.subclass_axioms().len(),
            class_assertions: self.store.class_assertions().len(),
            object_property_assertions: self.store.object_assertions().len(),
            data_property_assertions: self.store.data_assertions().len(),
            synthesized_inverse_facts: index.synthesized_fact_count(),
            elapsed: start.elapsed(),
        };

        let snapshot = Arc::new(InferenceSnapshot::new(
            &self.store,
            hierarchy,
            index,
            diagnostics,
        ));
        self.snapshot = Some(Arc::clone(&snapshot));
        self.state = ReasonerState::Classified;
        Ok(snapshot)
    }

    /// The currently published snapshot, if the reasoner is classified.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<InferenceSnapshot>> {
        self.snapshot.clone()
    }

    /// Instances of a class; see [`InferenceSnapshot::instances_of`].
    ///
    /// # Errors
    ///
    /// Returns [`ReasonerError::NotClassifiedYet`] before
    /// `precompute_inferences`, or [`crate::QueryError::UnknownClass`] for an
    /// identifier that is not a declared class.
    pub fn instances_of(&self, class: &Iri, include_indirect: bool) -> OntoResult<Vec<Iri>> {
        let snapshot = self.classified_snapshot()?;
        Ok(snapshot.instances_of(class, include_indirect)?)
    }

    /// Object-property values of an individual; see
    /// [`InferenceSnapshot::object_property_values`].
    ///
    /// # Errors
    ///
    /// Returns [`ReasonerError::NotClassifiedYet`] before
    /// `precompute_inferences`, or [`crate::QueryError::UnknownProperty`] for
    /// an identifier that is not a declared object property.
    pub fn object_property_values(&self, subject: &Iri, property: &Iri) -> OntoResult<Vec<Iri>> {
        let snapshot = self.classified_snapshot()?;
        Ok(snapshot.object_property_values(subject, property)?)
    }

    /// Data-property values of an individual; see
    /// [`InferenceSnapshot::data_property_values`].
    ///
    /// # Errors
    ///
    /// Returns [`ReasonerError::NotClassifiedYet`] before
    /// `precompute_inferences`, or [`crate::QueryError::UnknownProperty`] for
    /// an identifier that is not a declared data property.
    pub fn data_property_values(&self, subject: &Iri, property: &Iri) -> OntoResult<Vec<Literal>> {
        let snapshot = self.classified_snapshot()?;
        Ok(snapshot.data_property_values(subject, property)?)
    }

    fn classified_snapshot(&self) -> Result<&Arc<InferenceSnapshot>, ReasonerError> {
        match (&self.snapshot, self.state) {
            (Some(snapshot), ReasonerState::Classified) => Ok(snapshot),
            _ => Err(ReasonerError::NotClassifiedYet),
        }
    }
}
