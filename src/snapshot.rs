//! Immutable inference artifacts published by a successful precompute.
//!
//! A snapshot is self-contained: it copies the entity table and asserted
//! memberships out of the store, so readers holding an `Arc<InferenceSnapshot>`
//! keep observing a coherent state even if the store is mutated and
//! reclassified afterwards (copy-on-recompute). Nothing in a snapshot is ever
//! updated in place.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::diagnostics::PrecomputeDiagnostics;
use crate::entity::{EntityKind, Iri};
use crate::error::QueryError;
use crate::hierarchy::ClassHierarchy;
use crate::index::PropertyIndex;
use crate::literal::Literal;
use crate::store::OntologyStore;

/// One classified state of the ontology: hierarchy, indices, and the entity
/// and membership tables they were derived from.
#[derive(Debug)]
pub struct InferenceSnapshot {
    kinds: HashMap<Iri, EntityKind>,
    /// Asserted members per class, in assertion order.
    members: HashMap<Iri, Vec<Iri>>,
    /// Asserted classes per individual.
    asserted_classes: HashMap<Iri, HashSet<Iri>>,
    hierarchy: ClassHierarchy,
    index: PropertyIndex,
    store_revision: u64,
    diagnostics: PrecomputeDiagnostics,
}

impl InferenceSnapshot {
    pub(crate) fn new(
        store: &OntologyStore,
        hierarchy: ClassHierarchy,
        index: PropertyIndex,
        diagnostics: PrecomputeDiagnostics,
    ) -> Self {
        let kinds: HashMap<Iri, EntityKind> = store
            .entities()
            .map(|(iri, kind)| (iri.clone(), kind))
            .collect();

        let mut members: HashMap<Iri, Vec<Iri>> = HashMap::new();
        let mut asserted_classes: HashMap<Iri, HashSet<Iri>> = HashMap::new();
        for assertion in store.class_assertions() {
            members
                .entry(assertion.class.clone())
                .or_default()
                .push(assertion.individual.clone());
            asserted_classes
                .entry(assertion.individual.clone())
                .or_default()
                .insert(assertion.class.clone());
        }

        Self {
            kinds,
            members,
            asserted_classes,
            hierarchy,
            index,
            store_revision: store.revision(),
            diagnostics,
        }
    }

    /// The declared kind of an identifier at snapshot time.
    #[must_use]
    pub fn entity_kind(&self, iri: &Iri) -> Option<EntityKind> {
        self.kinds.get(iri).copied()
    }

    /// Instances of a class, sorted by identifier.
    ///
    /// With `include_indirect` the whole descendant subtree is flattened.
    /// Without it, only individuals whose most specific asserted class is
    /// exactly the requested class are returned: an individual also asserted
    /// into a strict descendant is excluded.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnknownClass`] if the identifier is not a
    /// declared class.
    pub fn instances_of(
        &self,
        class: &Iri,
        include_indirect: bool,
    ) -> Result<Vec<Iri>, QueryError> {
        if self.entity_kind(class) != Some(EntityKind::Class) {
            return Err(QueryError::UnknownClass { iri: class.clone() });
        }
        let Some(descendants) = self.hierarchy.descendants_of(class) else {
            return Err(QueryError::UnknownClass { iri: class.clone() });
        };

        let mut result: BTreeSet<Iri> = BTreeSet::new();
        if include_indirect {
            for descendant in descendants {
                if let Some(individuals) = self.members.get(descendant) {
                    result.extend(individuals.iter().cloned());
                }
            }
        } else if let Some(individuals) = self.members.get(class) {
            for individual in individuals {
                let in_strict_descendant = self
                    .asserted_classes
                    .get(individual)
                    .is_some_and(|asserted| {
                        asserted
                            .iter()
                            .any(|c| c != class && descendants.contains(c))
                    });
                if !in_strict_descendant {
                    result.insert(individual.clone());
                }
            }
        }
        Ok(result.into_iter().collect())
    }

    /// Individuals related to `subject` through an object property,
    /// including synthesized inverse facts.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnknownProperty`] if the identifier is not a
    /// declared object property. An unknown subject yields an empty sequence.
    pub fn object_property_values(
        &self,
        subject: &Iri,
        property: &Iri,
    ) -> Result<Vec<Iri>, QueryError> {
        if self.entity_kind(property) != Some(EntityKind::ObjectProperty) {
            return Err(QueryError::UnknownProperty {
                iri: property.clone(),
            });
        }
        Ok(self.index.lookup_object_property_values(subject, property))
    }

    /// Literal values attached to `subject` through a data property.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnknownProperty`] if the identifier is not a
    /// declared data property. An unknown subject yields an empty sequence.
    pub fn data_property_values(
        &self,
        subject: &Iri,
        property: &Iri,
    ) -> Result<Vec<Literal>, QueryError> {
        if self.entity_kind(property) != Some(EntityKind::DataProperty) {
            return Err(QueryError::UnknownProperty {
                iri: property.clone(),
            });
        }
        Ok(self.index.lookup_data_property_values(subject, property))
    }

    /// The subsumption hierarchy this snapshot was classified with.
    #[must_use]
    pub const fn hierarchy(&self) -> &ClassHierarchy {
        &self.hierarchy
    }

    /// The property index this snapshot was classified with.
    #[must_use]
    pub const fn index(&self) -> &PropertyIndex {
        &self.index
    }

    /// Store revision the snapshot was built from.
    #[must_use]
    pub const fn store_revision(&self) -> u64 {
        self.store_revision
    }

    /// Diagnostics captured during the precompute pass.
    #[must_use]
    pub const fn diagnostics(&self) -> &PrecomputeDiagnostics {
        &self.diagnostics
    }
}
