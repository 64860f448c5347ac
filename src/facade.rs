//! Read-only query façade over a classified snapshot.
//!
//! The façade pins one `Arc<InferenceSnapshot>` at construction time. It is
//! cheap to clone, holds no locks, and never mutates shared state, so any
//! number of readers may query concurrently. A recompute on the reasoner does
//! not affect existing façades; construct a new one to observe the new
//! snapshot.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::entity::{EntityKind, Iri};
use crate::error::QueryError;
use crate::literal::Literal;
use crate::reasoner::Reasoner;
use crate::snapshot::InferenceSnapshot;

/// A value reached from an individual through a property: another individual
/// for object properties, a literal for data properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    /// The object of an object-property fact.
    Individual(Iri),
    /// The value of a data-property fact.
    Literal(Literal),
}

impl PropertyValue {
    /// Returns the individual, if this is an object-property value.
    #[must_use]
    pub const fn as_individual(&self) -> Option<&Iri> {
        match self {
            Self::Individual(iri) => Some(iri),
            Self::Literal(_) => None,
        }
    }

    /// Returns the literal, if this is a data-property value.
    #[must_use]
    pub const fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(literal) => Some(literal),
            Self::Individual(_) => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Individual(iri) => write!(f, "{iri}"),
            Self::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

/// Thin read-only entry point for external callers.
///
/// # Examples
///
/// ```
/// use ontolite::{Entity, Iri, OntologyStore, QueryFacade, Reasoner};
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
/// let facade = QueryFacade::new(&reasoner).unwrap();
/// let instances = facade.get_instances(&Iri::new("ex:University"), false).unwrap();
/// assert_eq!(instances, vec![Iri::new("ex:PoliTo")]);
/// ```
#[derive(Debug, Clone)]
pub struct QueryFacade {
    snapshot: Arc<InferenceSnapshot>,
}

impl QueryFacade {
    /// Pins the reasoner's current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NotClassifiedYet`] if the reasoner has not
    /// precomputed inferences.
    pub fn new(reasoner: &Reasoner) -> Result<Self, QueryError> {
        reasoner
            .snapshot()
            .map(|snapshot| Self { snapshot })
            .ok_or(QueryError::NotClassifiedYet)
    }

    /// Wraps an already-fetched snapshot.
    #[must_use]
    pub const fn from_snapshot(snapshot: Arc<InferenceSnapshot>) -> Self {
        Self { snapshot }
    }

    /// Instances of a class, sorted by identifier; `indirect` flattens the
    /// descendant subtree.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnknownClass`] if the identifier is not a
    /// declared class.
    pub fn get_instances(&self, class: &Iri, indirect: bool) -> Result<Vec<Iri>, QueryError> {
        self.snapshot.instances_of(class, indirect)
    }

    /// Values reached from an individual through a property, dispatching on
    /// the property's declared kind.
    ///
    /// An unknown individual yields an empty sequence; only the property
    /// identifier is validated.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnknownProperty`] if the identifier is not a
    /// declared object or data property.
    pub fn get_property_values(
        &self,
        individual: &Iri,
        property: &Iri,
    ) -> Result<Vec<PropertyValue>, QueryError> {
        match self.snapshot.entity_kind(property) {
            Some(EntityKind::ObjectProperty) => Ok(self
                .snapshot
                .object_property_values(individual, property)?
                .into_iter()
                .map(PropertyValue::Individual)
                .collect()),
            Some(EntityKind::DataProperty) => Ok(self
                .snapshot
                .data_property_values(individual, property)?
                .into_iter()
                .map(PropertyValue::Literal)
                .collect()),
            _ => Err(QueryError::UnknownProperty {
                iri: property.clone(),
            }),
        }
    }

    /// The snapshot this façade reads from.
    #[must_use]
    pub const fn snapshot(&self) -> &Arc<InferenceSnapshot> {
        &self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use crate::store::OntologyStore;

    fn classified_reasoner() -> Reasoner {
        let mut store = OntologyStore::new();
        store.declare(Entity::class("ex:University")).unwrap();
        store.declare(Entity::individual("ex:PoliTo")).unwrap();
        store.declare(Entity::individual("ex:msc")).unwrap();
        store
            .declare(Entity::object_property("ex:offersDegree"))
            .unwrap();
        store
            .declare(Entity::data_property("ex:universityName"))
            .unwrap();
        store
            .add_class_assertion("ex:PoliTo", "ex:University")
            .unwrap();
        store
            .add_object_property_assertion("ex:PoliTo", "ex:offersDegree", "ex:msc")
            .unwrap();
        store
            .add_data_property_assertion("ex:PoliTo", "ex:universityName", "Politecnico di Torino")
            .unwrap();

        let mut reasoner = Reasoner::new();
        reasoner.load(store);
        reasoner.precompute_inferences().unwrap();
        reasoner
    }

    #[test]
    fn test_facade_requires_classification() {
        let reasoner = Reasoner::new();
        let err = QueryFacade::new(&reasoner).unwrap_err();
        assert_eq!(err, QueryError::NotClassifiedYet);
    }

    #[test]
    fn test_get_property_values_dispatches_on_kind() {
        let reasoner = classified_reasoner();
        let facade = QueryFacade::new(&reasoner).unwrap();
        let polito = Iri::new("ex:PoliTo");

        let degrees = facade
            .get_property_values(&polito, &Iri::new("ex:offersDegree"))
            .unwrap();
        assert_eq!(degrees, vec![PropertyValue::Individual(Iri::new("ex:msc"))]);

        let names = facade
            .get_property_values(&polito, &Iri::new("ex:universityName"))
            .unwrap();
        assert_eq!(
            names,
            vec![PropertyValue::Literal(Literal::from("Politecnico di Torino"))]
        );
    }

    #[test]
    fn test_get_property_values_rejects_non_property() {
        let reasoner = classified_reasoner();
        let facade = QueryFacade::new(&reasoner).unwrap();
        let polito = Iri::new("ex:PoliTo");

        for bad in ["ex:University", "ex:msc", "ex:nothing"] {
            let err = facade
                .get_property_values(&polito, &Iri::new(bad))
                .unwrap_err();
            assert!(matches!(err, QueryError::UnknownProperty { .. }), "{bad}");
        }
    }

    #[test]
    fn test_unknown_individual_yields_empty() {
        let reasoner = classified_reasoner();
        let facade = QueryFacade::new(&reasoner).unwrap();
        let values = facade
            .get_property_values(&Iri::new("ex:ghost"), &Iri::new("ex:offersDegree"))
            .unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_property_value_accessors() {
        let individual = PropertyValue::Individual(Iri::new("ex:msc"));
        assert!(individual.as_individual().is_some());
        assert!(individual.as_literal().is_none());

        let literal = PropertyValue::Literal(Literal::from(true));
        assert!(literal.as_literal().is_some());
        assert_eq!(format!("{literal}"), "true");
    }
}
