//! The ontology store: owns all declared entities, axioms, and assertions.
//!
//! The store is populated once by an external loader during the write phase
//! and is append-only: there is no deletion. Every mutating call validates
//! its inputs completely before recording anything, so a failing call never
//! leaves a partial assertion behind.
//!
//! The store tracks a monotonically increasing revision that bumps on every
//! recorded mutation. Derived artifacts remember the revision they were built
//! from, which makes stale snapshots detectable after a recompute.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::axiom::{
    ClassAssertion, DataPropertyAssertion, DisjointClassesAxiom, InversePropertyDeclaration,
    ObjectPropertyAssertion, SubClassAxiom,
};
use crate::entity::{Entity, EntityKind, Iri};
use crate::error::StoreError;
use crate::literal::Literal;

/// In-memory ontology store.
///
/// # Examples
///
/// ```
/// use ontolite::{Entity, OntologyStore};
///
/// let mut store = OntologyStore::new();
/// store.declare(Entity::class("ex:University")).unwrap();
/// store.declare(Entity::individual("ex:PoliTo")).unwrap();
/// store.add_class_assertion("ex:PoliTo", "ex:University").unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OntologyStore {
    entities: HashMap<Iri, EntityKind>,
    class_assertions: Vec<ClassAssertion>,
    subclass_axioms: Vec<SubClassAxiom>,
    object_assertions: Vec<ObjectPropertyAssertion>,
    data_assertions: Vec<DataPropertyAssertion>,
    inverse_declarations: Vec<InversePropertyDeclaration>,
    inverse_of: HashMap<Iri, Iri>,
    disjoint_axioms: Vec<DisjointClassesAxiom>,
    revision: u64,
}

impl OntologyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an entity.
    ///
    /// Re-declaring an identifier with the same kind is an idempotent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::KindMismatch`] if the identifier is already
    /// declared with a different kind.
    pub fn declare(&mut self, entity: Entity) -> Result<(), StoreError> {
        if let Some(&existing) = self.entities.get(&entity.iri) {
            if existing == entity.kind {
                return Ok(());
            }
            return Err(StoreError::KindMismatch {
                iri: entity.iri,
                expected: existing,
                found: entity.kind,
            });
        }
        self.entities.insert(entity.iri, entity.kind);
        self.revision += 1;
        Ok(())
    }

    /// Asserts that `individual` is a member of `class`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownEntity`] for undeclared identifiers and
    /// [`StoreError::KindMismatch`] when a role does not match.
    pub fn add_class_assertion(
        &mut self,
        individual: impl Into<Iri>,
        class: impl Into<Iri>,
    ) -> Result<(), StoreError> {
        let individual = individual.into();
        let class = class.into();
        self.expect_kind(&individual, EntityKind::Individual)?;
        self.expect_kind(&class, EntityKind::Class)?;
        self.class_assertions
            .push(ClassAssertion { individual, class });
        self.revision += 1;
        Ok(())
    }

    /// Records a subsumption edge `subclass ⊑ superclass`.
    ///
    /// Self-subsumption is accepted and collapses into the reflexive closure.
    /// Cycles among distinct classes are only detected when the hierarchy is
    /// built, since detection needs the transitive closure.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownEntity`] or [`StoreError::KindMismatch`]
    /// if either side is not a declared class.
    pub fn add_sub_class_axiom(
        &mut self,
        subclass: impl Into<Iri>,
        superclass: impl Into<Iri>,
    ) -> Result<(), StoreError> {
        let subclass = subclass.into();
        let superclass = superclass.into();
        self.expect_kind(&subclass, EntityKind::Class)?;
        self.expect_kind(&superclass, EntityKind::Class)?;
        self.subclass_axioms.push(SubClassAxiom {
            subclass,
            superclass,
        });
        self.revision += 1;
        Ok(())
    }

    /// Relates two individuals through an object property.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownEntity`] or [`StoreError::KindMismatch`]
    /// if the subject/object are not individuals or the property is not a
    /// declared object property.
    pub fn add_object_property_assertion(
        &mut self,
        subject: impl Into<Iri>,
        property: impl Into<Iri>,
        object: impl Into<Iri>,
    ) -> Result<(), StoreError> {
        let subject = subject.into();
        let property = property.into();
        let object = object.into();
        self.expect_kind(&subject, EntityKind::Individual)?;
        self.expect_kind(&property, EntityKind::ObjectProperty)?;
        self.expect_kind(&object, EntityKind::Individual)?;
        self.object_assertions.push(ObjectPropertyAssertion {
            subject,
            property,
            object,
        });
        self.revision += 1;
        Ok(())
    }

    /// Attaches a literal value to an individual through a data property.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownEntity`] or [`StoreError::KindMismatch`]
    /// if the subject is not an individual or the property is not a declared
    /// data property.
    pub fn add_data_property_assertion(
        &mut self,
        subject: impl Into<Iri>,
        property: impl Into<Iri>,
        value: impl Into<Literal>,
    ) -> Result<(), StoreError> {
        let subject = subject.into();
        let property = property.into();
        self.expect_kind(&subject, EntityKind::Individual)?;
        self.expect_kind(&property, EntityKind::DataProperty)?;
        self.data_assertions.push(DataPropertyAssertion {
            subject,
            property,
            value: value.into(),
        });
        self.revision += 1;
        Ok(())
    }

    /// Declares two object properties as inverses of each other.
    ///
    /// The declaration is symmetric and at most one inverse is allowed per
    /// property. Re-declaring an existing pair is an idempotent no-op, and a
    /// property may be its own inverse (a symmetric property).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateInverse`] if either property is already
    /// paired with a different one, and [`StoreError::UnknownEntity`] /
    /// [`StoreError::KindMismatch`] if either side is not a declared object
    /// property.
    pub fn declare_inverse(
        &mut self,
        property: impl Into<Iri>,
        inverse: impl Into<Iri>,
    ) -> Result<(), StoreError> {
        let property = property.into();
        let inverse = inverse.into();
        self.expect_kind(&property, EntityKind::ObjectProperty)?;
        self.expect_kind(&inverse, EntityKind::ObjectProperty)?;

        match self.inverse_of.get(&property) {
            Some(existing) if *existing == inverse => return Ok(()),
            Some(existing) => {
                return Err(StoreError::DuplicateInverse {
                    property,
                    existing: existing.clone(),
                })
            }
            None => {}
        }
        if let Some(existing) = self.inverse_of.get(&inverse) {
            // property side is unpaired here, so any pairing on the inverse
            // side necessarily points at a different property.
            return Err(StoreError::DuplicateInverse {
                property: inverse,
                existing: existing.clone(),
            });
        }

        self.inverse_of.insert(property.clone(), inverse.clone());
        self.inverse_of.insert(inverse.clone(), property.clone());
        self.inverse_declarations
            .push(InversePropertyDeclaration { property, inverse });
        self.revision += 1;
        Ok(())
    }

    /// Declares two classes as disjoint.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownEntity`] or [`StoreError::KindMismatch`]
    /// if either side is not a declared class.
    pub fn declare_disjoint(
        &mut self,
        first: impl Into<Iri>,
        second: impl Into<Iri>,
    ) -> Result<(), StoreError> {
        let first = first.into();
        let second = second.into();
        self.expect_kind(&first, EntityKind::Class)?;
        self.expect_kind(&second, EntityKind::Class)?;
        self.disjoint_axioms
            .push(DisjointClassesAxiom { first, second });
        self.revision += 1;
        Ok(())
    }

    /// Returns the declared kind of an identifier, if any.
    #[must_use]
    pub fn entity_kind(&self, iri: &Iri) -> Option<EntityKind> {
        self.entities.get(iri).copied()
    }

    /// Returns true if the identifier has been declared.
    #[must_use]
    pub fn contains(&self, iri: &Iri) -> bool {
        self.entities.contains_key(iri)
    }

    /// Iterates over all declared entities in unspecified order.
    pub fn entities(&self) -> impl Iterator<Item = (&Iri, EntityKind)> {
        self.entities.iter().map(|(iri, kind)| (iri, *kind))
    }

    /// Counts declared entities of the given kind.
    #[must_use]
    pub fn entity_count(&self, kind: EntityKind) -> usize {
        self.entities.values().filter(|&&k| k == kind).count()
    }

    /// All class assertions in insertion order.
    #[must_use]
    pub fn class_assertions(&self) -> &[ClassAssertion] {
        &self.class_assertions
    }

    /// All subclass axioms in insertion order.
    #[must_use]
    pub fn subclass_axioms(&self) -> &[SubClassAxiom] {
        &self.subclass_axioms
    }

    /// All object-property assertions in insertion order.
    #[must_use]
    pub fn object_assertions(&self) -> &[ObjectPropertyAssertion] {
        &self.object_assertions
    }

    /// All data-property assertions in insertion order.
    #[must_use]
    pub fn data_assertions(&self) -> &[DataPropertyAssertion] {
        &self.data_assertions
    }

    /// All inverse-property declarations in insertion order.
    #[must_use]
    pub fn inverse_declarations(&self) -> &[InversePropertyDeclaration] {
        &self.inverse_declarations
    }

    /// Returns the declared inverse of an object property, if any.
    #[must_use]
    pub fn declared_inverse(&self, property: &Iri) -> Option<&Iri> {
        self.inverse_of.get(property)
    }

    /// All disjointness axioms in insertion order.
    #[must_use]
    pub fn disjoint_axioms(&self) -> &[DisjointClassesAxiom] {
        &self.disjoint_axioms
    }

    /// Revision counter; bumps on every recorded mutation.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    fn expect_kind(&self, iri: &Iri, expected: EntityKind) -> Result<(), StoreError> {
        match self.entities.get(iri) {
            None => Err(StoreError::UnknownEntity { iri: iri.clone() }),
            Some(&found) if found != expected => Err(StoreError::KindMismatch {
                iri: iri.clone(),
                expected,
                found,
            }),
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn university_store() -> OntologyStore {
        let mut store = OntologyStore::new();
        store.declare(Entity::class("ex:University")).unwrap();
        store.declare(Entity::individual("ex:PoliTo")).unwrap();
        store.declare(Entity::object_property("ex:follows")).unwrap();
        store
            .declare(Entity::object_property("ex:isFollowedBy"))
            .unwrap();
        store
            .declare(Entity::data_property("ex:universityName"))
            .unwrap();
        store
    }

    #[test]
    fn test_declare_idempotent_same_kind() {
        let mut store = university_store();
        let before = store.revision();
        store.declare(Entity::class("ex:University")).unwrap();
        assert_eq!(store.revision(), before);
    }

    #[test]
    fn test_declare_rejects_kind_change() {
        let mut store = university_store();
        let err = store
            .declare(Entity::individual("ex:University"))
            .unwrap_err();
        assert!(matches!(err, StoreError::KindMismatch { .. }));
    }

    #[test]
    fn test_assertion_rejects_undeclared_entity() {
        let mut store = university_store();
        let err = store
            .add_class_assertion("ex:Ghost", "ex:University")
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::UnknownEntity {
                iri: Iri::new("ex:Ghost")
            }
        );
        assert!(store.class_assertions().is_empty());
    }

    #[test]
    fn test_assertion_rejects_role_mismatch() {
        let mut store = university_store();
        // Class used where an individual is expected.
        let err = store
            .add_class_assertion("ex:University", "ex:University")
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::KindMismatch {
                expected: EntityKind::Individual,
                found: EntityKind::Class,
                ..
            }
        ));
    }

    #[test]
    fn test_class_assertion_records_and_bumps_revision() {
        let mut store = university_store();
        let before = store.revision();
        store
            .add_class_assertion("ex:PoliTo", "ex:University")
            .unwrap();
        assert_eq!(store.class_assertions().len(), 1);
        assert_eq!(store.revision(), before + 1);
    }

    #[test]
    fn test_data_assertion_requires_data_property() {
        let mut store = university_store();
        let err = store
            .add_data_property_assertion("ex:PoliTo", "ex:follows", "nope")
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::KindMismatch {
                expected: EntityKind::DataProperty,
                ..
            }
        ));
    }

    #[test]
    fn test_declare_inverse_symmetric() {
        let mut store = university_store();
        store.declare_inverse("ex:follows", "ex:isFollowedBy").unwrap();
        assert_eq!(
            store.declared_inverse(&Iri::new("ex:follows")),
            Some(&Iri::new("ex:isFollowedBy"))
        );
        assert_eq!(
            store.declared_inverse(&Iri::new("ex:isFollowedBy")),
            Some(&Iri::new("ex:follows"))
        );
    }

    #[test]
    fn test_declare_inverse_idempotent_for_same_pair() {
        let mut store = university_store();
        store.declare_inverse("ex:follows", "ex:isFollowedBy").unwrap();
        let before = store.revision();
        store.declare_inverse("ex:follows", "ex:isFollowedBy").unwrap();
        store.declare_inverse("ex:isFollowedBy", "ex:follows").unwrap();
        assert_eq!(store.revision(), before);
        assert_eq!(store.inverse_declarations().len(), 1);
    }

    #[test]
    fn test_declare_inverse_rejects_second_pairing() {
        let mut store = university_store();
        store
            .declare(Entity::object_property("ex:somethingElse"))
            .unwrap();
        store.declare_inverse("ex:follows", "ex:isFollowedBy").unwrap();
        let err = store
            .declare_inverse("ex:follows", "ex:somethingElse")
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::DuplicateInverse {
                property: Iri::new("ex:follows"),
                existing: Iri::new("ex:isFollowedBy"),
            }
        );
        // The other direction is also blocked.
        let err = store
            .declare_inverse("ex:somethingElse", "ex:isFollowedBy")
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateInverse { .. }));
    }

    #[test]
    fn test_self_inverse_is_allowed() {
        let mut store = university_store();
        store.declare_inverse("ex:follows", "ex:follows").unwrap();
        assert_eq!(
            store.declared_inverse(&Iri::new("ex:follows")),
            Some(&Iri::new("ex:follows"))
        );
    }

    #[test]
    fn test_failed_call_leaves_no_partial_state() {
        let mut store = university_store();
        let before = store.revision();
        // Property is valid but object is undeclared; nothing is recorded.
        store.declare(Entity::individual("ex:s1")).unwrap();
        let err = store
            .add_object_property_assertion("ex:s1", "ex:follows", "ex:Ghost")
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownEntity { .. }));
        assert!(store.object_assertions().is_empty());
        assert_eq!(store.revision(), before + 1); // only the declare bumped
    }

    #[test]
    fn test_entity_counts() {
        let store = university_store();
        assert_eq!(store.entity_count(EntityKind::Class), 1);
        assert_eq!(store.entity_count(EntityKind::Individual), 1);
        assert_eq!(store.entity_count(EntityKind::ObjectProperty), 2);
        assert_eq!(store.entity_count(EntityKind::DataProperty), 1);
    }
}
