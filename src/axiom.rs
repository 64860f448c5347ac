//! Axiom and assertion types.
//!
//! The supported ontology fragment is a closed set of plain structs:
//! class assertions, subclass axioms, object/data property assertions,
//! inverse-property declarations, and class disjointness. The hierarchy
//! builder and property index consume these by explicit case analysis;
//! there is no open-ended expression polymorphism.

use serde::{Deserialize, Serialize};

use crate::entity::Iri;
use crate::literal::Literal;

/// Asserts that an individual is a member of a class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassAssertion {
    /// The member individual.
    pub individual: Iri,
    /// The class it belongs to.
    pub class: Iri,
}

impl ClassAssertion {
    /// Creates a class assertion.
    #[must_use]
    pub fn new(individual: impl Into<Iri>, class: impl Into<Iri>) -> Self {
        Self {
            individual: individual.into(),
            class: class.into(),
        }
    }
}

/// A directed subsumption edge: every member of `subclass` is a member of
/// `superclass`.
///
/// Self-subsumption (`A ⊑ A`) is legal and collapses into the reflexive
/// closure; cycles among two or more distinct classes are rejected when the
/// hierarchy is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubClassAxiom {
    /// The more specific class.
    pub subclass: Iri,
    /// The more general class.
    pub superclass: Iri,
}

impl SubClassAxiom {
    /// Creates a subclass axiom.
    #[must_use]
    pub fn new(subclass: impl Into<Iri>, superclass: impl Into<Iri>) -> Self {
        Self {
            subclass: subclass.into(),
            superclass: superclass.into(),
        }
    }
}

/// Relates two individuals through an object property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectPropertyAssertion {
    /// The subject individual.
    pub subject: Iri,
    /// The relating property.
    pub property: Iri,
    /// The object individual.
    pub object: Iri,
}

impl ObjectPropertyAssertion {
    /// Creates an object-property assertion.
    #[must_use]
    pub fn new(subject: impl Into<Iri>, property: impl Into<Iri>, object: impl Into<Iri>) -> Self {
        Self {
            subject: subject.into(),
            property: property.into(),
            object: object.into(),
        }
    }
}

/// Attaches a literal value to an individual through a data property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPropertyAssertion {
    /// The subject individual.
    pub subject: Iri,
    /// The relating property.
    pub property: Iri,
    /// The literal value.
    pub value: Literal,
}

impl DataPropertyAssertion {
    /// Creates a data-property assertion.
    #[must_use]
    pub fn new(subject: impl Into<Iri>, property: impl Into<Iri>, value: impl Into<Literal>) -> Self {
        Self {
            subject: subject.into(),
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Declares two object properties as inverses of each other.
///
/// The relation is symmetric: declaring `(P, P')` also pairs `P'` with `P`.
/// Each property may have at most one declared inverse. A property may be
/// declared as its own inverse, which makes it symmetric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InversePropertyDeclaration {
    /// One side of the pair.
    pub property: Iri,
    /// The other side of the pair.
    pub inverse: Iri,
}

impl InversePropertyDeclaration {
    /// Creates an inverse-property declaration.
    #[must_use]
    pub fn new(property: impl Into<Iri>, inverse: impl Into<Iri>) -> Self {
        Self {
            property: property.into(),
            inverse: inverse.into(),
        }
    }
}

/// Declares two classes as disjoint: no individual may be a member of both.
///
/// Membership is closed over the subclass hierarchy, so an individual
/// asserted into a subclass of one side also counts as a member of that side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisjointClassesAxiom {
    /// One of the disjoint classes.
    pub first: Iri,
    /// The other disjoint class.
    pub second: Iri,
}

impl DisjointClassesAxiom {
    /// Creates a disjointness axiom.
    #[must_use]
    pub fn new(first: impl Into<Iri>, second: impl Into<Iri>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axiom_construction() {
        let ca = ClassAssertion::new("ex:PoliTo", "ex:University");
        assert_eq!(ca.individual.as_str(), "ex:PoliTo");
        assert_eq!(ca.class.as_str(), "ex:University");

        let sc = SubClassAxiom::new("ex:Degree", "ex:AcademicProgram");
        assert_eq!(sc.subclass.as_str(), "ex:Degree");

        let opa = ObjectPropertyAssertion::new("ex:s1", "ex:follows", "ex:SemanticWeb");
        assert_eq!(opa.property.as_str(), "ex:follows");

        let dpa = DataPropertyAssertion::new("ex:PoliTo", "ex:universityName", "PoliTo");
        assert!(dpa.value.is_string());
    }

    #[test]
    fn test_axiom_serialization_round_trip() {
        let axiom = SubClassAxiom::new("ex:Degree", "ex:AcademicProgram");
        let json = serde_json::to_string(&axiom).unwrap();
        let back: SubClassAxiom = serde_json::from_str(&json).unwrap();
        assert_eq!(axiom, back);
    }
}
