//! Minimal consistency checking: disjointness violations.
//!
//! The only constraint enforced by this fragment is class disjointness: an
//! individual may not belong to two classes declared disjoint. Membership is
//! closed over the subclass axioms, walking superclass edges with a visited
//! set, so the check terminates even when the axioms contain a cycle. That
//! matters because consistency runs before classification and must not trip
//! over a cycle that the hierarchy builder will report properly afterwards.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::entity::Iri;
use crate::store::OntologyStore;

/// Outcome of a consistency check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConsistencyStatus {
    /// No declared constraint is violated.
    Consistent,
    /// At least one constraint is violated.
    Inconsistent {
        /// Human-readable description of the first violation found.
        reason: String,
    },
}

impl ConsistencyStatus {
    /// Returns true if the ontology is consistent.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        matches!(self, Self::Consistent)
    }

    /// Returns the violation description, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Consistent => None,
            Self::Inconsistent { reason } => Some(reason),
        }
    }
}

/// Checks the store against its declared disjointness axioms.
///
/// Reports the first violation in deterministic order (assertion insertion
/// order, then class identifier order).
#[must_use]
pub fn check(store: &OntologyStore) -> ConsistencyStatus {
    if store.disjoint_axioms().is_empty() {
        return ConsistencyStatus::Consistent;
    }

    let mut disjoint_pairs: HashSet<(&Iri, &Iri)> = HashSet::new();
    for axiom in store.disjoint_axioms() {
        disjoint_pairs.insert(ordered(&axiom.first, &axiom.second));
    }

    let mut direct_supers: HashMap<&Iri, Vec<&Iri>> = HashMap::new();
    for axiom in store.subclass_axioms() {
        direct_supers
            .entry(&axiom.subclass)
            .or_default()
            .push(&axiom.superclass);
    }

    // Group asserted classes per individual, individuals in first-seen order.
    let mut memberships: HashMap<&Iri, Vec<&Iri>> = HashMap::new();
    let mut order: Vec<&Iri> = Vec::new();
    for assertion in store.class_assertions() {
        let classes = memberships.entry(&assertion.individual).or_default();
        if classes.is_empty() {
            order.push(&assertion.individual);
        }
        classes.push(&assertion.class);
    }

    for individual in order {
        let mut closure: Vec<&Iri> = Vec::new();
        let mut visited: HashSet<&Iri> = HashSet::new();
        let mut stack: Vec<&Iri> = memberships[individual].clone();
        while let Some(class) = stack.pop() {
            if !visited.insert(class) {
                continue;
            }
            closure.push(class);
            if let Some(supers) = direct_supers.get(class) {
                stack.extend(supers.iter().copied());
            }
        }

        closure.sort();
        for (i, &first) in closure.iter().enumerate() {
            // A class declared disjoint with itself is unsatisfiable, so any
            // member violates it.
            if disjoint_pairs.contains(&(first, first)) {
                return ConsistencyStatus::Inconsistent {
                    reason: format!(
                        "individual {individual} belongs to class {first}, which is declared disjoint with itself"
                    ),
                };
            }
            for &second in &closure[i + 1..] {
                if disjoint_pairs.contains(&ordered(first, second)) {
                    return ConsistencyStatus::Inconsistent {
                        reason: format!(
                            "individual {individual} belongs to disjoint classes {first} and {second}"
                        ),
                    };
                }
            }
        }
    }

    ConsistencyStatus::Consistent
}

fn ordered<'a>(a: &'a Iri, b: &'a Iri) -> (&'a Iri, &'a Iri) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
