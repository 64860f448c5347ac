//! Subsumption hierarchy: the reflexive-transitive closure of subclass axioms.
//!
//! The closure is computed by propagating ancestor sets in topological order
//! (Kahn's algorithm). Topological processing doubles as cycle detection:
//! if the axioms form a cycle among two or more distinct classes, some class
//! never becomes processable and the build fails with `CyclicHierarchy`.
//! Collapsing such cycles into equivalence classes was considered and
//! rejected; callers that want equivalence must not encode it as a cycle.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::entity::{EntityKind, Iri};
use crate::error::ReasonerError;
use crate::store::OntologyStore;

/// The derived subsumption DAG over all declared classes.
///
/// Both `ancestors_of` and `descendants_of` include the class itself
/// (reflexive closure), which is what instance retrieval wants.
#[derive(Debug, Clone)]
pub struct ClassHierarchy {
    ancestors: HashMap<Iri, HashSet<Iri>>,
    descendants: HashMap<Iri, HashSet<Iri>>,
    fingerprint: blake3::Hash,
}

impl ClassHierarchy {
    /// Builds the hierarchy from the store's subclass axioms.
    ///
    /// Pure with respect to the store: building twice from an unchanged store
    /// yields identical contents and an identical fingerprint.
    ///
    /// # Errors
    ///
    /// Returns [`ReasonerError::CyclicHierarchy`] if two or more distinct
    /// classes mutually subsume each other. Self-subsumption axioms are
    /// absorbed by the reflexive closure and never count as cycles.
    pub fn build(store: &OntologyStore) -> Result<Self, ReasonerError> {
        let mut classes: Vec<Iri> = store
            .entities()
            .filter(|(_, kind)| *kind == EntityKind::Class)
            .map(|(iri, _)| iri.clone())
            .collect();
        classes.sort();

        // Deduplicated direct edges, self-edges dropped.
        let mut direct_supers: HashMap<Iri, Vec<Iri>> = HashMap::new();
        let mut direct_subs: HashMap<Iri, Vec<Iri>> = HashMap::new();
        let mut seen_edges: HashSet<(Iri, Iri)> = HashSet::new();
        for axiom in store.subclass_axioms() {
            if axiom.subclass == axiom.superclass {
                continue;
            }
            let edge = (axiom.subclass.clone(), axiom.superclass.clone());
            if !seen_edges.insert(edge) {
                continue;
            }
            direct_supers
                .entry(axiom.subclass.clone())
                .or_default()
                .push(axiom.superclass.clone());
            direct_subs
                .entry(axiom.superclass.clone())
                .or_default()
                .push(axiom.subclass.clone());
        }

        let mut ancestors: HashMap<Iri, HashSet<Iri>> = classes
            .iter()
            .map(|c| (c.clone(), HashSet::from([c.clone()])))
            .collect();

        let mut indegree: HashMap<&Iri, usize> = classes
            .iter()
            .map(|c| (c, direct_supers.get(c).map_or(0, Vec::len)))
            .collect();

        let mut queue: VecDeque<&Iri> = classes
            .iter()
            .filter(|c| indegree.get(*c) == Some(&0))
            .collect();

        let mut processed = 0usize;
        while let Some(class) = queue.pop_front() {
            processed += 1;
            let class_ancestors = ancestors
                .get(class)
                .cloned()
                .unwrap_or_default();
            if let Some(subs) = direct_subs.get(class) {
                for sub in subs {
                    if let Some(set) = ancestors.get_mut(sub) {
                        set.extend(class_ancestors.iter().cloned());
                    }
                    if let Some(deg) = indegree.get_mut(sub) {
                        *deg -= 1;
                        if *deg == 0 {
                            queue.push_back(sub);
                        }
                    }
                }
            }
        }

        if processed < classes.len() {
            return Err(find_cycle_pair(&classes, &indegree, &direct_supers));
        }

        let mut descendants: HashMap<Iri, HashSet<Iri>> = classes
            .iter()
            .map(|c| (c.clone(), HashSet::new()))
            .collect();
        for (class, ancs) in &ancestors {
            for anc in ancs {
                if let Some(set) = descendants.get_mut(anc) {
                    set.insert(class.clone());
                }
            }
        }

        let fingerprint = fingerprint_closure(&classes, &ancestors);

        Ok(Self {
            ancestors,
            descendants,
            fingerprint,
        })
    }

    /// Returns true if the class is part of the hierarchy.
    #[must_use]
    pub fn contains(&self, class: &Iri) -> bool {
        self.ancestors.contains_key(class)
    }

    /// All classes whose members include the members of `class`, including
    /// the class itself. `None` for an unknown class.
    #[must_use]
    pub fn ancestors_of(&self, class: &Iri) -> Option<&HashSet<Iri>> {
        self.ancestors.get(class)
    }

    /// All classes whose members are members of `class`, including the class
    /// itself. `None` for an unknown class.
    #[must_use]
    pub fn descendants_of(&self, class: &Iri) -> Option<&HashSet<Iri>> {
        self.descendants.get(class)
    }

    /// Returns true if `sub ⊑ sup` holds in the closure (reflexively).
    #[must_use]
    pub fn is_subclass_of(&self, sub: &Iri, sup: &Iri) -> bool {
        self.ancestors
            .get(sub)
            .is_some_and(|ancs| ancs.contains(sup))
    }

    /// Number of classes in the hierarchy.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.ancestors.len()
    }

    /// Stable content hash of the closure.
    #[must_use]
    pub const fn fingerprint(&self) -> blake3::Hash {
        self.fingerprint
    }
}

fn fingerprint_closure(
    classes: &[Iri],
    ancestors: &HashMap<Iri, HashSet<Iri>>,
) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    for class in classes {
        hash_str(&mut hasher, class.as_str());
        if let Some(ancs) = ancestors.get(class) {
            let mut sorted: Vec<&Iri> = ancs.iter().collect();
            sorted.sort();
            for anc in sorted {
                hash_str(&mut hasher, anc.as_str());
            }
        }
    }
    hasher.finalize()
}

fn hash_str(hasher: &mut blake3::Hasher, s: &str) {
    // Length prefix keeps adjacent strings unambiguous.
    hasher.update(&(s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

/// Walks unprocessed superclass edges until a class repeats, which pins down
/// two distinct classes on an actual cycle rather than a class that is merely
/// downstream of one.
fn find_cycle_pair(
    classes: &[Iri],
    indegree: &HashMap<&Iri, usize>,
    direct_supers: &HashMap<Iri, Vec<Iri>>,
) -> ReasonerError {
    let stuck: HashSet<&Iri> = indegree
        .iter()
        .filter(|(_, deg)| **deg > 0)
        .map(|(iri, _)| *iri)
        .collect();

    // An incomplete topological sort guarantees a stuck class.
    let Some(start) = classes.iter().find(|c| stuck.contains(c)) else {
        return ReasonerError::InconsistentOntology {
            reason: "hierarchy build failed without a stuck class".to_string(),
        };
    };

    let mut visited: HashSet<&Iri> = HashSet::new();
    let mut current = start;
    loop {
        if !visited.insert(current) {
            break;
        }
        let next = direct_supers
            .get(current)
            .and_then(|supers| supers.iter().find(|s| stuck.contains(s)));
        match next {
            Some(next) => current = next,
            // Every stuck class has a stuck superclass; defensive fallback.
            None => break,
        }
    }

    let other = direct_supers
        .get(current)
        .and_then(|supers| supers.iter().find(|s| stuck.contains(s) && **s != *current))
        .unwrap_or(start);

    ReasonerError::CyclicHierarchy {
        class: current.clone(),
        other: other.clone(),
    }
}
