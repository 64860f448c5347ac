//! Derived property indices over object- and data-property assertions.
//!
//! The index is a pure function of the store: building it twice from an
//! unchanged store yields identical contents and fingerprints. For every
//! object property with a declared inverse, assertions are mirrored into
//! synthesized facts on the inverse property at build time. Synthesized
//! facts exist only in the index; they are never written back to the store.

use std::collections::{HashMap, HashSet};

use crate::entity::Iri;
use crate::literal::Literal;
use crate::store::OntologyStore;

#[derive(Debug, Clone, Default)]
struct ObjectFacts {
    direct: HashMap<Iri, Vec<Iri>>,
    synthesized: HashMap<Iri, Vec<Iri>>,
}

/// Forward and inverse indices over property assertions.
#[derive(Debug, Clone)]
pub struct PropertyIndex {
    object: HashMap<Iri, ObjectFacts>,
    data: HashMap<Iri, HashMap<Iri, Vec<Literal>>>,
    synthesized_count: usize,
    fingerprint: blake3::Hash,
}

impl PropertyIndex {
    /// Builds the index from the store's current assertions.
    #[must_use]
    pub fn build(store: &OntologyStore) -> Self {
        let mut object: HashMap<Iri, ObjectFacts> = HashMap::new();
        let mut synthesized_count = 0usize;

        for assertion in store.object_assertions() {
            object
                .entry(assertion.property.clone())
                .or_default()
                .direct
                .entry(assertion.subject.clone())
                .or_default()
                .push(assertion.object.clone());

            if let Some(inverse) = store.declared_inverse(&assertion.property) {
                object
                    .entry(inverse.clone())
                    .or_default()
                    .synthesized
                    .entry(assertion.object.clone())
                    .or_default()
                    .push(assertion.subject.clone());
                synthesized_count += 1;
            }
        }

        let mut data: HashMap<Iri, HashMap<Iri, Vec<Literal>>> = HashMap::new();
        for assertion in store.data_assertions() {
            data.entry(assertion.property.clone())
                .or_default()
                .entry(assertion.subject.clone())
                .or_default()
                .push(assertion.value.clone());
        }

        let fingerprint = fingerprint_index(&object, &data);

        Self {
            object,
            data,
            synthesized_count,
            fingerprint,
        }
    }

    /// Individuals related to `subject` through an object property.
    ///
    /// Direct assertions come first in insertion order, followed by
    /// synthesized inverse facts; duplicates keep their first occurrence.
    /// Unknown subjects or properties yield an empty sequence.
    #[must_use]
    pub fn lookup_object_property_values(&self, subject: &Iri, property: &Iri) -> Vec<Iri> {
        let Some(facts) = self.object.get(property) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        let mut seen: HashSet<&Iri> = HashSet::new();
        let direct = facts.direct.get(subject).map_or(&[][..], Vec::as_slice);
        let synthesized = facts.synthesized.get(subject).map_or(&[][..], Vec::as_slice);
        for object in direct.iter().chain(synthesized) {
            if seen.insert(object) {
                out.push(object.clone());
            }
        }
        out
    }

    /// Literal values attached to `subject` through a data property, in
    /// assertion order. Data properties have no inverse semantics.
    #[must_use]
    pub fn lookup_data_property_values(&self, subject: &Iri, property: &Iri) -> Vec<Literal> {
        self.data
            .get(property)
            .and_then(|by_subject| by_subject.get(subject))
            .cloned()
            .unwrap_or_default()
    }

    /// Number of synthesized inverse facts produced at build time.
    #[must_use]
    pub const fn synthesized_fact_count(&self) -> usize {
        self.synthesized_count
    }

    /// Stable content hash of the index.
    #[must_use]
    pub const fn fingerprint(&self) -> blake3::Hash {
        self.fingerprint
    }
}

fn fingerprint_index(
    object: &HashMap<Iri, ObjectFacts>,
    data: &HashMap<Iri, HashMap<Iri, Vec<Literal>>>,
) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();

    let mut object_props: Vec<&Iri> = object.keys().collect();
    object_props.sort();
    for property in object_props {
        hash_str(&mut hasher, property.as_str());
        let facts = &object[property];
        for (tag, map) in [(b"d", &facts.direct), (b"s", &facts.synthesized)] {
            hasher.update(tag);
            let mut subjects: Vec<&Iri> = map.keys().collect();
            subjects.sort();
            for subject in subjects {
                hash_str(&mut hasher, subject.as_str());
                for value in &map[subject] {
                    hash_str(&mut hasher, value.as_str());
                }
            }
        }
    }

    let mut data_props: Vec<&Iri> = data.keys().collect();
    data_props.sort();
    for property in data_props {
        hash_str(&mut hasher, property.as_str());
        let by_subject = &data[property];
        let mut subjects: Vec<&Iri> = by_subject.keys().collect();
        subjects.sort();
        for subject in subjects {
            hash_str(&mut hasher, subject.as_str());
            for value in &by_subject[subject] {
                hash_literal(&mut hasher, value);
            }
        }
    }

    hasher.finalize()
}

fn hash_str(hasher: &mut blake3::Hasher, s: &str) {
    hasher.update(&(s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

fn hash_literal(hasher: &mut blake3::Hasher, literal: &Literal) {
    match literal {
        Literal::String(v) => {
            hasher.update(b"S");
            hash_str(hasher, v);
        }
        Literal::Number(v) => {
            hasher.update(b"N");
            hasher.update(&v.to_bits().to_le_bytes());
        }
        Literal::Bool(v) => {
            hasher.update(b"B");
            hasher.update(&[u8::from(*v)]);
        }
    }
}
