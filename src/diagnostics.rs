//! Structured diagnostics returned by a precompute pass.
//!
//! The core does no logging of its own; callers that want observability get
//! these counts back from `precompute_inferences` and report them however
//! they like.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Summary of one successful precompute pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecomputeDiagnostics {
    /// Declared classes.
    pub classes: usize,
    /// Declared individuals.
    pub individuals: usize,
    /// Declared object properties.
    pub object_properties: usize,
    /// Declared data properties.
    pub data_properties: usize,
    /// Asserted subclass axioms.
    pub subclass_axioms: usize,
    /// Asserted class memberships.
    pub class_assertions: usize,
    /// Asserted object-property facts.
    pub object_property_assertions: usize,
    /// Asserted data-property facts.
    pub data_property_assertions: usize,
    /// Inverse facts synthesized into the property index.
    pub synthesized_inverse_facts: usize,
    /// Wall-clock time spent in the pass.
    pub elapsed: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_serialization() {
        let diagnostics = PrecomputeDiagnostics {
            classes: 3,
            individuals: 5,
            object_properties: 2,
            data_properties: 1,
            subclass_axioms: 2,
            class_assertions: 5,
            object_property_assertions: 4,
            data_property_assertions: 2,
            synthesized_inverse_facts: 4,
            elapsed: Duration::from_millis(7),
        };
        let json = serde_json::to_string(&diagnostics).unwrap();
        let back: PrecomputeDiagnostics = serde_json::from_str(&json).unwrap();
        assert_eq!(diagnostics, back);
    }
}
