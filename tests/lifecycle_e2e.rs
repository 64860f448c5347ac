use std::thread;

use ontolite::{
    ConsistencyStatus, Entity, Iri, OntoError, OntologyStore, QueryFacade, Reasoner,
    ReasonerError, ReasonerState,
};

fn small_store() -> OntologyStore {
    let mut store = OntologyStore::new();
    store.declare(Entity::class("ex:University")).unwrap();
    store.declare(Entity::individual("ex:PoliTo")).unwrap();
    store
        .add_class_assertion("ex:PoliTo", "ex:University")
        .unwrap();
    store
}

#[test]
fn full_lifecycle_transitions() {
    let mut reasoner = Reasoner::new();
    assert_eq!(reasoner.current_state(), ReasonerState::Unloaded);

    reasoner.load(small_store());
    assert_eq!(reasoner.current_state(), ReasonerState::Loaded);
    assert!(matches!(
        reasoner.instances_of(&Iri::new("ex:University"), false),
        Err(OntoError::Reasoner(ReasonerError::NotClassifiedYet))
    ));

    reasoner.precompute_inferences().unwrap();
    assert_eq!(reasoner.current_state(), ReasonerState::Classified);

    // Re-opening the write phase invalidates, recompute restores.
    reasoner
        .store_mut()
        .declare(Entity::individual("ex:Unito"))
        .unwrap();
    assert_eq!(reasoner.current_state(), ReasonerState::Loaded);
    reasoner.precompute_inferences().unwrap();
    assert_eq!(reasoner.current_state(), ReasonerState::Classified);
}

#[test]
fn facades_keep_the_snapshot_they_were_built_from() {
    let mut reasoner = Reasoner::new();
    reasoner.load(small_store());
    reasoner.precompute_inferences().unwrap();
    let old_facade = QueryFacade::new(&reasoner).unwrap();

    {
        let store = reasoner.store_mut();
        store.declare(Entity::individual("ex:Unito")).unwrap();
        store
            .add_class_assertion("ex:Unito", "ex:University")
            .unwrap();
    }
    reasoner.precompute_inferences().unwrap();
    let new_facade = QueryFacade::new(&reasoner).unwrap();

    let class = Iri::new("ex:University");
    // The old reader still observes the pre-mutation snapshot.
    assert_eq!(
        old_facade.get_instances(&class, false).unwrap(),
        vec![Iri::new("ex:PoliTo")]
    );
    assert_eq!(
        new_facade.get_instances(&class, false).unwrap(),
        vec![Iri::new("ex:PoliTo"), Iri::new("ex:Unito")]
    );
    assert!(new_facade.snapshot().store_revision() > old_facade.snapshot().store_revision());
}

#[test]
fn precompute_twice_yields_identical_artifacts() {
    let mut reasoner = Reasoner::new();
    reasoner.load(small_store());
    let first = reasoner.precompute_inferences().unwrap();
    let second = reasoner.precompute_inferences().unwrap();

    assert_eq!(
        first.hierarchy().fingerprint(),
        second.hierarchy().fingerprint()
    );
    assert_eq!(first.index().fingerprint(), second.index().fingerprint());
}

#[test]
fn failed_precompute_publishes_nothing() {
    let mut store = small_store();
    store.declare(Entity::class("ex:Company")).unwrap();
    store.declare_disjoint("ex:University", "ex:Company").unwrap();
    store
        .add_class_assertion("ex:PoliTo", "ex:Company")
        .unwrap();

    let mut reasoner = Reasoner::new();
    reasoner.load(store);
    assert!(matches!(
        reasoner.check_consistency(),
        ConsistencyStatus::Inconsistent { .. }
    ));

    let err = reasoner.precompute_inferences().unwrap_err();
    assert!(matches!(err, ReasonerError::InconsistentOntology { .. }));
    assert_eq!(reasoner.current_state(), ReasonerState::Loaded);
    assert!(QueryFacade::new(&reasoner).is_err());

    // The caller decides how to recover: here, by loading a fixed store.
    reasoner.load(small_store());
    reasoner.precompute_inferences().unwrap();
    assert_eq!(reasoner.current_state(), ReasonerState::Classified);
}

#[test]
fn concurrent_readers_share_one_snapshot() {
    let mut store = small_store();
    for i in 0..32 {
        let iri = format!("ex:uni{i}");
        store.declare(Entity::individual(iri.clone())).unwrap();
        store.add_class_assertion(iri, "ex:University").unwrap();
    }

    let mut reasoner = Reasoner::new();
    reasoner.load(store);
    reasoner.precompute_inferences().unwrap();
    let facade = QueryFacade::new(&reasoner).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let facade = facade.clone();
            thread::spawn(move || {
                let class = Iri::new("ex:University");
                for _ in 0..100 {
                    let instances = facade.get_instances(&class, true).unwrap();
                    assert_eq!(instances.len(), 33);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
