mod support;

use dispatch_core::runner::{run_simulation, run_with_hook, DispatchEvent};
use dispatch_core::test_helpers::{assert_heap_order, diagonal_locations, in_memory_reader};
use dispatch_core::{HeapError, Location, LocationReader, ScenarioParams, SimError};

use support::{spiral_locations, write_locations_file};

#[test]
fn run_from_file_keeps_heap_ordered_every_step() {
    let file = write_locations_file(&spiral_locations(2_000));
    let reader = LocationReader::open(file.path()).expect("locations file should open");
    let params = ScenarioParams::new(1_000, 0.5).with_seed(7);

    let mut inserted = 0usize;
    let mut extracted = 0usize;
    let report = run_with_hook(params, reader, |_, event, heap| {
        match event {
            DispatchEvent::Addition { .. } => inserted += 1,
            DispatchEvent::Call { distance } => {
                extracted += 1;
                assert!(heap.as_slice().iter().all(|d| d >= distance));
            }
            DispatchEvent::Update { .. } => {}
        }
        assert_heap_order(heap.as_slice());
        assert!(heap.as_slice().iter().all(|d| *d >= 0.0));
        assert_eq!(heap.size(), inserted - extracted);
    })
    .expect("run should succeed");

    assert_eq!(report.counters.steps(), 1_000);
    assert_eq!(report.counters.calls(), 10);
    assert_eq!(report.counters.additions, inserted);
    assert_eq!(report.remaining_taxis, inserted - extracted);
}

#[test]
fn calls_without_updates_return_nearest_taxis_in_order() {
    // Diagonal taxis get farther away with every record, so with p = 0 each
    // call returns the next nearest still waiting.
    let taxis = diagonal_locations(300);
    let params = ScenarioParams::new(300, 0.0).with_seed(11);
    let report = run_simulation(params, in_memory_reader(&taxis)).expect("run should succeed");

    let hotel = Location::hotel();
    let expected: Vec<f64> = taxis[..3].iter().map(|t| t.distance_to(&hotel)).collect();
    assert_eq!(report.counters.called_distances, expected);
    assert_eq!(report.counters.called_distances[0], 0.0);
}

#[test]
fn updates_never_drive_distances_negative() {
    let taxis = vec![Location::hotel(); 5];
    let params = ScenarioParams::new(99, 1.0).with_seed(3);
    run_with_hook(params, in_memory_reader(&taxis), |_, _, heap| {
        assert!(heap.as_slice().iter().all(|d| *d == 0.0));
    })
    .expect("run should succeed");
}

#[test]
fn every_hundredth_step_is_a_call() {
    let params = ScenarioParams::new(450, 0.3).with_seed(21);
    let mut call_steps = Vec::new();
    run_with_hook(params, in_memory_reader(&spiral_locations(450)), |step, event, _| {
        if matches!(event, DispatchEvent::Call { .. }) {
            call_steps.push(step);
        }
    })
    .expect("run should succeed");
    assert_eq!(call_steps, vec![100, 200, 300, 400]);
}

#[test]
fn missing_locations_file_is_configuration_error() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let err = LocationReader::open(dir.path().join("locations.txt")).expect_err("missing file");
    assert!(err.is_configuration());
}

#[test]
fn too_few_locations_abort_the_run() {
    let params = ScenarioParams::new(50, 0.0).with_seed(1);
    let err = run_simulation(params, in_memory_reader(&spiral_locations(20)))
        .expect_err("run should abort");
    assert!(matches!(err, SimError::InsufficientRecords { consumed: 20 }));
    assert!(!err.is_configuration());
}

#[test]
fn underflow_propagates_as_heap_error() {
    let params = ScenarioParams::new(5, 0.0).with_call_interval(1);
    let err = run_simulation(params, in_memory_reader(&[])).expect_err("empty heap call");
    assert!(matches!(err, SimError::Heap(HeapError::Underflow)));
    assert_eq!(
        err.to_string(),
        "heap underflow: no taxi available to extract"
    );
}

#[test]
fn report_serializes_to_json() {
    let params = ScenarioParams::new(200, 0.25).with_seed(5);
    let report =
        run_simulation(params, in_memory_reader(&spiral_locations(200))).expect("run succeeds");
    let json = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(json["counters"]["additions"], report.counters.additions);
    assert_eq!(json["counters"]["updates"], report.counters.updates);
    assert_eq!(
        json["counters"]["called_distances"]
            .as_array()
            .expect("array")
            .len(),
        2
    );
    assert_eq!(json["remaining_taxis"], report.remaining_taxis);
    assert!(json["elapsed_ms"].as_f64().expect("number") >= 0.0);
}
