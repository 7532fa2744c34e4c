//! End-to-end sweep tests against the local simulator.

use std::sync::Arc;

use qward_adapter_sim::SimulatorBackend;
use qward_runner::{
    run_sweep, ExperimentOutcome, ParameterGrid, ParameterSet, SweepConfig, SweepSummary,
};
use qward_validators::{TeleportationValidator, Validator, ValidatorError};

fn teleportation_factory(
    params: &ParameterSet,
) -> Result<Box<dyn Validator>, ValidatorError> {
    let payload_size = params
        .get("payload_size")
        .and_then(|v| v.as_int())
        .ok_or_else(|| ValidatorError::Config("missing payload_size".into()))?;
    let payload_size = u32::try_from(payload_size)
        .map_err(|_| ValidatorError::Config("payload_size must be non-negative".into()))?;
    let validator = TeleportationValidator::new(payload_size, &["h", "t"], true)?;
    Ok(Box::new(validator))
}

#[tokio::test]
async fn sweep_yields_one_record_per_combination() {
    let grid = ParameterGrid::new()
        .axis("payload_size", [2i64, 3])
        .unwrap();
    let backend = Arc::new(SimulatorBackend::new());

    let records = run_sweep(
        Arc::new(teleportation_factory),
        backend,
        &grid,
        SweepConfig {
            shots: 200,
            max_concurrency: 2,
            job_timeout: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(records.len(), 2);
    // Sorted by combination index regardless of completion order.
    assert_eq!(records[0].index, 0);
    assert_eq!(records[1].index, 1);
    for record in &records {
        assert_eq!(record.success_rate(), Some(1.0));
    }
}

#[tokio::test]
async fn one_failure_never_aborts_the_sweep() {
    // payload_size 0 is a config error; 2 is fine.
    let grid = ParameterGrid::new()
        .axis("payload_size", [0i64, 2])
        .unwrap();
    let backend = Arc::new(SimulatorBackend::new());

    let records = run_sweep(
        Arc::new(teleportation_factory),
        backend,
        &grid,
        SweepConfig::default(),
    )
    .await
    .unwrap();

    assert_eq!(records.len(), 2);
    match &records[0].outcome {
        ExperimentOutcome::Failed { kind, .. } => assert_eq!(kind, "config"),
        ExperimentOutcome::Metrics(_) => panic!("expected a config failure"),
    }
    assert!(records[1].outcome.is_success());

    let summary = SweepSummary::from_records(&records);
    assert_eq!(summary.total, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.mean_success_rate, Some(1.0));
}

#[tokio::test]
async fn sweep_records_export_cleanly() {
    let grid = ParameterGrid::new()
        .axis("payload_size", [1i64])
        .unwrap();
    let backend = Arc::new(SimulatorBackend::new());

    let records = run_sweep(
        Arc::new(teleportation_factory),
        backend,
        &grid,
        SweepConfig {
            shots: 100,
            ..SweepConfig::default()
        },
    )
    .await
    .unwrap();

    let csv = qward_runner::csv_string(&records);
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.lines().next().unwrap().starts_with("index,payload_size,"));

    let json = qward_runner::json_string(&records).unwrap();
    assert!(json.contains("\"success_rate\": 1.0"));
}

#[tokio::test]
async fn fixed_seed_makes_sweeps_reproducible() {
    let grid = ParameterGrid::new()
        .axis("payload_size", [2i64])
        .unwrap();

    let mut rates = vec![];
    for _ in 0..2 {
        let backend = Arc::new(SimulatorBackend::new().with_seed(7));
        let records = run_sweep(
            Arc::new(teleportation_factory),
            backend,
            &grid,
            SweepConfig {
                shots: 100,
                ..SweepConfig::default()
            },
        )
        .await
        .unwrap();
        let metrics = records[0].outcome.metrics().unwrap();
        rates.push((
            metrics.execution.successful_shots,
            metrics.structural.clone(),
        ));
    }
    assert_eq!(rates[0], rates[1]);
}
