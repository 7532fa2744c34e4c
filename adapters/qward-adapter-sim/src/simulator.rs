//! Simulator backend implementation.

use async_trait::async_trait;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

use qward_hal::{
    Backend, BackendAvailability, BackendConfig, BackendFactory, Capabilities, Counts,
    ExecutionResult, HalError, HalResult, Job, JobId, JobStatus, ValidationResult,
};
use qward_ir::{Circuit, InstructionKind};

use crate::statevector::Statevector;

/// Job data for the simulator.
struct SimJob {
    job: Job,
    result: Option<ExecutionResult>,
}

/// Local statevector simulator backend.
///
/// Supports circuits up to ~20 qubits (limited by memory), mid-circuit
/// measurement, and classically-conditioned gates. With a fixed seed
/// the backend is fully deterministic: submitting the same circuit
/// twice yields identical counts.
pub struct SimulatorBackend {
    /// Backend configuration.
    config: BackendConfig,
    /// Cached capabilities.
    capabilities: Capabilities,
    /// Active jobs.
    jobs: Arc<Mutex<FxHashMap<String, SimJob>>>,
    /// Maximum number of qubits supported.
    max_qubits: u32,
    /// Optional fixed RNG seed for reproducible sampling.
    seed: Option<u64>,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self::with_max_qubits(20)
    }

    /// Create a simulator with custom max qubits.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            config: BackendConfig::new("simulator"),
            capabilities: Capabilities::simulator(max_qubits),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
            max_qubits,
            seed: None,
        }
    }

    /// Fix the RNG seed, making every submission reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Collect reasons a circuit cannot run on this simulator.
    fn validation_reasons(&self, circuit: &Circuit) -> Vec<String> {
        let mut reasons = vec![];
        if circuit.num_qubits() > self.max_qubits as usize {
            reasons.push(format!(
                "circuit has {} qubits but simulator only supports {}",
                circuit.num_qubits(),
                self.max_qubits
            ));
        }
        for name in circuit.gate_names() {
            if !self.capabilities.gate_set.contains(name) {
                reasons.push(format!("unsupported gate '{name}'"));
            }
        }
        reasons
    }

    /// Run simulation synchronously.
    ///
    /// Each shot owns a fresh statevector and classical register; the
    /// recorded bitstring is the classical register, clbit 0 rightmost.
    #[instrument(skip(self, circuit))]
    fn run_simulation(&self, circuit: &Circuit, shots: u32) -> ExecutionResult {
        let start = Instant::now();

        let num_qubits = circuit.num_qubits();
        let num_clbits = circuit.num_clbits();
        debug!("Starting simulation: {} qubits, {} shots", num_qubits, shots);

        let mut rng: SmallRng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let mut counts = Counts::new();

        for _ in 0..shots {
            let bitstring = run_shot(circuit, num_qubits, num_clbits, &mut rng);
            counts.insert(bitstring, 1);
        }

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        ExecutionResult::new(counts, shots)
            .with_backend(self.config.name.clone())
            .with_execution_time(elapsed.as_millis() as u64)
            .with_queue_time(0)
    }
}

/// Execute one shot and return the classical register as a bitstring.
fn run_shot(circuit: &Circuit, num_qubits: usize, num_clbits: usize, rng: &mut impl Rng) -> String {
    let mut sv = Statevector::new(num_qubits);
    let mut creg = vec![false; num_clbits];

    for inst in circuit.instructions() {
        if let Some(cond) = inst.condition {
            if creg[cond.clbit.0 as usize] != cond.value {
                continue;
            }
        }
        match &inst.kind {
            InstructionKind::Gate(gate) => {
                let qubits: Vec<_> = inst.qubits.iter().map(|q| q.0 as usize).collect();
                sv.apply_gate(gate, &qubits);
            }
            InstructionKind::Measure => {
                let outcome = sv.measure(inst.qubits[0].0 as usize, rng);
                creg[inst.clbits[0].0 as usize] = outcome;
            }
            InstructionKind::Reset => {
                sv.reset(inst.qubits[0].0 as usize, rng);
            }
            InstructionKind::Barrier => {}
        }
    }

    creg.iter()
        .rev()
        .map(|&bit| if bit { '1' } else { '0' })
        .collect()
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn availability(&self) -> HalResult<BackendAvailability> {
        Ok(BackendAvailability::always_available())
    }

    async fn validate(&self, circuit: &Circuit) -> HalResult<ValidationResult> {
        let reasons = self.validation_reasons(circuit);
        if reasons.is_empty() {
            Ok(ValidationResult::Valid)
        } else {
            Ok(ValidationResult::Invalid { reasons })
        }
    }

    #[instrument(skip(self, circuit))]
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId> {
        if shots == 0 {
            return Err(HalError::InvalidShots("shots must be at least 1".into()));
        }
        if circuit.num_qubits() > self.max_qubits as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but simulator only supports {}",
                circuit.num_qubits(),
                self.max_qubits
            )));
        }
        let reasons = self.validation_reasons(circuit);
        if !reasons.is_empty() {
            return Err(HalError::InvalidCircuit(reasons.join("; ")));
        }

        let job_id = JobId::new(Uuid::new_v4().to_string());
        let job = Job::new(job_id.clone(), shots).with_backend(self.config.name.clone());

        {
            let mut jobs = self
                .jobs
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            jobs.insert(job_id.0.clone(), SimJob { job, result: None });
        }

        debug!("Submitted job: {}", job_id);

        // The simulator runs inline; remote adapters would dispatch here.
        let result = self
            .run_simulation(circuit, shots)
            .with_job_id(job_id.clone());

        {
            let mut jobs = self
                .jobs
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(sim_job) = jobs.get_mut(&job_id.0) {
                sim_job.result = Some(result);
                sim_job.job = sim_job.job.clone().with_status(JobStatus::Completed);
            }
        }

        Ok(job_id)
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .map(|j| j.job.status.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .and_then(|j| j.result.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn cancel(&self, job_id: &JobId) -> HalResult<()> {
        let mut jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(sim_job) = jobs.get_mut(&job_id.0) {
            if !sim_job.job.status.is_terminal() {
                sim_job.job = sim_job.job.clone().with_status(JobStatus::Cancelled);
            }
            Ok(())
        } else {
            Err(HalError::JobNotFound(job_id.0.clone()))
        }
    }
}

impl BackendFactory for SimulatorBackend {
    fn from_config(config: BackendConfig) -> HalResult<Self> {
        let max_qubits = config
            .extra
            .get("max_qubits")
            .and_then(serde_json::Value::as_u64)
            .map_or(20, |v| v as u32);
        let seed = config.extra.get("seed").and_then(serde_json::Value::as_u64);

        Ok(Self {
            capabilities: Capabilities::simulator(max_qubits),
            config,
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
            max_qubits,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qward_ir::{ClbitId, QubitId};

    #[tokio::test]
    async fn test_simulator_capabilities() {
        let backend = SimulatorBackend::new();
        let caps = backend.capabilities();
        assert!(caps.is_simulator);
        assert_eq!(caps.num_qubits, 20);
    }

    #[tokio::test]
    async fn test_simulator_bell_state() {
        let backend = SimulatorBackend::new();

        let circuit = Circuit::bell().unwrap();
        let job_id = backend.submit(&circuit, 1000).await.unwrap();

        let status = backend.status(&job_id).await.unwrap();
        assert!(status.is_success());

        let result = backend.result(&job_id).await.unwrap();
        assert_eq!(result.shots, 1000);

        // Bell state should produce only 00 and 11
        let counts = &result.counts;
        assert_eq!(counts.get("00") + counts.get("11"), 1000);
        assert_eq!(counts.get("01") + counts.get("10"), 0);
    }

    #[tokio::test]
    async fn test_simulator_ghz_state() {
        let backend = SimulatorBackend::new();

        let circuit = Circuit::ghz(3).unwrap();
        let job_id = backend.submit(&circuit, 1000).await.unwrap();
        let result = backend.result(&job_id).await.unwrap();

        let counts = &result.counts;
        assert_eq!(counts.get("000") + counts.get("111"), 1000);
    }

    #[tokio::test]
    async fn test_simulator_too_many_qubits() {
        let backend = SimulatorBackend::with_max_qubits(5);

        let circuit = Circuit::with_size("test", 10, 0);
        let result = backend.submit(&circuit, 100).await;

        assert!(matches!(result, Err(HalError::CircuitTooLarge(_))));
    }

    #[tokio::test]
    async fn test_simulator_rejects_zero_shots() {
        let backend = SimulatorBackend::new();
        let circuit = Circuit::bell().unwrap();
        let result = backend.submit(&circuit, 0).await;
        assert!(matches!(result, Err(HalError::InvalidShots(_))));
    }

    #[tokio::test]
    async fn test_seeded_submission_is_reproducible() {
        let backend = SimulatorBackend::new().with_seed(42);
        let circuit = Circuit::bell().unwrap();

        let first = backend.submit(&circuit, 256).await.unwrap();
        let second = backend.submit(&circuit, 256).await.unwrap();

        let a = backend.result(&first).await.unwrap();
        let b = backend.result(&second).await.unwrap();
        assert_eq!(a.counts, b.counts);
    }

    #[tokio::test]
    async fn test_conditioned_correction_fires() {
        // Prepare |1⟩, measure it, and apply a conditioned X to a second
        // qubit: the correction must always fire.
        let mut circuit = Circuit::with_size("feedforward", 2, 2);
        circuit.x(QubitId(0)).unwrap();
        circuit.measure(QubitId(0), ClbitId(0)).unwrap();
        circuit.x_if(QubitId(1), ClbitId(0)).unwrap();
        circuit.measure(QubitId(1), ClbitId(1)).unwrap();

        let backend = SimulatorBackend::new();
        let job_id = backend.submit(&circuit, 200).await.unwrap();
        let result = backend.result(&job_id).await.unwrap();

        assert_eq!(result.counts.get("11"), 200);
    }

    #[tokio::test]
    async fn test_validate_reports_size_violation() {
        let backend = SimulatorBackend::with_max_qubits(2);
        let circuit = Circuit::with_size("big", 4, 0);
        let validation = backend.validate(&circuit).await.unwrap();
        assert!(!validation.is_valid());
    }

    #[tokio::test]
    async fn test_wait_returns_result() {
        let backend = SimulatorBackend::new();
        let circuit = Circuit::bell().unwrap();
        let job_id = backend.submit(&circuit, 100).await.unwrap();
        let result = backend.wait(&job_id).await.unwrap();
        assert_eq!(result.counts.total(), 100);
    }
}
