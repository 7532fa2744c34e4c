//! Local statevector simulator backend for Qward.
//!
//! Implements the [`qward_hal::Backend`] trait with an in-process
//! statevector simulation. Supports mid-circuit measurement and
//! classically-conditioned gates (feed-forward), and can be seeded for
//! fully reproducible sampling.

pub mod simulator;
pub mod statevector;

pub use simulator::SimulatorBackend;
pub use statevector::Statevector;
