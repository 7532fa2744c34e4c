//! Algorithm validators for Qward.
//!
//! A [`Validator`] is a strategy object that builds a circuit
//! exercising a quantum algorithm and classifies each measured
//! bitstring as success or failure. [`run_validator`] orchestrates one
//! full run against any [`qward_hal::Backend`] and returns the raw
//! result alongside derived metrics.
//!
//! Built-in validators:
//!
//! - [`TeleportationValidator`]: teleports a multi-qubit payload and
//!   checks it arrives intact.
//! - [`FlipCoinValidator`]: a fair quantum coin flip.

pub mod error;
pub mod flip_coin;
pub mod teleportation;
pub mod validator;

pub use error::{ValidatorError, ValidatorResult};
pub use flip_coin::FlipCoinValidator;
pub use teleportation::TeleportationValidator;
pub use validator::{run_validator, run_validator_with_timeout, ValidationRun, Validator};
