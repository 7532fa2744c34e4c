//! Qward circuit intermediate representation.
//!
//! A [`Circuit`] is the structural description of a validator circuit
//! prior to execution: qubits, classical bits, and an ordered gate
//! sequence with optional barriers and classically-conditioned gates.
//!
//! Circuits are built once by a validator and never mutated afterwards;
//! structural metrics ([`Circuit::depth`], [`Circuit::width`],
//! [`Circuit::size`]) are deterministic functions of the finished spec.
//!
//! # Example
//!
//! ```
//! use qward_ir::{Circuit, QubitId, ClbitId};
//!
//! let mut circuit = Circuit::with_size("flip_coin", 1, 1);
//! circuit.h(QubitId(0))?;
//! circuit.barrier();
//! circuit.measure(QubitId(0), ClbitId(0))?;
//!
//! assert_eq!(circuit.depth(), 2);
//! assert_eq!(circuit.size(), 2);
//! # Ok::<(), qward_ir::IrError>(())
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Condition, Instruction, InstructionKind};
pub use qubit::{Clbit, ClbitId, Qubit, QubitId};
