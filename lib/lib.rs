//! Symbolic algebra for *n*-qubit Pauli operators.
//!
//! A [`PauliString`][pauli::PauliString] is a tensor product of single-qubit
//! Pauli operators (*I*, *X*, *Y*, *Z*), encoded as a pair of boolean vectors
//! following the convention
//!
//! > *P* = (−i)<sup>*z*·*x*</sup> *Z*<sup>*z*</sup> *X*<sup>*x*</sup>
//!
//! where *z* and *x* are the indicator bit vectors for *Z* and *X* factors.
//! Products of two such encodings close over the same representation, with
//! the accumulated complex phase tracked exactly as a symbolic power of −i.
//!
//! A [`LinearCombinaison`][lincomb::LinearCombinaison] is a weighted sum of
//! Pauli strings with complex coefficients (e.g. a molecular Hamiltonian
//! after fermion-to-qubit mapping), together with the reduction passes needed
//! to keep such sums compact: deduplication, thresholding, sorting, and
//! partitioning into bitwise-commuting cliques for joint measurement.
//!
//! Dense 2<sup>*n*</sup> × 2<sup>*n*</sup> matrix materialization is provided
//! for cross-checking the algebra at small *n*; it is exponential in both
//! time and memory by construction.

pub mod error;
pub mod pauli;
pub mod lincomb;

pub use error::{ PauliError, PauliResult };
pub use pauli::{ Pauli, Phase, PauliString };
pub use lincomb::LinearCombinaison;
