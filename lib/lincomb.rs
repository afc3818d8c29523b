//! Weighted sums of Pauli strings with complex coefficients.
//!
//! A [`LinearCombinaison`] is an ordered sequence of (coefficient,
//! [`PauliString`]) pairs over a fixed number of qubits, such as a qubit
//! Hamiltonian. The term sequence is not required to be deduplicated or
//! sorted; dedicated passes ([`combine`][LinearCombinaison::combine],
//! [`sort`][LinearCombinaison::sort],
//! [`apply_threshold`][LinearCombinaison::apply_threshold],
//! [`divide_into_bitwise_commuting_cliques`][LinearCombinaison::divide_into_bitwise_commuting_cliques])
//! reduce it to canonical forms. Every operation allocates a new value and
//! leaves its operands untouched.

use std::{
    collections::hash_map::Entry,
    fmt,
    ops::{ Add, Mul, Range },
};
use nalgebra as na;
use num_complex::Complex64 as C64;
use rustc_hash::FxHashMap;
use crate::{
    error::{ PauliError, PauliResult },
    pauli::{ Pauli, PauliString },
};

/// A linear combination of [`PauliString`]s with complex coefficients, all
/// over the same number of qubits.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearCombinaison {
    coefs: Vec<C64>,
    paulis: Vec<PauliString>,
    n_qubits: usize,
}

impl fmt::Display for LinearCombinaison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f, "{} Pauli strings for {} qubits (Real, Imaginary)",
            self.num_terms(), self.n_qubits,
        )?;
        for (coef, pauli) in self.iter() {
            write!(f, "\n{} ({:+.5},{:+.5})", pauli, coef.re, coef.im)?;
        }
        Ok(())
    }
}

impl LinearCombinaison {
    /// Coefficient magnitudes below this are considered negligible by
    /// convention; see [`apply_threshold`][Self::apply_threshold].
    pub const DEFAULT_THRESHOLD: f64 = 1e-6;

    /// Create a new linear combination from matching coefficient and Pauli
    /// string sequences.
    ///
    /// Fails if the two sequences have different lengths, if no terms are
    /// given (the qubit count would be undefined), or if the strings do not
    /// all share the same qubit count.
    pub fn new(coefs: Vec<C64>, paulis: Vec<PauliString>) -> PauliResult<Self>
    {
        if coefs.len() != paulis.len() {
            return Err(PauliError::ShapeMismatch(format!(
                "{} coefficients for {} Pauli strings",
                coefs.len(), paulis.len(),
            )));
        }
        let Some(first) = paulis.first() else {
            return Err(PauliError::ShapeMismatch(
                "term sequence cannot be empty".into()));
        };
        let n_qubits = first.num_qubits();
        if paulis.iter().any(|p| p.num_qubits() != n_qubits) {
            return Err(PauliError::ShapeMismatch(
                "all Pauli strings must share the same qubit count".into()));
        }
        Ok(Self { coefs, paulis, n_qubits })
    }

    // invariants (equal lengths, uniform qubit count) are the caller's
    // responsibility; derived operations may produce zero terms
    pub(crate) fn from_parts_unchecked(
        coefs: Vec<C64>,
        paulis: Vec<PauliString>,
        n_qubits: usize,
    ) -> Self
    {
        Self { coefs, paulis, n_qubits }
    }

    /// The number of terms.
    pub fn num_terms(&self) -> usize { self.paulis.len() }

    /// The number of qubits.
    pub fn num_qubits(&self) -> usize { self.n_qubits }

    /// The coefficients, in term order.
    pub fn coefs(&self) -> &[C64] { &self.coefs }

    /// The Pauli strings, in term order.
    pub fn pauli_strings(&self) -> &[PauliString] { &self.paulis }

    /// The `i`-th (coefficient, string) pair.
    ///
    /// *Panics if `i` is out of bounds.*
    pub fn term(&self, i: usize) -> (C64, &PauliString) {
        (self.coefs[i], &self.paulis[i])
    }

    /// Iterate over (coefficient, string) pairs in term order.
    pub fn iter(&self) -> impl Iterator<Item = (&C64, &PauliString)> + '_ {
        self.coefs.iter().zip(&self.paulis)
    }

    /// Restrict to a contiguous range of terms, preserving order.
    ///
    /// *Panics if the range is out of bounds.*
    pub fn slice(&self, range: Range<usize>) -> Self {
        Self {
            coefs: self.coefs[range.clone()].to_vec(),
            paulis: self.paulis[range].to_vec(),
            n_qubits: self.n_qubits,
        }
    }

    /// Restrict to the selected term indices, in the order given.
    ///
    /// *Panics if any index is out of bounds.*
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            coefs: indices.iter().map(|i| self.coefs[*i]).collect(),
            paulis: indices.iter().map(|i| self.paulis[*i].clone()).collect(),
            n_qubits: self.n_qubits,
        }
    }

    /// Concatenate the term sequences of `self` and `other`, in that order.
    /// No deduplication is performed.
    ///
    /// Fails if the two combinations are over different qubit counts.
    pub fn add(&self, other: &Self) -> PauliResult<Self> {
        if self.n_qubits != other.n_qubits {
            return Err(PauliError::QubitCountMismatch {
                left: self.n_qubits,
                right: other.n_qubits,
            });
        }
        let coefs: Vec<C64> =
            self.coefs.iter().chain(&other.coefs).copied().collect();
        let paulis: Vec<PauliString> =
            self.paulis.iter().chain(&other.paulis).cloned().collect();
        Ok(Self { coefs, paulis, n_qubits: self.n_qubits })
    }

    /// Compute the product of two combinations.
    ///
    /// The result has `self.num_terms() * other.num_terms()` terms: the term
    /// at index `i * other.num_terms() + j` is the Pauli product of term `i`
    /// of `self` with term `j` of `other`, with coefficient
    /// `cᵢ · cⱼ · phase`.
    ///
    /// Fails if the two combinations are over different qubit counts.
    pub fn mul(&self, other: &Self) -> PauliResult<Self> {
        if self.n_qubits != other.n_qubits {
            return Err(PauliError::QubitCountMismatch {
                left: self.n_qubits,
                right: other.n_qubits,
            });
        }
        let len = self.num_terms() * other.num_terms();
        let mut coefs: Vec<C64> = Vec::with_capacity(len);
        let mut paulis: Vec<PauliString> = Vec::with_capacity(len);
        for (ci, pi) in self.iter() {
            for (cj, pj) in other.iter() {
                let (prod, phase) = pi.mul(pj)?;
                coefs.push(ci * cj * phase.as_complex());
                paulis.push(prod);
            }
        }
        Ok(Self { coefs, paulis, n_qubits: self.n_qubits })
    }

    /// Multiply every coefficient by a single scalar factor.
    pub fn scale(&self, factor: C64) -> Self {
        Self {
            coefs: self.coefs.iter().map(|c| c * factor).collect(),
            paulis: self.paulis.clone(),
            n_qubits: self.n_qubits,
        }
    }

    /// Multiply coefficients elementwise by one factor per term.
    ///
    /// Fails unless exactly one factor is given per term.
    pub fn scale_terms(&self, factors: &[C64]) -> PauliResult<Self> {
        if factors.len() != self.num_terms() {
            return Err(PauliError::LengthMismatch {
                expected: self.num_terms(),
                found: factors.len(),
            });
        }
        let coefs: Vec<C64> =
            self.coefs.iter().zip(factors).map(|(c, w)| c * w).collect();
        Ok(Self {
            coefs,
            paulis: self.paulis.clone(),
            n_qubits: self.n_qubits,
        })
    }

    /// Stack the zx-bit exports of all terms into a boolean table, with row
    /// `i` holding term `i`'s encoding.
    pub fn to_zx_bits(&self) -> na::DMatrix<bool> {
        let rows: Vec<Vec<bool>> =
            self.paulis.iter().map(|p| p.to_zx_bits()).collect();
        na::DMatrix::from_fn(
            self.num_terms(), 2 * self.n_qubits, |i, j| rows[i][j])
    }

    /// Stack the xz-bit exports of all terms into a boolean table, with row
    /// `i` holding term `i`'s encoding.
    pub fn to_xz_bits(&self) -> na::DMatrix<bool> {
        let rows: Vec<Vec<bool>> =
            self.paulis.iter().map(|p| p.to_xz_bits()).collect();
        na::DMatrix::from_fn(
            self.num_terms(), 2 * self.n_qubits, |i, j| rows[i][j])
    }

    /// Stack the identity-position markers of all terms into a boolean
    /// table, with row `i` holding term `i`'s markers.
    pub fn identity_positions(&self) -> na::DMatrix<bool> {
        let rows: Vec<Vec<bool>> =
            self.paulis.iter().map(|p| p.identity_positions()).collect();
        na::DMatrix::from_fn(self.num_terms(), self.n_qubits, |i, j| rows[i][j])
    }

    /// Merge terms sharing the same Pauli string by summing their
    /// coefficients.
    ///
    /// The output has one term per distinct bit pattern, ordered by first
    /// occurrence in `self`; idempotent. Zero coefficients produced by
    /// cancellation are kept (see [`apply_threshold`][Self::apply_threshold]).
    pub fn combine(&self) -> Self {
        let mut seen: FxHashMap<Vec<bool>, usize> = FxHashMap::default();
        let mut coefs: Vec<C64> = Vec::new();
        let mut paulis: Vec<PauliString> = Vec::new();
        for (coef, pauli) in self.iter() {
            match seen.entry(pauli.to_zx_bits()) {
                Entry::Occupied(e) => {
                    coefs[*e.get()] += coef;
                },
                Entry::Vacant(e) => {
                    e.insert(paulis.len());
                    coefs.push(*coef);
                    paulis.push(pauli.clone());
                },
            }
        }
        Self { coefs, paulis, n_qubits: self.n_qubits }
    }

    /// Keep only the terms whose coefficient magnitude is at least
    /// `threshold`, preserving the original term order.
    ///
    /// Duplicate strings are not merged first; call
    /// [`combine`][Self::combine] beforehand if cancellation between
    /// duplicates should be accounted for.
    pub fn apply_threshold(&self, threshold: f64) -> Self {
        let keep: Vec<usize> =
            self.coefs.iter().enumerate()
            .filter(|(_, c)| c.norm() >= threshold)
            .map(|(i, _)| i)
            .collect();
        self.select(&keep)
    }

    /// Stably reorder terms by their Pauli labels, with precedence
    /// I < X < Y < Z and the least-significant qubit as the primary sort
    /// key.
    pub fn sort(&self) -> Self {
        let mut order: Vec<usize> = (0..self.num_terms()).collect();
        order.sort_by_cached_key(|i| {
            self.paulis[*i].paulis().collect::<Vec<Pauli>>()
        });
        self.select(&order)
    }

    /// Partition the terms into groups whose members all commute bitwise
    /// with each other (on every qubit, either one operator is the identity
    /// or the two are equal).
    ///
    /// Greedy first-fit: each group carries a per-qubit profile of the
    /// non-identity labels committed so far, and a term joins the first group
    /// whose profile it agrees with on its non-identity positions. Every term
    /// of `self` lands in exactly one group, with its original coefficient;
    /// no recombination is performed.
    pub fn divide_into_bitwise_commuting_cliques(&self) -> Vec<Self> {
        let mut profiles: Vec<Vec<Pauli>> = Vec::new();
        let mut members: Vec<Vec<usize>> = Vec::new();
        for (i, pauli) in self.paulis.iter().enumerate() {
            let term: Vec<Pauli> = pauli.paulis().collect();
            let fit = profiles.iter().position(|prof| {
                prof.iter().zip(&term).all(|(p, t)| p.commutes_bitwise(*t))
            });
            if let Some(g) = fit {
                profiles[g].iter_mut().zip(&term)
                    .for_each(|(p, t)| { if *p == Pauli::I { *p = *t; } });
                members[g].push(i);
            } else {
                profiles.push(term);
                members.push(vec![i]);
            }
        }
        members.iter().map(|group| self.select(group)).collect()
    }

    /// Build the dense 2<sup>*n*</sup> × 2<sup>*n*</sup> matrix
    /// Σ<sub>*i*</sub> *c*<sub>*i*</sub> *P*<sub>*i*</sub>.
    ///
    /// Memory and runtime are *O*(4<sup>*n*</sup>); this exists for
    /// cross-checking algebraic identities at small *n*, not for simulation.
    pub fn to_matrix(&self) -> na::DMatrix<C64> {
        let size = 2_usize.pow(self.n_qubits as u32);
        let mut acc: na::DMatrix<C64> = na::DMatrix::zeros(size, size);
        for (coef, pauli) in self.iter() {
            acc += pauli.to_matrix() * *coef;
        }
        acc
    }
}

impl Add<&LinearCombinaison> for &LinearCombinaison {
    type Output = LinearCombinaison;

    /// *Panics if the two combinations are over different qubit counts.*
    fn add(self, rhs: &LinearCombinaison) -> Self::Output {
        match LinearCombinaison::add(self, rhs) {
            Ok(sum) => sum,
            Err(e) => panic!("LinearCombinaison addition: {}", e),
        }
    }
}

impl Mul<&LinearCombinaison> for &LinearCombinaison {
    type Output = LinearCombinaison;

    /// *Panics if the two combinations are over different qubit counts.*
    fn mul(self, rhs: &LinearCombinaison) -> Self::Output {
        match LinearCombinaison::mul(self, rhs) {
            Ok(prod) => prod,
            Err(e) => panic!("LinearCombinaison multiplication: {}", e),
        }
    }
}

impl Mul<C64> for &LinearCombinaison {
    type Output = LinearCombinaison;

    fn mul(self, rhs: C64) -> Self::Output { self.scale(rhs) }
}

impl Mul<&LinearCombinaison> for C64 {
    type Output = LinearCombinaison;

    fn mul(self, rhs: &LinearCombinaison) -> Self::Output { rhs.scale(self) }
}

impl Mul<f64> for &LinearCombinaison {
    type Output = LinearCombinaison;

    fn mul(self, rhs: f64) -> Self::Output { self.scale(rhs.into()) }
}

impl Mul<&LinearCombinaison> for f64 {
    type Output = LinearCombinaison;

    fn mul(self, rhs: &LinearCombinaison) -> Self::Output {
        rhs.scale(self.into())
    }
}
