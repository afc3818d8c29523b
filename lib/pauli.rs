//! Single Pauli operators on a register of qubits.
//!
//! A [`PauliString`] encodes a tensor product of single-qubit Pauli operators
//! as two boolean vectors `z_bits` and `x_bits` (index 0 = least-significant
//! qubit), representing the operator
//!
//! > (−i)<sup>*z*·*x*</sup> *Z*<sup>*z*</sup> *X*<sup>*x*</sup>
//!
//! i.e. the raw per-qubit product of *Z* and *X* factors with the phase
//! (−i)<sup>Σ *z*<sub>*i*</sub>*x*<sub>*i*</sub></sup> folded in, so that
//! qubits carrying both bits hold a proper *Y*. Products of two encodings
//! stay in this form; the leftover scalar is returned as an exact [`Phase`].

use std::{ fmt, ops::Mul, str::FromStr };
use nalgebra as na;
use num_complex::Complex64 as C64;
use once_cell::sync::Lazy;
use crate::{
    error::{ PauliError, PauliResult },
    lincomb::LinearCombinaison,
};

/// A single-qubit Pauli operator.
///
/// The derived ordering (`I < X < Y < Z`) is the label precedence used when
/// sorting Pauli strings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pauli {
    /// Identity
    I,
    /// σ<sub>*x*</sub>
    X,
    /// σ<sub>*y*</sub>
    Y,
    /// σ<sub>*z*</sub>
    Z,
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::I => write!(f, "{}", if f.alternate() { "." } else { "I" }),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl TryFrom<char> for Pauli {
    type Error = PauliError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'I' => Ok(Self::I),
            'X' => Ok(Self::X),
            'Y' => Ok(Self::Y),
            'Z' => Ok(Self::Z),
            _ => Err(PauliError::InvalidLabel(c)),
        }
    }
}

impl Pauli {
    /// Decode from a (*z*, *x*) indicator bit pair.
    pub fn from_zx(z: bool, x: bool) -> Self {
        match (z, x) {
            (false, false) => Self::I,
            (false, true ) => Self::X,
            (true,  true ) => Self::Y,
            (true,  false) => Self::Z,
        }
    }

    /// Encode as a (*z*, *x*) indicator bit pair.
    pub fn to_zx(self) -> (bool, bool) {
        match self {
            Self::I => (false, false),
            Self::X => (false, true ),
            Self::Y => (true,  true ),
            Self::Z => (true,  false),
        }
    }

    /// The uppercase label character.
    pub fn as_char(self) -> char {
        match self {
            Self::I => 'I',
            Self::X => 'X',
            Self::Y => 'Y',
            Self::Z => 'Z',
        }
    }

    /// Return `true` if `self` and `other` commute on a single qubit, which
    /// holds iff either is the identity or the two are equal.
    pub fn commutes_bitwise(self, other: Self) -> bool {
        match (self, other) {
            (_, Self::I) => true,
            (Self::I, _) => true,
            (a, b) if a == b => true,
            _ => false,
        }
    }

    /// The 2 × 2 matrix of the operator.
    pub fn matrix(self) -> &'static na::DMatrix<C64> {
        match self {
            Self::I => Lazy::force(&PAULI_I),
            Self::X => Lazy::force(&PAULI_X),
            Self::Y => Lazy::force(&PAULI_Y),
            Self::Z => Lazy::force(&PAULI_Z),
        }
    }
}

/// A complex phase factor limited to integer powers of −i.
///
/// This is the scalar left over by a product of two [`PauliString`]s; the
/// arithmetic is exact (no floating point is involved until
/// [`as_complex`][Self::as_complex]).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// (−i)⁰ = +1
    Pos1,
    /// (−i)¹ = −i
    NegI,
    /// (−i)² = −1
    Neg1,
    /// (−i)³ = +i
    PosI,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Pos1 => write!(f, "+1"),
            Self::NegI => write!(f, "-i"),
            Self::Neg1 => write!(f, "-1"),
            Self::PosI => write!(f, "+i"),
        }
    }
}

impl Phase {
    /// Convert to the bare exponent on −i.
    pub fn to_int(self) -> isize {
        match self {
            Self::Pos1 => 0,
            Self::NegI => 1,
            Self::Neg1 => 2,
            Self::PosI => 3,
        }
    }

    /// Convert from a bare exponent on −i (modulo 4).
    pub fn from_int(i: isize) -> Self {
        match i.rem_euclid(4) {
            0 => Self::Pos1,
            1 => Self::NegI,
            2 => Self::Neg1,
            3 => Self::PosI,
            _ => unreachable!(),
        }
    }

    /// The multiplicative inverse (equivalently, the complex conjugate).
    pub fn conj(self) -> Self { Self::from_int(-self.to_int()) }

    pub fn as_complex(self) -> C64 {
        match self {
            Self::Pos1 => 1.0_f64.into(),
            Self::NegI => -C64::i(),
            Self::Neg1 => (-1.0_f64).into(),
            Self::PosI => C64::i(),
        }
    }
}

impl Mul for Phase {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_int(self.to_int() + rhs.to_int())
    }
}

impl Mul<C64> for Phase {
    type Output = C64;

    fn mul(self, rhs: C64) -> Self::Output { self.as_complex() * rhs }
}

impl Mul<Phase> for C64 {
    type Output = C64;

    fn mul(self, rhs: Phase) -> Self::Output { self * rhs.as_complex() }
}

/// An *n*-qubit Pauli operator stored as *Z* and *X* indicator bit vectors.
///
/// Index 0 of either vector is the least-significant qubit. Two strings are
/// equal exactly when their bit patterns are equal; the type is a plain value
/// and is never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PauliString {
    z_bits: Vec<bool>,
    x_bits: Vec<bool>,
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for k in (0..self.num_qubits()).rev() {
            if f.alternate() {
                write!(f, "{:#}", self.pauli(k))?;
            } else {
                write!(f, "{}", self.pauli(k))?;
            }
        }
        Ok(())
    }
}

impl FromStr for PauliString {
    type Err = PauliError;

    /// Parse a label string over {I, X, Y, Z} (case-insensitive), leftmost
    /// character = most-significant qubit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s.chars().count();
        let mut z_bits: Vec<bool> = Vec::with_capacity(n);
        let mut x_bits: Vec<bool> = Vec::with_capacity(n);
        for c in s.chars().rev() {
            let (z, x) = Pauli::try_from(c)?.to_zx();
            z_bits.push(z);
            x_bits.push(x);
        }
        Ok(Self { z_bits, x_bits })
    }
}

impl PauliString {
    /// Create a new Pauli string from its *Z* and *X* indicator bit vectors.
    ///
    /// Fails if the two vectors have different lengths.
    pub fn new(z_bits: Vec<bool>, x_bits: Vec<bool>) -> PauliResult<Self> {
        if z_bits.len() != x_bits.len() {
            return Err(PauliError::LengthMismatch {
                expected: z_bits.len(),
                found: x_bits.len(),
            });
        }
        Ok(Self { z_bits, x_bits })
    }

    /// Create the `n`-qubit identity string.
    pub fn identity(n: usize) -> Self {
        Self { z_bits: vec![false; n], x_bits: vec![false; n] }
    }

    /// Create a string acting with a single Pauli `p` on qubit `k` of `n`.
    ///
    /// *Panics if `k >= n`.*
    pub fn single(n: usize, k: usize, p: Pauli) -> Self {
        let mut new = Self::identity(n);
        let (z, x) = p.to_zx();
        new.z_bits[k] = z;
        new.x_bits[k] = x;
        new
    }

    /// Decode from a bit vector of length 2*n*: first half *Z* bits, second
    /// half *X* bits.
    ///
    /// Fails if the vector has odd length (the halves could not match).
    pub fn from_zx_bits(zx_bits: &[bool]) -> PauliResult<Self> {
        if zx_bits.len() % 2 != 0 {
            return Err(PauliError::LengthMismatch {
                expected: zx_bits.len() + 1,
                found: zx_bits.len(),
            });
        }
        let n = zx_bits.len() / 2;
        Ok(Self {
            z_bits: zx_bits[..n].to_vec(),
            x_bits: zx_bits[n..].to_vec(),
        })
    }

    /// The number of qubits.
    pub fn num_qubits(&self) -> usize { self.z_bits.len() }

    /// The *Z* indicator bits.
    pub fn z_bits(&self) -> &[bool] { &self.z_bits }

    /// The *X* indicator bits.
    pub fn x_bits(&self) -> &[bool] { &self.x_bits }

    /// The operator acting on qubit `k`.
    ///
    /// *Panics if `k` is out of bounds.*
    pub fn pauli(&self, k: usize) -> Pauli {
        Pauli::from_zx(self.z_bits[k], self.x_bits[k])
    }

    /// Iterate over the per-qubit operators, least-significant qubit first.
    pub fn paulis(&self) -> impl Iterator<Item = Pauli> + '_ {
        self.z_bits.iter().zip(&self.x_bits)
            .map(|(z, x)| Pauli::from_zx(*z, *x))
    }

    /// Export as a bit vector of length 2*n*: concat(*z*, *x*).
    ///
    /// Exact inverse of [`from_zx_bits`][Self::from_zx_bits]; useful as a
    /// hashable/sortable key when comparing strings.
    pub fn to_zx_bits(&self) -> Vec<bool> {
        self.z_bits.iter().chain(&self.x_bits).copied().collect()
    }

    /// Export as a bit vector of length 2*n* in the reverse block order:
    /// concat(*x*, *z*).
    pub fn to_xz_bits(&self) -> Vec<bool> {
        self.x_bits.iter().chain(&self.z_bits).copied().collect()
    }

    /// Mark the qubits on which the operator is the identity.
    pub fn identity_positions(&self) -> Vec<bool> {
        self.z_bits.iter().zip(&self.x_bits)
            .map(|(z, x)| !z && !x)
            .collect()
    }

    /// Compute the product `self · other` as a new string plus the leftover
    /// scalar phase.
    ///
    /// The result bits are the mod-2 sums of the operand bits (*Z* and *X*
    /// are self-inverse); the phase accounts for the encoding phases of both
    /// operands, the reordering of *X* past *Z* factors, and the phase
    /// already folded into the combined bit pattern.
    ///
    /// Fails if the two strings have different qubit counts.
    pub fn mul(&self, other: &Self) -> PauliResult<(Self, Phase)> {
        if self.num_qubits() != other.num_qubits() {
            return Err(PauliError::LengthMismatch {
                expected: self.num_qubits(),
                found: other.num_qubits(),
            });
        }
        let z_bits: Vec<bool> =
            self.z_bits.iter().zip(&other.z_bits)
            .map(|(a, b)| a ^ b)
            .collect();
        let x_bits: Vec<bool> =
            self.x_bits.iter().zip(&other.x_bits)
            .map(|(a, b)| a ^ b)
            .collect();
        let crossings = count_and(&other.z_bits, &self.x_bits);
        let enc_l = count_and(&self.z_bits, &self.x_bits);
        let enc_r = count_and(&other.z_bits, &other.x_bits);
        let enc_new = count_and(&z_bits, &x_bits);
        let w = 2 * crossings as isize + enc_l as isize + enc_r as isize
            - enc_new as isize;
        Ok((Self { z_bits, x_bits }, Phase::from_int(w)))
    }

    /// Return `true` if `self` and `other` commute as group elements, i.e.
    /// if the symplectic form Σ (*z*₁·*x*₂ + *x*₁·*z*₂) is even.
    ///
    /// Fails if the two strings have different qubit counts.
    pub fn commutes_with(&self, other: &Self) -> PauliResult<bool> {
        if self.num_qubits() != other.num_qubits() {
            return Err(PauliError::LengthMismatch {
                expected: self.num_qubits(),
                found: other.num_qubits(),
            });
        }
        let form = count_and(&self.z_bits, &other.x_bits)
            + count_and(&self.x_bits, &other.z_bits);
        Ok(form % 2 == 0)
    }

    /// Return `true` if `self` and `other` commute qubit-by-qubit: on every
    /// qubit, either one operator is the identity or the two are equal.
    ///
    /// This is stronger than [`commutes_with`][Self::commutes_with] and is
    /// the relation underlying
    /// [`divide_into_bitwise_commuting_cliques`][LinearCombinaison::divide_into_bitwise_commuting_cliques].
    ///
    /// Fails if the two strings have different qubit counts.
    pub fn commutes_bitwise_with(&self, other: &Self) -> PauliResult<bool> {
        if self.num_qubits() != other.num_qubits() {
            return Err(PauliError::LengthMismatch {
                expected: self.num_qubits(),
                found: other.num_qubits(),
            });
        }
        Ok(self.paulis().zip(other.paulis())
            .all(|(a, b)| a.commutes_bitwise(b)))
    }

    /// Promote to a one-term [`LinearCombinaison`] with coefficient `coef`.
    pub fn scale(&self, coef: C64) -> LinearCombinaison {
        LinearCombinaison::from_parts_unchecked(
            vec![coef],
            vec![self.clone()],
            self.num_qubits(),
        )
    }

    /// Build the dense 2<sup>*n*</sup> × 2<sup>*n*</sup> matrix of the
    /// operator as the Kronecker product of the per-qubit matrices, taken
    /// from the most- to the least-significant qubit.
    ///
    /// The result includes the encoding phase, since qubits carrying both
    /// bits contribute a proper *Y* rather than *Z*·*X*. Memory and runtime
    /// are *O*(4<sup>*n*</sup>); this is for verification at small *n* only.
    pub fn to_matrix(&self) -> na::DMatrix<C64> {
        let mut acc: na::DMatrix<C64> =
            na::DMatrix::from_element(1, 1, C64::from(1.0));
        for k in (0..self.num_qubits()).rev() {
            acc = acc.kronecker(self.pauli(k).matrix());
        }
        acc
    }
}

// popcount of the elementwise AND of two equal-length bit vectors
fn count_and(a: &[bool], b: &[bool]) -> usize {
    a.iter().zip(b).filter(|(ak, bk)| **ak && **bk).count()
}

impl Mul<&PauliString> for &PauliString {
    type Output = (PauliString, Phase);

    /// *Panics if the two strings have different qubit counts.*
    fn mul(self, rhs: &PauliString) -> Self::Output {
        match PauliString::mul(self, rhs) {
            Ok(prod) => prod,
            Err(e) => panic!("PauliString multiplication: {}", e),
        }
    }
}

impl Mul<C64> for &PauliString {
    type Output = LinearCombinaison;

    fn mul(self, rhs: C64) -> Self::Output { self.scale(rhs) }
}

impl Mul<&PauliString> for C64 {
    type Output = LinearCombinaison;

    fn mul(self, rhs: &PauliString) -> Self::Output { rhs.scale(self) }
}

impl Mul<f64> for &PauliString {
    type Output = LinearCombinaison;

    fn mul(self, rhs: f64) -> Self::Output { self.scale(rhs.into()) }
}

impl Mul<&PauliString> for f64 {
    type Output = LinearCombinaison;

    fn mul(self, rhs: &PauliString) -> Self::Output { rhs.scale(self.into()) }
}

/// A single-qubit identity matrix.
pub static PAULI_I: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| na::DMatrix::identity(2, 2));

/// A single-qubit Pauli *X* matrix.
pub static PAULI_X: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| {
        na::DMatrix::from_row_slice(2, 2, &[
            C64::from(0.0), C64::from(1.0),
            C64::from(1.0), C64::from(0.0),
        ])
    });

/// A single-qubit Pauli *Y* matrix.
pub static PAULI_Y: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| {
        na::DMatrix::from_row_slice(2, 2, &[
            C64::from(0.0), -C64::i(),
            C64::i(),        C64::from(0.0),
        ])
    });

/// A single-qubit Pauli *Z* matrix.
pub static PAULI_Z: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| {
        na::DMatrix::from_row_slice(2, 2, &[
            C64::from(1.0), C64::from( 0.0),
            C64::from(0.0), C64::from(-1.0),
        ])
    });

#[cfg(test)]
mod test {
    use rand::Rng;
    use super::*;

    fn ps(label: &str) -> PauliString { label.parse().unwrap() }

    fn mat_approx_eq(a: &na::DMatrix<C64>, b: &na::DMatrix<C64>) -> bool {
        a.shape() == b.shape()
            && a.iter().zip(b.iter()).all(|(u, v)| (u - v).norm() < 1e-12)
    }

    #[test]
    fn label_roundtrip() {
        for label in ["I", "X", "Y", "Z", "IXYZ", "ZZZZ", "XIIY", ""] {
            assert_eq!(ps(label).to_string(), label);
        }
        assert_eq!(ps("xyzi").to_string(), "XYZI");
    }

    #[test]
    fn label_rejects_bad_chars() {
        assert_eq!(
            "IXQZ".parse::<PauliString>(),
            Err(PauliError::InvalidLabel('Q')),
        );
    }

    #[test]
    fn label_orientation() {
        // leftmost label character is the most-significant qubit
        let p = ps("XZ");
        assert_eq!(p.pauli(0), Pauli::Z);
        assert_eq!(p.pauli(1), Pauli::X);
    }

    #[test]
    fn zx_bits_roundtrip() {
        let p = ps("IXYZ");
        assert_eq!(PauliString::from_zx_bits(&p.to_zx_bits()), Ok(p.clone()));
        assert_eq!(
            p.to_zx_bits(),
            // q0 = Z, q1 = Y, q2 = X, q3 = I
            vec![true, true, false, false, false, true, true, false],
        );
        assert_eq!(
            p.to_xz_bits(),
            vec![false, true, true, false, true, true, false, false],
        );
        assert!(PauliString::from_zx_bits(&[true, false, true]).is_err());
    }

    #[test]
    fn random_roundtrips() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let n = rng.gen_range(1..8_usize);
            let label: String =
                (0..n)
                .map(|_| ['I', 'X', 'Y', 'Z'][rng.gen_range(0..4)])
                .collect();
            let p = ps(&label);
            assert_eq!(p.to_string(), label);
            assert_eq!(PauliString::from_zx_bits(&p.to_zx_bits()).unwrap(), p);
        }
    }

    #[test]
    fn mismatched_bit_vectors() {
        assert!(PauliString::new(vec![true], vec![true, false]).is_err());
    }

    #[test]
    fn single_constructor() {
        assert_eq!(PauliString::single(3, 1, Pauli::Y), ps("IYI"));
        assert_eq!(PauliString::identity(2), ps("II"));
    }

    #[test]
    fn identity_positions() {
        assert_eq!(
            ps("IXIZ").identity_positions(),
            vec![false, true, false, true],
        );
    }

    #[test]
    fn single_qubit_products() {
        // the full multiplication table with exact phases
        let table = [
            ("I", "I", "I", Phase::Pos1),
            ("I", "X", "X", Phase::Pos1),
            ("I", "Y", "Y", Phase::Pos1),
            ("I", "Z", "Z", Phase::Pos1),
            ("X", "I", "X", Phase::Pos1),
            ("X", "X", "I", Phase::Pos1),
            ("X", "Y", "Z", Phase::PosI),
            ("X", "Z", "Y", Phase::NegI),
            ("Y", "I", "Y", Phase::Pos1),
            ("Y", "X", "Z", Phase::NegI),
            ("Y", "Y", "I", Phase::Pos1),
            ("Y", "Z", "X", Phase::PosI),
            ("Z", "I", "Z", Phase::Pos1),
            ("Z", "X", "Y", Phase::PosI),
            ("Z", "Y", "X", Phase::NegI),
            ("Z", "Z", "I", Phase::Pos1),
        ];
        for (a, b, prod, phase) in table {
            let (p, ph) = ps(a).mul(&ps(b)).unwrap();
            assert_eq!(p, ps(prod), "{} * {}", a, b);
            assert_eq!(ph, phase, "{} * {}", a, b);
        }
    }

    #[test]
    fn multi_qubit_product() {
        let (p, ph) = ps("XY").mul(&ps("ZZ")).unwrap();
        // (X*Z) ⊗ (Y*Z) = (-i Y) ⊗ (i X) = Y ⊗ X
        assert_eq!(p, ps("YX"));
        assert_eq!(ph, Phase::Pos1);
    }

    #[test]
    fn product_length_mismatch() {
        assert!(ps("XX").mul(&ps("X")).is_err());
    }

    #[test]
    fn product_matches_matrices() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let label = |rng: &mut rand::rngs::ThreadRng| -> String {
                (0..3)
                    .map(|_| ['I', 'X', 'Y', 'Z'][rng.gen_range(0..4)])
                    .collect()
            };
            let a = ps(&label(&mut rng));
            let b = ps(&label(&mut rng));
            let (prod, phase) = a.mul(&b).unwrap();
            let expected = a.to_matrix() * b.to_matrix();
            let got = prod.to_matrix() * phase.as_complex();
            assert!(mat_approx_eq(&got, &expected), "{} * {}", a, b);
        }
    }

    #[test]
    fn product_associativity() {
        let a = ps("XYZ");
        let b = ps("ZIX");
        let c = ps("YYI");
        let (ab, ph_ab) = a.mul(&b).unwrap();
        let (ab_c, ph_ab_c) = ab.mul(&c).unwrap();
        let (bc, ph_bc) = b.mul(&c).unwrap();
        let (a_bc, ph_a_bc) = a.mul(&bc).unwrap();
        assert_eq!(ab_c, a_bc);
        assert_eq!(ph_ab * ph_ab_c, ph_bc * ph_a_bc);
        let left = ab_c.to_matrix() * (ph_ab * ph_ab_c).as_complex();
        let right = (a.to_matrix() * b.to_matrix()) * c.to_matrix();
        assert!(mat_approx_eq(&left, &right));
    }

    #[test]
    fn phase_arithmetic() {
        assert_eq!(Phase::NegI * Phase::NegI, Phase::Neg1);
        assert_eq!(Phase::NegI * Phase::PosI, Phase::Pos1);
        assert_eq!(Phase::from_int(-1), Phase::PosI);
        assert_eq!(Phase::PosI.conj(), Phase::NegI);
        assert_eq!(Phase::PosI.as_complex(), C64::i());
    }

    #[test]
    fn commutation() {
        assert!(ps("XX").commutes_with(&ps("ZZ")).unwrap());
        assert!(!ps("XI").commutes_with(&ps("ZI")).unwrap());
        assert!(!ps("XX").commutes_bitwise_with(&ps("ZZ")).unwrap());
        assert!(ps("XI").commutes_bitwise_with(&ps("XZ")).unwrap());
        assert!(ps("IZ").commutes_bitwise_with(&ps("XZ")).unwrap());
    }

    #[test]
    fn single_qubit_matrices() {
        let y = ps("Y").to_matrix();
        assert_eq!(y[(0, 0)], C64::from(0.0));
        assert_eq!(y[(0, 1)], -C64::i());
        assert_eq!(y[(1, 0)], C64::i());
        assert_eq!(y[(1, 1)], C64::from(0.0));
    }

    #[test]
    fn kronecker_ordering() {
        // ZI = Z ⊗ I: qubit 1 (most significant) carries the Z
        let m = ps("ZI").to_matrix();
        let expected =
            na::DMatrix::from_diagonal(&na::DVector::from_vec(vec![
                C64::from(1.0), C64::from(1.0),
                C64::from(-1.0), C64::from(-1.0),
            ]));
        assert!(mat_approx_eq(&m, &expected));
        // IZ = I ⊗ Z: qubit 0 (least significant) carries the Z
        let m = ps("IZ").to_matrix();
        let expected =
            na::DMatrix::from_diagonal(&na::DVector::from_vec(vec![
                C64::from(1.0), C64::from(-1.0),
                C64::from(1.0), C64::from(-1.0),
            ]));
        assert!(mat_approx_eq(&m, &expected));
    }

    #[test]
    fn display_alternate() {
        assert_eq!(format!("{:#}", ps("IXIZ")), ".X.Z");
    }
}
