//! Scheme parameters
//!
//! A single immutable [`RlweParams`] value fixes the ring, the three integer
//! moduli and the noise width. It is built (or deserialized from
//! configuration) before any key exists and is passed by reference into every
//! operation.

use num_bigint::BigInt;
use num_traits::Signed;
use serde::{Deserialize, Serialize};

use crate::error::{invalid_params, Result};
use crate::math::gaussian::MAX_SIGMA;
use crate::math::{GaussianSampler, ModQ, StructuralModulus};

/// Core parameters of the scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RlweParams {
    /// Ring dimension n: coefficient count of every sampled and stored polynomial
    pub ring_dim: usize,

    /// Coefficient modulus S used at key-generation time
    pub key_modulus: BigInt,

    /// Ciphertext modulus q
    pub q: BigInt,

    /// Plaintext modulus t
    pub t: u64,

    /// Structural modulus P, the defining polynomial of the quotient ring.
    /// Degree at most `ring_dim`.
    pub poly_modulus: StructuralModulus,

    /// Standard deviation for Gaussian error sampling
    pub sigma: f64,
}

impl RlweParams {
    /// Small demonstration parameters: n = 20 samples folded into
    /// Z[X]/(X^4 + 1), S = 11, q = 7919, t = 17.
    ///
    /// Noise stays around a tenth of the q/(2t) ≈ 232 margin, so sums of a
    /// handful of ciphertexts still decrypt.
    pub fn toy() -> Self {
        Self {
            ring_dim: 20,
            key_modulus: BigInt::from(11),
            q: BigInt::from(7919),
            t: 17,
            poly_modulus: StructuralModulus::negacyclic(4),
            sigma: 2.0,
        }
    }

    /// Textbook ring Z_q[X]/(X^n + 1) with the key generated at S = q
    pub fn negacyclic(ring_dim: usize, q: BigInt, t: u64, sigma: f64) -> Self {
        Self {
            ring_dim,
            key_modulus: q.clone(),
            q,
            t,
            poly_modulus: StructuralModulus::negacyclic(ring_dim),
            sigma,
        }
    }

    /// d = 256 over the 60-bit NTT-friendly prime 2^60 - 2^14 + 1
    pub fn negacyclic_256() -> Self {
        Self::negacyclic(256, BigInt::from(1152921504606830593u64), 65537, 3.2)
    }

    /// Degree of the structural modulus
    pub fn quotient_degree(&self) -> usize {
        self.poly_modulus.degree()
    }

    /// Plaintext modulus as a big integer
    pub fn plaintext_modulus(&self) -> BigInt {
        BigInt::from(self.t)
    }

    /// Scaling factor Δ = ⌊q/t⌋
    pub fn delta(&self) -> BigInt {
        &self.q / self.t
    }

    /// Modulus the public key is kept under: lcm(S, q).
    ///
    /// The key is congruent to −(a·s + e) modulo S and modulo q at once, so
    /// encryption can reduce it straight into Z_q.
    pub fn public_key_modulus(&self) -> BigInt {
        ModQ::lcm(&self.key_modulus, &self.q)
    }

    /// Largest noise magnitude decryption tolerates: ⌊q/(2t)⌋
    pub fn noise_bound(&self) -> BigInt {
        &self.q / (self.plaintext_modulus() * 2u32)
    }

    /// Noise sampler with this parameter set's σ
    pub fn sampler(&self) -> GaussianSampler {
        GaussianSampler::new(self.sigma)
    }

    /// Check if parameters are valid
    pub fn validate(&self) -> Result<()> {
        if self.ring_dim == 0 {
            return Err(invalid_params!("ring_dim must be positive"));
        }

        if !self.key_modulus.is_positive() {
            return Err(invalid_params!(
                "key modulus S must be positive, got {}",
                self.key_modulus
            ));
        }

        if self.t == 0 {
            return Err(invalid_params!("plaintext modulus t must be positive"));
        }

        // Δ = ⌊q/t⌋ would be 0 and erase the plaintext
        if self.q <= self.plaintext_modulus() {
            return Err(invalid_params!(
                "ciphertext modulus q ({}) must exceed plaintext modulus t ({})",
                self.q,
                self.t
            ));
        }

        if self.quotient_degree() == 0 {
            return Err(invalid_params!(
                "structural modulus must have positive degree"
            ));
        }

        if self.quotient_degree() > self.ring_dim {
            return Err(invalid_params!(
                "structural modulus degree {} exceeds ring_dim {}",
                self.quotient_degree(),
                self.ring_dim
            ));
        }

        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(invalid_params!(
                "sigma must be finite and positive, got {}",
                self.sigma
            ));
        }

        if self.sigma > MAX_SIGMA {
            return Err(invalid_params!(
                "sigma {} exceeds the sampler limit {}",
                self.sigma,
                MAX_SIGMA
            ));
        }

        Ok(())
    }
}

impl Default for RlweParams {
    fn default() -> Self {
        Self::toy()
    }
}
