//! Key generation
//!
//! sk ← {0,1}^n, a ← U([0, S)^n), e ← D_σ^n, b = −(a·sk + e),
//! with the key relation computed modulo lcm(S, q) and P.

use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::math::{ring, sample_binary, sample_uniform};
use crate::params::RlweParams;

use super::types::{KeyPair, PublicKey, SecretKey};

/// Generate a fresh key pair.
///
/// The noise polynomial e is dropped once b is computed.
pub fn generate_keys<R: Rng + ?Sized>(params: &RlweParams, rng: &mut R) -> Result<KeyPair> {
    params.validate()?;

    let n = params.ring_dim;
    let p = &params.poly_modulus;
    let modulus = params.public_key_modulus();

    let sk = sample_binary(n, rng);
    let a = sample_uniform(n, &params.key_modulus, rng);
    let e = params.sampler().sample_poly(n, rng);

    let a_s = ring::mul(&a, &sk, &modulus, p);
    let b = ring::neg(&ring::add(&a_s, &e, &modulus, p), &modulus).resized(n);

    debug!(
        ring_dim = n,
        quotient_degree = p.degree(),
        key_modulus = %params.key_modulus,
        public_key_modulus = %modulus,
        "generated RLWE key pair"
    );

    Ok(KeyPair {
        public: PublicKey { a, b, modulus },
        secret: SecretKey::from_poly(sk),
    })
}
