//! RLWE encryption module
//!
//! This module implements an additively homomorphic RLWE scheme over the
//! quotient ring R = Z[X]/(P), with polynomials of n coefficients.
//!
//! # Overview
//!
//! - Secret key s is a binary polynomial
//! - Public key (a, b) satisfies b = −(a·s + e) for a small error e
//! - Ciphertext (c0, c1) encrypts m as c0 + c1·s = Δ·m + noise
//! - Δ = ⌊q/t⌋ is the scaling factor
//!
//! Ciphertexts add component-wise; the sum decrypts to the sum of the
//! plaintexts mod t while the accumulated noise stays below q/(2t).
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use rlwe_fv::params::RlweParams;
//! use rlwe_fv::rlwe::{decrypt, encrypt, generate_keys, homomorphic_add};
//!
//! let params = RlweParams::toy();
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//!
//! let keys = generate_keys(&params, &mut rng).unwrap();
//! let ct1 = encrypt(2, &keys.public, &params, &mut rng).unwrap();
//! let ct2 = encrypt(4, &keys.public, &params, &mut rng).unwrap();
//!
//! let sum = homomorphic_add(&ct1, &ct2).unwrap();
//! assert_eq!(decrypt(&sum, &keys.secret, &params).unwrap(), 6);
//! ```

mod types;
mod keygen;
mod enc;
mod eval;

pub use types::{Ciphertext, Decryption, KeyPair, NoiseOverflow, PublicKey, SecretKey};
pub use keygen::generate_keys;
pub use enc::{decrypt, decrypt_with_noise, encrypt};
pub use eval::{homomorphic_add, homomorphic_sub, homomorphic_sum};
