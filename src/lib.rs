//! rlwe-fv: a minimal additively homomorphic RLWE scheme
//!
//! Scheme of the Brakerski / Fan–Vercauteren family that encrypts integers
//! modulo t. Anyone holding the public key can add ciphertexts; only the
//! holder of the secret key recovers the sum.
//!
//! Key components:
//! - Ring arithmetic over Z_S[X]/(P) with arbitrary-precision coefficients
//! - Binary, uniform and discrete Gaussian samplers driven by a caller RNG
//! - Key generation, encryption, decryption with noise measurement
//! - Homomorphic addition, subtraction and summation

pub mod params;
pub mod error;
pub mod math;
pub mod rlwe;

pub use rlwe::{
    generate_keys, encrypt, decrypt, decrypt_with_noise,
    homomorphic_add, homomorphic_sub, homomorphic_sum,
    Ciphertext, Decryption, KeyPair, NoiseOverflow, PublicKey, SecretKey,
};

pub use error::{Result, RlweError};
pub use math::{GaussianSampler, Poly, StructuralModulus};
pub use params::RlweParams;
