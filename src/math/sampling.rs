//! Uniform coefficient samplers
//!
//! Binary polynomials back secret keys and the per-encryption blinding
//! polynomial; uniform polynomials back the public `a`. Noise comes from
//! [`super::gaussian::GaussianSampler`].

use num_bigint::{BigInt, RandBigInt};
use num_traits::Zero;
use rand::Rng;

use super::poly::Poly;

/// Sample a polynomial with every coefficient uniform in {0, 1}
pub fn sample_binary<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Poly {
    Poly::from_coeffs(
        (0..len)
            .map(|_| BigInt::from(rng.gen_range(0u8..=1)))
            .collect(),
    )
}

/// Sample a polynomial with every coefficient uniform in [0, modulus)
pub fn sample_uniform<R: Rng + ?Sized>(len: usize, modulus: &BigInt, rng: &mut R) -> Poly {
    let zero = BigInt::zero();
    Poly::from_coeffs(
        (0..len)
            .map(|_| rng.gen_bigint_range(&zero, modulus))
            .collect(),
    )
}
