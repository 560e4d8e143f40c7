//! Mathematical primitives for the RLWE scheme.
//!
//! - **Residue arithmetic** over Z_m with arbitrary-precision moduli
//! - **Integer polynomials** with exact long division
//! - **Ring operations** over Z_S[X]/(P) with the two-step reduction order
//! - **Samplers** for binary, uniform and discrete Gaussian coefficients
//!
//! # Example
//!
//! ```
//! use num_bigint::BigInt;
//! use rlwe_fv::math::{ring, Poly, StructuralModulus};
//!
//! let p = StructuralModulus::negacyclic(4);
//! let s = BigInt::from(11);
//! let x = Poly::from_signed(&[0, 1]);
//! let x3 = Poly::from_signed(&[0, 0, 0, 1]);
//!
//! // x * x^3 = x^4 ≡ -1 ≡ 10 (mod 11, mod x^4 + 1)
//! assert_eq!(ring::mul(&x, &x3, &s, &p), Poly::from_signed(&[10]));
//! ```

pub mod gaussian;
pub mod modular;
pub mod poly;
pub mod ring;
pub mod sampling;

pub use gaussian::GaussianSampler;
pub use modular::ModQ;
pub use poly::Poly;
pub use ring::StructuralModulus;
pub use sampling::{sample_binary, sample_uniform};
