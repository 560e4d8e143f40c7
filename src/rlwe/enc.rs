//! RLWE encryption and decryption
//!
//! Implements encryption of a scalar m ∈ Z_t under a public key (a, b):
//!
//! ```text
//! c0 = b·u + e1 + Δ·m
//! c1 = a·u + e2
//! ```
//!
//! Decryption computes c0 + c1·s = Δ·m + e1 + e2·s − e·u and rounds the
//! constant term of (t/q)·(c0 + c1·s).

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use rand::Rng;
use tracing::{debug, warn};

use crate::error::Result;
use crate::math::{ring, sample_binary, ModQ, Poly};
use crate::params::RlweParams;

use super::types::{Ciphertext, Decryption, NoiseOverflow, PublicKey, SecretKey};

/// Encrypt a plaintext integer under a public key.
///
/// The plaintext is reduced into [0, t) first. Parameters and key shape are
/// checked before any randomness is drawn.
pub fn encrypt<R: Rng + ?Sized>(
    plaintext: i64,
    pk: &PublicKey,
    params: &RlweParams,
    rng: &mut R,
) -> Result<Ciphertext> {
    params.validate()?;
    pk.validate(params)?;

    let n = params.ring_dim;
    let q = &params.q;
    let p = &params.poly_modulus;

    let m = ModQ::from_signed(plaintext, &params.plaintext_modulus());
    let scaled_msg = Poly::constant(params.delta() * &m, 1);

    let sampler = params.sampler();
    let e1 = sampler.sample_poly(n, rng);
    let e2 = sampler.sample_poly(n, rng);
    let u = sample_binary(n, rng);

    // c0 = b·u + e1 + Δ·m
    let b_u = ring::mul(&pk.b, &u, q, p);
    let c0 = ring::add(&ring::add(&b_u, &e1, q, p), &scaled_msg, q, p);

    // c1 = a·u + e2
    let a_u = ring::mul(&pk.a, &u, q, p);
    let c1 = ring::add(&a_u, &e2, q, p);

    debug!(ring_dim = n, q = %q, t = params.t, "encrypted plaintext");

    Ok(Ciphertext::from_parts(c0, c1, params))
}

/// Decrypt a ciphertext and measure its noise
///
/// Computes d = c0 + c1·s, decodes every coefficient as ⌊d_i·t/q⌉ mod t and
/// returns the constant term. Scalar plaintexts occupy only the constant
/// term, so every other coefficient should decode to 0. The residual of each
/// coefficient from its expected Δ-multiple gives the noise; once that
/// reaches q/(2t) the result is flagged with a [`NoiseOverflow`].
pub fn decrypt_with_noise(
    ct: &Ciphertext,
    sk: &SecretKey,
    params: &RlweParams,
) -> Result<Decryption> {
    params.validate()?;
    sk.validate(params)?;
    ct.validate(params)?;

    let q = &params.q;
    let p = &params.poly_modulus;
    let t = params.plaintext_modulus();
    let delta = params.delta();

    // d = c1·s + c0 = Δ·m + noise; c0 may arrive non-canonical
    let d = ring::canonicalize(&(ring::mul(&ct.c1, &sk.poly, q, p) + ct.c0.clone()), q, p);

    let m = decode_coeff(&d.coeff(0), q, &t);

    let noise = (0..params.quotient_degree())
        .map(|i| {
            let expected = if i == 0 { &delta * &m } else { BigInt::zero() };
            ModQ::to_signed(&(d.coeff(i) - expected), q).abs()
        })
        .max()
        .unwrap_or_default();

    let overflow = if &noise * 2u32 * &t >= *q {
        Some(NoiseOverflow {
            max_noise: noise.clone(),
            bound: params.noise_bound(),
        })
    } else {
        None
    };

    // m < t and t is a u64
    let plaintext = m.to_u64().unwrap_or_default();

    Ok(Decryption {
        plaintext,
        noise,
        overflow,
    })
}

/// Decrypt a ciphertext to its plaintext integer in [0, t)
///
/// Noise past the correctness bound is logged as a warning; the decoded
/// value is returned regardless.
pub fn decrypt(ct: &Ciphertext, sk: &SecretKey, params: &RlweParams) -> Result<u64> {
    let decryption = decrypt_with_noise(ct, sk, params)?;

    if let Some(overflow) = &decryption.overflow {
        warn!(
            max_noise = %overflow.max_noise,
            bound = %overflow.bound,
            plaintext = decryption.plaintext,
            "decryption noise exceeds q/(2t); plaintext is unreliable"
        );
    }

    Ok(decryption.plaintext)
}

/// Rescale a coefficient c mod q to ⌊c·t/q⌉ mod t
fn decode_coeff(c: &BigInt, q: &BigInt, t: &BigInt) -> BigInt {
    let c = ModQ::reduce(c, q);
    ModQ::reduce(&ModQ::round_div(&(c * t), q), t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RlweError;
    use crate::rlwe::keygen::generate_keys;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn setup(seed: u64) -> (RlweParams, crate::rlwe::KeyPair, ChaCha20Rng) {
        let params = RlweParams::toy();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let keys = generate_keys(&params, &mut rng).unwrap();
        (params, keys, rng)
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let (params, keys, mut rng) = setup(1);

        for m in 0..params.t as i64 {
            let ct = encrypt(m, &keys.public, &params, &mut rng).unwrap();
            let dec = decrypt_with_noise(&ct, &keys.secret, &params).unwrap();
            assert_eq!(dec.plaintext, m as u64, "Mismatch for plaintext {}", m);
            assert!(dec.overflow.is_none());
            assert!(dec.noise < params.noise_bound());
        }
    }

    #[test]
    fn test_plaintext_reduced_mod_t() {
        let (params, keys, mut rng) = setup(2);

        let ct = encrypt(19, &keys.public, &params, &mut rng).unwrap();
        assert_eq!(decrypt(&ct, &keys.secret, &params).unwrap(), 2);

        let ct = encrypt(-1, &keys.public, &params, &mut rng).unwrap();
        assert_eq!(decrypt(&ct, &keys.secret, &params).unwrap(), 16);
    }

    #[test]
    fn test_ciphertext_components_canonical() {
        let (params, keys, mut rng) = setup(3);
        let ct = encrypt(5, &keys.public, &params, &mut rng).unwrap();

        assert_eq!(ct.ring_dim(), params.ring_dim);
        assert!(ring::is_canonical(&ct.c0, &params.q, &params.poly_modulus));
        assert!(ring::is_canonical(&ct.c1, &params.q, &params.poly_modulus));
    }

    #[test]
    fn test_zero_ciphertext_decrypts_to_zero() {
        let (params, keys, _) = setup(4);
        let dec = decrypt_with_noise(&Ciphertext::zero(&params), &keys.secret, &params).unwrap();
        assert_eq!(dec.plaintext, 0);
        assert!(dec.noise.is_zero());
    }

    #[test]
    fn test_decode_rounding() {
        let q = BigInt::from(7919);
        let t = BigInt::from(17);
        // 2790 = 6Δ decodes to 6
        assert_eq!(decode_coeff(&BigInt::from(2790), &q, &t), BigInt::from(6));
        // values just below q wrap around to 0
        assert_eq!(decode_coeff(&BigInt::from(7900), &q, &t), BigInt::from(0));
        assert_eq!(decode_coeff(&BigInt::from(0), &q, &t), BigInt::from(0));
    }

    #[test]
    fn test_overflow_flagged_on_tampered_ciphertext() {
        let (params, keys, mut rng) = setup(5);
        let ct = encrypt(3, &keys.public, &params, &mut rng).unwrap();

        // shift coefficient 1 of c0 far outside the noise bound
        let mut coeffs = ct.c0.coeffs().to_vec();
        coeffs[1] += params.delta() * 8u32 + 200u32;
        let tampered = Ciphertext::from_parts(Poly::from_coeffs(coeffs), ct.c1.clone(), &params);

        let dec = decrypt_with_noise(&tampered, &keys.secret, &params).unwrap();
        let overflow = dec.overflow.expect("tampering should be visible");
        assert_eq!(overflow.bound, params.noise_bound());
        assert!(overflow.max_noise >= overflow.bound);
        // constant term untouched
        assert_eq!(dec.plaintext, 3);
    }

    #[test]
    fn test_decrypt_non_canonical_ciphertext() {
        let (params, keys, mut rng) = setup(10);

        // c0 = x^4 ≡ -1 (mod x^4 + 1), stored unreduced
        let mut coeffs = vec![BigInt::zero(); params.ring_dim];
        coeffs[4] = BigInt::from(1);
        let raw = Ciphertext {
            c0: Poly::from_coeffs(coeffs),
            c1: Poly::zero(params.ring_dim),
            q: params.q.clone(),
        };
        assert!(raw.validate(&params).is_ok());

        let dec = decrypt_with_noise(&raw, &keys.secret, &params).unwrap();
        assert_eq!(dec.plaintext, 0);
        assert_eq!(dec.noise, BigInt::from(1));

        let canonical = Ciphertext::from_parts(raw.c0.clone(), raw.c1.clone(), &params);
        assert_eq!(decrypt_with_noise(&canonical, &keys.secret, &params).unwrap(), dec);

        // unreduced coefficients on a real ciphertext decrypt the same
        let ct = encrypt(9, &keys.public, &params, &mut rng).unwrap();
        let mut c0 = ct.c0.coeffs().to_vec();
        c0[0] -= &params.q * 3u32;
        c0[1] += &params.q;
        let shifted = Ciphertext {
            c0: Poly::from_coeffs(c0),
            ..ct.clone()
        };
        assert_eq!(decrypt(&shifted, &keys.secret, &params).unwrap(), 9);
    }

    #[test]
    fn test_decode_reduces_out_of_range_input() {
        let q = BigInt::from(7919);
        let t = BigInt::from(17);
        assert_eq!(decode_coeff(&BigInt::from(-1), &q, &t), BigInt::from(0));
        assert_eq!(decode_coeff(&BigInt::from(2790 + 7919), &q, &t), BigInt::from(6));
    }

    #[test]
    fn test_inflated_noise_on_standard_ring() {
        let mut params = RlweParams::negacyclic_256();
        params.sigma = 1e12;
        let mut rng = ChaCha20Rng::seed_from_u64(256);
        let keys = generate_keys(&params, &mut rng).unwrap();

        let ct = encrypt(1234, &keys.public, &params, &mut rng).unwrap();
        let dec = decrypt_with_noise(&ct, &keys.secret, &params).unwrap();
        // σ·√128 per coefficient against q/(2t) ≈ 8.8e12
        assert!(dec.overflow.is_some(), "noise {} under bound", dec.noise);
        assert!(dec.plaintext < params.t);
    }

    #[test]
    fn test_roundtrip_large_plaintext_modulus() {
        let params = RlweParams::negacyclic(8, BigInt::from(1u128 << 70), (1u64 << 63) + 1, 3.2);
        let mut rng = ChaCha20Rng::seed_from_u64(63);
        let keys = generate_keys(&params, &mut rng).unwrap();

        // q mod t ≈ 2^63 skews the decoding of m by about m/128, so keep m small
        for m in [0i64, 1, 5] {
            let ct = encrypt(m, &keys.public, &params, &mut rng).unwrap();
            let dec = decrypt_with_noise(&ct, &keys.secret, &params).unwrap();
            assert_eq!(dec.plaintext, m as u64);
            assert!(dec.overflow.is_none());
        }
    }

    #[test]
    fn test_encrypt_rejects_q_not_above_t() {
        let (mut params, keys, mut rng) = setup(6);
        params.t = 7919;
        assert!(matches!(
            encrypt(1, &keys.public, &params, &mut rng),
            Err(RlweError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_encrypt_rejects_short_public_key() {
        let (params, mut keys, mut rng) = setup(7);
        keys.public.a = Poly::from_coeffs(keys.public.a.coeffs()[..4].to_vec());
        assert_eq!(
            encrypt(1, &keys.public, &params, &mut rng).unwrap_err(),
            RlweError::DegreeMismatch {
                what: "public key a",
                expected: 20,
                actual: 4,
            }
        );
    }

    #[test]
    fn test_encrypt_rejects_foreign_public_key() {
        let (mut params, keys, mut rng) = setup(8);
        params.q = BigInt::from(7907);
        assert!(matches!(
            encrypt(1, &keys.public, &params, &mut rng),
            Err(RlweError::ModulusMismatch { .. })
        ));
    }

    #[test]
    fn test_decrypt_rejects_bad_shapes() {
        let (params, keys, mut rng) = setup(9);
        let ct = encrypt(1, &keys.public, &params, &mut rng).unwrap();

        let short_sk = SecretKey::from_poly(Poly::zero(19));
        assert!(matches!(
            decrypt(&ct, &short_sk, &params),
            Err(RlweError::DegreeMismatch { what: "secret key", .. })
        ));

        let mut bad_ct = ct.clone();
        bad_ct.c1 = Poly::zero(19);
        assert!(matches!(
            decrypt(&bad_ct, &keys.secret, &params),
            Err(RlweError::DegreeMismatch { what: "ciphertext c1", .. })
        ));

        let mut other = params.clone();
        other.q = BigInt::from(7907);
        assert!(matches!(
            decrypt(&ct, &keys.secret, &other),
            Err(RlweError::ModulusMismatch { .. })
        ));
    }
}
