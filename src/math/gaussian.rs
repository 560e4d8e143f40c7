//! Discrete Gaussian sampling
//!
//! Provides the noise distribution for every error term in the scheme:
//! key-generation noise and the two per-encryption noise polynomials.
//! Samples are integers drawn from D_σ by rejection, tail-cut at 6σ.

use rand::Rng;

use super::poly::Poly;

/// Default Gaussian standard deviation
pub const DEFAULT_SIGMA: f64 = 3.2;

/// Tail cut, in standard deviations
const TAILCUT_SIGMAS: f64 = 6.0;

/// Largest σ whose tail cut is still exactly representable as an i64 sample
pub const MAX_SIGMA: f64 = 1e15;

/// Discrete Gaussian sampler over Z using rejection sampling.
///
/// The sampler only holds the distribution parameters. Randomness is passed
/// into every call, so the same sampler can serve a seeded test RNG and
/// `rand::thread_rng()` alike.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussianSampler {
    /// Standard deviation σ
    sigma: f64,
    /// Reject samples beyond this absolute value
    tailcut: i64,
}

impl GaussianSampler {
    /// Create a new Gaussian sampler with given standard deviation.
    ///
    /// σ above [`MAX_SIGMA`] saturates the tail cut.
    pub fn new(sigma: f64) -> Self {
        let tailcut = (sigma * TAILCUT_SIGMAS).ceil() as i64;
        Self { sigma, tailcut }
    }

    /// Get the standard deviation
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Largest magnitude a sample can take
    pub fn tailcut(&self) -> i64 {
        self.tailcut
    }

    /// Sample a single value from the discrete Gaussian D_σ
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        let sigma_sq_2 = 2.0 * self.sigma * self.sigma;
        let bound = self.tailcut;

        loop {
            // Sample uniformly from [-bound, bound]
            let x = rng.gen_range(-bound..=bound);

            // Accept with probability proportional to exp(-x²/(2σ²))
            let xf = x as f64;
            let prob = (-(xf * xf) / sigma_sq_2).exp();

            let u: f64 = rng.gen();
            if u < prob {
                return x;
            }
        }
    }

    /// Sample a vector of Gaussian values
    pub fn sample_vec<R: Rng + ?Sized>(&self, len: usize, rng: &mut R) -> Vec<i64> {
        (0..len).map(|_| self.sample(rng)).collect()
    }

    /// Sample a noise polynomial with `len` coefficients
    pub fn sample_poly<R: Rng + ?Sized>(&self, len: usize, rng: &mut R) -> Poly {
        Poly::from_signed(&self.sample_vec(len, rng))
    }
}

impl Default for GaussianSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SIGMA)
    }
}
