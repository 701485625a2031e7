use rand::{rngs::StdRng, Rng, SeedableRng};

/// Hubble constants bracketing every measured value (in km s^-1 Mpc^-1).
pub const H0_VALUES: [f64; 3] = [50., 70., 100.];

/// Reproducible source of random Hubble constants.
pub fn h0_sampler(seed: u64) -> impl Iterator<Item = f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    std::iter::repeat_with(move || rng.gen_range(1.0..1000.0))
}

macro_rules! assert_rel_eq {
    ($value:expr, $expected:expr, $rel:expr) => {
        float_cmp::assert_approx_eq!(f64, $value / $expected, 1., epsilon = $rel);
    };
}

pub(crate) use assert_rel_eq;
