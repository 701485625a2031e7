//! Planck and Cliche scales as pure functions of the Hubble constant.

use std::f64::consts::{LN_10, PI};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    errors::{ScalesError, ScalesResult},
    hubble::{hubble_si, HubbleConstant},
    physical_constants::{
        BOLTZMANN_K_IN_SI, HBAR_IN_SI, NEWTON_G_IN_SI, RADIATION_A_IN_SI, SPEED_OF_LIGHT_IN_SI,
    },
};

/// Planck length sqrt(hbar G / c^3) (in m).
pub fn planck_length() -> f64 {
    (HBAR_IN_SI * NEWTON_G_IN_SI / SPEED_OF_LIGHT_IN_SI.powi(3)).sqrt()
}

/// Planck time sqrt(hbar G / c^5) (in s).
pub fn planck_time() -> f64 {
    (HBAR_IN_SI * NEWTON_G_IN_SI / SPEED_OF_LIGHT_IN_SI.powi(5)).sqrt()
}

/// Planck temperature sqrt(hbar c^5 / (G k^2)) (in K).
pub fn planck_temperature() -> f64 {
    (HBAR_IN_SI * SPEED_OF_LIGHT_IN_SI.powi(5) / (NEWTON_G_IN_SI * BOLTZMANN_K_IN_SI.powi(2)))
        .sqrt()
}

/// Cliche length, i.e. the Hubble radius c / H0 (in m).
pub fn cliche_length(h0_km_s_mpc: f64) -> f64 {
    cliche_length_from_si(hubble_si(h0_km_s_mpc))
}

fn cliche_length_from_si(h0_si: f64) -> f64 {
    SPEED_OF_LIGHT_IN_SI / h0_si
}

/// Semiclassical de Sitter horizon entropy (dimensionless).
///
/// S_dS = 3 pi c^3 / (G hbar Lambda) with Lambda ~ 3 H0^2 / c^2, which
/// reduces to pi c^5 / (G hbar H0^2). Of order 1e122 for realistic H0.
pub fn de_sitter_entropy(h0_km_s_mpc: f64) -> f64 {
    de_sitter_entropy_from_si(hubble_si(h0_km_s_mpc))
}

pub(crate) fn de_sitter_entropy_from_si(h0_si: f64) -> f64 {
    PI * SPEED_OF_LIGHT_IN_SI.powi(5) / (NEWTON_G_IN_SI * HBAR_IN_SI * h0_si.powi(2))
}

/// log10 of the Cliche time tau = exp(S_dS) t_P (in s).
///
/// tau itself overflows any float, so only its logarithm is evaluated:
/// log10(tau) = log10(t_P) + S_dS / ln(10).
pub fn cliche_time_log10_seconds(h0_km_s_mpc: f64) -> f64 {
    cliche_time_log10_seconds_from_si(hubble_si(h0_km_s_mpc))
}

fn cliche_time_log10_seconds_from_si(h0_si: f64) -> f64 {
    planck_time().log10() + de_sitter_entropy_from_si(h0_si) / LN_10
}

/// Temperature at which blackbody radiation filling a region of size `length`
/// (in m) holds enough energy to collapse it into a black hole (in K).
///
/// T_BH(L) = [3 c^4 / (8 pi G a L^2)]^(1/4), with a the radiation constant.
pub fn collapse_temperature(length: f64) -> ScalesResult<f64> {
    if length.is_nan() || length <= 0. {
        return Err(ScalesError::InvalidLength(length));
    }
    // L^2 under- or overflows long before sqrt(L) does
    let prefactor = (3. * SPEED_OF_LIGHT_IN_SI.powi(4)
        / (8. * PI * NEWTON_G_IN_SI * RADIATION_A_IN_SI))
        .powf(0.25);
    Ok(prefactor / length.sqrt())
}

/// Local "absolute hot": the collapse temperature at the Planck length.
pub fn cliche_hot_temperature() -> ScalesResult<f64> {
    collapse_temperature(planck_length())
}

/// Cosmic "absolute hot": the collapse temperature at the Hubble radius.
pub fn cliche_very_hot_temperature(h0_km_s_mpc: f64) -> ScalesResult<f64> {
    collapse_temperature(cliche_length(h0_km_s_mpc))
}

fn cliche_very_hot_temperature_from_si(h0_si: f64) -> ScalesResult<f64> {
    collapse_temperature(cliche_length_from_si(h0_si))
}

/// All reference scales for one value of the Hubble constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scales {
    h0: HubbleConstant,
    planck_length: f64,
    planck_time: f64,
    planck_temperature: f64,
    cliche_length: f64,
    de_sitter_entropy: f64,
    log10_cliche_time: f64,
    cliche_hot: f64,
    cliche_very_hot: f64,
}

impl Scales {
    pub fn new(h0: HubbleConstant) -> ScalesResult<Self> {
        debug!(h0_km_s_mpc = h0.km_s_mpc(), "Computing scales");
        let h0_si = h0.si();
        Ok(Self {
            h0,
            planck_length: planck_length(),
            planck_time: planck_time(),
            cliche_length: cliche_length_from_si(h0_si),
            de_sitter_entropy: de_sitter_entropy_from_si(h0_si),
            log10_cliche_time: cliche_time_log10_seconds_from_si(h0_si),
            planck_temperature: planck_temperature(),
            cliche_hot: cliche_hot_temperature()?,
            cliche_very_hot: cliche_very_hot_temperature_from_si(h0_si)?,
        })
    }

    /// Input H0 (in km s^-1 Mpc^-1)
    pub fn h0_km_s_mpc(&self) -> f64 {
        self.h0.km_s_mpc()
    }

    pub fn planck_length_m(&self) -> f64 {
        self.planck_length
    }

    pub fn planck_time_s(&self) -> f64 {
        self.planck_time
    }

    pub fn planck_temperature_k(&self) -> f64 {
        self.planck_temperature
    }

    pub fn cliche_length_m(&self) -> f64 {
        self.cliche_length
    }

    pub fn de_sitter_entropy(&self) -> f64 {
        self.de_sitter_entropy
    }

    pub fn log10_cliche_time_s(&self) -> f64 {
        self.log10_cliche_time
    }

    pub fn cliche_hot_k(&self) -> f64 {
        self.cliche_hot
    }

    pub fn cliche_very_hot_k(&self) -> f64 {
        self.cliche_very_hot
    }
}

/// Compute all reference scales for `h0_km_s_mpc`.
///
/// Unlike the individual formulas, this rejects non-positive or non-finite
/// input instead of letting infinities propagate.
pub fn compute_scales(h0_km_s_mpc: f64) -> ScalesResult<Scales> {
    Scales::new(HubbleConstant::try_from(h0_km_s_mpc)?)
}

/// Compute the scales for many values of H0 in parallel.
///
/// Results are in the same order as the input; an invalid entry only fails
/// its own slot.
pub fn compute_scales_sweep(h0_values: &[f64]) -> Vec<ScalesResult<Scales>> {
    debug!(count = h0_values.len(), "Computing scales sweep");
    h0_values
        .par_iter()
        .map(|&h0| {
            compute_scales(h0).map_err(|err| {
                warn!(h0, %err, "Skipping sweep entry");
                err
            })
        })
        .collect()
}
