use crate::{
    errors::ScalesError,
    physical_constants::{KM_IN_SI, MPC_IN_SI},
    scales::de_sitter_entropy_from_si,
};

/// Hubble constant used when none is given (in km s^-1 Mpc^-1).
pub const DEFAULT_H0_KM_S_MPC: f64 = 70.;

/// Convert H0 from km s^-1 Mpc^-1 to s^-1.
///
/// No validation: `H0 = 0` gives 0 and every quantity dividing by it
/// degenerates to infinity.
pub fn hubble_si(h0_km_s_mpc: f64) -> f64 {
    h0_km_s_mpc * KM_IN_SI / MPC_IN_SI
}

/// A validated Hubble constant.
///
/// H0 must be positive and finite in both units, and small enough in s^-1
/// that c / H0 and c^5 / H0^2 stay representable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HubbleConstant {
    km_s_mpc: f64,
    si: f64,
}

impl TryFrom<f64> for HubbleConstant {
    type Error = ScalesError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let si = hubble_si(value);
        if !value.is_finite()
            || value <= 0.
            || !si.is_finite()
            || si <= 0.
            || !de_sitter_entropy_from_si(si).is_finite()
        {
            return Err(ScalesError::InvalidHubbleConstant(value));
        }
        Ok(HubbleConstant {
            km_s_mpc: value,
            si,
        })
    }
}

impl From<HubbleConstant> for f64 {
    fn from(value: HubbleConstant) -> Self {
        value.km_s_mpc
    }
}

impl Default for HubbleConstant {
    fn default() -> Self {
        HubbleConstant {
            km_s_mpc: DEFAULT_H0_KM_S_MPC,
            si: hubble_si(DEFAULT_H0_KM_S_MPC),
        }
    }
}

impl HubbleConstant {
    /// H0 in km s^-1 Mpc^-1
    pub fn km_s_mpc(&self) -> f64 {
        self.km_s_mpc
    }

    /// H0 in s^-1
    pub fn si(&self) -> f64 {
        self.si
    }
}
