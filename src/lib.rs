//! Planck units and the derived "Cliche" cosmological scales, computed from a single input:
//! the present-day Hubble constant H0 in km s^-1 Mpc^-1.
//!
//! Every quantity is a pure function of H0 and a fixed set of CODATA 2018 constants.

pub use errors::{ScalesError, ScalesResult};
pub use hubble::{hubble_si, HubbleConstant, DEFAULT_H0_KM_S_MPC};
pub use scales::{
    cliche_hot_temperature, cliche_length, cliche_time_log10_seconds,
    cliche_very_hot_temperature, collapse_temperature, compute_scales, compute_scales_sweep,
    de_sitter_entropy, planck_length, planck_temperature, planck_time, Scales,
};

mod errors;
mod hubble;
pub mod physical_constants;
mod report;
mod scales;
