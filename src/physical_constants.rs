//! Fixed physical constants (CODATA 2018) in SI units.

/// @brief Speed of light c (in m s^-1).
pub const SPEED_OF_LIGHT_IN_SI: f64 = 299_792_458.;

/// @brief Newton gravity constant G (in m^3 kg^-1 s^-2).
pub const NEWTON_G_IN_SI: f64 = 6.67430e-11;

/// @brief Reduced Planck constant hbar (in J s).
pub const HBAR_IN_SI: f64 = 1.054_571_817e-34;

/// @brief Boltzmann constant k (in J K^-1).
pub const BOLTZMANN_K_IN_SI: f64 = 1.380_649e-23;

/// @brief Kilometre (in m).
pub const KM_IN_SI: f64 = 1_000.;

/// @brief Megaparsec (in m).
pub const MPC_IN_SI: f64 = 3.085_677_581_491_367e22;

/// @brief Radiation constant a = pi^2 k^4 / (15 hbar^3 c^3) (in J m^-3 K^-4).
pub const RADIATION_A_IN_SI: f64 = std::f64::consts::PI
    * std::f64::consts::PI
    * (BOLTZMANN_K_IN_SI * BOLTZMANN_K_IN_SI * BOLTZMANN_K_IN_SI * BOLTZMANN_K_IN_SI)
    / (15.
        * (HBAR_IN_SI * HBAR_IN_SI * HBAR_IN_SI)
        * (SPEED_OF_LIGHT_IN_SI * SPEED_OF_LIGHT_IN_SI * SPEED_OF_LIGHT_IN_SI));

#[cfg(test)]
mod test {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_radiation_constant() {
        // 4 sigma / c with sigma the Stefan-Boltzmann constant
        let sigma = 5.670_374_419e-8;
        let expected = 4. * sigma / SPEED_OF_LIGHT_IN_SI;
        assert_approx_eq!(f64, RADIATION_A_IN_SI / expected, 1., epsilon = 1e-8);
    }
}
