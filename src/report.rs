use std::fmt::{self, Display};

use crate::scales::Scales;

impl Display for Scales {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "H0 = {:.3} km s^-1 Mpc^-1", self.h0_km_s_mpc())?;
        writeln!(f)?;

        writeln!(f, "Planck scales:")?;
        writeln!(f, "  l_P   = {:.3e} m", self.planck_length_m())?;
        writeln!(f, "  t_P   = {:.3e} s", self.planck_time_s())?;
        writeln!(f, "  T_P   = {:.3e} K", self.planck_temperature_k())?;
        writeln!(f)?;

        writeln!(f, "Cliche length/time scales:")?;
        writeln!(f, "  l^R   = {:.3e} m (Hubble radius)", self.cliche_length_m())?;
        writeln!(f, "  S_dS  ~ {:.3e} (dimensionless)", self.de_sitter_entropy())?;
        writeln!(f, "  log10(tau^R / s) ~= {:.3e}", self.log10_cliche_time_s())?;
        writeln!(f)?;

        writeln!(f, "Temperature ceilings:")?;
        writeln!(
            f,
            "  T_cliche-hot       ~ {:.3e} K (local absolute hot)",
            self.cliche_hot_k()
        )?;
        writeln!(
            f,
            "  T_cliche-very-hot  ~ {:.3e} K (cosmic absolute hot)",
            self.cliche_very_hot_k()
        )?;
        writeln!(f)?;

        writeln!(f, "Notes:")?;
        writeln!(f, "  - tau^R = exp(S_dS) * t_P is far beyond any floating point range,")?;
        write!(f, "    so only its base-10 logarithm is reported.")
    }
}

#[cfg(test)]
mod test {
    use crate::scales::compute_scales;

    #[test]
    fn test_report_sections() {
        let report = compute_scales(70.).unwrap().to_string();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "H0 = 70.000 km s^-1 Mpc^-1");
        assert_eq!(lines[2], "Planck scales:");
        assert_eq!(lines[3], "  l_P   = 1.616e-35 m");
        assert_eq!(lines[4], "  t_P   = 5.391e-44 s");
        assert_eq!(lines[5], "  T_P   = 1.417e32 K");
        assert_eq!(lines[7], "Cliche length/time scales:");
        assert!(lines[8].starts_with("  l^R   = 1.32"));
        assert!(lines[8].ends_with("e26 m (Hubble radius)"));
        assert!(lines[9].ends_with("e122 (dimensionless)"));
        assert!(lines[10].starts_with("  log10(tau^R / s) ~= "));
        assert_eq!(lines[12], "Temperature ceilings:");
        assert!(lines[13].ends_with("K (local absolute hot)"));
        assert!(lines[14].ends_with("K (cosmic absolute hot)"));
        assert_eq!(lines[16], "Notes:");
        assert!(!report.ends_with('\n'));
    }
}
