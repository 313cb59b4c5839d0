//! Sellmeier dispersion formula for transparent optical glasses.
//!
//! The three-term Sellmeier equation expresses the refractive index of a
//! transparent medium through its ultraviolet and infrared resonances:
//!
//! $n^2(\lambda) = 1 + \sum_{i=1}^{3} \frac{B_i}{1 - C_i/\lambda^2}$
//!
//! with $\lambda$ in micrometres and $C_i$ in µm². Coefficients for N-BK7
//! are the Schott catalogue values.
//!
//! # Reference
//! Schott AG, *Optical Glass Data Sheets*, N-BK7 (517642).

use crate::dispersion::DispersionModel;

/// A glass described by three-term Sellmeier coefficients.
///
/// The formula diverges where $\lambda^2$ (µm²) hits one of the $C_i$
/// resonances; evaluation there yields IEEE infinities or NaN, which
/// propagate to the caller rather than being trapped.
#[derive(Debug, Clone)]
pub struct SellmeierGlass {
    name: String,
    /// Oscillator strengths B₁..B₃ (dimensionless).
    b: [f64; 3],
    /// Resonance wavelengths squared C₁..C₃ (µm²).
    c: [f64; 3],
}

impl SellmeierGlass {
    /// Construct from explicit Sellmeier coefficients.
    ///
    /// # Arguments
    /// * `name` — Material identifier string.
    /// * `b` — Oscillator strengths $B_1..B_3$.
    /// * `c` — Resonance terms $C_1..C_3$ in µm².
    pub fn new(name: impl Into<String>, b: [f64; 3], c: [f64; 3]) -> Self {
        Self {
            name: name.into(),
            b,
            c,
        }
    }

    /// Schott N-BK7 borosilicate crown glass.
    ///
    /// The workhorse visible/near-IR optical glass: n_d ≈ 1.5168 at the
    /// 587.6 nm helium d-line, normal dispersion up to its ~1.32 µm
    /// zero-dispersion wavelength, anomalous beyond.
    pub fn bk7() -> Self {
        Self::new(
            "N-BK7 (Schott)",
            [1.03961212, 0.231792344, 1.01046945],
            [0.00600069867, 0.0200179144, 103.560653],
        )
    }

    /// The Sellmeier coefficients (B₁..B₃, C₁..C₃ in µm²).
    pub fn coefficients(&self) -> ([f64; 3], [f64; 3]) {
        (self.b, self.c)
    }
}

impl DispersionModel for SellmeierGlass {
    fn name(&self) -> &str {
        &self.name
    }

    fn refractive_index(&self, wavelength_m: f64) -> f64 {
        // The coefficients are defined for wavelength in micrometres.
        let x = wavelength_m * 1e6;
        let x2 = x * x;
        (1.0 + self.b[0] / (1.0 - self.c[0] / x2)
            + self.b[1] / (1.0 - self.c[1] / x2)
            + self.b[2] / (1.0 - self.c[2] / x2))
            .sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::Array1;

    #[test]
    fn bk7_index_at_sodium_d_line() {
        let bk7 = SellmeierGlass::bk7();
        // Catalogue n_d for N-BK7.
        assert_abs_diff_eq!(bk7.refractive_index(0.5876e-6), 1.5168, epsilon = 1e-3);
    }

    #[test]
    fn index_stays_physical_across_transmission_window() {
        let bk7 = SellmeierGlass::bk7();
        // 0.3–2.5 µm, well clear of the UV and IR resonances.
        for i in 0..=220 {
            let wl = (0.3 + 0.01 * i as f64) * 1e-6;
            let n = bk7.refractive_index(wl);
            assert!(
                n > 1.0 && n < 2.0,
                "n({:.3} µm) = {} out of (1, 2)",
                wl * 1e6,
                n
            );
        }
    }

    #[test]
    fn index_decreases_monotonically_in_normal_dispersion_range() {
        let bk7 = SellmeierGlass::bk7();
        let mut prev = bk7.refractive_index(0.4e-6);
        for i in 1..=120 {
            let wl = (0.4 + 0.01 * i as f64) * 1e-6;
            let n = bk7.refractive_index(wl);
            assert!(
                n < prev,
                "n not decreasing at {:.2} µm: {} >= {}",
                wl * 1e6,
                n,
                prev
            );
            prev = n;
        }
    }

    #[test]
    fn group_index_exceeds_phase_index_in_visible() {
        let bk7 = SellmeierGlass::bk7();
        let wl = 0.5876e-6;
        assert!(bk7.group_index(wl) >= bk7.refractive_index(wl));
    }

    #[test]
    fn spectrum_equals_elementwise_scalar_calls() {
        let bk7 = SellmeierGlass::bk7();
        // 11 points spanning 0.5–1.5 µm, the demonstration grid.
        let grid = Array1::linspace(0.5e-6, 1.5e-6, 11);
        let spectrum = bk7.refractive_index_spectrum(&grid);
        assert_eq!(spectrum.len(), grid.len());
        for (wl, n) in grid.iter().zip(spectrum.iter()) {
            assert_eq!(*n, bk7.refractive_index(*wl), "mismatch at {} m", wl);
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let bk7 = SellmeierGlass::bk7();
        let wl = 0.8e-6;
        assert_eq!(bk7.refractive_index(wl).to_bits(), bk7.refractive_index(wl).to_bits());
        assert_eq!(bk7.group_index(wl).to_bits(), bk7.group_index(wl).to_bits());
        assert_eq!(
            bk7.group_velocity_dispersion(wl).to_bits(),
            bk7.group_velocity_dispersion(wl).to_bits()
        );
        assert_eq!(
            bk7.dispersion_parameter(wl).to_bits(),
            bk7.dispersion_parameter(wl).to_bits()
        );
    }

    #[test]
    fn gvd_positive_in_visible() {
        let bk7 = SellmeierGlass::bk7();
        let gvd = bk7.group_velocity_dispersion(0.5876e-6);
        // Normal dispersion, tens of fs²/mm.
        assert!(gvd > 10.0 && gvd < 100.0, "GVD = {} fs²/mm", gvd);
    }

    #[test]
    fn d_and_gvd_have_opposite_signs() {
        let bk7 = SellmeierGlass::bk7();
        for wl in [0.5876e-6, 1.0e-6] {
            let gvd = bk7.group_velocity_dispersion(wl);
            let d = bk7.dispersion_parameter(wl);
            assert!(
                gvd * d < 0.0,
                "GVD {} and D {} should have opposite signs at {} m",
                gvd,
                d,
                wl
            );
        }
    }
}
