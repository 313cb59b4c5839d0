//! Dispersion model trait and derived chromatic quantities.
//!
//! A [`DispersionModel`] supplies one primitive, the phase refractive index
//! $n(\lambda)$. Everything else — group index, group-velocity dispersion,
//! and the dispersion parameter D — is derived from it here by centered
//! finite differences with fixed relative step sizes, so every model gets
//! the derived quantities for free.
//!
//! The step sizes (10 ppm for the first derivative, 20 ppm for the second)
//! are fixed empirical constants; results at a given wavelength are
//! reproducible bit-for-bit across calls.

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Speed of light in vacuum (m/s, exact).
pub const C0: f64 = 299_792_458.0;

/// Relative step for the first-derivative centered difference.
const GROUP_INDEX_REL_STEP: f64 = 1e-5;

/// Relative step for the second-derivative centered difference.
const GVD_REL_STEP: f64 = 2e-5;

/// Errors from dispersion model precondition checks.
#[derive(Debug, Error)]
pub enum DispersionError {
    #[error("Wavelength {wavelength_m} m is not positive")]
    NonPositiveWavelength { wavelength_m: f64 },
}

/// All chromatic quantities of a model at one wavelength.
///
/// Convenience record for reporting and serialization; the fields are the
/// four trait operations evaluated at `wavelength_m`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispersionSample {
    /// Free-space wavelength (m).
    pub wavelength_m: f64,
    /// Phase refractive index (dimensionless).
    pub refractive_index: f64,
    /// Group index (dimensionless).
    pub group_index: f64,
    /// Group-velocity dispersion (fs²/mm).
    pub gvd_fs2_per_mm: f64,
    /// Dispersion parameter D (ps/(nm·km)).
    pub dispersion_ps_per_nm_km: f64,
}

/// Provides the wavelength-dependent refractive index of a transparent
/// medium, with derived group and dispersion quantities.
///
/// Implementations supply [`refractive_index`](Self::refractive_index);
/// the derived quantities are computed from it by finite differences and
/// normally need no overriding.
///
/// All methods are pure: no internal state, safe to call from any number
/// of threads. Unphysical inputs (wl ≤ 0, resonance poles) are not trapped
/// on these paths — IEEE infinities and NaNs propagate to the caller
/// unchanged. Use [`checked_refractive_index`](Self::checked_refractive_index)
/// when a caller wants wl ≤ 0 rejected up front.
pub trait DispersionModel {
    /// Human-readable name of this material.
    fn name(&self) -> &str;

    /// Phase refractive index $n(\lambda)$ at a free-space wavelength in metres.
    fn refractive_index(&self, wavelength_m: f64) -> f64;

    /// Phase refractive index with the wavelength precondition checked.
    fn checked_refractive_index(&self, wavelength_m: f64) -> Result<f64, DispersionError> {
        if wavelength_m <= 0.0 {
            return Err(DispersionError::NonPositiveWavelength { wavelength_m });
        }
        Ok(self.refractive_index(wavelength_m))
    }

    /// Group index $n_g = n - \lambda \, dn/d\lambda$.
    ///
    /// The derivative is a centered finite difference with a relative step
    /// of `1e-5·λ`.
    fn group_index(&self, wavelength_m: f64) -> f64 {
        let wl = wavelength_m;
        let h = GROUP_INDEX_REL_STEP * wl;
        let dn_dwl = (self.refractive_index(wl + h) - self.refractive_index(wl - h)) / (2.0 * h);
        self.refractive_index(wl) - wl * dn_dwl
    }

    /// Group-velocity dispersion in fs²/mm.
    ///
    /// $\mathrm{GVD} = \frac{\lambda^3}{2\pi c_0^2} \frac{d^2 n}{d\lambda^2}$,
    /// with the second derivative taken as a centered finite difference with
    /// a relative step of `2e-5·λ`, converted from s²/m to fs²/mm.
    fn group_velocity_dispersion(&self, wavelength_m: f64) -> f64 {
        gvd_si(self, wavelength_m) * 1e30 / 1e3
    }

    /// Dispersion parameter D in ps/(nm·km).
    ///
    /// $D = -\frac{2\pi c_0}{\lambda^2} \, \mathrm{GVD}$, sharing the same
    /// second finite difference as
    /// [`group_velocity_dispersion`](Self::group_velocity_dispersion).
    fn dispersion_parameter(&self, wavelength_m: f64) -> f64 {
        let wl = wavelength_m;
        let d_si = -(2.0 * std::f64::consts::PI * C0 / (wl * wl)) * gvd_si(self, wl);
        d_si * 1e6
    }

    /// Refractive index over an ordered wavelength grid, element-wise.
    fn refractive_index_spectrum(&self, wavelengths_m: &Array1<f64>) -> Array1<f64> {
        wavelengths_m.mapv(|wl| self.refractive_index(wl))
    }

    /// Group index over an ordered wavelength grid, element-wise.
    fn group_index_spectrum(&self, wavelengths_m: &Array1<f64>) -> Array1<f64> {
        wavelengths_m.mapv(|wl| self.group_index(wl))
    }

    /// Group-velocity dispersion (fs²/mm) over an ordered wavelength grid.
    fn group_velocity_dispersion_spectrum(&self, wavelengths_m: &Array1<f64>) -> Array1<f64> {
        wavelengths_m.mapv(|wl| self.group_velocity_dispersion(wl))
    }

    /// Dispersion parameter (ps/(nm·km)) over an ordered wavelength grid.
    fn dispersion_parameter_spectrum(&self, wavelengths_m: &Array1<f64>) -> Array1<f64> {
        wavelengths_m.mapv(|wl| self.dispersion_parameter(wl))
    }

    /// All four quantities at one wavelength as a reporting record.
    fn sample(&self, wavelength_m: f64) -> DispersionSample {
        DispersionSample {
            wavelength_m,
            refractive_index: self.refractive_index(wavelength_m),
            group_index: self.group_index(wavelength_m),
            gvd_fs2_per_mm: self.group_velocity_dispersion(wavelength_m),
            dispersion_ps_per_nm_km: self.dispersion_parameter(wavelength_m),
        }
    }
}

/// Raw group-velocity dispersion in SI units (s²/m).
///
/// Shared by the GVD and D trait methods. The parenthesisation of the
/// second difference is deliberate and must not be "simplified": it sets
/// the floating-point evaluation order that downstream tabulated values
/// were produced with.
fn gvd_si<M: DispersionModel + ?Sized>(model: &M, wavelength_m: f64) -> f64 {
    let wl = wavelength_m;
    let h = GVD_REL_STEP * wl;
    let n0 = model.refractive_index(wl);
    let second_diff = ((model.refractive_index(wl + h) - n0)
        - (n0 - model.refractive_index(wl - h)))
        / (h * h);
    wl.powi(3) / (2.0 * std::f64::consts::PI * C0 * C0) * second_diff
}
