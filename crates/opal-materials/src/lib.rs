//! # Opal Materials
//!
//! Chromatic dispersion models for optical glasses. All models implement
//! the [`DispersionModel`](dispersion::DispersionModel) trait, whose single
//! primitive is the wavelength-dependent refractive index; the group index,
//! group-velocity dispersion, and the fibre-optics dispersion parameter D
//! are derived from it by centered finite differences.
//!
//! ## Available models
//!
//! | Glass | Constructor | Formula |
//! |-------|-------------|---------|
//! | N-BK7 (Schott) | [`sellmeier::SellmeierGlass::bk7()`] | Three-term Sellmeier |
//!
//! ## Units
//!
//! Wavelengths are free-space values in metres everywhere in the API.
//! Derived quantities carry the units conventional in ultrafast optics:
//! GVD in fs²/mm, D in ps/(nm·km).

pub mod dispersion;
pub mod sellmeier;

pub use dispersion::{DispersionError, DispersionModel, DispersionSample};
pub use sellmeier::SellmeierGlass;
