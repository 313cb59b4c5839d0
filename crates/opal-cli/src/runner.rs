//! Spectrum runner: builds the wavelength grid and writes result tables.

use std::path::Path;

use anyhow::{Context, Result};
use ndarray::Array1;

use opal_materials::{DispersionModel, DispersionSample};

use crate::config::{JobConfig, WavelengthSpec};

/// Build the wavelength grid (in metres) from a job configuration.
///
/// Config values are in micrometres; the model API takes metres.
pub fn build_grid(job: &JobConfig) -> Result<Array1<f64>> {
    let grid = match &job.grid.wavelengths {
        WavelengthSpec::Range { range, points } => {
            if *points < 2 {
                anyhow::bail!("A range grid needs at least 2 points, got {}", points);
            }
            Array1::linspace(range[0] * 1e-6, range[1] * 1e-6, *points)
        }
        WavelengthSpec::List { values } => {
            if values.is_empty() {
                anyhow::bail!("Wavelength list is empty");
            }
            Array1::from_iter(values.iter().map(|um| um * 1e-6))
        }
    };
    Ok(grid)
}

/// Evaluate all four dispersion quantities over a wavelength grid.
pub fn run_spectrum<M: DispersionModel>(model: &M, grid: &Array1<f64>) -> Vec<DispersionSample> {
    log::info!(
        "Evaluating {} over {} wavelengths",
        model.name(),
        grid.len()
    );
    grid.iter().map(|&wl| model.sample(wl)).collect()
}

/// Write the dispersion table as CSV.
pub fn write_table_csv(samples: &[DispersionSample], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }

    let mut out = String::from(
        "wavelength_um,refractive_index,group_index,gvd_fs2_per_mm,dispersion_ps_per_nm_km\n",
    );
    for s in samples {
        out.push_str(&format!(
            "{:.6},{:.9},{:.9},{:.6},{:.6}\n",
            s.wavelength_m * 1e6,
            s.refractive_index,
            s.group_index,
            s.gvd_fs2_per_mm,
            s.dispersion_ps_per_nm_km
        ));
    }

    std::fs::write(path, out)
        .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Write the dispersion table as JSON.
pub fn write_table_json(samples: &[DispersionSample], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(samples).context("Failed to serialise table")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GridConfig, OutputConfig};
    use opal_materials::SellmeierGlass;

    fn range_job(a: f64, b: f64, points: usize) -> JobConfig {
        JobConfig {
            grid: GridConfig {
                wavelengths: WavelengthSpec::Range {
                    range: [a, b],
                    points,
                },
            },
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn range_grid_spans_endpoints_in_metres() {
        let grid = build_grid(&range_job(0.5, 1.5, 11)).unwrap();
        assert_eq!(grid.len(), 11);
        assert!((grid[0] - 0.5e-6).abs() < 1e-18);
        assert!((grid[10] - 1.5e-6).abs() < 1e-18);
    }

    #[test]
    fn degenerate_range_is_rejected() {
        assert!(build_grid(&range_job(0.5, 1.5, 1)).is_err());
    }

    #[test]
    fn spectrum_run_preserves_grid_order() {
        let bk7 = SellmeierGlass::bk7();
        let grid = build_grid(&range_job(0.5, 1.5, 11)).unwrap();
        let samples = run_spectrum(&bk7, &grid);
        assert_eq!(samples.len(), 11);
        for (wl, s) in grid.iter().zip(samples.iter()) {
            assert_eq!(s.wavelength_m, *wl);
            assert_eq!(s.refractive_index, bk7.refractive_index(*wl));
        }
    }
}
