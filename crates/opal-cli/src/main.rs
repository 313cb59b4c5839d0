//! Opal command-line interface.
//!
//! Evaluate dispersion properties of optical glasses:
//! ```sh
//! opal-cli sample 587.6
//! opal-cli spectrum job.toml
//! opal-cli materials
//! ```

mod config;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use opal_materials::{DispersionModel, SellmeierGlass};

#[derive(Parser)]
#[command(name = "opal-cli")]
#[command(about = "Opal: optical glass dispersion models")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print all dispersion quantities at a single wavelength.
    Sample {
        /// Free-space wavelength in nanometres.
        #[arg(default_value_t = 587.6)]
        wavelength_nm: f64,
    },
    /// Evaluate a dispersion table from a TOML job configuration.
    Spectrum {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Display information about available materials.
    Materials,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let bk7 = SellmeierGlass::bk7();

    match cli.command {
        Commands::Sample { wavelength_nm } => {
            let s = bk7.sample(wavelength_nm * 1e-9);
            println!("{} at {} nm", bk7.name(), wavelength_nm);
            println!("  n    = {:.7}", s.refractive_index);
            println!("  n_g  = {:.7}", s.group_index);
            println!("  GVD  = {:+.4} fs²/mm", s.gvd_fs2_per_mm);
            println!("  D    = {:+.4} ps/(nm·km)", s.dispersion_ps_per_nm_km);
            Ok(())
        }
        Commands::Spectrum { config, output } => {
            let job = config::load_config(&config)?;
            let grid = runner::build_grid(&job)?;
            let samples = runner::run_spectrum(&bk7, &grid);

            let out_dir = output.unwrap_or_else(|| PathBuf::from(&job.output.directory));

            if job.output.save_csv {
                runner::write_table_csv(&samples, &out_dir.join("dispersion.csv"))?;
            }
            if job.output.save_json {
                runner::write_table_json(&samples, &out_dir.join("dispersion.json"))?;
            }
            Ok(())
        }
        Commands::Materials => {
            println!("Available materials:");
            println!();
            println!("  Sellmeier glasses:");
            println!("    BK7 — Schott N-BK7 borosilicate crown (three-term Sellmeier)");
            Ok(())
        }
    }
}
