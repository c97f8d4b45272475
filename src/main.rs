use clap::Parser;
use fractals::{
    ConfigurationSearch, DiscoveryLimits, PaletteCatalog, PpmFilePresenter, Preferences,
    SnapshotController, SoftwareBackend,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Discovers interesting Mandelbrot and Julia views and writes each one as
/// a PPM image.
#[derive(Debug, Parser)]
#[command(name = "fractals", version)]
struct Args {
    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Seed for the discovery search
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of snapshots to write
    #[arg(long, default_value_t = 4)]
    count: usize,

    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Render with 4 samples per pixel
    #[arg(long)]
    anti_aliasing: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fractals::logging::init();
    let args = Args::parse();

    let palettes = Arc::new(PaletteCatalog::build()?);
    let search = ConfigurationSearch::new(
        StdRng::seed_from_u64(args.seed),
        DiscoveryLimits::default(),
        palettes.len(),
    )?;
    let preferences = Preferences {
        anti_aliasing: args.anti_aliasing,
    };

    let mut controller = SnapshotController::new(
        search,
        SoftwareBackend::new(),
        PpmFilePresenter::new(),
        palettes,
        preferences,
        args.width,
        args.height,
    )?;

    let written = controller.run(args.count, &args.output_dir)?;
    info!(count = written.len(), dir = %args.output_dir.display(), "snapshots complete");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["fractals"]);

        assert_eq!((args.width, args.height), (800, 600));
        assert_eq!(args.count, 4);
        assert!(!args.anti_aliasing);
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "fractals",
            "--width",
            "64",
            "--seed",
            "9",
            "--output-dir",
            "shots",
            "--anti-aliasing",
        ]);

        assert_eq!(args.width, 64);
        assert_eq!(args.seed, 9);
        assert_eq!(args.output_dir, PathBuf::from("shots"));
        assert!(args.anti_aliasing);
    }
}
