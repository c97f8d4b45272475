use clap::Parser;
use fractals::GuiOptions;
use std::path::PathBuf;

/// Windowed fractal explorer.
#[derive(Debug, Parser)]
#[command(name = "gui", version)]
struct Args {
    /// Where the settings sheet saves its choices
    #[arg(long, default_value = "fractals-preferences.json")]
    preferences: PathBuf,

    /// Fixed discovery seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fractals::logging::init();
    let args = Args::parse();

    fractals::run_gui(GuiOptions {
        preferences_path: args.preferences,
        seed: args.seed,
    })?;

    Ok(())
}
