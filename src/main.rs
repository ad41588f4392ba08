//! TabKebab icon generator
//!
//! Renders the skewer glyph at every packaged size and writes `icon{size}.png`
//! files. Run at packaging time whenever the artwork constants change.
//!
//! Usage:
//!   tabkebab-icons [--out-dir <DIR>] [--size <PX>]...

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use tabkebab_icons_lib::render::{export_all, DEFAULT_SIZES};
use tabkebab_icons_lib::utils::get_default_icons_dir;

/// Render the TabKebab icon PNGs
#[derive(Debug, Parser)]
#[command(name = "tabkebab-icons", version, about)]
struct Args {
    /// Directory to write icon{size}.png files into
    #[arg(short, long, env = "TABKEBAB_ICONS_DIR", value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Edge length to export; repeat for several sizes [default: 16 32 48 128]
    #[arg(
        short,
        long = "size",
        value_name = "PX",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    sizes: Vec<u32>,
}

impl Args {
    fn resolve(self) -> (Vec<u32>, PathBuf) {
        let sizes = if self.sizes.is_empty() {
            DEFAULT_SIZES.to_vec()
        } else {
            self.sizes
        };
        let out_dir = self.out_dir.unwrap_or_else(get_default_icons_dir);
        (sizes, out_dir)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let (sizes, out_dir) = Args::parse().resolve();
    log::info!("Exporting sizes {:?} to {}", sizes, out_dir.display());

    let mut stdout = std::io::stdout().lock();
    export_all(&sizes, &out_dir, &mut stdout)
        .with_context(|| format!("Failed to export icons to {}", out_dir.display()))?;
    writeln!(stdout, "Done!")?;

    Ok(())
}
