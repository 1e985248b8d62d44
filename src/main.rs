use anyhow::{Context, Result};
use brand_assets::assets;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "brand-assets",
    version,
    about = "Generate the splash screen and launcher icon PNGs"
)]
struct Args {
    /// Project root the asset paths are relative to.
    #[clap(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let paths = assets::generate_assets(&args.root)
        .with_context(|| format!("Can't generate assets under {}", args.root.display()))?;

    print!("{}", assets::report(&paths));
    Ok(())
}
