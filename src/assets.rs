//! The fixed set of brand assets and how each one is produced

use crate::{
    pixel::{bg_gradient, fg_icon, PixelFn},
    png_writer::save_png,
};
use anyhow::{Context, Result};
use std::{
    fs::{self, create_dir_all},
    path::Path,
};

pub const ASSET_SIZE: u32 = 1024;

pub const SPLASH_PATH: &str = "assets/images/splash_static.png";
pub const ICON_BACKGROUND_PATH: &str = "assets/icons/background.png";
pub const ICON_FOREGROUND_PATH: &str = "assets/icons/foreground.png";
pub const ANDROID_SPLASH_PATH: &str = "android/app/src/main/res/drawable-nodpi/splash_static.png";

/// How a target file comes into existence
#[derive(Clone, Copy)]
pub enum Source {
    /// Encoded from a pixel generator
    Generated(PixelFn),
    /// Raw byte copy of an earlier target
    CopyOf(&'static str),
}

/// One output file, relative to the project root
#[derive(Clone, Copy)]
pub struct AssetTarget {
    pub path: &'static str,
    pub width: u32,
    pub height: u32,
    pub source: Source,
}

impl AssetTarget {
    const fn generated(path: &'static str, pixel_fn: PixelFn) -> Self {
        Self {
            path,
            width: ASSET_SIZE,
            height: ASSET_SIZE,
            source: Source::Generated(pixel_fn),
        }
    }

    const fn copy_of(path: &'static str, original: &'static str) -> Self {
        Self {
            path,
            width: ASSET_SIZE,
            height: ASSET_SIZE,
            source: Source::CopyOf(original),
        }
    }
}

/// Targets in generation order; copies must come after their original
pub const TARGETS: [AssetTarget; 4] = [
    AssetTarget::generated(SPLASH_PATH, bg_gradient),
    AssetTarget::generated(ICON_BACKGROUND_PATH, bg_gradient),
    AssetTarget::generated(ICON_FOREGROUND_PATH, fg_icon),
    AssetTarget::copy_of(ANDROID_SPLASH_PATH, SPLASH_PATH),
];

fn copy_asset(root: &Path, original: &str, path: &str) -> Result<()> {
    let src = root.join(original);
    let dest = root.join(path);

    if let Some(parent) = dest.parent() {
        create_dir_all(parent)
            .with_context(|| format!("Can't create directory {}", parent.display()))?;
    }

    let bytes = fs::read(&src).with_context(|| format!("Failed to read {}", src.display()))?;
    fs::write(&dest, bytes).with_context(|| format!("Failed to write {}", dest.display()))?;
    Ok(())
}

/// Produce a single target under `root`
pub fn build_target(root: &Path, target: &AssetTarget) -> Result<()> {
    match target.source {
        Source::Generated(pixel_fn) => save_png(
            &root.join(target.path),
            target.width,
            target.height,
            pixel_fn,
        ),
        Source::CopyOf(original) => copy_asset(root, original, target.path),
    }
}

/// Generate every asset under `root` in order and return their relative paths
///
/// Stops at the first failure; files written before it stay on disk.
pub fn generate_assets(root: &Path) -> Result<Vec<&'static str>> {
    let mut generated = Vec::with_capacity(TARGETS.len());

    for target in &TARGETS {
        build_target(root, target)
            .with_context(|| format!("Failed to generate {}", target.path))?;
        generated.push(target.path);
    }

    Ok(generated)
}

/// Completion report listing the generated files
pub fn report(paths: &[&str]) -> String {
    let mut out = String::from("Generated assets:\n");
    for path in paths {
        out.push_str("- ");
        out.push_str(path);
        out.push('\n');
    }
    out
}
