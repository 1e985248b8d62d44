//! Procedural generation of the splash screen and launcher icon PNG assets

pub mod assets;
pub mod pixel;
pub mod png_writer;
