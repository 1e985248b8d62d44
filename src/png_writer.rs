//! Minimal PNG writer for 8-bit RGBA images
//!
//! Produces exactly three chunks (IHDR, a single IDAT and IEND) with no
//! scanline filtering, which is enough for any conformant decoder.

use crate::pixel::PixelFn;
use anyhow::{bail, Context, Result};
use flate2::{write::ZlibEncoder, Compression, Crc};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::Path,
};

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;
const FILTER_NONE: u8 = 0;

/// Build the raw image data: each row is a filter byte followed by RGBA pixels
pub fn build_scanlines(width: u32, height: u32, pixel_fn: PixelFn) -> Vec<u8> {
    let row_len = 1 + width as usize * 4;
    let mut raw = Vec::with_capacity(height as usize * row_len);

    for y in 0..height {
        raw.push(FILTER_NONE);
        for x in 0..width {
            raw.extend_from_slice(&pixel_fn(x, y, width, height).0);
        }
    }

    raw
}

/// Append one chunk: length, tag, payload and the CRC-32 of tag + payload
pub fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], payload: &[u8]) -> Result<()> {
    let len = u32::try_from(payload.len())
        .with_context(|| format!("{} chunk is too large", String::from_utf8_lossy(tag)))?;

    let mut crc = Crc::new();
    crc.update(tag);
    crc.update(payload);

    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(payload);
    out.extend_from_slice(&crc.sum().to_be_bytes());
    Ok(())
}

fn ihdr_payload(width: u32, height: u32) -> [u8; 13] {
    let mut payload = [0u8; 13];
    payload[0..4].copy_from_slice(&width.to_be_bytes());
    payload[4..8].copy_from_slice(&height.to_be_bytes());
    payload[8] = BIT_DEPTH;
    payload[9] = COLOR_TYPE_RGBA;
    // compression, filter and interlace methods stay 0
    payload
}

fn compress(raw: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(raw).context("Failed to compress image data")?;
    encoder.finish().context("Failed to finish zlib stream")
}

/// Encode a whole image as PNG bytes
pub fn encode_png(width: u32, height: u32, pixel_fn: PixelFn) -> Result<Vec<u8>> {
    if width == 0 || height == 0 {
        bail!("Image dimensions must be non-zero, got {width}x{height}");
    }

    let raw = build_scanlines(width, height, pixel_fn);
    let idat = compress(&raw)?;

    let mut png = Vec::with_capacity(PNG_SIGNATURE.len() + idat.len() + 57);
    png.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr_payload(width, height))?;
    write_chunk(&mut png, b"IDAT", &idat)?;
    write_chunk(&mut png, b"IEND", &[])?;
    Ok(png)
}

/// Encode an image and write it to `path`, creating parent directories
pub fn save_png(path: &Path, width: u32, height: u32, pixel_fn: PixelFn) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)
            .with_context(|| format!("Can't create directory {}", parent.display()))?;
    }

    let png = encode_png(width, height, pixel_fn)?;

    let mut out_file = BufWriter::new(
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
    );
    out_file
        .write_all(&png)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    out_file
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}
