//! Per-pixel color functions for the generated brand assets
//!
//! Every generator maps a pixel coordinate and the image dimensions to an RGBA
//! color. They are pure, so regenerating the assets always yields identical files.

use image::Rgba;

/// Signature shared by all pixel generators: `(x, y, width, height) -> color`
pub type PixelFn = fn(u32, u32, u32, u32) -> Rgba<u8>;

const BODY_COLOR: Rgba<u8> = Rgba([138, 88, 255, 255]);
const HANDLE_COLOR: Rgba<u8> = Rgba([220, 200, 255, 255]);
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

// Bag body: superellipse of exponent 4, shifted down from the center
const BODY_HALF_WIDTH: f64 = 260.0;
const BODY_HALF_HEIGHT: f64 = 235.0;
const BODY_OFFSET_Y: i64 = 40;

// Handle: ring around a point above the center, clipped to its upper part
const HANDLE_CENTER_Y: i64 = -125;
const HANDLE_INNER_RADIUS: f64 = 165.0;
const HANDLE_OUTER_RADIUS: f64 = 205.0;
const HANDLE_MAX_DY: i64 = -35;

/// Vertical gradient from a dark navy top to a lighter blue bottom, fully opaque
///
/// Requires `h >= 2`.
pub fn bg_gradient(_x: u32, y: u32, _w: u32, h: u32) -> Rgba<u8> {
    debug_assert!(h >= 2, "gradient needs at least two rows");

    let t = f64::from(y) / f64::from(h - 1);
    let r = (11.0 + 70.0 * t) as u8;
    let g = (18.0 + 35.0 * t) as u8;
    let b = (32.0 + 115.0 * t) as u8;

    Rgba([r, g, b, 255])
}

/// Which part of the icon a pixel belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconRegion {
    Body,
    Handle,
    Empty,
}

impl IconRegion {
    pub fn color(self) -> Rgba<u8> {
        match self {
            IconRegion::Body => BODY_COLOR,
            IconRegion::Handle => HANDLE_COLOR,
            IconRegion::Empty => TRANSPARENT,
        }
    }
}

/// Offset of a pixel from the image center, using integer division for the center
fn center_offset(x: u32, y: u32, w: u32, h: u32) -> (i64, i64) {
    let cx = i64::from(w / 2);
    let cy = i64::from(h / 2);
    (i64::from(x) - cx, i64::from(y) - cy)
}

/// True when the offset lies inside the rounded-square bag body
pub fn in_body(dx: i64, dy: i64) -> bool {
    let bx = dx.abs() as f64 / BODY_HALF_WIDTH;
    let by = (dy - BODY_OFFSET_Y).abs() as f64 / BODY_HALF_HEIGHT;
    bx.powf(4.0) + by.powf(4.0) <= 1.0
}

/// True when the offset lies on the handle arc
pub fn in_handle(dx: i64, dy: i64) -> bool {
    let hy = dy - HANDLE_CENTER_Y;
    let r = ((dx * dx + hy * hy) as f64).sqrt();
    HANDLE_INNER_RADIUS < r && r < HANDLE_OUTER_RADIUS && dy < HANDLE_MAX_DY
}

/// Classify a pixel; the body wins where both shapes overlap
pub fn icon_region(x: u32, y: u32, w: u32, h: u32) -> IconRegion {
    let (dx, dy) = center_offset(x, y, w, h);

    if in_body(dx, dy) {
        IconRegion::Body
    } else if in_handle(dx, dy) {
        IconRegion::Handle
    } else {
        IconRegion::Empty
    }
}

/// Shopping bag icon foreground on a transparent canvas
pub fn fg_icon(x: u32, y: u32, w: u32, h: u32) -> Rgba<u8> {
    icon_region(x, y, w, h).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: u32 = 1024;

    #[test]
    fn gradient_blue_channel_never_decreases() {
        let mut previous = 0u8;
        for y in 0..SIZE {
            let blue = bg_gradient(0, y, SIZE, SIZE)[2];
            assert!(blue >= previous, "blue dropped at row {y}");
            previous = blue;
        }
    }

    #[test]
    fn gradient_endpoints_on_tiny_image() {
        for x in 0..4 {
            assert_eq!(bg_gradient(x, 0, 4, 4), Rgba([11, 18, 32, 255]));
            assert_eq!(bg_gradient(x, 3, 4, 4), Rgba([81, 53, 147, 255]));
        }
        // t = 1/3: 11 + 23.33, 18 + 11.67, 32 + 38.33, truncated
        assert_eq!(bg_gradient(0, 1, 4, 4), Rgba([34, 29, 70, 255]));
    }

    #[test]
    fn gradient_ignores_column() {
        for x in [0, 17, 512, 1023] {
            assert_eq!(bg_gradient(x, 300, SIZE, SIZE), bg_gradient(0, 300, SIZE, SIZE));
        }
    }

    #[test]
    fn icon_center_is_opaque_and_corners_are_transparent() {
        assert_eq!(fg_icon(SIZE / 2, SIZE / 2, SIZE, SIZE)[3], 255);

        let last = SIZE - 1;
        for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
            assert_eq!(fg_icon(x, y, SIZE, SIZE)[3], 0, "corner ({x}, {y})");
        }
    }

    #[test]
    fn icon_center_is_body_colored() {
        assert_eq!(fg_icon(SIZE / 2, SIZE / 2, SIZE, SIZE), Rgba([138, 88, 255, 255]));
    }

    #[test]
    fn handle_pixel_above_body() {
        // Straight above the handle center, 185 px out: inside the ring, outside the body
        let (dx, dy) = (0, HANDLE_CENTER_Y - 185);
        assert!(in_handle(dx, dy));
        assert!(!in_body(dx, dy));

        let x = (SIZE / 2) as i64 + dx;
        let y = (SIZE / 2) as i64 + dy;
        assert_eq!(
            icon_region(x as u32, y as u32, SIZE, SIZE),
            IconRegion::Handle
        );
        assert_eq!(fg_icon(x as u32, y as u32, SIZE, SIZE), Rgba([220, 200, 255, 255]));
    }

    #[test]
    fn handle_is_clipped_below_reference_line() {
        // Radius ~185 in every case, only the vertical clip differs
        assert!(in_handle(162, -36));
        assert!(!in_handle(162, -35));
        assert!(!in_handle(0, HANDLE_CENTER_Y + 185));
    }

    #[test]
    fn ring_bounds_are_exclusive() {
        assert!(!in_handle(0, HANDLE_CENTER_Y - 165));
        assert!(!in_handle(0, HANDLE_CENTER_Y - 205));
        assert!(in_handle(0, HANDLE_CENTER_Y - 166));
        assert!(in_handle(0, HANDLE_CENTER_Y - 204));
    }

    #[test]
    fn body_and_handle_regions_never_overlap() {
        let mut handle_pixels = 0;
        for y in 0..SIZE {
            for x in 0..SIZE {
                let (dx, dy) = center_offset(x, y, SIZE, SIZE);
                match icon_region(x, y, SIZE, SIZE) {
                    IconRegion::Body => assert!(in_body(dx, dy)),
                    IconRegion::Handle => {
                        handle_pixels += 1;
                        assert!(!in_body(dx, dy), "handle pixel ({x}, {y}) is also body");
                        assert!(in_handle(dx, dy));
                    }
                    IconRegion::Empty => assert!(!in_body(dx, dy) && !in_handle(dx, dy)),
                }
            }
        }
        assert!(handle_pixels > 0);
    }

    #[test]
    fn generators_are_deterministic() {
        for (x, y) in [(0, 0), (300, 200), (512, 512), (1000, 40)] {
            assert_eq!(bg_gradient(x, y, SIZE, SIZE), bg_gradient(x, y, SIZE, SIZE));
            assert_eq!(fg_icon(x, y, SIZE, SIZE), fg_icon(x, y, SIZE, SIZE));
        }
    }
}
