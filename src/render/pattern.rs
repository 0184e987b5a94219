use image::{Rgba, RgbaImage};

use crate::qr_code::PatternStyle;

const DOT_RADIUS: f32 = 0.4;
const ROUNDED_CORNER_RADIUS: f32 = 0.25;

/// One module's square on the canvas, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub left: f32,
    pub top: f32,
    pub size: f32,
}

impl Cell {
    fn center(&self) -> (f32, f32) {
        let half = self.size / 2.0;
        (self.left + half, self.top + half)
    }
}

/// Paint one dark module, a pixel is painted when its center falls inside the shape
pub fn draw_module(canvas: &mut RgbaImage, style: PatternStyle, cell: Cell, color: Rgba<u8>) {
    let (width, height) = canvas.dimensions();

    let x_start = cell.left.floor().max(0.0) as u32;
    let y_start = cell.top.floor().max(0.0) as u32;
    let x_end = ((cell.left + cell.size).ceil() as u32).min(width);
    let y_end = ((cell.top + cell.size).ceil() as u32).min(height);

    for y in y_start..y_end {
        for x in x_start..x_end {
            let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
            if covers(style, cell, px, py) {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

pub fn covers(style: PatternStyle, cell: Cell, x: f32, y: f32) -> bool {
    match style {
        PatternStyle::Square => {
            in_rounded_rect(cell.left, cell.top, cell.size, cell.size, 0.0, x, y)
        }
        PatternStyle::Dot => {
            let (cx, cy) = cell.center();
            let radius = cell.size * DOT_RADIUS;
            (x - cx).powi(2) + (y - cy).powi(2) <= radius.powi(2)
        }
        PatternStyle::Rounded => {
            let radius = cell.size * ROUNDED_CORNER_RADIUS;
            in_rounded_rect(cell.left, cell.top, cell.size, cell.size, radius, x, y)
        }
    }
}

/// Point in a rectangle whose corners are rounded with `radius`
pub fn in_rounded_rect(
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    radius: f32,
    x: f32,
    y: f32,
) -> bool {
    let (right, bottom) = (left + width, top + height);
    if x < left || x >= right || y < top || y >= bottom {
        return false;
    }

    let radius = radius.min(width / 2.0).min(height / 2.0);
    if radius <= 0.0 {
        return true;
    }

    // distance from the nearest point of the inner rectangle
    let nearest_x = x.clamp(left + radius, right - radius);
    let nearest_y = y.clamp(top + radius, bottom - radius);

    (x - nearest_x).powi(2) + (y - nearest_y).powi(2) <= radius.powi(2)
}
