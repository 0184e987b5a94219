use image::{DynamicImage, Rgba, RgbaImage, imageops, imageops::FilterType};
use qrmaster_util::result_ext::ResultExt as _;
use tracing::warn;

use super::{RenderError, pattern::in_rounded_rect};

/// Logo edge as a fraction of the code's edge
const LOGO_SCALE: f32 = 0.2;
const PLATE_BORDER: u32 = 8;
const PLATE_CORNER_RADIUS: f32 = 20.0;
const PLATE_COLOR: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum LogoSource {
    /// encoded image, as picked from the photo library
    Bytes(Vec<u8>),
    /// local file path, remote `http` urls are not fetched
    Path(String),
}

impl LogoSource {
    /// Decode the logo, `None` when the source is skipped
    pub fn load(&self) -> Result<Option<DynamicImage>, RenderError> {
        let bytes = match self {
            Self::Bytes(bytes) => bytes.clone(),
            Self::Path(path) if path.starts_with("http") => {
                warn!("not fetching remote logo {path}, rendering without it");
                return Ok(None);
            }
            Self::Path(path) => std::fs::read(path).map_err_str(RenderError::Logo)?,
        };

        let logo = image::load_from_memory(&bytes).map_err_str(RenderError::Logo)?;
        Ok(Some(logo))
    }
}

/// Center `logo` on the canvas over a white rounded plate
pub fn overlay_logo(canvas: &mut RgbaImage, logo: &DynamicImage) {
    let (width, height) = canvas.dimensions();
    let logo_size = (width.min(height) as f32 * LOGO_SCALE) as u32;

    if logo_size == 0 {
        warn!("canvas too small for a logo, skipping");
        return;
    }

    let logo = logo.resize_exact(logo_size, logo_size, FilterType::Lanczos3).to_rgba8();

    let plate_size = logo_size + PLATE_BORDER * 2;
    let plate_left = (width.saturating_sub(plate_size) / 2) as f32;
    let plate_top = (height.saturating_sub(plate_size) / 2) as f32;

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
        let plate = plate_size as f32;

        if in_rounded_rect(plate_left, plate_top, plate, plate, PLATE_CORNER_RADIUS, px, py) {
            *pixel = PLATE_COLOR;
        }
    }

    let logo_left = (width - logo_size) / 2;
    let logo_top = (height - logo_size) / 2;
    imageops::overlay(canvas, &logo, logo_left as i64, logo_top as i64);
}
