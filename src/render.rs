//! Draw a QR code into an RGBA bitmap, with optional styled modules and a centered logo

pub mod logo;
pub mod pattern;

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use qrcode::{Color, QrCode};
use qrmaster_types::color::{ColorError, HexColor};
use qrmaster_util::result_ext::ResultExt as _;
use tracing::debug;

use crate::qr_code::{DEFAULT_MARGIN, DEFAULT_SIZE, ErrorCorrectionLevel, PatternStyle};

use logo::LogoSource;
use pattern::Cell;

type Result<T, E = RenderError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct RenderOptions {
    /// output is `size` x `size` pixels
    pub size: u32,
    /// quiet zone, in modules
    pub margin: u32,
    pub foreground: String,
    pub background: String,
    pub pattern_style: PatternStyle,
    pub error_correction_level: ErrorCorrectionLevel,
    pub logo: Option<LogoSource>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            margin: DEFAULT_MARGIN,
            foreground: HexColor::BLACK.to_string(),
            background: HexColor::WHITE.to_string(),
            pattern_style: PatternStyle::default(),
            error_correction_level: ErrorCorrectionLevel::default(),
            logo: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum RenderError {
    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid image size: {0}")]
    InvalidSize(u32),

    #[error("unable to encode content as a QR code: {0}")]
    Encode(String),

    #[error("unable to load logo: {0}")]
    Logo(String),

    #[error("unable to write png: {0}")]
    Png(String),
}

impl From<ColorError> for RenderError {
    fn from(error: ColorError) -> Self {
        Self::InvalidColor(error.to_string())
    }
}

/// Render `content` into a square bitmap
pub fn render(content: &str, options: &RenderOptions) -> Result<RgbaImage> {
    if options.size == 0 {
        return Err(RenderError::InvalidSize(options.size));
    }

    let foreground = Rgba(HexColor::try_from_str(&options.foreground)?.to_rgba());
    let background = Rgba(HexColor::try_from_str(&options.background)?.to_rgba());

    let code = QrCode::with_error_correction_level(content, options.error_correction_level.into())
        .map_err_str(RenderError::Encode)?;

    let width = code.width();
    let modules = width as u32 + options.margin * 2;
    let cell_size = options.size as f32 / modules as f32;

    debug!(
        "rendering {width}x{width} modules into {size}px, cell: {cell_size:.2}px",
        size = options.size
    );

    let mut canvas = RgbaImage::from_pixel(options.size, options.size, background);

    for y in 0..width {
        for x in 0..width {
            if code[(x, y)] != Color::Dark {
                continue;
            }

            let cell = Cell {
                left: (x as u32 + options.margin) as f32 * cell_size,
                top: (y as u32 + options.margin) as f32 * cell_size,
                size: cell_size,
            };

            pattern::draw_module(&mut canvas, options.pattern_style, cell, foreground);
        }
    }

    if let Some(source) = &options.logo {
        if let Some(logo) = source.load()? {
            logo::overlay_logo(&mut canvas, &logo);
        }
    }

    Ok(canvas)
}

/// Render `content` and encode the bitmap as PNG
pub fn render_png(content: &str, options: &RenderOptions) -> Result<Vec<u8>> {
    let image = render(content, options)?;

    let mut png_bytes = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err_str(RenderError::Png)?;

    Ok(png_bytes)
}

mod ffi {
    use super::{RenderError, RenderOptions};
    use crate::qr_code::QrCodeData;

    #[uniffi::export]
    pub fn render_qr_png(
        content: String,
        options: RenderOptions,
    ) -> Result<Vec<u8>, RenderError> {
        super::render_png(&content, &options)
    }

    #[uniffi::export]
    pub fn render_qr_code_data_png(qr_code: QrCodeData) -> Result<Vec<u8>, RenderError> {
        super::render_png(&qr_code.content, &qr_code.render_options())
    }

    #[uniffi::export]
    pub fn default_render_options() -> RenderOptions {
        RenderOptions::default()
    }
}
