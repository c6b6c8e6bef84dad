use super::glyph;
use super::palette::{self, Rgb};
use super::{BoardView, GameEvent, Renderer};

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use log::info;
use rusttype::{Font, Scale};
use std::fs;
use std::path::{Path, PathBuf};

const CELL: u32 = 120;
const GAP: u32 = 12;

/// Image file renderer that saves the final board to disk
pub struct ImageRenderer {
    output_path: PathBuf,
    font: Option<Font<'static>>,
}

impl ImageRenderer {
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            output_path,
            font: None,
        }
    }

    /// Use a TrueType font for numerals instead of the built-in digits
    pub fn with_font(mut self, path: &Path) -> Result<Self, String> {
        let data = fs::read(path)
            .map_err(|e| format!("Failed to read font {}: {}", path.display(), e))?;
        let font = Font::try_from_vec(data)
            .ok_or_else(|| format!("Invalid font file: {}", path.display()))?;

        self.font = Some(font);
        Ok(self)
    }

    /// Draws the board the way the window does
    pub fn draw(&self, view: &BoardView) -> RgbaImage {
        let columns = view.grid.width() as u32;
        let rows = view.grid.height() as u32;
        let mut canvas = RgbaImage::from_pixel(
            GAP + columns * (CELL + GAP),
            GAP + rows * (CELL + GAP),
            pixel(palette::BOARD),
        );

        for (x, y, &value) in view.grid {
            let left = (GAP + x as u32 * (CELL + GAP)) as i32;
            let top = (GAP + y as u32 * (CELL + GAP)) as i32;

            draw_filled_rect_mut(
                &mut canvas,
                Rect::at(left, top).of_size(CELL, CELL),
                pixel(palette::tile_color(value)),
            );

            if value != 0 {
                self.draw_value(&mut canvas, value, left, top);
            }
        }

        canvas
    }

    fn draw_value(&self, canvas: &mut RgbaImage, value: u32, left: i32, top: i32) {
        let text = value.to_string();
        let color = pixel(palette::text_color(value));

        match &self.font {
            Some(font) => {
                let height = if text.len() > 3 { CELL as f32 * 0.3 } else { CELL as f32 * 0.45 };
                let scale = Scale::uniform(height);
                let (width, height) = text_size(scale, font, &text);

                draw_text_mut(
                    canvas,
                    color,
                    left + (CELL as i32 - width) / 2,
                    top + (CELL as i32 - height) / 2,
                    scale,
                    font,
                    &text,
                );
            }
            None => {
                for block in glyph::blocks(&text, left, top, CELL, CELL) {
                    draw_filled_rect_mut(
                        canvas,
                        Rect::at(block.x, block.y).of_size(block.size, block.size),
                        color,
                    );
                }
            }
        }
    }
}

impl Renderer for ImageRenderer {
    type Error = String;

    fn initialize(&mut self, _view: &BoardView) -> Result<(), Self::Error> {
        Ok(())
    }

    fn handle_event(&mut self, _event: &GameEvent) -> Result<(), Self::Error> {
        Ok(())
    }

    fn finalize(&mut self, view: &BoardView) -> Result<(), Self::Error> {
        self.draw(view)
            .save(&self.output_path)
            .map_err(|e| format!("Failed to save image: {}", e))?;

        info!("Saved board to {}", self.output_path.display());

        Ok(())
    }
}

fn pixel(rgb: Rgb) -> Rgba<u8> {
    Rgba([rgb.0, rgb.1, rgb.2, 255])
}
