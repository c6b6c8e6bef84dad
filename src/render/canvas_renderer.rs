use super::palette;
use super::{BoardView, GameEvent, Renderer};

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

const GAP: f64 = 10.0;

/// Draws the board into `<canvas id="board">` and keeps the optional
/// `#score`, `#best` and `#game-over` elements of the page in sync
pub struct CanvasRenderer {
    document: Document,
    context: CanvasRenderingContext2d,
    canvas_size: (f64, f64),
}

impl CanvasRenderer {
    pub fn new(canvas_id: &str) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("No global window exists")?;
        let document = window.document().ok_or("Window should have a document")?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| format!("Canvas element with id '{}' not found", canvas_id))?
            .dyn_into::<HtmlCanvasElement>()?;

        let context = canvas
            .get_context("2d")?
            .ok_or("Canvas should have 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            document,
            context,
            canvas_size: (canvas.width() as f64, canvas.height() as f64),
        })
    }

    fn draw(&mut self, view: &BoardView) -> Result<(), JsValue> {
        let (width, height) = self.canvas_size;
        let cell_width = (width - GAP) / view.grid.width().max(1) as f64;
        let cell_height = (height - GAP) / view.grid.height().max(1) as f64;

        self.context.set_global_alpha(1.0);
        self.context.set_fill_style(&palette::BOARD.hex().into());
        self.context.fill_rect(0.0, 0.0, width, height);
        self.context.set_text_align("center");
        self.context.set_text_baseline("middle");

        for (x, y, &value) in view.grid {
            let left = GAP + x as f64 * cell_width;
            let top = GAP + y as f64 * cell_height;
            let tile_width = cell_width - GAP;
            let tile_height = cell_height - GAP;

            self.context.set_fill_style(&palette::tile_color(value).hex().into());
            self.context.fill_rect(left, top, tile_width, tile_height);

            if value != 0 {
                let text = value.to_string();
                let scale = if text.len() > 3 { 0.3 } else { 0.45 };

                self.context.set_font(&format!("bold {}px sans-serif", (tile_height * scale) as u32));
                self.context.set_fill_style(&palette::text_color(value).hex().into());
                self.context.fill_text(&text, left + tile_width / 2.0, top + tile_height / 2.0)?;
            }
        }

        if view.game_over {
            self.context.set_global_alpha(0.6);
            self.context.set_fill_style(&palette::OVERLAY.hex().into());
            self.context.fill_rect(0.0, 0.0, width, height);
            self.context.set_global_alpha(1.0);
        }

        self.set_text("score", &view.score.to_string());
        self.set_text("best", &view.best.to_string());
        self.set_game_over(view.game_over)
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(element) = self.document.get_element_by_id(id) {
            element.set_text_content(Some(text));
        }
    }

    fn set_game_over(&self, visible: bool) -> Result<(), JsValue> {
        match self.document.get_element_by_id("game-over") {
            Some(element) if visible => element.class_list().remove_1("hidden"),
            Some(element) => element.class_list().add_1("hidden"),
            None => Ok(()),
        }
    }
}

impl Renderer for CanvasRenderer {
    type Error = JsValue;

    fn initialize(&mut self, view: &BoardView) -> Result<(), Self::Error> {
        self.draw(view)
    }

    fn handle_event(&mut self, _event: &GameEvent) -> Result<(), Self::Error> {
        // the page shows events through the #score, #best and #game-over elements
        Ok(())
    }

    fn update(&mut self, view: &BoardView) -> Result<(), Self::Error> {
        self.draw(view)
    }

    fn finalize(&mut self, view: &BoardView) -> Result<(), Self::Error> {
        self.draw(view)
    }
}
