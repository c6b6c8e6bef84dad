use super::glyph;
use super::palette::{self, Rgb};
use super::{BoardView, GameEvent, Renderer};
use crate::grid::{Direction, Size};
use crate::input::{Command, Swipe};

use log::info;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::{FullscreenType, Window};
use sdl2::{EventPump, Sdl};
use std::collections::VecDeque;

const GAP: u32 = 10;

/// SDL2 window showing the board, fed by keyboard and mouse/touch swipes
pub struct SdlRenderer {
    context: Sdl,
    canvas: Canvas<Window>,
    events: EventPump,
    pending: VecDeque<Command>,
    swipe: Option<Swipe>,
    should_quit: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct SdlConfig {
    pub window_size: Size,
    pub vsync: bool,
    pub fullscreen: bool,
}

impl SdlRenderer {
    pub fn new(config: &SdlConfig) -> Result<Self, String> {
        let context = sdl2::init()?;
        let video = context.video()?;

        let mut window = video
            .window(
                "2048",
                config.window_size.width as u32,
                config.window_size.height as u32,
            )
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        if config.fullscreen {
            window.set_fullscreen(FullscreenType::True)?;
        }

        let mut builder = window.into_canvas();

        if config.vsync {
            builder = builder.present_vsync();
        }

        let canvas = builder.build().map_err(|e| e.to_string())?;
        let events = context.event_pump()?;

        Ok(Self {
            context,
            canvas,
            events,
            pending: VecDeque::new(),
            swipe: None,
            should_quit: false,
        })
    }

    /// The SDL context, for subsystems that share the window's lifetime
    pub fn context(&self) -> &Sdl {
        &self.context
    }

    fn handle_events(&mut self) {
        let (width, height) = self.canvas.output_size().unwrap_or((1, 1));

        for event in self.events.poll_iter() {
            let command = match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => {
                    self.should_quit = true;
                    None
                }
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => key_command(keycode),
                Event::MouseButtonDown { x, y, .. } => {
                    self.swipe = Some(Swipe::start(x as f64, y as f64));
                    None
                }
                Event::MouseButtonUp { x, y, .. } => self
                    .swipe
                    .take()
                    .and_then(|swipe| swipe.finish(x as f64, y as f64))
                    .map(Command::Move),
                // finger coordinates are normalised to 0..1
                Event::FingerDown { x, y, .. } => {
                    self.swipe = Some(Swipe::start(
                        (x * width as f32) as f64,
                        (y * height as f32) as f64,
                    ));
                    None
                }
                Event::FingerUp { x, y, .. } => self
                    .swipe
                    .take()
                    .and_then(|swipe| {
                        swipe.finish((x * width as f32) as f64, (y * height as f32) as f64)
                    })
                    .map(Command::Move),
                _ => None,
            };

            if let Some(command) = command {
                self.pending.push_back(command);
            }
        }
    }

    fn render(&mut self, view: &BoardView) -> Result<(), String> {
        let (width, height) = self.canvas.output_size()?;
        let columns = view.grid.width().max(1) as u32;
        let rows = view.grid.height().max(1) as u32;
        let cell_width = width.saturating_sub(GAP) / columns;
        let cell_height = height.saturating_sub(GAP) / rows;

        self.canvas.set_blend_mode(BlendMode::Blend);
        self.canvas.set_draw_color(color(palette::BOARD));
        self.canvas.clear();

        for (x, y, &value) in view.grid {
            let left = (GAP + x as u32 * cell_width) as i32;
            let top = (GAP + y as u32 * cell_height) as i32;
            let tile_width = cell_width.saturating_sub(GAP).max(1);
            let tile_height = cell_height.saturating_sub(GAP).max(1);

            self.canvas.set_draw_color(color(palette::tile_color(value)));
            self.canvas.fill_rect(Rect::new(left, top, tile_width, tile_height))?;

            if value != 0 {
                self.canvas.set_draw_color(color(palette::text_color(value)));

                for block in glyph::blocks(&value.to_string(), left, top, tile_width, tile_height) {
                    self.canvas
                        .fill_rect(Rect::new(block.x, block.y, block.size, block.size))?;
                }
            }
        }

        if view.game_over {
            let overlay = palette::OVERLAY;
            self.canvas.set_draw_color(Color::RGBA(overlay.0, overlay.1, overlay.2, 160));
            self.canvas.fill_rect(Rect::new(0, 0, width, height))?;
        }

        let title = if view.game_over {
            format!("2048 - Game over! Score {} (best {}) - R to restart", view.score, view.best)
        } else {
            format!("2048 - Score {} (best {})", view.score, view.best)
        };

        self.canvas
            .window_mut()
            .set_title(&title)
            .map_err(|e| e.to_string())?;
        self.canvas.present();

        Ok(())
    }
}

impl Renderer for SdlRenderer {
    type Error = String;

    fn initialize(&mut self, view: &BoardView) -> Result<(), Self::Error> {
        self.render(view)
    }

    fn handle_event(&mut self, event: &GameEvent) -> Result<(), Self::Error> {
        if let GameEvent::GameOver = event {
            info!("No moves left");
        }

        Ok(())
    }

    fn update(&mut self, view: &BoardView) -> Result<(), Self::Error> {
        self.render(view)
    }

    fn poll_input(&mut self) -> Option<Command> {
        self.handle_events();
        self.pending.pop_front()
    }

    fn should_quit(&mut self) -> bool {
        self.should_quit
    }

    fn finalize(&mut self, view: &BoardView) -> Result<(), Self::Error> {
        self.render(view)
    }
}

fn key_command(keycode: Keycode) -> Option<Command> {
    match keycode {
        Keycode::Up | Keycode::W => Some(Command::Move(Direction::Up)),
        Keycode::Down | Keycode::S => Some(Command::Move(Direction::Down)),
        Keycode::Left | Keycode::A => Some(Command::Move(Direction::Left)),
        Keycode::Right | Keycode::D => Some(Command::Move(Direction::Right)),
        Keycode::R => Some(Command::Restart),
        _ => None,
    }
}

fn color(rgb: Rgb) -> Color {
    Color::RGB(rgb.0, rgb.1, rgb.2)
}
