//! GameView: maps a published core frame into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Frame;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Config, SessionState};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders frames into a bordered, centered playfield.
pub struct GameView {
    config: Config,
    /// Game pixels per terminal column.
    px_per_col: f32,
    /// Game pixels per terminal row.
    px_per_row: f32,
}

impl GameView {
    /// 10x20 px per cell maps the 600x600 screen to 60x30 cells, which
    /// compensates for typical terminal glyph aspect ratio.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            px_per_col: 10.0,
            px_per_row: 20.0,
        }
    }

    pub fn with_scale(config: Config, px_per_col: f32, px_per_row: f32) -> Self {
        Self {
            config,
            px_per_col,
            px_per_row,
        }
    }

    fn cols(&self) -> u16 {
        (self.config.screen_width / self.px_per_col).ceil() as u16
    }

    fn rows(&self) -> u16 {
        (self.config.screen_height / self.px_per_row).ceil() as u16
    }

    /// Render one frame into a framebuffer sized to the viewport.
    pub fn render(&self, frame: &Frame, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let field_w = self.cols();
        let field_h = self.rows();
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        // Top-left of the playfield interior.
        let origin_x = start_x + 1;
        let origin_y = start_y + 1;

        let sky = CellStyle::new(Rgb::new(90, 120, 150), Rgb::new(25, 35, 55));
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let pipe = CellStyle::new(Rgb::new(70, 180, 70), Rgb::new(25, 35, 55));
        let bird = CellStyle::new(Rgb::new(240, 210, 60), Rgb::new(25, 35, 55)).bold();

        fb.fill_rect(origin_x, origin_y, field_w, field_h, ' ', sky);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Obstacle columns: everything outside the gap is pipe.
        for ob in &frame.obstacles {
            let col_lo = self.clamp_col(ob.x / self.px_per_col);
            let col_hi = self.clamp_col((ob.x + ob.width) / self.px_per_col);
            let gap_row_lo = self.clamp_row(ob.gap_top / self.px_per_row);
            let gap_row_hi = self.clamp_row((ob.gap_top + ob.gap_size) / self.px_per_row);
            for col in col_lo..col_hi {
                for row in 0..gap_row_lo {
                    fb.set(origin_x + col, origin_y + row, pipe.into_cell('█'));
                }
                for row in gap_row_hi..field_h {
                    fb.set(origin_x + col, origin_y + row, pipe.into_cell('█'));
                }
            }
        }

        // Avatar box at its fixed horizontal span.
        let bird_col_lo = self.clamp_col(self.config.avatar_x() / self.px_per_col);
        let bird_col_hi =
            self.clamp_col((self.config.avatar_x() + frame.avatar_size) / self.px_per_col);
        let bird_row_lo = self.clamp_row(frame.avatar_top / self.px_per_row);
        let bird_row_hi =
            self.clamp_row((frame.avatar_top + frame.avatar_size) / self.px_per_row);
        for col in bird_col_lo..bird_col_hi.max(bird_col_lo + 1) {
            for row in bird_row_lo..bird_row_hi.max(bird_row_lo + 1) {
                fb.set(origin_x + col, origin_y + row, bird.into_cell('●'));
            }
        }

        // Score on the top border.
        let score_text = format!(" SCORE {:03} ", frame.score);
        fb.put_str(origin_x + 1, start_y, &score_text, border);

        match frame.state {
            SessionState::NotStarted => {
                self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PRESS SPACE");
            }
            SessionState::GameOver => {
                self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
                self.draw_overlay_below(&mut fb, start_x, start_y, frame_w, frame_h, "R = PLAY AGAIN");
            }
            SessionState::Running => {}
        }

        fb
    }

    fn clamp_col(&self, col: f32) -> u16 {
        col.round().clamp(0.0, self.cols() as f32) as u16
    }

    fn clamp_row(&self, row: f32) -> u16 {
        row.round().clamp(0.0, self.rows() as f32) as u16
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        for dx in 0..w {
            fb.set(x + dx, y, style.into_cell('─'));
            fb.set(x + dx, y + h - 1, style.into_cell('─'));
        }
        for dy in 0..h {
            fb.set(x, y + dy, style.into_cell('│'));
            fb.set(x + w - 1, y + dy, style.into_cell('│'));
        }
        fb.set(x, y, style.into_cell('┌'));
        fb.set(x + w - 1, y, style.into_cell('┐'));
        fb.set(x, y + h - 1, style.into_cell('└'));
        fb.set(x + w - 1, y + h - 1, style.into_cell('┘'));
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        text: &str,
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(120, 30, 30)).bold();
        let tx = x + w.saturating_sub(text.len() as u16) / 2;
        let ty = y + h / 2;
        fb.put_str(tx, ty, text, style);
    }

    fn draw_overlay_below(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        text: &str,
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(120, 30, 30));
        let tx = x + w.saturating_sub(text.len() as u16) / 2;
        let ty = y + h / 2 + 1;
        fb.put_str(tx, ty, text, style);
    }
}
