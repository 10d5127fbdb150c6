//! TerminalRenderer: flushes framebuffers to a real terminal.
//!
//! Redraws are row-granular: a row is reprinted only when it differs from the
//! previously flushed frame. For a playfield this size that is already well
//! under terminal bandwidth.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let full = match &self.last {
            Some(prev) => prev.width() != fb.width() || prev.height() != fb.height(),
            None => true,
        };

        if full {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
        }

        let mut style: Option<CellStyle> = None;
        for y in 0..fb.height() {
            if !full {
                // Row unchanged since the last flush: skip it.
                if let Some(prev) = &self.last {
                    if prev.row(y) == fb.row(y) {
                        continue;
                    }
                }
            }
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for cell in fb.row(y) {
                if style != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    style = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        self.last = Some(fb.clone());
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout
            .queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_conversion_round_trips_components() {
        let rgb = Rgb::new(10, 20, 30);
        assert_eq!(
            rgb_to_color(rgb),
            Color::Rgb {
                r: 10,
                g: 20,
                b: 30
            }
        );
    }
}
