//! Flushes framebuffers to the terminal.
//!
//! Owns raw mode and the alternate screen. After the first frame only
//! changed spans are rewritten; each row is diffed against the previous
//! frame and contiguous runs of changed cells are emitted with a single
//! cursor move.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::term::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Drop the previous frame so the next draw repaints everything.
    /// Needed after a terminal resize.
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Flush a frame, swapping it into the renderer so the caller's buffer
    /// can be reused next frame without cloning.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let mut styler = StyleTracker::default();

        match self.prev.take() {
            Some(mut old) if (old.width(), old.height()) == (fb.width(), fb.height()) => {
                self.draw_diff(fb, &old, &mut styler)?;
                std::mem::swap(&mut old, fb);
                self.prev = Some(old);
            }
            _ => {
                self.draw_full(fb, &mut styler)?;
                let mut old = FrameBuffer::new(fb.width(), fb.height());
                std::mem::swap(&mut old, fb);
                self.prev = Some(old);
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn draw_full(&mut self, fb: &FrameBuffer, styler: &mut StyleTracker) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        for y in 0..fb.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..fb.width() {
                let cell = fb.get(x, y);
                styler.apply(&mut self.stdout, cell.style)?;
                self.stdout.queue(Print(cell.ch))?;
            }
        }
        Ok(())
    }

    fn draw_diff(
        &mut self,
        next: &FrameBuffer,
        prev: &FrameBuffer,
        styler: &mut StyleTracker,
    ) -> Result<()> {
        for y in 0..next.height() {
            let mut x = 0;
            while x < next.width() {
                if next.get(x, y) == prev.get(x, y) {
                    x += 1;
                    continue;
                }
                // Start of a changed run: one cursor move, then print until
                // cells match again.
                self.stdout.queue(cursor::MoveTo(x, y))?;
                while x < next.width() && next.get(x, y) != prev.get(x, y) {
                    let cell = next.get(x, y);
                    styler.apply(&mut self.stdout, cell.style)?;
                    self.stdout.queue(Print(cell.ch))?;
                    x += 1;
                }
            }
        }
        Ok(())
    }
}

/// Emits style escape sequences only when the style actually changes.
#[derive(Default)]
struct StyleTracker {
    current: Option<CellStyle>,
}

impl StyleTracker {
    fn apply(&mut self, out: &mut io::Stdout, style: CellStyle) -> Result<()> {
        if self.current == Some(style) {
            return Ok(());
        }
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(SetForegroundColor(to_color(style.fg)))?;
        out.queue(SetBackgroundColor(to_color(style.bg)))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        self.current = Some(style);
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
