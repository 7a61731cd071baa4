/// Terminal stand-in for an LED matrix
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use protopanel_core::{Panel, PixelMatrix, Rgb};
use std::io::{self, Write};

/// Upper half block: foreground paints the top pixel, background the bottom one
const HALF_BLOCK: char = '\u{2580}';

/// Pixel matrix drawn with two pixels per character cell
pub struct TerminalMatrix<W: Write> {
    pixels: Panel<Rgb>,
    out: W,
}

impl<W: Write> TerminalMatrix<W> {
    pub fn new(width: usize, height: usize, out: W) -> Self {
        Self {
            pixels: Panel::filled(width, height, Rgb::BLACK),
            out,
        }
    }

    /// Terminal rows needed to show the matrix
    pub fn rows(&self) -> usize {
        self.pixels.height().div_ceil(2)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Rows past the bottom edge read as black
    fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.pixels.get(x as i32, y as i32).unwrap_or(Rgb::BLACK)
    }

    fn draw(&mut self) -> io::Result<()> {
        for row in 0..self.rows() {
            self.out.queue(cursor::MoveTo(0, row as u16))?;
            for x in 0..self.pixels.width() {
                let top = terminal_color(self.pixel(x, row * 2));
                let bottom = terminal_color(self.pixel(x, row * 2 + 1));
                self.out.queue(SetForegroundColor(top))?;
                self.out.queue(SetBackgroundColor(bottom))?;
                self.out.queue(Print(HALF_BLOCK))?;
            }
            self.out.queue(ResetColor)?;
        }
        self.out.flush()
    }
}

fn terminal_color(color: Rgb) -> Color {
    let [r, g, b] = color.to_rgb8();
    Color::Rgb { r, g, b }
}

impl<W: Write> PixelMatrix for TerminalMatrix<W> {
    type Error = io::Error;

    fn width(&self) -> usize {
        self.pixels.width()
    }

    fn height(&self) -> usize {
        self.pixels.height()
    }

    fn clear(&mut self) {
        self.pixels.fill(Rgb::BLACK);
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) {
        self.pixels.set(x as i32, y as i32, color);
    }

    fn sync(&mut self) -> io::Result<()> {
        self.draw()
    }
}
