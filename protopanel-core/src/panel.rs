/// Fixed-size pixel buffers and the colors stored in them
use thiserror::Error;

/// Errors raised while reading a color from configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected six hex digits, got {0:?}")]
    Length(String),
    #[error("invalid hex digits in {0:?}")]
    Digits(String),
}

/// Normalized RGB color, each channel in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const CYAN: Rgb = Rgb::new(0.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorError::Length(hex.to_string()));
        }
        // from_str_radix alone would let a sign through
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::Digits(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| ColorError::Digits(hex.to_string()))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Multiply every channel by `factor`
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    /// Linear blend, `t = 0` gives `self` and `t = 1` gives `other`
    pub fn lerp(self, other: Rgb, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    pub fn to_rgb8(self) -> [u8; 3] {
        let byte = |c: f32| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        [byte(self.r), byte(self.g), byte(self.b)]
    }
}

/// A width x height grid of cells, stored row-major.
///
/// Writes outside `[0, width) x [0, height)` are dropped, so rasterizers can
/// sweep past the edges without checking bounds themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel<P> {
    width: usize,
    height: usize,
    cells: Vec<P>,
}

impl<P: Copy + Default> Panel<P> {
    /// Create a panel with every cell set to the background value
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, P::default())
    }

    pub fn filled(width: usize, height: usize, value: P) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Write one cell; out-of-bounds coordinates are a no-op
    pub fn set(&mut self, x: i32, y: i32, value: P) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = value;
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<P> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn fill(&mut self, value: P) {
        self.cells.iter_mut().for_each(|cell| *cell = value);
    }

    /// Reset the inclusive rectangle `(x0, y0)..=(x1, y1)` to the background value
    pub fn clear_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        for y in y0.min(y1)..=y0.max(y1) {
            for x in x0.min(x1)..=x0.max(x1) {
                self.set(x, y, P::default());
            }
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[P]> + '_ {
        (0..self.height).map(move |y| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// Copy the panel out as rows of cells, top row first
    pub fn to_rows(&self) -> Vec<Vec<P>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Every cell as `(x, y, value)` in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, P)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &value)| (i % width, i / width, value))
    }
}

impl Panel<bool> {
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }
}
