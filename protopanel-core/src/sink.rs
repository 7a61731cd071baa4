/// Seams to the output side: LED-matrix style displays, frame encoders and
/// the interrupt source that ends a live loop
use crate::face::PanelPair;
use crate::panel::{Panel, Rgb};
use std::ops::{Deref, DerefMut};
use std::time::Duration;

/// A display that takes a clear followed by individual pixel writes per frame
pub trait PixelMatrix {
    type Error;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn clear(&mut self);
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb);
    /// Push the pending frame to the device
    fn sync(&mut self) -> Result<(), Self::Error>;
}

/// Consumer of finished frames in display order, e.g. an animation encoder
pub trait FrameSink {
    type Error;

    fn push(&mut self, frame: &Panel<Rgb>) -> Result<(), Self::Error>;
    fn finish(&mut self) -> Result<(), Self::Error>;
}

/// Blocks between frames and reports whether the loop should stop
pub trait Interrupt {
    /// Wait up to `dwell`; `true` means an interrupt arrived
    fn wait(&mut self, dwell: Duration) -> bool;
}

fn blit<M, I>(matrix: &mut M, offset_x: usize, cells: I)
where
    M: PixelMatrix,
    I: Iterator<Item = (usize, usize, Rgb)>,
{
    let (width, height) = (matrix.width(), matrix.height());
    for (x, y, color) in cells {
        let x = x + offset_x;
        if x < width && y < height {
            matrix.set_pixel(x, y, color);
        }
    }
}

/// Show a color panel; black cells are left to the clear
pub fn present_panel<M: PixelMatrix>(matrix: &mut M, panel: &Panel<Rgb>) -> Result<(), M::Error> {
    matrix.clear();
    blit(
        matrix,
        0,
        panel.pixels().filter(|&(_, _, color)| color != Rgb::BLACK),
    );
    matrix.sync()
}

/// Show two face panels side by side, lit cells in `color`
pub fn present_pair<M: PixelMatrix>(
    matrix: &mut M,
    pair: &PanelPair,
    color: Rgb,
) -> Result<(), M::Error> {
    matrix.clear();
    let lit = |panel: &Panel<bool>| {
        panel
            .pixels()
            .filter(|&(_, _, on)| on)
            .map(move |(x, y, _)| (x, y, color))
            .collect::<Vec<_>>()
    };
    blit(matrix, 0, lit(&pair.left).into_iter());
    blit(matrix, pair.left.width(), lit(&pair.right).into_iter());
    matrix.sync()
}

/// Holds a display for a live loop and blanks it on every exit path
pub struct DisplayGuard<'a, M: PixelMatrix> {
    matrix: &'a mut M,
}

impl<'a, M: PixelMatrix> DisplayGuard<'a, M> {
    pub fn new(matrix: &'a mut M) -> Self {
        Self { matrix }
    }
}

impl<M: PixelMatrix> Deref for DisplayGuard<'_, M> {
    type Target = M;

    fn deref(&self) -> &M {
        &*self.matrix
    }
}

impl<M: PixelMatrix> DerefMut for DisplayGuard<'_, M> {
    fn deref_mut(&mut self) -> &mut M {
        &mut *self.matrix
    }
}

impl<M: PixelMatrix> Drop for DisplayGuard<'_, M> {
    fn drop(&mut self) {
        self.matrix.clear();
        if self.matrix.sync().is_err() {
            log::warn!("failed to blank the display on shutdown");
        }
    }
}
