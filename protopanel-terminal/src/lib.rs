/// Terminal and file output for protopanel
use crossterm::{cursor, execute, terminal};
use protopanel_core::sequence::{run_blink, run_cube_live};
use protopanel_core::{CubeAnimation, FaceConfig, FaceScene, PixelMatrix};
use std::io::{self, stdout, Stdout};

pub mod error;
pub mod gif;
pub mod input;
pub mod renderer;

pub use error::{SinkError, SinkResult};
pub use gif::GifSink;
pub use input::KeyboardInterrupt;
pub use renderer::TerminalMatrix;

/// Owns the terminal while a live loop runs on an emulated LED matrix
pub struct TerminalApp {
    matrix: TerminalMatrix<Stdout>,
}

impl TerminalApp {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            matrix: TerminalMatrix::new(width, height, stdout()),
        }
    }

    /// Spin the cube until Q, Esc or Ctrl-C
    pub fn run_cube(&mut self, animation: &CubeAnimation) -> SinkResult<u64> {
        self.run(|matrix| run_cube_live(animation, matrix, &mut KeyboardInterrupt))
    }

    /// Blink the face until Q, Esc or Ctrl-C
    pub fn run_face(&mut self, scene: &FaceScene, config: &FaceConfig) -> SinkResult<u64> {
        self.run(|matrix| run_blink(scene, config, matrix, &mut KeyboardInterrupt))
    }

    fn run<F>(&mut self, body: F) -> SinkResult<u64>
    where
        F: FnOnce(&mut TerminalMatrix<Stdout>) -> io::Result<u64>,
    {
        let (columns, rows) = terminal::size()?;
        if (columns as usize) < self.matrix.width() || (rows as usize) < self.matrix.rows() {
            log::warn!(
                "terminal is {}x{}, the matrix needs {}x{}",
                columns,
                rows,
                self.matrix.width(),
                self.matrix.rows()
            );
        }

        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = body(&mut self.matrix);

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        Ok(result?)
    }
}
