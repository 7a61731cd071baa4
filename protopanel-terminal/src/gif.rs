/// Animated GIF output for the cube animation
use crate::error::SinkError;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use protopanel_core::{FrameSink, Panel, Rgb};
use std::io::Write;

/// Collects pushed panels and writes them as one looping GIF on `finish`.
///
/// The encoder only emits the GIF trailer when dropped, so the whole file is
/// encoded in memory first; the write and flush errors then reach the caller.
pub struct GifSink<W: Write> {
    writer: W,
    delay: Delay,
    pending: Vec<Frame>,
    frames: usize,
}

impl<W: Write> GifSink<W> {
    pub fn new(writer: W, fps: u32) -> Self {
        Self {
            writer,
            delay: Delay::from_numer_denom_ms(1000, fps.max(1)),
            pending: Vec::new(),
            frames: 0,
        }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn encode(&mut self) -> Result<Vec<u8>, SinkError> {
        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut bytes);
            encoder.set_repeat(Repeat::Infinite)?;
            encoder.encode_frames(self.pending.drain(..))?;
        }
        Ok(bytes)
    }
}

fn to_image(panel: &Panel<Rgb>) -> RgbaImage {
    RgbaImage::from_fn(panel.width() as u32, panel.height() as u32, |x, y| {
        let [r, g, b] = panel.get(x as i32, y as i32).unwrap_or_default().to_rgb8();
        Rgba([r, g, b, 255])
    })
}

impl<W: Write> FrameSink for GifSink<W> {
    type Error = SinkError;

    fn push(&mut self, frame: &Panel<Rgb>) -> Result<(), SinkError> {
        self.pending
            .push(Frame::from_parts(to_image(frame), 0, 0, self.delay));
        self.frames += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        let bytes = self.encode()?;
        self.writer.write_all(&bytes)?;
        self.writer.flush()?;
        log::info!("encoded {} frames into {} bytes", self.frames, bytes.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protopanel_core::{CubeAnimation, CubeConfig};
    use std::io;

    /// Accepts nothing
    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Takes every write but fails to flush
    #[derive(Default)]
    struct UnflushableWriter {
        bytes: Vec<u8>,
    }

    impl Write for UnflushableWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "flush failed"))
        }
    }

    #[test]
    fn test_to_image_copies_colors() {
        let mut panel = Panel::new(3, 2);
        panel.set(2, 1, Rgb::CYAN);
        let image = to_image(&panel);
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(2, 1), &Rgba([0, 255, 255, 255]));
        assert_eq!(image.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_encodes_animation() {
        let animation = CubeAnimation::new(CubeConfig {
            frames: 4,
            ..CubeConfig::default()
        });
        let mut sink = GifSink::new(Vec::new(), 30);
        assert_eq!(animation.render_into(&mut sink).unwrap(), 4);
        assert_eq!(sink.frames(), 4);

        // Complete as soon as finish returns, trailer included
        let buffer = sink.into_inner();
        assert!(buffer.starts_with(b"GIF89a"));
        assert_eq!(buffer.last(), Some(&0x3b));
    }

    #[test]
    fn test_nothing_written_before_finish() {
        let mut sink = GifSink::new(Vec::new(), 10);
        sink.push(&Panel::filled(4, 4, Rgb::WHITE)).unwrap();
        assert!(sink.into_inner().is_empty());
    }

    #[test]
    fn test_finish_reports_write_failure() {
        let mut sink = GifSink::new(BrokenWriter, 30);
        sink.push(&Panel::new(4, 4)).unwrap();
        let err = sink.finish().unwrap_err();
        assert!(matches!(err, SinkError::Io(_)));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_finish_reports_flush_failure() {
        let animation = CubeAnimation::new(CubeConfig {
            frames: 2,
            ..CubeConfig::default()
        });
        let mut sink = GifSink::new(UnflushableWriter::default(), 30);
        assert!(matches!(animation.render_into(&mut sink), Err(SinkError::Io(_))));
        assert!(sink.into_inner().bytes.starts_with(b"GIF89a"));
    }
}
