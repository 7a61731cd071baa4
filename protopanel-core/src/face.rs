/// The two-panel face: glyph tables and the pre-drawn neutral/blink scene
use crate::panel::Panel;
use crate::raster::{
    draw_half_circle, draw_line, draw_triangle, draw_wavy_line, HalfPlane, Wave,
};
use nalgebra::Point2;

/// Each half of the face is one 64x32 matrix
pub const FACE_PANEL_WIDTH: usize = 64;
pub const FACE_PANEL_HEIGHT: usize = 32;

/// One shape on a face panel, in panel pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Glyph {
    Line {
        from: (i32, i32),
        to: (i32, i32),
    },
    HalfCircle {
        center: (i32, i32),
        radius: i32,
        half: HalfPlane,
        fill: bool,
    },
    Triangle {
        corners: [(i32, i32); 3],
        fill: bool,
    },
    WavyLine {
        x_start: i32,
        x_end: i32,
        base_y: i32,
        wave: Wave,
    },
    /// Erase the inclusive rectangle between two corners
    Clear {
        from: (i32, i32),
        to: (i32, i32),
    },
}

impl Glyph {
    pub fn draw(&self, panel: &mut Panel<bool>) {
        match *self {
            Glyph::Line { from, to } => draw_line(panel, from.0, from.1, to.0, to.1, true),
            Glyph::HalfCircle {
                center,
                radius,
                half,
                fill,
            } => draw_half_circle(panel, center.0, center.1, radius, half, fill, true),
            Glyph::Triangle { corners, fill } => {
                let [a, b, c] = corners.map(|(x, y)| Point2::new(x, y));
                draw_triangle(panel, a, b, c, fill, true);
            }
            Glyph::WavyLine {
                x_start,
                x_end,
                base_y,
                wave,
            } => draw_wavy_line(panel, x_start, x_end, base_y, wave, true),
            Glyph::Clear { from, to } => panel.clear_rect(from.0, from.1, to.0, to.1),
        }
    }
}

const MOUTH: Wave = Wave {
    thickness: 2,
    amplitude: 3.0,
    wavelength: 32.0,
    phase: 0.0,
};

pub const LEFT_FACE: &[Glyph] = &[
    // Eye
    Glyph::HalfCircle {
        center: (10, 0),
        radius: 10,
        half: HalfPlane::Bottom,
        fill: true,
    },
    // Nose
    Glyph::Triangle {
        corners: [(63, 0), (63, 5), (58, 0)],
        fill: true,
    },
    // Mouth
    Glyph::WavyLine {
        x_start: 8,
        x_end: 64,
        base_y: 27,
        wave: MOUTH,
    },
];

pub const RIGHT_FACE: &[Glyph] = &[
    Glyph::HalfCircle {
        center: (53, 0),
        radius: 10,
        half: HalfPlane::Bottom,
        fill: true,
    },
    Glyph::Triangle {
        corners: [(0, 0), (0, 5), (5, 0)],
        fill: true,
    },
    Glyph::WavyLine {
        x_start: 0,
        x_end: 56,
        base_y: 27,
        wave: MOUTH,
    },
];

/// Drawn over a copy of the neutral left panel
pub const LEFT_BLINK: &[Glyph] = &[
    Glyph::Clear {
        from: (0, 0),
        to: (19, 19),
    },
    Glyph::Line {
        from: (5, 10),
        to: (15, 10),
    },
];

pub const RIGHT_BLINK: &[Glyph] = &[
    Glyph::Clear {
        from: (44, 0),
        to: (63, 19),
    },
    Glyph::Line {
        from: (48, 10),
        to: (58, 10),
    },
];

/// Left and right halves shown together
#[derive(Debug, Clone, PartialEq)]
pub struct PanelPair {
    pub left: Panel<bool>,
    pub right: Panel<bool>,
}

impl PanelPair {
    fn blank() -> Self {
        Self {
            left: Panel::new(FACE_PANEL_WIDTH, FACE_PANEL_HEIGHT),
            right: Panel::new(FACE_PANEL_WIDTH, FACE_PANEL_HEIGHT),
        }
    }

    fn with_glyphs(mut self, left: &[Glyph], right: &[Glyph]) -> Self {
        left.iter().for_each(|glyph| glyph.draw(&mut self.left));
        right.iter().for_each(|glyph| glyph.draw(&mut self.right));
        self
    }
}

/// The two face poses, drawn once up front
#[derive(Debug, Clone, PartialEq)]
pub struct FaceScene {
    pub neutral: PanelPair,
    pub blink: PanelPair,
}

impl FaceScene {
    pub fn build() -> Self {
        let neutral = PanelPair::blank().with_glyphs(LEFT_FACE, RIGHT_FACE);
        let blink = neutral.clone().with_glyphs(LEFT_BLINK, RIGHT_BLINK);
        log::debug!(
            "face scene built: {} lit cells neutral, {} blinking",
            neutral.left.lit_count() + neutral.right.lit_count(),
            blink.left.lit_count() + blink.right.lit_count()
        );
        Self { neutral, blink }
    }
}
