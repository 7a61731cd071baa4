/// Primitive rasterizers
///
/// Every routine writes into a caller-supplied [`Panel`]. Shapes may extend
/// past the panel edges, or anywhere in the `i32` plane: scans are clipped to
/// the panel and coordinate math is done in wider integers.
use crate::panel::Panel;
use nalgebra::Point2;
use std::collections::VecDeque;
use std::f32::consts::PI;
use std::ops::RangeInclusive;

/// Which half of a circle to keep, relative to its centre
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalfPlane {
    Left,
    Right,
    Top,
    Bottom,
}

impl HalfPlane {
    /// The diameter row/column belongs to every half
    fn contains(self, dx: i64, dy: i64) -> bool {
        match self {
            HalfPlane::Left => dx <= 0,
            HalfPlane::Right => dx >= 0,
            HalfPlane::Top => dy <= 0,
            HalfPlane::Bottom => dy >= 0,
        }
    }
}

/// Square stamp applied at every point of a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    /// Side length in cells; even sizes round down to the next odd square
    pub size: u32,
}

impl Brush {
    pub const PIXEL: Brush = Brush { size: 1 };

    pub fn new(size: u32) -> Self {
        Self { size }
    }

    fn reach(self) -> i64 {
        (self.size.max(1) as i64 - 1) / 2
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::PIXEL
    }
}

/// Write one cell given wide coordinates; anything off the panel is dropped
fn put<P: Copy + Default>(panel: &mut Panel<P>, x: i64, y: i64, value: P) {
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        panel.set(x, y, value);
    }
}

/// Inclusive `lo..=hi` clipped to `0..extent`
fn clip(lo: i64, hi: i64, extent: usize) -> RangeInclusive<i64> {
    lo.max(0)..=hi.min(extent as i64 - 1)
}

fn stamp<P: Copy + Default>(panel: &mut Panel<P>, x: i64, y: i64, reach: i64, value: P) {
    for sy in clip(y - reach, y + reach, panel.height()) {
        for sx in clip(x - reach, x + reach, panel.width()) {
            put(panel, sx, sy, value);
        }
    }
}

/// Steps `k` in `0..=len` for which `start + step * k` lands within `reach` of the panel
fn visible_steps(
    start: i64,
    step: i64,
    len: i64,
    reach: i64,
    extent: usize,
) -> RangeInclusive<i64> {
    let (lo, hi) = (-reach, extent as i64 - 1 + reach);
    let (first, last) = if step > 0 {
        (lo - start, hi - start)
    } else {
        (start - hi, start - lo)
    };
    first.max(0)..=last.min(len)
}

/// Draws a line between two points using Bresenham's algorithm, both endpoints included
pub fn draw_line<P: Copy + Default>(
    panel: &mut Panel<P>,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    value: P,
) {
    stroke_line(panel, x0, y0, x1, y1, Brush::PIXEL, value);
}

/// [`draw_line`] with every cell stamped by `brush`.
///
/// Only the part of the walk that can touch the panel is visited, so the
/// endpoints may lie anywhere in the `i32` plane.
pub fn stroke_line<P: Copy + Default>(
    panel: &mut Panel<P>,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    brush: Brush,
    value: P,
) {
    // Always walk from the smaller endpoint so (a, b) and (b, a) light the same cells
    let ((xa, ya), (xb, yb)) = if (x1, y1) < (x0, y0) {
        ((x1 as i64, y1 as i64), (x0 as i64, y0 as i64))
    } else {
        ((x0 as i64, y0 as i64), (x1 as i64, y1 as i64))
    };

    let dx = (xb - xa).abs();
    let dy = (yb - ya).abs();
    let sx = if xa < xb { 1 } else { -1 };
    let sy = if ya < yb { 1 } else { -1 };
    let x_major = dx >= dy;
    let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };
    let reach = brush.reach();

    let steps = if x_major {
        visible_steps(xa, sx, major, reach, panel.width())
    } else {
        visible_steps(ya, sy, major, reach, panel.height())
    };

    for k in steps {
        // Minor-axis steps taken after `k` major steps of the
        // `2e > -dy` / `2e < dx` error walk
        let m = if major == 0 {
            0
        } else {
            ((2 * k as i128 * minor as i128 + major as i128 - 1) / (2 * major as i128)) as i64
        };
        let (x, y) = if x_major {
            (xa + sx * k, ya + sy * m)
        } else {
            (xa + sx * m, ya + sy * k)
        };
        stamp(panel, x, y, reach, value);
    }
}

/// Axis-aligned rectangle outline through two opposite corners
pub fn draw_rectangle<P: Copy + Default>(
    panel: &mut Panel<P>,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    brush: Brush,
    value: P,
) {
    let (left, right) = (x0.min(x1), x0.max(x1));
    let (top, bottom) = (y0.min(y1), y0.max(y1));
    stroke_line(panel, left, top, right, top, brush, value);
    stroke_line(panel, left, bottom, right, bottom, brush, value);
    stroke_line(panel, left, top, left, bottom, brush, value);
    stroke_line(panel, right, top, right, bottom, brush, value);
}

/// Ellipse outline inscribed in the box spanned by two corners.
///
/// Points are sampled from the parametric form with an angular step of
/// `1 / circumference`, kept within `0.01..=0.2` radians, and rounded to the
/// nearest cell.
pub fn draw_ellipse<P: Copy + Default>(
    panel: &mut Panel<P>,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    brush: Brush,
    value: P,
) {
    let (x0, y0, x1, y1) = (x0 as f64, y0 as f64, x1 as f64, y1 as f64);
    let (cx, cy) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
    let (rx, ry) = ((x1 - x0).abs() / 2.0, (y1 - y0).abs() / 2.0);

    let circumference = std::f64::consts::TAU * ((rx * rx + ry * ry) / 2.0).sqrt();
    let step = (1.0 / circumference).clamp(0.01, 0.2);
    let reach = brush.reach();

    let mut theta: f64 = 0.0;
    while theta < std::f64::consts::TAU {
        let x = (cx + rx * theta.cos()).round() as i64;
        let y = (cy + ry * theta.sin()).round() as i64;
        stamp(panel, x, y, reach, value);
        theta += step;
    }
}

/// Repaint the 4-connected region of cells equal to the one at `(x, y)`.
///
/// Returns the number of cells changed; a seed off the panel or already
/// holding `value` changes nothing.
pub fn flood_fill<P>(panel: &mut Panel<P>, x: i32, y: i32, value: P) -> usize
where
    P: Copy + Default + PartialEq,
{
    let target = match panel.get(x, y) {
        Some(target) if target != value => target,
        _ => return 0,
    };

    let mut queue = VecDeque::from([(x, y)]);
    let mut changed = 0;
    while let Some((x, y)) = queue.pop_front() {
        if panel.get(x, y) != Some(target) {
            continue;
        }
        panel.set(x, y, value);
        changed += 1;
        queue.extend([(x, y - 1), (x, y + 1), (x - 1, y), (x + 1, y)]);
    }
    changed
}

/// Disk or ring cells that fall on a `width x height` panel
fn disk_cells(
    cx: i32,
    cy: i32,
    radius: i32,
    fill: bool,
    width: usize,
    height: usize,
) -> impl Iterator<Item = (i64, i64)> {
    let (cx, cy, radius) = (cx as i64, cy as i64, radius as i64);
    let r2 = radius as i128 * radius as i128;
    let inner2 = (radius - 1) as i128 * (radius - 1) as i128;
    let columns = clip(cx - radius, cx + radius, width);
    clip(cy - radius, cy + radius, height)
        .flat_map(move |y| columns.clone().map(move |x| (x, y)))
        .filter(move |&(x, y)| {
            let (dx, dy) = ((x - cx) as i128, (y - cy) as i128);
            let d2 = dx * dx + dy * dy;
            d2 <= r2 && (fill || d2 >= inner2)
        })
}

/// Draws a disk, or only its one-pixel outer ring when `fill` is false
pub fn draw_circle<P: Copy + Default>(
    panel: &mut Panel<P>,
    cx: i32,
    cy: i32,
    radius: i32,
    fill: bool,
    value: P,
) {
    for (x, y) in disk_cells(cx, cy, radius, fill, panel.width(), panel.height()) {
        put(panel, x, y, value);
    }
}

/// Like [`draw_circle`], keeping only the cells on one side of the centre
pub fn draw_half_circle<P: Copy + Default>(
    panel: &mut Panel<P>,
    cx: i32,
    cy: i32,
    radius: i32,
    half: HalfPlane,
    fill: bool,
    value: P,
) {
    for (x, y) in disk_cells(cx, cy, radius, fill, panel.width(), panel.height()) {
        if half.contains(x - cx as i64, y - cy as i64) {
            put(panel, x, y, value);
        }
    }
}

fn orientation(p1: Point2<i32>, p2: Point2<i32>, p3: Point2<i32>) -> i128 {
    let (x1, y1) = (p1.x as i128, p1.y as i128);
    let (x2, y2) = (p2.x as i128, p2.y as i128);
    let (x3, y3) = (p3.x as i128, p3.y as i128);
    (x1 - x3) * (y2 - y3) - (x2 - x3) * (y1 - y3)
}

/// Same-side test against the three edges; boundary points count as inside.
///
/// Degenerate triangles never panic: with collinear vertices every point on
/// the shared line reports `true` and every other point `false`.
pub fn point_in_triangle(p: Point2<i32>, a: Point2<i32>, b: Point2<i32>, c: Point2<i32>) -> bool {
    let d1 = orientation(p, a, b);
    let d2 = orientation(p, b, c);
    let d3 = orientation(p, c, a);

    let has_neg = d1 < 0 || d2 < 0 || d3 < 0;
    let has_pos = d1 > 0 || d2 > 0 || d3 > 0;

    !(has_neg && has_pos)
}

/// Draws the three edges and, when `fill` is set, every cell inside
pub fn draw_triangle<P: Copy + Default>(
    panel: &mut Panel<P>,
    a: Point2<i32>,
    b: Point2<i32>,
    c: Point2<i32>,
    fill: bool,
    value: P,
) {
    draw_line(panel, a.x, a.y, b.x, b.y, value);
    draw_line(panel, b.x, b.y, c.x, c.y, value);
    draw_line(panel, c.x, c.y, a.x, a.y, value);

    if !fill {
        return;
    }

    let columns = clip(
        a.x.min(b.x).min(c.x) as i64,
        a.x.max(b.x).max(c.x) as i64,
        panel.width(),
    );
    let rows = clip(
        a.y.min(b.y).min(c.y) as i64,
        a.y.max(b.y).max(c.y) as i64,
        panel.height(),
    );

    for y in rows {
        for x in columns.clone() {
            let p = Point2::new(x as i32, y as i32);
            if point_in_triangle(p, a, b, c) {
                panel.set(p.x, p.y, value);
            }
        }
    }
}

/// Fills a convex quad as the two triangles (a, b, c) and (a, c, d)
pub fn fill_quad<P: Copy + Default>(panel: &mut Panel<P>, quad: &[Point2<i32>; 4], value: P) {
    let [a, b, c, d] = *quad;
    draw_triangle(panel, a, b, c, true, value);
    draw_triangle(panel, a, c, d, true, value);
}

/// Parameters of a stroked sine wave
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    pub thickness: i32,
    pub amplitude: f32,
    pub wavelength: f32,
    pub phase: f32,
}

/// Draws a sine wave over `x_start..=x_end`, `thickness` cells tall at every column.
///
/// The wave height is truncated toward zero, not rounded.
pub fn draw_wavy_line<P: Copy + Default>(
    panel: &mut Panel<P>,
    x_start: i32,
    x_end: i32,
    base_y: i32,
    wave: Wave,
    value: P,
) {
    let x_start = x_start as i64;
    for x in clip(x_start, x_end as i64, panel.width()) {
        let t = (x - x_start) as f32 + wave.phase;
        let offset = wave.amplitude * (2.0 * PI * t / wave.wavelength).sin();
        let y = (base_y as f32 + offset) as i64;
        for row in clip(y, y + wave.thickness as i64 - 1, panel.height()) {
            put(panel, x, row, value);
        }
    }
}
