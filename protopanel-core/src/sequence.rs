/// Live loops that drive a display until interrupted
use crate::animation::CubeAnimation;
use crate::config::FaceConfig;
use crate::face::{FaceScene, PanelPair};
use crate::sink::{present_pair, present_panel, DisplayGuard, Interrupt, PixelMatrix};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expression {
    Neutral,
    Blink,
}

/// Neutral then blink, forever, each with its hold time
pub fn blink_cycle<'a>(
    scene: &'a FaceScene,
    config: &FaceConfig,
) -> impl Iterator<Item = (Expression, &'a PanelPair, Duration)> {
    [
        (Expression::Neutral, &scene.neutral, config.dwell),
        (Expression::Blink, &scene.blink, config.blink),
    ]
    .into_iter()
    .cycle()
}

/// Show the face until `interrupt` fires, returning the number of frames shown.
///
/// The display is blanked on return, including when a sync fails.
pub fn run_blink<M, I>(
    scene: &FaceScene,
    config: &FaceConfig,
    matrix: &mut M,
    interrupt: &mut I,
) -> Result<u64, M::Error>
where
    M: PixelMatrix,
    I: Interrupt,
{
    let mut display = DisplayGuard::new(matrix);
    let mut shown = 0;

    for (expression, pair, hold) in blink_cycle(scene, config) {
        present_pair(&mut *display, pair, config.color)?;
        shown += 1;
        log::debug!("showing {:?} for {:?}", expression, hold);
        if interrupt.wait(hold) {
            break;
        }
    }

    log::info!("face loop stopped after {} frames", shown);
    Ok(shown)
}

/// Spin the cube on the display until `interrupt` fires
pub fn run_cube_live<M, I>(
    animation: &CubeAnimation,
    matrix: &mut M,
    interrupt: &mut I,
) -> Result<u64, M::Error>
where
    M: PixelMatrix,
    I: Interrupt,
{
    let mut display = DisplayGuard::new(matrix);
    let interval = animation.config().frame_interval();
    let mut shown: u64 = 0;

    loop {
        let frame = animation.frame(shown);
        present_panel(&mut *display, &animation.render(&frame))?;
        shown += 1;
        if interrupt.wait(interval) {
            break;
        }
    }

    log::info!("cube loop stopped after {} frames", shown);
    Ok(shown)
}
