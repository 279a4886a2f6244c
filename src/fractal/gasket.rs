//! Sierpinski gasket by the chaos game.

use crate::canvas::PixelCanvas;
use crate::color::Rgb;
use crate::geometry::Point;
use crate::random::RandomSampler;

/// Chaos-game walk among three anchor vertices.
///
/// Starting from a randomly chosen anchor, each step moves halfway toward a
/// uniformly chosen anchor. Midpoints round to nearest, so every visited
/// point stays inside the anchors' triangle.
#[derive(Debug)]
pub struct ChaosGame<'a, R> {
    anchors: [Point; 3],
    current: Point,
    remaining: usize,
    rng: &'a mut R,
}

impl<'a, R: RandomSampler> ChaosGame<'a, R> {
    /// Begin a walk of `iterations` steps.
    pub fn new(anchors: [Point; 3], iterations: usize, rng: &'a mut R) -> Self {
        let current = anchors[rng.sample_index(anchors.len())];
        Self { anchors, current, remaining: iterations, rng }
    }
}

impl<R: RandomSampler> Iterator for ChaosGame<'_, R> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let target = self.anchors[self.rng.sample_index(self.anchors.len())];
        self.current = self.current.midpoint(target);
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: RandomSampler> ExactSizeIterator for ChaosGame<'_, R> {}

/// Plot the anchors and `iterations` chaos-game points.
pub fn draw_gasket(
    canvas: &mut PixelCanvas,
    anchors: [Point; 3],
    iterations: usize,
    rng: &mut impl RandomSampler,
    color: Rgb,
) {
    for anchor in anchors {
        canvas.set_pixel(anchor, color);
    }
    for point in ChaosGame::new(anchors, iterations, rng) {
        canvas.set_pixel(point, color);
    }
    log::trace!("gasket: {iterations} points plotted");
}
