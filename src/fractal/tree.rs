//! Recursive binary branching trees.
//!
//! A branch `start -> end` is drawn, then a pivot is taken back along it at
//! fraction `1 - decrease_rate` from `start`. Rotating the pivot about `end`
//! by `180 ± angle` degrees yields the two child tips, and each child branch
//! `end -> tip` recurses with one less level of depth.

use crate::canvas::PixelCanvas;
use crate::color::Rgb;
use crate::geometry::Point;
use crate::random::RandomSampler;
use crate::render::line::{draw_line, LineAlgorithm, LineStyle};

/// Range of the per-call decrease rate used by randomized trees.
pub const RANDOM_DECREASE_RATE: (f64, f64) = (0.45, 0.85);
/// Inclusive range, in degrees, of randomized branch angles.
pub const RANDOM_ANGLE_DEGREES: (i32, i32) = (-10, 60);

/// Branch parameters for one recursion step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branching {
    /// Fraction of the parent length kept by each child.
    pub decrease_rate: f64,
    /// Angle of the first child, relative to the reversed parent.
    pub first_angle: f64,
    /// Angle of the second child, relative to the reversed parent.
    pub second_angle: f64,
}

impl Branching {
    /// Symmetric branching by `angle_degrees` either side.
    #[must_use]
    pub const fn symmetric(decrease_rate: f64, angle_degrees: f64) -> Self {
        Self { decrease_rate, first_angle: angle_degrees, second_angle: angle_degrees }
    }

    /// Fresh random parameters: one rate and an independent angle per child.
    pub fn sample(rng: &mut impl RandomSampler) -> Self {
        let (rate_min, rate_max) = RANDOM_DECREASE_RATE;
        let (angle_min, angle_max) = RANDOM_ANGLE_DEGREES;
        let decrease_rate = rng.sample_real(rate_min, rate_max);
        let first_angle = f64::from(rng.sample_int(angle_min, angle_max));
        let second_angle = f64::from(rng.sample_int(angle_min, angle_max));
        Self { decrease_rate, first_angle, second_angle }
    }

    /// Tips of the two child branches growing from `end`.
    #[must_use]
    pub fn children(&self, start: Point, end: Point) -> [Point; 2] {
        let pivot = start.lerp_truncated(end, 1.0 - self.decrease_rate);
        [
            pivot.rotate_about(end, (180.0 + self.first_angle).to_radians()),
            pivot.rotate_about(end, (180.0 - self.second_angle).to_radians()),
        ]
    }
}

/// Walk a tree depth-first, handing every branch to `visit`.
///
/// `next` supplies the branching for each internal call, so deterministic
/// and randomized trees share the same recursion.
fn walk<F, V>(start: Point, end: Point, depth: u32, next: &mut F, visit: &mut V)
where
    F: FnMut() -> Branching,
    V: FnMut(Point, Point),
{
    if depth == 0 {
        return;
    }
    visit(start, end);

    let [first, second] = next().children(start, end);
    walk(end, first, depth - 1, next, visit);
    walk(end, second, depth - 1, next, visit);
}

/// Every branch of a deterministic tree, parents before children.
///
/// A tree of depth `d` has `2^d - 1` branches.
#[must_use]
pub fn tree_branches(
    start: Point,
    end: Point,
    decrease_rate: f64,
    angle_degrees: f64,
    depth: u32,
) -> Vec<(Point, Point)> {
    let branching = Branching::symmetric(decrease_rate, angle_degrees);
    let mut branches = Vec::new();
    walk(start, end, depth, &mut || branching, &mut |a, b| branches.push((a, b)));
    branches
}

/// Every branch of a randomized tree.
pub fn random_tree_branches(
    start: Point,
    end: Point,
    depth: u32,
    rng: &mut impl RandomSampler,
) -> Vec<(Point, Point)> {
    let mut branches = Vec::new();
    walk(start, end, depth, &mut || Branching::sample(&mut *rng), &mut |a, b| branches.push((a, b)));
    branches
}

/// Draw a deterministic tree with DDA segments.
pub fn grow(
    canvas: &mut PixelCanvas,
    start: Point,
    end: Point,
    decrease_rate: f64,
    angle_degrees: f64,
    depth: u32,
    color: Rgb,
) {
    let branching = Branching::symmetric(decrease_rate, angle_degrees);
    walk(start, end, depth, &mut || branching, &mut |a, b| {
        draw_line(canvas, a, b, LineAlgorithm::Dda, LineStyle::Solid, color);
    });
}

/// Draw a randomized tree, resampling the branching at every call.
pub fn grow_random(
    canvas: &mut PixelCanvas,
    start: Point,
    end: Point,
    depth: u32,
    rng: &mut impl RandomSampler,
    color: Rgb,
) {
    walk(start, end, depth, &mut || Branching::sample(&mut *rng), &mut |a, b| {
        draw_line(canvas, a, b, LineAlgorithm::Dda, LineStyle::Solid, color);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::random::seeded;

    const ROOT: Point = Point::new(250, 400);
    const TIP: Point = Point::new(250, 250);

    #[test]
    fn test_depth_zero_draws_nothing() {
        assert!(tree_branches(ROOT, TIP, 0.6, 45.0, 0).is_empty());

        let mut canvas = PixelCanvas::filled(Size::new(500, 500), Rgb::WHITE).unwrap();
        grow(&mut canvas, ROOT, TIP, 0.6, 45.0, 0, Rgb::BLACK);
        assert_eq!(canvas.painted(Rgb::WHITE).count(), 0);
    }

    #[test]
    fn test_branch_count() {
        for depth in 1..8 {
            let branches = tree_branches(ROOT, TIP, 0.6, 45.0, depth);
            assert_eq!(branches.len(), (1 << depth) - 1);
        }
    }

    #[test]
    fn test_first_children() {
        let branches = tree_branches(ROOT, TIP, 0.6, 45.0, 2);
        assert_eq!(branches[0], (ROOT, TIP));
        // Pivot (250, 340) is 90 below the tip; children lean 45 degrees out
        assert_eq!(branches[1], (TIP, Point::new(314, 186)));
        assert_eq!(branches[2], (TIP, Point::new(186, 186)));
    }

    #[test]
    fn test_branches_shrink_geometrically() {
        // Trunk 150, each level keeps 0.6: total reach stays under 150 / 0.4
        let branches = tree_branches(ROOT, TIP, 0.6, 30.0, 10);
        for (_, tip) in branches {
            assert!(tip.distance(ROOT) < 380.0, "{tip:?} out of reach");
        }
    }

    #[test]
    fn test_random_tree_reproducible_with_seed() {
        let a = random_tree_branches(ROOT, TIP, 8, &mut seeded(3));
        let b = random_tree_branches(ROOT, TIP, 8, &mut seeded(3));
        assert_eq!(a, b);
        assert_eq!(a.len(), 255);
    }

    #[test]
    fn test_random_tree_subtrees_diverge() {
        let branches = random_tree_branches(ROOT, TIP, 10, &mut seeded(11));
        let distinct: std::collections::HashSet<_> = branches.iter().map(|&(_, b)| b).collect();
        assert!(distinct.len() > branches.len() / 2);
    }

    #[test]
    fn test_sampled_branching_in_range() {
        let mut rng = seeded(5);
        for _ in 0..200 {
            let b = Branching::sample(&mut rng);
            assert!((0.45..0.85).contains(&b.decrease_rate));
            assert!((-10.0..=60.0).contains(&b.first_angle));
            assert!((-10.0..=60.0).contains(&b.second_angle));
            assert!(b.first_angle.fract().abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_grow_draws_trunk() {
        let mut canvas = PixelCanvas::filled(Size::new(500, 500), Rgb::WHITE).unwrap();
        grow(&mut canvas, ROOT, TIP, 0.6, 45.0, 3, Rgb::BLACK);
        assert_eq!(canvas.get_pixel(Point::new(250, 300)), Some(Rgb::BLACK));
        assert_eq!(canvas.get_pixel(Point::new(314, 186)), Some(Rgb::BLACK));
    }

    #[test]
    fn test_grow_random_draws_trunk() {
        let mut canvas = PixelCanvas::filled(Size::new(500, 500), Rgb::WHITE).unwrap();
        grow_random(&mut canvas, ROOT, TIP, 6, &mut seeded(1), Rgb::BLACK);
        assert_eq!(canvas.get_pixel(ROOT), Some(Rgb::BLACK));
        assert_eq!(canvas.get_pixel(TIP), Some(Rgb::BLACK));
    }
}
