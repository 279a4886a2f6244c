//! Fractal generators: branching trees, the Mandelbrot escape-time field,
//! and the chaos-game Sierpinski gasket.

pub mod gasket;
pub mod mandelbrot;
pub mod tree;

pub use gasket::{draw_gasket, ChaosGame};
pub use mandelbrot::{
    corrected_iteration_budget, escape_time, render as render_mandelbrot, ComplexSample,
    MandelbrotField, Viewport, DEFAULT_BASE_ITERATION, DEFAULT_CENTER,
};
pub use tree::{grow, grow_random, random_tree_branches, tree_branches, Branching};
