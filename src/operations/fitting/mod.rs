mod evolute_arc;
mod spiral_splice;

pub use evolute_arc::{EvoluteArc, EvoluteFit};
pub use spiral_splice::SpiralSplice;
