mod splice;

pub(crate) use splice::check_range;
pub use splice::Splice;
