mod angle_span;
mod circle_fit;
mod curve_segment;
mod polyline;

pub use angle_span::AngleSpan;
pub use circle_fit::CircleFit;
pub use curve_segment::CurveSegment;
pub use polyline::Polyline;
