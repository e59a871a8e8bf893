mod circumscribed_circle;
mod orientation;

pub use circumscribed_circle::CircumscribedCircle;
pub use orientation::Orientation;
