mod make_deltoid;
mod make_euler_spiral;

pub use make_deltoid::MakeDeltoid;
pub use make_euler_spiral::MakeEulerSpiral;
