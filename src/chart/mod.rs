pub mod classifier;
pub mod radial;

pub use classifier::classify;
pub use radial::{layout, point_angle, wrap_label, SeriesEntry};
