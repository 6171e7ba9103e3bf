pub mod points;

pub use self::points::{AccruedPoints, PointsModel};
