mod api;
mod points;

pub use self::api::ApiResponse;
pub use self::points::PointsResponse;
