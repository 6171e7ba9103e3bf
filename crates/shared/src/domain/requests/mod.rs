mod points;

pub use self::points::CreatePointsRequest;
