mod command;
mod query;

pub use self::command::PointsCommandRepository;
pub use self::query::PointsQueryRepository;
