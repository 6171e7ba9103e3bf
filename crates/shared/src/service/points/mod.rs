mod command;
mod query;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::command::PointsCommandService;
pub use self::query::PointsQueryService;

pub(crate) fn user_cache_key(user_id: &str) -> String {
    format!("points:user:{user_id}")
}
