pub mod model;
pub mod repository;

pub use model::OccupancyRecord;
pub use repository::OccupancyLog;
