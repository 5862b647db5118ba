pub mod user;
pub mod repository;
pub mod stats;

pub use user::*;
pub use repository::*;
pub use stats::*;
