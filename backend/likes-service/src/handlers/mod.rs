pub mod health;
pub mod likes;

pub use health::health_check;
pub use likes::{get_likes, increment_likes};
