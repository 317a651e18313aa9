pub use handlers::user_info;

mod handlers;
pub mod models;
pub mod repository;
mod types;

pub use types::{UserInfo, UserInfoResponse};
