pub mod overlay;
pub mod user;
pub mod user_id;
