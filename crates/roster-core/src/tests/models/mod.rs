mod user;
mod user_id;
