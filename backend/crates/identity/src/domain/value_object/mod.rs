//! Value Object Module

pub mod role;
pub mod user_id;
pub mod user_password;
pub mod username;
