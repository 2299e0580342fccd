//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (bcrypt, configurable cost)
//! - Signed, time-limited session tokens (HS256 JWT)
//! - Cookie management

pub mod cookie;
pub mod password;
pub mod token;
