//! Application contexts

pub mod connection;
pub mod notifications;
pub mod wallet;
