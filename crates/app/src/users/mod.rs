//! Users service client

mod client;
pub mod errors;
pub mod models;

pub use client::*;
pub use errors::UsersClientError;
