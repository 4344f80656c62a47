//! Carts

mod errors;
mod handlers;
pub(crate) mod items;
pub(crate) mod models;

pub(crate) use errors::into_api_error;
pub(crate) use handlers::*;
