//! Shopping cart domain, persistence and collaborator clients.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod errors;
pub mod ids;
pub mod users;

#[cfg(test)]
mod test;
