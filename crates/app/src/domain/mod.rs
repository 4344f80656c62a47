//! Shopping Cart Domain Concerns

pub mod carts;
pub mod items;
pub mod products;
