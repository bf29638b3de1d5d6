pub mod client;
pub mod order;

pub use client::Client;
pub use order::Order;
