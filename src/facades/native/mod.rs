pub mod client;

pub use client::JsonPostClient;
