//! Backend REST boundary: wire types and client

pub mod client;
pub mod types;

pub use client::BackendClient;
