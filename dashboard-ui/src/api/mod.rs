//! Metrics provider access

pub mod client;

pub use client::{provider_url, HttpSource};
