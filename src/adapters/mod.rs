//! Adapters - concrete implementations of the ports plus the HTTP surface.

pub mod events;
pub mod http;
pub mod kafka;
pub mod postgres;
