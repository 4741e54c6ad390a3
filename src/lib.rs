//! Todo Relay - CRUD service with change-event publication
//!
//! This crate implements a todo HTTP API backed by PostgreSQL that publishes
//! a change event to a Kafka topic for every mutation, plus a standalone
//! consumer that logs those events.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
