//! Status service: health check and append-only status log over MongoDB.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

/// Human-facing name used in the greeting and lifecycle log lines.
pub const SERVICE_TITLE: &str = "Bundle Generator API";
