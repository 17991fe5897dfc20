//! Wicket - Minimal HTTP File Server
//!
//! Core library for request parsing, routing, and static file serving.

pub mod config;
pub mod http;
pub mod server;
