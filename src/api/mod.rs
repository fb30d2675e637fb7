//! HTTP boundary: handlers and middleware

pub mod middleware;
pub mod services;
