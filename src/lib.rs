//! Search tracker - records mobile-number searches and serves test results
//!
//! A small actix-web service over two tables: `mobile_searches` (one
//! counter row per searched number) and `test_results` (populated
//! externally, read-only here).
//!
//! # Features
//! - **server**: HTTP server mode (default)
//! - **cli**: Command-line interface
//!
//! # Architecture
//! - `storage`: SeaORM entities, the [`storage::SearchStore`] trait and its backend
//! - `services`: search tracking pipeline and admin report
//! - `api`: HTTP handlers and middleware
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging

pub mod api;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
