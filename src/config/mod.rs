//! Configuration management
//!
//! All settings are read once at startup into a [`StaticConfig`] and then
//! handed to the components that need them.

mod structs;

pub use structs::*;
