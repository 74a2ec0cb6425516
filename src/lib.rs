//! River Dash - Live river temperature and discharge dashboard
//!
//! This library exposes the core modules for testing and reuse.

pub mod common;
pub mod config;
pub mod display;
pub mod error;
pub mod hydro;
pub mod routes;
pub mod sync;
