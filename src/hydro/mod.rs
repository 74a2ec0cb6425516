pub mod client;
pub mod models;
pub mod stations;

pub use client::{HydroClient, PlotSource};
