#[macro_use]
extern crate log;

pub mod api;
pub mod cli;
pub mod convert;
pub mod entities;
pub mod error;
pub mod export_data;
pub mod extract;
pub mod fetch;
mod logs;
pub mod tour;
pub mod track;
mod utils;

pub use error::{Error, Marker, Result};
