#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod category;
pub mod config;
pub mod query;
pub mod render;
pub mod util;
