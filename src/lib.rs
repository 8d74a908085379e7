#![warn(rust_2018_idioms)]

pub mod app;
pub mod convert;
pub mod hand;
pub mod model;
pub mod util;
