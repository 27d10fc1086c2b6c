pub mod api;
pub mod args;
pub mod error;
pub mod model;
pub mod processor;
pub mod utils;
