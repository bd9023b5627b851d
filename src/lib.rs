pub mod catalog;
pub mod core;
pub mod gateway;
pub mod items;
pub mod utils;
