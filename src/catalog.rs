pub mod command;
pub mod domain;
pub mod driver;
pub mod factory;
