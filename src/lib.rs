pub mod catalog;
pub mod config;
pub mod error;
pub mod inventory;
pub mod optimizer;
pub mod ranges;
pub mod scorer;
pub mod stats;
// cmd and reports are binary modules (see main.rs).
