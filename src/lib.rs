//! Offers - bank investment offer recorder
//!
//! Collects investment offers from the console, persists them in a local
//! SQLite file, computes compound-interest outcomes and reports which bank
//! yields the highest profit.

pub mod collector;
pub mod compound;
pub mod db;
pub mod error;
pub mod reports;
pub mod ui;
pub mod utils;
