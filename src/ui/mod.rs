//! Console input helpers.

pub mod readline;

pub use readline::Readline;
