//! Command-line surface of the `recview` binary

pub mod args;
pub mod output;
