pub mod args;
pub mod snapshot;
