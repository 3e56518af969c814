//! Command modules for the clext CLI.

pub mod scan;

pub use scan::{run_scan, ScanArgs};
