pub mod aggregate;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod extract;
pub mod git;
pub mod histogram;
pub mod model;
pub mod output;
pub mod predict;
pub mod report;
pub mod tui;
pub mod util;
