//! Concrete adapter implementations for ports.

pub mod file_config_adapter;
pub mod report_file_adapter;
pub mod statement_file_adapter;
