pub mod config;
pub mod logging;

pub mod batch;
pub mod pages;
pub mod pipeline;
pub mod report;
