pub mod config;
pub mod examples;
pub mod pipeline;
pub mod report;
