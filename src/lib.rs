pub mod cli;
pub mod config;
pub mod interactive;
pub mod job;
pub mod lang;
pub mod orchestrator;
pub mod render;
pub mod report;
pub mod service;
pub mod util;
