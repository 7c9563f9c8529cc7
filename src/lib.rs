pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod prompt;
pub mod storage;
pub mod terminal;
