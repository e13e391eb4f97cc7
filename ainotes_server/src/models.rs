pub mod client;
pub mod config;
pub mod generate;
pub mod notes;
pub mod pdf;
pub mod prompts;
pub mod state;
