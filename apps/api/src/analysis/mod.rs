pub mod handlers;
pub mod models;
pub mod prompts;
pub mod provider;
pub mod sample;
