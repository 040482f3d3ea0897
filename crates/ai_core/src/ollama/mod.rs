//! Ollama-compatible task engine
//!
//! Connects to any Ollama-compatible server
//! and drives each pipeline task through the chat API with a task prompt.

mod client;
mod prompts;

pub use client::OllamaTaskEngine;
