//! Hugging Face pipeline-endpoint backend

mod client;

pub use client::HuggingFaceTaskEngine;
