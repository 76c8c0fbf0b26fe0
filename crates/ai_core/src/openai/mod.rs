//! OpenAI-compatible chat-completions engine
//!
//! Works against api.openai.com and any server exposing the same
//! `/chat/completions` contract.

mod client;

pub use client::OpenAiInferenceEngine;
