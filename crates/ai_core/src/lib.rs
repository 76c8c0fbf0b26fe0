//! AI Core - Chat-completion client
//!
//! Provides the inference abstraction used to classify and answer email,
//! with an implementation for OpenAI-compatible chat-completions APIs.

pub mod config;
pub mod error;
pub mod openai;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use openai::OpenAiInferenceEngine;
pub use ports::{
    InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, ResponseFormat,
    TokenUsage,
};
