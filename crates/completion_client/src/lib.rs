pub mod api;
pub mod client_trait;
pub mod config;
pub mod error;

pub use api::client::OpenAIClient;
pub use api::models::{ChatCompletionRequest, ChatCompletionResponse, Message, Role};
pub use client_trait::CompletionClientTrait;
pub use config::Config;
pub use error::{ClientError, Result};
