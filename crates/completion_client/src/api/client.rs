use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{header, Client, Proxy};

use crate::api::models::{ChatCompletionRequest, ChatCompletionResponse, Message};
use crate::client_trait::CompletionClientTrait;
use crate::config::Config;
use crate::error::{ClientError, Result};

/// reqwest-backed client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// One call per `complete`; there is no retry layer. The total request time is
/// bounded by `Config::timeout_secs`.
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client,
    config: Config,
}

impl OpenAIClient {
    pub fn new(config: Config) -> Result<Self> {
        let client = Self::build_http_client(&config)?;
        Ok(Self { client, config })
    }

    fn build_http_client(config: &Config) -> Result<Client> {
        let mut builder = Client::builder().timeout(config.timeout());
        if !config.http_proxy.is_empty() {
            builder = builder.proxy(Proxy::http(&config.http_proxy)?);
        }
        if !config.https_proxy.is_empty() {
            builder = builder.proxy(Proxy::https(&config.https_proxy)?);
        }
        Ok(builder.build()?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn build_request(&self, messages: Vec<Message>) -> ChatCompletionRequest {
        ChatCompletionRequest::new(self.config.model.clone(), messages, self.config.temperature)
    }

    pub async fn send_chat_completion_request(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ClientError::MissingApiKey)?;

        let url = self.config.chat_completions_url();
        debug!("Sending chat completion request to {} (model={})", url, request.model);

        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {api_key}"))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!("Completion service returned HTTP {}: {}", status, body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&body)?;
        if let Some(usage) = completion.usage {
            debug!(
                "Completion usage: prompt={} completion={} total={}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }
        Ok(completion)
    }
}

#[async_trait]
impl CompletionClientTrait for OpenAIClient {
    async fn complete(&self, messages: Vec<Message>) -> Result<String> {
        let request = self.build_request(messages);
        let completion = self.send_chat_completion_request(&request).await?;
        completion
            .first_message_text()
            .map(str::to_owned)
            .ok_or(ClientError::EmptyCompletion)
    }
}
