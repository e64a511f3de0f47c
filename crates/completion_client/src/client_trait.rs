use async_trait::async_trait;

use crate::api::models::Message;
use crate::error::Result;

/// The single network seam between the service and the upstream model.
///
/// Implementations send the given messages as one chat completion call and
/// return the text of the first assistant message. Any transport, status or
/// envelope problem is reported as an error; the text itself is returned
/// untouched, whatever it contains.
#[async_trait]
pub trait CompletionClientTrait: Send + Sync {
    async fn complete(&self, messages: Vec<Message>) -> Result<String>;
}
