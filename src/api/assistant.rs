use async_trait::async_trait;
use serde::Serialize;
use tracing::instrument;

use crate::api::client::ApiClient;
use crate::core::error::ApiResult;
use crate::core::models::ChatReply;
use crate::core::services::AssistantService;

#[derive(Serialize)]
struct ChatRequest<'a> {
    query: &'a str,
}

/// The natural-language finance agent.
pub struct AssistantApi {
    client: ApiClient,
}

impl AssistantApi {
    pub fn new(client: ApiClient) -> Self {
        AssistantApi { client }
    }
}

#[async_trait]
impl AssistantService for AssistantApi {
    #[instrument(name = "AskAgent", skip(self))]
    async fn ask(&self, query: &str) -> ApiResult<ChatReply> {
        self.client.post("/agent", &ChatRequest { query }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_ask_posts_query() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/agent"))
            .and(body_json(json!({"query": "How can I save money?"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Create a budget and track all expenses.",
                "timestamp": "2024-05-01T10:00:00"
            })))
            .mount(&mock_server)
            .await;

        let api = AssistantApi::new(ApiClient::new(&mock_server.uri()).unwrap());
        let reply = api.ask("How can I save money?").await.unwrap();
        assert_eq!(reply.message, "Create a budget and track all expenses.");
        assert_eq!(reply.timestamp, "2024-05-01T10:00:00");
    }

    #[tokio::test]
    async fn test_ask_accepts_response_field() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/agent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "response": "Invest regularly."
            })))
            .mount(&mock_server)
            .await;

        let api = AssistantApi::new(ApiClient::new(&mock_server.uri()).unwrap());
        let reply = api.ask("invest?").await.unwrap();
        assert_eq!(reply.message, "Invest regularly.");
    }
}
