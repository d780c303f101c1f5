//! AI Chat Endpoint

use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use super::{send, Backend, HttpMethod};

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// The backend answers either a bare string or `{ response }`
#[derive(Deserialize)]
#[serde(untagged)]
enum ChatReply {
    Text(String),
    Object { response: String },
}

pub async fn ask_ai<B: Backend + ?Sized>(backend: &B, message: &str) -> AppResult<String> {
    let reply: ChatReply = send(backend, HttpMethod::Post, "/ai-response", &ChatRequest { message }).await?;
    Ok(match reply {
        ChatReply::Text(text) => text,
        ChatReply::Object { response } => response,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeBackend;
    use serde_json::json;

    #[tokio::test]
    async fn test_ask_ai_accepts_both_reply_shapes() {
        let backend = FakeBackend::new()
            .respond(Ok(json!("Trẻ nên ngủ 9-11 tiếng mỗi ngày.")))
            .respond(Ok(json!({"response": "Hãy uống đủ nước."})));

        assert_eq!(ask_ai(&backend, "ngủ bao lâu?").await.unwrap(), "Trẻ nên ngủ 9-11 tiếng mỗi ngày.");
        assert_eq!(ask_ai(&backend, "nước?").await.unwrap(), "Hãy uống đủ nước.");

        let calls = backend.calls.borrow();
        assert_eq!(calls[0].method, HttpMethod::Post);
        assert_eq!(calls[0].path, "/ai-response");
        assert_eq!(calls[0].body, Some(json!({"message": "ngủ bao lâu?"})));
    }
}
