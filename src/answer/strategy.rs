//! 답변 생성 전략 - OpenRouter API를 통한 LLM 답변 생성
//!
//! 발췌 + 질문으로 답변을 생성하는 전략 트레이트와 OpenRouter
//! chat-completion 구현체입니다. 원격 호출은 신뢰할 수 없는 외부 경계이므로
//! 교체 가능한 트레이트 뒤에 격리하고, 호출자는 실패 시 로컬 추출 답변으로
//! 폴백합니다. 재시도는 하지 않습니다 (질문당 1회 시도).
//!
//! ## 사용법
//! ```rust,ignore
//! let strategy = OpenRouterStrategy::new("api-key".to_string())?;
//! let answer = strategy.generate("What is X?", excerpt, Some("Course")).await?;
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ============================================================================
// AnswerStrategy Trait
// ============================================================================

/// 답변 생성 전략 트레이트
///
/// 질문과 발췌(선택적으로 코스 제목)로 답변을 생성합니다. 실패할 수 있으며
/// 멱등합니다 - 재시도하거나 건너뛰어도 안전합니다.
#[async_trait]
pub trait AnswerStrategy: Send + Sync {
    /// 답변 생성 (단일 시도, 내부 재시도 없음)
    async fn generate(
        &self,
        question: &str,
        excerpt: &str,
        title: Option<&str>,
    ) -> Result<String>;

    /// 전략 이름
    fn name(&self) -> &str;
}

// ============================================================================
// OpenRouter Strategy
// ============================================================================

/// OpenRouter chat-completion 엔드포인트
/// source: https://openrouter.ai/docs/api-reference/overview
const OPENROUTER_CHAT_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// 기본 모델
pub const DEFAULT_MODEL: &str = "meta-llama/llama-3.2-3b-instruct";

/// 답변 출력 길이 상한 (토큰)
const MAX_ANSWER_TOKENS: u32 = 300;
/// 샘플링 온도
const TEMPERATURE: f64 = 0.7;
/// HTTP 타임아웃
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// OpenRouter chat-completion 전략 구현체
#[derive(Debug)]
pub struct OpenRouterStrategy {
    api_key: String,
    model: String,
    referer: Option<String>,
    client: reqwest::Client,
}

impl OpenRouterStrategy {
    /// 기본 모델로 생성
    ///
    /// # Arguments
    /// * `api_key` - OpenRouter API 키
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_model(api_key, DEFAULT_MODEL.to_string())
    }

    /// 모델을 지정하여 생성
    pub fn with_model(api_key: String, model: String) -> Result<Self> {
        if api_key.trim().is_empty() {
            anyhow::bail!("OpenRouter API key must not be empty");
        }
        if model.trim().is_empty() {
            anyhow::bail!("Model name must not be empty");
        }

        let client = reqwest::Client::builder()
            .user_agent("tutor-rag/0.1")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            api_key,
            model,
            referer: None,
            client,
        })
    }

    /// HTTP-Referer 헤더 설정 (OpenRouter 앱 식별용)
    pub fn with_referer(mut self, referer: String) -> Self {
        self.referer = Some(referer);
        self
    }

    /// 사용 중인 모델 반환
    pub fn model(&self) -> &str {
        &self.model
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// chat-completion 요청 본문
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// chat-completion 응답
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// OpenRouter 에러 응답
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    #[serde(default)]
    code: i64,
}

// ============================================================================
// Strategy Implementation
// ============================================================================

#[async_trait]
impl AnswerStrategy for OpenRouterStrategy {
    async fn generate(
        &self,
        question: &str,
        excerpt: &str,
        title: Option<&str>,
    ) -> Result<String> {
        let course = title.unwrap_or("this course");

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: format!(
                        "You are an AI tutor helping students learn about \"{course}\". \
                         Answer questions based ONLY on the provided course content. \
                         Be concise, helpful, and accurate. If the question cannot be \
                         answered from the content, say so."
                    ),
                },
                ChatMessage {
                    role: "user",
                    content: format!(
                        "Course Content:\n{excerpt}\n\nQuestion: {question}\n\n\
                         Answer based on the course content above:"
                    ),
                },
            ],
            max_tokens: MAX_ANSWER_TOKENS,
            temperature: TEMPERATURE,
        };

        // 단일 시도 - 실패 처리는 호출자의 폴백에 맡긴다
        let mut builder = self
            .client
            .post(OPENROUTER_CHAT_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("X-Title", "tutor-rag")
            .json(&request);

        if let Some(ref referer) = self.referer {
            builder = builder.header("HTTP-Referer", referer.clone());
        }

        let response = builder
            .send()
            .await
            .context("Failed to send chat completion request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        if !status.is_success() {
            if let Ok(error) = serde_json::from_str::<ApiError>(&body) {
                anyhow::bail!(
                    "OpenRouter API error ({}): {} (code {})",
                    status,
                    error.error.message,
                    error.error.code
                );
            }
            anyhow::bail!("OpenRouter API error ({}): {}", status, body);
        }

        let chat: ChatResponse =
            serde_json::from_str(&body).context("Failed to parse chat completion response")?;

        // 빈 응답도 실패로 취급 - 로컬 폴백이 항상 답을 만들 수 있음
        let answer = chat
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .context("Chat completion returned no content")?;

        tracing::debug!("Received {} chars from {}", answer.chars().count(), self.model);

        Ok(answer)
    }

    fn name(&self) -> &str {
        "openrouter"
    }
}

// ============================================================================
// API Key Management
// ============================================================================

/// API 키 로드 (환경변수에서)
///
/// `OPENROUTER_API_KEY` 환경변수를 읽습니다. 파이프라인 내부에서는
/// 호출하지 않습니다 - 설정 구성 시점(엣지)에서만 사용합니다.
pub fn get_api_key() -> Result<String> {
    if let Ok(key) = std::env::var("OPENROUTER_API_KEY") {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    anyhow::bail!(
        "API key not found. Set OPENROUTER_API_KEY environment variable.\n\
         Get your API key at: https://openrouter.ai/keys"
    )
}

/// API 키 존재 여부 확인
pub fn has_api_key() -> bool {
    std::env::var("OPENROUTER_API_KEY")
        .map(|key| !key.is_empty())
        .unwrap_or(false)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_rejected() {
        assert!(OpenRouterStrategy::new(String::new()).is_err());
        assert!(OpenRouterStrategy::new("   ".to_string()).is_err());
    }

    #[test]
    fn test_empty_model_rejected() {
        let result = OpenRouterStrategy::with_model("key".to_string(), "".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_default_model_used() {
        let strategy = OpenRouterStrategy::new("fake-key".to_string()).unwrap();
        assert_eq!(strategy.model(), DEFAULT_MODEL);
        assert_eq!(strategy.name(), "openrouter");
    }

    #[test]
    fn test_parse_chat_response() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"An answer."}}]}"#;
        let chat: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            chat.choices[0].message.content.as_deref(),
            Some("An answer.")
        );
    }

    #[test]
    fn test_parse_error_body() {
        let body = r#"{"error":{"message":"Invalid key","code":401}}"#;
        let error: ApiError = serde_json::from_str(body).unwrap();
        assert_eq!(error.error.message, "Invalid key");
        assert_eq!(error.error.code, 401);
    }

    #[test]
    fn test_request_body_shape() {
        let request = ChatRequest {
            model: DEFAULT_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user",
                content: "hi".to_string(),
            }],
            max_tokens: MAX_ANSWER_TOKENS,
            temperature: TEMPERATURE,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["max_tokens"], 300);
        assert_eq!(json["messages"][0]["role"], "user");
    }
}
