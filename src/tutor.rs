//! AI 튜터 서비스 - 질문/답변 경계
//!
//! 요청 검증, 검색 파이프라인 실행, 답변 전략 선택을 담당합니다.
//! 원격 전략이 설정되어 있으면 먼저 시도하고, 어떤 실패든 로컬 추출
//! 답변으로 조용히 폴백합니다. 호출자에게 도달하는 에러는 입력 검증
//! 실패와 내부 처리 실패 두 가지뿐입니다.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::answer::{format_answer, AnswerStrategy, OpenRouterStrategy, DEFAULT_MODEL};
use crate::retrieval::find_relevant_content;

// ============================================================================
// Request / Response
// ============================================================================

/// 질문 요청
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    /// 질문 (필수, 비어 있으면 안 됨)
    pub question: String,
    /// 코스 콘텐츠 (필수, 비어 있으면 안 됨)
    pub content: String,
    /// 코스 제목 (선택, 원격 호출 프레이밍에만 사용)
    #[serde(default)]
    pub title: Option<String>,
}

/// 답변 응답
#[derive(Debug, Clone, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

// ============================================================================
// Error Taxonomy
// ============================================================================

/// 튜터 경계 에러
#[derive(Debug, Error)]
pub enum TutorError {
    /// 클라이언트 입력 오류 (필수 필드 누락 또는 빈 값)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// 예기치 못한 내부 처리 오류
    #[error("failed to generate answer")]
    Internal(#[from] anyhow::Error),
}

// ============================================================================
// Configuration
// ============================================================================

/// 튜터 설정
///
/// 전략 선택은 생성 시점에 주입되는 명시적 설정 값입니다.
/// 환경변수는 `from_env()` 한 곳에서만 읽습니다.
#[derive(Debug, Clone)]
pub struct TutorConfig {
    /// OpenRouter API 키 (None이면 로컬 파이프라인만 사용)
    pub api_key: Option<String>,
    /// 사용할 모델
    pub model: String,
    /// HTTP-Referer 헤더 값
    pub referer: Option<String>,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            referer: None,
        }
    }
}

impl TutorConfig {
    /// 환경변수에서 설정 로드
    ///
    /// - `OPENROUTER_API_KEY`: 원격 전략 활성화
    /// - `TUTOR_RAG_MODEL`: 모델 교체 (기본: meta-llama/llama-3.2-3b-instruct)
    /// - `TUTOR_RAG_REFERER`: HTTP-Referer 헤더
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        let model = std::env::var("TUTOR_RAG_MODEL")
            .ok()
            .filter(|model| !model.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let referer = std::env::var("TUTOR_RAG_REFERER")
            .ok()
            .filter(|referer| !referer.is_empty());

        Self {
            api_key,
            model,
            referer,
        }
    }

    /// 로컬 전용 설정 (원격 전략 비활성)
    pub fn local_only() -> Self {
        Self::default()
    }
}

// ============================================================================
// TutorService
// ============================================================================

/// AI 튜터 서비스
///
/// 요청 간 공유 상태가 없으므로 동시 질문은 완전히 독립적입니다.
pub struct TutorService {
    strategy: Option<Box<dyn AnswerStrategy>>,
}

impl TutorService {
    /// 설정으로 서비스 생성
    pub fn new(config: TutorConfig) -> Result<Self, TutorError> {
        let strategy: Option<Box<dyn AnswerStrategy>> = match config.api_key {
            Some(api_key) => {
                let mut remote = OpenRouterStrategy::with_model(api_key, config.model)?;
                if let Some(referer) = config.referer {
                    remote = remote.with_referer(referer);
                }
                tracing::info!("Remote answer strategy enabled (model: {})", remote.model());
                Some(Box::new(remote))
            }
            None => {
                tracing::debug!("No API key configured, using local pipeline only");
                None
            }
        };

        Ok(Self { strategy })
    }

    /// 전략을 직접 주입하여 생성
    ///
    /// `None`이면 항상 로컬 추출 답변을 사용합니다.
    pub fn with_strategy(strategy: Option<Box<dyn AnswerStrategy>>) -> Self {
        Self { strategy }
    }

    /// 질문에 답변
    ///
    /// 1. 입력 검증 (실패 시 파이프라인을 타지 않음)
    /// 2. 관련 발췌 검색 (로컬, 결정적)
    /// 3. 원격 전략 1회 시도 → 실패 시 로컬 포맷 답변으로 폴백
    pub async fn answer(&self, request: AskRequest) -> Result<AskResponse, TutorError> {
        if request.question.is_empty() {
            return Err(TutorError::InvalidInput("question is required".to_string()));
        }
        if request.content.is_empty() {
            return Err(TutorError::InvalidInput("content is required".to_string()));
        }

        let excerpt = find_relevant_content(&request.question, &request.content);

        if let Some(ref strategy) = self.strategy {
            match strategy
                .generate(&request.question, &excerpt, request.title.as_deref())
                .await
            {
                Ok(answer) => {
                    tracing::debug!("Answer generated by strategy: {}", strategy.name());
                    return Ok(AskResponse { answer });
                }
                Err(e) => {
                    // 원격 실패는 호출자에게 노출하지 않고 로컬로 폴백
                    tracing::warn!("Remote strategy failed, falling back to local answer: {e}");
                }
            }
        }

        let answer = format_answer(&request.question, &excerpt);
        Ok(AskResponse { answer })
    }
}

// ============================================================================
// Tests
// ============================================================================
