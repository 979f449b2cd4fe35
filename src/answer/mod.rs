//! Answer 모듈 - 답변 포맷팅 및 생성 전략
//!
//! - Format: 질문 유형별 도입부 + 발췌 정리 (로컬, 결정적)
//! - Strategy: 원격 LLM 답변 생성 전략 (OpenRouter, 실패 가능)

mod format;
mod strategy;

// Re-exports
pub use format::{clean_excerpt, format_answer};
pub use strategy::{
    get_api_key, has_api_key, AnswerStrategy, OpenRouterStrategy, DEFAULT_MODEL,
};
