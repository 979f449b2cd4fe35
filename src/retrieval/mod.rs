//! Retrieval 모듈 - RAG-lite 키워드 검색 엔진
//!
//! - Keywords: 질문에서 키워드 추출 (불용어/짧은 단어 제거)
//! - Scorer: 문장 분리 + 키워드 매칭 스코어링 + 상위 문장 선택
//! - Context: 선택 문장 주변 이웃 확장 및 발췌 조립
//!
//! 임베딩 없이 어휘 매칭만으로 관련 발췌를 찾는 질문당 1회 파이프라인입니다.

mod context;
mod keywords;
mod scorer;

// Re-exports
pub use context::assemble_excerpt;
pub use keywords::extract_keywords;
pub use scorer::{find_relevant_content, score_sentence, split_sentences, ScoredSentence};
