//! 문장 관련도 스코어링
//!
//! 콘텐츠를 문장 단위로 분리하고 키워드 매칭으로 각 문장의 점수를 계산한 뒤
//! 상위 문장을 뽑아 발췌를 만듭니다. 키워드가 없거나 매칭되는 문장이 없으면
//! 첫 두 문단을 폴백으로 반환합니다.

use regex::Regex;

use super::context::assemble_excerpt;
use super::keywords::extract_keywords;

// ============================================================================
// Constants
// ============================================================================

/// 문장으로 인정하는 최소 길이 (trim 후 글자 수, 초과해야 유지)
const MIN_SENTENCE_CHARS: usize = 10;
/// 발췌에 사용할 상위 문장 수
const TOP_SENTENCES: usize = 5;
/// 폴백으로 반환할 문단 수
const FALLBACK_PARAGRAPHS: usize = 2;

// ============================================================================
// Types
// ============================================================================

/// 점수가 매겨진 문장
///
/// `index`는 원본 콘텐츠 내 문장 위치이며, 선택 이후에도 유일한 정렬 키입니다.
#[derive(Debug, Clone)]
pub struct ScoredSentence {
    pub index: usize,
    pub score: f64,
}

// ============================================================================
// Sentence Segmentation
// ============================================================================

/// 콘텐츠를 문장으로 분리
///
/// `.`, `!`, `?` 뒤에 공백이 오는 지점에서 자릅니다.
/// 약어나 소수점은 구분하지 못하는 휴리스틱 분리기입니다 (허용된 한계).
pub fn split_sentences(content: &str) -> Vec<String> {
    let splitter = Regex::new(r"[.!?]\s+").unwrap();
    splitter
        .split(content)
        .filter(|s| s.trim().chars().count() > MIN_SENTENCE_CHARS)
        .map(|s| s.to_string())
        .collect()
}

// ============================================================================
// Scoring
// ============================================================================

/// 문장 점수 계산
///
/// 키워드가 부분 문자열로 포함되면 +1.0,
/// 완전한 단어로 등장하면 보너스 +0.5 (기본 점수에 누적).
/// 키워드가 하나도 없는 문장은 0점입니다.
pub fn score_sentence(sentence: &str, keywords: &[String]) -> f64 {
    let sentence_lower = sentence.to_lowercase();
    let mut score = 0.0;

    for keyword in keywords {
        if sentence_lower.contains(keyword.as_str()) {
            score += 1.0;

            // 완전 단어 매칭 보너스 (공백으로 둘러싸이거나 문장 시작/끝)
            let padded = format!(" {} ", keyword);
            let leading = format!("{} ", keyword);
            let trailing = format!(" {}", keyword);
            if sentence_lower.contains(&padded)
                || sentence_lower.starts_with(&leading)
                || sentence_lower.ends_with(&trailing)
            {
                score += 0.5;
            }
        }
    }

    score
}

// ============================================================================
// Retrieval Pipeline
// ============================================================================

/// 질문과 가장 관련 있는 콘텐츠 발췌 찾기
///
/// 1. 질문에서 키워드 추출
/// 2. 문장별 스코어링 후 양수 점수만 유지
/// 3. 점수 내림차순 안정 정렬로 상위 5개 선택
/// 4. 선택 문장의 앞뒤 문맥까지 포함해 발췌 조립
pub fn find_relevant_content(question: &str, content: &str) -> String {
    let keywords = extract_keywords(question);

    if keywords.is_empty() {
        tracing::debug!("No keywords extracted, falling back to leading paragraphs");
        return first_paragraphs(content, FALLBACK_PARAGRAPHS);
    }

    let sentences = split_sentences(content);

    let mut scored: Vec<ScoredSentence> = sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| ScoredSentence {
            index,
            score: score_sentence(sentence, &keywords),
        })
        .filter(|s| s.score > 0.0)
        .collect();

    // 내림차순 정렬 - sort_by는 안정 정렬이므로 동점은 원래 위치 순서 유지
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(TOP_SENTENCES);

    if scored.is_empty() {
        tracing::debug!("No sentence matched any keyword, falling back to leading paragraphs");
        return first_paragraphs(content, FALLBACK_PARAGRAPHS);
    }

    tracing::debug!(
        "Selected {} sentences out of {} (keywords: {})",
        scored.len(),
        sentences.len(),
        keywords.len()
    );

    assemble_excerpt(&scored, &sentences)
}

// ============================================================================
// Helper Functions
// ============================================================================

/// 첫 N개 문단 반환 (빈 줄 기준 구분)
fn first_paragraphs(content: &str, count: usize) -> String {
    content
        .split("\n\n")
        .take(count)
        .collect::<Vec<_>>()
        .join("\n\n")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences_basic() {
        let content = "Growth hacking drives scale. It combines marketing and product. Done!";
        let sentences = split_sentences(content);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "Growth hacking drives scale");
        assert_eq!(sentences[1], "It combines marketing and product");
    }

    #[test]
    fn test_split_sentences_drops_short_segments() {
        // trim 후 10글자 이하 조각은 버려짐
        let content = "Hi. This is a longer sentence here. No. Ok then!";
        let sentences = split_sentences(content);
        assert_eq!(sentences, vec!["This is a longer sentence here".to_string()]);
    }

    #[test]
    fn test_split_sentences_all_short_yields_empty() {
        let content = "Hi. No. Ok. Yes!";
        assert!(split_sentences(content).is_empty());
    }

    #[test]
    fn test_score_sentence_substring_and_whole_word() {
        let keywords = vec!["loop".to_string()];

        // 완전 단어: 기본 1.0 + 보너스 0.5
        assert_eq!(score_sentence("The loop runs forever", &keywords), 1.5);

        // 부분 문자열만 ("loops"): 기본 1.0
        assert_eq!(score_sentence("Viral loops help growth", &keywords), 1.0);

        // 매칭 없음
        assert_eq!(score_sentence("Nothing relevant here", &keywords), 0.0);
    }

    #[test]
    fn test_score_sentence_anchored_word_bonus() {
        let keywords = vec!["loop".to_string()];

        // 문장 시작 위치의 완전 단어
        assert_eq!(score_sentence("Loop design matters", &keywords), 1.5);

        // 문장 끝 위치의 완전 단어
        assert_eq!(score_sentence("Design the loop", &keywords), 1.5);
    }

    #[test]
    fn test_score_sentence_sums_over_keywords() {
        let keywords = vec!["viral".to_string(), "loop".to_string()];
        // "viral" 완전 단어 1.5 + "loop" 완전 단어 1.5
        assert_eq!(score_sentence("A viral loop spreads", &keywords), 3.0);
    }

    #[test]
    fn test_score_monotonic_under_added_occurrence() {
        let keywords = vec!["growth".to_string()];
        let base = score_sentence("Metrics matter for startups", &keywords);
        let with_one = score_sentence("Growth metrics matter for startups", &keywords);
        let with_two = score_sentence("Growth metrics matter for growth teams", &keywords);

        assert!(with_one >= base);
        assert!(with_two >= with_one);
    }

    #[test]
    fn test_find_relevant_content_empty_keywords_falls_back() {
        let content = "First paragraph here.\n\nSecond paragraph here.\n\nThird paragraph here.";
        let result = find_relevant_content("what is the", content);
        assert_eq!(result, "First paragraph here.\n\nSecond paragraph here.");
    }

    #[test]
    fn test_find_relevant_content_no_match_falls_back() {
        let content = "First paragraph about systems.\n\nSecond paragraph about feedback.\n\nThird one.";
        let result = find_relevant_content("What is quantum entanglement?", content);
        assert_eq!(
            result,
            "First paragraph about systems.\n\nSecond paragraph about feedback."
        );
    }

    #[test]
    fn test_find_relevant_content_short_sentences_fall_back() {
        // 10글자를 넘는 문장이 없으면 분리 결과가 비어 폴백 경로를 탐
        let content = "Hi. No. Ok!";
        let result = find_relevant_content("What is a viral loop?", content);
        assert_eq!(result, "Hi. No. Ok!");
    }

    #[test]
    fn test_find_relevant_content_viral_loop_scenario() {
        let content = "Startups need distribution early. \
                       Viral Loops: Design your product so that users naturally invite others. \
                       Paid advertising gets expensive fast. \
                       Community building compounds over years.";

        let excerpt = find_relevant_content("What is a viral loop?", content);
        assert!(excerpt
            .contains("Viral Loops: Design your product so that users naturally invite others"));
    }

    #[test]
    fn test_find_relevant_content_single_paragraph_fallback() {
        // 문단 구분이 없으면 콘텐츠 전체가 폴백으로 반환됨
        let content = "short text";
        let result = find_relevant_content("", content);
        assert_eq!(result, "short text");
    }
}
