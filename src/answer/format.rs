//! 답변 포맷팅 - 질문 유형별 도입부 + 발췌 정리
//!
//! 발췌를 대화체 답변으로 감쌉니다. 질문의 첫 단어로 유형을 분류해
//! 고정된 도입부를 고르고, 발췌의 공백과 마침표를 정규화합니다.

use regex::Regex;

/// 질문 유형에 맞는 도입부 선택
///
/// what / how / why / 기본 네 가지 버킷 (기본 버킷 마지막).
fn intro_for(question: &str) -> &'static str {
    let question_lower = question.to_lowercase();
    let question_lower = question_lower.trim();

    if question_lower.starts_with("what") {
        "Based on the course content: "
    } else if question_lower.starts_with("how") {
        "Here's how it works according to the course: "
    } else if question_lower.starts_with("why") {
        "The course explains that: "
    } else {
        "According to the course content: "
    }
}

/// 발췌 정리
///
/// 연속 마침표를 하나로, 연속 공백을 하나로 축약하고 양끝을 다듬습니다.
/// 멱등 연산이라 이미 정리된 텍스트에 다시 적용해도 결과가 같습니다.
pub fn clean_excerpt(excerpt: &str) -> String {
    let periods = Regex::new(r"\.{2,}").unwrap();
    let whitespace = Regex::new(r"\s+").unwrap();

    let collapsed = periods.replace_all(excerpt, ".");
    let collapsed = whitespace.replace_all(&collapsed, " ");
    collapsed.trim().to_string()
}

/// 최종 답변 구성
///
/// 도입부와 정리된 발췌를 그대로 이어 붙입니다. 도입부 문자열이 이미
/// 끝에 갖고 있는 것 외에 추가 구두점은 넣지 않습니다.
pub fn format_answer(question: &str, excerpt: &str) -> String {
    format!("{}{}", intro_for(question), clean_excerpt(excerpt))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_buckets() {
        assert!(format_answer("What is X?", "x").starts_with("Based on the course content: "));
        assert!(format_answer("How does X work?", "x")
            .starts_with("Here's how it works according to the course: "));
        assert!(format_answer("Why is X?", "x").starts_with("The course explains that: "));
        assert!(format_answer("Explain X", "x").starts_with("According to the course content: "));
    }

    #[test]
    fn test_intro_is_case_insensitive() {
        assert!(format_answer("WHAT is X?", "x").starts_with("Based on the course content: "));
        assert!(format_answer("  how come?", "x")
            .starts_with("Here's how it works according to the course: "));
    }

    #[test]
    fn test_clean_excerpt_collapses_periods_and_whitespace() {
        assert_eq!(clean_excerpt("one... two"), "one. two");
        assert_eq!(clean_excerpt("a  b\n\nc\td"), "a b c d");
        assert_eq!(clean_excerpt("  trimmed  "), "trimmed");
    }

    #[test]
    fn test_clean_excerpt_is_idempotent() {
        let messy = "First..  sentence...\n\nSecond   one.. ";
        let once = clean_excerpt(messy);
        let twice = clean_excerpt(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_format_answer_concatenates() {
        let answer = format_answer("What is a loop?", "A loop repeats..  steps");
        assert_eq!(answer, "Based on the course content: A loop repeats. steps");
    }
}
