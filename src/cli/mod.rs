//! CLI 모듈
//!
//! tutor-rag CLI 명령어 정의 및 구현

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use crate::answer::{has_api_key, DEFAULT_MODEL};
use crate::course::{all_courses, find_course};
use crate::tutor::{AskRequest, TutorConfig, TutorError, TutorService};

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Parser)]
#[command(name = "tutor-rag")]
#[command(version, about = "코스 콘텐츠 기반 RAG-lite AI 튜터", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 코스 콘텐츠에 대해 질문
    Ask {
        /// 질문
        question: String,

        /// 내장 코스 ID (`courses` 명령으로 목록 확인)
        #[arg(short, long)]
        course: Option<String>,

        /// 콘텐츠 파일 경로
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// 직접 입력할 콘텐츠
        #[arg(long)]
        content: Option<String>,

        /// 코스 제목 (원격 호출 프레이밍용)
        #[arg(short, long)]
        title: Option<String>,

        /// 원격 LLM을 사용하지 않고 로컬 추출 답변만 사용
        #[arg(long)]
        local: bool,
    },

    /// 내장 코스 목록
    Courses,

    /// 상태 확인
    Status,
}

// ============================================================================
// CLI Runner
// ============================================================================

/// CLI 명령어 실행
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Ask {
            question,
            course,
            file,
            content,
            title,
            local,
        } => cmd_ask(question, course, file, content, title, local).await,
        Commands::Courses => cmd_courses(),
        Commands::Status => cmd_status(),
    }
}

// ============================================================================
// Command Implementations
// ============================================================================

/// 질문 명령어 (ask)
///
/// 콘텐츠 소스를 결정한 뒤 튜터 서비스로 답변을 생성합니다.
async fn cmd_ask(
    question: String,
    course: Option<String>,
    file: Option<PathBuf>,
    content: Option<String>,
    title: Option<String>,
    local: bool,
) -> Result<()> {
    let (content, title) = resolve_content(course, file, content, title)?;

    let config = if local {
        TutorConfig::local_only()
    } else {
        TutorConfig::from_env()
    };

    if config.api_key.is_some() {
        println!("[*] 원격 LLM 전략 사용 (실패 시 로컬 폴백): {}", config.model);
    } else {
        println!("[*] 로컬 추출 답변 사용");
    }

    let service = TutorService::new(config).context("TutorService 초기화 실패")?;

    let request = AskRequest {
        question,
        content,
        title,
    };

    match service.answer(request).await {
        Ok(response) => {
            println!();
            println!("{}", response.answer);
            Ok(())
        }
        Err(TutorError::InvalidInput(message)) => bail!("입력 오류: {}", message),
        Err(e) => Err(e.into()),
    }
}

/// 콘텐츠 소스 결정
///
/// 우선순위: 내장 코스 > 파일 > 직접 입력. 코스를 쓰면 제목이 지정되지
/// 않은 경우 코스 제목을 사용합니다.
fn resolve_content(
    course: Option<String>,
    file: Option<PathBuf>,
    content: Option<String>,
    title: Option<String>,
) -> Result<(String, Option<String>)> {
    if let Some(ref course_id) = course {
        let course = find_course(course_id)
            .ok_or_else(|| anyhow::anyhow!("코스 '{}'를 찾을 수 없습니다", course_id))?;
        let title = title.or_else(|| Some(course.title.to_string()));
        return Ok((course.content.to_string(), title));
    }

    if let Some(ref path) = file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("콘텐츠 파일 읽기 실패: {}", path.display()))?;
        return Ok((text, title));
    }

    if let Some(text) = content {
        return Ok((text, title));
    }

    bail!("--course, --file, --content 중 하나를 지정해야 합니다");
}

/// 목록 명령어 (courses)
fn cmd_courses() -> Result<()> {
    println!("[OK] 내장 코스 ({} 건):\n", all_courses().len());

    for course in all_courses() {
        println!("  {} - {}", course.id, course.title);
        println!("      {}", truncate_text(course.description, 70));
        println!("      {} chars", course.content.chars().count());
        println!();
    }

    Ok(())
}

/// 상태 명령어 (status)
fn cmd_status() -> Result<()> {
    println!("tutor-rag v{}", env!("CARGO_PKG_VERSION"));
    println!();

    // API 키 상태
    if has_api_key() {
        let config = TutorConfig::from_env();
        println!("[OK] API 키: 설정됨");
        println!("     모델: {}", config.model);
    } else {
        println!("[!] API 키: 미설정 (로컬 추출 답변만 사용)");
        println!("    설정: export OPENROUTER_API_KEY=your-key");
        println!("    기본 모델: {}", DEFAULT_MODEL);
    }

    // 내장 코스
    println!("[*] 내장 코스: {} 건", all_courses().len());

    Ok(())
}

// ============================================================================
// Helper Functions
// ============================================================================

/// 텍스트 자르기 (UTF-8 안전)
fn truncate_text(text: &str, max_chars: usize) -> String {
    let cleaned = text.replace('\n', " ").replace('\r', "");
    let cleaned = cleaned.trim();

    if cleaned.chars().count() <= max_chars {
        cleaned.to_string()
    } else {
        let truncated: String = cleaned.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}

// ============================================================================
// Tests
// ============================================================================
