//! moeum - 한글 모음 분위기 분석기 CLI

use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;

use moeum::config::{load_config, load_config_from, MoodSettings};
use moeum::core::vowel::{Alphabet, DiphthongPolicy};
use moeum::mood::{Language, MoodAnalyzer, TextReport, WindowStrategy};
use moeum::report::{render_report, RenderOptions};

/// 한글 텍스트의 모음을 밝음/어둠/중성으로 나누어 분위기를 분석합니다
#[derive(Parser)]
#[command(name = "moeum")]
#[command(version)]
#[command(about = "Korean vowel mood analyzer", long_about = None)]
struct Cli {
    /// 입력 파일 (생략하거나 - 이면 표준 입력)
    files: Vec<PathBuf>,

    /// 연쇄 분석 창 크기 (0 = 안 함)
    #[arg(short, long)]
    window: Option<usize>,

    /// 줄 단위 결과 생략
    #[arg(long)]
    no_lines: bool,

    /// 출력 형식
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// 라벨 언어
    #[arg(long, value_enum)]
    language: Option<LanguageArg>,

    /// 모음 자모 집합
    #[arg(long, value_enum)]
    alphabet: Option<AlphabetArg>,

    /// 복합 모음 계열 배정
    #[arg(long, value_enum)]
    diphthong_policy: Option<PolicyArg>,

    /// 연쇄 분석 계산 방식
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// 설정 파일 경로 (기본: ~/.config/moeum/config.json)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// 사람이 읽는 텍스트
    Text,
    /// 한 줄 JSON
    Json,
    /// 들여쓴 JSON
    JsonPretty,
}

#[derive(Clone, Copy, ValueEnum)]
enum LanguageArg {
    Ko,
    En,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlphabetArg {
    /// 21자 전체
    Full,
    /// 복합 모음 제외 14자
    Simple,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// 앞 모음 기준
    Leading,
    /// 뒤 모음 기준
    Trailing,
    /// 모두 중성
    Neutral,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Recompute,
    Incremental,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Ko => Language::Ko,
            LanguageArg::En => Language::En,
        }
    }
}

impl From<AlphabetArg> for Alphabet {
    fn from(arg: AlphabetArg) -> Self {
        match arg {
            AlphabetArg::Full => Alphabet::Full,
            AlphabetArg::Simple => Alphabet::Simple,
        }
    }
}

impl From<PolicyArg> for DiphthongPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Leading => DiphthongPolicy::Leading,
            PolicyArg::Trailing => DiphthongPolicy::Trailing,
            PolicyArg::Neutral => DiphthongPolicy::Neutral,
        }
    }
}

impl From<StrategyArg> for WindowStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Recompute => WindowStrategy::Recompute,
            StrategyArg::Incremental => WindowStrategy::Incremental,
        }
    }
}

/// CLI 에러
#[derive(Debug)]
enum CliError {
    /// 입력 읽기/출력 쓰기 실패
    Io(PathBuf, io::Error),
    /// JSON 출력 실패
    Json(serde_json::Error),
    /// 분석 스레드 비정상 종료
    Worker(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(path, e) => write!(f, "{}: {}", path.display(), e),
            CliError::Json(e) => write!(f, "JSON 출력 실패: {}", e),
            CliError::Worker(source) => write!(f, "{}: 분석 스레드가 비정상 종료됨", source),
        }
    }
}

impl std::error::Error for CliError {}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

/// 입력 하나의 분석 결과
#[derive(Serialize)]
struct SourceReport {
    source: String,
    report: TextReport,
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("오류: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = resolve_settings(&cli);
    let analyzer = MoodAnalyzer::with_config(settings.engine_config());

    let sources = if cli.files.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        cli.files.clone()
    };
    let inputs = sources
        .iter()
        .map(|path| read_input(path).map(|text| (path.display().to_string(), text)))
        .collect::<Result<Vec<_>, _>>()?;

    let reports = analyze_inputs(&analyzer, &inputs)?;
    let output = render_output(&reports, cli.format, &settings)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| CliError::Io(PathBuf::from("-"), e))
}

/// 입력마다 독립적으로 분석 (출력 순서는 입력 순서)
fn analyze_inputs(analyzer: &MoodAnalyzer, inputs: &[(String, String)]) -> Result<Vec<SourceReport>, CliError> {
    let analyzer = *analyzer;
    thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|(source, text)| {
                let handle = scope.spawn(move || SourceReport {
                    source: source.clone(),
                    report: analyzer.analyze(text),
                });
                (source, handle)
            })
            .collect();
        handles
            .into_iter()
            .map(|(source, handle)| handle.join().map_err(|_| CliError::Worker(source.clone())))
            .collect()
    })
}

/// 출력 형식에 맞춰 결과 문자열 생성
fn render_output(reports: &[SourceReport], format: OutputFormat, settings: &MoodSettings) -> Result<String, CliError> {
    for report in reports {
        if report.report.is_empty() {
            log::warn!("{}: 분석할 텍스트가 없습니다", report.source);
        }
    }

    match format {
        OutputFormat::Text => Ok(render_text(reports, settings)),
        OutputFormat::Json => render_json(reports, false),
        OutputFormat::JsonPretty => render_json(reports, true),
    }
}

/// 설정 파일을 읽고 CLI 옵션으로 덮어씀
///
/// 지정한 설정 파일을 읽지 못하면 경고 후 기본값을 쓴다.
fn resolve_settings(cli: &Cli) -> MoodSettings {
    let mut settings = match &cli.config {
        Some(path) => load_config_from(path).unwrap_or_else(|e| {
            log::warn!("설정 파일 {} 사용 불가, 기본값 사용: {}", path.display(), e);
            MoodSettings::default()
        }),
        None => load_config(),
    };

    if let Some(window) = cli.window {
        settings.window_size = window;
    }
    if cli.no_lines {
        settings.line_mode = false;
    }
    if let Some(language) = cli.language {
        settings.language = language.into();
    }
    if let Some(alphabet) = cli.alphabet {
        settings.alphabet = alphabet.into();
    }
    if let Some(policy) = cli.diphthong_policy {
        settings.diphthong_policy = policy.into();
    }
    if let Some(strategy) = cli.strategy {
        settings.window_strategy = strategy.into();
    }

    log::debug!("설정: {:?}", settings);
    settings
}

fn read_input(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| CliError::Io(path.to_path_buf(), e))?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).map_err(|e| CliError::Io(path.to_path_buf(), e))
    }
}

fn render_text(reports: &[SourceReport], settings: &MoodSettings) -> String {
    let options = RenderOptions {
        language: settings.language,
        line_mode: settings.line_mode,
    };
    let mut out = String::new();
    for (i, source) in reports.iter().enumerate() {
        if reports.len() > 1 {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!("### {}\n", source.source));
        }
        if source.report.is_empty() {
            let notice = match settings.language {
                Language::Ko => "텍스트를 입력해 주세요.\n",
                Language::En => "Please enter some text.\n",
            };
            out.push_str(notice);
            continue;
        }
        out.push_str(&render_report(&source.report, &options));
    }
    out
}

fn render_json(reports: &[SourceReport], pretty: bool) -> Result<String, CliError> {
    let mut json = match (reports, pretty) {
        ([single], false) => serde_json::to_string(&single.report)?,
        ([single], true) => serde_json::to_string_pretty(&single.report)?,
        (_, false) => serde_json::to_string(reports)?,
        (_, true) => serde_json::to_string_pretty(reports)?,
    };
    json.push('\n');
    Ok(json)
}
