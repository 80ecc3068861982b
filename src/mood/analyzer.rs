//! 텍스트 분위기 분석 파이프라인
//!
//! 1. 빈 줄을 제외한 줄 단위로 모음 추출 (`\r`, U+2028 등도 줄바꿈)
//! 2. 줄별 집계 + 라벨
//! 3. 전체 모음 열 집계 + 라벨
//! 4. (창 크기가 있으면) 전체 모음 열 연쇄 분석

use serde::Serialize;

use crate::core::decomposer::{Decomposer, VowelSequence};

use super::config::EngineConfig;
use super::label::{MoodLabel, MoodThresholds};
use super::score::{Score, Scorer};
use super::window::{WindowAnalyzer, WindowResult};

/// 텍스트 분위기 분석기
///
/// 상태를 갖지 않으므로 여러 스레드에서 공유해 써도 된다.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoodAnalyzer {
    config: EngineConfig,
    decomposer: Decomposer,
    scorer: Scorer,
    windows: WindowAnalyzer,
}

impl MoodAnalyzer {
    /// 기본 설정으로 분석기 생성
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// 설정을 지정하여 분석기 생성
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            decomposer: config.decomposer(),
            scorer: config.scorer(),
            windows: config.window_analyzer(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn thresholds(&self) -> &MoodThresholds {
        &self.config.thresholds
    }

    /// 한 줄 분석
    pub fn analyze_line(&self, number: usize, line: &str) -> LineReport {
        let vowels = self.decomposer.decompose(line);
        let score = self.scorer.score(vowels.as_slice());
        let label = self
            .thresholds()
            .label(score.metrics.bright_index, score.metrics.neutrality);

        LineReport {
            number,
            text: line.to_string(),
            vowels,
            score,
            label,
        }
    }

    /// 텍스트 전체 분석
    ///
    /// # Examples
    /// ```
    /// use moeum::mood::{EngineConfig, MoodAnalyzer};
    ///
    /// let analyzer = MoodAnalyzer::with_config(EngineConfig::new().with_window(2));
    /// let report = analyzer.analyze("아아\n\n어이");
    ///
    /// assert_eq!(report.lines.len(), 2);
    /// assert_eq!(report.vowels.to_string(), "ㅏㅏㅓㅣ");
    /// assert_eq!(report.overall.label.to_string(), "Bright");
    /// assert_eq!(report.windows.len(), 3);
    /// ```
    pub fn analyze(&self, text: &str) -> TextReport {
        let lines: Vec<LineReport> = split_lines(text)
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(i, line)| self.analyze_line(i + 1, line))
            .collect();

        let vowels = VowelSequence::concat(lines.iter().map(|line| &line.vowels));
        let score = self.scorer.score(vowels.as_slice());
        let label = self
            .thresholds()
            .label(score.metrics.bright_index, score.metrics.neutrality);

        let window_size = self.config.window_size;
        let windows = self.windows.analyze(vowels.as_slice(), window_size);

        log::debug!(
            "분석 완료: {}줄, 모음 {}개, 연쇄 분석 {}구간 (창 {})",
            lines.len(),
            vowels.len(),
            windows.len(),
            window_size
        );

        TextReport {
            lines,
            overall: Summary { score, label },
            vowels,
            window_size,
            windows,
        }
    }
}

/// 줄 구분 문자
///
/// `\n`, `\r` 외에 VT, FF, 파일/그룹/레코드 구분자, NEL, 줄/문단 구분자
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// 텍스트를 줄 단위로 나눈다 (`\r\n`은 한 번의 줄바꿈)
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(&LINE_BREAKS[..]) {
            Some(pos) => {
                let line = &rest[..pos];
                let tail = &rest[pos..];
                let skip = if tail.starts_with("\r\n") {
                    2
                } else {
                    tail.chars().next().map_or(1, char::len_utf8)
                };
                rest = &tail[skip..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// 한 줄의 분석 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineReport {
    /// 빈 줄을 제외한 줄 번호 (1부터)
    pub number: usize,
    /// 원문
    pub text: String,
    /// 추출된 모음 열
    pub vowels: VowelSequence,
    /// 집계 결과
    pub score: Score,
    /// 분위기 라벨
    pub label: MoodLabel,
}

impl LineReport {
    /// 모음이 하나라도 있는지 확인
    pub fn has_vowels(&self) -> bool {
        self.score.total > 0
    }
}

/// 집계 + 라벨
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub score: Score,
    pub label: MoodLabel,
}

/// 텍스트 전체 분석 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextReport {
    /// 줄별 결과 (원문 순서)
    pub lines: Vec<LineReport>,
    /// 전체 모음 열 기준 결과
    pub overall: Summary,
    /// 모든 줄의 모음 열을 이어 붙인 전체 모음 열
    pub vowels: VowelSequence,
    /// 연쇄 분석 창 크기 (0 = 안 함)
    pub window_size: usize,
    /// 연쇄 분석 결과 (시작 인덱스 오름차순)
    pub windows: Vec<WindowResult>,
}

impl TextReport {
    /// 분석할 줄이 없었는지 확인
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
