//! 연쇄 분석 (슬라이딩 윈도우)
//!
//! 전체 모음 열을 고정 폭 n으로 한 칸씩 밀면서 각 구간을 집계하고 라벨을 붙인다.

use serde::{Deserialize, Serialize};

use crate::core::vowel::Vowel;

use super::label::{MoodLabel, MoodThresholds};
use super::score::{CategoryCounts, Metrics, Scorer};

/// 윈도우 계산 방식 (결과는 동일)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowStrategy {
    /// 구간마다 다시 집계: O(len * n)
    #[default]
    Recompute,
    /// 계열별 합계를 유지하며 한 칸씩 갱신: O(len)
    Incremental,
}

/// 한 구간의 분석 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowResult {
    /// 시작 인덱스
    pub start: usize,
    /// 끝 인덱스 (포함)
    pub end: usize,
    /// 구간 모음 기호를 이어 붙인 문자열
    pub window: String,
    pub metrics: Metrics,
    pub label: MoodLabel,
}

/// 슬라이딩 윈도우 분석기
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowAnalyzer {
    scorer: Scorer,
    thresholds: MoodThresholds,
    strategy: WindowStrategy,
}

impl WindowAnalyzer {
    pub fn new(scorer: Scorer, thresholds: MoodThresholds) -> Self {
        Self {
            scorer,
            thresholds,
            strategy: WindowStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: WindowStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> WindowStrategy {
        self.strategy
    }

    /// 폭 n인 모든 연속 구간 분석
    ///
    /// n이 0이거나 모음 수보다 크면 빈 목록 (오류 아님)
    pub fn analyze(&self, vowels: &[Vowel], n: usize) -> Vec<WindowResult> {
        if n == 0 || n > vowels.len() {
            return Vec::new();
        }

        match self.strategy {
            WindowStrategy::Recompute => self.recompute(vowels, n),
            WindowStrategy::Incremental => self.incremental(vowels, n),
        }
    }

    fn recompute(&self, vowels: &[Vowel], n: usize) -> Vec<WindowResult> {
        vowels
            .windows(n)
            .enumerate()
            .map(|(start, window)| {
                let metrics = self.scorer.score(window).metrics;
                self.result(start, window, metrics)
            })
            .collect()
    }

    fn incremental(&self, vowels: &[Vowel], n: usize) -> Vec<WindowResult> {
        let table = self.scorer.table();
        let mut results = Vec::with_capacity(vowels.len() - n + 1);
        let mut counts: CategoryCounts = self.scorer.category_counts(&vowels[..n]);
        results.push(self.result(0, &vowels[..n], counts.metrics()));

        for start in 1..=vowels.len() - n {
            // 빠지는 모음 하나, 들어오는 모음 하나
            counts.remove(table.category(vowels[start - 1]), 1);
            counts.add(table.category(vowels[start + n - 1]), 1);

            let window = &vowels[start..start + n];
            results.push(self.result(start, window, counts.metrics()));
        }

        results
    }

    fn result(&self, start: usize, window: &[Vowel], metrics: Metrics) -> WindowResult {
        WindowResult {
            start,
            end: start + window.len() - 1,
            window: window.iter().map(|v| v.symbol()).collect(),
            metrics,
            label: self.thresholds.label(metrics.bright_index, metrics.neutrality),
        }
    }
}

/// 기본 설정으로 연쇄 분석
///
/// # Examples
/// ```
/// use moeum::core::decompose_vowels;
/// use moeum::mood::analyze_windows;
///
/// let seq = decompose_vowels("아어이");
/// let windows = analyze_windows(&seq, 2);
/// assert_eq!(windows.len(), 2);
/// assert_eq!(windows[0].window, "ㅏㅓ");
/// assert_eq!(windows[1].window, "ㅓㅣ");
/// ```
pub fn analyze_windows<S: AsRef<[Vowel]> + ?Sized>(seq: &S, n: usize) -> Vec<WindowResult> {
    WindowAnalyzer::default().analyze(seq.as_ref(), n)
}
