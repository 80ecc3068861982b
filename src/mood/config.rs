//! 분위기 분석 엔진 설정
//!
//! 자모 집합, 복합 모음 정책, 라벨 기준값, 연쇄 분석 폭을 한 곳에서 정한다.

use crate::core::decomposer::Decomposer;
use crate::core::vowel::{Alphabet, DiphthongPolicy, VowelCategoryTable};

use super::label::MoodThresholds;
use super::score::Scorer;
use super::window::{WindowAnalyzer, WindowStrategy};

/// 분석 엔진 설정
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineConfig {
    /// 추출할 모음 자모 집합
    pub alphabet: Alphabet,

    /// 복합 모음의 계열 배정 방식
    pub diphthong_policy: DiphthongPolicy,

    /// 라벨 판정 기준값
    pub thresholds: MoodThresholds,

    /// 연쇄 분석 창 크기 (0 = 연쇄 분석 안 함)
    pub window_size: usize,

    /// 연쇄 분석 계산 방식
    pub window_strategy: WindowStrategy,
}

impl EngineConfig {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 자모 집합 설정
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// 복합 모음 정책 설정
    pub fn with_policy(mut self, policy: DiphthongPolicy) -> Self {
        self.diphthong_policy = policy;
        self
    }

    /// 라벨 기준값 설정
    pub fn with_thresholds(mut self, thresholds: MoodThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// 연쇄 분석 창 크기 설정
    pub fn with_window(mut self, size: usize) -> Self {
        self.window_size = size;
        self
    }

    /// 연쇄 분석 계산 방식 설정
    pub fn with_strategy(mut self, strategy: WindowStrategy) -> Self {
        self.window_strategy = strategy;
        self
    }

    pub fn decomposer(&self) -> Decomposer {
        Decomposer::new(self.alphabet)
    }

    pub fn scorer(&self) -> Scorer {
        Scorer::new(VowelCategoryTable::new(self.diphthong_policy))
    }

    pub fn window_analyzer(&self) -> WindowAnalyzer {
        WindowAnalyzer::new(self.scorer(), self.thresholds).with_strategy(self.window_strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.alphabet, Alphabet::Full);
        assert_eq!(config.diphthong_policy, DiphthongPolicy::Leading);
        assert!((config.thresholds.tone - 0.15).abs() < f64::EPSILON);
        assert!((config.thresholds.calm - 0.45).abs() < f64::EPSILON);
        assert_eq!(config.window_size, 0);
        assert_eq!(config.window_strategy, WindowStrategy::Recompute);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::new()
            .with_alphabet(Alphabet::Simple)
            .with_policy(DiphthongPolicy::Trailing)
            .with_thresholds(MoodThresholds::new(0.2, 0.5))
            .with_window(3)
            .with_strategy(WindowStrategy::Incremental);

        assert_eq!(config.alphabet, Alphabet::Simple);
        assert_eq!(config.diphthong_policy, DiphthongPolicy::Trailing);
        assert!((config.thresholds.tone - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.window_size, 3);
        assert_eq!(config.decomposer().alphabet(), Alphabet::Simple);
        assert_eq!(config.scorer().table().policy(), DiphthongPolicy::Trailing);
        assert_eq!(config.window_analyzer().strategy(), WindowStrategy::Incremental);
    }
}
