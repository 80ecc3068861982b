//! 모음 기반 분위기 분석
//!
//! 한글 텍스트의 모음을 밝음(양성)/어둠(음성)/중성 계열로 나누어
//! 분위기를 판정합니다.
//!
//! # 개요
//!
//! 1. **모음 추출**: `core::decomposer`로 NFD 분해 후 중성만 추출
//! 2. **집계**: 모음별 개수와 계열별 비율, BrightIndex, Neutrality 계산
//! 3. **라벨**: BrightIndex(±0.15)로 밝음/어둠/중성, Neutrality(0.45)로 평온 수식어
//! 4. **연쇄 분석**: 전체 모음 열을 창 크기 n으로 밀며 구간별 2~3단계 반복
//!
//! # 사용 예시
//!
//! ```
//! use moeum::core::decompose_vowels;
//! use moeum::mood::{analyze_windows, label_mood, score_distribution};
//!
//! let seq = decompose_vowels("아어이");
//! let score = score_distribution(&seq);
//! let label = label_mood(score.bright_index(), score.neutrality());
//! assert_eq!(label.to_string(), "Neutral/Soft");
//!
//! let windows = analyze_windows(&seq, 2);
//! assert_eq!(windows.len(), 2);
//! ```

mod analyzer;
mod config;
mod label;
mod score;
mod window;

// 공개 인터페이스
pub use analyzer::{LineReport, MoodAnalyzer, Summary, TextReport};
pub use config::EngineConfig;
pub use label::{
    label_mood, Language, MoodLabel, MoodThresholds, Tone, DEFAULT_CALM_THRESHOLD,
    DEFAULT_TONE_THRESHOLD,
};
pub use score::{score_distribution, CategoryCounts, Distribution, Metrics, Score, Scorer};
pub use window::{analyze_windows, WindowAnalyzer, WindowResult, WindowStrategy};
