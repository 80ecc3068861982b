pub mod config;
pub mod core;
pub mod mood;
pub mod report;

pub use crate::core::{decompose_vowels, Vowel, VowelSequence};
pub use mood::{analyze_windows, label_mood, score_distribution, MoodAnalyzer, TextReport};
