//! 통합 테스트 - 모음 추출 → 집계 → 라벨 → 연쇄 분석

use moeum::core::unicode::decompose_str;
use moeum::core::{Alphabet, DiphthongPolicy, Vowel, VowelCategoryTable};
use moeum::mood::{EngineConfig, MoodAnalyzer, MoodThresholds, Scorer, WindowAnalyzer, WindowStrategy};
use moeum::{analyze_windows, decompose_vowels, label_mood, score_distribution};
use pretty_assertions::assert_eq;

#[test]
fn test_single_syllable_pipeline() {
    let seq = decompose_vowels("아");
    assert_eq!(seq.as_slice(), &[Vowel::A]);

    let score = score_distribution(&seq);
    assert_eq!(score.total, 1);
    assert_eq!(score.bright_ratio(), 1.0);
    assert_eq!(score.dark_ratio(), 0.0);
    assert_eq!(score.neutral_ratio(), 0.0);
    assert_eq!(score.bright_index(), 1.0);

    assert_eq!(label_mood(score.bright_index(), score.neutrality()).to_string(), "Bright");
}

#[test]
fn test_empty_pipeline() {
    let seq = decompose_vowels("");
    assert!(seq.is_empty());

    let score = score_distribution(&seq);
    assert_eq!(score.total, 0);
    assert_eq!(score.bright_ratio(), 0.0);
    assert_eq!(score.dark_ratio(), 0.0);
    assert_eq!(score.neutral_ratio(), 0.0);
    assert_eq!(score.bright_index(), 0.0);
    assert_eq!(score.neutrality(), 0.0);

    assert_eq!(label_mood(0.0, 0.0).to_string(), "Neutral/Soft");
}

#[test]
fn test_window_example() {
    let seq = [Vowel::A, Vowel::Eo, Vowel::I];
    let windows = analyze_windows(&seq, 2);

    let spans: Vec<(usize, usize, &str)> = windows
        .iter()
        .map(|w| (w.start, w.end, w.window.as_str()))
        .collect();
    assert_eq!(spans, vec![(0, 1, "ㅏㅓ"), (1, 2, "ㅓㅣ")]);

    // 각 구간은 자기 구간만으로 집계됨
    assert_eq!(windows[0].metrics, score_distribution(&seq[0..2]).metrics);
    assert_eq!(windows[1].metrics, score_distribution(&seq[1..3]).metrics);
}

#[test]
fn test_label_boundaries() {
    assert_eq!(label_mood(0.15, 0.0).to_string(), "Bright");
    assert_eq!(label_mood(-0.15, 0.0).to_string(), "Dark");
    assert_eq!(label_mood(0.1499999, 0.0).to_string(), "Neutral/Soft");
    assert!(label_mood(0.0, 0.45).calm);
    assert!(!label_mood(0.0, 0.4499999).calm);
}

#[test]
fn test_decompose_idempotent() {
    let texts = ["아슬히 고개 내민 내게", "의외로 괜찮은 웨딩", "mixed 한글 text!", ""];
    for text in texts {
        let decomposed = decompose_str(text);
        assert_eq!(decompose_str(&decomposed), decomposed);
        assert_eq!(decompose_vowels(&decomposed), decompose_vowels(text));
    }
}

#[test]
fn test_window_count_property() {
    let seq = decompose_vowels("하루가 다르게 빛을 머금은 저녁놀 아래에서");
    for n in 0..=seq.len() + 3 {
        let expected = if n == 0 { 0 } else { (seq.len() + 1).saturating_sub(n) };
        assert_eq!(analyze_windows(&seq, n).len(), expected);
    }
}

#[test]
fn test_ratios_sum_to_one_for_all_policies() {
    let seq = decompose_vowels("아슬히 고개 내민 내게 첫 봄인사를 건네줘요 의외로 괜찮은 웨딩");
    for policy in [DiphthongPolicy::Leading, DiphthongPolicy::Trailing, DiphthongPolicy::Neutral] {
        let score = Scorer::new(VowelCategoryTable::new(policy)).score(seq.as_slice());
        let m = score.metrics;
        assert!((m.bright_ratio + m.dark_ratio + m.neutral_ratio - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_strategies_agree() {
    let seq = decompose_vowels("하루가 다르게 빛을 머금은 저녁놀 아래에서");
    let recompute = WindowAnalyzer::new(Scorer::default(), MoodThresholds::default());
    let incremental = recompute.with_strategy(WindowStrategy::Incremental);
    for n in 1..=4 {
        assert_eq!(incremental.analyze(seq.as_slice(), n), recompute.analyze(seq.as_slice(), n));
    }
}

#[test]
fn test_text_analyzer() {
    let text = "아슬히 고개 내민 내게 첫 봄인사를 건네줘요\n\n하루가 다르게 빛을 머금은 저녁놀 아래에서\n";
    let analyzer = MoodAnalyzer::with_config(EngineConfig::new().with_window(3));
    let report = analyzer.analyze(text);

    assert_eq!(report.lines.len(), 2);
    assert_eq!(report.lines[1].number, 2);
    assert_eq!(report.vowels.len(), report.lines[0].vowels.len() + report.lines[1].vowels.len());
    assert_eq!(report.windows.len(), report.vowels.len() - 2);
    assert_eq!(report.overall.score, score_distribution(&report.vowels));
}

#[test]
fn test_simple_alphabet_engine() {
    let analyzer = MoodAnalyzer::with_config(EngineConfig::new().with_alphabet(Alphabet::Simple));
    let report = analyzer.analyze("과 워 의");
    assert!(report.vowels.is_empty());
    assert!(!report.lines[0].has_vowels());
}

#[test]
fn test_json_report_shape() {
    let analyzer = MoodAnalyzer::with_config(EngineConfig::new().with_window(2));
    let report = analyzer.analyze("아어이");
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["vowels"], serde_json::json!(["ㅏ", "ㅓ", "ㅣ"]));
    assert_eq!(json["overall"]["score"]["total"], 3);
    assert_eq!(json["overall"]["label"]["en"], "Neutral/Soft");
    assert_eq!(json["overall"]["label"]["ko"], "중성/부드러움");
    assert_eq!(json["lines"][0]["score"]["distribution"]["ㅓ"], 1);
    assert_eq!(json["windows"][1]["window"], "ㅓㅣ");
    assert_eq!(json["windows"][1]["label"]["tone"], "dark");
    assert_eq!(json["windows"][1]["label"]["calm"], true);
    assert_eq!(json["windows"][1]["label"]["en"], "Dark (Calm/Subdued)");
}
