//! 분석 결과 텍스트 출력

use std::fmt;

use crate::mood::{Language, Score, TextReport, WindowResult};

/// 출력 문구
struct Messages {
    overall: &'static str,
    no_vowels_at_all: &'static str,
    total: &'static str,
    bright: &'static str,
    dark: &'static str,
    neutral: &'static str,
    bright_index: &'static str,
    neutrality: &'static str,
    overall_label: &'static str,
    label: &'static str,
    counts: &'static str,
    lines: &'static str,
    line_no_vowels: &'static str,
    not_enough: &'static str,
}

const KO: Messages = Messages {
    overall: "전체 텍스트 기준 분석",
    no_vowels_at_all: "모음이 하나도 없습니다.",
    total: "총 모음 수",
    bright: "밝음계 비율",
    dark: "어둠계 비율",
    neutral: "중성계 비율",
    bright_index: "BrightIndex (밝음 - 어둠)",
    neutrality: "Neutrality (중성 비율)",
    overall_label: "전체 분위기 라벨",
    label: "분위기 라벨",
    counts: "모음별 개수",
    lines: "줄 단위 분석",
    line_no_vowels: "모음을 찾지 못했습니다.",
    not_enough: "연쇄 분석을 수행할 만큼 모음이 충분하지 않습니다.",
};

const EN: Messages = Messages {
    overall: "Whole text",
    no_vowels_at_all: "No vowels found.",
    total: "Total vowels",
    bright: "Bright ratio",
    dark: "Dark ratio",
    neutral: "Neutral ratio",
    bright_index: "BrightIndex (bright - dark)",
    neutrality: "Neutrality (neutral ratio)",
    overall_label: "Overall mood",
    label: "Mood",
    counts: "Vowel counts",
    lines: "Per line",
    line_no_vowels: "No vowels found in this line.",
    not_enough: "Not enough vowels for the sliding window.",
};

fn messages(language: Language) -> &'static Messages {
    match language {
        Language::Ko => &KO,
        Language::En => &EN,
    }
}

/// 출력 옵션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub language: Language,
    /// 줄 단위 결과 포함 여부
    pub line_mode: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            line_mode: true,
        }
    }
}

/// 분석 결과를 사람이 읽는 텍스트로 출력
pub fn render_report(report: &TextReport, options: &RenderOptions) -> String {
    ReportView { report, options }.to_string()
}

/// 출력 옵션이 적용된 분석 결과
struct ReportView<'a> {
    report: &'a TextReport,
    options: &'a RenderOptions,
}

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let language = self.options.language;
        let msg = messages(language);

        writeln!(f, "== {} ==", msg.overall)?;
        if report.overall.score.total == 0 {
            writeln!(f, "{}", msg.no_vowels_at_all)?;
        } else {
            write_score(f, msg, &report.overall.score)?;
            writeln!(f, "{}: {}", msg.overall_label, report.overall.label.render(language))?;
            write_counts(f, msg, &report.overall.score)?;
        }

        if self.options.line_mode {
            writeln!(f)?;
            writeln!(f, "== {} ==", msg.lines)?;
            for line in &report.lines {
                writeln!(f, "[{}] {}", line.number, line.text)?;
                if !line.has_vowels() {
                    writeln!(f, "  {}", msg.line_no_vowels)?;
                    continue;
                }
                write_score(f, msg, &line.score)?;
                writeln!(f, "  {}: {}", msg.label, line.label.render(language))?;
                write_counts(f, msg, &line.score)?;
            }
        }

        if report.window_size > 0 && !report.vowels.is_empty() {
            writeln!(f)?;
            match language {
                Language::Ko => writeln!(f, "== 연쇄 분석 (슬라이딩 윈도우, {}글자) ==", report.window_size)?,
                Language::En => writeln!(f, "== Sliding window (width {}) ==", report.window_size)?,
            }
            if report.windows.is_empty() {
                writeln!(f, "{}", msg.not_enough)?;
            }
            for window in &report.windows {
                write_window(f, window, language)?;
            }
        }

        Ok(())
    }
}

fn write_score(f: &mut fmt::Formatter<'_>, msg: &Messages, score: &Score) -> fmt::Result {
    let m = &score.metrics;
    writeln!(f, "  {}: {}", msg.total, score.total)?;
    writeln!(f, "  {}: {:.1}%", msg.bright, m.bright_ratio * 100.0)?;
    writeln!(f, "  {}: {:.1}%", msg.dark, m.dark_ratio * 100.0)?;
    writeln!(f, "  {}: {:.1}%", msg.neutral, m.neutral_ratio * 100.0)?;
    writeln!(f, "  {}: {:.4}", msg.bright_index, m.bright_index)?;
    writeln!(f, "  {}: {:.4}", msg.neutrality, m.neutrality)
}

fn write_counts(f: &mut fmt::Formatter<'_>, msg: &Messages, score: &Score) -> fmt::Result {
    write!(f, "  {}:", msg.counts)?;
    for (vowel, count) in score.distribution.iter() {
        write!(f, " {}={}", vowel, count)?;
    }
    writeln!(f)
}

fn write_window(f: &mut fmt::Formatter<'_>, window: &WindowResult, language: Language) -> fmt::Result {
    writeln!(
        f,
        "  {}~{}\t{}\t{:.4}\t{:.4}\t{}",
        window.start,
        window.end,
        window.window,
        window.metrics.bright_index,
        window.metrics.neutrality,
        window.label.render(language)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::{EngineConfig, MoodAnalyzer};

    #[test]
    fn test_render_korean() {
        let report = MoodAnalyzer::with_config(EngineConfig::new().with_window(2)).analyze("아어이");
        let text = render_report(&report, &RenderOptions::default());

        assert!(text.contains("== 전체 텍스트 기준 분석 =="));
        assert!(text.contains("총 모음 수: 3"));
        assert!(text.contains("밝음계 비율: 33.3%"));
        assert!(text.contains("BrightIndex (밝음 - 어둠): 0.0000"));
        assert!(text.contains("전체 분위기 라벨: 중성/부드러움"));
        assert!(text.contains("모음별 개수: ㅏ=1 ㅓ=1 ㅣ=1"));
        assert!(text.contains("[1] 아어이"));
        assert!(text.contains("연쇄 분석 (슬라이딩 윈도우, 2글자)"));
        assert!(text.contains("0~1\tㅏㅓ\t0.0000\t0.0000\t중성/부드러움"));
        assert!(text.contains("1~2\tㅓㅣ\t-0.5000\t0.5000\t어둠 (평온/잔잔)"));
    }

    #[test]
    fn test_render_english_without_lines() {
        let report = MoodAnalyzer::new().analyze("아아\n어");
        let options = RenderOptions {
            language: Language::En,
            line_mode: false,
        };
        let text = render_report(&report, &options);

        assert!(text.contains("Overall mood: Bright"));
        assert!(!text.contains("Per line"));
        assert!(!text.contains("Sliding window"));
    }

    #[test]
    fn test_render_degenerate() {
        let report = MoodAnalyzer::with_config(EngineConfig::new().with_window(5)).analyze("hello\n아");
        let text = render_report(&report, &RenderOptions::default());

        assert!(text.contains("모음을 찾지 못했습니다."));
        assert!(text.contains("연쇄 분석을 수행할 만큼 모음이 충분하지 않습니다."));

        let empty = MoodAnalyzer::new().analyze("abc");
        let text = render_report(&empty, &RenderOptions::default());
        assert!(text.contains("모음이 하나도 없습니다."));
    }
}
