//! BrightIndex / Neutrality → 분위기 라벨

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// 기본 톤 기준값 (|BrightIndex| 이상이면 밝음/어둠)
pub const DEFAULT_TONE_THRESHOLD: f64 = 0.15;
/// 기본 평온 기준값 (Neutrality 이상이면 평온/잔잔 수식어)
pub const DEFAULT_CALM_THRESHOLD: f64 = 0.45;

/// 기본 톤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Bright,
    Dark,
    NeutralSoft,
}

impl Tone {
    pub fn english(self) -> &'static str {
        match self {
            Tone::Bright => "Bright",
            Tone::Dark => "Dark",
            Tone::NeutralSoft => "Neutral/Soft",
        }
    }

    pub fn korean(self) -> &'static str {
        match self {
            Tone::Bright => "밝음",
            Tone::Dark => "어둠",
            Tone::NeutralSoft => "중성/부드러움",
        }
    }
}

/// 라벨 표시 언어
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Ko,
    En,
}

/// 분위기 라벨: 기본 톤 + 평온 수식어 여부
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoodLabel {
    pub tone: Tone,
    /// "(Calm/Subdued)" 수식어 여부
    pub calm: bool,
}

impl MoodLabel {
    pub fn new(tone: Tone, calm: bool) -> Self {
        Self { tone, calm }
    }

    /// 영문 라벨 (예: "Bright (Calm/Subdued)")
    pub fn english(&self) -> String {
        self.render(Language::En)
    }

    /// 한글 라벨 (예: "밝음 (평온/잔잔)")
    pub fn korean(&self) -> String {
        self.render(Language::Ko)
    }

    pub fn render(&self, language: Language) -> String {
        let (tone, qualifier) = match language {
            Language::En => (self.tone.english(), "(Calm/Subdued)"),
            Language::Ko => (self.tone.korean(), "(평온/잔잔)"),
        };
        if self.calm {
            format!("{} {}", tone, qualifier)
        } else {
            tone.to_string()
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.english())
    }
}

/// `{"tone", "calm", "en", "ko"}`: 판정 값과 두 언어의 표시 문자열
impl Serialize for MoodLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MoodLabel", 4)?;
        state.serialize_field("tone", &self.tone)?;
        state.serialize_field("calm", &self.calm)?;
        state.serialize_field("en", &self.english())?;
        state.serialize_field("ko", &self.korean())?;
        state.end()
    }
}

/// 라벨 판정 기준값
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodThresholds {
    /// BrightIndex >= tone → 밝음, <= -tone → 어둠
    pub tone: f64,
    /// Neutrality >= calm → 평온 수식어
    pub calm: f64,
}

impl Default for MoodThresholds {
    fn default() -> Self {
        Self {
            tone: DEFAULT_TONE_THRESHOLD,
            calm: DEFAULT_CALM_THRESHOLD,
        }
    }
}

impl MoodThresholds {
    pub fn new(tone: f64, calm: f64) -> Self {
        Self { tone, calm }
    }

    /// 두 지표로 라벨 결정
    ///
    /// 톤 판정과 평온 수식어 판정은 서로 독립이다.
    pub fn label(&self, bright_index: f64, neutrality: f64) -> MoodLabel {
        let tone = if bright_index >= self.tone {
            Tone::Bright
        } else if bright_index <= -self.tone {
            Tone::Dark
        } else {
            Tone::NeutralSoft
        };

        MoodLabel {
            tone,
            calm: neutrality >= self.calm,
        }
    }
}

/// 기본 기준값으로 라벨 결정
///
/// # Examples
/// ```
/// use moeum::mood::label_mood;
/// assert_eq!(label_mood(1.0, 0.0).to_string(), "Bright");
/// assert_eq!(label_mood(-0.2, 0.5).to_string(), "Dark (Calm/Subdued)");
/// assert_eq!(label_mood(0.0, 0.0).korean(), "중성/부드러움");
/// ```
pub fn label_mood(bright_index: f64, neutrality: f64) -> MoodLabel {
    MoodThresholds::default().label(bright_index, neutrality)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_thresholds() {
        assert_eq!(label_mood(1.0, 0.0).tone, Tone::Bright);
        assert_eq!(label_mood(-1.0, 0.0).tone, Tone::Dark);
        assert_eq!(label_mood(0.0, 0.0).tone, Tone::NeutralSoft);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(label_mood(0.15, 0.0).to_string(), "Bright");
        assert_eq!(label_mood(-0.15, 0.0).to_string(), "Dark");
        assert_eq!(label_mood(0.1499999, 0.0).to_string(), "Neutral/Soft");
        assert_eq!(label_mood(-0.1499999, 0.0).to_string(), "Neutral/Soft");

        assert!(label_mood(0.0, 0.45).calm);
        assert!(!label_mood(0.0, 0.4499999).calm);
    }

    #[test]
    fn test_qualifier_appends_to_any_tone() {
        assert_eq!(label_mood(0.5, 0.5).to_string(), "Bright (Calm/Subdued)");
        assert_eq!(label_mood(-0.5, 0.5).to_string(), "Dark (Calm/Subdued)");
        assert_eq!(label_mood(0.0, 1.0).to_string(), "Neutral/Soft (Calm/Subdued)");
    }

    #[test]
    fn test_korean_labels() {
        assert_eq!(label_mood(1.0, 0.0).korean(), "밝음");
        assert_eq!(label_mood(-1.0, 0.0).korean(), "어둠");
        assert_eq!(label_mood(0.0, 0.9).korean(), "중성/부드러움 (평온/잔잔)");
        assert_eq!(label_mood(0.2, 0.5).render(Language::Ko), "밝음 (평온/잔잔)");
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = MoodThresholds::new(0.5, 0.9);
        assert_eq!(thresholds.label(0.3, 0.5), MoodLabel::new(Tone::NeutralSoft, false));
        assert_eq!(thresholds.label(0.5, 0.9), MoodLabel::new(Tone::Bright, true));
    }

    #[test]
    fn test_serialize_label() {
        let label = label_mood(-0.3, 0.6);
        assert_eq!(
            serde_json::to_value(label).unwrap(),
            serde_json::json!({
                "tone": "dark",
                "calm": true,
                "en": "Dark (Calm/Subdued)",
                "ko": "어둠 (평온/잔잔)",
            })
        );

        let plain = serde_json::to_value(label_mood(0.0, 0.0)).unwrap();
        assert_eq!(plain["tone"], "neutral_soft");
        assert_eq!(plain["calm"], false);
        assert_eq!(plain["ko"], "중성/부드러움");
    }
}
