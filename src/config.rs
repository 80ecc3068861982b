//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::vowel::{Alphabet, DiphthongPolicy};
use crate::mood::{
    EngineConfig, Language, MoodThresholds, WindowStrategy, DEFAULT_CALM_THRESHOLD,
    DEFAULT_TONE_THRESHOLD,
};

/// 설정 파일 읽기/쓰기 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 실패
    IoError(std::io::Error),
    /// JSON 파싱/직렬화 실패
    ParseError(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::ParseError(e) => write!(f, "설정 파일 형식 오류: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::ParseError(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::ParseError(e)
    }
}

/// 사용자 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MoodSettings {
    /// 모음 자모 집합 (full: 21자, simple: 복합 모음 제외 14자)
    #[serde(default)]
    pub alphabet: Alphabet,
    /// 복합 모음 계열 배정 (leading / trailing / neutral)
    #[serde(default)]
    pub diphthong_policy: DiphthongPolicy,
    /// 밝음/어둠 판정 기준 (|BrightIndex|)
    #[serde(default = "default_tone_threshold")]
    pub tone_threshold: f64,
    /// 평온 수식어 기준 (Neutrality)
    #[serde(default = "default_calm_threshold")]
    pub calm_threshold: f64,
    /// 연쇄 분석 창 크기 (0 = 안 함)
    #[serde(default)]
    pub window_size: usize,
    /// 연쇄 분석 계산 방식
    #[serde(default)]
    pub window_strategy: WindowStrategy,
    /// 줄 단위 결과 출력 여부
    #[serde(default = "default_line_mode")]
    pub line_mode: bool,
    /// 라벨 언어
    #[serde(default)]
    pub language: Language,
}

fn default_tone_threshold() -> f64 {
    DEFAULT_TONE_THRESHOLD
}

fn default_calm_threshold() -> f64 {
    DEFAULT_CALM_THRESHOLD
}

fn default_line_mode() -> bool {
    true
}

impl Default for MoodSettings {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            diphthong_policy: DiphthongPolicy::default(),
            tone_threshold: default_tone_threshold(),
            calm_threshold: default_calm_threshold(),
            window_size: 0,
            window_strategy: WindowStrategy::default(),
            line_mode: default_line_mode(),
            language: Language::default(),
        }
    }
}

impl MoodSettings {
    /// 분석 엔진 설정으로 변환
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new()
            .with_alphabet(self.alphabet)
            .with_policy(self.diphthong_policy)
            .with_thresholds(MoodThresholds::new(self.tone_threshold, self.calm_threshold))
            .with_window(self.window_size)
            .with_strategy(self.window_strategy)
    }
}

/// 설정 파일 경로: ~/.config/moeum/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("moeum").join("config.json")
}

/// 지정한 경로에서 설정 읽기
pub fn load_config_from(path: &Path) -> Result<MoodSettings, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> MoodSettings {
    let path = config_path();
    match load_config_from(&path) {
        Ok(settings) => settings,
        Err(ConfigError::IoError(_)) => MoodSettings::default(),
        Err(e) => {
            log::warn!("{} ({}), 기본 설정 사용", e, path.display());
            MoodSettings::default()
        }
    }
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(path: &Path, settings: &MoodSettings) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// 설정 파일 저장
pub fn save_config(settings: &MoodSettings) -> Result<(), ConfigError> {
    save_config_to(&config_path(), settings)
}
