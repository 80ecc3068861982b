//! 중성(모음) 기호와 밝음/어둠/중성 분류표

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use super::unicode::{jungseong_index, split_jungseong};

/// 한글 중성 21자 (중성 인덱스 순서)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Vowel {
    A,   // ㅏ
    Ae,  // ㅐ
    Ya,  // ㅑ
    Yae, // ㅒ
    Eo,  // ㅓ
    E,   // ㅔ
    Yeo, // ㅕ
    Ye,  // ㅖ
    O,   // ㅗ
    Wa,  // ㅘ
    Wae, // ㅙ
    Oe,  // ㅚ
    Yo,  // ㅛ
    U,   // ㅜ
    Wo,  // ㅝ
    We,  // ㅞ
    Wi,  // ㅟ
    Yu,  // ㅠ
    Eu,  // ㅡ
    Ui,  // ㅢ
    I,   // ㅣ
}

/// 모음 개수
pub const VOWEL_COUNT: usize = 21;

impl Vowel {
    /// 중성 인덱스 순서의 전체 모음
    pub const ALL: [Vowel; VOWEL_COUNT] = [
        Vowel::A,
        Vowel::Ae,
        Vowel::Ya,
        Vowel::Yae,
        Vowel::Eo,
        Vowel::E,
        Vowel::Yeo,
        Vowel::Ye,
        Vowel::O,
        Vowel::Wa,
        Vowel::Wae,
        Vowel::Oe,
        Vowel::Yo,
        Vowel::U,
        Vowel::Wo,
        Vowel::We,
        Vowel::Wi,
        Vowel::Yu,
        Vowel::Eu,
        Vowel::Ui,
        Vowel::I,
    ];

    /// 표시용 기호 (호환용 자모 ㅏ ~ ㅣ)
    const SYMBOLS: [&'static str; VOWEL_COUNT] = [
        "ㅏ", "ㅐ", "ㅑ", "ㅒ", "ㅓ", "ㅔ", "ㅕ", "ㅖ", "ㅗ", "ㅘ", "ㅙ",
        "ㅚ", "ㅛ", "ㅜ", "ㅝ", "ㅞ", "ㅟ", "ㅠ", "ㅡ", "ㅢ", "ㅣ",
    ];

    /// 중성 인덱스(0~20)에서 모음 생성
    pub fn from_index(index: u32) -> Option<Vowel> {
        Self::ALL.get(index as usize).copied()
    }

    /// 첫가끝 중성 코드포인트(U+1161 ~ U+1175)에서 모음 생성
    pub fn from_jungseong(c: char) -> Option<Vowel> {
        jungseong_index(c).and_then(Self::from_index)
    }

    /// 중성 인덱스
    pub fn index(self) -> usize {
        self as usize
    }

    /// 표시용 기호 문자열
    pub fn symbol(self) -> &'static str {
        Self::SYMBOLS[self.index()]
    }

    /// 복합 모음(ㅘㅙㅚㅝㅞㅟㅢ) 여부
    pub fn is_diphthong(self) -> bool {
        self.components().is_some()
    }

    /// 복합 모음을 (앞 모음, 뒤 모음)으로 분리
    pub fn components(self) -> Option<(Vowel, Vowel)> {
        let (first, second) = split_jungseong(self as u32)?;
        Some((Self::from_index(first)?, Self::from_index(second)?))
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for Vowel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// 모음 계열
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// 양성 (밝음)
    Bright,
    /// 음성 (어둠)
    Dark,
    /// 중성
    Neutral,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Bright, Category::Dark, Category::Neutral];

    /// 카운트 배열 인덱스
    pub fn index(self) -> usize {
        self as usize
    }
}

/// 분석에 사용할 모음 자모 집합
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// 21자 전체 (단모음 + 이중모음)
    #[default]
    Full,
    /// 복합 모음 7자를 제외한 14자
    Simple,
}

impl Alphabet {
    /// 모음이 이 자모 집합에 속하는지 확인
    pub fn contains(self, vowel: Vowel) -> bool {
        match self {
            Alphabet::Full => true,
            Alphabet::Simple => !vowel.is_diphthong(),
        }
    }
}

/// 복합 모음의 계열 배정 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiphthongPolicy {
    /// 앞 모음을 따름 (ㅘㅙㅚ 밝음, ㅝㅞㅟ 어둠, ㅢ 중성)
    #[default]
    Leading,
    /// 뒤 모음을 따름 (ㅘㅙ 밝음, ㅝㅞ 어둠, ㅚㅟㅢ 중성)
    Trailing,
    /// 모든 복합 모음을 중성으로
    Neutral,
}

/// 기본 계열표 (복합 모음은 앞 모음 기준)
const fn base_category(vowel: Vowel) -> Category {
    match vowel {
        Vowel::A | Vowel::Ae | Vowel::Ya | Vowel::Yae | Vowel::O | Vowel::Yo => Category::Bright,
        Vowel::Eo | Vowel::E | Vowel::Yeo | Vowel::Ye | Vowel::U | Vowel::Yu => Category::Dark,
        Vowel::Eu | Vowel::I => Category::Neutral,
        Vowel::Wa | Vowel::Wae | Vowel::Oe => Category::Bright,
        Vowel::Wo | Vowel::We | Vowel::Wi => Category::Dark,
        Vowel::Ui => Category::Neutral,
    }
}

/// 모음 → 계열 분류표
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VowelCategoryTable {
    policy: DiphthongPolicy,
}

impl VowelCategoryTable {
    pub const fn new(policy: DiphthongPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> DiphthongPolicy {
        self.policy
    }

    /// 모음의 계열 (21자 전체에 대해 정의됨)
    pub fn category(&self, vowel: Vowel) -> Category {
        match (self.policy, vowel.components()) {
            (_, None) | (DiphthongPolicy::Leading, Some(_)) => base_category(vowel),
            (DiphthongPolicy::Trailing, Some((_, second))) => base_category(second),
            (DiphthongPolicy::Neutral, Some(_)) => Category::Neutral,
        }
    }
}
