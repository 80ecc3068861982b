//! 텍스트 → 모음 열 추출기
//!
//! NFD 분해 후 중성(모음) 코드포인트만 남겨 표시용 모음 기호로 바꾼다.

use serde::Serialize;
use std::fmt;

use super::unicode::decompose_str;
use super::vowel::{Alphabet, Vowel};

/// 원문 순서대로 추출된 모음 열 (생성 후 불변)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VowelSequence(Vec<Vowel>);

impl VowelSequence {
    /// 빈 모음 열
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn as_slice(&self) -> &[Vowel] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vowel> {
        self.0.iter()
    }

    /// 여러 줄의 모음 열을 원문 순서대로 이어 붙임
    pub fn concat<'a>(parts: impl IntoIterator<Item = &'a VowelSequence>) -> Self {
        parts.into_iter().flat_map(|seq| seq.iter().copied()).collect()
    }
}

impl From<Vec<Vowel>> for VowelSequence {
    fn from(vowels: Vec<Vowel>) -> Self {
        Self(vowels)
    }
}

impl FromIterator<Vowel> for VowelSequence {
    fn from_iter<I: IntoIterator<Item = Vowel>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a VowelSequence {
    type Item = &'a Vowel;
    type IntoIter = std::slice::Iter<'a, Vowel>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl AsRef<[Vowel]> for VowelSequence {
    fn as_ref(&self) -> &[Vowel] {
        &self.0
    }
}

impl fmt::Display for VowelSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vowel in &self.0 {
            f.write_str(vowel.symbol())?;
        }
        Ok(())
    }
}

/// 모음 추출기
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decomposer {
    alphabet: Alphabet,
}

impl Decomposer {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// 한 줄에서 모음 열 추출
    ///
    /// 자음, 호환용 자모, 문장부호, 다른 문자는 모두 버린다.
    pub fn decompose(&self, line: &str) -> VowelSequence {
        decompose_str(line)
            .chars()
            .filter_map(Vowel::from_jungseong)
            .filter(|vowel| self.alphabet.contains(*vowel))
            .collect()
    }
}

/// 기본 자모 집합(21자)으로 한 줄의 모음 열 추출
///
/// # Examples
/// ```
/// use moeum::core::decomposer::decompose_vowels;
/// assert_eq!(decompose_vowels("아").to_string(), "ㅏ");
/// assert_eq!(decompose_vowels("좋아요").to_string(), "ㅗㅏㅛ");
/// assert!(decompose_vowels("").is_empty());
/// ```
pub fn decompose_vowels(line: &str) -> VowelSequence {
    Decomposer::default().decompose(line)
}
