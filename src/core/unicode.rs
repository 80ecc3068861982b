//! 유니코드 한글 분해 유틸리티 (NFD)

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 첫가끝 초성 시작 코드포인트 (ᄀ)
const CHOSEONG_BASE: u32 = 0x1100;
/// 첫가끝 중성 시작 코드포인트 (ᅡ)
const JUNGSEONG_BASE: u32 = 0x1161;
/// 첫가끝 종성 시작 코드포인트 - 1 (종성 인덱스 0 = 종성 없음)
const JONGSEONG_BASE: u32 = 0x11A7;

/// 호환용 모음 자모 시작 코드포인트 (ㅏ)
const COMPAT_VOWEL_BASE: u32 = 0x314F;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 완성형 한글 한 글자를 첫가끝 자모 코드포인트 열로 분해
///
/// 완성형이 아니면 None. 반환 배열의 세 번째 값은 종성이 없으면 None
pub fn decompose_to_jamo(c: char) -> Option<[Option<char>; 3]> {
    let (cho, jung, jong) = decompose_syllable(c)?;
    debug_assert!(cho < CHOSEONG_COUNT);
    let lead = char::from_u32(CHOSEONG_BASE + cho);
    let vowel = char::from_u32(JUNGSEONG_BASE + jung);
    let tail = if jong == 0 {
        None
    } else {
        char::from_u32(JONGSEONG_BASE + jong)
    };
    Some([lead, vowel, tail])
}

/// 문자열의 정준 분해 (NFD)
///
/// 완성형 한글 음절만 초성+중성(+종성) 첫가끝 자모로 풀어 쓰고,
/// 나머지 문자는 그대로 둔다. 이미 분해된 문자열에 다시 적용해도 결과가 같다.
pub fn decompose_str(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 3);
    for c in text.chars() {
        match decompose_to_jamo(c) {
            Some(parts) => result.extend(parts.into_iter().flatten()),
            None => result.push(c),
        }
    }
    result
}

/// 첫가끝 중성 코드포인트(U+1161 ~ U+1175)를 중성 인덱스로 변환
pub fn jungseong_index(c: char) -> Option<u32> {
    let code = c as u32;
    if (JUNGSEONG_BASE..JUNGSEONG_BASE + JUNGSEONG_COUNT).contains(&code) {
        Some(code - JUNGSEONG_BASE)
    } else {
        None
    }
}

/// 복합 모음을 두 중성으로 분리
pub fn split_jungseong(jung: u32) -> Option<(u32, u32)> {
    match jung {
        9 => Some((8, 0)),    // ㅘ -> ㅗ + ㅏ
        10 => Some((8, 1)),   // ㅙ -> ㅗ + ㅐ
        11 => Some((8, 20)),  // ㅚ -> ㅗ + ㅣ
        14 => Some((13, 4)),  // ㅝ -> ㅜ + ㅓ
        15 => Some((13, 5)),  // ㅞ -> ㅜ + ㅔ
        16 => Some((13, 20)), // ㅟ -> ㅜ + ㅣ
        19 => Some((18, 20)), // ㅢ -> ㅡ + ㅣ
        _ => None,
    }
}

/// 중성 인덱스에 해당하는 모음 문자 반환 (호환용 자모)
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    if jung < JUNGSEONG_COUNT {
        // 호환용 모음 자모는 중성 순서와 같다: ㅏ(0x314F) ~ ㅣ(0x3163)
        char::from_u32(COMPAT_VOWEL_BASE + jung)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable('각'), Some((0, 0, 1)));
        assert_eq!(decompose_syllable('한'), Some((18, 0, 4)));
        assert_eq!(decompose_syllable('글'), Some((0, 18, 8)));
        assert_eq!(decompose_syllable('힣'), Some((18, 20, 27)));

        // 한글이 아닌 문자
        assert_eq!(decompose_syllable('a'), None);
        assert_eq!(decompose_syllable('ㅏ'), None);
        assert_eq!(decompose_syllable('\u{1161}'), None);
    }

    #[test]
    fn test_decompose_to_jamo() {
        assert_eq!(
            decompose_to_jamo('아'),
            Some([Some('\u{110B}'), Some('\u{1161}'), None])
        );
        assert_eq!(
            decompose_to_jamo('한'),
            Some([Some('\u{1112}'), Some('\u{1161}'), Some('\u{11AB}')])
        );
        assert_eq!(decompose_to_jamo('x'), None);
    }

    #[test]
    fn test_decompose_str() {
        assert_eq!(decompose_str("아"), "\u{110B}\u{1161}");
        assert_eq!(decompose_str("a 한!"), "a \u{1112}\u{1161}\u{11AB}!");
        assert_eq!(decompose_str(""), "");
    }

    #[test]
    fn test_decompose_str_idempotent() {
        for text in ["안녕하세요", "봄인사를 건네줘요", "hello 세계", "ㅏㅓ", ""] {
            let once = decompose_str(text);
            assert_eq!(decompose_str(&once), once, "'{}' 재분해 결과가 달라짐", text);
        }
    }

    #[test]
    fn test_jungseong_index() {
        assert_eq!(jungseong_index('\u{1161}'), Some(0)); // ᅡ
        assert_eq!(jungseong_index('\u{1175}'), Some(20)); // ᅵ
        assert_eq!(jungseong_index('\u{1176}'), None); // 옛한글 중성
        assert_eq!(jungseong_index('\u{1100}'), None); // 초성 ᄀ
        assert_eq!(jungseong_index('ㅏ'), None); // 호환용 자모
    }

    #[test]
    fn test_split_jungseong() {
        assert_eq!(split_jungseong(9), Some((8, 0))); // ㅘ -> ㅗ + ㅏ
        assert_eq!(split_jungseong(16), Some((13, 20))); // ㅟ -> ㅜ + ㅣ
        assert_eq!(split_jungseong(19), Some((18, 20))); // ㅢ -> ㅡ + ㅣ

        // 단모음은 분리 불가
        assert_eq!(split_jungseong(0), None); // ㅏ
        assert_eq!(split_jungseong(2), None); // ㅑ
        assert_eq!((0..JUNGSEONG_COUNT).filter(|j| split_jungseong(*j).is_some()).count(), 7);
    }

    #[test]
    fn test_jungseong_to_jamo_char() {
        assert_eq!(jungseong_to_jamo_char(0), Some('ㅏ'));
        assert_eq!(jungseong_to_jamo_char(8), Some('ㅗ'));
        assert_eq!(jungseong_to_jamo_char(19), Some('ㅢ'));
        assert_eq!(jungseong_to_jamo_char(20), Some('ㅣ'));
        assert_eq!(jungseong_to_jamo_char(21), None);
    }
}
