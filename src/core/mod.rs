//! 한글 분해와 모음 분류의 기초 요소

pub mod decomposer;
pub mod unicode;
pub mod vowel;

pub use decomposer::{decompose_vowels, Decomposer, VowelSequence};
pub use vowel::{Alphabet, Category, DiphthongPolicy, Vowel, VowelCategoryTable, VOWEL_COUNT};
