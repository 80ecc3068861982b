//! 모음 분포 집계와 비율 지표 계산

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::core::vowel::{Category, Vowel, VowelCategoryTable, VOWEL_COUNT};

/// 모음별 출현 횟수
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Distribution {
    counts: [usize; VOWEL_COUNT],
}

impl Distribution {
    /// 모음 열을 집계
    pub fn from_vowels(vowels: &[Vowel]) -> Self {
        let mut counts = [0usize; VOWEL_COUNT];
        for vowel in vowels {
            counts[vowel.index()] += 1;
        }
        Self { counts }
    }

    /// 특정 모음의 출현 횟수
    pub fn count(&self, vowel: Vowel) -> usize {
        self.counts[vowel.index()]
    }

    /// 전체 모음 수
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// 한 번 이상 나온 모음과 횟수 (모음 순서)
    pub fn iter(&self) -> impl Iterator<Item = (Vowel, usize)> + '_ {
        Vowel::ALL
            .into_iter()
            .map(|vowel| (vowel, self.count(vowel)))
            .filter(|(_, count)| *count > 0)
    }

    /// 분류표에 따른 계열별 합계
    pub fn category_counts(&self, table: &VowelCategoryTable) -> CategoryCounts {
        let mut counts = CategoryCounts::default();
        for (vowel, count) in self.iter() {
            counts.add(table.category(vowel), count);
        }
        counts
    }
}

impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (vowel, count) in self.iter() {
            map.serialize_entry(vowel.symbol(), &count)?;
        }
        map.end()
    }
}

/// 밝음/어둠/중성 계열별 모음 수
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryCounts {
    counts: [usize; 3],
}

impl CategoryCounts {
    pub fn new(bright: usize, dark: usize, neutral: usize) -> Self {
        Self {
            counts: [bright, dark, neutral],
        }
    }

    pub fn get(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// 계열에 n개 추가
    pub fn add(&mut self, category: Category, n: usize) {
        self.counts[category.index()] += n;
    }

    /// 계열에서 n개 제거 (0 아래로 내려가지 않음)
    pub fn remove(&mut self, category: Category, n: usize) {
        let slot = &mut self.counts[category.index()];
        *slot = slot.saturating_sub(n);
    }

    /// 비율 지표 계산. 모음이 없으면 모두 0인 지표
    pub fn metrics(&self) -> Metrics {
        let total = self.total();
        if total == 0 {
            return Metrics::ZERO;
        }

        let total = total as f64;
        let bright_ratio = self.get(Category::Bright) as f64 / total;
        let dark_ratio = self.get(Category::Dark) as f64 / total;
        let neutral_ratio = self.get(Category::Neutral) as f64 / total;

        Metrics {
            bright_ratio,
            dark_ratio,
            neutral_ratio,
            bright_index: bright_ratio - dark_ratio,
            neutrality: neutral_ratio,
        }
    }
}

/// 비율 지표
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Metrics {
    /// 밝음계 비율 (0.0 ~ 1.0)
    pub bright_ratio: f64,
    /// 어둠계 비율 (0.0 ~ 1.0)
    pub dark_ratio: f64,
    /// 중성계 비율 (0.0 ~ 1.0)
    pub neutral_ratio: f64,
    /// 밝음 - 어둠 (-1.0 ~ 1.0)
    pub bright_index: f64,
    /// 중성 비율
    pub neutrality: f64,
}

impl Metrics {
    /// 모음이 없을 때의 지표
    pub const ZERO: Metrics = Metrics {
        bright_ratio: 0.0,
        dark_ratio: 0.0,
        neutral_ratio: 0.0,
        bright_index: 0.0,
        neutrality: 0.0,
    };
}

/// 한 모음 열의 집계 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Score {
    /// 모음별 출현 횟수
    pub distribution: Distribution,
    /// 전체 모음 수
    pub total: usize,
    /// 비율 지표
    pub metrics: Metrics,
}

impl Score {
    pub fn bright_ratio(&self) -> f64 {
        self.metrics.bright_ratio
    }

    pub fn dark_ratio(&self) -> f64 {
        self.metrics.dark_ratio
    }

    pub fn neutral_ratio(&self) -> f64 {
        self.metrics.neutral_ratio
    }

    pub fn bright_index(&self) -> f64 {
        self.metrics.bright_index
    }

    pub fn neutrality(&self) -> f64 {
        self.metrics.neutrality
    }
}

/// 분류표를 적용하는 집계기
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scorer {
    table: VowelCategoryTable,
}

impl Scorer {
    pub fn new(table: VowelCategoryTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &VowelCategoryTable {
        &self.table
    }

    /// 모음 열의 계열별 합계
    pub fn category_counts(&self, vowels: &[Vowel]) -> CategoryCounts {
        let mut counts = CategoryCounts::default();
        for vowel in vowels {
            counts.add(self.table.category(*vowel), 1);
        }
        counts
    }

    /// 모음 열 집계
    pub fn score(&self, vowels: &[Vowel]) -> Score {
        let distribution = Distribution::from_vowels(vowels);
        let total = distribution.total();
        let metrics = if total == 0 {
            Metrics::ZERO
        } else {
            distribution.category_counts(&self.table).metrics()
        };

        Score {
            distribution,
            total,
            metrics,
        }
    }
}

/// 기본 분류표로 모음 열 집계
///
/// # Examples
/// ```
/// use moeum::core::decompose_vowels;
/// use moeum::mood::score_distribution;
///
/// let score = score_distribution(&decompose_vowels("아"));
/// assert_eq!(score.total, 1);
/// assert_eq!(score.bright_index(), 1.0);
/// ```
pub fn score_distribution<S: AsRef<[Vowel]> + ?Sized>(seq: &S) -> Score {
    Scorer::default().score(seq.as_ref())
}
