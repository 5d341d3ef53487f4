//! Category word pools and the level-driven word selection rule.

use std::{fmt::Display, str::FromStr};

use log::warn;
use rand::{seq::SliceRandom, Rng};

/// Words are never chosen beyond this count, whatever the level.
pub const MAX_WORDS: usize = 20;

/// Number of words at level 0.
pub const BASE_WORDS: usize = 10;

const KIDS: [&str; 20] = [
    "CAT", "DOG", "BALL", "TREE", "SUN", "BIRD", "FISH", "BOOK", "STAR", "MOON", "HAT", "CAKE",
    "FROG", "KITE", "SHIP", "BEAR", "DUCK", "LION", "APPLE", "HOUSE",
];

const TEENAGERS: [&str; 20] = [
    "SCHOOL", "FRIEND", "MUSIC", "PHONE", "GAME", "SPORT", "MOVIE", "DANCE", "PARTY", "STYLE",
    "SOCIAL", "HOBBY", "STUDY", "TREND", "PIZZA", "BEACH", "SELFIE", "CRUSH", "DRAMA", "SQUAD",
];

const ADULTS: [&str; 20] = [
    "CAREER",
    "FINANCE",
    "HEALTH",
    "TRAVEL",
    "FAMILY",
    "INVEST",
    "GARDEN",
    "RECIPE",
    "HOBBY",
    "LEARN",
    "BUDGET",
    "EXERCISE",
    "CULTURE",
    "POLITICS",
    "SCIENCE",
    "HISTORY",
    "COOKING",
    "READING",
    "NATURE",
    "TECHNOLOGY",
];

/// The audience a puzzle's words are drawn for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Short everyday words, at most five letters.
    Kids,

    /// School and social life.
    Teenagers,

    /// Work, money and home; includes the longest words.
    Adults,
}

impl Category {
    /// All categories, in the order they are offered to players.
    pub const ALL: [Category; 3] = [Category::Kids, Category::Teenagers, Category::Adults];

    /// The full word pool of this category.
    pub fn words(&self) -> &'static [&'static str] {
        match self {
            Category::Kids => &KIDS,
            Category::Teenagers => &TEENAGERS,
            Category::Adults => &ADULTS,
        }
    }

    /// The lowercase name used in puzzle descriptors.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Kids => "kids",
            Category::Teenagers => "teenagers",
            Category::Adults => "adults",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a name that isn't one of [Category::ALL].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl Display for UnknownCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown category {:?}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// How many words a puzzle at `level` uses when the pool has `pool_size` words.
///
/// One extra word every ten levels, starting from [BASE_WORDS] and capped at [MAX_WORDS] and at the pool size.
pub fn word_count(level: u32, pool_size: usize) -> usize {
    let by_level = BASE_WORDS.saturating_add((level / 10) as usize);
    by_level.min(MAX_WORDS).min(pool_size)
}

/// Picks the words for a puzzle: the category pool is shuffled with `rng` and the first [word_count] words are kept.
///
/// An unknown category yields an empty list. Callers should treat that as a configuration error rather than
/// render an empty puzzle.
pub fn select_words<R: Rng + ?Sized>(category: &str, level: u32, rng: &mut R) -> Vec<String> {
    let Ok(category) = category.parse::<Category>() else {
        warn!("No word pool for category {:?}", category);
        return Vec::new();
    };

    let mut pool: Vec<&str> = category.words().to_vec();
    pool.shuffle(rng);

    let count = word_count(level, pool.len());
    pool.into_iter().take(count).map(String::from).collect()
}
