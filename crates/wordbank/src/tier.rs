use std::time::Duration;

/// Time the player gets to spell each word, in every tier.
pub const WORD_TIME_LIMIT: Duration = Duration::from_secs(5);

/// Words fetched beyond the streak to absorb filtering loss.
const FETCH_MARGIN: usize = 15;
/// Below this many spare words a catalog fetch is reported as thin.
const WARNING_MARGIN: usize = 5;

/// Where the words for a tier come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSource {
    /// Unauthenticated random words, later enriched through the dictionary.
    Random { min_length: usize, max_length: usize },
    /// Authenticated leveled catalog; words arrive with their metadata.
    Catalog { min_level: u32, max_level: u32 },
}

/// The difficulty bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Levels 1 to 5.
    Starter,
    /// Levels 6 to 10.
    Intermediate,
    /// Levels 11 to 15.
    Advanced,
    /// Levels 16 and up. Non-positive levels land here too.
    Expert,
}

impl Tier {
    pub fn for_level(level: i64) -> Self {
        match level {
            1..=5 => Tier::Starter,
            6..=10 => Tier::Intermediate,
            11..=15 => Tier::Advanced,
            _ => Tier::Expert,
        }
    }

    pub fn required_streak(self) -> usize {
        match self {
            Tier::Starter => 5,
            Tier::Intermediate => 7,
            Tier::Advanced => 10,
            Tier::Expert => 12,
        }
    }

    pub fn source(self) -> WordSource {
        match self {
            Tier::Starter => WordSource::Random {
                min_length: 5,
                max_length: 7,
            },
            Tier::Intermediate => WordSource::Catalog {
                min_level: 1,
                max_level: 3,
            },
            Tier::Advanced => WordSource::Catalog {
                min_level: 4,
                max_level: 6,
            },
            Tier::Expert => WordSource::Catalog {
                min_level: 7,
                max_level: 9,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierConfig {
    pub level: i64,
    pub tier: Tier,
    pub required_streak: usize,
    pub time_limit: Duration,
    pub source: WordSource,
}

impl TierConfig {
    /// How many playable words to aim for.
    pub fn word_fetch_count(&self) -> usize {
        self.required_streak + FETCH_MARGIN
    }

    pub fn catalog_warning_floor(&self) -> usize {
        self.required_streak + WARNING_MARGIN
    }

    /// Whether `playable` words leave too little slack over the streak.
    pub fn is_short_of_words(&self, playable: usize) -> bool {
        playable < self.catalog_warning_floor()
    }
}

pub fn tier_config(level: i64) -> TierConfig {
    let tier = Tier::for_level(level);
    TierConfig {
        level,
        tier,
        required_streak: tier.required_streak(),
        time_limit: WORD_TIME_LIMIT,
        source: tier.source(),
    }
}
