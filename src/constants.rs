//! Category constants shared by the catalog and the aggregator.
//! Category ids are fixed; anything else maps to an empty list.

pub const TOP_10_ID: i32 = 1;
pub const TOP_10_NAME: &str = "Top 10";

pub const CONTINUE_WATCHING_ID: i32 = 2;
pub const CONTINUE_WATCHING_NAME: &str = "Continue Watching";

// Positions into the built-in title list
pub const CONTINUE_WATCHING_POSITIONS: [usize; 3] = [9, 7, 0];

/// Placeholder returned whenever artwork generation fails
pub const FALLBACK_ARTWORK_URL: &str = "default_artwork_url";

/// Titles served by the built-in catalog, in display order
pub const BUILTIN_TITLES: [&str; 10] = [
    "The Witcher",
    "Wednesday",
    "Sweet Tooth",
    "Black Mirror",
    "Sex Education",
    "Manifest",
    "Love is Blind",
    "You",
    "Receiver",
    "The Last Dance",
];
