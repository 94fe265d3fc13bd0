//! Suffix table for light Hindi stemming.
//!
//! Inflectional endings for verbs (future, habitual, participles, imperatives)
//! and nouns (plural and oblique case) grouped into tiers by code-point length,
//! after the tiered suffix lists of Ramanathan & Rao's lightweight stemmer.
//! Tiers are stored longest first; that order is the match priority.

/// All suffixes of one code-point length.
#[derive(Debug)]
pub struct SuffixTier {
    /// Code-point length shared by every suffix in the tier.
    pub len: usize,
    pub suffixes: &'static [&'static str],
}

impl SuffixTier {
    /// Shortest term this tier may strip: the stem keeps at least two code points.
    pub const fn min_source_len(&self) -> usize {
        self.len + 2
    }

    pub fn applies_to(&self, char_len: usize) -> bool {
        char_len > self.len + 1
    }

    /// The tier suffix `term` ends with, if any.
    ///
    /// Byte-wise `ends_with` on valid UTF-8 only succeeds on a whole-character
    /// boundary, so this is equivalent to comparing trailing code points.
    pub fn matching_suffix(&self, term: &str) -> Option<&'static str> {
        self.suffixes.iter().copied().find(|s| term.ends_with(*s))
    }
}

pub static TIERS: [SuffixTier; 5] = [
    SuffixTier {
        len: 5,
        suffixes: &[
            "ाएंगी",
            "ाएंगे",
            "ाऊंगी",
            "ाऊंगा",
            "ाइयाँ",
            "ाइयों",
            "ाइयां",
        ],
    },
    SuffixTier {
        len: 4,
        suffixes: &[
            "ाएगी",
            "ाएगा",
            "ाओगी",
            "ाओगे",
            "एंगी",
            "ेंगी",
            "एंगे",
            "ेंगे",
            "ूंगी",
            "ूंगा",
            "ातीं",
            "नाओं",
            "नाएं",
            "ताओं",
            "ताएं",
            "ियाँ",
            "ियों",
            "ियां",
        ],
    },
    SuffixTier {
        len: 3,
        suffixes: &[
            "ाकर",
            "ाइए",
            "ाईं",
            "ाया",
            "ेगी",
            "ेगा",
            "ोगी",
            "ोगे",
            "ाने",
            "ाना",
            "ाते",
            "ाती",
            "ाता",
            "तीं",
            "ाओं",
            "ाएं",
            "ुओं",
            "ुएं",
            "ुआं",
        ],
    },
    SuffixTier {
        len: 2,
        suffixes: &[
            "कर",
            "ाओ",
            "िए",
            "ाई",
            "ाए",
            "ने",
            "नी",
            "ना",
            "ते",
            "ीं",
            "ती",
            "ता",
            "ाँ",
            "ां",
            "ों",
            "ें",
        ],
    },
    SuffixTier {
        len: 1,
        suffixes: &[
            "ो",
            "े",
            "ू",
            "ु",
            "ी",
            "ि",
            "ा",
        ],
    },
];

pub fn tier(len: usize) -> Option<&'static SuffixTier> {
    TIERS.iter().find(|t| t.len == len)
}

pub fn rule_count() -> usize {
    TIERS.iter().map(|t| t.suffixes.len()).sum()
}
