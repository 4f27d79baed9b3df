//! Static phrase banks used by the content synthesizer.
//!
//! Everything here is immutable process-wide data. Wording is cosmetic;
//! the shapes (four stop openers, three share openers, four CTA lines per
//! language) are what the generator relies on.

use crate::request::Language;

/// Per-language phrase table.
#[derive(Debug)]
pub struct PhraseBank {
    /// Scroll-stopping openers used at the start of a hook.
    pub stop: &'static [&'static str],
    /// Share prompts used as the first caption line.
    pub share: &'static [&'static str],
    /// Call-to-action lines.
    pub cta: &'static [&'static str],
    /// Tail of the "hidden truth" hook, appended after the topic.
    pub truth_hook: &'static str,
    /// Script opener; `{topic}` is replaced with the topic.
    pub script_prefix: &'static str,
    /// Closing line of every script.
    pub script_bonus: &'static str,
    /// Thumbnail emphasis label.
    pub thumbnail_label: &'static str,
}

static EN: PhraseBank = PhraseBank {
    stop: &["Stop scrolling!", "Wait 3 seconds.", "Hold up!", "Don't miss this."],
    share: &["Share this with a friend!", "Send this to your group.", "Save + Share!"],
    cta: &[
        "Follow for daily actionable nuggets.",
        "Like + Save for part 2.",
        "Comment 'MORE' and I'll drop the list.",
        "Tag a friend who needs this!",
    ],
    truth_hook: "the truth nobody tells you?",
    script_prefix: "Fast breakdown on {topic}:",
    script_bonus: "Bonus: A simple template you can apply now.",
    thumbnail_label: "FACTS",
};

static HING: PhraseBank = PhraseBank {
    stop: &["Ruko zara!", "Ek sec ruk jao!", "Listen yaar!", "Wait, yeh zaroor suno!"],
    share: &["Dost ko bhejo!", "Group me daal do!", "Save + Share karo!"],
    cta: &[
        "Roz aise hi tactical tips ke liye follow karo.",
        "Like + Save karo, Part 2 aa raha hai!",
        "Comment 'MORE' aur full list milegi.",
        "Us dost ko tag karo jise yeh chahiye!",
    ],
    truth_hook: "ka sach jo koi nahi batata?",
    script_prefix: "{topic} ka fast breakdown:",
    script_bonus: "Bonus: Ek simple template jo abhi apply ho sakta hai.",
    thumbnail_label: "SACH",
};

static HI: PhraseBank = PhraseBank {
    stop: &["Rukiye!", "Bas 3 second!", "Dhyan dijiye!", "Isse miss mat kijiye."],
    share: &["Doston ke saath baantien!", "Group me bhejein!", "Save + Share karein!"],
    cta: &[
        "Roz ke practical tips ke liye follow kijiye.",
        "Like + Save kijiye, Part 2 jaldi aayega.",
        "Comment 'MORE' karen, poori list dunga.",
        "Jise zarurat ho use tag karein!",
    ],
    truth_hook: "ka sach jo koi nahi batata?",
    script_prefix: "{topic} ke bare me fast breakdown:",
    script_bonus: "Bonus: Ek simple template jo abhi apply ho sakta hai.",
    thumbnail_label: "SACH",
};

/// Look up the phrase table for a language.
pub fn bank(language: Language) -> &'static PhraseBank {
    match language {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::Hing => &HING,
    }
}

/// Generic hashtags appended after topic, niche, and platform tags.
pub const BASE_HASHTAGS: &[&str] = &[
    "viral",
    "reels",
    "shorts",
    "tiktok",
    "content",
    "creator",
    "algorithm",
    "growth",
    "2025",
];

/// Keywords used to pad short keyword lists up to the minimum.
pub const KEYWORD_FILLERS: &[&str] = &[
    "viral",
    "trending",
    "tips",
    "shorts",
    "reels",
    "creator",
    "growth",
    "howto",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_full_pools() {
        for lang in [Language::En, Language::Hi, Language::Hing] {
            let b = bank(lang);
            assert_eq!(b.stop.len(), 4, "{lang:?} stop");
            assert_eq!(b.share.len(), 3, "{lang:?} share");
            assert_eq!(b.cta.len(), 4, "{lang:?} cta");
            assert!(b.script_prefix.contains("{topic}"), "{lang:?} prefix");
        }
    }

    #[test]
    fn fillers_cover_the_keyword_minimum() {
        // A topic with no alphanumeric tokens must still reach 8 keywords.
        assert!(KEYWORD_FILLERS.len() >= 8);
    }
}
