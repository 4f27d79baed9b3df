//! Template-based content synthesizer.
//!
//! Each topic becomes one [`ContentItem`] built from phrase-bank lookups and
//! string interpolation. All random choices go through the caller's
//! [`Rng`], so a seeded generator (e.g. `StdRng::seed_from_u64`) gives
//! reproducible output.

use rand::Rng;

use crate::content::ContentItem;
use crate::phrases::{self, BASE_HASHTAGS, KEYWORD_FILLERS};
use crate::request::{GenerationRequest, Language, Level, Tone};
use crate::topics::unique;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Speaking pace for short-form video, in words per second.
pub const WORDS_PER_SECOND: f64 = 2.5;
pub const MIN_SCRIPT_WORDS: u32 = 30;
pub const MAX_SCRIPT_WORDS: u32 = 140;
/// Approximate words covered by one script bullet.
pub const WORDS_PER_BULLET: f64 = 35.0;
pub const MIN_BULLETS: u32 = 3;
pub const MAX_BULLETS: u32 = 6;

pub const MAX_HASHTAGS: usize = 15;
pub const MIN_KEYWORDS: usize = 8;
pub const MAX_KEYWORDS: usize = 12;
/// Characters of the topic kept in the thumbnail text.
pub const THUMBNAIL_TOPIC_CHARS: usize = 22;

const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
pub const ID_LENGTH: usize = 6;

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Build one content item per topic.
pub fn generate_content<R: Rng + ?Sized>(
    topics: &[String],
    request: &GenerationRequest,
    rng: &mut R,
) -> Vec<ContentItem> {
    topics
        .iter()
        .map(|raw| generate_item(&normalize_whitespace(raw), request, rng))
        .collect()
}

fn generate_item<R: Rng + ?Sized>(
    topic: &str,
    request: &GenerationRequest,
    rng: &mut R,
) -> ContentItem {
    let niche = request.niche.trim();

    ContentItem {
        id: short_id(rng),
        title: format!("{topic} | {}", request.tone),
        language: request.language,
        duration_sec: request.duration_sec,
        platforms: request.platforms.clone(),
        hooks: make_hooks(topic, niche, request, rng),
        script: make_script(topic, request.language, request.duration_sec, request.tone),
        caption: make_caption(topic, niche, request.language, rng),
        keywords: make_keywords(topic, niche),
        hashtags: make_hashtags(topic, niche, &request.platforms),
        thumbnail_text: make_thumbnail(topic, request.language),
        cta: pick_cta(request.language, rng),
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Four or five distinct hook variants in random order.
///
/// `niche` is expected to be trimmed already.
pub fn make_hooks<R: Rng + ?Sized>(
    topic: &str,
    niche: &str,
    request: &GenerationRequest,
    rng: &mut R,
) -> Vec<String> {
    let bank = phrases::bank(request.language);
    let opener = choose(bank.stop, rng);

    let still_dont_know = if niche.is_empty() {
        format!("If you still don't know {topic}, you're leaving growth on the table.")
    } else {
        format!(
            "If you're into {niche} and still don't know {topic}, you're leaving growth on the table."
        )
    };

    let span = if request.tone == Tone::HighEnergy {
        "30 seconds"
    } else {
        "1 minute"
    };

    let take_label = if request.emotion == Level::Low {
        "Truth:"
    } else {
        "Hot take:"
    };
    let outcome = if request.controversy == Level::High {
        "trigger some of you"
    } else {
        "change how you think"
    };

    let creators = if niche.is_empty() {
        format!("Creators are doing THIS about {topic} (and it's working).")
    } else {
        format!("{niche} creators are doing THIS about {topic} (and it's working).")
    };

    let variants = vec![
        format!("{opener} {topic} {}", bank.truth_hook),
        still_dont_know,
        format!("{topic} in {span} - real talk only."),
        format!("{take_label} {topic} will {outcome}."),
        creators,
    ];

    let count = if rng.random_bool(0.5) { 5 } else { 4 };
    pick(&variants, count, rng)
}

/// Target spoken word count for a video length, clamped to
/// [`MIN_SCRIPT_WORDS`]..=[`MAX_SCRIPT_WORDS`].
pub fn words_for_duration(duration_sec: u32) -> u32 {
    let words = (f64::from(duration_sec) * WORDS_PER_SECOND).round() as u32;
    words.clamp(MIN_SCRIPT_WORDS, MAX_SCRIPT_WORDS)
}

/// Number of numbered script bullets for a video length.
pub fn bullet_count(duration_sec: u32) -> u32 {
    let bullets = (f64::from(words_for_duration(duration_sec)) / WORDS_PER_BULLET).round() as u32;
    bullets.clamp(MIN_BULLETS, MAX_BULLETS)
}

/// Prefix line, numbered tone bullets, then a bonus line.
pub fn make_script(topic: &str, language: Language, duration_sec: u32, tone: Tone) -> String {
    let bank = phrases::bank(language);
    let bullets = bullet_count(duration_sec);

    let mut lines = Vec::with_capacity(bullets as usize + 2);
    lines.push(bank.script_prefix.replace("{topic}", topic));
    for i in 1..=bullets {
        lines.push(match tone {
            Tone::Story => format!("Step {i}: Real example that proves why this works."),
            Tone::Motivational => format!("Rule {i}: Do this daily for 7 days."),
            Tone::Educational => {
                format!("Tip {i}: Specific, actionable, 10-second implementation.")
            }
            Tone::HighEnergy => format!("Hack {i}: Shortcut you can try today."),
        });
    }
    lines.push(bank.script_bonus.to_string());
    lines.join("\n")
}

pub fn make_caption<R: Rng + ?Sized>(
    topic: &str,
    niche: &str,
    language: Language,
    rng: &mut R,
) -> String {
    let open = choose(phrases::bank(language).share, rng);
    let subject = if niche.is_empty() {
        format!("Topic: {topic}")
    } else {
        format!("Niche: {niche}")
    };
    [
        open.to_string(),
        subject,
        "Comment \"MORE\" if you want the full list.".to_string(),
    ]
    .join("\n")
}

/// Topic, niche, and platform tags followed by the generic set,
/// deduplicated, capped at [`MAX_HASHTAGS`], each prefixed with `#`.
pub fn make_hashtags(topic: &str, niche: &str, platforms: &[String]) -> Vec<String> {
    let platform_tags = platforms.iter().filter_map(|p| {
        let first: String = p
            .split_whitespace()
            .next()?
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_ascii_lowercase();
        (!first.is_empty()).then_some(first)
    });

    let all = tokens(topic)
        .chain(tokens(niche))
        .chain(platform_tags)
        .chain(BASE_HASHTAGS.iter().map(|t| t.to_string()));

    unique(all)
        .into_iter()
        .take(MAX_HASHTAGS)
        .map(|tag| format!("#{tag}"))
        .collect()
}

/// Unique topic and niche tokens, padded with filler words to
/// [`MIN_KEYWORDS`] and capped at [`MAX_KEYWORDS`].
pub fn make_keywords(topic: &str, niche: &str) -> Vec<String> {
    let mut keywords = unique(tokens(topic).chain(tokens(niche)));
    for filler in KEYWORD_FILLERS {
        if keywords.len() >= MIN_KEYWORDS {
            break;
        }
        if !keywords.iter().any(|k| k == filler) {
            keywords.push(filler.to_string());
        }
    }
    keywords.truncate(MAX_KEYWORDS);
    keywords
}

pub fn make_thumbnail(topic: &str, language: Language) -> String {
    let emphasis: String = topic
        .to_uppercase()
        .chars()
        .take(THUMBNAIL_TOPIC_CHARS)
        .collect();
    format!("{}: {emphasis}", phrases::bank(language).thumbnail_label)
}

pub fn pick_cta<R: Rng + ?Sized>(language: Language, rng: &mut R) -> String {
    choose(phrases::bank(language).cta, rng).to_string()
}

/// Random [`ID_LENGTH`]-character lowercase alphanumeric token.
pub fn short_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LENGTH)
        .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
        .collect()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Collapse whitespace runs to a single space and trim.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercase ASCII alphanumeric runs; everything else separates tokens.
fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_ascii_lowercase)
}

fn choose<'a, R: Rng + ?Sized>(pool: &[&'a str], rng: &mut R) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

/// Up to `n` distinct elements of `pool` in random order.
fn pick<T: Clone, R: Rng + ?Sized>(pool: &[T], n: usize, rng: &mut R) -> Vec<T> {
    let mut remaining = pool.to_vec();
    let take = n.min(remaining.len());
    let mut out = Vec::with_capacity(take);
    while out.len() < take {
        let idx = rng.random_range(0..remaining.len());
        out.push(remaining.swap_remove(idx));
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
