//! Word tokenization and rule-based English lemmatization.
//!
//! Produces lowercase base forms ("went" -> "go", "groceries" -> "grocery",
//! "hiking" -> "hike") so keyword lookup works regardless of inflection.
//! Words no rule applies to come back lowercased and otherwise untouched.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

// Letters/digits, optionally followed by one apostrophe part ("don't", "mom's").
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}]+)?")
        .unwrap_or_else(|e| panic!("Invalid word regex: {e}"))
});

static IRREGULAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("am", "be"),
        ("is", "be"),
        ("are", "be"),
        ("was", "be"),
        ("were", "be"),
        ("been", "be"),
        ("being", "be"),
        ("has", "have"),
        ("had", "have"),
        ("having", "have"),
        ("does", "do"),
        ("did", "do"),
        ("done", "do"),
        ("doing", "do"),
        ("went", "go"),
        ("gone", "go"),
        ("goes", "go"),
        ("ran", "run"),
        ("swam", "swim"),
        ("swum", "swim"),
        ("rode", "ride"),
        ("ridden", "ride"),
        ("wrote", "write"),
        ("written", "write"),
        ("writing", "write"),
        ("read", "read"),
        ("made", "make"),
        ("took", "take"),
        ("taken", "take"),
        ("saw", "see"),
        ("seen", "see"),
        ("ate", "eat"),
        ("eaten", "eat"),
        ("bought", "buy"),
        ("brought", "bring"),
        ("thought", "think"),
        ("taught", "teach"),
        ("caught", "catch"),
        ("spent", "spend"),
        ("sent", "send"),
        ("met", "meet"),
        ("felt", "feel"),
        ("left", "leave"),
        ("kept", "keep"),
        ("slept", "sleep"),
        ("began", "begin"),
        ("begun", "begin"),
        ("gave", "give"),
        ("given", "give"),
        ("got", "get"),
        ("gotten", "get"),
        ("came", "come"),
        ("sang", "sing"),
        ("sung", "sing"),
        ("heard", "hear"),
        ("told", "tell"),
        ("said", "say"),
        ("found", "find"),
        ("lay", "lie"),
        ("sat", "sit"),
        ("stood", "stand"),
        ("won", "win"),
        ("lost", "lose"),
        ("flew", "fly"),
        ("drove", "drive"),
        ("driven", "drive"),
        ("cooked", "cook"),
        ("used", "use"),
        ("exercised", "exercise"),
        ("exercising", "exercise"),
        ("exercises", "exercise"),
        ("practised", "practise"),
        ("practiced", "practice"),
        ("practicing", "practice"),
        ("cycling", "cycle"),
        ("cycled", "cycle"),
        ("danced", "dance"),
        ("dancing", "dance"),
        ("breathing", "breathe"),
        ("breathed", "breathe"),
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("people", "person"),
        ("feet", "foot"),
        ("mice", "mouse"),
        ("better", "good"),
        ("best", "good"),
        ("worse", "bad"),
        ("worst", "bad"),
    ]
    .into_iter()
    .collect()
});

// Words that end like an inflection but are already base forms.
const PROTECTED: &[&str] = &[
    "fitness", "business", "yoga", "news", "series", "species", "always", "perhaps",
    "towards", "afterwards", "sometimes", "morning", "evening", "nothing", "something",
    "anything", "everything", "during", "thing", "bring", "string", "spring", "king",
    "ring", "sing", "swing", "ceiling", "wedding", "pudding", "need", "seed", "speed",
    "feed", "weed", "bleed", "breed", "hundred", "sacred", "naked", "wicked", "weekend",
    "yesterday", "meeting", "tennis", "chess", "glasses", "lens", "christmas", "bus", "gas", "yes",
];

/// Split `text` into lowercase lemma tokens, in order, skipping punctuation.
///
/// # Examples
///
/// ```
/// use whatidid::features::analysis::lemmatize_text;
///
/// assert_eq!(
///     lemmatize_text("Went hiking, bought groceries!"),
///     vec!["go", "hike", "buy", "grocery"]
/// );
/// ```
#[must_use]
pub fn lemmatize_text(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| lemmatize_word(m.as_str()))
        .filter(|lemma| !lemma.is_empty())
        .collect()
}

/// Lemmatize a single word. Falls back to the lowercase word.
#[must_use]
pub fn lemmatize_word(word: &str) -> String {
    let lower = word.to_lowercase().replace('’', "'");
    let lower = lower.strip_suffix("'s").unwrap_or(&lower).to_string();

    if let Some(base) = IRREGULAR.get(lower.as_str()) {
        return (*base).to_string();
    }
    if PROTECTED.contains(&lower.as_str()) || lower.contains('\'') {
        return lower;
    }
    if lower.chars().count() <= 3 || !lower.chars().all(char::is_alphabetic) {
        return lower;
    }

    strip_suffix(&lower).unwrap_or(lower)
}

fn strip_suffix(word: &str) -> Option<String> {
    if let Some(stem) = word.strip_suffix("ies").or_else(|| word.strip_suffix("ied")) {
        return (stem.len() >= 2).then(|| format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("ing") {
        return restore_stem(stem);
    }
    if let Some(stem) = word.strip_suffix("ed") {
        return restore_stem(stem);
    }
    if let Some(stem) = word.strip_suffix("es") {
        if ["ch", "sh", "ss", "x", "z", "o"].iter().any(|s| stem.ends_with(s)) {
            return Some(stem.to_string());
        }
    }
    if let Some(stem) = word.strip_suffix('s') {
        if !["s", "u", "i"].iter().any(|s| stem.ends_with(s)) {
            return Some(stem.to_string());
        }
    }
    None
}

/// Rebuild a verb stem left behind by removing "-ing" or "-ed".
fn restore_stem(stem: &str) -> Option<String> {
    let chars: Vec<char> = stem.chars().collect();
    if chars.len() < 3 || !chars.iter().any(|c| is_vowel(*c)) {
        return None;
    }

    let last = chars[chars.len() - 1];
    let prev = chars[chars.len() - 2];

    // running -> run, shopped -> shop (but fall/pass/buzz keep the double)
    if last == prev && !is_vowel(last) && !matches!(last, 'l' | 's' | 'z') {
        return Some(chars[..chars.len() - 1].iter().collect());
    }

    // meditating -> meditate, organized -> organize
    if stem.ends_with("at") || stem.ends_with("iz") || stem.ends_with("bl") {
        return Some(format!("{stem}e"));
    }

    // hiking -> hike, biked -> bike: short consonant-vowel-consonant stems
    if chars.len() == 3
        && !is_vowel(chars[0])
        && is_vowel(chars[1])
        && !is_vowel(last)
        && !matches!(last, 'w' | 'x' | 'y')
    {
        return Some(format!("{stem}e"));
    }

    Some(stem.to_string())
}

const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_skip_punctuation_and_whitespace() {
        assert_eq!(
            lemmatize_text("  Work!!  report... done? "),
            vec!["work", "report", "do"]
        );
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert!(lemmatize_text("").is_empty());
        assert!(lemmatize_text(" ,.;!? -- ").is_empty());
    }

    #[test]
    fn test_irregular_forms() {
        assert_eq!(lemmatize_word("went"), "go");
        assert_eq!(lemmatize_word("Ran"), "run");
        assert_eq!(lemmatize_word("swam"), "swim");
        assert_eq!(lemmatize_word("did"), "do");
        assert_eq!(lemmatize_word("read"), "read");
        assert_eq!(lemmatize_word("cycling"), "cycle");
        assert_eq!(lemmatize_word("cycled"), "cycle");
    }

    #[test]
    fn test_meeting_is_a_noun() {
        assert_eq!(lemmatize_word("meeting"), "meeting");
        assert_eq!(lemmatize_word("meetings"), "meeting");
        assert_eq!(lemmatize_word("met"), "meet");
    }

    #[test]
    fn test_plural_nouns() {
        assert_eq!(lemmatize_word("groceries"), "grocery");
        assert_eq!(lemmatize_word("errands"), "errand");
        assert_eq!(lemmatize_word("books"), "book");
        assert_eq!(lemmatize_word("watches"), "watch");
        assert_eq!(lemmatize_word("podcasts"), "podcast");
    }

    #[test]
    fn test_progressive_and_past_forms() {
        assert_eq!(lemmatize_word("reading"), "read");
        assert_eq!(lemmatize_word("running"), "run");
        assert_eq!(lemmatize_word("shopping"), "shop");
        assert_eq!(lemmatize_word("hiking"), "hike");
        assert_eq!(lemmatize_word("hiked"), "hike");
        assert_eq!(lemmatize_word("worked"), "work");
        assert_eq!(lemmatize_word("meditating"), "meditate");
        assert_eq!(lemmatize_word("studied"), "study");
        assert_eq!(lemmatize_word("listened"), "listen");
        assert_eq!(lemmatize_word("walking"), "walk");
    }

    #[test]
    fn test_base_forms_unchanged() {
        for word in ["fitness", "yoga", "morning", "gym", "meditation", "weekend", "yesterday"] {
            assert_eq!(lemmatize_word(word), word);
        }
    }

    #[test]
    fn test_possessive_and_contractions() {
        assert_eq!(lemmatize_word("mom's"), "mom");
        assert_eq!(lemmatize_word("Don't"), "don't");
        assert_eq!(lemmatize_text("Sam’s book"), vec!["sam", "book"]);
    }

    #[test]
    fn test_numbers_and_unicode_fall_back_to_lowercase() {
        assert_eq!(lemmatize_word("2024"), "2024");
        assert_eq!(lemmatize_word("5km"), "5km");
        assert_eq!(lemmatize_text("Café RÉSUMÉ"), vec!["café", "résumé"]);
    }

    #[test]
    fn test_preserves_order() {
        assert_eq!(
            lemmatize_text("I read while doing exercise"),
            vec!["i", "read", "while", "do", "exercise"]
        );
    }
}
