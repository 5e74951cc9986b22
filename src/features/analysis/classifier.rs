//! Keyword-based category classification.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::category::ActivityCategory;

/// Built-in keyword table. Contains both surface forms and their lemmas so a
/// keyword matches whichever form the lemmatizer produces.
const BUILTIN_KEYWORDS: &[(&str, ActivityCategory)] = &[
    ("work", ActivityCategory::Work),
    ("job", ActivityCategory::Work),
    ("office", ActivityCategory::Work),
    ("meeting", ActivityCategory::Work),
    ("report", ActivityCategory::Work),
    ("email", ActivityCategory::Work),
    ("project", ActivityCategory::Work),
    ("exercise", ActivityCategory::Exercise),
    ("gym", ActivityCategory::Exercise),
    ("fitness", ActivityCategory::Exercise),
    ("ran", ActivityCategory::Exercise),
    ("hiked", ActivityCategory::Exercise),
    ("swam", ActivityCategory::Exercise),
    ("run", ActivityCategory::Exercise),
    ("hike", ActivityCategory::Exercise),
    ("swim", ActivityCategory::Exercise),
    ("workout", ActivityCategory::Exercise),
    ("jog", ActivityCategory::Exercise),
    ("walk", ActivityCategory::Exercise),
    ("bike", ActivityCategory::Exercise),
    ("cycle", ActivityCategory::Exercise),
    ("errands", ActivityCategory::Home),
    ("errand", ActivityCategory::Home),
    ("shopping", ActivityCategory::Home),
    ("shop", ActivityCategory::Home),
    ("groceries", ActivityCategory::Home),
    ("grocery", ActivityCategory::Home),
    ("clean", ActivityCategory::Home),
    ("laundry", ActivityCategory::Home),
    ("cook", ActivityCategory::Home),
    ("reading", ActivityCategory::Reading),
    ("read", ActivityCategory::Reading),
    ("book", ActivityCategory::Reading),
    ("study", ActivityCategory::Reading),
    ("novel", ActivityCategory::Reading),
    ("article", ActivityCategory::Reading),
    ("meditation", ActivityCategory::Mindfulness),
    ("meditate", ActivityCategory::Mindfulness),
    ("yoga", ActivityCategory::Mindfulness),
    ("breathe", ActivityCategory::Mindfulness),
    ("journal", ActivityCategory::Mindfulness),
    ("listen", ActivityCategory::Listening),
    ("podcast", ActivityCategory::Listening),
    ("music", ActivityCategory::Listening),
    ("audiobook", ActivityCategory::Listening),
    ("album", ActivityCategory::Listening),
];

static BUILTIN_MAP: Lazy<HashMap<String, ActivityCategory>> = Lazy::new(|| {
    BUILTIN_KEYWORDS
        .iter()
        .map(|(k, c)| ((*k).to_string(), *c))
        .collect()
});

/// Mapping from lowercase keyword to category.
///
/// Lookup is driven by the caller's token order, never by iteration over the
/// map, so results do not depend on hash ordering.
#[derive(Debug, Clone)]
pub struct KeywordMap {
    entries: HashMap<String, ActivityCategory>,
}

impl Default for KeywordMap {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KeywordMap {
    /// The built-in keyword table.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_MAP.clone(),
        }
    }

    /// An empty table.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or replace keywords. Later entries override earlier ones.
    #[must_use]
    pub fn with_keywords<I, K>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = (K, ActivityCategory)>,
        K: AsRef<str>,
    {
        for (keyword, category) in keywords {
            let key = keyword.as_ref().trim().to_lowercase();
            if !key.is_empty() {
                self.entries.insert(key, category);
            }
        }
        self
    }

    /// Case-insensitive lookup of a single keyword.
    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<ActivityCategory> {
        self.entries.get(&keyword.to_lowercase()).copied()
    }

    /// Number of keywords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no keywords.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keywords sorted alphabetically, with their categories.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(&str, ActivityCategory)> {
        let mut entries: Vec<_> = self.entries.iter().map(|(k, c)| (k.as_str(), *c)).collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Category of the first token that is a known keyword.
    ///
    /// Returns `None` when nothing matches; choosing a fallback is up to the
    /// caller.
    #[must_use]
    pub fn classify<S: AsRef<str>>(&self, tokens: &[S]) -> Option<ActivityCategory> {
        tokens.iter().find_map(|token| self.get(token.as_ref()))
    }
}
