//! Activity categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of activity classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityCategory {
    Work,
    Reading,
    Listening,
    Exercise,
    Mindfulness,
    Home,
    Other,
}

impl ActivityCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 7] = [
        Self::Work,
        Self::Reading,
        Self::Listening,
        Self::Exercise,
        Self::Mindfulness,
        Self::Home,
        Self::Other,
    ];

    /// Stable raw name, as stored by collaborators.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Reading => "Reading",
            Self::Listening => "Listening",
            Self::Exercise => "Exercise",
            Self::Mindfulness => "Mindfulness",
            Self::Home => "Home",
            Self::Other => "Other",
        }
    }

    /// Name prefixed with an icon, for display.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Work => "💼 Work",
            Self::Reading => "📖 Reading",
            Self::Listening => "🎧 Listening",
            Self::Exercise => "🏋️ Exercise",
            Self::Mindfulness => "🧘 Mindfulness",
            Self::Home => "🏡 Home",
            Self::Other => "✨ Other",
        }
    }

    /// Decode a stored raw name, treating anything unknown or missing as `Other`.
    #[must_use]
    pub fn from_raw_or_other(raw: Option<&str>) -> Self {
        raw.and_then(|r| r.parse().ok()).unwrap_or(Self::Other)
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown activity category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ActivityCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(trimmed.to_string()))
    }
}
