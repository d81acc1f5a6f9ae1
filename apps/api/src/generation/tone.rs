//! Writing tones. Each tone picks a template family and a hashtag budget.

/// A canned writing style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Enthusiastic,
    Humorous,
    Inspirational,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Enthusiastic,
        Tone::Humorous,
        Tone::Inspirational,
    ];

    /// Parses a wire label. Returns `None` for anything unrecognized.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "professional" => Some(Tone::Professional),
            "casual" => Some(Tone::Casual),
            "enthusiastic" => Some(Tone::Enthusiastic),
            "humorous" => Some(Tone::Humorous),
            "inspirational" => Some(Tone::Inspirational),
            _ => None,
        }
    }

    /// Parses a wire label, falling back to [`Tone::Professional`].
    pub fn resolve(label: &str) -> Self {
        Self::from_label(label).unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Enthusiastic => "enthusiastic",
            Tone::Humorous => "humorous",
            Tone::Inspirational => "inspirational",
        }
    }

    /// Number of hashtags requested from the composer for this tone.
    pub fn hashtag_count(self) -> usize {
        match self {
            Tone::Professional => 3,
            Tone::Casual => 4,
            Tone::Enthusiastic => 5,
            Tone::Humorous => 3,
            Tone::Inspirational => 4,
        }
    }
}
