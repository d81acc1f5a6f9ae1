//! Target platforms and their static profiles.
//!
//! Labels are matched exactly. Callers decide what an unknown label falls back
//! to: the template table uses Facebook, the hashtag and profile tables use Twitter.

/// A social network the generator writes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Twitter,
    LinkedIn,
    Instagram,
    Facebook,
}

impl Platform {
    /// Declaration order, used when listing platforms to the UI.
    pub const ALL: [Platform; 4] = [
        Platform::Twitter,
        Platform::LinkedIn,
        Platform::Instagram,
        Platform::Facebook,
    ];

    /// Parses a wire label. Returns `None` for anything unrecognized.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "twitter" => Some(Platform::Twitter),
            "linkedin" => Some(Platform::LinkedIn),
            "instagram" => Some(Platform::Instagram),
            "facebook" => Some(Platform::Facebook),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::LinkedIn => "linkedin",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
        }
    }

    /// Static profile for this platform.
    pub fn profile(self) -> &'static PlatformProfile {
        match self {
            Platform::Twitter => &TWITTER_PROFILE,
            Platform::LinkedIn => &LINKEDIN_PROFILE,
            Platform::Instagram => &INSTAGRAM_PROFILE,
            Platform::Facebook => &FACEBOOK_PROFILE,
        }
    }

    /// Ordered filler hashtags used to pad a post's hashtag list.
    pub fn filler_hashtags(self) -> &'static [&'static str] {
        match self {
            Platform::Twitter => &[
                "#Tech",
                "#Innovation",
                "#Business",
                "#Success",
                "#Growth",
                "#Tips",
            ],
            Platform::LinkedIn => &[
                "#Professional",
                "#CareerGrowth",
                "#Business",
                "#Leadership",
                "#Innovation",
                "#Success",
            ],
            Platform::Instagram => &[
                "#Inspo",
                "#Motivation",
                "#Goals",
                "#Success",
                "#Growth",
                "#Community",
            ],
            Platform::Facebook => &[
                "#Community",
                "#Share",
                "#Connect",
                "#Life",
                "#Updates",
                "#News",
            ],
        }
    }
}

/// Declared length budget and writing style for a platform.
///
/// `max_length` is advisory only. Generated text is never measured or truncated against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformProfile {
    pub max_length: usize,
    pub style: &'static str,
}

const TWITTER_PROFILE: PlatformProfile = PlatformProfile {
    max_length: 280,
    style: "concise and punchy",
};
const LINKEDIN_PROFILE: PlatformProfile = PlatformProfile {
    max_length: 1300,
    style: "professional and detailed",
};
const INSTAGRAM_PROFILE: PlatformProfile = PlatformProfile {
    max_length: 2200,
    style: "visual and engaging",
};
const FACEBOOK_PROFILE: PlatformProfile = PlatformProfile {
    max_length: 500,
    style: "conversational and relatable",
};

/// Resolves a label to its profile, falling back to Twitter.
pub fn profile_for(label: &str) -> &'static PlatformProfile {
    Platform::from_label(label)
        .unwrap_or(Platform::Twitter)
        .profile()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for platform in Platform::ALL {
            assert_eq!(Platform::from_label(platform.label()), Some(platform));
        }
    }

    #[test]
    fn test_label_matching_is_case_sensitive() {
        assert_eq!(Platform::from_label("Twitter"), None);
        assert_eq!(Platform::from_label("LINKEDIN"), None);
        assert_eq!(Platform::from_label(""), None);
    }

    #[test]
    fn test_unknown_platform_uses_twitter_profile() {
        assert_eq!(profile_for("mastodon"), Platform::Twitter.profile());
        assert_eq!(profile_for("mastodon").max_length, 280);
    }

    #[test]
    fn test_profiles_match_declared_limits() {
        assert_eq!(Platform::LinkedIn.profile().max_length, 1300);
        assert_eq!(Platform::Instagram.profile().max_length, 2200);
        assert_eq!(Platform::Facebook.profile().style, "conversational and relatable");
    }

    #[test]
    fn test_every_platform_has_six_filler_hashtags() {
        for platform in Platform::ALL {
            let tags = platform.filler_hashtags();
            assert_eq!(tags.len(), 6, "{} should have 6 filler tags", platform.label());
            assert!(tags.iter().all(|t| t.starts_with('#')));
        }
    }
}
