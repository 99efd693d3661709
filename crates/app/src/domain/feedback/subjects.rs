//! Feedback subjects and the attributes each one is rated on.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Music,
    Dance,
    Drawing,
    Drums,
    Vocal,
    Violin,
}

impl Subject {
    pub const ALL: [Self; 6] = [
        Self::Music,
        Self::Dance,
        Self::Drawing,
        Self::Drums,
        Self::Vocal,
        Self::Violin,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Music => "music",
            Self::Dance => "dance",
            Self::Drawing => "drawing",
            Self::Drums => "drums",
            Self::Vocal => "vocal",
            Self::Violin => "violin",
        }
    }

    /// Rating attributes recognised for this subject.
    #[must_use]
    pub const fn attributes(self) -> &'static [&'static str] {
        match self {
            Self::Music => &["rhythm", "pitch", "technique", "theory", "expression"],
            Self::Dance => &["rhythm", "posture", "flexibility", "choreography", "expression"],
            Self::Drawing => &["composition", "proportion", "shading", "creativity"],
            Self::Drums => &["timing", "technique", "coordination", "dynamics"],
            Self::Vocal => &["pitch", "breath_control", "tone", "diction"],
            Self::Violin => &["intonation", "bowing", "posture", "tone"],
        }
    }

    #[must_use]
    pub fn has_attribute(self, attribute: &str) -> bool {
        self.attributes().contains(&attribute)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feedback subject: {0}")]
pub struct UnknownSubject(pub String);

impl FromStr for Subject {
    type Err = UnknownSubject;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|subject| subject.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownSubject(value.to_string()))
    }
}
