//! Narration style selector.

use crate::error::AnalystError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tone used when asking a text generator to narrate a match.
///
/// # Examples
///
/// ```rust
/// use match_analyst::NarrationStyle;
///
/// let style: NarrationStyle = "humorous".parse().unwrap();
/// assert_eq!(style, NarrationStyle::Humorous);
/// assert_eq!(style.to_string(), "Humorous");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum NarrationStyle {
    /// Objective, like a professional commentator
    #[default]
    Formal,
    /// Light-hearted, with funny analogies
    Humorous,
    /// Tactical and technical breakdown of the plays
    Technical,
}

impl NarrationStyle {
    pub const ALL: [NarrationStyle; 3] = [
        NarrationStyle::Formal,
        NarrationStyle::Humorous,
        NarrationStyle::Technical,
    ];

    /// Instruction clause spliced into the narration prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            NarrationStyle::Formal => {
                "in a technical and objective way, like a professional commentator"
            }
            NarrationStyle::Humorous => {
                "in a light-hearted and relaxed way, with funny analogies"
            }
            NarrationStyle::Technical => {
                "focused on tactical and technical analysis, detailing the plays"
            }
        }
    }
}

impl fmt::Display for NarrationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NarrationStyle::Formal => "Formal",
            NarrationStyle::Humorous => "Humorous",
            NarrationStyle::Technical => "Technical",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for NarrationStyle {
    type Err = AnalystError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "formal" => Ok(NarrationStyle::Formal),
            "humorous" => Ok(NarrationStyle::Humorous),
            "technical" => Ok(NarrationStyle::Technical),
            _ => Err(AnalystError::InvalidStyle {
                style: s.to_string(),
            }),
        }
    }
}
