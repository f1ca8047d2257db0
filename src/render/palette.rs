use crate::models::ContributionLevel;

pub const RESET: &str = "\x1b[0m";

/// Foreground colors for the profile card labels, as 256-color indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelColors {
    pub username: u8,
    pub repos: u8,
    pub bio: u8,
    pub location: u8,
    pub followers: u8,
    pub following: u8,
    pub starred: u8,
}

/// Every color the renderer uses. Built once and passed by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub labels: LabelColors,
    /// Background per contribution level, indexed by level value.
    pub heatmap: [u8; 5],
    pub warning: u8,
    pub error: u8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            labels: LabelColors {
                username: 4,
                repos: 3,
                bio: 2,
                location: 1,
                followers: 9,
                following: 21,
                starred: 5,
            },
            // dark gray, then four greens from dark to light
            heatmap: [232, 22, 28, 34, 40],
            warning: 3,
            error: 1,
        }
    }
}

impl Palette {
    /// Wraps `text` in a 256-color foreground escape.
    pub fn paint(&self, color: u8, text: impl std::fmt::Display) -> String {
        format!("\x1b[38;5;{}m{}{}", color, text, RESET)
    }

    pub fn warning(&self, text: impl std::fmt::Display) -> String {
        self.paint(self.warning, text)
    }

    pub fn error(&self, text: impl std::fmt::Display) -> String {
        self.paint(self.error, text)
    }

    /// A two-column block filled with the level's background color.
    pub fn block(&self, level: ContributionLevel) -> String {
        format!("\x1b[48;5;{}m  {}", self.heatmap[level.value() as usize], RESET)
    }
}
