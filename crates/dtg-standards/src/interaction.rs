//! Interaction-layer vocabulary: background levels, fill emphasis, and the
//! four interaction states, with their root offset contributions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Background prominence a component sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundLevel {
    Default,
    Level1,
    Level2,
    Bold,
    Elevated,
}

impl BackgroundLevel {
    pub const ALL: [BackgroundLevel; 5] = [
        BackgroundLevel::Default,
        BackgroundLevel::Level1,
        BackgroundLevel::Level2,
        BackgroundLevel::Bold,
        BackgroundLevel::Elevated,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BackgroundLevel::Default => "Default",
            BackgroundLevel::Level1 => "Level 1",
            BackgroundLevel::Level2 => "Level 2",
            BackgroundLevel::Bold => "Bold",
            BackgroundLevel::Elevated => "Elevated",
        }
    }
}

impl fmt::Display for BackgroundLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How strongly a fill reads against its background. The emphasis sets the
/// base root offset the interaction states build on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillEmphasis {
    Ghost,
    Minimal,
    Subtle,
    Bold,
}

impl FillEmphasis {
    pub const ALL: [FillEmphasis; 4] = [
        FillEmphasis::Ghost,
        FillEmphasis::Minimal,
        FillEmphasis::Subtle,
        FillEmphasis::Bold,
    ];

    /// Base root offset for this emphasis.
    pub fn base_offset(&self) -> i32 {
        match self {
            FillEmphasis::Ghost => 0,
            FillEmphasis::Minimal => 1,
            FillEmphasis::Subtle => 2,
            // TODO: derive the Bold offset from the contrast pairing instead
            // of reusing the root rung.
            FillEmphasis::Bold => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FillEmphasis::Ghost => "Ghost",
            FillEmphasis::Minimal => "Minimal",
            FillEmphasis::Subtle => "Subtle",
            FillEmphasis::Bold => "Bold",
        }
    }
}

impl fmt::Display for FillEmphasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four interaction states, each shifting the emphasis base offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionState {
    Idle,
    Hover,
    Pressed,
    Focus,
}

impl InteractionState {
    pub const ALL: [InteractionState; 4] = [
        InteractionState::Idle,
        InteractionState::Hover,
        InteractionState::Pressed,
        InteractionState::Focus,
    ];

    /// Offset added on top of the emphasis base.
    pub fn offset_delta(&self) -> i32 {
        match self {
            InteractionState::Idle => 0,
            InteractionState::Hover => 1,
            InteractionState::Pressed => 2,
            InteractionState::Focus => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InteractionState::Idle => "Idle",
            InteractionState::Hover => "Hover",
            InteractionState::Pressed => "Pressed",
            InteractionState::Focus => "Focus",
        }
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
