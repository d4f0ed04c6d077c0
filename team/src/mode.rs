use serde::{Deserialize, Serialize};

/// Team builder mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// No team in progress
    #[default]
    Idle,

    /// Building a new team that has not been saved yet
    Creating,

    /// Changing a saved team
    Editing,
}

impl Mode {
    pub fn is_editing(&self) -> bool {
        matches!(self, Mode::Editing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Idle => "idle",
            Mode::Creating => "creating",
            Mode::Editing => "editing",
        }
    }
}

/// Where the user goes when editing stops.
///
/// Leaving for a terminal screen (landing page, team list) drops the builder
/// back to `Idle`. Anything else keeps a blank builder around in `Creating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditExit {
    Terminal,
    Intermediate,
}

impl EditExit {
    /// Mode the builder lands in
    pub fn target_mode(&self) -> Mode {
        match self {
            EditExit::Terminal => Mode::Idle,
            EditExit::Intermediate => Mode::Creating,
        }
    }
}
