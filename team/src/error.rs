use thiserror::Error;

use crate::locale::Locale;
use crate::slots::TEAM_SIZE;

/// Rejected team actions.
///
/// These are user errors, not failures: callers turn them into a localized
/// message with [`TeamError::message`] and leave the team untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    #[error("Team name is empty")]
    EmptyName,

    #[error("Team name is a default name")]
    DefaultName,

    #[error("Team is incomplete: {filled}/{size} slots filled", size = TEAM_SIZE)]
    IncompleteTeam { filled: usize },

    #[error("A team named {0:?} already exists")]
    DuplicateName(String),

    #[error("{0} is already in the team")]
    DuplicatePokemon(String),

    #[error("Team is full")]
    TeamFull,

    #[error("Invalid team slot: {0}")]
    InvalidSlot(usize),

    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("No team is being edited")]
    NotEditing,
}

impl TeamError {
    /// User-facing message in the given locale
    pub fn message(&self, locale: Locale) -> String {
        match (self, locale) {
            (Self::EmptyName, Locale::En) => "Please enter a team name".to_string(),
            (Self::EmptyName, Locale::Es) => {
                "Por favor ingresa un nombre para el equipo".to_string()
            }

            (Self::DefaultName, Locale::En) => {
                "Please choose a name other than the default one".to_string()
            }
            (Self::DefaultName, Locale::Es) => {
                "Por favor elige un nombre distinto al predeterminado".to_string()
            }

            (Self::IncompleteTeam { filled }, Locale::En) => {
                format!("Your team needs {TEAM_SIZE} Pokémon to be saved ({filled}/{TEAM_SIZE})")
            }
            (Self::IncompleteTeam { filled }, Locale::Es) => {
                format!("Tu equipo necesita {TEAM_SIZE} Pokémon para guardarse ({filled}/{TEAM_SIZE})")
            }

            (Self::DuplicateName(name), Locale::En) => {
                format!("You already have a team named \"{name}\"")
            }
            (Self::DuplicateName(name), Locale::Es) => {
                format!("Ya tienes un equipo llamado \"{name}\"")
            }

            (Self::DuplicatePokemon(name), Locale::En) => {
                format!("{name} is already in your team")
            }
            (Self::DuplicatePokemon(name), Locale::Es) => format!("{name} ya está en tu equipo"),

            (Self::TeamFull, Locale::En) => {
                format!("Your team already has {TEAM_SIZE} Pokémon")
            }
            (Self::TeamFull, Locale::Es) => format!("Tu equipo ya tiene {TEAM_SIZE} Pokémon"),

            (Self::InvalidSlot(index), Locale::En) => format!("Invalid team slot {index}"),
            (Self::InvalidSlot(index), Locale::Es) => {
                format!("Posición de equipo inválida {index}")
            }

            (Self::NotAuthenticated, Locale::En) => "You must be signed in".to_string(),
            (Self::NotAuthenticated, Locale::Es) => "Debes iniciar sesión".to_string(),

            (Self::TeamNotFound(_), Locale::En) => "Team not found".to_string(),
            (Self::TeamNotFound(_), Locale::Es) => "Equipo no encontrado".to_string(),

            (Self::NotEditing, Locale::En) => "No team is being edited".to_string(),
            (Self::NotEditing, Locale::Es) => "No se está editando ningún equipo".to_string(),
        }
    }
}
