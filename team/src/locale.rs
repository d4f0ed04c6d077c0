//! Supported UI locales

use serde::{Deserialize, Serialize};

/// Language used for default names and user-facing messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    /// Parse a locale tag ("en", "es-MX", ...)
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.to_lowercase();
        match primary.as_str() {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Name given to a team nobody has named yet
    pub fn default_team_name(&self) -> &'static str {
        match self {
            Locale::En => "My Team",
            Locale::Es => "Mi Equipo",
        }
    }
}

/// Whether `name` equals the default team name of any locale
pub fn is_default_team_name(name: &str) -> bool {
    let name = name.trim();
    Locale::ALL
        .iter()
        .any(|locale| locale.default_team_name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("en"), Some(Locale::En));
        assert_eq!(Locale::from_tag("es-MX"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("ES_es"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("fr"), None);
    }

    #[test]
    fn test_default_names() {
        assert!(is_default_team_name("My Team"));
        assert!(is_default_team_name("Mi Equipo"));
        assert!(is_default_team_name("  My Team "));
        assert!(!is_default_team_name("Aces"));
        assert!(!is_default_team_name("my team"));
    }
}
