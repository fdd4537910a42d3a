use serde::Serialize;

/// Closed enumeration of recognized event kinds.
/// The CLI maps its own vocabulary to this enum once, at the edge;
/// the core and the store only ever see these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    WalkStart,
    WalkEnd,
    Pee,
    Poo,
    PeeHome,
    PooHome,
    Feed,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::WalkStart,
        Category::WalkEnd,
        Category::Pee,
        Category::Poo,
        Category::PeeHome,
        Category::PooHome,
        Category::Feed,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Category::WalkStart => "walk_start",
            Category::WalkEnd => "walk_end",
            Category::Pee => "pee",
            Category::Poo => "poo",
            Category::PeeHome => "pee_home",
            Category::PooHome => "poo_home",
            Category::Feed => "feed",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "walk_start" => Some(Category::WalkStart),
            "walk_end" => Some(Category::WalkEnd),
            "pee" => Some(Category::Pee),
            "poo" => Some(Category::Poo),
            "pee_home" => Some(Category::PeeHome),
            "poo_home" => Some(Category::PooHome),
            "feed" => Some(Category::Feed),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (accepts `-` or `_` separators)
    pub fn from_code(code: &str) -> Option<Self> {
        Category::from_db_str(&code.to_lowercase().replace('-', "_"))
    }

    /// Human-readable label for CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            Category::WalkStart => "Walk started",
            Category::WalkEnd => "Walk finished",
            Category::Pee => "Pee",
            Category::Poo => "Poo",
            Category::PeeHome => "Pee at home",
            Category::PooHome => "Poo at home",
            Category::Feed => "Feeding",
        }
    }

    /// An elimination event that happened indoors rather than during a walk.
    pub fn is_home_incident(&self) -> bool {
        matches!(self, Category::PeeHome | Category::PooHome)
    }

    pub fn is_walk_start(&self) -> bool {
        matches!(self, Category::WalkStart)
    }

    pub fn is_walk_end(&self) -> bool {
        matches!(self, Category::WalkEnd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_codes_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_db_str(cat.to_db_str()), Some(cat));
        }
    }

    #[test]
    fn cli_codes_accept_dashes() {
        assert_eq!(Category::from_code("walk-start"), Some(Category::WalkStart));
        assert_eq!(Category::from_code("WALK_END"), Some(Category::WalkEnd));
        assert_eq!(Category::from_code("pee-home"), Some(Category::PeeHome));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(Category::from_code("nap"), None);
        assert_eq!(Category::from_db_str(""), None);
    }

    #[test]
    fn home_incidents() {
        assert!(Category::PeeHome.is_home_incident());
        assert!(Category::PooHome.is_home_incident());
        assert!(!Category::Pee.is_home_incident());
        assert!(!Category::Feed.is_home_incident());
    }
}
