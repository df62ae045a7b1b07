use std::fmt;

/// One of the four substitutable categories in a story template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Noun,
    Verb,
    Adjective,
    Mood,
}

impl Slot {
    /// All slots, in fallback draw order.
    pub const ALL: [Slot; 4] = [Slot::Noun, Slot::Verb, Slot::Adjective, Slot::Mood];

    /// Returns the placeholder name used in templates (e.g., "adj" for `{adj}`).
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adj",
            Self::Mood => "mood",
        }
    }

    /// Look up a slot by its placeholder name.
    pub fn from_placeholder(name: &str) -> Option<Slot> {
        Self::ALL.into_iter().find(|slot| slot.placeholder() == name)
    }

    /// Human-readable label, as shown next to an input field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Noun => "Noun",
            Self::Verb => "Verb",
            Self::Adjective => "Adjective",
            Self::Mood => "Mood",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.placeholder())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_names() {
        assert_eq!(Slot::Noun.placeholder(), "noun");
        assert_eq!(Slot::Verb.placeholder(), "verb");
        assert_eq!(Slot::Adjective.placeholder(), "adj");
        assert_eq!(Slot::Mood.placeholder(), "mood");
    }

    #[test]
    fn from_placeholder_round_trips() {
        for slot in Slot::ALL {
            assert_eq!(Slot::from_placeholder(slot.placeholder()), Some(slot));
        }
        assert_eq!(Slot::from_placeholder("adjective"), None);
        assert_eq!(Slot::from_placeholder("Noun"), None);
    }

    #[test]
    fn display_uses_placeholder() {
        assert_eq!(Slot::Adjective.to_string(), "adj");
    }
}
