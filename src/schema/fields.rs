use serde::Deserialize;

/// Label a mood picker shows before anything is selected.
pub const MOOD_PICKER_LABEL: &str = "Choose mood";

/// The mood slot of a generation request.
///
/// `Unset` is the sentinel: it is distinct from every real mood string and
/// always triggers a random mood. Deserializes from an optional string the
/// way [`MoodChoice::from_picker`] reads picker text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Option<String>")]
pub enum MoodChoice {
    #[default]
    Unset,
    Chosen(String),
}

impl MoodChoice {
    /// Interpret raw picker text. The picker label and blank text mean unset;
    /// anything else is kept verbatim, including moods outside the word bank.
    pub fn from_picker(text: &str) -> MoodChoice {
        if text == MOOD_PICKER_LABEL || text.trim().is_empty() {
            MoodChoice::Unset
        } else {
            MoodChoice::Chosen(text.to_string())
        }
    }

    /// The supplied mood, if any. The picker label and whitespace-only values
    /// count as unset, however the choice was built.
    pub fn as_supplied(&self) -> Option<&str> {
        match self {
            MoodChoice::Chosen(mood) if !mood.trim().is_empty() && mood != MOOD_PICKER_LABEL => {
                Some(mood.as_str())
            }
            _ => None,
        }
    }
}

impl From<Option<String>> for MoodChoice {
    fn from(text: Option<String>) -> Self {
        text.as_deref()
            .map(MoodChoice::from_picker)
            .unwrap_or_default()
    }
}

/// The four raw slot values of one generation request.
///
/// Every field may be omitted when deserializing; the mood is read as picker
/// text, so `"Choose mood"` comes through as [`MoodChoice::Unset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct FieldInput {
    #[serde(default)]
    pub noun: Option<String>,
    #[serde(default)]
    pub verb: Option<String>,
    #[serde(default)]
    pub adjective: Option<String>,
    #[serde(default)]
    pub mood: MoodChoice,
}

impl FieldInput {
    /// A request with every slot unset.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a request from optional slot values. The mood is interpreted with
    /// [`MoodChoice::from_picker`], so the picker label counts as unset.
    pub fn from_parts(
        noun: Option<&str>,
        verb: Option<&str>,
        adjective: Option<&str>,
        mood: Option<&str>,
    ) -> Self {
        Self {
            noun: noun.map(str::to_string),
            verb: verb.map(str::to_string),
            adjective: adjective.map(str::to_string),
            mood: mood.map(MoodChoice::from_picker).unwrap_or_default(),
        }
    }

    pub fn with_noun(mut self, noun: impl Into<String>) -> Self {
        self.noun = Some(noun.into());
        self
    }

    pub fn with_verb(mut self, verb: impl Into<String>) -> Self {
        self.verb = Some(verb.into());
        self
    }

    pub fn with_adjective(mut self, adjective: impl Into<String>) -> Self {
        self.adjective = Some(adjective.into());
        self
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = MoodChoice::Chosen(mood.into());
        self
    }
}

/// The trimmed value of a lexical slot, or `None` when it is absent or blank.
pub fn supplied_text(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}
