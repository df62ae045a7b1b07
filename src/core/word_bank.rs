/// Word bank — the fallback word lists for each slot.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::schema::slot::Slot;

#[derive(Debug, Error)]
pub enum WordBankError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Fallback words, one ordered list per slot.
///
/// RON shape: `WordBank(nouns: [..], verbs: [..], adjectives: [..], moods: [..])`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordBank {
    pub nouns: Vec<String>,
    pub verbs: Vec<String>,
    pub adjectives: Vec<String>,
    pub moods: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for WordBank {
    fn default() -> Self {
        Self {
            nouns: owned(&["cat", "dog", "car", "house", "tree"]),
            verbs: owned(&["run", "jump", "swim", "fly", "dance"]),
            adjectives: owned(&["happy", "sad", "excited", "angry", "funny"]),
            moods: owned(&["Happy", "Sad", "Excited", "Angry", "Nervous"]),
        }
    }
}

impl WordBank {
    /// Load a word bank from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<WordBank, WordBankError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a word bank from a RON string.
    pub fn parse_ron(input: &str) -> Result<WordBank, WordBankError> {
        Ok(ron::from_str(input)?)
    }

    /// The word list for a slot.
    pub fn words(&self, slot: Slot) -> &[String] {
        match slot {
            Slot::Noun => &self.nouns,
            Slot::Verb => &self.verbs,
            Slot::Adjective => &self.adjectives,
            Slot::Mood => &self.moods,
        }
    }

    /// The first slot whose list is empty, if any.
    pub fn first_empty_slot(&self) -> Option<Slot> {
        Slot::ALL.into_iter().find(|slot| self.words(*slot).is_empty())
    }

    /// Total number of words across all four lists.
    pub fn total_words(&self) -> usize {
        Slot::ALL.iter().map(|slot| self.words(*slot).len()).sum()
    }
}
