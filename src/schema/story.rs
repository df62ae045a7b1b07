use super::slot::Slot;

/// Where a resolved slot value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// Taken from the caller's input.
    Supplied,
    /// Drawn at random from the word bank.
    Fallback,
}

/// The value substituted for one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub source: Source,
}

/// The four values a template is rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotValues {
    pub noun: Resolved,
    pub verb: Resolved,
    pub adjective: Resolved,
    pub mood: Resolved,
}

impl SlotValues {
    pub fn get(&self, slot: Slot) -> &Resolved {
        match slot {
            Slot::Noun => &self.noun,
            Slot::Verb => &self.verb,
            Slot::Adjective => &self.adjective,
            Slot::Mood => &self.mood,
        }
    }

    /// Slots that were filled from the word bank.
    pub fn fallbacks(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| self.get(*slot).source == Source::Fallback)
            .collect()
    }
}

/// A rendered story along with how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub text: String,
    /// Index of the template within the generator's template set.
    pub template_index: usize,
    pub values: SlotValues,
}
