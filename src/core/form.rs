/// Story form — the input/display state a front end shows to the player.
///
/// Holds the three text fields, the mood picker text and the story display,
/// with the generate, reset and help actions. No widget toolkit involved;
/// front ends copy user input in and render `display()` out.

use rand::Rng;

use crate::core::generator::StoryGenerator;
use crate::core::template::FormatError;
use crate::schema::fields::{FieldInput, MoodChoice, MOOD_PICKER_LABEL};
use crate::schema::slot::Slot;

/// Display text before any story has been generated.
pub const STORY_PLACEHOLDER: &str = "Your story will appear here!";

pub const HELP_TITLE: &str = "Help";

pub const HELP_MESSAGE: &str = "Welcome to the Mad Libs Game!\n\n\
1. Enter a noun, verb, and adjective in the respective fields.\n\
2. Choose a mood from the dropdown menu.\n\
3. Click 'Generate Story!' to create a fun story.\n\
4. Use 'Reset' to clear the inputs and start over.\n\
5. Click 'Help' for this message.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryForm {
    pub noun: String,
    pub verb: String,
    pub adjective: String,
    /// Mood picker text; `MOOD_PICKER_LABEL` until a mood is picked.
    pub mood: String,
    display: String,
}

impl Default for StoryForm {
    fn default() -> Self {
        Self {
            noun: String::new(),
            verb: String::new(),
            adjective: String::new(),
            mood: MOOD_PICKER_LABEL.to_string(),
            display: STORY_PLACEHOLDER.to_string(),
        }
    }
}

impl StoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input for a slot. For `Slot::Mood` this is the picker text.
    pub fn set_field(&mut self, slot: Slot, text: impl Into<String>) {
        let text = text.into();
        match slot {
            Slot::Noun => self.noun = text,
            Slot::Verb => self.verb = text,
            Slot::Adjective => self.adjective = text,
            Slot::Mood => self.mood = text,
        }
    }

    pub fn select_mood(&mut self, mood: impl Into<String>) {
        self.mood = mood.into();
    }

    /// Put the mood picker back on its label.
    pub fn reset_mood(&mut self) {
        self.mood = MOOD_PICKER_LABEL.to_string();
    }

    /// The current story display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Snapshot of the form as a generation request.
    pub fn field_input(&self) -> FieldInput {
        FieldInput {
            noun: Some(self.noun.clone()),
            verb: Some(self.verb.clone()),
            adjective: Some(self.adjective.clone()),
            mood: MoodChoice::from_picker(&self.mood),
        }
    }

    /// Generate a story from the current fields and show it.
    ///
    /// The fields are left as they are, so generating again re-rolls only
    /// the blank slots and the template.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        generator: &StoryGenerator,
        rng: &mut R,
    ) -> Result<&str, FormatError> {
        self.display = generator.generate(&self.field_input(), rng)?;
        Ok(self.display.as_str())
    }

    /// Clear all inputs and restore the placeholder display.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn help() -> &'static str {
        HELP_MESSAGE
    }

    /// Moods a picker should offer.
    pub fn mood_options(generator: &StoryGenerator) -> &[String] {
        generator.moods()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_form_shows_placeholders() {
        let form = StoryForm::new();
        assert_eq!(form.display(), "Your story will appear here!");
        assert_eq!(form.mood, "Choose mood");
        assert!(form.noun.is_empty() && form.verb.is_empty() && form.adjective.is_empty());
        assert_eq!(form.field_input().mood, MoodChoice::Unset);
    }

    #[test]
    fn generate_updates_display() {
        let generator = StoryGenerator::builder().build().unwrap();
        let mut form = StoryForm::new();
        form.set_field(Slot::Noun, "dragon");
        form.set_field(Slot::Verb, "soar");
        form.set_field(Slot::Adjective, "ancient");
        form.select_mood("Excited");

        let mut rng = StepRng::new(0, 0);
        let story = form.generate(&generator, &mut rng).unwrap().to_string();
        assert_eq!(
            story,
            "The ancient dragon decided to soar because it was feeling Excited."
        );
        assert_eq!(form.display(), story);
        // Inputs survive generation
        assert_eq!(form.noun, "dragon");
    }

    #[test]
    fn unselected_picker_never_shows_label() {
        let generator = StoryGenerator::builder().build().unwrap();
        let mut form = StoryForm::new();
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..20 {
            let story = form.generate(&generator, &mut rng).unwrap();
            assert!(!story.contains(MOOD_PICKER_LABEL));
        }
    }

    #[test]
    fn reset_restores_everything() {
        let generator = StoryGenerator::builder().build().unwrap();
        let mut form = StoryForm::new();
        form.set_field(Slot::Noun, "dragon");
        form.select_mood("Sad");
        form.generate(&generator, &mut StepRng::new(0, 0)).unwrap();
        assert_ne!(form.display(), STORY_PLACEHOLDER);

        form.reset();
        assert_eq!(form, StoryForm::new());
    }

    #[test]
    fn reset_mood_unsets_only_the_mood() {
        let mut form = StoryForm::new();
        form.set_field(Slot::Verb, "soar");
        form.select_mood("Angry");
        form.reset_mood();
        assert_eq!(form.field_input().mood, MoodChoice::Unset);
        assert_eq!(form.verb, "soar");
    }

    #[test]
    fn help_lists_five_steps() {
        let help = StoryForm::help();
        assert!(help.starts_with("Welcome to the Mad Libs Game!\n\n1. "));
        assert!(help.contains("4. Use 'Reset' to clear the inputs and start over."));
        assert!(help.ends_with("5. Click 'Help' for this message."));
    }

    #[test]
    fn mood_options_match_word_bank() {
        let generator = StoryGenerator::builder().build().unwrap();
        assert_eq!(
            StoryForm::mood_options(&generator),
            ["Happy", "Sad", "Excited", "Angry", "Nervous"]
        );
    }
}
