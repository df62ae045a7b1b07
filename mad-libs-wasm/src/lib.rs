//! WASM bindings for mad-libs — powers the browser version of the game.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use mad_libs::core::form::{StoryForm, HELP_TITLE};
use mad_libs::core::generator::StoryGenerator;
use mad_libs::core::template::TemplateSet;
use mad_libs::core::word_bank::WordBank;
use mad_libs::schema::fields::FieldInput;

// ---------------------------------------------------------------------------
// Embedded game data — compiled into the WASM binary
// ---------------------------------------------------------------------------
mod data {
    pub const WORD_BANK: &str = include_str!("../../data/word_bank.ron");
    pub const TEMPLATES: &str = include_str!("../../data/templates.ron");
}

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct FormInfo<'a> {
    noun: &'a str,
    verb: &'a str,
    adjective: &'a str,
    mood: &'a str,
    story: &'a str,
}

fn build_generator() -> Result<StoryGenerator, JsError> {
    let word_bank = WordBank::parse_ron(data::WORD_BANK)
        .map_err(|e| JsError::new(&format!("Word bank parse error: {e}")))?;
    let templates = TemplateSet::parse_ron(data::TEMPLATES)
        .map_err(|e| JsError::new(&format!("Template parse error: {e}")))?;
    StoryGenerator::builder()
        .with_word_bank(word_bank)
        .with_templates(templates)
        .build()
        .map_err(|e| JsError::new(&format!("Generator build error: {e}")))
}

// ---------------------------------------------------------------------------
// MadLibsGame — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct MadLibsGame {
    generator: StoryGenerator,
    form: StoryForm,
    rng: StdRng,
}

#[wasm_bindgen]
impl MadLibsGame {
    /// Create a game whose random choices follow `seed`.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<MadLibsGame, JsError> {
        Ok(MadLibsGame {
            generator: build_generator()?,
            form: StoryForm::new(),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Create a game seeded from the browser's entropy source.
    pub fn unseeded() -> Result<MadLibsGame, JsError> {
        Ok(MadLibsGame {
            generator: build_generator()?,
            form: StoryForm::new(),
            rng: StdRng::from_entropy(),
        })
    }

    pub fn set_noun(&mut self, text: &str) {
        self.form.noun = text.to_string();
    }

    pub fn set_verb(&mut self, text: &str) {
        self.form.verb = text.to_string();
    }

    pub fn set_adjective(&mut self, text: &str) {
        self.form.adjective = text.to_string();
    }

    /// Set the picker text. The picker label or an empty string means unset.
    pub fn select_mood(&mut self, text: &str) {
        self.form.select_mood(text);
    }

    /// Generate from the current form fields and return the new display text.
    pub fn generate(&mut self) -> Result<String, JsError> {
        self.form
            .generate(&self.generator, &mut self.rng)
            .map(str::to_string)
            .map_err(|e| JsError::new(&format!("Generation error: {e}")))
    }

    /// Generate directly from four values; empty strings mean unset.
    pub fn generate_from(
        &mut self,
        noun: &str,
        verb: &str,
        adjective: &str,
        mood: &str,
    ) -> Result<String, JsError> {
        self.generator
            .generate_story(Some(noun), Some(verb), Some(adjective), Some(mood), &mut self.rng)
            .map_err(|e| JsError::new(&format!("Generation error: {e}")))
    }

    /// Generate from a JSON object; every key is optional.
    ///
    /// Expected JSON shape:
    /// ```json
    /// { "noun": "dragon", "verb": "soar", "adjective": "ancient", "mood": "Excited" }
    /// ```
    pub fn generate_json(&mut self, fields_json: &str) -> Result<String, JsError> {
        let fields: FieldInput = serde_json::from_str(fields_json)
            .map_err(|e| JsError::new(&format!("Invalid fields JSON: {e}")))?;
        self.generator
            .generate(&fields, &mut self.rng)
            .map_err(|e| JsError::new(&format!("Generation error: {e}")))
    }

    /// Clear the form and restore the placeholder story text.
    pub fn reset(&mut self) {
        self.form.reset();
    }

    /// Reseed the random source without touching the form.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn display(&self) -> String {
        self.form.display().to_string()
    }

    /// Return a JSON snapshot of the form fields and story.
    pub fn form_state(&self) -> Result<String, JsError> {
        let info = FormInfo {
            noun: &self.form.noun,
            verb: &self.form.verb,
            adjective: &self.form.adjective,
            mood: &self.form.mood,
            story: self.form.display(),
        };
        serde_json::to_string(&info)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Return a JSON array of the moods the picker should offer.
    pub fn moods(&self) -> String {
        serde_json::to_string(StoryForm::mood_options(&self.generator))
            .unwrap_or_else(|_| "[]".to_string())
    }

    pub fn help_title() -> String {
        HELP_TITLE.to_string()
    }

    pub fn help() -> String {
        StoryForm::help().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_data_builds() {
        let generator = build_generator().ok().unwrap();
        assert_eq!(generator.templates().len(), 8);
        assert_eq!(generator.moods().len(), 5);
    }

    #[test]
    fn form_flow() {
        let mut game = MadLibsGame::new(42).ok().unwrap();
        game.set_noun("dragon");
        game.select_mood("Choose mood");
        let story = game.generate().ok().unwrap();
        assert!(story.contains("dragon"));
        assert_eq!(game.display(), story);

        game.reset();
        assert_eq!(game.display(), "Your story will appear here!");
    }

    #[test]
    fn json_fields_are_optional() {
        let mut game = MadLibsGame::new(7).ok().unwrap();
        let story = game.generate_json(r#"{"verb": "soar"}"#).ok().unwrap();
        assert!(story.contains("soar"));
    }

    #[test]
    fn json_picker_label_mood_is_replaced() {
        let mut game = MadLibsGame::new(7).ok().unwrap();
        for _ in 0..20 {
            let story = game
                .generate_json(r#"{"noun": "dragon", "mood": "Choose mood"}"#)
                .ok()
                .unwrap();
            assert!(story.contains("dragon"));
            assert!(!story.contains("Choose mood"), "{}", story);
        }
    }
}
