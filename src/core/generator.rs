/// The story generator: FieldInput → Story.
///
/// Resolves each slot (supplied value or word-bank fallback), picks a
/// template, and renders it. All randomness comes from the caller's RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::template::{FormatError, TemplateLoadError, TemplateSet};
use crate::core::word_bank::{WordBank, WordBankError};
use crate::schema::fields::{supplied_text, FieldInput};
use crate::schema::slot::Slot;
use crate::schema::story::{Resolved, SlotValues, Source, Story};

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("word bank error: {0}")]
    WordBank(#[from] WordBankError),
    #[error("template error: {0}")]
    Templates(#[from] TemplateLoadError),
    #[error("template {index} is missing placeholder {{{placeholder}}}")]
    MissingPlaceholder { index: usize, placeholder: Slot },
    #[error("template {index} uses unknown placeholder {{{placeholder}}}")]
    UnknownPlaceholder { index: usize, placeholder: String },
    #[error("template set is empty")]
    NoTemplates,
    #[error("word list for {0} is empty")]
    EmptyWordList(Slot),
}

/// Produces stories from a validated word bank and template set.
///
/// Immutable once built, so one generator can serve any number of callers.
#[derive(Debug, Clone)]
pub struct StoryGenerator {
    word_bank: WordBank,
    templates: TemplateSet,
}

/// Builder for constructing a `StoryGenerator`.
#[derive(Debug, Default)]
pub struct StoryGeneratorBuilder {
    word_bank_path: Option<PathBuf>,
    template_paths: Vec<PathBuf>,
    templates_dir: Option<PathBuf>,
    /// Directly provided word bank (for testing without files).
    word_bank: Option<WordBank>,
    /// Directly provided templates (for testing without files).
    templates: Option<TemplateSet>,
}

impl StoryGenerator {
    pub fn builder() -> StoryGeneratorBuilder {
        StoryGeneratorBuilder::default()
    }

    /// Validate and wrap a word bank and template set.
    ///
    /// Every word list must be non-empty, and every template must use all
    /// four slot placeholders and nothing else.
    pub fn new(word_bank: WordBank, templates: TemplateSet) -> Result<Self, ConfigurationError> {
        if let Some(slot) = word_bank.first_empty_slot() {
            return Err(ConfigurationError::EmptyWordList(slot));
        }
        if templates.is_empty() {
            return Err(ConfigurationError::NoTemplates);
        }
        for (index, template) in templates.templates.iter().enumerate() {
            if let Some(name) = template.unknown_placeholders().first() {
                return Err(ConfigurationError::UnknownPlaceholder {
                    index,
                    placeholder: name.to_string(),
                });
            }
            if let Some(&slot) = template.missing_slots().first() {
                return Err(ConfigurationError::MissingPlaceholder {
                    index,
                    placeholder: slot,
                });
            }
        }

        info!(
            templates = templates.len(),
            words = word_bank.total_words(),
            "story generator ready"
        );
        Ok(Self {
            word_bank,
            templates,
        })
    }

    pub fn word_bank(&self) -> &WordBank {
        &self.word_bank
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// The predefined moods, in picker order.
    pub fn moods(&self) -> &[String] {
        self.word_bank.words(Slot::Mood)
    }

    /// Generate a story and return its text.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        input: &FieldInput,
        rng: &mut R,
    ) -> Result<String, FormatError> {
        self.generate_detailed(input, rng).map(|story| story.text)
    }

    /// Generate from loose slot values. A mood equal to the picker label or
    /// blank is treated as unset.
    pub fn generate_story<R: Rng + ?Sized>(
        &self,
        noun: Option<&str>,
        verb: Option<&str>,
        adjective: Option<&str>,
        mood: Option<&str>,
        rng: &mut R,
    ) -> Result<String, FormatError> {
        let input = FieldInput::from_parts(noun, verb, adjective, mood);
        self.generate(&input, rng)
    }

    /// Generate with a fresh `StdRng` seeded from `seed`.
    pub fn generate_seeded(&self, input: &FieldInput, seed: u64) -> Result<String, FormatError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(input, &mut rng)
    }

    /// Generate a story, keeping the template index and slot provenance.
    ///
    /// Draw order is fixed: noun, verb, adjective and mood fallbacks (each
    /// only when that slot is unset), then the template.
    pub fn generate_detailed<R: Rng + ?Sized>(
        &self,
        input: &FieldInput,
        rng: &mut R,
    ) -> Result<Story, FormatError> {
        let noun = self.resolve(Slot::Noun, supplied_text(input.noun.as_deref()), rng);
        let verb = self.resolve(Slot::Verb, supplied_text(input.verb.as_deref()), rng);
        let adjective = self.resolve(
            Slot::Adjective,
            supplied_text(input.adjective.as_deref()),
            rng,
        );
        let mood = self.resolve(Slot::Mood, input.mood.as_supplied(), rng);
        let values = SlotValues {
            noun,
            verb,
            adjective,
            mood,
        };

        let template_index = rng.gen_range(0..self.templates.len());
        let template = &self.templates.templates[template_index];
        let text = template.render(&values)?;

        debug!(
            template_index,
            fallbacks = ?values.fallbacks(),
            "generated story"
        );
        Ok(Story {
            text,
            template_index,
            values,
        })
    }

    fn resolve<R: Rng + ?Sized>(&self, slot: Slot, supplied: Option<&str>, rng: &mut R) -> Resolved {
        match supplied {
            Some(value) => Resolved {
                value: value.to_string(),
                source: Source::Supplied,
            },
            None => {
                // Lists are non-empty after `new`.
                let words = self.word_bank.words(slot);
                Resolved {
                    value: words[rng.gen_range(0..words.len())].clone(),
                    source: Source::Fallback,
                }
            }
        }
    }
}

impl StoryGeneratorBuilder {
    pub fn word_bank_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.word_bank_path = Some(path.into());
        self
    }

    /// Add a template file. Files are merged in the order they are added.
    pub fn template_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_paths.push(path.into());
        self
    }

    /// Load every `.ron` file in a directory, in file-name order.
    pub fn templates_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.templates_dir = Some(path.into());
        self
    }

    /// Provide a word bank directly (for testing without files).
    pub fn with_word_bank(mut self, word_bank: WordBank) -> Self {
        self.word_bank = Some(word_bank);
        self
    }

    /// Provide templates directly (for testing without files).
    pub fn with_templates(mut self, templates: TemplateSet) -> Self {
        self.templates = Some(templates);
        self
    }

    /// Load all sources and validate them.
    ///
    /// Without any template source the built-in templates are used; file
    /// sources are appended after directly provided templates. Without a
    /// word bank source the built-in word bank is used.
    pub fn build(self) -> Result<StoryGenerator, ConfigurationError> {
        let word_bank = match (self.word_bank, &self.word_bank_path) {
            (Some(bank), _) => bank,
            (None, Some(path)) => {
                debug!(path = %path.display(), "loading word bank");
                WordBank::load_from_ron(path)?
            }
            (None, None) => WordBank::default(),
        };

        let has_file_templates = !self.template_paths.is_empty() || self.templates_dir.is_some();
        let mut templates = match self.templates {
            Some(templates) => templates,
            None if has_file_templates => TemplateSet::default(),
            None => TemplateSet::builtin()?,
        };

        for path in &self.template_paths {
            debug!(path = %path.display(), "loading templates");
            templates.merge(TemplateSet::load_from_ron(path)?);
        }

        if let Some(ref dir) = self.templates_dir {
            for path in ron_files_in_dir(dir)? {
                debug!(path = %path.display(), "loading templates");
                templates.merge(TemplateSet::load_from_ron(&path)?);
            }
        }

        StoryGenerator::new(word_bank, templates)
    }
}

/// All `.ron` files directly inside `dir`, sorted by path.
fn ron_files_in_dir(dir: &Path) -> Result<Vec<PathBuf>, ConfigurationError> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
