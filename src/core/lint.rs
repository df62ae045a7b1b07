/// Lint checks for template sets and word banks.

use rustc_hash::FxHashSet;
use std::path::Path;

use crate::core::template::TemplateSet;
use crate::core::word_bank::WordBank;
use crate::schema::slot::Slot;

/// Problems found across one or more files. Errors make a file set unusable
/// for generation; warnings do not.
#[derive(Debug, Default)]
pub struct LintReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    seen_sources: FxHashSet<String>,
}

impl LintReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Check every template in `set`. Duplicates are tracked across all sets
    /// linted into this report.
    pub fn lint_templates(&mut self, file: &Path, set: &TemplateSet) {
        for (index, template) in set.templates.iter().enumerate() {
            let at = format!("{} template {}", file.display(), index);

            for name in template.unknown_placeholders() {
                self.errors
                    .push(format!("{}: unknown placeholder '{{{}}}'", at, name));
            }

            for slot in template.missing_slots() {
                self.errors.push(format!(
                    "{}: missing placeholder '{{{}}}'",
                    at,
                    slot.placeholder()
                ));
            }

            if !self.seen_sources.insert(template.source.clone()) {
                self.warnings
                    .push(format!("{}: duplicate template \"{}\"", at, template.source));
            }
        }
    }

    /// Check a word bank for empty lists, blank entries, and duplicates.
    pub fn lint_word_bank(&mut self, file: &Path, bank: &WordBank) {
        for slot in Slot::ALL {
            let words = bank.words(slot);
            if words.is_empty() {
                self.errors.push(format!(
                    "{}: {} list is empty (no fallback possible)",
                    file.display(),
                    slot.label()
                ));
                continue;
            }

            let mut seen: FxHashSet<&str> = FxHashSet::default();
            for word in words {
                if word.trim().is_empty() {
                    self.warnings
                        .push(format!("{}: blank {} entry", file.display(), slot.label()));
                } else if !seen.insert(word.as_str()) {
                    self.warnings.push(format!(
                        "{}: duplicate {} '{}'",
                        file.display(),
                        slot.label(),
                        word
                    ));
                }
            }
        }
    }
}
