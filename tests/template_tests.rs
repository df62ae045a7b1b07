/// Shipped data files — loading and consistency with the built-in defaults.

use mad_libs::core::template::{TemplateSegment, TemplateSet, DEFAULT_TEMPLATES};
use mad_libs::core::word_bank::WordBank;
use mad_libs::schema::slot::Slot;

#[test]
fn shipped_templates_match_builtin() {
    let path = std::path::Path::new("data/templates.ron");
    let set = TemplateSet::load_from_ron(path).unwrap();
    let sources: Vec<&str> = set.templates.iter().map(|t| t.source.as_str()).collect();
    assert_eq!(sources, DEFAULT_TEMPLATES);
}

#[test]
fn shipped_word_bank_matches_builtin() {
    let path = std::path::Path::new("data/word_bank.ron");
    let bank = WordBank::load_from_ron(path).unwrap();
    assert_eq!(bank, WordBank::default());
}

#[test]
fn every_shipped_template_uses_exactly_the_four_slots() {
    let set = TemplateSet::load_from_ron(std::path::Path::new("data/templates.ron")).unwrap();

    for (index, template) in set.templates.iter().enumerate() {
        for segment in &template.segments {
            if let TemplateSegment::Placeholder(name) = segment {
                assert!(
                    Slot::from_placeholder(name).is_some(),
                    "Template {} references unknown placeholder '{}'",
                    index,
                    name
                );
            }
        }
        assert!(
            template.missing_slots().is_empty(),
            "Template {} is missing {:?}",
            index,
            template.missing_slots()
        );
    }
}

#[test]
fn shipped_word_lists_have_no_duplicates() {
    let bank = WordBank::load_from_ron(std::path::Path::new("data/word_bank.ron")).unwrap();
    for slot in Slot::ALL {
        let words = bank.words(slot);
        let mut sorted: Vec<&String> = words.iter().collect();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), words.len(), "duplicate words in {} list", slot);
    }
}
