/// Generator integration tests — end-to-end slot resolution and rendering.

use mad_libs::core::form::StoryForm;
use mad_libs::core::generator::{ConfigurationError, StoryGenerator};
use mad_libs::core::template::TemplateSet;
use mad_libs::core::word_bank::WordBank;
use mad_libs::schema::fields::FieldInput;
use mad_libs::schema::slot::Slot;
use mad_libs::schema::story::Source;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn shipped_generator() -> StoryGenerator {
    StoryGenerator::builder()
        .word_bank_path("data/word_bank.ron")
        .template_path("data/templates.ron")
        .build()
        .unwrap()
}

#[test]
fn dragon_scenario() {
    let templates = TemplateSet::from_sources([
        "The {adj} {noun} decided to {verb} because it was feeling {mood}.",
    ])
    .unwrap();
    let generator = StoryGenerator::builder()
        .with_templates(templates)
        .build()
        .unwrap();

    let mut rng = StdRng::seed_from_u64(0);
    let story = generator
        .generate_story(Some("dragon"), Some("soar"), Some("ancient"), Some("Excited"), &mut rng)
        .unwrap();
    assert_eq!(
        story,
        "The ancient dragon decided to soar because it was feeling Excited."
    );
}

#[test]
fn all_unset_with_first_choice_rng() {
    let generator = shipped_generator();
    let mut rng = StepRng::new(0, 0);
    let first = generator.generate(&FieldInput::empty(), &mut rng).unwrap();
    let second = generator.generate(&FieldInput::empty(), &mut rng).unwrap();
    assert_eq!(first, "The happy cat decided to run because it was feeling Happy.");
    assert_eq!(first, second);
}

#[test]
fn seeded_generation_is_reproducible() {
    let generator = shipped_generator();
    let input = FieldInput::empty().with_noun("dragon");

    let run = |seed: u64| -> Vec<String> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..10)
            .map(|_| generator.generate(&input, &mut rng).unwrap())
            .collect()
    };

    assert_eq!(run(42), run(42));
    assert_ne!(run(42), run(43));
}

#[test]
fn unset_slots_draw_from_word_bank() {
    let generator = shipped_generator();
    let bank = generator.word_bank().clone();
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..100 {
        let story = generator
            .generate_detailed(&FieldInput::empty(), &mut rng)
            .unwrap();
        for slot in Slot::ALL {
            let resolved = story.values.get(slot);
            assert_eq!(resolved.source, Source::Fallback);
            assert!(
                bank.words(slot).contains(&resolved.value),
                "{} value '{}' not in word bank",
                slot,
                resolved.value
            );
            assert!(story.text.contains(&resolved.value));
        }
    }
}

#[test]
fn supplied_values_appear_verbatim() {
    let generator = shipped_generator();
    let mut rng = StdRng::seed_from_u64(77);
    let input = FieldInput::empty()
        .with_noun("Space Whale")
        .with_verb("moonwalk")
        .with_adjective("iridescent")
        .with_mood("Bewildered");

    for _ in 0..50 {
        let story = generator.generate(&input, &mut rng).unwrap();
        for value in ["Space Whale", "moonwalk", "iridescent", "Bewildered"] {
            assert!(story.contains(value), "'{}' missing from: {}", value, story);
        }
        assert!(!story.contains('{') && !story.contains('}'));
    }
}

#[test]
fn picker_label_never_rendered() {
    let generator = shipped_generator();
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let story = generator
            .generate_story(None, None, None, Some("Choose mood"), &mut rng)
            .unwrap();
        assert!(!story.contains("Choose mood"), "{}", story);
    }
}

#[test]
fn custom_word_bank_and_templates() {
    let generator = StoryGenerator::builder()
        .word_bank_path("tests/fixtures/test_word_bank.ron")
        .template_path("tests/fixtures/test_templates.ron")
        .build()
        .unwrap();
    let mut rng = StepRng::new(0, 0);
    let story = generator.generate(&FieldInput::empty(), &mut rng).unwrap();
    assert_eq!(
        story,
        "The rusty robot decided to whistle because it was feeling Sleepy."
    );
}

#[test]
fn empty_word_list_aborts_build() {
    let bank = WordBank {
        moods: Vec::new(),
        ..WordBank::default()
    };
    let result = StoryGenerator::builder().with_word_bank(bank).build();
    assert!(matches!(
        result,
        Err(ConfigurationError::EmptyWordList(Slot::Mood))
    ));
}

#[test]
fn shared_generator_across_threads() {
    let generator = std::sync::Arc::new(shipped_generator());
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            let generator = std::sync::Arc::clone(&generator);
            std::thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(seed);
                generator.generate(&FieldInput::empty(), &mut rng).unwrap()
            })
        })
        .collect();

    for (seed, handle) in handles.into_iter().enumerate() {
        let story = handle.join().unwrap();
        let expected = generator
            .generate_seeded(&FieldInput::empty(), seed as u64)
            .unwrap();
        assert_eq!(story, expected);
    }
}

#[test]
fn form_generate_then_reset() {
    let generator = shipped_generator();
    let mut form = StoryForm::new();
    form.set_field(Slot::Adjective, "ancient");
    let mut rng = StdRng::seed_from_u64(1);
    let story = form.generate(&generator, &mut rng).unwrap().to_string();
    assert!(story.contains("ancient"));

    form.reset();
    assert_eq!(form.display(), "Your story will appear here!");
    assert!(form.adjective.is_empty());
}
