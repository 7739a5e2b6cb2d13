//! Properties of ideas generated from the built-in templates.

#![allow(missing_docs)]

use std::collections::HashSet;

use bookspark::{
    BookIdea, BookType, Generator, GeneratorOptions, Length, TargetAge, Templates, Tone,
};

fn every_option() -> Vec<GeneratorOptions> {
    let templates = Templates::builtin();
    let mut all = Vec::new();
    for book_type in BookType::ALL {
        for genre in templates.genres(*book_type) {
            for length in Length::ALL {
                for target_age in TargetAge::ALL {
                    for tone in Tone::ALL {
                        all.push(GeneratorOptions {
                            book_type: *book_type,
                            genre: genre.to_string(),
                            length: *length,
                            target_age: *target_age,
                            tone: *tone,
                        });
                    }
                }
            }
        }
    }
    all
}

fn assert_well_formed(idea: &BookIdea) {
    assert_eq!(idea.title.len(), 3, "{idea:?}");
    assert_eq!(idea.themes.len(), 2, "{idea:?}");
    assert_ne!(idea.themes[0], idea.themes[1], "{idea:?}");

    let strings = [
        &idea.id,
        &idea.genre,
        &idea.concept,
        &idea.main_character,
        &idea.setting,
        &idea.conflict,
        &idea.target_audience,
        &idea.opening_line,
    ];
    for value in strings.into_iter().chain(&idea.title).chain(&idea.themes) {
        assert!(!value.trim().is_empty(), "{idea:?}");
        assert!(!value.contains('{'), "unfilled placeholder in {value:?}");
    }
}

#[test]
fn every_option_combination_is_well_formed() {
    let templates = Templates::builtin();
    let mut generator = Generator::seeded(2024);

    for options in every_option() {
        let generation = generator.generate(&options, templates);
        assert!(generation.fallback.is_none(), "{options:?}");
        assert_well_formed(&generation.idea);
    }
}

#[test]
fn thousand_generations_never_repeat_a_theme() {
    let templates = Templates::builtin();
    let options = every_option();
    let mut generator = Generator::seeded(1000);

    for options in options.iter().cycle().take(1000) {
        let idea = generator.generate(options, templates).idea;
        let distinct: HashSet<_> = idea.themes.iter().collect();
        assert_eq!(distinct.len(), idea.themes.len(), "{idea:?}");
    }
}

#[test]
fn unknown_genres_fall_back_without_failing() {
    let templates = Templates::builtin();
    let mut generator = Generator::seeded(5);

    for (book_type, genre) in [
        (BookType::Fiction, "cyberpunk-western"),
        (BookType::Fiction, ""),
        (BookType::NonFiction, "romance"),
        (BookType::NonFiction, "  "),
    ] {
        let options = GeneratorOptions {
            book_type,
            genre: genre.to_string(),
            ..GeneratorOptions::default()
        };
        let generation = generator.generate(&options, templates);

        let fallback = generation.fallback.expect("fallback is reported");
        assert_eq!(fallback.requested, genre);
        assert_eq!(fallback.used, book_type.default_genre());
        assert_well_formed(&generation.idea);
    }
}

#[test]
fn same_seed_same_idea() {
    let templates = Templates::builtin();
    let options = GeneratorOptions {
        genre: "fantasy".to_string(),
        ..GeneratorOptions::default()
    };
    let now = chrono::Utc::now();

    let first = Generator::seeded(77).generate_at(&options, templates, now);
    let second = Generator::seeded(77).generate_at(&options, templates, now);
    assert_eq!(first, second);

    let other = Generator::seeded(78).generate_at(&options, templates, now);
    assert_ne!(first.idea.id, other.idea.id);
}

#[test]
fn ids_are_unique() {
    let templates = Templates::builtin();
    let options = GeneratorOptions::default();
    let mut generator = Generator::seeded(1000);

    let ids: HashSet<_> = (0..500)
        .map(|_| generator.generate(&options, templates).idea.id)
        .collect();
    assert_eq!(ids.len(), 500);
}
