//! Measures bulk idea generation, and saving generated ideas into a full
//! favourites store.

#![allow(missing_docs)]

use bookspark::{BookType, FavoritesStore, Generator, GeneratorOptions, MemoryStore, Templates};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

fn options() -> Vec<GeneratorOptions> {
    let templates = Templates::builtin();
    BookType::ALL
        .iter()
        .flat_map(|book_type| {
            templates.genres(*book_type).map(|genre| GeneratorOptions {
                book_type: *book_type,
                genre: genre.to_string(),
                ..GeneratorOptions::default()
            })
        })
        .collect()
}

fn generate_many(c: &mut Criterion) {
    let options = options();
    let templates = Templates::builtin();

    c.bench_function("generate 1000 ideas", |b| {
        let mut generator = Generator::seeded(0);
        b.iter(|| {
            for options in options.iter().cycle().take(1000) {
                std::hint::black_box(generator.generate(options, templates));
            }
        });
    });
}

fn save_into_full_store(c: &mut Criterion) {
    let options = GeneratorOptions::default();
    let templates = Templates::builtin();

    c.bench_function("save 100 ideas into a full store", |b| {
        b.iter_batched(
            || {
                let mut generator = Generator::seeded(1);
                let mut store = FavoritesStore::new(MemoryStore::new());
                for _ in 0..store.capacity() {
                    store
                        .save(generator.generate(&options, templates).idea)
                        .unwrap();
                }
                let ideas: Vec<_> = (0..100)
                    .map(|_| generator.generate(&options, templates).idea)
                    .collect();
                (store, ideas)
            },
            |(mut store, ideas)| {
                for idea in ideas {
                    store.save(idea).unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, generate_many, save_into_full_store);
criterion_main!(benches);
