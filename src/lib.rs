//! Rule-based book idea generation
//!
//! Ideas are assembled by sampling fragments from genre templates and are
//! kept in a capped favourites store backed by a key-value slot.

pub mod domain;
pub use domain::{
    BookIdea, BookType, Config, GeneratorOptions, Length, TargetAge, TemplateBag, Templates, Tone,
};

pub mod generator;
pub use generator::{Fallback, Generation, Generator, RepeatedPlaceholders};

/// Durable storage for favourite ideas.
pub mod storage;
pub use storage::{FavoritesStore, FileStore, ImportError, KeyValueStore, MemoryStore, StorageError};

pub mod export;
