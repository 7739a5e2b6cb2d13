mod favorites;
mod slot;

pub use favorites::{DEFAULT_CAPACITY, DEFAULT_KEY, FavoritesStore, ImportError};
pub use slot::{FileStore, KeyValueStore, MemoryStore, StorageError};
