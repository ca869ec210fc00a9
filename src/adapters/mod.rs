// Adapters layer: concrete implementations of the domain ports (remote tables, preference storage).

pub mod preferences;
pub mod sheets;

pub use preferences::{FilePreferenceStore, MemoryPreferenceStore};
pub use sheets::SheetsClient;
