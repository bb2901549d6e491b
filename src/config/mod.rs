pub mod load;
pub mod save;
pub mod types;

pub use types::{Config, GrammarMode, MAX_NUM_OF_PHOTOS, SETTINGS_FILE_NAME, UserSettings};
