//! Device-local key/value storage.
//!
//! Everything the client persists (quiz progress, preferences, session,
//! cached analyses) goes through [`KeyValueStore`]. Values are opaque
//! strings; callers serialize with `serde_json` where they need structure.

pub mod file_store;
pub mod memory_store;

use std::sync::Arc;

use crate::error::Result;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Returns whether the key existed.
    fn remove(&self, key: &str) -> Result<bool>;

    fn entries(&self) -> Result<Vec<(String, String)>>;
}

pub type SharedStore = Arc<dyn KeyValueStore>;

pub mod keys {
    pub const LAST_COMPLETED_QUIZ: &str = "daily_quiz_last_completed";
    pub const LAST_QUIZ_ATTEMPT: &str = "daily_quiz_last_attempt";
    pub const REWARD_POINTS: &str = "quiz_reward_points";
    pub const USER_PREFERENCES: &str = "user_preferences";
    pub const SESSION: &str = "auth_session";
}
