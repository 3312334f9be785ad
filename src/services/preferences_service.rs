use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::preferences::{GameType, Theme, UserPreferences};
use crate::storage::{keys, SharedStore};

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesPatch {
    pub theme: Option<Theme>,
    pub haptics_enabled: Option<bool>,
    pub game_type: Option<GameType>,
    pub default_stack_bb: Option<u32>,
}

#[derive(Clone)]
pub struct PreferencesService {
    store: SharedStore,
}

impl PreferencesService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Result<UserPreferences> {
        let Some(raw) = self.store.get(keys::USER_PREFERENCES)? else {
            return Ok(UserPreferences::default());
        };
        match serde_json::from_str(&raw) {
            Ok(prefs) => Ok(prefs),
            Err(e) => {
                tracing::warn!("Stored preferences are unreadable, using defaults: {}", e);
                Ok(UserPreferences::default())
            }
        }
    }

    pub fn update(&self, patch: PreferencesPatch) -> Result<UserPreferences> {
        let mut prefs = self.load()?;
        if let Some(theme) = patch.theme {
            prefs.theme = theme;
        }
        if let Some(haptics) = patch.haptics_enabled {
            prefs.haptics_enabled = haptics;
        }
        if let Some(game_type) = patch.game_type {
            prefs.game_type = game_type;
        }
        if let Some(stack) = patch.default_stack_bb {
            if stack == 0 {
                return Err(Error::InvalidArgument(
                    "Default stack must be at least 1 big blind".to_string(),
                ));
            }
            prefs.default_stack_bb = stack;
        }
        self.store
            .set(keys::USER_PREFERENCES, &serde_json::to_string(&prefs)?)?;
        Ok(prefs)
    }
}
