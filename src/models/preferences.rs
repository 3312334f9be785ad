use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    #[default]
    Cash,
    Tournament,
}

impl GameType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::Cash => "cash",
            GameType::Tournament => "tournament",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_haptics")]
    pub haptics_enabled: bool,
    #[serde(default)]
    pub game_type: GameType,
    #[serde(default = "default_stack_bb")]
    pub default_stack_bb: u32,
}

fn default_haptics() -> bool {
    true
}

fn default_stack_bb() -> u32 {
    100
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            haptics_enabled: default_haptics(),
            game_type: GameType::default(),
            default_stack_bb: default_stack_bb(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub access_token: String,
}
