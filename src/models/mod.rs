pub mod analysis;
pub mod daily_quiz;
pub mod preferences;
pub mod question;
pub mod quiz_result;
