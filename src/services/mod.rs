pub mod api_service;
pub mod attempt_service;
pub mod cache_service;
pub mod grading_service;
pub mod preferences_service;
pub mod quiz_service;
pub mod session_service;
pub mod support_service;
