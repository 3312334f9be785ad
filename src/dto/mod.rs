pub mod cache_dto;
pub mod quiz_dto;
