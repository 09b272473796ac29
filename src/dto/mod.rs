pub mod auth_dto;
pub mod search_dto;
