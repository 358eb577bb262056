pub mod builder;
pub mod dto;
