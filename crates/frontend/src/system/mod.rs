pub mod access;
pub mod workspace;
