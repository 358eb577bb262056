pub mod aggregate;
pub mod labels;
