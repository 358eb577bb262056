pub mod access_button;
pub mod context_switcher;
pub mod details_section;
