pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod loader;
pub mod navigation;
pub mod storage;
pub mod tab_state;
