pub mod activity;

pub use activity::ActivityTab;
