mod page;
pub mod tabs;

pub use page::ComponentDetailsPage;
