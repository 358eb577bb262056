mod object_meta;

pub use object_meta::{ObjectMeta, Resource};
