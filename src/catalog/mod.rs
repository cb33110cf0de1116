pub mod dogs;
pub mod models;

pub use models::{Catalog, DogRecord, ImageId, StringId};
