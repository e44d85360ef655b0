pub mod get_resource;

pub use get_resource::{GetResourceUseCase, ResourceView};
