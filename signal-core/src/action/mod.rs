pub mod descriptor;
pub mod registry;

pub use descriptor::{ActionDescriptor, SET_ALGO_PARAM};
pub use registry::Action;
