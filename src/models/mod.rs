pub mod resolution;
pub mod response;
pub mod task;

pub use resolution::*;
pub use response::*;
pub use task::*;
