pub mod builder;
pub mod engine;
pub mod error;
pub mod preprocess;
pub mod select;
pub mod spec;
pub mod tensor;

pub use builder::*;
pub use engine::*;
pub use error::*;
pub use preprocess::*;
pub use select::*;
pub use spec::*;
pub use tensor::*;
