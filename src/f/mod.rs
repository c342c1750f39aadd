pub mod activation;
pub mod loss;

pub use activation::*;
pub use loss::*;
