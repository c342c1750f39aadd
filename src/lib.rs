pub mod error;
pub mod f;
pub mod matrix;
pub mod nn;

pub use error::{MinerError, Result};
pub use matrix::{Cell, Grid, Matrix, Operand};
pub use nn::perceptron::{HiddenSummation, Perceptron};
pub use nn::trainer::{Hyper, Trainer};

pub type Dataset = (Vec<Vec<f64>>, Vec<Vec<f64>>);
