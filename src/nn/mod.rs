pub mod perceptron;
pub mod trainer;
