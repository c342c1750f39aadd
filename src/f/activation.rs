pub fn tanh(x: f64) -> f64 {
    x.tanh()
}

/// Derivative of tanh written in terms of its output `y = tanh(x)`.
pub fn d_tanh(y: f64) -> f64 {
    1. - y.powi(2)
}
