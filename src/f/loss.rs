/// `0.5 * sum((target - output)^2)` over the paired entries.
pub fn half_squared_error(target: &[f64], output: &[f64]) -> f64 {
    target
        .iter()
        .zip(output.iter())
        .fold(0., |a, (t, o)| a + 0.5 * (t - o).powi(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_the_squared_distance() {
        assert_eq!(half_squared_error(&[1., 0.], &[0., 0.]), 0.5);
        assert_eq!(half_squared_error(&[0.5], &[0.5]), 0.);
    }
}
