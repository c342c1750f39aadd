use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{MinerError, Result};
use crate::f::{d_tanh, half_squared_error, tanh};
use crate::matrix::Matrix;

use super::trainer::Trainer;

const INPUT_WEIGHT_BOUND: f64 = 0.1;
const OUTPUT_WEIGHT_BOUND: f64 = 1.0;

/// How the hidden layer sums its weighted inputs.
///
/// `Faithful` reads the input activation at the hidden unit's index and the
/// input weight at `(hidden, input)`, which equals the weighted sum only when
/// the input and hidden layers have the same width; other topologies are
/// rejected by `predict`. `Corrected` is the standard `sum_i x[i] * w[i][j]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HiddenSummation {
    #[default]
    Faithful,
    Corrected,
}

/// Three-layer tanh network trained by backpropagation with momentum.
#[derive(Debug, Clone)]
pub struct Perceptron {
    input_labels: Vec<String>,
    hidden: usize,
    output_labels: Vec<String>,
    act_input: Matrix,
    act_hidden: Matrix,
    act_output: Matrix,
    weight_ih: Matrix,
    weight_ho: Matrix,
    change_i: Matrix,
    change_o: Matrix,
    out_delta: Vec<f64>,
    hidden_delta: Vec<f64>,
    summation: HiddenSummation,
}

impl Perceptron {
    /// The label lists only size the input and output layers.
    pub fn new<R: Rng + ?Sized>(
        input: &[impl ToString],
        hidden: usize,
        output: &[impl ToString],
        rng: &mut R,
    ) -> Result<Perceptron> {
        if input.is_empty() {
            return Err(MinerError::invalid("input layer needs at least one label"));
        }
        if output.is_empty() {
            return Err(MinerError::invalid("output layer needs at least one label"));
        }
        if hidden == 0 {
            return Err(MinerError::invalid("hidden layer needs at least one unit"));
        }

        let (n_in, n_out) = (input.len(), output.len());
        log::debug!("weaving {}-{}-{} perceptron", n_in, hidden, n_out);

        Ok(Perceptron {
            input_labels: input.iter().map(ToString::to_string).collect(),
            hidden,
            output_labels: output.iter().map(ToString::to_string).collect(),
            act_input: Matrix::ones(1, n_in),
            act_hidden: Matrix::ones(1, hidden),
            act_output: Matrix::ones(1, n_out),
            weight_ih: Matrix::random(n_in, hidden, INPUT_WEIGHT_BOUND, rng)?,
            weight_ho: Matrix::random(hidden, n_out, OUTPUT_WEIGHT_BOUND, rng)?,
            change_i: Matrix::zeros(n_in, hidden),
            change_o: Matrix::zeros(hidden, n_out),
            out_delta: vec![0.; n_out],
            hidden_delta: vec![0.; hidden],
            summation: HiddenSummation::default(),
        })
    }

    pub fn seeded(
        input: &[impl ToString],
        hidden: usize,
        output: &[impl ToString],
        seed: u64,
    ) -> Result<Perceptron> {
        Perceptron::new(input, hidden, output, &mut StdRng::seed_from_u64(seed))
    }

    pub fn set_hidden_summation(&mut self, summation: HiddenSummation) -> &mut Self {
        self.summation = summation;
        self
    }

    pub fn hidden_summation(&self) -> HiddenSummation {
        self.summation
    }

    pub fn input_size(&self) -> usize {
        self.input_labels.len()
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden
    }

    pub fn output_size(&self) -> usize {
        self.output_labels.len()
    }

    pub fn input_labels(&self) -> &[String] {
        &self.input_labels
    }

    pub fn output_labels(&self) -> &[String] {
        &self.output_labels
    }

    pub fn input(&self) -> &Matrix {
        &self.act_input
    }

    pub fn hidden(&self) -> &Matrix {
        &self.act_hidden
    }

    pub fn output(&self) -> &Matrix {
        &self.act_output
    }

    pub fn weight_matrix_ih(&self) -> &Matrix {
        &self.weight_ih
    }

    pub fn weight_matrix_ho(&self) -> &Matrix {
        &self.weight_ho
    }

    pub fn change_matrix_i(&self) -> &Matrix {
        &self.change_i
    }

    pub fn change_matrix_o(&self) -> &Matrix {
        &self.change_o
    }

    pub fn out_delta(&self) -> &[f64] {
        &self.out_delta
    }

    pub fn hidden_delta(&self) -> &[f64] {
        &self.hidden_delta
    }

    /// Forward pass. Overwrites the activation rows and returns the output row.
    pub fn predict(&mut self, input_vector: &[f64]) -> Result<Vec<f64>> {
        if input_vector.len() != self.input_size() {
            return Err(MinerError::invalid(format!(
                "predict input must be same size as input layer ({}), got {}",
                self.input_size(),
                input_vector.len()
            )));
        }
        if self.summation == HiddenSummation::Faithful && self.input_size() != self.hidden {
            return Err(MinerError::invalid(format!(
                "faithful hidden summation needs equal input and hidden widths, got {} and {}",
                self.input_size(),
                self.hidden
            )));
        }

        self.act_input.replace(vec![input_vector.to_vec()])?;
        self.calculate_activation_hidden()?;
        self.calculate_activation_output()
    }

    /// One backward step against the activations of the last `predict`.
    /// Returns the sample error `0.5 * sum((target - output)^2)`.
    pub fn back_propagate(&mut self, target: &[f64], eta: f64, momentum: f64) -> Result<f64> {
        if target.len() != self.output_size() {
            return Err(MinerError::invalid(format!(
                "target and output must have same size ({}), got {}",
                self.output_size(),
                target.len()
            )));
        }

        self.errors_output(target)?;
        self.errors_hidden()?;
        self.update_output_weights(eta, momentum)?;
        self.update_hidden_weights(eta, momentum)?;

        Ok(half_squared_error(target, &self.act_output.to_vec()?))
    }

    /// Runs `epochs` ordered passes over the samples. Returns each epoch's
    /// summed sample error; the series never feeds back into the updates.
    pub fn train<S, T>(
        &mut self,
        samples: &[S],
        targets: &[T],
        eta: f64,
        momentum: f64,
        epochs: usize,
    ) -> Result<Vec<f64>>
    where
        S: AsRef<[f64]>,
        T: AsRef<[f64]>,
    {
        self.check_dataset(samples, targets)?;
        (0..epochs)
            .map(|_| self.epoch(samples, targets, eta, momentum))
            .collect()
    }

    pub fn get_trainer(&mut self) -> Trainer<'_> {
        Trainer::new(self)
    }

    pub(crate) fn check_dataset<S, T>(&self, samples: &[S], targets: &[T]) -> Result<()>
    where
        S: AsRef<[f64]>,
        T: AsRef<[f64]>,
    {
        if samples.len() != targets.len() {
            return Err(MinerError::invalid(format!(
                "data and expectation must be same size, got {} samples and {} targets",
                samples.len(),
                targets.len()
            )));
        }
        if let Some(i) = samples.iter().position(|s| s.as_ref().len() != self.input_size()) {
            return Err(MinerError::invalid(format!(
                "sample {} does not match input layer width {}",
                i,
                self.input_size()
            )));
        }
        if let Some(i) = targets.iter().position(|t| t.as_ref().len() != self.output_size()) {
            return Err(MinerError::invalid(format!(
                "target {} does not match output layer width {}",
                i,
                self.output_size()
            )));
        }
        Ok(())
    }

    pub(crate) fn epoch<S, T>(
        &mut self,
        samples: &[S],
        targets: &[T],
        eta: f64,
        momentum: f64,
    ) -> Result<f64>
    where
        S: AsRef<[f64]>,
        T: AsRef<[f64]>,
    {
        let mut error = 0.;
        for (sample, target) in samples.iter().zip(targets.iter()) {
            self.predict(sample.as_ref())?;
            error += self.back_propagate(target.as_ref(), eta, momentum)?;
        }
        Ok(error)
    }

    fn calculate_activation_hidden(&mut self) -> Result<()> {
        for j in 0..self.hidden {
            let mut sum = 0.;
            for i in 0..self.input_size() {
                sum += match self.summation {
                    HiddenSummation::Faithful => {
                        self.act_input.value(0, j)? * self.weight_ih.value(j, i)?
                    }
                    HiddenSummation::Corrected => {
                        self.act_input.value(0, i)? * self.weight_ih.value(i, j)?
                    }
                };
            }
            *self.act_hidden.value_mut(0, j)? = tanh(sum);
        }
        Ok(())
    }

    fn calculate_activation_output(&mut self) -> Result<Vec<f64>> {
        for k in 0..self.output_size() {
            let mut sum = 0.;
            for j in 0..self.hidden {
                sum += self.act_hidden.value(0, j)? * self.weight_ho.value(j, k)?;
            }
            *self.act_output.value_mut(0, k)? = tanh(sum);
        }
        self.act_output.to_vec()
    }

    fn errors_output(&mut self, target: &[f64]) -> Result<()> {
        for (k, t) in target.iter().enumerate() {
            let act = self.act_output.value(0, k)?;
            self.out_delta[k] = d_tanh(act) * (t - act);
        }
        Ok(())
    }

    fn errors_hidden(&mut self) -> Result<()> {
        for j in 0..self.hidden {
            let mut error = 0.;
            for (k, delta) in self.out_delta.iter().enumerate() {
                error += delta * self.weight_ho.value(j, k)?;
            }
            self.hidden_delta[j] = d_tanh(self.act_hidden.value(0, j)?) * error;
        }
        Ok(())
    }

    /// The change matrix keeps `eta * delta`, not the momentum-blended update.
    fn update_output_weights(&mut self, eta: f64, momentum: f64) -> Result<()> {
        for j in 0..self.hidden {
            let act = self.act_hidden.value(0, j)?;
            for k in 0..self.output_size() {
                let step = eta * self.out_delta[k] * act;
                let change = self.change_o.value_mut(j, k)?;
                *self.weight_ho.value_mut(j, k)? += step + momentum * *change;
                *change = step;
            }
        }
        Ok(())
    }

    fn update_hidden_weights(&mut self, eta: f64, momentum: f64) -> Result<()> {
        for i in 0..self.input_size() {
            let act = self.act_input.value(0, i)?;
            for j in 0..self.hidden {
                let step = eta * self.hidden_delta[j] * act;
                let change = self.change_i.value_mut(i, j)?;
                *self.weight_ih.value_mut(i, j)? += step + momentum * *change;
                *change = step;
            }
        }
        Ok(())
    }
}
