use serde::{Deserialize, Serialize};

use super::perceptron::Perceptron;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyper {
    pub epochs: usize,
    pub learning_rate: f64,
    pub momentum: f64,
}

impl Hyper {
    pub fn new() -> Hyper {
        Hyper {
            epochs: 50,
            learning_rate: 0.5,
            momentum: 0.1,
        }
    }

    /// Missing keys fall back to [`Hyper::new`].
    pub fn from_json(json: &str) -> Result<Hyper> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Hyper {
    fn default() -> Self {
        Hyper::new()
    }
}

pub struct Trainer<'a> {
    perceptron: &'a mut Perceptron,
    hyper: Hyper,
    losses: Vec<f64>,
    observer: Box<dyn FnMut(usize, f64) + 'a>,
    verbose: bool,
}

impl<'a> Trainer<'a> {
    pub fn new(perceptron: &'a mut Perceptron) -> Trainer<'a> {
        Trainer {
            perceptron,
            hyper: Hyper::new(),
            losses: vec![],
            observer: Box::new(|_, _| ()),
            verbose: false,
        }
    }

    pub fn override_hyper(&mut self, hyper: Hyper) -> &mut Self {
        self.hyper = hyper;
        self
    }

    pub fn verbose(&mut self) -> &mut Self {
        self.verbose = true;
        self
    }

    pub fn set_learning_rate(&mut self, rate: f64) -> &mut Self {
        self.hyper.learning_rate = rate;
        self
    }

    pub fn set_momentum(&mut self, momentum: f64) -> &mut Self {
        self.hyper.momentum = momentum;
        self
    }

    pub fn set_epochs(&mut self, epochs: usize) -> &mut Self {
        self.hyper.epochs = epochs;
        self
    }

    /// Called with `(epoch, summed sample error)` after every epoch.
    pub fn observe(&mut self, observer: impl FnMut(usize, f64) + 'a) -> &mut Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn hyper(&self) -> &Hyper {
        &self.hyper
    }

    pub fn losses(&self) -> &[f64] {
        &self.losses
    }

    pub fn train<S, T>(&mut self, samples: &[S], targets: &[T]) -> Result<&mut Self>
    where
        S: AsRef<[f64]>,
        T: AsRef<[f64]>,
    {
        self.perceptron.check_dataset(samples, targets)?;
        let Hyper {
            epochs,
            learning_rate,
            momentum,
        } = self.hyper;

        for epoch in 0..epochs {
            let loss = self
                .perceptron
                .epoch(samples, targets, learning_rate, momentum)?;
            self.losses.push(loss);
            (self.observer)(epoch, loss);

            if self.verbose {
                log::info!("({}/{}) Loss = {}", epoch, epochs, loss);
            } else {
                log::trace!("({}/{}) Loss = {}", epoch, epochs, loss);
            }
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let hyper = Hyper::from_json(r#"{ "epochs": 2000 }"#).unwrap();
        assert_eq!(
            hyper,
            Hyper {
                epochs: 2000,
                ..Hyper::new()
            }
        );
    }

    #[test]
    fn malformed_json_is_invalid_argument() {
        let err = Hyper::from_json("{ epochs: }").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn hyper_round_trips_through_json() {
        let hyper = Hyper {
            epochs: 7,
            learning_rate: 0.25,
            momentum: 0.,
        };
        let json = serde_json::to_string(&hyper).unwrap();
        assert_eq!(Hyper::from_json(&json).unwrap(), hyper);
    }
}
