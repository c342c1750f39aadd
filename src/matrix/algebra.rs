use ndarray::Array2;

use super::{Matrix, Operand};
use crate::error::{MinerError, Result};

impl Matrix {
    pub fn identity(size: isize) -> Result<Matrix> {
        if size <= 0 {
            return Err(MinerError::invalid(format!(
                "identity size must be greater than 0, got {}",
                size
            )));
        }
        Ok(Matrix::from_cells(Array2::eye(size as usize).mapv(Some)))
    }

    pub fn trace(&self) -> Result<f64> {
        (0..self.rows().min(self.cols()))
            .map(|i| self.value(i, i))
            .sum()
    }

    pub fn transpose(&self) -> Matrix {
        Matrix::from_cells(self.cells.t().to_owned())
    }

    pub fn scale(&self, factor: f64) -> Result<Matrix> {
        let mut scaled = Array2::from_elem(self.cells.raw_dim(), None);
        for ((i, j), cell) in scaled.indexed_iter_mut() {
            *cell = Some(factor * self.value(i, j)?);
        }
        Ok(Matrix::from_cells(scaled))
    }

    pub fn add<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Matrix> {
        self.combine(other.into(), |a, b| a + b)
    }

    pub fn subtract<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Matrix> {
        self.combine(other.into(), |a, b| a - b)
    }

    /// Walks this matrix's shape; an operand smaller than that fails with
    /// `IndexOutOfBounds`, a larger one is read only in the overlap.
    fn combine(&self, other: Operand<'_>, op: impl Fn(f64, f64) -> f64) -> Result<Matrix> {
        let other = other.resolve()?;
        let mut combined = Array2::from_elem(self.cells.raw_dim(), None);
        for ((i, j), cell) in combined.indexed_iter_mut() {
            *cell = Some(op(self.value(i, j)?, other.value(i, j)?));
        }
        Ok(Matrix::from_cells(combined))
    }

    /// `result[i][j] = sum_k self[i][k] * other[k][j]`.
    ///
    /// The shape guard compares this matrix's column count against the
    /// operand's column count, not its row count. Operands that pass the
    /// guard but have too few rows fail with `IndexOutOfBounds`.
    pub fn multiply<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Matrix> {
        let other = other.into().resolve()?;
        if self.cols() != other.cols() {
            return Err(MinerError::invalid(format!(
                "illegal multiplication dimensions: {}x{} by {}x{}",
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols()
            )));
        }

        let mut product = Array2::from_elem((self.rows(), other.cols()), None);
        for ((i, j), cell) in product.indexed_iter_mut() {
            let mut sum = 0.0;
            for k in 0..self.cols() {
                sum += self.value(i, k)? * other.value(k, j)?;
            }
            *cell = Some(sum);
        }
        Ok(Matrix::from_cells(product))
    }
}
