use std::borrow::Cow;

use super::{Cell, Grid, Matrix};
use crate::error::Result;

/// Right-hand side of an elementwise or product operation: either a raw grid,
/// wrapped on use, or an existing matrix.
#[derive(Debug, Clone)]
pub enum Operand<'a> {
    Grid(Grid),
    Matrix(&'a Matrix),
}

impl<'a> Operand<'a> {
    pub fn resolve(self) -> Result<Cow<'a, Matrix>> {
        match self {
            Operand::Grid(grid) => Ok(Cow::Owned(Matrix::wrap(grid)?)),
            Operand::Matrix(matrix) => Ok(Cow::Borrowed(matrix)),
        }
    }
}

impl<'a> From<&'a Matrix> for Operand<'a> {
    fn from(matrix: &'a Matrix) -> Self {
        Operand::Matrix(matrix)
    }
}

impl From<Grid> for Operand<'_> {
    fn from(grid: Grid) -> Self {
        Operand::Grid(grid)
    }
}

impl From<Vec<Vec<f64>>> for Operand<'_> {
    fn from(grid: Vec<Vec<f64>>) -> Self {
        Operand::Grid(
            grid.into_iter()
                .map(|row| row.into_iter().map(Cell::from).collect())
                .collect(),
        )
    }
}
