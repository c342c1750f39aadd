//! Dense two-dimensional container of optionally populated `f64` cells.
//!
//! Element accessors (`get`, `set`, `add_at`) accept signed indices and admit
//! the position one past the last row/column: reads there yield an absent
//! cell and writes there are dropped, so the grid never becomes jagged.
//! Row, column and arithmetic access is strict.
mod algebra;
mod operand;

use std::fmt;

use ndarray::{Array1, Array2, Axis};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;

use crate::error::{Index, MinerError, Result};

pub use operand::Operand;

/// A single cell; `None` marks a cell that was never populated.
pub type Cell = Option<f64>;

/// Raw row-major grid, the non-objectified form of a [`Matrix`].
pub type Grid = Vec<Vec<Cell>>;

#[derive(Debug, Clone)]
pub struct Matrix {
    cells: Array2<Cell>,
    random: Option<f64>,
}

impl Matrix {
    /// Allocates `rows x cols`. With a bound every cell is drawn uniformly
    /// from `[-bound, bound)`, otherwise every cell is `1.0`.
    pub fn new<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        random: Option<f64>,
        rng: &mut R,
    ) -> Result<Matrix> {
        match random {
            Some(bound) => Matrix::random(rows, cols, bound, rng),
            None => Ok(Matrix::ones(rows, cols)),
        }
    }

    pub fn filled(rows: usize, cols: usize, value: f64) -> Matrix {
        Matrix::from_cells(Array2::from_elem((rows, cols), Some(value)))
    }

    pub fn ones(rows: usize, cols: usize) -> Matrix {
        Matrix::filled(rows, cols, 1.0)
    }

    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix::filled(rows, cols, 0.0)
    }

    pub fn unset(rows: usize, cols: usize) -> Matrix {
        Matrix::from_cells(Array2::from_elem((rows, cols), None))
    }

    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        bound: f64,
        rng: &mut R,
    ) -> Result<Matrix> {
        if !(bound > 0.0 && (2.0 * bound).is_finite()) {
            return Err(MinerError::invalid(format!(
                "random bound must be positive with a finite range, got {}",
                bound
            )));
        }

        let values = Array2::random_using((rows, cols), Uniform::new(-bound, bound), rng);

        Ok(Matrix {
            cells: values.mapv(Some),
            random: Some(bound),
        })
    }

    /// Wraps an existing rectangular grid, inferring the shape from it.
    pub fn wrap<T: Into<Cell>>(grid: Vec<Vec<T>>) -> Result<Matrix> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);

        if let Some((i, row)) = grid.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(MinerError::invalid(format!(
                "grid must be rectangular: row {} has {} cells, expected {}",
                i,
                row.len(),
                cols
            )));
        }

        let flat: Vec<Cell> = grid.into_iter().flatten().map(Into::into).collect();
        let cells = Array2::from_shape_vec((rows, cols), flat)
            .map_err(|err| MinerError::invalid(err.to_string()))?;

        Ok(Matrix::from_cells(cells))
    }

    pub(crate) fn from_cells(cells: Array2<Cell>) -> Matrix {
        Matrix {
            cells,
            random: None,
        }
    }

    fn from_vector(values: Vec<Cell>) -> Matrix {
        Matrix::from_cells(Array1::from(values).insert_axis(Axis(0)))
    }

    /// Replaces the whole grid; the shape is re-derived from `grid`.
    pub fn replace<T: Into<Cell>>(&mut self, grid: Vec<Vec<T>>) -> Result<()> {
        *self = Matrix::wrap(grid)?;
        Ok(())
    }

    pub fn fill(&mut self, value: f64) {
        self.cells.fill(Some(value));
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn random_bound(&self) -> Option<f64> {
        self.random
    }

    fn out_of_bounds(&self, index: Index) -> MinerError {
        MinerError::IndexOutOfBounds {
            index,
            rows: self.rows(),
            cols: self.cols(),
        }
    }

    fn unset_cell(i: usize, j: usize) -> MinerError {
        MinerError::invalid(format!("cell ({}, {}) holds no value", i, j))
    }

    /// Bounds check shared by the element accessors. `Ok(None)` is the
    /// admitted position one past the last row or column.
    fn locate(&self, i: isize, j: isize) -> Result<Option<(usize, usize)>> {
        let (rows, cols) = self.cells.dim();

        if i < 0 || j < 0 || i > rows as isize || j > cols as isize {
            return Err(self.out_of_bounds(Index::Cell(i, j)));
        }

        let (i, j) = (i as usize, j as usize);
        if i == rows || j == cols {
            return Ok(None);
        }

        Ok(Some((i, j)))
    }

    pub fn get(&self, i: isize, j: isize) -> Result<Cell> {
        Ok(self.locate(i, j)?.and_then(|ix| self.cells[ix]))
    }

    pub fn set(&mut self, i: isize, j: isize, value: f64) -> Result<()> {
        match self.locate(i, j)? {
            Some(ix) => self.cells[ix] = Some(value),
            None => log::trace!("dropping write at ({}, {}) past the grid edge", i, j),
        }
        Ok(())
    }

    /// Increments a populated cell in place.
    pub fn add_at(&mut self, i: isize, j: isize, value: f64) -> Result<()> {
        let (r, c) = match self.locate(i, j)? {
            Some(ix) => ix,
            None => {
                log::trace!("dropping increment at ({}, {}) past the grid edge", i, j);
                return Ok(());
            }
        };

        match self.cells[(r, c)].as_mut() {
            Some(current) => *current += value,
            None => return Err(Matrix::unset_cell(r, c)),
        }
        Ok(())
    }

    /// Strictly bounds-checked read of a populated cell.
    pub fn value(&self, i: usize, j: usize) -> Result<f64> {
        match self.cells.get((i, j)) {
            Some(Some(v)) => Ok(*v),
            Some(None) => Err(Matrix::unset_cell(i, j)),
            None => Err(self.out_of_bounds(Index::Cell(i as isize, j as isize))),
        }
    }

    pub fn value_mut(&mut self, i: usize, j: usize) -> Result<&mut f64> {
        let (rows, cols) = self.shape();
        match self.cells.get_mut((i, j)) {
            Some(Some(v)) => Ok(v),
            Some(None) => Err(Matrix::unset_cell(i, j)),
            None => Err(MinerError::IndexOutOfBounds {
                index: Index::Cell(i as isize, j as isize),
                rows,
                cols,
            }),
        }
    }

    fn check_row(&self, i: isize) -> Result<usize> {
        if i < 0 || i >= self.rows() as isize {
            return Err(self.out_of_bounds(Index::Row(i)));
        }
        Ok(i as usize)
    }

    fn check_column(&self, j: isize) -> Result<usize> {
        if j < 0 || j >= self.cols() as isize {
            return Err(self.out_of_bounds(Index::Column(j)));
        }
        Ok(j as usize)
    }

    pub fn row(&self, i: isize) -> Result<Vec<Cell>> {
        let i = self.check_row(i)?;
        Ok(self.cells.row(i).to_vec())
    }

    pub fn row_matrix(&self, i: isize) -> Result<Matrix> {
        Ok(Matrix::from_vector(self.row(i)?))
    }

    pub fn column(&self, j: isize) -> Result<Vec<Cell>> {
        let j = self.check_column(j)?;
        Ok(self.cells.column(j).to_vec())
    }

    pub fn column_matrix(&self, j: isize) -> Result<Matrix> {
        Ok(Matrix::from_vector(self.column(j)?))
    }

    /// Cells where `i == j`; `min(rows, cols)` of them.
    pub fn diagonal(&self) -> Vec<Cell> {
        self.cells.diag().to_vec()
    }

    pub fn diagonal_matrix(&self) -> Matrix {
        Matrix::from_vector(self.diagonal())
    }

    /// True iff every off-diagonal cell holds exactly `0.0`.
    pub fn is_diagonal(&self) -> bool {
        self.cells
            .indexed_iter()
            .all(|((i, j), cell)| i == j || *cell == Some(0.0))
    }

    /// True iff there are no rows or no cell holds a value.
    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cells.iter().all(Option::is_none)
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    pub fn to_grid(&self) -> Grid {
        self.cells.outer_iter().map(|row| row.to_vec()).collect()
    }

    pub fn into_grid(self) -> Grid {
        self.to_grid()
    }

    /// Populated values of a single-row matrix.
    pub fn to_vec(&self) -> Result<Vec<f64>> {
        let i = self.check_row(0)?;
        (0..self.cols()).map(|j| self.value(i, j)).collect()
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.cells == other.cells
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix ({} x {})", self.rows(), self.cols())?;
        for row in self.cells.outer_iter() {
            let cells = row
                .iter()
                .map(|cell| match cell {
                    Some(v) => v.to_string(),
                    None => "-".to_string(),
                })
                .collect::<Vec<String>>();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
