use array2d::Array2D;

use crate::{Result, SolverError, Value};

#[derive(Debug, Clone)]
pub struct Matrix<T>(pub(super) Array2D<T>);

impl<T> Matrix<T> {
    pub fn new(rows: usize, columns: usize) -> Self
    where
        T: Clone + Default,
    {
        Matrix::filled_with(T::default(), rows, columns)
    }

    pub fn get(&self, row: usize, column: usize) -> &T {
        match self.0.get(row, column) {
            Some(element) => element,
            None => panic!(
                "Attempted to access matrix element ({}, {}), but matrix has shape ({}, {})",
                row,
                column,
                &self.0.num_rows(),
                &self.0.num_columns()
            ),
        }
    }

    pub fn set(&mut self, row: usize, column: usize, value: T) {
        match self.0.set(row, column, value) {
            Ok(_) => (),
            Err(msg) => panic!(
                "Attempted to set matrix element ({}, {}), but encountered following error: {:?}",
                row, column, msg,
            ),
        }
    }

    pub fn try_from_rows(rows: &[Vec<T>]) -> Result<Self>
    where
        T: Clone,
    {
        if let Some(first) = rows.first() {
            if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != first.len()) {
                return Err(SolverError::InvalidShape(format!(
                    "row {} has {} entries, but row 0 has {}",
                    i,
                    row.len(),
                    first.len()
                )));
            }
        }
        match Array2D::from_rows(rows) {
            Ok(matrix) => Ok(Matrix(matrix)),
            Err(msg) => Err(SolverError::InvalidShape(format!("{:?}", msg))),
        }
    }

    pub fn from_rows(rows: &[Vec<T>]) -> Self
    where
        T: Clone,
    {
        match Self::try_from_rows(rows) {
            Ok(matrix) => matrix,
            Err(msg) => panic!(
                "An error occurred while attempting to create a Matrix from rows: {}",
                msg
            ),
        }
    }

    pub fn filled_with(value: T, rows: usize, columns: usize) -> Self
    where
        T: Clone,
    {
        Matrix(Array2D::filled_with(value, rows, columns))
    }

    pub fn from_elements(elements: &[T], rows: usize, columns: usize) -> Self
    where
        T: Clone,
    {
        match Array2D::from_row_major(elements, rows, columns) {
            Ok(matrix) => Matrix(matrix),
            Err(msg) => panic!(
                "An error occurred while attempting to create a ({}, {}) matrix from a row: {:?}",
                rows, columns, msg
            ),
        }
    }

    /// Grows or truncates the matrix to `rows` x `columns`. Cells inside both the old and
    /// the new shape keep their value, new cells are default-initialized.
    pub fn resize(&mut self, rows: usize, columns: usize)
    where
        T: Clone + Default,
    {
        let mut resized = Matrix::new(rows, columns);
        for (row, column) in self
            .indices()
            .filter(|(row, column)| *row < rows && *column < columns)
        {
            resized.set(row, column, self.get(row, column).clone());
        }
        *self = resized;
    }

    pub fn column(&self, column: usize) -> Vec<T>
    where
        T: Clone,
    {
        (0..self.num_rows())
            .map(|row| self.get(row, column).clone())
            .collect()
    }

    pub fn as_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.0.as_rows()
    }

    pub fn indices(&self) -> impl DoubleEndedIterator<Item = (usize, usize)> + Clone {
        self.0.indices_row_major()
    }

    pub fn elements(&self) -> impl DoubleEndedIterator<Item = &T> + Clone {
        self.0.elements_row_major_iter()
    }

    pub fn rows_iter(&self) -> impl DoubleEndedIterator<Item = impl DoubleEndedIterator<Item = &T>> {
        self.0.rows_iter()
    }

    pub fn num_rows(&self) -> usize {
        self.0.num_rows()
    }

    pub fn num_columns(&self) -> usize {
        self.0.num_columns()
    }
}

impl Matrix<Value> {
    pub fn has_negative_values(&self) -> bool {
        self.elements().any(|x| *x < 0)
    }

    pub fn sum(&self) -> Value {
        self.elements().sum()
    }
}
