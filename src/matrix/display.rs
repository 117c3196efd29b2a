use core::fmt::Display;
use std::fmt::Result;

use colored::{Color, ColoredString, Colorize};

use crate::Value;

use super::Matrix;

impl Display for Matrix<String> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result {
        let lpad = match self.elements().map(|x| x.len()).max() {
            Some(element) => element,
            None => return write!(f, "[[]]"),
        };
        let num_rows = self.num_rows();
        let num_columns = self.num_columns();
        let mut string_repr: Vec<String> = vec![];
        self.rows_iter().enumerate().for_each(|(i, row)| {
            if i != 0 {
                string_repr.push(" ".to_string());
            } else {
                string_repr.push("[".to_string());
            }
            string_repr.push("[".to_string());
            row.enumerate().for_each(|(j, elem)| {
                string_repr.push(format!("{:>lpad$}", elem, lpad = lpad));
                if j != num_columns - 1 {
                    string_repr.push(", ".to_string());
                }
            });
            string_repr.push("]".to_string());
            if i == num_rows - 1 {
                string_repr.push("]".to_string());
            } else {
                string_repr.push("\n".to_string());
            }
        });
        write!(f, "{}", string_repr.join(""))
    }
}

impl Display for Matrix<Value> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result {
        let str_repr = Matrix::from_elements(
            self.elements()
                .map(|x| x.to_string())
                .collect::<Vec<_>>()
                .as_slice(),
            self.num_rows(),
            self.num_columns(),
        );
        write!(f, "{}", str_repr)
    }
}

impl Display for Matrix<bool> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result {
        let str_repr = Matrix::from_elements(
            self.elements()
                .map(|x| (*x as usize).to_string())
                .collect::<Vec<_>>()
                .as_slice(),
            self.num_rows(),
            self.num_columns(),
        );
        write!(f, "{}", str_repr)
    }
}

impl Matrix<String> {
    pub fn highlight(&self, cells: &[(usize, usize)], color: Color) -> Matrix<ColoredString> {
        Matrix::from_elements(
            self.indices()
                .map(|(row, column)| {
                    let cell = self.get(row, column).as_str();
                    if cells.contains(&(row, column)) {
                        cell.color(color)
                    } else {
                        cell.normal()
                    }
                })
                .collect::<Vec<_>>()
                .as_slice(),
            self.num_rows(),
            self.num_columns(),
        )
    }

    pub fn to_table(&self) -> String {
        self.highlight(&[], Color::White).to_table()
    }
}

impl Matrix<ColoredString> {
    /// Renders the cells with every column centered on its widest cell and two spaces
    /// between columns. Widths are measured on the uncolored text.
    pub fn to_table(&self) -> String {
        let widths: Vec<usize> = (0..self.num_columns())
            .map(|column| {
                (0..self.num_rows())
                    .map(|row| self.get(row, column).chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut lines: Vec<String> = vec![];
        for row in self.rows_iter() {
            let line = row
                .zip(widths.iter())
                .map(|(cell, width)| {
                    let space = width - cell.chars().count();
                    format!(
                        "{}{}{}",
                        " ".repeat(space / 2),
                        cell,
                        " ".repeat((space + 1) / 2)
                    )
                })
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(line);
        }
        lines.join("\n")
    }
}
