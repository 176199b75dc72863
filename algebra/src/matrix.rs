//! A rectangular row-major matrix of small non-negative integers.

/// A rectangular table of non-negative integers, stored row-major.
///
/// Every row has the same width and the table is immutable after
/// construction. The codec derives its generator and control matrices from
/// values of this type and multiplies digit-vectors against them with
/// [`crate::vector::mul_matrix`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    width: usize,
    rows: Vec<Vec<u32>>,
}

impl Matrix {
    /// Creates a new [`Matrix`] from its rows.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or the rows do not all have the same
    /// length.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Self {
        let width = rows.first().map_or(0, Vec::len);
        assert!(width > 0, "matrix must have at least one column");
        assert!(
            rows.iter().all(|row| row.len() == width),
            "matrix rows must all have the same length"
        );
        Self { width, rows }
    }

    /// Creates the `size` × `size` identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn identity(size: usize) -> Self {
        assert!(size > 0, "matrix must have at least one column");
        let rows = (0..size)
            .map(|at| {
                let mut row = vec![0; size];
                row[at] = 1;
                row
            })
            .collect();
        Self { width: size, rows }
    }

    /// Returns the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the row at `index`.
    #[inline]
    pub fn row(&self, index: usize) -> &[u32] {
        &self.rows[index]
    }

    /// Returns an iterator over the rows.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Concatenates `other` to the right of `self`, row by row.
    ///
    /// # Panics
    ///
    /// Panics if the matrices have different heights.
    pub fn hstack(&self, other: &Self) -> Self {
        assert_eq!(
            self.height(),
            other.height(),
            "hstack requires equal heights"
        );
        let rows = self
            .rows
            .iter()
            .zip(&other.rows)
            .map(|(left, right)| left.iter().chain(right).copied().collect())
            .collect();
        Self {
            width: self.width + other.width,
            rows,
        }
    }

    /// Stacks `other` below `self`.
    ///
    /// # Panics
    ///
    /// Panics if the matrices have different widths.
    pub fn vstack(&self, other: &Self) -> Self {
        assert_eq!(self.width, other.width, "vstack requires equal widths");
        let rows = self.rows.iter().chain(&other.rows).cloned().collect();
        Self {
            width: self.width,
            rows,
        }
    }

    /// Returns a copy of the matrix with its last column removed.
    ///
    /// # Panics
    ///
    /// Panics if the matrix has a single column.
    pub fn without_last_column(&self) -> Self {
        assert!(self.width > 1, "matrix must keep at least one column");
        let rows = self
            .rows
            .iter()
            .map(|row| row[..row.len() - 1].to_vec())
            .collect();
        Self {
            width: self.width - 1,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_has_unit_rows() {
        let identity = Matrix::identity(3);
        assert_eq!(identity.row(0), &[1, 0, 0]);
        assert_eq!(identity.row(2), &[0, 0, 1]);
    }

    #[test]
    fn stacking_extends_the_expected_dimension() {
        let identity = Matrix::identity(2);
        let ones = Matrix::from_rows(vec![vec![1, 1], vec![1, 1]]);

        let wide = identity.hstack(&ones);
        assert_eq!((wide.height(), wide.width()), (2, 4));
        assert_eq!(wide.row(0), &[1, 0, 1, 1]);

        let tall = identity.vstack(&ones);
        assert_eq!((tall.height(), tall.width()), (4, 2));
        assert_eq!(tall.row(3), &[1, 1]);
    }

    #[test]
    fn without_last_column_narrows_every_row() {
        let matrix = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let narrowed = matrix.without_last_column();
        assert_eq!(narrowed.width(), 2);
        assert_eq!(narrowed.row(1), &[4, 5]);
    }
}
