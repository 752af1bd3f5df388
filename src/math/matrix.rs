use rand::Rng;
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;
use std::ops::{Add, Sub, Mul, Index, IndexMut};

/// Dense row-major matrix of `f64`.
///
/// Element `(i, j)` lives at `data[i * cols + j]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from a flat row-major buffer.
    ///
    /// # Panics
    /// Panics if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Matrix {
        assert_eq!(data.len(), rows * cols, "buffer length does not match {rows}x{cols}");
        Matrix { rows, cols, data }
    }

    /// Builds a matrix from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Matrix {
        let n = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        assert!(rows.iter().all(|r| r.len() == cols), "ragged rows");
        Matrix {
            rows: n,
            cols,
            data: rows.into_iter().flatten().collect(),
        }
    }

    /// Uniform samples in [-1, 1).
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let data = (0..rows * cols).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect();
        Matrix { rows, cols, data }
    }

    /// Samples from N(0, std_dev²).
    ///
    /// Small weights (`std_dev` around 1e-3 or 1e-4) give an initial loss close
    /// to `ln(C)`, which is a quick sanity check for a fresh classifier.
    pub fn randn<R: Rng + ?Sized>(rows: usize, cols: usize, std_dev: f64, rng: &mut R) -> Matrix {
        let data = (0..rows * cols)
            .map(|_| Matrix::sample_standard_normal(rng) * std_dev)
            .collect();
        Matrix { rows, cols, data }
    }

    /// Single N(0, 1) sample via the Box-Muller transform.
    fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        // (0, 1] keeps ln() finite.
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.cols + j] = value;
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        let cols = self.cols;
        &mut self.data[i * cols..(i + 1) * cols]
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| functor(x)).collect(),
        }
    }

    /// Matrix product `self · rhs`.
    ///
    /// Loops in i-k-j order so the inner loop walks both `rhs` and the output
    /// row contiguously.
    pub fn dot(&self, rhs: &Matrix) -> Matrix {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }
        let mut res = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            let out = &mut res.data[i * rhs.cols..(i + 1) * rhs.cols];
            for (k, &a) in self.row(i).iter().enumerate() {
                if a == 0.0 {
                    continue;
                }
                for (o, &b) in out.iter_mut().zip(rhs.row(k)) {
                    *o += a * b;
                }
            }
        }
        res
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> Matrix {
        assert_eq!(self.shape(), rhs.shape(), "Matrices are of incorrect sizes");
        self.zip_with(rhs, |a, b| a * b)
    }

    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|x| x * factor)
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Σ x² over every element.
    pub fn sum_squares(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum()
    }

    pub fn frobenius_norm(&self) -> f64 {
        self.sum_squares().sqrt()
    }

    /// Largest entry of each row. Empty rows yield `-inf`.
    pub fn max_per_row(&self) -> Vec<f64> {
        (0..self.rows)
            .map(|i| self.row(i).iter().copied().fold(f64::NEG_INFINITY, f64::max))
            .collect()
    }

    pub fn sum_per_row(&self) -> Vec<f64> {
        (0..self.rows).map(|i| self.row(i).iter().sum()).collect()
    }

    /// Subtracts `column[i]` from every entry of row `i`.
    pub fn sub_column(&self, column: &[f64]) -> Matrix {
        self.broadcast_column(column, |x, c| x - c)
    }

    /// Divides every entry of row `i` by `column[i]`.
    pub fn div_column(&self, column: &[f64]) -> Matrix {
        self.broadcast_column(column, |x, c| x / c)
    }

    /// Picks `self[i, indices[i]]` for every row `i`.
    pub fn gather(&self, indices: &[usize]) -> Vec<f64> {
        assert_eq!(indices.len(), self.rows, "one index per row expected");
        indices.iter().enumerate().map(|(i, &j)| self[(i, j)]).collect()
    }

    /// Adds `value` to `self[i, indices[i]]` for every row `i`.
    pub fn scatter_add(&mut self, indices: &[usize], value: f64) {
        assert_eq!(indices.len(), self.rows, "one index per row expected");
        for (i, &j) in indices.iter().enumerate() {
            self[(i, j)] += value;
        }
    }

    fn broadcast_column<F>(&self, column: &[f64], op: F) -> Matrix
    where
        F: Fn(f64, f64) -> f64,
    {
        assert_eq!(column.len(), self.rows, "column length must equal row count");
        let mut res = self.clone();
        for (i, &c) in column.iter().enumerate() {
            for x in res.row_mut(i) {
                *x = op(*x, c);
            }
        }
        res
    }

    fn zip_with<F>(&self, rhs: &Matrix, op: F) -> Matrix
    where
        F: Fn(f64, f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().zip(&rhs.data).map(|(&a, &b)| op(a, b)).collect(),
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of bounds");
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of bounds");
        &mut self.data[i * self.cols + j]
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        if self.shape() != rhs.shape() {
            panic!("Matrices are of incorrect sizes")
        }
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.shape() != rhs.shape() {
            panic!("Matrices are of incorrect sizes")
        }
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        self.dot(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows)
    }

    #[test]
    fn dot_matches_hand_computed_product() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let b = m(vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]);
        let c = a.dot(&b);
        assert_eq!(c, m(vec![vec![58.0, 64.0], vec![139.0, 154.0]]));
        assert_eq!(a * b, c);
    }

    #[test]
    #[should_panic(expected = "incorrect sizes")]
    fn dot_rejects_mismatched_inner_dimension() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        let _ = a.dot(&b);
    }

    #[test]
    fn transpose_swaps_axes() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t[(2, 0)], 3.0);
        assert_eq!(t[(0, 1)], 4.0);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn row_reductions() {
        let a = m(vec![vec![1.0, -2.0, 3.0], vec![-4.0, -5.0, -6.0]]);
        assert_eq!(a.max_per_row(), vec![3.0, -4.0]);
        assert_eq!(a.sum_per_row(), vec![2.0, -15.0]);
        assert_eq!(a.sum(), -13.0);
        assert_eq!(a.sum_squares(), 91.0);
    }

    #[test]
    fn column_broadcasts_apply_per_row() {
        let a = m(vec![vec![2.0, 4.0], vec![9.0, 3.0]]);
        assert_eq!(a.sub_column(&[1.0, 3.0]), m(vec![vec![1.0, 3.0], vec![6.0, 0.0]]));
        assert_eq!(a.div_column(&[2.0, 3.0]), m(vec![vec![1.0, 2.0], vec![3.0, 1.0]]));
    }

    #[test]
    fn gather_and_scatter_touch_one_entry_per_row() {
        let mut a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(a.gather(&[2, 0]), vec![3.0, 4.0]);
        a.scatter_add(&[2, 0], -1.0);
        assert_eq!(a, m(vec![vec![1.0, 2.0, 2.0], vec![3.0, 5.0, 6.0]]));
    }

    #[test]
    fn add_sub_hadamard_scale() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![0.5, 0.5], vec![1.0, 2.0]]);
        assert_eq!(a.clone() + b.clone(), m(vec![vec![1.5, 2.5], vec![4.0, 6.0]]));
        assert_eq!(a.clone() - b.clone(), m(vec![vec![0.5, 1.5], vec![2.0, 2.0]]));
        assert_eq!(a.hadamard(&b), m(vec![vec![0.5, 1.0], vec![3.0, 8.0]]));
        assert_eq!(a.scale(2.0), m(vec![vec![2.0, 4.0], vec![6.0, 8.0]]));
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let a = Matrix::randn(4, 3, 0.01, &mut StdRng::seed_from_u64(7));
        let b = Matrix::randn(4, 3, 0.01, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.data.iter().all(|x| x.is_finite() && x.abs() < 0.1));

        let u = Matrix::random(5, 5, &mut StdRng::seed_from_u64(1));
        assert!(u.data.iter().all(|&x| (-1.0..1.0).contains(&x)));
    }

    #[test]
    fn serde_roundtrip_keeps_layout() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let json = serde_json::to_string(&a).unwrap();
        let back: Matrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
