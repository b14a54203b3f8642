//! LU decomposition with partial pivoting
//!
//! Provides LU factorization needed for solving linear systems in the Simplex method.
//! Uses partial pivoting for numerical stability.

use super::matrix::Matrix;
use super::types::LpError;

/// LU decomposition: PA = LU where P is a permutation matrix
#[derive(Debug, Clone)]
pub struct LuDecomposition {
    /// Combined L and U matrices (L below diagonal, U on and above diagonal)
    pub lu: Matrix,
    
    /// Row permutation from partial pivoting
    pub permutation: Vec<usize>,
    
    /// Sign of permutation (+1 or -1), used for determinant calculation
    pub sign: i32,
}

impl LuDecomposition {
    /// Compute LU decomposition with partial pivoting
    ///
    /// Returns LpError::SingularBasis if matrix is singular (within tolerance)
    pub fn decompose(matrix: &Matrix, tolerance: f64) -> Result<Self, LpError> {
        if matrix.rows != matrix.cols {
            return Err(LpError::NumericalInstability);
        }
        
        let n = matrix.rows;
        let mut lu = matrix.clone();
        let mut permutation: Vec<usize> = (0..n).collect();
        let mut sign = 1;
        
        // Gaussian elimination with partial pivoting
        for k in 0..n {
            // Find pivot (largest absolute value in column k, from row k onwards)
            let mut pivot_row = k;
            let mut pivot_value = lu.get(k, k).abs();
            
            for i in (k + 1)..n {
                let val = lu.get(i, k).abs();
                if val > pivot_value {
                    pivot_row = i;
                    pivot_value = val;
                }
            }
            
            // Check for singularity
            if pivot_value < tolerance {
                return Err(LpError::SingularBasis);
            }
            
            // Swap rows if needed
            if pivot_row != k {
                lu.swap_rows(k, pivot_row);
                permutation.swap(k, pivot_row);
                sign = -sign;
            }
            
            // Eliminate below diagonal
            let pivot = lu.get(k, k);
            for i in (k + 1)..n {
                let factor = lu.get(i, k) / pivot;
                lu.set(i, k, factor); // Store multiplier in L part
                
                // Update row i
                for j in (k + 1)..n {
                    let val = lu.get(i, j) - factor * lu.get(k, j);
                    lu.set(i, j, val);
                }
            }
        }
        
        Ok(Self {
            lu,
            permutation,
            sign,
        })
    }
    
    /// Solve linear system Ax = b using the LU decomposition
    ///
    /// Uses forward substitution (Ly = Pb) then backward substitution (Ux = y)
    pub fn solve(&self, b: &[f64]) -> Result<Vec<f64>, LpError> {
        let n = self.lu.rows;
        
        if b.len() != n {
            return Err(LpError::NumericalInstability);
        }
        
        // Apply permutation: y = Pb
        let mut y = vec![0.0; n];
        for i in 0..n {
            y[i] = b[self.permutation[i]];
        }
        
        // Forward substitution: Ly = Pb (L has 1s on diagonal)
        for i in 0..n {
            for j in 0..i {
                y[i] -= self.lu.get(i, j) * y[j];
            }
        }
        
        // Backward substitution: Ux = y
        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let mut sum = y[i];
            for j in (i + 1)..n {
                sum -= self.lu.get(i, j) * x[j];
            }
            let diag = self.lu.get(i, i);
            if diag.abs() < 1e-12 {
                return Err(LpError::SingularBasis);
            }
            x[i] = sum / diag;
        }
        
        Ok(x)
    }

    /// Solve transpose system: A^T x = b
    ///
    /// Uses the existing LU decomposition: (LU)^T x = b => U^T L^T x = b
    pub fn solve_transpose(&self, b: &[f64]) -> Result<Vec<f64>, LpError> {
        let n = self.lu.rows;
        
        if b.len() != n {
            return Err(LpError::NumericalInstability);
        }
        
        // Solve U^T y = b (forward substitution since U^T is lower triangular)
        let mut y = vec![0.0; n];
        for i in 0..n {
            let mut sum = b[i];
            for j in 0..i {
                sum -= self.lu.get(j, i) * y[j];  // Note: transposed access
            }
            let diag = self.lu.get(i, i);
            if diag.abs() < 1e-12 {
                return Err(LpError::SingularBasis);
            }
            y[i] = sum / diag;
        }
        
        // Solve L^T x = y (backward substitution since L^T is upper triangular)
        // Note: L has 1s on diagonal
        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let mut sum = y[i];
            for j in (i + 1)..n {
                sum -= self.lu.get(j, i) * x[j];  // Note: transposed access
            }
            x[i] = sum;  // Diagonal is 1
        }
        
        // Apply inverse permutation: result = P^T x
        let mut result = vec![0.0; n];
        for i in 0..n {
            result[self.permutation[i]] = x[i];
        }
        
        Ok(result)
    }
    
    /// Solve multiple right-hand sides: AX = B
    pub fn solve_multiple(&self, b_matrix: &Matrix) -> Result<Matrix, LpError> {
        if b_matrix.rows != self.lu.rows {
            return Err(LpError::NumericalInstability);
        }
        
        let mut result = Matrix::zeros(b_matrix.rows, b_matrix.cols);
        
        for col in 0..b_matrix.cols {
            let b_col = b_matrix.col(col);
            let x = self.solve(&b_col)?;
            
            for row in 0..result.rows {
                result.set(row, col, x[row]);
            }
        }
        
        Ok(result)
    }
    
    /// Compute the determinant from LU decomposition
    ///
    /// det(A) = sign * product of diagonal elements of U
    pub fn determinant(&self) -> f64 {
        let mut det = self.sign as f64;
        for i in 0..self.lu.rows {
            det *= self.lu.get(i, i);
        }
        det
    }
    
    /// Extract L matrix (lower triangular with 1s on diagonal)
    pub fn extract_l(&self) -> Matrix {
        let n = self.lu.rows;
        let mut l = Matrix::identity(n);
        
        for i in 0..n {
            for j in 0..i {
                l.set(i, j, self.lu.get(i, j));
            }
        }
        l
    }
    
    /// Extract U matrix (upper triangular)
    pub fn extract_u(&self) -> Matrix {
        let n = self.lu.rows;
        let mut u = Matrix::zeros(n, n);
        
        for i in 0..n {
            for j in i..n {
                u.set(i, j, self.lu.get(i, j));
            }
        }
        u
    }
}
