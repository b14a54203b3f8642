//! Primal Simplex method for Linear Programming
//!
//! Solves LP problems in standard form:
//!   maximize c^T x
//!   subject to Ax = b, x >= 0
//!
//! Uses two-phase method:
//! - Phase I: Find initial feasible basis (if not provided)
//! - Phase II: Optimize from feasible basis to optimal solution

use super::matrix::Matrix;
use super::basis::Basis;
use super::types::{LpProblem, LpSolution, LpStatus, LpError, LpConfig};

/// Primal Simplex solver
pub struct PrimalSimplex {
    /// Configuration for solver
    config: LpConfig,
}

impl PrimalSimplex {
    /// Create a new Primal Simplex solver with given configuration
    pub fn new(config: LpConfig) -> Self {
        Self { config }
    }
    
    /// Estimate memory usage for matrices in MB
    fn estimate_memory_mb(&self, a: &Matrix, basis: &Basis) -> f64 {
        // Sum up memory from main constraint matrix, basis matrices, and working memory
        let mut total_bytes = a.memory_bytes();
        
        // Basis stores L, U, and permutation vectors
        // Estimate: 2 * m * m matrices for L and U, plus m integers for perm
        let m = a.rows;
        total_bytes += 2 * m * m * std::mem::size_of::<f64>();
        total_bytes += m * std::mem::size_of::<usize>();
        
        // Working vectors (reduced costs, etc) - estimate m + n floats
        total_bytes += (a.rows + a.cols) * std::mem::size_of::<f64>();
        
        total_bytes as f64 / (1024.0 * 1024.0)
    }
    
    /// Solve an LP problem using Primal Simplex
    ///
    /// Assumes problem is in standard form with slack variables already added
    pub fn solve(&mut self, problem: &LpProblem) -> Result<LpSolution, LpError> {
        // Start timing for timeout checking
        let start_time = std::time::Instant::now();
        
        // Validate problem
        problem.validate()?;
        
        // Convert inequality constraints to standard form (Ax = b) by adding slacks
        // Also handles variable bounds by substitution
        let (a_eq, b_eq, c_extended, _n_total) = self.to_standard_form(problem);
        
        // Phase I: Find initial feasible basis
        let phase1_start = std::time::Instant::now();
        let (mut basis, phase1_iterations) = self.phase_one(&a_eq, &b_eq, start_time)?;
        let phase1_time_ms = phase1_start.elapsed().as_secs_f64() * 1000.0;
        
        // Phase II: Optimize from feasible basis
        // Note: Pass problem.n_vars (original variable count) so solution extraction works correctly
        let phase2_start = std::time::Instant::now();
        let mut solution = self.phase_two(&a_eq, &c_extended, &b_eq, &mut basis, problem.n_vars, start_time, phase1_iterations)?;
        let phase2_time_ms = phase2_start.elapsed().as_secs_f64() * 1000.0;
        
        // Calculate phase2 iterations from total iterations
        let phase2_iterations = solution.iterations.saturating_sub(phase1_iterations);
        
        // Update solution statistics
        solution.stats.solve_time_ms = phase1_time_ms + phase2_time_ms;
        solution.stats.phase1_time_ms = phase1_time_ms;
        solution.stats.phase2_time_ms = phase2_time_ms;
        solution.stats.phase1_iterations = phase1_iterations;
        solution.stats.phase2_iterations = phase2_iterations;
        solution.stats.phase1_needed = phase1_iterations > 0;
        solution.stats.n_variables = problem.n_vars;
        solution.stats.n_constraints = problem.n_constraints;
        solution.stats.peak_memory_mb = self.estimate_memory_mb(&a_eq, &basis);
        solution.stats.factorizations = phase1_iterations + phase2_iterations; // Approximate: one per iteration
        
        // Transform solution back: x = x' + l
        for j in 0..problem.n_vars {
            solution.x[j] += problem.lower_bounds[j];
        }
        
        // Adjust objective value: f(x) = c^T x = c^T(x' + l) = c^T x' + c^T l
        // The solver returns f(x') = c^T x', so we need to add c^T l
        let mut constant_term = 0.0;
        for j in 0..problem.n_vars {
            constant_term += problem.c[j] * problem.lower_bounds[j];
        }
        solution.objective += constant_term;
        
        Ok(solution)
    }
    
    /// Convert inequality constraints Ax <= b to equality Ax + s = b
    /// Handles variable bounds by substitution
    /// Returns (A_extended, b_extended, c_extended, total_vars)
    fn to_standard_form(&self, problem: &LpProblem) -> (Matrix, Vec<f64>, Vec<f64>, usize) {
        let m = problem.n_constraints;
        let n = problem.n_vars;
        
        // Step 1: Handle variable lower bounds by substitution x'_j = x_j - l_j
        // This transforms l_j <= x_j into 0 <= x'_j
        // Also adjust RHS: b_i becomes b_i - sum_j(A_ij * l_j)
        let mut b_adjusted = problem.b.clone();
        for i in 0..m {
            for j in 0..n {
                b_adjusted[i] -= problem.a[i][j] * problem.lower_bounds[j];
            }
        }
        
        // Adjust objective: c_j becomes c_j (for x'_j), but we need to add constant term
        // f(x) = c^T x = c^T(x' + l) = c^T x' + c^T l
        // The constant term c^T l doesn't affect optimization
        let c_adjusted = problem.c.clone();
        
        // Step 2: Count upper-bounded variables (u_j < infinity)
        let n_upper_bounded = problem.upper_bounds.iter()
            .filter(|&&u| u < f64::INFINITY)
            .count();
        
        // Step 3: Calculate total variables needed
        // Original variables + upper bound constraints (as inequalities) + slack variables for original constraints + slack variables for upper bounds
        let n_constraints_total = m + n_upper_bounded;
        let n_total = n + n_constraints_total;
        
        // Create extended constraint matrix
        let mut a_extended = Matrix::zeros(n_constraints_total, n_total);
        let mut b_extended = vec![0.0; n_constraints_total];
        
        // Copy original constraints (first m rows)
        for i in 0..m {
            for j in 0..n {
                a_extended.set(i, j, problem.a[i][j]);
            }
            b_extended[i] = b_adjusted[i];
        }
        
        // Add slack variables for original constraints
        for i in 0..m {
            a_extended.set(i, n + i, 1.0);
        }
        
        // Add upper bound constraints: x'_j <= u_j - l_j (after substitution)
        let mut upper_bound_row = m;
        let mut upper_bound_slack = n + m;
        for j in 0..n {
            if problem.upper_bounds[j] < f64::INFINITY {
                // x'_j + slack = u_j - l_j
                a_extended.set(upper_bound_row, j, 1.0);
                a_extended.set(upper_bound_row, upper_bound_slack, 1.0);
                b_extended[upper_bound_row] = problem.upper_bounds[j] - problem.lower_bounds[j];
                upper_bound_row += 1;
                upper_bound_slack += 1;
            }
        }
        
        // Extend objective vector (all slacks have 0 cost)
        let mut c_extended = c_adjusted;
        c_extended.extend(vec![0.0; n_constraints_total]);
        
        (a_extended, b_extended, c_extended, n_total)
    }
    
    /// Phase I: Find initial feasible basis using artificial variables
    ///
    /// Solves auxiliary problem: minimize sum of artificial variables
    /// Returns (feasible basis, phase1_iterations) if one exists
    fn phase_one(&mut self, a: &Matrix, b: &[f64], start_time: std::time::Instant) -> Result<(Basis, usize), LpError> {
        let m = a.rows;
        let n = a.cols;
        
        // First, try the identity basis (slack variables)
        let mut basis = Basis::initial(n, m);
        
        // Factorize initial basis
        basis.factorize(a, &self.config)?;
        
        // Check if initial basis is feasible
        let x = basis.solve_basic(b)?;
        
        if basis.is_primal_feasible(&x, self.config.feasibility_tol) {
            return Ok((basis, 0)); // No Phase I iterations needed
        }
        
        // If not feasible (b has negative components or constraints incompatible),
        // we need to use artificial variables and solve the auxiliary problem:
        // minimize w = sum of artificial variables
        // This is known as the "Big M" method or two-phase simplex
        
        // Create augmented problem with artificial variables
        // Original: Ax = b, x >= 0
        // Augmented: [A | I] [x; y] = b, x >= 0, y >= 0
        // Minimize: sum(y_i) where y_i are artificial variables
        
        let n_augmented = n + m; // Original variables + artificial variables
        let mut a_augmented = Matrix::zeros(m, n_augmented);
        
        // Copy original constraint matrix
        for i in 0..m {
            for j in 0..n {
                a_augmented.set(i, j, a.get(i, j));
            }
        }
        
        // Add identity matrix for artificial variables
        for i in 0..m {
            a_augmented.set(i, n + i, 1.0);
        }
        
        // Adjust RHS to be non-negative by flipping rows if needed
        let mut b_augmented = b.to_vec();
        for i in 0..m {
            if b_augmented[i] < 0.0 {
                // Multiply row by -1
                b_augmented[i] = -b_augmented[i];
                for j in 0..n_augmented {
                    a_augmented.set(i, j, -a_augmented.get(i, j));
                }
            }
        }
        
        // Initial basis: artificial variables (last m columns)
        let mut phase1_basis = Basis::initial(n_augmented, m);
        phase1_basis.factorize(&a_augmented, &self.config)?;
        
        // Objective for Phase I: minimize sum of artificial variables
        // This means cost vector is [0, 0, ..., 0, 1, 1, ..., 1]
        //                           <--- n zeros --><--- m ones --->
        let mut c_phase1 = vec![0.0; n_augmented];
        for i in n..n_augmented {
            c_phase1[i] = 1.0;
        }
        
        // Solve Phase I problem using simplex iterations
        let max_iter = self.config.max_iterations;
        for phase1_iterations in 0..max_iter {
            // Check timeout and memory every 100 iterations (not every iteration for performance)
            if phase1_iterations % 100 == 0 {
                if let Some(timeout_ms) = self.config.timeout_ms {
                    let elapsed = start_time.elapsed().as_millis() as u64;
                    if elapsed > timeout_ms {
                        return Err(LpError::TimeoutExceeded {
                            elapsed_ms: elapsed,
                            limit_ms: timeout_ms,
                        });
                    }
                }
                
                if let Some(limit_mb) = self.config.max_memory_mb {
                    let usage_mb = self.estimate_memory_mb(&a_augmented, &phase1_basis) as u64;
                    if usage_mb > limit_mb {
                        return Err(LpError::MemoryExceeded {
                            usage_mb,
                            limit_mb,
                        });
                    }
                }
            }
            
            // Compute reduced costs
            let reduced_costs = phase1_basis.compute_reduced_costs(&a_augmented, &c_phase1)?;
            
            // Find entering variable (most negative reduced cost for minimization)
            let entering = if let Some(idx) = reduced_costs
                .iter()
                .enumerate()
                .filter(|(_, rc)| **rc < -self.config.optimality_tol)
                .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
                .map(|(idx, _)| idx)
            {
                idx
            } else {
                // No improving direction found - check if we have a feasible solution
                let x_basic = phase1_basis.solve_basic(&b_augmented)?;
                let obj = phase1_basis.objective_value(&x_basic, &c_phase1);
                
                if obj < self.config.feasibility_tol {
                    // Found feasible solution for original problem
                    // Extract basis that doesn't use artificial variables
                    // (or uses them at zero level)
                    
                    // Build basis for original problem by removing artificial variables
                    let original_basic: Vec<usize> = phase1_basis.basic
                        .iter()
                        .filter(|&&idx| idx < n)
                        .copied()
                        .collect();
                    
                    if original_basic.len() == m {
                        // All basic variables are from original problem
                        let original_nonbasic: Vec<usize> = (0..n)
                            .filter(|idx| !original_basic.contains(idx))
                            .collect();
                        
                        let mut final_basis = Basis::from_indices(original_basic, original_nonbasic);
                        final_basis.factorize(a, &self.config)?;
                        return Ok((final_basis, phase1_iterations));
                    } else {
                        // Some artificial variables are basic at zero level
                        // Need to pivot them out (this is a degenerate case)
                        // For now, try to use first n columns as basis
                        let mut final_basic: Vec<usize> = phase1_basis.basic
                            .iter()
                            .filter(|&&idx| idx < n)
                            .copied()
                            .collect();
                        
                        // Fill remaining slots with non-basic original variables
                        for idx in 0..n {
                            if final_basic.len() >= m {
                                break;
                            }
                            if !final_basic.contains(&idx) {
                                final_basic.push(idx);
                            }
                        }
                        
                        if final_basic.len() == m {
                            let final_nonbasic: Vec<usize> = (0..n)
                                .filter(|idx| !final_basic.contains(idx))
                                .collect();
                            
                            let mut final_basis = Basis::from_indices(final_basic, final_nonbasic);
                            // Try to factorize - if this fails, the basis is singular
                            if final_basis.factorize(a, &self.config).is_ok() {
                                return Ok((final_basis, phase1_iterations));
                            }
                        }
                        
                        // Could not construct a valid basis
                        return Err(LpError::NumericalInstability);
                    }
                } else {
                    // Phase I objective > 0 means original problem is infeasible
                    return Err(LpError::NumericalInstability);
                }
            };
            
            // Compute search direction for entering variable
            let a_col = a_augmented.col(entering);
            let direction = phase1_basis.lu.as_ref()
                .ok_or(LpError::NumericalInstability)?
                .solve(&a_col)?;
            
            // Get current basic solution
            let x_basic = phase1_basis.solve_basic(&b_augmented)?;
            
            // Find leaving variable using minimum ratio test
            let leaving_idx = phase1_basis.find_leaving_variable(
                &x_basic,
                &direction,
                self.config.feasibility_tol,
            );
            
            // Check for unboundedness (shouldn't happen in Phase I with proper setup)
            if leaving_idx.is_none() {
                return Err(LpError::NumericalInstability);
            }
            
            // Perform basis swap
            let entering_nonbasic_idx = phase1_basis.nonbasic.iter()
                .position(|&idx| idx == entering)
                .ok_or(LpError::NumericalInstability)?;
            
            phase1_basis.swap(entering_nonbasic_idx, leaving_idx.unwrap());
            phase1_basis.factorize(&a_augmented, &self.config)?;
        }
        
        // Max iterations reached
        Err(LpError::NumericalInstability)
    }
    
    /// Phase II: Optimize from feasible basis to optimal solution
    ///
    /// Uses primal simplex iterations: improve objective while maintaining feasibility
    fn phase_two(
        &mut self,
        a: &Matrix,
        c: &[f64],
        b: &[f64],
        basis: &mut Basis,
        n_vars: usize,
        start_time: std::time::Instant,
        phase1_iterations: usize,
    ) -> Result<LpSolution, LpError> {
        let mut phase2_iterations = 0;
        
        loop {
            let total_iterations = phase1_iterations + phase2_iterations;
            
            // Check timeout and memory every 100 iterations (not every iteration for performance)
            if phase2_iterations % 100 == 0 {
                if let Some(timeout_ms) = self.config.timeout_ms {
                    let elapsed = start_time.elapsed().as_millis() as u64;
                    if elapsed > timeout_ms {
                        return Err(LpError::TimeoutExceeded {
                            elapsed_ms: elapsed,
                            limit_ms: timeout_ms,
                        });
                    }
                }
                
                if let Some(limit_mb) = self.config.max_memory_mb {
                    let usage_mb = self.estimate_memory_mb(&a, &basis) as u64;
                    if usage_mb > limit_mb {
                        return Err(LpError::MemoryExceeded {
                            usage_mb,
                            limit_mb,
                        });
                    }
                }
            }
            
            // Check iteration limit
            if total_iterations >= self.config.max_iterations {
                let x = basis.solve_basic(b)?;
                let objective = basis.objective_value(c, &x);
                return Ok(LpSolution::new(
                    LpStatus::IterationLimit,
                    objective,
                    x[..n_vars].to_vec(), // Return only original variables (not slacks)
                    total_iterations,
                    basis.basic.clone(),
                ));
            }
            
            // Compute current solution
            let x = basis.solve_basic(b)?;
            
            // Compute reduced costs
            let reduced_costs = basis.compute_reduced_costs(a, c)?;
            
            // Check optimality: all reduced costs <= 0
            if basis.is_dual_feasible(&reduced_costs, self.config.optimality_tol) {
                let objective = basis.objective_value(c, &x);
                return Ok(LpSolution::new(
                    LpStatus::Optimal,
                    objective,
                    x[..n_vars].to_vec(),
                    total_iterations,
                    basis.basic.clone(),
                ));
            }
            
            // Find entering variable (most positive reduced cost)
            let entering_idx = basis.find_entering_variable(&reduced_costs)
                .ok_or(LpError::NumericalInstability)?;
            
            let entering_var = basis.nonbasic[entering_idx];
            
            // Compute search direction: B^(-1) A_j for entering column j
            let a_col = a.col(entering_var);
            let direction = basis.lu.as_ref()
                .ok_or(LpError::NumericalInstability)?
                .solve(&a_col)?;
            
            // Find leaving variable using minimum ratio test
            let x_basic: Vec<f64> = basis.basic.iter().map(|&idx| x[idx]).collect();
            let leaving_idx = basis.find_leaving_variable(
                &x_basic,
                &direction,
                self.config.feasibility_tol,
            );
            
            // Check for unboundedness
            if leaving_idx.is_none() {
                let objective = basis.objective_value(c, &x);
                return Ok(LpSolution::new(
                    LpStatus::Unbounded,
                    objective,
                    x[..n_vars].to_vec(),
                    phase1_iterations + phase2_iterations,
                    basis.basic.clone(),
                ));
            }
            
            // Perform basis swap
            basis.swap(entering_idx, leaving_idx.unwrap());
            
            // Refactorize basis
            basis.factorize(a, &self.config)?;
            
            phase2_iterations += 1;
        }
    }
}
