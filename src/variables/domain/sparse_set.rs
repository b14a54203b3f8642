

use std::fmt::Display;

/// Maximum domain size supported by SparseSet
/// 
/// This limit is enforced to prevent performance issues and excessive memory usage.
/// Domains larger than this should be rejected during model construction.
pub const MAX_SPARSE_SET_DOMAIN_SIZE: u64 = 1_000_000;

/// State snapshot for backtracking in SparseSet
#[doc(hidden)]
#[derive(Clone, Debug, PartialEq)]
pub struct SparseSetState {
    pub size: u32,
    pub min: u32,
    pub max: u32,
}

#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct SparseSet {
    off: i32,      // the domain offset (fixed)
    n: u32,        // total number of values in domain
    min: u32,      // current minimum value in the set
    max: u32,      // current maximum value in the set
    size: u32,     // domain size
    ind: Vec<u32>, // sparse set indices
    val: Vec<u32>, // sparse set values
}

impl Display for SparseSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = String::new();
        use std::fmt::Write;
        write!(s, "[").expect("writing to String should never fail");
        if self.size == 0 {
            write!(s, "|").expect("writing to String should never fail");
        }
        for i in 0..self.n {
            write!(s, "{},", (self.val[i as usize] as i32 + self.off)).expect("writing to String should never fail");
            if i + 1 == self.size {
                s.pop(); // remove comma
                write!(s, "|").expect("writing to String should never fail");
            }
        }
        if self.size != self.n {
            s.pop(); // remove comma
        }
        write!(s, "]").expect("writing to String should never fail");
        write!(f, "{}", s)
    }
}

impl SparseSet {
    pub fn new(min: i32, max: i32) -> Self {
        if min > max {
            // Handle invalid range by swapping
            return Self::new(max, min);
        }
        
        let maxmin = (max - min) as u32;
        let n = (maxmin + 1) as u32;
        
        // Pre-allocate vectors with known capacity
        let mut ind = Vec::with_capacity(n as usize);
        let mut val = Vec::with_capacity(n as usize);
        
        // Fill with consecutive values
        for i in 0..n {
            ind.push(i);
            val.push(i);
        }
        
        SparseSet {
            off: min,
            min: 0,
            max: maxmin,
            n,
            size: n,
            ind,
            val,
        }
    }

    /// Create a SparseSet without bound checking - may create invalid domains
    /// This is used to create intentionally invalid domains that validation can catch
    pub fn new_unchecked(min: i32, max: i32) -> Self {
        if min > max {
            // Create an invalid domain that preserves the original bounds
            // We'll create a domain where the universe bounds show the invalid range
            // but the domain itself is empty
            SparseSet {
                off: min,
                min: 0,
                max: 0,
                n: 0,
                size: 0,
                ind: Vec::new(),
                val: Vec::new(),
            }
        } else {
            // Valid bounds - use normal creation
            Self::new(min, max)
        }
    }

    /// Create a SparseSet from a vector of specific values
    /// Memory efficient - creates full range then removes unwanted values
    pub fn new_from_values(values: Vec<i32>) -> Self {
        if values.is_empty() {
            // Return empty sparse set with minimal footprint
            return SparseSet {
                off: 0,
                min: 0,
                max: 0,
                n: 0,
                size: 0,
                ind: Vec::new(),
                val: Vec::new(),
            };
        }

        // Sort and deduplicate values
        let mut sorted_values = values;
        sorted_values.sort_unstable();
        sorted_values.dedup();

        let min_val = sorted_values[0];
        let max_val = sorted_values[sorted_values.len() - 1];
        
        // Create sparse set with full range - this ensures compatibility with all operations
        let mut sparse_set = SparseSet::new(min_val, max_val);
        
        // Remove all values that are not in our desired set
        for i in min_val..=max_val {
            if !sorted_values.contains(&i) {
                sparse_set.remove(i);
            }
        }
        
        sparse_set
    }

    pub fn min(&self) -> i32 {
        debug_assert!(!self.is_empty());
        self.min as i32 + self.off
    }
    pub fn max(&self) -> i32 {
        debug_assert!(!self.is_empty());
        self.max as i32 + self.off
    }

    pub fn size(&self) -> usize {
        self.size as usize
    }
    // If variable domain is fixed to value
    pub fn is_fixed(&self) -> bool {
        self.size == 1
    }
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
    pub fn contains(&self, v: i32) -> bool {
        // outside range
        if v < self.off {
            return false;
        }
        let v = v - self.off;
        self.contains_intl(v as u32)
    }
    // This method operates on the shifted value (one cannot shift now).
    fn contains_intl(&self, v: u32) -> bool {
        if v >= self.n {
            false
        } else {
            self.ind[v as usize] < self.size
        }
    }
    pub fn exchange(&mut self, val1: u32, val2: u32) {
        let v1 = val1;
        let v2 = val2;
        let i1 = self.ind[v1 as usize];
        let i2 = self.ind[v2 as usize];
        self.val[i1 as usize] = v2;
        self.val[i2 as usize] = v1;
        self.ind[v1 as usize] = i2;
        self.ind[v2 as usize] = i1;
    }

    fn update_bounds_val_removed(&mut self, val: u32) {
        self.update_max_val_removed(val);
        self.update_min_val_removed(val);
    }
    // update after max value is removed
    fn update_max_val_removed(&mut self, val: u32) {
        if !self.is_empty() && self.max == val {
            // The maximum was removed, search the new one
            for v in (self.min..val).rev() {
                if self.contains_intl(v) {
                    self.max = v;
                    return;
                }
            }
        }
    }
    // update after min value is removed
    fn update_min_val_removed(&mut self, val: u32) {
        if !self.is_empty() && self.min == val {
            // The minimum was removed, search the new one
            let vv = val + 1;
            let vvv = self.max + 1;
            for v in vv..vvv {
                if self.contains_intl(v) {
                    self.min = v;
                    return;
                }
            }
        }
    }

    pub fn remove(&mut self, val: i32) -> bool {
        if !self.contains(val) {
            // The value has already been removed
            return false;
        }
        let val = (val - self.off) as u32;
        self.exchange(val, self.val[self.size() - 1]);
        self.size = self.size - 1;
        self.update_bounds_val_removed(val);

        return true;
    }

    pub fn remove_all(&mut self) {
        self.size = 0;
    }

    // Removes all the element from the set except the given value.
    pub fn remove_all_but(&mut self, v: i32) {
        // if out of domain range
        if !self.contains(v) {
            self.remove_all();
            return;
        }
        let v = (v - self.off) as u32;
        let val = self.val[0];
        let index = self.ind[v as usize];
        self.ind[v as usize] = 0;
        self.val[0] = v;
        self.ind[val as usize] = index;
        self.val[index as usize] = val;
        self.min = v;
        self.max = v;
        self.size = 1;
    }

    pub fn remove_below(&mut self, val: i32) {
        if self.is_empty() { return; }
        if self.max() < val {
            self.remove_all();
        } else {
            for v in self.min()..val {
                self.remove(v);
            }
        }
    }

    pub fn remove_above(&mut self, val: i32) {
        if self.is_empty() { return; }
        if self.min() > val {
            self.remove_all();
        } else {
            let x = (val + 1)..(self.max() + 1);
            for v in x {
                self.remove(v);
            }
        }
    }

    /// Get an iterator over the values in the set
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.val[0..self.size as usize]
            .iter()
            .map(move |&v| v as i32 + self.off)
    }

    /// Get the first value in the set (arbitrary order)
    pub fn first(&self) -> Option<i32> {
        if self.is_empty() {
            None
        } else {
            Some(self.val[0] as i32 + self.off)
        }
    }

    /// Get the last value in the set (arbitrary order)
    pub fn last(&self) -> Option<i32> {
        if self.is_empty() {
            None
        } else {
            Some(self.val[self.size as usize - 1] as i32 + self.off)
        }
    }

    /// Convert to a vector of values (for compatibility)
    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }

    /// Get the universe size (total possible values)
    pub fn universe_size(&self) -> usize {
        self.n as usize
    }

    /// Get the minimum value in the universe
    pub fn min_universe_value(&self) -> i32 {
        self.off
    }

    /// Get the maximum value in the universe
    pub fn max_universe_value(&self) -> i32 {
        self.off + self.n as i32 - 1
    }

    // ===== COMPLEMENT API (for incremental sum and other optimizations) =====
    
    /// Get an iterator over the **removed** values (complement of current domain)
    /// 
    /// This is a key insight from the SparseSet design: removed values are stored
    /// in `val[size..n)`, allowing us to iterate over the complement without
    /// additional memory overhead.
    /// 
    /// # Example
    /// ```
    /// use selen::variables::domain::sparse_set::SparseSet;
    /// let mut domain = SparseSet::new(1, 5);  // Domain {1,2,3,4,5}
    /// domain.remove(2);
    /// domain.remove(4);
    /// // complement_iter() yields {2, 4}
    /// let complement: Vec<i32> = domain.complement_iter().collect();
    /// assert_eq!(complement.len(), 2);
    /// ```
    pub fn complement_iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.val[self.size as usize..self.n as usize]
            .iter()
            .map(move |&v| v as i32 + self.off)
    }

    /// Get the size of the complement (number of removed values)
    /// 
    /// This is computed as `n - size` and is useful for choosing which set
    /// to iterate over when optimizing constraint propagation.
    /// 
    /// # Example
    /// ```
    /// use selen::variables::domain::sparse_set::SparseSet;
    /// let mut domain = SparseSet::new(1, 10);  // 10 values initially
    /// assert_eq!(domain.complement_size(), 0);  // No removed values
    /// 
    /// domain.remove(1);
    /// domain.remove(5);
    /// assert_eq!(domain.complement_size(), 2);  // 2 removed values
    /// ```
    pub fn complement_size(&self) -> usize {
        (self.n - self.size) as usize
    }

    /// Check if iterating over complement is more efficient than current domain
    /// 
    /// Returns true if `complement_size < size / 2`, indicating that the complement
    /// has fewer than half the elements of the current domain. This is useful for
    /// optimization decisions like preferring `complement_iter()` when the domain
    /// has been heavily pruned.
    /// 
    /// # Example
    /// ```
    /// use selen::variables::domain::sparse_set::SparseSet;
    /// let mut domain = SparseSet::new(1, 100);
    /// // Initially: size=100, complement_size=0. 0 < 50? Yes, but we check this only matters when complement > 0
    /// 
    /// // Remove 10 values: size becomes 90, complement_size becomes 10
    /// for i in 1..=10 {
    ///     domain.remove(i);
    /// }
    /// // 10 < 90/2 = 10 < 45? Yes, so we SHOULD use complement
    /// assert!(domain.should_use_complement());
    /// 
    /// // Remove 50 more values: size becomes 40, complement_size becomes 60
    /// for i in 11..=60 {
    ///     domain.remove(i);
    /// }
    /// // 60 < 40/2 = 60 < 20? No, so we should NOT use complement
    /// assert!(!domain.should_use_complement());
    /// ```
    pub fn should_use_complement(&self) -> bool {
        self.complement_size() < (self.size as usize) / 2
    }

    /// Set intersection - modify this set to contain only elements in both sets
    /// 
    /// **Note**: This operates on the **domain** of integer variables, not on set-valued variables.
    /// In Selen, `SparseSet` is used as the domain representation for integer variables (including
    /// those created with `intset()`). These operations are useful for constraint propagation and
    /// domain manipulation, but they do not implement FlatZinc set constraints like `set_union(x,y,z)`
    /// which require true set-valued variables where the variable's value is itself a set.
    /// 
    /// # Examples
    /// ```
    /// use selen::variables::domain::sparse_set::SparseSet;
    /// let mut domain1 = SparseSet::new(1, 5);  // Domain {1,2,3,4,5}
    /// let mut domain2 = SparseSet::new(3, 7);  // Domain {3,4,5,6,7}
    /// domain2.remove(6);                        // Domain {3,4,5,7}
    /// domain1.intersect_with(&domain2);         // domain1 becomes {3,4,5}
    /// ```
    pub fn intersect_with(&mut self, other: &SparseSet) {
        // Create a list of values to remove to avoid modifying while iterating
        let mut to_remove = Vec::with_capacity(self.size as usize);
        
        for val in self.iter() {
            if !other.contains(val) {
                to_remove.push(val);
            }
        }
        
        for val in to_remove {
            self.remove(val);
        }
    }

    /// Set union - add all elements from other set to this set
    /// 
    /// **Note**: This operates on the **domain** of integer variables, not on set-valued variables.
    /// See `intersect_with()` for more details on the distinction.
    /// 
    /// Note: This requires that both sets have compatible universes
    pub fn union_with(&mut self, other: &SparseSet) {
        for val in other.iter() {
            if self.contains(val) {
                continue; // Already present
            }
            
            // Check if value is in our universe
            if val >= self.off && val < self.off + self.n as i32 {
                // Manually add the value (similar to remove but in reverse)
                let val_internal = (val - self.off) as u32;
                if !self.contains_intl(val_internal) {
                    // Add value to the end of the active set
                    let new_pos = self.size;
                    let old_val_at_pos = self.val[new_pos as usize];
                    
                    // Swap the value to the active part
                    self.exchange(val_internal, old_val_at_pos);
                    self.size += 1;
                    
                    // Update bounds if necessary
                    if self.size == 1 {
                        self.min = val_internal;
                        self.max = val_internal;
                    } else {
                        if val_internal < self.min {
                            self.min = val_internal;
                        }
                        if val_internal > self.max {
                            self.max = val_internal;
                        }
                    }
                }
            }
        }
    }

    /// Set difference - remove all elements from this set that are in other set
    /// 
    /// This computes `self = self \ other` (set difference).
    /// 
    /// **Note**: This operates on the **domain** of integer variables, not on set-valued variables.
    /// See `intersect_with()` for more details on the distinction.
    /// 
    /// # Examples
    /// ```
    /// use selen::variables::domain::sparse_set::SparseSet;
    /// let mut a = SparseSet::new(1, 5);      // Domain {1, 2, 3, 4, 5}
    /// let b = SparseSet::new(3, 7);          // Domain {3, 4, 5, 6, 7}
    /// a.diff_with(&b);                        // a becomes {1, 2}
    /// ```
    pub fn diff_with(&mut self, other: &SparseSet) {
        // Create a list of values to remove to avoid modifying while iterating
        let mut to_remove = Vec::with_capacity(self.size as usize);
        
        for val in self.iter() {
            if other.contains(val) {
                to_remove.push(val);
            }
        }
        
        for val in to_remove {
            self.remove(val);
        }
    }

    /// Check if this set is a subset of another set
    pub fn is_subset_of(&self, other: &Self) -> bool {
        // Adjust for different offsets
        for i in 0..self.size {
            let val = self.val[i as usize];
            let external_val = val as i32 + self.off;
            
            if !other.contains(external_val) {
                return false;
            }
        }
        true
    }

    /// Check if two sets are equal
    pub fn equals(&self, other: &SparseSet) -> bool {
        if self.size != other.size {
            return false;
        }
        self.iter().all(|val| other.contains(val))
    }

    // ===== BACKTRACKING SUPPORT =====
    
    /// Save the current state for backtracking
    #[doc(hidden)]
    pub fn save_state(&self) -> SparseSetState {
        SparseSetState {
            size: self.size,
            min: self.min,
            max: self.max,
        }
    }
    
    /// Restore a previously saved state
    #[doc(hidden)]
    pub fn restore_state(&mut self, state: &SparseSetState) {
        self.size = state.size;
        self.min = state.min;
        self.max = state.max;
    }
    
    /// Get current state size (for simple size-only backtracking)
    pub fn current_size(&self) -> u32 {
        self.size
    }
    
    /// Restore to a specific size (assumes min/max are still valid)
    /// WARNING: Only use if you're certain min/max haven't changed since the size was recorded
    pub fn restore_size(&mut self, size: u32) {
        debug_assert!(size <= self.n, "Cannot restore to size larger than universe");
        self.size = size;
    }
}

impl PartialEq for SparseSet {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for SparseSet {}

/// Iterator implementation for sparse set
impl IntoIterator for SparseSet {
    type Item = i32;
    type IntoIter = std::vec::IntoIter<i32>;
    
    fn into_iter(self) -> Self::IntoIter {
        self.to_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a SparseSet {
    type Item = i32;
    type IntoIter = Box<dyn Iterator<Item = i32> + 'a>;
    
    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
