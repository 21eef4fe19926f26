use super::{Assignment, Variable, VariableSet};
use std::fmt::{Display, Error, Formatter};
use std::ops::Index;

impl Assignment {
    /// Create an assignment with all variables of the set set to false.
    pub fn all_false(variables: VariableSet) -> Assignment {
        let values = vec![false; variables.len()];
        Assignment { variables, values }
    }

    /// Create an assignment with all variables of the set set to true.
    pub fn all_true(variables: VariableSet) -> Assignment {
        let values = vec![true; variables.len()];
        Assignment { variables, values }
    }

    /// Create an assignment from explicit `(variable, value)` pairs.
    ///
    /// If a variable is listed more than once, the last value wins.
    pub fn from_values(values: &[(Variable, bool)]) -> Assignment {
        let mut assignment =
            Assignment::all_false(values.iter().map(|(var, _)| *var).collect());
        for (var, value) in values {
            assignment.set(*var, *value);
        }
        assignment
    }

    /// Create the assignment of the given table row.
    ///
    /// The row `index` is read as a binary number in which the first variable of the
    /// set is the most significant bit. Bits above `variables.len()` are ignored.
    pub fn from_row_index(variables: VariableSet, index: u64) -> Assignment {
        let num_vars = variables.len();
        let values = (0..num_vars)
            .map(|j| (index >> (num_vars - 1 - j)) & 1 == 1)
            .collect();
        Assignment { variables, values }
    }

    /// Inverse of `from_row_index`: the binary number encoded by this assignment.
    pub fn row_index(&self) -> u64 {
        self.values
            .iter()
            .fold(0, |index, value| (index << 1) | (*value as u64))
    }

    /// Value of the given variable, or `None` if the variable is not assigned.
    pub fn get(&self, variable: Variable) -> Option<bool> {
        self.variables
            .index_of(variable)
            .map(|index| self.values[index])
    }

    /// Value of the given variable.
    ///
    /// *Panics:* `variable` must be assigned.
    pub fn value(&self, variable: Variable) -> bool {
        self[variable]
    }

    /// Change the value of the given variable.
    ///
    /// *Panics:* `variable` must be assigned.
    pub fn set(&mut self, variable: Variable, value: bool) {
        match self.variables.index_of(variable) {
            Some(index) => self.values[index] = value,
            None => panic!("Variable {} is not part of {}.", variable, self.variables),
        }
    }

    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    /// Values in the order of the variable set.
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    pub fn num_vars(&self) -> usize {
        self.values.len()
    }

    /// Iterate over `(variable, value)` pairs in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        self.variables.iter().cloned().zip(self.values.iter().cloned())
    }

    /// **(internal)** "Increment" this assignment if possible. Interpret the values as a
    /// bit-vector with the last variable as the least significant bit and perform a standard
    /// increment. Returns `None` on overflow (i.e. after the all-true assignment).
    pub(crate) fn next(&self) -> Option<Assignment> {
        let mut next_values = self.values.clone();
        let mut carry = true; // initially, we want to increment
        for bit in next_values.iter_mut().rev() {
            let new_value = *bit ^ carry;
            let new_carry = *bit && carry;
            *bit = new_value;
            carry = new_carry;
            if !new_carry {
                break;
            } // if there is no carry, we can just break
        }

        if carry {
            None
        } else {
            Some(Assignment {
                variables: self.variables.clone(),
                values: next_values,
            })
        }
    }
}

/// Allow indexing of `Assignment` using `Variable`s.
impl Index<Variable> for Assignment {
    type Output = bool;

    fn index(&self, index: Variable) -> &Self::Output {
        match self.variables.index_of(index) {
            Some(i) => &self.values[i],
            None => panic!("Variable {} is not part of {}.", index, self.variables),
        }
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "[")?;
        for (i, (var, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}={}", var, if value { 1 } else { 0 })?;
        }
        write!(f, "]")
    }
}
