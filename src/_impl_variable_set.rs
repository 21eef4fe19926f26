use super::*;
use std::fmt::{Display, Formatter};
use std::iter::FromIterator;
use std::ops::Index;
use std::slice::Iter;
use std::sync::Arc;

impl VariableSet {
    /// Create a new `VariableSet` from the given variables. The variables are sorted
    /// and duplicates are removed, so the order of `vars` is irrelevant.
    pub fn new(vars: &[Variable]) -> VariableSet {
        vars.iter().cloned().collect()
    }

    /// Return the number of variables in this set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Variable> {
        self.0.iter()
    }

    /// The variables of this set as a sorted slice.
    pub fn variables(&self) -> &[Variable] {
        &self.0
    }

    pub fn contains(&self, variable: Variable) -> bool {
        self.index_of(variable).is_some()
    }

    /// Ordinal of the given variable in this set, or `None` if the variable is not present.
    pub fn index_of(&self, variable: Variable) -> Option<usize> {
        self.0.binary_search(&variable).ok()
    }
}

impl FromIterator<Variable> for VariableSet {
    fn from_iter<T: IntoIterator<Item = Variable>>(iter: T) -> Self {
        let mut vars: Vec<Variable> = iter.into_iter().collect();
        vars.sort();
        vars.dedup();
        VariableSet(Arc::new(vars))
    }
}

impl<'a> IntoIterator for &'a VariableSet {
    type Item = &'a Variable;
    type IntoIter = Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Allow indexing of `VariableSet` by variable ordinal.
impl Index<usize> for VariableSet {
    type Output = Variable;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Display for VariableSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, var) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", var)?;
        }
        write!(f, "]")
    }
}
