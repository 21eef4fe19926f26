use super::{Assignment, TruthTable, TruthTableRow, VariableSet};
use std::fmt::{Display, Error, Formatter};

impl TruthTableRow {
    /// The input assignment of this row.
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// The value of the formula in this row.
    pub fn result(&self) -> bool {
        self.result
    }
}

impl Display for TruthTableRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(
            f,
            "{} -> {}",
            self.assignment,
            if self.result { 1 } else { 0 }
        )
    }
}

/// Methods for inspecting a computed `TruthTable`.
impl TruthTable {
    /// The variables of the formula, in column order.
    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    /// All rows, in ascending binary order of their assignments.
    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    /// Row with the given index, if it exists.
    pub fn row(&self, index: usize) -> Option<&TruthTableRow> {
        self.rows.get(index)
    }

    /// Number of rows, always `2^n` for `n` variables.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The result column.
    pub fn results(&self) -> Vec<bool> {
        self.rows.iter().map(|row| row.result).collect()
    }

    /// True if the formula holds in every row.
    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|row| row.result)
    }

    /// True if the formula holds in no row.
    pub fn is_contradiction(&self) -> bool {
        !self.is_satisfiable()
    }

    pub fn is_satisfiable(&self) -> bool {
        self.rows.iter().any(|row| row.result)
    }

    /// Assignments of all rows in which the formula holds.
    pub fn satisfying_assignments(&self) -> impl Iterator<Item = &Assignment> + '_ {
        self.rows
            .iter()
            .filter(|row| row.result)
            .map(|row| &row.assignment)
    }
}

impl<'a> IntoIterator for &'a TruthTable {
    type Item = &'a TruthTableRow;
    type IntoIter = std::slice::Iter<'a, TruthTableRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
