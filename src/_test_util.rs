use super::*;

/// Shorthand for `Variable::new`.
pub fn var(name: char) -> Variable {
    Variable::new(name)
}

/// Make an `Assignment` from `(letter, value)` pairs.
pub fn mk_assignment(values: &[(char, bool)]) -> Assignment {
    let values: Vec<(Variable, bool)> = values.iter().map(|(n, v)| (var(*n), *v)).collect();
    Assignment::from_values(&values)
}

/// Generate the table of a formula which is known to be valid.
pub fn mk_table(expression: &str) -> TruthTable {
    generate_table(expression).unwrap()
}

/// Convert a `"TFFT"`-style string into a result column.
pub fn column(values: &str) -> Vec<bool> {
    values.chars().map(|c| c == 'T').collect()
}
