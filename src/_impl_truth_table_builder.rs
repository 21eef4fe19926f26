use super::*;
use log::{debug, trace};

impl TruthTableBuilder {
    /// Create a new builder which accepts formulas with up to `MAX_VARIABLES` variables.
    pub fn new() -> TruthTableBuilder {
        TruthTableBuilder {
            max_variables: MAX_VARIABLES,
        }
    }

    /// Refuse formulas with more than `limit` distinct variables.
    ///
    /// The limit can only be lowered, values above `MAX_VARIABLES` are clamped.
    ///
    /// A table over `n` variables holds `2^n` rows and every row stores `n` values. The
    /// variable set itself is shared by all rows, so the table needs roughly `2^n * (n + c)`
    /// bytes for a small constant `c`. At the default limit, that is far beyond available
    /// memory, hence a lower limit is advisable whenever the input is not trusted.
    pub fn max_variables(&mut self, limit: usize) -> &mut TruthTableBuilder {
        self.max_variables = limit.min(MAX_VARIABLES);
        self
    }

    /// The largest number of variables this builder accepts.
    pub fn limit(&self) -> usize {
        self.max_variables
    }

    /// Tokenize and parse the `expression` string and enumerate its truth table.
    ///
    /// Failure of any stage aborts the whole computation, no partial table is returned.
    pub fn build(&self, expression: &str) -> Result<TruthTable, EngineError> {
        debug!("generate_table(expression = {:?})", expression);
        let tokens = tokenize(expression)?;
        let (expression, variables) = parse(&tokens)?;
        self.enumerate(&expression, variables)
    }

    /// Enumerate the truth table of an already parsed `expression`.
    pub fn build_from_expression(&self, expression: &Expression) -> Result<TruthTable, EngineError> {
        self.enumerate(expression, expression.support_set())
    }

    /// **(internal)** Evaluate `expression` in every assignment of `variables`.
    fn enumerate(
        &self,
        expression: &Expression,
        variables: VariableSet,
    ) -> Result<TruthTable, EngineError> {
        let num_vars = variables.len();
        if num_vars > self.max_variables {
            return Err(TooManyVariablesError::new(num_vars, self.max_variables).into());
        }

        let num_rows = 1usize << num_vars;
        debug!("Evaluating {} rows over {}.", num_rows, variables);
        let mut rows = Vec::with_capacity(num_rows);
        for assignment in AssignmentIterator::new(variables.clone()) {
            let result = expression.eval_in(&assignment)?;
            trace!("{} => {}", assignment, result);
            rows.push(TruthTableRow { assignment, result });
        }

        if cfg!(feature = "shields_up") {
            verify_rows(&variables, &rows);
        }
        Ok(TruthTable { variables, rows })
    }
}

/// **(internal)** Panic unless `rows` are exactly the `2^n` assignments of `variables`
/// in ascending order.
fn verify_rows(variables: &VariableSet, rows: &[TruthTableRow]) {
    let num_rows = 1usize << variables.len();
    if rows.len() != num_rows {
        panic!(
            "Expected {} rows for {} variables, but enumerated {}.",
            num_rows,
            variables.len(),
            rows.len()
        );
    }
    for (index, row) in rows.iter().enumerate() {
        if row.assignment.variables() != variables {
            panic!(
                "Row {} is over {}, but the table is over {}.",
                index,
                row.assignment.variables(),
                variables
            );
        }
        if row.assignment.row_index() != index as u64 {
            panic!(
                "Row {} holds assignment {}.",
                index,
                row.assignment.row_index()
            );
        }
    }
}

impl Default for TruthTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
