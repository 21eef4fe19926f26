use crate::{Assignment, AssignmentIterator, VariableSet};
use std::mem::swap;

impl AssignmentIterator {
    /// Create a new iterator which visits all `2^n` assignments of the given variables,
    /// starting with all-false and counting up in binary (last variable changes fastest).
    pub fn new(variables: VariableSet) -> AssignmentIterator {
        AssignmentIterator {
            next_assignment: Some(Assignment::all_false(variables)),
        }
    }

    /// Create an iterator which yields nothing.
    pub fn empty() -> AssignmentIterator {
        AssignmentIterator {
            next_assignment: None,
        }
    }
}

impl Iterator for AssignmentIterator {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(assignment) = &self.next_assignment {
            // Compute the next assignment and then swap it with the current value.
            let mut result = assignment.next();
            swap(&mut result, &mut self.next_assignment);
            result
        } else {
            None
        }
    }
}
