use super::*;
use std::fmt::{Display, Error, Formatter};

impl Variable {
    /// Create a variable from its letter.
    ///
    /// *Panics:* `name` must be an uppercase ASCII letter (`A` to `Z`).
    pub fn new(name: char) -> Variable {
        match Variable::try_from_char(name) {
            Some(var) => var,
            None => panic!("Variable name {:?} is invalid. Use A to Z.", name),
        }
    }

    /// Create a variable from its letter, or `None` if `name` is not in `A` to `Z`.
    pub fn try_from_char(name: char) -> Option<Variable> {
        if name.is_ascii_uppercase() {
            Some(Variable(name))
        } else {
            None
        }
    }

    /// All 26 variables in ascending order.
    pub fn all() -> impl DoubleEndedIterator<Item = Variable> {
        ('A'..='Z').map(Variable)
    }

    /// The letter identifying this variable.
    pub fn name(self) -> char {
        self.0
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", self.0)
    }
}
