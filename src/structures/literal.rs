/*!
Literals are variables paired with a (boolean) polarity.

Variables are sequential integers, counted from 1 so that a literal has a
direct DIMACS representation --- the variable with its sign indicating the
polarity.
The engine allocates variables itself (see [VariablePools](crate::db::variables::VariablePools)) and the oracle boundary is the only place the integer form is used.
*/

/// A boolean variable, identified by a positive integer.
///
/// The zero variable is never allocated.
pub type Variable = u32;

/// A variable paired with a polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    variable: Variable,
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing a variable with a polarity.
    pub fn new(variable: Variable, polarity: bool) -> Self {
        debug_assert_ne!(variable, 0);
        Literal { variable, polarity }
    }

    /// The negation of the literal.
    pub fn negate(self) -> Self {
        Literal {
            variable: self.variable,
            polarity: !self.polarity,
        }
    }

    /// The variable of the literal.
    pub fn variable(self) -> Variable {
        self.variable
    }

    /// The polarity of the literal.
    pub fn polarity(self) -> bool {
        self.polarity
    }

    /// The literal in its integer form, with sign indicating polarity.
    pub fn as_dimacs(self) -> isize {
        match self.polarity {
            true => self.variable as isize,
            false => -(self.variable as isize),
        }
    }
}

impl std::ops::Neg for Literal {
    type Output = Literal;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_dimacs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation() {
        let l = Literal::new(3, true);
        assert_eq!(-l, Literal::new(3, false));
        assert_eq!(-(-l), l);
        assert_eq!(l.as_dimacs(), 3);
        assert_eq!((-l).as_dimacs(), -3);
    }
}
