//! The fixed comparison operator set shared by assertions and assessments.

use std::fmt;

/// Source text of the operand expressions of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exprs {
    pub lhs: &'static str,
    pub rhs: Option<&'static str>,
}

impl Exprs {
    pub const fn pair(lhs: &'static str, rhs: &'static str) -> Self {
        Self {
            lhs,
            rhs: Some(rhs),
        }
    }

    pub const fn single(expr: &'static str) -> Self {
        Self {
            lhs: expr,
            rhs: None,
        }
    }

    fn rhs(&self) -> &'static str {
        self.rhs.unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    Null,
    NotNull,
    StringEqual,
    StringNotEqual,
    True,
    False,
}

impl Comparison {
    /// Operator printed when a binary comparison holds.
    pub fn operator(self) -> &'static str {
        match self {
            Comparison::Equal | Comparison::StringEqual => "==",
            Comparison::NotEqual | Comparison::StringNotEqual => "!=",
            Comparison::GreaterThan => ">",
            Comparison::LessThan => "<",
            Comparison::GreaterThanOrEqual => ">=",
            Comparison::LessThanOrEqual => "<=",
            Comparison::Null => "==",
            Comparison::NotNull => "!=",
            Comparison::True | Comparison::False => "",
        }
    }

    /// Operator printed when a binary comparison does not hold.
    pub fn negated(self) -> &'static str {
        match self {
            Comparison::Equal | Comparison::StringEqual => "!=",
            Comparison::NotEqual | Comparison::StringNotEqual => "==",
            Comparison::GreaterThan => "<=",
            Comparison::LessThan => ">=",
            Comparison::GreaterThanOrEqual => "<",
            Comparison::LessThanOrEqual => ">",
            Comparison::Null => "!=",
            Comparison::NotNull => "==",
            Comparison::True | Comparison::False => "",
        }
    }

    /// Failure reason, e.g. `result != expected` or `(flag) != true`.
    pub fn reason(self, exprs: Exprs) -> Reason {
        Reason {
            comparison: self,
            exprs,
            held: false,
        }
    }

    /// Description of a holding check, e.g. `result == expected`.
    pub fn description(self, exprs: Exprs) -> Reason {
        Reason {
            comparison: self,
            exprs,
            held: true,
        }
    }
}

/// Renders a check's operands around the held or broken operator.
#[derive(Debug, Clone, Copy)]
pub struct Reason {
    comparison: Comparison,
    exprs: Exprs,
    held: bool,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lhs = self.exprs.lhs;
        let op = if self.held {
            self.comparison.operator()
        } else {
            self.comparison.negated()
        };
        match (self.comparison, self.held) {
            (Comparison::True | Comparison::False, true) => write!(f, "{lhs}"),
            (Comparison::True, false) => write!(f, "({lhs}) != true"),
            (Comparison::False, false) => write!(f, "({lhs}) != false"),
            (Comparison::Null | Comparison::NotNull, _) => write!(f, "{lhs} {op} NULL"),
            _ => write!(f, "{lhs} {op} {}", self.exprs.rhs()),
        }
    }
}
