// Filter expression for metric values
use crate::error::Error;
use std::str::FromStr;

/// Comparison operators accepted in a filter expression.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FilterOp {
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `==`
    Eq,
    /// `!=`
    Ne,
}

/// A one-operator numeric predicate over a metric value.
///
/// Parsed from `<op> <number>`, e.g. `>= 1048576`. The metric value is the
/// left operand and the literal is the right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Filter {
    op:  FilterOp,
    rhs: f64,
}

impl Filter {
    /// Apply the predicate to a metric value.
    pub fn apply(&self, value: f64) -> bool {
        match self.op {
            FilterOp::Gt => value > self.rhs,
            FilterOp::Ge => value >= self.rhs,
            FilterOp::Lt => value < self.rhs,
            FilterOp::Le => value <= self.rhs,
            FilterOp::Eq => value == self.rhs,
            FilterOp::Ne => value != self.rhs,
        }
    }
}

impl FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (op, rhs) = s
            .split_once(' ')
            .ok_or_else(|| Error::InvalidFilterSyntax(s.to_string()))?;

        let op = match op {
            ">"  => FilterOp::Gt,
            ">=" => FilterOp::Ge,
            "<"  => FilterOp::Lt,
            "<=" => FilterOp::Le,
            "==" => FilterOp::Eq,
            "!=" => FilterOp::Ne,
            _    => return Err(Error::InvalidFilterOperator(op.to_string())),
        };

        let rhs: f64 = rhs
            .parse()
            .map_err(|_| Error::InvalidFilterSyntax(s.to_string()))?;

        Ok(Self { op, rhs })
    }
}
