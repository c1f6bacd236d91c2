use crate::error::ErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// Total lookup from the one-character textual form.
    pub fn from_symbol(symbol: &str) -> Result<Self, ErrorKind> {
        match symbol {
            "+" => Ok(Self::Plus),
            "-" => Ok(Self::Minus),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            "^" => Ok(Self::Power),
            other => Err(ErrorKind::Syntax(format!("invalid operator: {other}"))),
        }
    }
}

/// The callable built-ins. Adding one is a new case here plus an arm in the
/// call evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Function {
    SquareRoot,
}

impl Function {
    // Identifier names must match a known function exactly
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sqrt" => Some(Self::SquareRoot),
            _ => None,
        }
    }
}

/// An expression tree node. Non-leaf nodes exclusively own their children;
/// a tree is built once per calculation and discarded after evaluation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SyntaxNode {
    Literal {
        text: String,
    },
    Identifier {
        name: String,
    },
    Unary {
        operator: Operator,
        operand: Box<SyntaxNode>,
    },
    Binary {
        operator: Operator,
        left: Box<SyntaxNode>,
        right: Box<SyntaxNode>,
    },
    /// `identifier` always holds an `Identifier` node; calls take exactly
    /// one argument.
    Call {
        identifier: Box<SyntaxNode>,
        argument: Box<SyntaxNode>,
    },
}

#[cfg(test)]
mod test {
    use super::{Function, Operator};
    use crate::error::ErrorKind;

    #[test]
    fn operator_lookup_is_total() {
        assert_eq!(Operator::from_symbol("^").unwrap(), Operator::Power);
        assert_eq!(
            Operator::from_symbol("%").unwrap_err(),
            ErrorKind::Syntax("invalid operator: %".into())
        );
    }

    #[test]
    fn function_names_must_match_exactly() {
        assert_eq!(Function::from_name("sqrt"), Some(Function::SquareRoot));
        assert_eq!(Function::from_name("Sqrt"), None);
        assert_eq!(Function::from_name("sqrt2"), None);
    }
}
