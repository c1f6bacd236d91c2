use crate::error::{CalcResult, ErrorKind};
use crate::syntax::{Function, Operator, SyntaxNode};

/// Reduces a syntax tree to a single number by structural recursion, one
/// match arm per node variant.
pub(crate) fn evaluate(node: &SyntaxNode) -> CalcResult<f64> {
    match node {
        SyntaxNode::Literal { text } => evaluate_literal(text),
        SyntaxNode::Identifier { name } => Err(ErrorKind::Evaluation(format!(
            "no evaluator found for the bare identifier {name}"
        ))),
        SyntaxNode::Unary { operator, operand } => evaluate_unary(*operator, operand),
        SyntaxNode::Binary {
            operator,
            left,
            right,
        } => evaluate_binary(*operator, left, right),
        SyntaxNode::Call {
            identifier,
            argument,
        } => evaluate_call(identifier, argument),
    }
}

fn evaluate_literal(text: &str) -> CalcResult<f64> {
    if text == "pi" {
        return Ok(std::f64::consts::PI);
    }

    // The parser only builds literals out of digit/dot runs, but a
    // degenerate one like "." is still representable
    text.parse::<f64>()
        .map_err(|_| ErrorKind::Evaluation(format!("invalid numeric literal: {text}")))
}

fn evaluate_unary(operator: Operator, operand: &SyntaxNode) -> CalcResult<f64> {
    let value = evaluate(operand)?;

    match operator {
        Operator::Minus => Ok(-value),
        _ => Err(ErrorKind::Evaluation(
            "unary expressions shouldn't have any other operator than -".into(),
        )),
    }
}

fn evaluate_binary(operator: Operator, left: &SyntaxNode, right: &SyntaxNode) -> CalcResult<f64> {
    let left = evaluate(left)?;
    let right = evaluate(right)?;

    match operator {
        Operator::Plus => Ok(left + right),
        Operator::Minus => Ok(left - right),
        Operator::Multiply => Ok(left * right),
        Operator::Divide => {
            // Tolerance check, not an exact-zero check
            if right.abs() < f64::EPSILON {
                return Err(ErrorKind::Evaluation("cannot divide by zero".into()));
            }

            Ok(left / right)
        }
        Operator::Power => Ok(left.powf(right)),
    }
}

fn evaluate_call(identifier: &SyntaxNode, argument: &SyntaxNode) -> CalcResult<f64> {
    let name = match identifier {
        SyntaxNode::Identifier { name } => name,
        other => {
            return Err(ErrorKind::Evaluation(format!(
                "call expressions must be made through an identifier, found {other:?}"
            )))
        }
    };
    let function = match Function::from_name(name) {
        Some(function) => function,
        None => return Err(ErrorKind::Evaluation(format!("unknown function: {name}"))),
    };
    let value = evaluate(argument)?;

    match function {
        Function::SquareRoot => {
            if value < 0.0 {
                return Err(ErrorKind::Evaluation(
                    "cannot take the square root of a negative number".into(),
                ));
            }

            Ok(value.sqrt())
        }
    }
}
