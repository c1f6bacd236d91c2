mod error;
mod eval;
mod syntax;

pub use error::{CalcResult, ErrorKind};

use syntax::{Parser, Tokenizer};

/// Evaluates an arithmetic expression to a single number.
///
/// Every call runs a fresh tokenizer, parser and evaluator, so repeated
/// calls with the same input always produce the same result.
pub fn calculate(input: &str) -> CalcResult<f64> {
    let tokens = Tokenizer::new(input).tokenize();
    log::debug!(
        "scanned {} tokens from {} input characters",
        tokens.len(),
        input.len()
    );

    let ast = Parser::new(tokens).parse()?;
    log::trace!("parsed syntax tree: {ast:?}");

    eval::evaluate(&ast)
}

#[cfg(test)]
mod test {
    use super::{calculate, ErrorKind};

    #[test]
    fn calculates_the_stretch_goal() {
        let result = calculate("sqrt((((9*9)/12)+(13-4))*2)^2)").unwrap();

        assert!((result - 31.5).abs() < 1e-9);
    }

    #[test]
    fn repeated_calls_yield_the_same_result() {
        let first = calculate("sqrt(pi)*4").unwrap();
        let second = calculate("sqrt(pi)*4").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn maps_failures_to_their_stage() {
        assert!(matches!(calculate("25/0"), Err(ErrorKind::Evaluation(_))));
        assert!(matches!(calculate("2 2"), Err(ErrorKind::Syntax(_))));
        assert!(matches!(calculate("sqrt(5"), Err(ErrorKind::Syntax(_))));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(calculate(""), Err(ErrorKind::Syntax(_))));
    }

    #[test]
    fn renders_errors_for_the_caller() {
        let why = calculate("sqrt(-1)").unwrap_err();

        assert_eq!(
            why.to_string(),
            "evaluation error: cannot take the square root of a negative number"
        );
    }
}
