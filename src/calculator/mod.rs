//! Four-function calculator.
//!
//! [`Operation`] maps the console menu (1-4) to arithmetic; [`Calculation`]
//! pairs operands with a checked result and formats it for display.

use crate::toolkit_error::ToolkitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A binary arithmetic operation offered by the calculator menu.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    /// Every operation in menu order.
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    /// Look up an operation by its 1-based menu number.
    pub fn from_choice(choice: u8) -> Result<Self, ToolkitError> {
        match choice {
            1..=4 => Ok(Self::ALL[usize::from(choice) - 1]),
            _ => Err(ToolkitError::UnknownOperation(choice.to_string())),
        }
    }

    /// 1-based menu number.
    pub fn choice(self) -> u8 {
        match self {
            Operation::Addition => 1,
            Operation::Subtraction => 2,
            Operation::Multiplication => 3,
            Operation::Division => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Addition => "Addition",
            Operation::Subtraction => "Subtraction",
            Operation::Multiplication => "Multiplication",
            Operation::Division => "Division",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Subtraction => '-',
            Operation::Multiplication => '*',
            Operation::Division => '/',
        }
    }

    /// Apply the operation to `x` and `y`.
    ///
    /// Only division can fail, and only for an exact zero divisor (`0.0` or
    /// `-0.0`).
    pub fn apply(self, x: f64, y: f64) -> Result<f64, ToolkitError> {
        match self {
            Operation::Addition => Ok(x + y),
            Operation::Subtraction => Ok(x - y),
            Operation::Multiplication => Ok(x * y),
            Operation::Division if y == 0.0 => Err(ToolkitError::DivisionByZero),
            Operation::Division => Ok(x / y),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts a menu number, an operator symbol or an operation name
/// (case-insensitive).
impl FromStr for Operation {
    type Err = ToolkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(choice) = s.parse::<u8>() {
            return Self::from_choice(choice);
        }
        Self::ALL
            .into_iter()
            .find(|op| {
                (s.len() == 1 && s.starts_with(op.symbol())) || s.eq_ignore_ascii_case(op.name())
            })
            .ok_or_else(|| ToolkitError::UnknownOperation(s.to_string()))
    }
}

/// Format a number the way the calculator prints it: whole values without a
/// fractional part.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // also catches -0.0, which `{:.0}` would print as "-0"
        return "0".to_string();
    }
    if value.is_finite() && value.fract() == 0.0 {
        // `{:.0}` keeps large whole values exact instead of going through an integer cast
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// A completed calculation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub lhs: f64,
    pub operation: Operation,
    pub rhs: f64,
    pub result: f64,
}

impl Calculation {
    pub fn evaluate(lhs: f64, operation: Operation, rhs: f64) -> Result<Self, ToolkitError> {
        let result = operation.apply(lhs, rhs)?;
        Ok(Self {
            lhs,
            operation,
            rhs,
            result,
        })
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format_number(self.lhs),
            self.operation,
            format_number(self.rhs),
            format_number(self.result)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers() {
        assert_eq!(Operation::from_choice(1), Ok(Operation::Addition));
        assert_eq!(Operation::from_choice(4), Ok(Operation::Division));
        assert_eq!(
            Operation::from_choice(0),
            Err(ToolkitError::UnknownOperation("0".into()))
        );
        assert!(Operation::from_choice(5).is_err());
        for op in Operation::ALL {
            assert_eq!(Operation::from_choice(op.choice()), Ok(op));
        }
    }

    #[test]
    fn parse_symbols_and_names() {
        assert_eq!("*".parse(), Ok(Operation::Multiplication));
        assert_eq!(" - ".parse(), Ok(Operation::Subtraction));
        assert_eq!("division".parse(), Ok(Operation::Division));
        assert_eq!("3".parse(), Ok(Operation::Multiplication));
        assert!("%".parse::<Operation>().is_err());
        assert!("+-".parse::<Operation>().is_err());
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(
            Operation::Division.apply(1.0, 0.0),
            Err(ToolkitError::DivisionByZero)
        );
        assert_eq!(
            Operation::Division.apply(1.0, -0.0),
            Err(ToolkitError::DivisionByZero)
        );
        assert_eq!(Operation::Division.apply(0.0, 4.0), Ok(0.0));
    }

    #[test]
    fn whole_numbers_print_without_fraction() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(f64::INFINITY), "inf");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(format_number(-0.0), "0");
        let calc = Calculation::evaluate(0.0, Operation::Multiplication, -5.0).unwrap();
        assert_eq!(calc.to_string(), "0 Multiplication -5 = 0");
    }

    #[test]
    fn calculation_display() {
        let calc = Calculation::evaluate(7.0, Operation::Division, 2.0).unwrap();
        assert_eq!(calc.to_string(), "7 Division 2 = 3.5");
        let calc = Calculation::evaluate(1.5, Operation::Addition, 2.5).unwrap();
        assert_eq!(calc.to_string(), "1.5 Addition 2.5 = 4");
    }
}
