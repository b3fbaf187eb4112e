//! Arithmetic expression evaluator
//!
//! Handles `+ - * / ^` with the usual precedence, right-associative
//! exponentiation, unary minus, and parentheses. Pure, no I/O.

use async_trait::async_trait;

use crate::error::ToolError;
use crate::registry::{Capability, ToolParams};

/// Calculator capability
pub struct CalculatorTool;

impl CalculatorTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CalculatorTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Capability for CalculatorTool {
    async fn invoke(&self, params: &ToolParams) -> Result<String, ToolError> {
        let expression = params
            .get("expression")
            .ok_or_else(|| ToolError::new("missing parameter: expression"))?;
        let value = evaluate(expression).map_err(ToolError::new)?;
        Ok(format!("Result: {}", format_value(value)))
    }
}

/// Evaluate an arithmetic expression
pub fn evaluate(input: &str) -> Result<f64, String> {
    let mut parser = Parser {
        input: input.as_bytes(),
        pos: 0,
    };
    let value = parser.expression()?;
    parser.skip_whitespace();
    if parser.pos < parser.input.len() {
        return Err(format!(
            "unexpected character '{}' in expression",
            parser.input[parser.pos] as char
        ));
    }
    Ok(value)
}

/// Integral results print without a trailing decimal point
fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn skip_whitespace(&mut self) {
        while self.pos < self.input.len() && self.input[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_whitespace();
        self.input.get(self.pos).copied()
    }

    // expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<f64, String> {
        let mut value = self.term()?;
        while let Some(op) = self.peek() {
            match op {
                b'+' => {
                    self.pos += 1;
                    value += self.term()?;
                }
                b'-' => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    // term := power (('*' | '/') power)*
    fn term(&mut self) -> Result<f64, String> {
        let mut value = self.power()?;
        while let Some(op) = self.peek() {
            match op {
                b'*' => {
                    self.pos += 1;
                    value *= self.power()?;
                }
                b'/' => {
                    self.pos += 1;
                    let divisor = self.power()?;
                    if divisor == 0.0 {
                        return Err("division by zero".to_string());
                    }
                    value /= divisor;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    // power := unary ('^' power)?   -- right associative
    fn power(&mut self) -> Result<f64, String> {
        let base = self.unary()?;
        if self.peek() == Some(b'^') {
            self.pos += 1;
            let exponent = self.power()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    // unary := '-' unary | primary
    fn unary(&mut self) -> Result<f64, String> {
        if self.peek() == Some(b'-') {
            self.pos += 1;
            return Ok(-self.unary()?);
        }
        self.primary()
    }

    // primary := '(' expression ')' | number
    fn primary(&mut self) -> Result<f64, String> {
        match self.peek() {
            Some(b'(') => {
                self.pos += 1;
                let value = self.expression()?;
                if self.peek() != Some(b')') {
                    return Err("missing closing parenthesis".to_string());
                }
                self.pos += 1;
                Ok(value)
            }
            Some(c) if c.is_ascii_digit() || c == b'.' => self.number(),
            Some(c) => Err(format!("unexpected character '{}' in expression", c as char)),
            None => Err("unexpected end of expression".to_string()),
        }
    }

    fn number(&mut self) -> Result<f64, String> {
        self.skip_whitespace();
        let start = self.pos;
        while self.pos < self.input.len() && self.input[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        if self.pos < self.input.len() && self.input[self.pos] == b'.' {
            self.pos += 1;
            while self.pos < self.input.len() && self.input[self.pos].is_ascii_digit() {
                self.pos += 1;
            }
        }
        if self.pos == start {
            return Err("expected a number".to_string());
        }
        let text = std::str::from_utf8(&self.input[start..self.pos]).expect("ascii digits");
        text.parse::<f64>()
            .map_err(|_| format!("invalid number '{}'", text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn evaluates_binary_expressions() {
        assert_eq!(evaluate("125 * 48").unwrap(), 6000.0);
        assert_eq!(evaluate("5+3").unwrap(), 8.0);
        assert_eq!(evaluate("10 - 4").unwrap(), 6.0);
        assert_eq!(evaluate("125/5").unwrap(), 25.0);
    }

    #[test]
    fn respects_precedence() {
        assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
        assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
        assert_eq!(evaluate("2 ^ 10").unwrap(), 1024.0);
        // right associative
        assert_eq!(evaluate("2 ^ 3 ^ 2").unwrap(), 512.0);
        assert_eq!(evaluate("-3 + 5").unwrap(), 2.0);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(evaluate("").is_err());
        assert!(evaluate("2 +").is_err());
        assert!(evaluate("hello").is_err());
        assert!(evaluate("(1 + 2").is_err());
        assert!(evaluate("10 / 0").is_err());
    }

    #[test]
    fn renders_integral_results_without_decimals() {
        let tool = CalculatorTool::new();
        let mut params = HashMap::new();
        params.insert("expression".to_string(), "125 * 48".to_string());

        let result = tokio_test::block_on(tool.invoke(&params)).unwrap();
        assert_eq!(result, "Result: 6000");

        params.insert("expression".to_string(), "7 / 2".to_string());
        let result = tokio_test::block_on(tool.invoke(&params)).unwrap();
        assert_eq!(result, "Result: 3.5");
    }
}
