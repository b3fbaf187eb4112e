//! Query classification
//!
//! Maps raw query text to at most one tool invocation draft through an
//! ordered cascade of category detectors. First match wins; classification
//! is a pure, deterministic function of the query and the static registry.

pub mod codegen;
pub mod extract;

use crate::approval::InvocationDraft;
use crate::registry::{
    ToolRegistry, CALCULATOR, COUNTRY, CRYPTO, PYTHON, TIME, WEATHER,
};

/// Keyword list that routes a query into the code-execution category.
/// Substring containment against the lowercased query.
const CODE_KEYWORDS: &[&str] = &[
    // General
    "python", "code", "script", "program", "execute", "run", "compile",
    "coding", "programming", "write code", "run code",
    // Common algorithms
    "factorial", "fibonacci", "prime", "palindrome", "armstrong",
    "perfect number", "lcm", "gcd", "hcf",
    // Math operations
    "square", "cube", "power", "root", "sqrt", "exponent",
    "sum", "average", "mean", "median", "mode", "total",
    "multiply", "divide", "add", "subtract",
    // Number operations
    "even", "odd", "positive", "negative", "natural", "whole",
    "factor", "multiple", "divisor", "remainder", "modulo",
    // Sequences
    "sequence", "series", "pattern", "generate", "create",
    // Counting and finding
    "count", "how many", "number of", "total of", "find",
    "search", "locate", "detect", "identify",
    // String operations
    "string", "text", "character", "char", "letter", "word",
    "sentence", "reverse", "uppercase", "lowercase", "capitalize",
    "replace", "remove", "extract", "parse",
    // Special characters
    "dot", "dots", "period", "comma", "semicolon", "colon",
    "space", "digit", "number", "symbol", "special character",
    // Data structures
    "list", "array", "dictionary", "dict", "tuple", "set",
    "collection", "data structure",
    // Control flow
    "loop", "for loop", "while loop", "if", "else", "elif",
    "condition", "iterate", "iteration", "function", "def",
    // Processing
    "process", "transform", "convert", "change", "modify",
    "format", "filter", "sort", "order", "arrange",
    // Analysis
    "analyze", "calculate", "compute", "determine", "check",
    "verify", "test", "validate",
];

/// Words that turn a code request into a counting request
const COUNT_TRIGGERS: &[&str] = &["count", "how many", "number of", "total"];

const CRYPTO_TRIGGERS: &[&str] = &[
    "bitcoin", "ethereum", "crypto", "btc", "eth", "price", "cryptocurrency",
];

const TIME_TRIGGERS: &[&str] = &["time", "date", "today", "now"];

/// A query with its lowercased form precomputed
pub struct Query {
    pub raw: String,
    pub lower: String,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            lower: raw.to_lowercase(),
        }
    }

    fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|kw| self.lower.contains(kw))
    }
}

/// The mutually exclusive query classes, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    CodeExecution,
    Arithmetic,
    Weather,
    MarketPrice,
    Country,
    Time,
}

/// Evaluation order of the cascade. A later category is never consulted
/// once an earlier one matches.
pub const CASCADE: [Category; 6] = [
    Category::CodeExecution,
    Category::Arithmetic,
    Category::Weather,
    Category::MarketPrice,
    Category::Country,
    Category::Time,
];

impl Category {
    /// Does this category claim the query? A category only matches when its
    /// parameter can actually be extracted; a keyword hit with nothing to
    /// extract lets the cascade continue.
    pub fn matches(&self, q: &Query) -> bool {
        match self {
            Category::CodeExecution => q.contains_any(CODE_KEYWORDS),
            // "calculate"/"compute" alone cannot yield an expression, so the
            // extractable operator pattern is what decides
            Category::Arithmetic => extract::binary_expression(&q.raw).is_some(),
            Category::Weather => {
                q.lower.contains("weather") && extract::city_after_in(&q.raw).is_some()
            }
            Category::MarketPrice => {
                q.contains_any(CRYPTO_TRIGGERS) && extract::crypto_asset(&q.lower).is_some()
            }
            Category::Country => {
                (q.lower.contains("country")
                    || q.lower.contains("capital of")
                    || q.lower.contains("population of"))
                    && extract::country_after_of(&q.raw).is_some()
            }
            Category::Time => q.contains_any(TIME_TRIGGERS),
        }
    }

    fn build(&self, q: &Query, registry: &ToolRegistry) -> Option<InvocationDraft> {
        match self {
            Category::CodeExecution => {
                draft(registry, PYTHON, &[("code", generate_program(q))])
            }
            Category::Arithmetic => {
                let expression = extract::binary_expression(&q.raw)?;
                draft(registry, CALCULATOR, &[("expression", expression.to_string())])
            }
            Category::Weather => {
                let city = extract::city_after_in(&q.raw)?;
                draft(registry, WEATHER, &[("city", city)])
            }
            Category::MarketPrice => {
                let asset = extract::crypto_asset(&q.lower)?;
                draft(registry, CRYPTO, &[("crypto", asset.to_string())])
            }
            Category::Country => {
                let country = extract::country_after_of(&q.raw)?;
                draft(registry, COUNTRY, &[("country", country)])
            }
            Category::Time => draft(registry, TIME, &[]),
        }
    }
}

fn draft(
    registry: &ToolRegistry,
    tool: &str,
    params: &[(&str, String)],
) -> Option<InvocationDraft> {
    let tool = registry.lookup(tool).ok()?.clone();
    let params = params
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect();
    Some(InvocationDraft::new(tool, params))
}

/// Classify a query into at most one invocation draft.
pub fn classify(query: &str, registry: &ToolRegistry) -> Option<InvocationDraft> {
    let q = Query::new(query);
    let category = CASCADE.iter().find(|c| c.matches(&q))?;
    tracing::debug!(?category, "Query classified");
    category.build(&q, registry)
}

/// Sub-rules of the code-execution category, in fixed priority order.
/// Absent integer literals substitute each rule's documented default.
fn generate_program(q: &Query) -> String {
    let lower = &q.lower;

    if q.contains_any(COUNT_TRIGGERS) {
        return codegen::counting_report(&q.raw);
    }

    if lower.contains("factorial") {
        let n = extract::first_integer(lower).unwrap_or("10");
        return codegen::factorial(n);
    }

    if lower.contains("fibonacci") {
        let n = extract::first_integer(lower).unwrap_or("10");
        return codegen::fibonacci(n);
    }

    if lower.contains("prime") {
        let limit = extract::first_integer(lower).unwrap_or("50");
        return codegen::primes(limit);
    }

    if lower.contains("palindrome") {
        let text = extract::palindrome_candidate(lower)
            .unwrap_or_else(|| "racecar".to_string());
        return codegen::palindrome_check(&text);
    }

    // "even" takes priority when both appear
    if (lower.contains("even") || lower.contains("odd")) && lower.contains("number") {
        let limit = extract::first_integer(lower).unwrap_or("30");
        return if lower.contains("even") {
            codegen::even_numbers(limit)
        } else {
            codegen::odd_numbers(limit)
        };
    }

    if q.contains_any(&["sum", "average", "mean", "total"]) && !lower.contains("count") {
        let numbers = extract::integers(&q.raw);
        if numbers.len() > 1 {
            return codegen::number_statistics(&numbers);
        }
    }

    if q.contains_any(&["square", "cube", "power", "exponent"]) {
        if let Some(n) = extract::first_integer(lower) {
            return if lower.contains("square") {
                codegen::square(n)
            } else if lower.contains("cube") {
                codegen::cube(n)
            } else {
                codegen::power_table(n)
            };
        }
    }

    if lower.contains("reverse") {
        return codegen::reverse_string(&extract::reverse_target(&q.raw));
    }

    codegen::generic(&q.raw)
}
