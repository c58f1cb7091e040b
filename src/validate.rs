use anyhow::Result;
use regex::Regex;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Function,
    If,
    While,
    For,
}

impl BlockKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Function => "function",
            BlockKind::If => "if",
            BlockKind::While => "while",
            BlockKind::For => "for",
        }
    }
}

/// A structural finding. Lines are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuralError {
    pub line: usize,
    pub message: String,
    /// Machine-readable error code.
    pub code: &'static str,
}

impl Display for StructuralError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {} ({})", self.line, self.message, self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<StructuralError>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<StructuralError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct OpenBlock {
    kind: BlockKind,
    line: usize,
}

/// Line-oriented block and quote balance checker for Lua script text.
///
/// This is a heuristic, not a parser: each line is classified by the first block pattern it
/// matches, so a line that opens and closes a block (`if x then y() end`) counts as an opener
/// only, and keywords inside strings are not told apart from real ones.
#[derive(Debug, Clone)]
pub struct Validator {
    function_re: Regex,
    if_re: Regex,
    while_re: Regex,
    for_re: Regex,
    end_re: Regex,
}

impl Validator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            // Named, local, assigned and anonymous definitions alike.
            function_re: Regex::new(r"\bfunction\b\s*[\w.:]*\s*\(")?,
            // `\bif\b` never matches inside `elseif`.
            if_re: Regex::new(r"\bif\b.*\bthen\b")?,
            while_re: Regex::new(r"\bwhile\b.*\bdo\b")?,
            for_re: Regex::new(r"\bfor\b.*\bdo\b")?,
            end_re: Regex::new(r"\bend\b")?,
        })
    }

    pub fn validate(&self, text: &str) -> ValidationReport {
        let mut errors = Vec::new();
        let mut stack: Vec<OpenBlock> = Vec::new();

        for (idx, raw_line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with("--") {
                continue;
            }

            if has_unbalanced_quotes(line) {
                errors.push(StructuralError {
                    line: line_no,
                    message: "Unbalanced quotes".to_string(),
                    code: "unbalanced-quotes",
                });
            }

            if let Some(kind) = self.opener(line) {
                stack.push(OpenBlock {
                    kind,
                    line: line_no,
                });
            } else if self.end_re.is_match(line) && stack.pop().is_none() {
                errors.push(StructuralError {
                    line: line_no,
                    message: "Unexpected 'end' without a matching block".to_string(),
                    code: "unexpected-end",
                });
            }
        }

        for open in stack {
            errors.push(StructuralError {
                line: open.line,
                message: format!("unclosed \"{}\" block", open.kind.as_str()),
                code: "unclosed-block",
            });
        }

        debug!(errors = errors.len(), "validated script text");
        ValidationReport::from_errors(errors)
    }

    fn opener(&self, line: &str) -> Option<BlockKind> {
        if self.function_re.is_match(line) {
            Some(BlockKind::Function)
        } else if self.if_re.is_match(line) {
            Some(BlockKind::If)
        } else if self.while_re.is_match(line) {
            Some(BlockKind::While)
        } else if self.for_re.is_match(line) {
            Some(BlockKind::For)
        } else {
            None
        }
    }
}

/// Validates `text` with a freshly built [`Validator`].
pub fn validate(text: &str) -> Result<ValidationReport> {
    Ok(Validator::new()?.validate(text))
}

/// An odd count of `"` or `'` is only reported when the quoted spans really fail to close
/// on this line.
fn has_unbalanced_quotes(line: &str) -> bool {
    let doubles = line.matches('"').count();
    let singles = line.matches('\'').count();
    if doubles % 2 == 0 && singles % 2 == 0 {
        return false;
    }
    !spans_close_within_line(line)
}

/// Scans quoted spans left to right. Escapes are honoured, the other quote kind is literal
/// inside an open span, and a `--` comment outside any span ends the scan.
fn spans_close_within_line(line: &str) -> bool {
    let mut open: Option<char> = None;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match open {
            Some(quote) => {
                if ch == '\\' {
                    chars.next();
                } else if ch == quote {
                    open = None;
                }
            }
            None => {
                if ch == '"' || ch == '\'' {
                    open = Some(ch);
                } else if ch == '-' && chars.peek() == Some(&'-') {
                    break;
                }
            }
        }
    }
    open.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str) -> ValidationReport {
        Validator::new().unwrap().validate(text)
    }

    #[test]
    fn missing_end_reports_unclosed_if() {
        let report = check("if x then\n  foo()\n");
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec![StructuralError {
                line: 1,
                message: "unclosed \"if\" block".to_string(),
                code: "unclosed-block",
            }]
        );
    }

    #[test]
    fn balanced_blocks_pass() {
        let text = "local function helper(a)\n  return a\nend\n\nfor i = 1, 3 do\n  while busy() do\n    if i > 1 then\n      print(\"x\")\n    end\n  end\nend\n";
        let report = check(text);
        assert!(report.is_valid, "{:?}", report.errors);
    }

    #[test]
    fn stray_end_is_unexpected() {
        let report = check("foo()\nend\n");
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].line, 2);
        assert_eq!(report.errors[0].code, "unexpected-end");
    }

    #[test]
    fn pop_does_not_check_block_type() {
        let report = check("while a do\nif b then\nend\nend\n");
        assert!(report.is_valid);
    }

    #[test]
    fn unclosed_blocks_reported_in_push_order() {
        let report = check("function f()\nfor i = 1, 2 do\n");
        let lines = report.errors.iter().map(|e| e.line).collect::<Vec<_>>();
        assert_eq!(lines, vec![1, 2]);
        assert_eq!(report.errors[0].message, "unclosed \"function\" block");
        assert_eq!(report.errors[1].message, "unclosed \"for\" block");
    }

    #[test]
    fn comment_lines_are_skipped() {
        let report = check("-- if this then \"\nprint(1)\n  -- end\n");
        assert!(report.is_valid);
    }

    #[test]
    fn quote_heuristic() {
        assert!(check("print(\"it's fine\")").is_valid);
        assert!(check("print('say \"hi\"')").is_valid);
        assert!(check("print(\"a\\\"b\")").is_valid);
        assert!(check("print(\"ok\") -- don't").is_valid);

        let report = check("print(\"oops)\nx = 1\n");
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].line, 1);
        assert_eq!(report.errors[0].code, "unbalanced-quotes");
    }

    #[test]
    fn one_line_block_is_a_known_blind_spot() {
        let report = check("if x then y() end\n");
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].code, "unclosed-block");
    }

    #[test]
    fn elseif_and_else_do_not_open_blocks() {
        let report = check("if a then\nelseif b then\nelse\nend\n");
        assert!(report.is_valid);
    }

    #[test]
    fn assigned_functions_open_blocks() {
        assert!(check("local f = function(x)\n  return x\nend\n").is_valid);
        assert!(!check("M.run = function()\n").is_valid);
    }

    #[test]
    fn anonymous_function_arguments_open_blocks() {
        let text = "local t = {3, 1, 2}\ntable.sort(t, function(a, b)\n  return a < b\nend)\n";
        let report = check(text);
        assert!(report.is_valid, "{:?}", report.errors);
        assert!(check("function obj:method(x)\n  return x\nend\n").is_valid);
        assert!(check("local fs = functions(t)\nlist = function_list(t)\n").is_valid);
    }

    #[test]
    fn nested_else_if_needs_its_own_end() {
        let text = "if a then\n  x()\nelse if b then\n  y()\nend\nend\n";
        let report = check(text);
        assert!(report.is_valid, "{:?}", report.errors);
    }

    #[test]
    fn openers_after_other_code_on_the_line() {
        let text = "local ok = ready(); if ok then\n  go()\nend\nx = 1; while busy() do\nend\nn = 0; for i = 1, 2 do\nend\n";
        let report = check(text);
        assert!(report.is_valid, "{:?}", report.errors);
        assert!(!check("x = 1; if ok then\n").is_valid);
    }
}
