use crate::catalog::TypeTag;
use crate::statement::{
    step_clause, Control, FunctionCall, FunctionDecl, Statement, StatementBody, StatementParameter,
};
use tracing::debug;

const PREAMBLE: &str = "-- Generated Lua Script\n-- Created with ME-Gui\n\nlocal API = require(\"api\")\n\n";
const VARIABLE_DECLARATIONS: &[&str] = &[
    "-- Variable declarations",
    "local CurrentTick = API.Get_tick()",
    "local OBJECTS_table = API.ReadAllObjectsArray({-1},{-1},{})",
];
const DECLARATIONS_HEADER: &str = "-- Function declarations";
const OUTSIDE_HEADER: &str = "-- Code outside main loop";
const LOOP_HEADER: &str = "-- Main execution loop";
const LOOP_GUARD: &str = "API.Read_LoopyLoop()";
const REFRESH_PROLOGUE: &[&str] = &[
    "-- Update game state",
    "CurrentTick = API.Get_tick()",
    "OBJECTS_table = API.ReadAllObjectsArray({-1},{-1},{})",
];
const EMPTY_LOOP_PLACEHOLDER: &str = "print(\"Add functions to build your script!\")";
const DEFAULT_FUNCTION_BODY: &str = "return true";

#[derive(Debug, Clone, Copy)]
pub struct CodegenOptions {
    /// Spaces per indent level.
    pub indent_width: usize,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

/// Renders the statement list as a Lua program. Disabled statements are left out entirely.
pub fn generate(statements: &[Statement]) -> String {
    generate_with_options(statements, CodegenOptions::default())
}

pub fn generate_with_options(statements: &[Statement], options: CodegenOptions) -> String {
    let declarations = statements
        .iter()
        .filter(|s| s.enabled)
        .filter_map(|s| match &s.body {
            StatementBody::Control(Control::Function(decl)) => Some(decl),
            _ => None,
        })
        .collect::<Vec<_>>();
    let outside = statements
        .iter()
        .filter(|s| s.enabled && !s.in_main_loop() && !s.is_declaration())
        .collect::<Vec<_>>();
    let inside = statements
        .iter()
        .filter(|s| s.enabled && s.in_main_loop())
        .collect::<Vec<_>>();
    debug!(
        declarations = declarations.len(),
        outside = outside.len(),
        inside = inside.len(),
        "generating script"
    );

    let mut builder = ScriptBuilder::new(options);
    builder.write_preamble();
    builder.write_declarations(&declarations);
    builder.write_outside(&outside);
    builder.write_main_loop(&inside);
    builder.output
}

struct ScriptBuilder {
    output: String,
    indent: usize,
    options: CodegenOptions,
}

impl ScriptBuilder {
    fn new(options: CodegenOptions) -> Self {
        Self {
            output: String::new(),
            indent: 0,
            options,
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.indent * self.options.indent_width {
            self.output.push(' ');
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn blank(&mut self) {
        self.output.push('\n');
    }

    fn write_preamble(&mut self) {
        self.output.push_str(PREAMBLE);
        for line in VARIABLE_DECLARATIONS {
            self.line(line);
        }
        self.blank();
    }

    fn write_declarations(&mut self, declarations: &[&FunctionDecl]) {
        if declarations.is_empty() {
            return;
        }
        self.indent = 0;
        self.line(DECLARATIONS_HEADER);
        for decl in declarations {
            self.write_function(decl);
            self.blank();
        }
    }

    fn write_function(&mut self, decl: &FunctionDecl) {
        self.line(&format!("function {}({})", decl.name, decl.params));
        match decl.body.as_deref() {
            // User bodies are emitted verbatim, with their own indentation.
            Some(body) if !body.trim().is_empty() => self.line(body.trim_end_matches('\n')),
            _ => {
                self.indent += 1;
                self.line(DEFAULT_FUNCTION_BODY);
                self.indent -= 1;
            }
        }
        self.line("end");
    }

    fn write_outside(&mut self, statements: &[&Statement]) {
        if statements.is_empty() {
            return;
        }
        self.indent = 0;
        self.line(OUTSIDE_HEADER);
        self.write_bucket(statements, 0);
        self.blank();
    }

    fn write_main_loop(&mut self, statements: &[&Statement]) {
        self.indent = 0;
        self.line(LOOP_HEADER);
        self.line(&format!("while {} do", LOOP_GUARD));
        self.indent = 1;
        if statements.is_empty() {
            self.line(EMPTY_LOOP_PLACEHOLDER);
        } else {
            for line in REFRESH_PROLOGUE {
                self.line(line);
            }
            self.blank();
            self.write_bucket(statements, 1);
        }
        self.indent = 0;
        self.line("end");
    }

    /// Emits one partition. `floor` is the lowest indent a stray `end` can reach.
    fn write_bucket(&mut self, statements: &[&Statement], floor: usize) {
        self.indent = floor;
        let last = statements.len().saturating_sub(1);
        for (index, statement) in statements.iter().enumerate() {
            match &statement.body {
                StatementBody::Call(call) => {
                    let rendered = render_call(call);
                    self.line(&rendered);
                }
                StatementBody::Control(control) => {
                    self.write_control(control, floor);
                    if index < last {
                        self.blank();
                    }
                }
            }
        }
    }

    fn write_control(&mut self, control: &Control, floor: usize) {
        match control {
            Control::If { condition } => {
                self.line(&format!("if {} then", condition));
                self.indent += 1;
            }
            Control::While { condition } => {
                self.line(&format!("while {} do", condition));
                self.indent += 1;
            }
            Control::For {
                loop_variable,
                start_value,
                end_value,
                step_value,
            } => {
                self.line(&format!(
                    "for {} = {}, {}{} do",
                    loop_variable,
                    start_value,
                    end_value,
                    step_clause(step_value)
                ));
                self.indent += 1;
            }
            Control::End => {
                self.indent = self.indent.saturating_sub(1).max(floor);
                self.line("end");
            }
            // Normally partitioned out before buckets are written.
            Control::Function(decl) => {
                debug!(name = %decl.name, "declaration inside a code bucket, emitting in place");
                self.write_function(decl);
            }
        }
    }
}

/// `API.<name>(<args>)` for a call statement.
pub fn render_call(call: &FunctionCall) -> String {
    let args = call
        .parameters
        .iter()
        .map(render_argument)
        .collect::<Vec<_>>()
        .join(", ");
    format!("API.{}({})", call.function.name, args)
}

/// Turns a parameter's free-form value into a Lua literal according to its declared type.
pub fn render_argument(param: &StatementParameter) -> String {
    let value = param.value.as_str();
    if param.typ.mentions(TypeTag::String) {
        return quote(value);
    }
    if param.typ.mentions(TypeTag::Boolean) {
        return if value.eq_ignore_ascii_case("true") {
            "true".to_string()
        } else {
            "false".to_string()
        };
    }
    let is_table = param.typ.mentions(TypeTag::Table);
    if is_table && value.trim().is_empty() {
        return "{}".to_string();
    }
    if value.is_empty() {
        return "nil".to_string();
    }
    if is_table || is_numeric_literal(value) {
        return value.to_string();
    }
    quote(value)
}

/// Matches `-?\d+(\.\d+)?`.
fn is_numeric_literal(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(int) && frac.map_or(true, all_digits)
}

fn quote(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r");
    format!("\"{}\"", escaped)
}
