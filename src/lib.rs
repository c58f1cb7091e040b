pub mod catalog;
pub mod codegen;
pub mod export;
pub mod sequence;
pub mod session;
pub mod statement;
pub mod validate;

mod api_table;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;

#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

#[cfg(all(target_arch = "wasm32", feature = "wasm-bindings"))]
pub mod wasm;

use anyhow::{bail, Context, Result};
use codegen::CodegenOptions;
use sequence::StatementList;
use statement::Statement;
use std::path::{Path, PathBuf};

pub use catalog::{Category, Function, Parameter};
pub use codegen::generate;
pub use statement::{Control, StatementBody, StatementId};
pub use validate::{validate, StructuralError};

#[cfg(not(target_arch = "wasm32"))]
pub fn run_cli(args: &cli::Args) -> Result<()> {
    if args.list_functions {
        print_catalog(&catalog::Catalog::builtin(), args.search.as_deref());
        return Ok(());
    }
    let Some(input) = args.input.as_deref() else {
        bail!("An INPUT file is required.");
    };

    if args.check {
        if args.output.is_some() {
            bail!("OUTPUT cannot be used with --check.");
        }
        let progress = CliProgress::new("Check", 2);
        progress.emit(1, "Reading script");
        let input = canonicalize_file(input)?;
        let text = std::fs::read_to_string(&input)?;
        progress.emit(2, "Checking block and quote balance");
        let report = validate::validate(&text)?;
        if !report.is_valid {
            bail!(format_report(&input, &report));
        }
        tracing::info!(path = %pretty_path(&input), "script is structurally valid");
        return Ok(());
    }

    let total_stages = 3 + usize::from(args.clean) + usize::from(args.output.is_some());
    let progress = CliProgress::new("Generate", total_stages);
    let mut stage = 0usize;

    stage += 1;
    progress.emit(stage, "Loading statements");
    let input = canonicalize_file(input)?;
    let mut statements = load_statements(&input)?;

    if args.clean {
        stage += 1;
        progress.emit(stage, "Removing disabled statements");
        statements.sort(sequence::SortScope::All, sequence::SortMode::RemoveDisabled);
    }

    stage += 1;
    progress.emit(stage, "Generating script");
    let options = CodegenOptions {
        indent_width: args.indent,
    };
    let script = codegen::generate_with_options(statements.statements(), options);

    stage += 1;
    progress.emit(stage, "Checking block and quote balance");
    let report = validate::validate(&script)?;
    if !report.is_valid {
        if args.strict {
            bail!(format_report(&input, &report));
        }
        for error in &report.errors {
            tracing::warn!(line = error.line, code = error.code, "{}", error.message);
        }
    }

    match &args.output {
        Some(output) => {
            stage += 1;
            progress.emit(stage, "Writing script");
            export::write_script(output, &script)?;
        }
        None => print!("{}", script),
    }
    Ok(())
}

/// Loads a saved statement sequence: a JSON array of statements.
pub fn load_statements(path: &Path) -> Result<StatementList> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'.", path.display()))?;
    let statements = parse_statements(&source)
        .with_context(|| format!("Invalid statement file '{}'.", pretty_path(path)))?;
    Ok(StatementList::from_statements(statements))
}

pub fn parse_statements(source: &str) -> Result<Vec<Statement>> {
    let statements: Vec<Statement> = serde_json::from_str(source)?;
    Ok(statements)
}

pub fn save_statements(path: &Path, statements: &StatementList) -> Result<()> {
    let json = serde_json::to_string_pretty(statements.statements())?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write '{}'.", path.display()))?;
    Ok(())
}

/// JSON statements in, Lua script out.
pub fn compile_source_to_script(source: &str, options: CodegenOptions) -> Result<String> {
    let statements = parse_statements(source)?;
    Ok(codegen::generate_with_options(&statements, options))
}

pub fn canonicalize_file(path: &Path) -> Result<PathBuf> {
    if !path.exists() || !path.is_file() {
        return Err(anyhow::anyhow!("Input file not found: '{}'.", path.display()));
    }
    Ok(path.canonicalize()?)
}

#[cfg(not(target_arch = "wasm32"))]
fn format_report(path: &Path, report: &validate::ValidationReport) -> String {
    let mut out = format!(
        "Script '{}' has {} structural error(s):",
        pretty_path(path),
        report.errors.len()
    );
    for error in &report.errors {
        out.push_str(&format!("\n  line {}: {}", error.line, error.message));
    }
    out
}

#[cfg(not(target_arch = "wasm32"))]
fn print_catalog(catalog: &catalog::Catalog, search: Option<&str>) {
    let categories = match search {
        Some(term) => catalog.search(term),
        None => catalog.categories().to_vec(),
    };
    for category in &categories {
        println!("{}", category.name);
        for function in &category.functions {
            println!("  {}", crate::catalog::signature(function));
            if !function.description.is_empty() {
                println!("      {}", function.description);
            }
        }
    }
}

fn pretty_path(path: &Path) -> String {
    let raw = path.display().to_string();
    if let Some(stripped) = raw.strip_prefix(r"\\?\") {
        stripped.to_string()
    } else {
        raw
    }
}

#[cfg(not(target_arch = "wasm32"))]
struct CliProgress {
    prefix: &'static str,
    total: usize,
}

#[cfg(not(target_arch = "wasm32"))]
impl CliProgress {
    fn new(prefix: &'static str, total: usize) -> Self {
        Self {
            prefix,
            total: total.max(1),
        }
    }

    fn emit(&self, step: usize, label: &str) {
        let step = step.clamp(1, self.total);
        let bar = render_progress_bar(step, self.total, 14);
        eprintln!(
            "[{}] {}... ({}/{}) {}",
            self.prefix, label, step, self.total, bar
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn render_progress_bar(step: usize, total: usize, width: usize) -> String {
    let width = width.max(1);
    let filled = ((step * width) + (total / 2)) / total;
    let mut s = String::with_capacity(width + 2);
    s.push('[');
    for i in 0..width {
        s.push(if i < filled { '=' } else { '-' });
    }
    s.push(']');
    s
}

#[cfg(test)]
mod tests;
