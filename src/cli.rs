use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "megui",
    about = "Generate Lua bot scripts from saved statement sequences, and check script structure."
)]
pub struct Args {
    #[arg(
        value_name = "INPUT",
        required_unless_present = "list_functions",
        help = "Statement sequence JSON (or a Lua script with --check)."
    )]
    pub input: Option<PathBuf>,

    #[arg(
        value_name = "OUTPUT",
        help = "Script file or directory (writes script.lua there). Prints to stdout when omitted."
    )]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Validate INPUT as Lua script text instead of generating.")]
    pub check: bool,

    #[arg(long, help = "Refuse to write a generated script that has structural errors.")]
    pub strict: bool,

    #[arg(long, help = "Drop disabled statements before generating.")]
    pub clean: bool,

    #[arg(long, help = "Spaces per indent level in generated code.", default_value_t = 2)]
    pub indent: usize,

    #[arg(long, help = "List the built-in API catalog and exit.")]
    pub list_functions: bool,

    #[arg(
        long,
        requires = "list_functions",
        help = "Only list catalog functions whose name or description contains this text."
    )]
    pub search: Option<String>,

    #[arg(long, default_value = "warn", help = "Log level used when RUST_LOG is not set.")]
    pub log_level: String,
}
