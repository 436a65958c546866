use clap::{Parser, ValueEnum};
use color_eyre::eyre::Result;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[clap(name = "jail", version)]
pub struct CLArgs {
    /// Source file to run.
    pub path: PathBuf,
    #[clap(long = "emit", value_enum, default_value = "run")]
    pub emit: Emit,
    /// Report where parsing stopped and recovered runtime anomalies on stderr.
    #[clap(long = "warn")]
    pub warn: bool,
    #[clap(long = "format", value_enum, default_value = "basic")]
    pub format: DiagnosticFormat,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Emit {
    Run,
    Tokens,
    Ast,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum DiagnosticFormat {
    Debug,
    Basic,
    Pretty,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    // Usage errors exit with 2 through clap.
    let args = CLArgs::parse();

    let Ok(src) = jail::read_source(&args.path) else {
        eprintln!("could not read {}", args.path.display());
        return Ok(ExitCode::from(2));
    };
    let path = args.path.to_string_lossy();

    match args.emit {
        Emit::Tokens => tokenize(&src, &args.format),
        Emit::Ast => parse(&src, &args.format),
        Emit::Run => run(&src, &path, args.warn, &args.format),
    }
    // Language level anomalies never change the exit code.
    Ok(ExitCode::SUCCESS)
}

fn tokenize(src: &str, format: &DiagnosticFormat) {
    use jail::lexer::formatter::{BasicFormatter, DebugFormatter, TokenFormatter};
    use jail::lexer::Lexer;

    let formatter: Box<dyn TokenFormatter> = match format {
        DiagnosticFormat::Debug => Box::new(DebugFormatter),
        DiagnosticFormat::Basic | DiagnosticFormat::Pretty => Box::new(BasicFormatter),
    };
    for token in Lexer::new(src) {
        println!("{}", formatter.format(&token));
    }
}

fn parse(src: &str, format: &DiagnosticFormat) {
    use jail::parser::formatter::{DebugParserFormatter, ParserFormatter, SExpressionFormatter};

    let program = jail::compile(src);
    let formatter: Box<dyn ParserFormatter> = match format {
        DiagnosticFormat::Debug => Box::new(DebugParserFormatter),
        DiagnosticFormat::Basic | DiagnosticFormat::Pretty => Box::new(SExpressionFormatter),
    };
    println!("{}", formatter.format(&program));
}

fn run(src: &str, path: &str, warn: bool, format: &DiagnosticFormat) {
    use jail::interpreter::{
        context::StdioContext,
        formatter::{BasicFormatter, DebugFormatter, PrettyFormatter, WarningFormatter},
        TreeWalkInterpreter,
    };
    use jail::parser::formatter::{
        DebugParserFormatter, ParserFormatter, PrettyParserFormatter, SExpressionFormatter,
    };

    let program = jail::compile(src);

    let context = if warn {
        let parser_formatter: Box<dyn ParserFormatter + '_> = match format {
            DiagnosticFormat::Debug => Box::new(DebugParserFormatter),
            DiagnosticFormat::Basic => Box::new(SExpressionFormatter),
            DiagnosticFormat::Pretty => Box::new(PrettyParserFormatter::new(src, path)),
        };
        for error in program.diagnostics() {
            eprintln!("{}", parser_formatter.format_error(error));
        }

        let warning_formatter: Box<dyn WarningFormatter + '_> = match format {
            DiagnosticFormat::Debug => Box::new(DebugFormatter),
            DiagnosticFormat::Basic => Box::new(BasicFormatter),
            DiagnosticFormat::Pretty => Box::new(PrettyFormatter::new(src, path)),
        };
        StdioContext::with_warnings(warning_formatter)
    } else {
        StdioContext::new()
    };

    let _ = TreeWalkInterpreter::new(context).run(&program);
}
