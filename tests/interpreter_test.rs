use std::{
    fs::{read_dir, read_to_string},
    path::Path,
};

use color_eyre::{eyre::Context, Result};
use jail::{
    interpreter::{
        context::BufferedContext,
        formatter::{BasicFormatter, PrettyFormatter, WarningFormatter},
        TreeWalkInterpreter,
    },
    parser::statement::Statement,
    run_source,
};
use proptest::prelude::*;

#[test]
fn test_print() -> Result<()> {
    let input_dir = Path::new("./test_data/interpreter/print");
    test_engine(input_dir)
}

#[test]
fn test_variable() -> Result<()> {
    let input_dir = Path::new("./test_data/interpreter/variable");
    test_engine(input_dir)
}

#[test]
fn test_function() -> Result<()> {
    let input_dir = Path::new("./test_data/interpreter/function");
    test_engine(input_dir)
}

#[test]
fn test_recovery() -> Result<()> {
    let input_dir = Path::new("./test_data/interpreter/recovery");
    test_engine(input_dir)
}

#[test]
fn round_trip_concatenation() {
    let context = run_source(r#"print("a" + "b")"#, BufferedContext::new());
    assert_eq!(context.into_data(), "ab\n");
}

#[test]
fn scenario_greeting() {
    let source = "var greeting = \"hi\"\nprint(greeting)\n";
    let context = run_source(source, BufferedContext::new());
    assert!(context.get_warnings().is_empty());
    assert_eq!(context.into_data(), "hi\n");
}

#[test]
fn undefined_function_is_silent() {
    let context = run_source(r#"missing_fn("x")"#, BufferedContext::new());
    assert_eq!(context.get_warnings().len(), 1);
    assert_eq!(context.into_data(), "");
}

#[test]
fn fresh_interpreters_do_not_share_state() {
    let program = jail::compile("func set() { var y = \"set\" }\nprint(y)\nset()\nprint(y)\n");

    let first = TreeWalkInterpreter::new(BufferedContext::new()).run(&program);
    let second = TreeWalkInterpreter::new(BufferedContext::new()).run(&program);

    assert_eq!(first.into_data(), "\nset\n");
    assert_eq!(second.into_data(), "\nset\n");
}

#[test]
fn evaluate_without_run_registers_nothing() {
    let program = jail::compile("func f() { print(\"body\") }\nf()\n");
    let mut interpreter = TreeWalkInterpreter::new(BufferedContext::new());
    let Some(Statement::Call(call)) = program.get_statement(1) else {
        panic!("Expected a call statement.");
    };
    assert_eq!(interpreter.evaluate(&call.expr), "");
    assert!(interpreter.get_environment().access("f").is_none());
}

#[test]
fn parameters_are_restored_and_body_variables_leak() {
    let source = r#"
        var x = "outer"
        func f(x) {
            var x = "reassigned"
            var leaked = x
        }
        f("inner")
        print(x)
        print(leaked)
    "#;
    let context = run_source(source, BufferedContext::new());
    assert_eq!(context.into_data(), "outer\nreassigned\n");
}

#[test]
fn pretty_warning_after_non_ascii_text() {
    let source = "// \u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\nmissing(\"x\")\n";
    let context = run_source(source, BufferedContext::new());
    let formatter = PrettyFormatter::new(source, "w.jail").without_color();
    let report = formatter.format_warning(&context.get_warnings()[0]);
    assert!(report.contains("R001"), "{report}");
    assert!(report.contains("w.jail:2:1"), "{report}");
    assert!(report.contains("Evaluated here"), "{report}");
}

struct TestCase {
    name: String,
    source: String,
    output: String,
    warnings: String,
}

impl TestCase {
    pub fn check(&self) {
        let context = run_source(&self.source, BufferedContext::new());

        let formatter = BasicFormatter;
        let warnings = context
            .get_warnings()
            .iter()
            .map(|warning| formatter.format_warning(warning))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(
            self.warnings, warnings,
            "Failed test {} at warnings.",
            self.name
        );

        let output = context.into_data();
        assert_eq!(self.output, output, "Failed test {} at print.", self.name);
    }
}

fn test_engine(input_dir: &Path) -> Result<()> {
    let mut succeeded = true;
    for entry in read_dir(input_dir).context("Failed to open input test data folder")? {
        let entry = entry?;
        let path = entry.path();

        let Some(extension) = path.extension() else {
            continue;
        };

        if extension != "jail" {
            continue;
        }

        println!("Parsing {path:?}");
        let test_case = parse_test_case(&path)?;
        println!("Checking {}", test_case.name);

        let res = std::panic::catch_unwind(|| {
            test_case.check();
        });
        if res.is_err() {
            println!("\tFails test case {}", test_case.name);
            succeeded = false;
        }
    }

    assert!(succeeded, "Some test cases in {input_dir:?} failed.");

    Ok(())
}

fn parse_test_case(input_path: &Path) -> Result<TestCase> {
    let test_name = AsRef::<Path>::as_ref(
        input_path
            .file_name()
            .expect("File name can't be none as the path is to a real file."),
    )
    .to_string_lossy();

    let input = read_to_string(input_path).context("Failed to open input test data file")?;

    let mut source_lines = Vec::new();
    let mut expected_outputs = Vec::new();
    let mut expected_warnings = Vec::new();

    for line in input.lines() {
        if let Some(comment_index) = line.find("// expect:") {
            let expected = line[comment_index..]
                .strip_prefix("// expect:")
                .unwrap()
                .trim()
                .to_string();
            expected_outputs.push(expected);
        } else if let Some(comment_index) = line.find("// warn:") {
            let expected = line[comment_index..]
                .strip_prefix("// warn:")
                .unwrap()
                .trim()
                .to_string();
            expected_warnings.push(expected);
        }
        source_lines.push(line.to_string());
    }

    expected_outputs.push(String::new());
    Ok(TestCase {
        name: test_name.into_owned(),
        source: source_lines.join("\n"),
        output: expected_outputs.join("\n"),
        warnings: expected_warnings.join("\n"),
    })
}

proptest! {
    #[test]
    fn run_is_total_without_functions(source in "[a-z\"(){},=+ \n#]{0,64}") {
        // No user functions means no unbounded recursion.
        prop_assume!(!source.contains("func"));
        let context = run_source(&source, BufferedContext::new());
        let output = context.into_data();
        prop_assert!(output.is_empty() || output.ends_with('\n'));
    }
}
