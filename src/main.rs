use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use ignore::WalkBuilder;
use miette::{miette, IntoDiagnostic, Result};
use rayon::prelude::*;

use wrast::config::load_config;
use wrast::format::{ast_equivalent, reformat};

#[derive(Parser)]
#[command(name = "wrast", version, about = "A Python code reformatter that rebuilds source text from the AST")]
struct Cli {
    /// Files or directories to format
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Check if files are formatted without modifying them
    #[arg(short, long)]
    check: bool,

    /// Show diff without modifying files
    #[arg(short, long)]
    diff: bool,

    /// Read from stdin, write to stdout
    #[arg(long)]
    stdin: bool,

    /// Write formatted output to stdout instead of modifying files
    #[arg(long)]
    stdout: bool,

    /// Path to configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip safety checks (AST equivalence and idempotence) - not recommended
    #[arg(long)]
    unsafe_skip_checks: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(needs_formatting) => {
            if needs_formatting {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();

    if cli.stdin {
        return format_stdin(&cli);
    }

    let config = load_config(cli.config.as_deref()).map_err(|e| miette!(e))?;

    let mut files: Vec<PathBuf> = Vec::new();
    for path in &cli.paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            collect_python_files(path, &mut files)?;
        }
    }

    let results: Vec<Result<bool>> = files
        .par_iter()
        .map(|path| process_file(path, &cli, &config.exclude))
        .collect();

    let mut any_changes = false;
    for result in results {
        if result? {
            any_changes = true;
        }
    }

    Ok(any_changes)
}

fn format_stdin(cli: &Cli) -> Result<bool> {
    let mut source = String::new();
    io::stdin().read_to_string(&mut source).into_diagnostic()?;

    let formatted = reformat(&source).map_err(|e| miette!("{}", e))?;

    // For stdin the safety checks fail hard; there is no file to skip.
    if !cli.unsafe_skip_checks {
        verify_ast_equivalence("<stdin>", &source, &formatted)?;
        verify_idempotent("<stdin>", &formatted)?;
    }

    if cli.check {
        return Ok(source != formatted);
    }

    if cli.diff {
        print_diff("<stdin>", &source, &formatted);
        return Ok(source != formatted);
    }

    io::stdout()
        .write_all(formatted.as_bytes())
        .into_diagnostic()?;

    Ok(false)
}

fn process_file(path: &Path, cli: &Cli, excludes: &[String]) -> Result<bool> {
    let path_str = path.to_string_lossy();
    for pattern in excludes {
        if path_str.contains(pattern.trim_matches('*')) {
            return Ok(false);
        }
    }

    let source = std::fs::read_to_string(path).into_diagnostic()?;

    let formatted = reformat(&source)
        .map_err(|e| miette!("failed to format {}: {}", path.display(), e))?;

    // Run safety checks by default; skip the file when they fail rather
    // than writing output that changed meaning.
    if !cli.unsafe_skip_checks {
        let filename = path.display().to_string();
        if let Err(e) = verify_ast_equivalence(&filename, &source, &formatted) {
            eprintln!("Warning: skipping {} - {}", filename, e);
            return Ok(false);
        }
        if let Err(e) = verify_idempotent(&filename, &formatted) {
            eprintln!("Warning: skipping {} - {}", filename, e);
            return Ok(false);
        }
    }

    let changed = source != formatted;

    if cli.check {
        if changed {
            println!("Would reformat: {}", path.display());
        }
        return Ok(changed);
    }

    if cli.diff {
        if changed {
            print_diff(&path.display().to_string(), &source, &formatted);
        }
        return Ok(changed);
    }

    if cli.stdout {
        io::stdout()
            .write_all(formatted.as_bytes())
            .into_diagnostic()?;
        return Ok(changed);
    }

    if changed {
        std::fs::write(path, &formatted).into_diagnostic()?;
        println!("Formatted: {}", path.display());
    }

    Ok(changed)
}

fn collect_python_files(path: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let walker = WalkBuilder::new(path).standard_filters(true).build();

    for entry in walker {
        let entry = entry.into_diagnostic()?;
        let file_path = entry.path();

        if file_path.extension().map(|e| e == "py").unwrap_or(false) {
            files.push(file_path.to_path_buf());
        }
    }

    Ok(())
}

fn print_diff(filename: &str, original: &str, formatted: &str) {
    use similar::{ChangeTag, TextDiff};

    println!("--- {}", filename);
    println!("+++ {}", filename);

    let diff = TextDiff::from_lines(original, formatted);

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!("...");
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => "-",
                    ChangeTag::Insert => "+",
                    ChangeTag::Equal => " ",
                };
                print!("{}{}", sign, change);
            }
        }
    }
}

fn verify_ast_equivalence(filename: &str, original: &str, formatted: &str) -> Result<()> {
    match ast_equivalent(original, formatted) {
        Ok(true) => Ok(()),
        Ok(false) => Err(miette!("AST changed after formatting {}", filename)),
        Err(e) => Err(miette!(
            "formatted output of {} no longer parses: {}",
            filename,
            e
        )),
    }
}

fn verify_idempotent(filename: &str, formatted: &str) -> Result<()> {
    let formatted_twice = reformat(formatted).map_err(|e| miette!("{}", e))?;

    if formatted == formatted_twice {
        Ok(())
    } else {
        Err(miette!(
            "Formatting is not idempotent for {}!\nFormatting the output again produces different results.",
            filename
        ))
    }
}
