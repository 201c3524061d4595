use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::Input;
use ember_interpreter::{eval, Env};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

#[derive(Parser)]
#[command(name = "ember", about = "A tree-walking interpreter for the ember language")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive read-eval-print loop.
    Repl,
    /// Parse and evaluate a single source file.
    Run { path: PathBuf },
    /// Start the language server (delegates to the `ember-lsp` binary).
    Lsp,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Repl => repl(),
        Commands::Run { path } => run(&path),
        Commands::Lsp => lsp(),
    }
}

fn run(path: &PathBuf) -> Result<()> {
    let source = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let (program, errors) = ember_parser::parse(&source);
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("{error}");
        }
        anyhow::bail!("{} parse error(s) in {}", errors.len(), path.display());
    }

    let env = Env::new();
    let result = eval(&program, &env);
    println!("{result}");
    Ok(())
}

fn repl() -> Result<()> {
    let env = Env::new();
    loop {
        // Printed manually (rather than via `with_prompt`) so the visible
        // prompt is exactly "> ", with no theme-added decoration.
        print!("> ");
        io::stdout().flush().ok();
        let line: String = match Input::new().with_prompt("").allow_empty(true).interact_text() {
            Ok(line) => line,
            Err(_) => break,
        };

        let (program, errors) = ember_parser::parse(&line);
        if !errors.is_empty() {
            for error in &errors {
                println!("{error}");
            }
            continue;
        }
        println!("{}", eval(&program, &env));
    }
    Ok(())
}

fn lsp() -> Result<()> {
    let status = Command::new("ember-lsp")
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .context("launching ember-lsp (is it on PATH?)")?;
    if !status.success() {
        anyhow::bail!("ember-lsp exited with {status}");
    }
    Ok(())
}
