use std::{fs, path::PathBuf, process::ExitCode};

use a0::{
    ast_printer::render_program,
    interpreter::{
        environment::Environment,
        evaluator::core::evaluate_program,
        lexer::tokenize,
        parser::core::parse,
    },
};
use clap::Parser;

/// a0 is a small, dynamically-typed scripting language with a
/// tree-walking interpreter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the token list instead of running the script.
    #[arg(long)]
    tokens: bool,

    /// Print the syntax tree instead of running the script.
    #[arg(long)]
    ast: bool,

    /// Path to the script to run.
    file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let Ok(source) = fs::read_to_string(&args.file) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  args.file.display());
        return ExitCode::FAILURE;
    };

    let token_list = tokenize(&source);
    if args.tokens {
        for token in &token_list {
            println!("{token}");
        }
        return ExitCode::SUCCESS;
    }

    let program = match parse(&token_list) {
        Ok(program) => program,
        Err(e) => {
            println!("{e}");
            return ExitCode::FAILURE;
        },
    };
    if args.ast {
        print!("{}", render_program(&program));
        return ExitCode::SUCCESS;
    }

    let env = Environment::global();
    if let Err(e) = evaluate_program(&program, &env) {
        println!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
