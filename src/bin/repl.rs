// ABOUTME: Demonstration host: a CLI/REPL binary built on the embedding API

use clap::Parser;
use lisp_sandbox::config::{BUILTINS_SUMMARY, HELP_TEXT, VERSION, WELCOME_MESSAGE, WELCOME_SUBTITLE};
use lisp_sandbox::value::Value;
use lisp_sandbox::{load, root_environment};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "repl", version = VERSION, about = WELCOME_SUBTITLE)]
struct CliArgs {
    /// A source file to load and run non-interactively.
    script: Option<PathBuf>,
}

fn main() {
    let args = CliArgs::parse();
    let env = root_environment();

    // A couple of toy host procedures, illustrating that the language
    // itself carries no I/O: a host decides what the outside world looks
    // like.
    env.register_procedure("print", |values| {
        for value in values {
            print!("{}", value);
        }
        println!();
        Ok(Value::nil())
    });

    match args.script {
        Some(path) => run_script(&path, &env),
        None => run_repl(&env),
    }
}

fn run_script(path: &PathBuf, env: &std::rc::Rc<lisp_sandbox::env::Environment>) {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("could not read {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };

    let report = load(&source, env);
    print!("{}", report);
    if !report.is_ok() {
        std::process::exit(1);
    }
}

fn run_repl(env: &std::rc::Rc<lisp_sandbox::env::Environment>) {
    println!("{} v{}", WELCOME_MESSAGE, VERSION);
    println!("{}", WELCOME_SUBTITLE);

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("could not start line editor: {}", e);
            std::process::exit(1);
        }
    };

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(trimmed);
                if trimmed == "(quit)" || trimmed == "(exit)" {
                    break;
                }
                if trimmed == "(help)" {
                    print!("{}{}", HELP_TEXT, BUILTINS_SUMMARY);
                    continue;
                }

                let report = load(trimmed, env);
                print!("{}", report);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("readline error: {}", e);
                break;
            }
        }
    }
}
