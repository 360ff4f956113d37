// ABOUTME: Version and banner constants for the demonstration REPL binary

pub const VERSION: &str = "0.1.0";
pub const WELCOME_MESSAGE: &str = "lisp-sandbox";
pub const WELCOME_SUBTITLE: &str = "An embeddable Scheme-flavored Lisp-1 interpreter";

pub const HELP_TEXT: &str = r#"
Available commands:
  (help)                - Show this message
  (quit) or (exit)      - Exit the REPL

Type any Lisp expression to evaluate it. Use Ctrl-D or (quit) to exit.
"#;

pub const BUILTINS_SUMMARY: &str = r#"
Built-in special forms: define if lambda quote eval apply
Built-in procedures:    cons car cdr list
Built-in predicates:    eq? list? string? number? symbol? callable?
Literals:               nil #f #t
"#;
