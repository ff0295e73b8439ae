//! SimplePy interpreter CLI.

mod commands;

use commands::{fail, lex_file, run_file};
use spy_eval::ErrorPolicy;
use spyc::{init_tracing, parse_memory_size, Problem, RunOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 4 {
                eprintln!("Usage: spy run <file.py> <memorysize> [--strict]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --strict    Stop at the first error instead of recovering");
                std::process::exit(1);
            }

            let mut strict = false;
            let mut positional = Vec::new();
            for arg in args.iter().skip(2) {
                if arg == "--strict" {
                    strict = true;
                } else if let Some(flag) = arg.strip_prefix("--") {
                    eprintln!("error: unknown option '--{flag}'");
                    std::process::exit(1);
                } else {
                    positional.push(arg.as_str());
                }
            }

            let [path, memory] = positional[..] else {
                eprintln!("error: expected a file path and a memory size");
                eprintln!("Usage: spy run <file.py> <memorysize> [--strict]");
                std::process::exit(1);
            };

            let policy = if strict {
                ErrorPolicy::Strict
            } else {
                ErrorPolicy::Lenient
            };
            run_with(path, memory, policy);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: spy lex <file.py>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("SimplePy Interpreter {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // `spy <file.py> <memorysize>`
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("py"))
            {
                if args.len() != 3 {
                    eprintln!("Usage: spy <file.py> <memorysize>");
                    std::process::exit(1);
                }
                run_with(command, &args[2], ErrorPolicy::Lenient);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn run_with(path: &str, memory: &str, policy: ErrorPolicy) {
    let capacity = parse_memory_size(memory).unwrap_or_else(|problem: Problem| fail(&problem));
    run_file(path, RunOptions::new(capacity).with_policy(policy));
}

fn print_usage() {
    println!("SimplePy Interpreter");
    println!();
    println!("Usage: spy <command> [options]");
    println!("       spy <file.py> <memorysize>");
    println!();
    println!("Commands:");
    println!("  run <file.py> <memorysize>   Run a program with room for <memorysize> variables");
    println!("  lex <file.py>                Tokenize and display tokens");
    println!("  help                         Show this help message");
    println!("  version                      Show version information");
    println!();
    println!("Run options:");
    println!("  --strict    Stop at the first error instead of recovering");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=spy_eval=debug) to enable tracing on stderr.");
}
