//! printxc: check printx format templates from the command line.

use std::io::IsTerminal;

use printxc::commands::{
    explain_diagnosis, list_types, parse_check_options, run_check, EXIT_OK, EXIT_USAGE,
};

fn main() {
    printx::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(EXIT_USAGE);
    }

    let command = &args[1];

    let code = match command.as_str() {
        "check" => match parse_check_options(&args[2..]) {
            Ok(options) => run_check(
                &options,
                &mut std::io::stdout().lock(),
                &mut std::io::stderr().lock(),
                std::io::stderr().is_terminal(),
            ),
            Err(message) => {
                eprintln!("error: {message}");
                eprintln!();
                print_check_usage();
                EXIT_USAGE
            }
        },
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: printxc --explain <CODE>");
                eprintln!("Example: printxc --explain P0008");
                std::process::exit(EXIT_USAGE);
            }
            explain_diagnosis(
                &args[2],
                &mut std::io::stdout().lock(),
                &mut std::io::stderr().lock(),
            )
        }
        "types" => list_types(&mut std::io::stdout().lock()),
        "help" | "--help" | "-h" => {
            print_usage();
            EXIT_OK
        }
        "version" | "--version" | "-V" => {
            println!("printxc {}", env!("CARGO_PKG_VERSION"));
            EXIT_OK
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            EXIT_USAGE
        }
    };

    std::process::exit(code);
}

fn print_usage() {
    println!("printxc: compile-time printf template checker");
    println!();
    println!("Usage: printxc <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <template> [types...]  Rewrite a template for C argument types");
    println!("  types                        List builtin type classifications");
    println!("  --explain <code>             Explain a diagnosis (e.g., P0008)");
    println!("  help                         Show this help message");
    println!("  version                      Show version information");
    println!();
    print_check_usage();
    println!();
    println!("Exit codes:");
    println!("  0  template accepted");
    println!("  1  template rejected");
    println!("  2  usage error or unknown type");
    println!();
    println!("Examples:");
    println!("  printxc check 'x=%? n=%5x' double 'unsigned long'");
    println!("  printxc check --define 'Handle=p:pointer' '%?' Handle");
    println!("  printxc --explain expects-char");
}

fn print_check_usage() {
    println!("Check options:");
    println!("  --color=<mode>              Color: auto (default), always, never");
    println!("  --format=<fmt>              Diagnostics: text (default, stderr), json (stdout)");
    println!("  --define NAME=SPEC[:flags]  Register a type; flags: promotes, pointer,");
    println!("                              no-precision, position");
}
