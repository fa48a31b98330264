use clap::Parser;
use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    time::Instant,
};
use tinyc::{
    ast::{NodeCounter, TreePrinter},
    config::output::{DEFAULT_ERROR_FILE, DEFAULT_TREE_FILE, SOURCE_EXTENSION},
    errors::{TinyError, TinyResult},
    frontend::{lexer::Lexer, token::TokenKind, ParseOutput},
    open_source, parse_file,
};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "TINY language front end: parses a program and prints its syntax tree",
    long_about = "TINY language front end.\n\
                 Reads a TINY source program, builds its abstract syntax tree and prints it,\n\
                 reporting every lexical and syntax error found along the way.\n\
                 \n\
                 Example usage:\n\
                 tinyc fact.tiny                  # Print the tree to stdout\n\
                 tinyc fact.tiny -o               # Write the tree to output.txt\n\
                 tinyc fact.tiny -o tree.txt      # Write the tree to tree.txt\n\
                 tinyc fact.tiny -e               # Write diagnostics to error.txt\n\
                 tinyc fact.tiny --tokens         # Print the token stream only\n\
                 tinyc                            # Prompt for the source path"
)]
struct Cli {
    // The path to the file to parse; prompted for on stdin when omitted
    path: Option<PathBuf>,

    // Write the tree dump to a file instead of stdout
    #[arg(short, long, num_args = 0..=1, default_missing_value = DEFAULT_TREE_FILE)]
    output: Option<PathBuf>,

    // Write diagnostics to a file instead of stderr
    #[arg(short, long, num_args = 0..=1, default_missing_value = DEFAULT_ERROR_FILE)]
    errors: Option<PathBuf>,

    // Print the token stream and stop
    #[arg(long)]
    tokens: bool,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    // Show timing and size statistics
    #[arg(short, long)]
    timing: bool,
}

#[derive(Debug, Default)]
struct ParseStats {
    parse_time: f64,
    print_time: f64,
    total_time: f64,
    token_count: usize,
    ast_size: usize,
    diagnostic_count: usize,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn prompt_for_path() -> TinyResult<PathBuf> {
    print!("Source file: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let path = line.trim();
    if path.is_empty() {
        return Err(TinyError::compilation_error("input", "No source file given"));
    }
    Ok(PathBuf::from(path))
}

fn write_or_print(target: &Option<PathBuf>, text: &str, to_stderr: bool) -> TinyResult<()> {
    match target {
        Some(path) => fs::write(path, text).map_err(|e| {
            TinyError::FileWriteError(format!("'{}': {}", path.display(), e))
        }),
        None if to_stderr => {
            eprint!("{}", text);
            Ok(())
        }
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}

// Streams the token list; lexical errors go to stderr and scanning carries on
fn print_tokens(input_path: &Path) -> TinyResult<usize> {
    let mut lexer = Lexer::new(open_source(input_path)?);
    let mut error_count = 0;
    loop {
        let result = lexer.next_token();
        for err in lexer.take_errors() {
            eprintln!("{}", err);
            error_count += 1;
        }
        match result {
            Ok(token) if token.is(TokenKind::EndOfFile) => return Ok(error_count),
            Ok(token) => println!("{:>4}  {:<10} {}", token.line, token.kind, token.text),
            Err(err) => {
                eprintln!("{}", err);
                error_count += 1;
            }
        }
    }
}

// Parsing phase: tokens are pulled by the parser, so lexing is timed with it
fn parsing_phase(input_path: &Path, stats: &mut ParseStats, verbose: bool) -> TinyResult<ParseOutput> {
    let parse_start = Instant::now();
    let output = parse_file(input_path)?;
    stats.parse_time = parse_start.elapsed().as_secs_f64();
    stats.token_count = output.token_count;
    stats.ast_size = NodeCounter::count(&output.program);
    stats.diagnostic_count = output.diagnostics.len();

    if verbose {
        println!("Parsing completed in {:.3}s", stats.parse_time);
        println!("  Read {} tokens, built {} nodes", stats.token_count, stats.ast_size);
        if output.has_errors() {
            println!("  Found {} error(s)", stats.diagnostic_count);
        }
    }

    Ok(output)
}

fn run(input_path: &Path, args: &Cli) -> TinyResult<ParseStats> {
    let start_time = Instant::now();
    let mut stats = ParseStats::default();

    if args.verbose {
        println!("Parsing: {}", input_path.display());
    }

    let output = parsing_phase(input_path, &mut stats, args.verbose)?;

    let print_start = Instant::now();
    let tree = TreePrinter::render(&output.program);
    write_or_print(&args.output, &tree, false)?;
    stats.print_time = print_start.elapsed().as_secs_f64();

    if args.verbose {
        if let Some(path) = &args.output {
            println!("Tree written to: {}", path.display());
        }
    }

    // Always create the error file when one is requested, even if it stays empty.
    if output.has_errors() || args.errors.is_some() {
        let mut report = String::new();
        for message in output.messages() {
            report.push_str(&message);
            report.push('\n');
        }
        write_or_print(&args.errors, &report, true)?;
    }

    stats.total_time = start_time.elapsed().as_secs_f64();
    Ok(stats)
}

// Print timing and size statistics
fn print_stats(stats: &ParseStats) {
    println!("\nStatistics:");
    println!("  Parsing:      {:>8.3}s", stats.parse_time);
    println!("  Tree output:  {:>8.3}s", stats.print_time);
    println!("  Total:        {:>8.3}s", stats.total_time);
    println!("  Tokens:       {}", stats.token_count);
    println!("  AST nodes:    {}", stats.ast_size);
    println!("  Diagnostics:  {}", stats.diagnostic_count);
}

fn main() {
    let args = Cli::parse();

    let input_path = match &args.path {
        Some(path) => path.clone(),
        None => prompt_for_path().unwrap_or_else(|e| fatal(&e.to_string())),
    };

    // Validate input file extension
    if input_path.extension().map_or(true, |ext| ext != SOURCE_EXTENSION) {
        eprintln!("Warning: Input file does not have .{} extension", SOURCE_EXTENSION);
    }

    if args.tokens {
        match print_tokens(&input_path) {
            Ok(0) => return,
            Ok(_) => std::process::exit(1),
            Err(e) => fatal(&format!("Tokenizing failed: {}", e)),
        }
    }

    match run(&input_path, &args) {
        Ok(stats) => {
            if args.timing {
                print_stats(&stats);
            }
            if stats.diagnostic_count > 0 {
                std::process::exit(1);
            }
            if args.verbose {
                println!("Parsing successful!");
            }
        }
        Err(e) => fatal(&format!("Parsing failed: {}", e)),
    }
}
