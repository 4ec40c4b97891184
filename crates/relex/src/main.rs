//! Command-line driver: compile patterns, dump automata, classify tokens.

use clap::{Parser, Subcommand};
use relex::automaton::{Dfa, Nfa, build_nfa, subset_construction};
use relex::checks::SourceChecker;
use relex::classify::classify;
use relex::symtab::ScopeTracker;
use relex::{catalog, pattern, scanner};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "relex")]
#[command(about = "Regex-to-DFA compiler and token classifier")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a pattern and dump the NFA and DFA transition tables
    Compile {
        /// Regular expression pattern
        pattern: String,
        /// Input strings to test against the compiled DFA
        #[arg(short, long)]
        input: Vec<String>,
    },
    /// Tokenize source code, classify each token, and report issues
    Tokens {
        /// Source code to scan
        code: String,
    },
}

fn main() -> ExitCode {
    match Cli::parse().command {
        Commands::Compile { pattern, input } => run_compile(&pattern, &input),
        Commands::Tokens { code } => {
            run_tokens(&code);
            ExitCode::SUCCESS
        }
    }
}

fn run_compile(pattern: &str, inputs: &[String]) -> ExitCode {
    let postfix = match pattern::compile(pattern) {
        Ok(postfix) => postfix,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("Pattern: {pattern}");
    let rendered: String = postfix.iter().map(ToString::to_string).collect();
    println!("Postfix: {rendered}");

    let nfa = build_nfa(&postfix);
    print_nfa(&nfa);

    let dfa = subset_construction(&nfa);
    print_dfa(&dfa);

    for input in inputs {
        let verdict = if dfa.accepts(input) {
            "accepted"
        } else {
            "rejected"
        };
        println!("{input:?} -> {verdict}");
    }
    ExitCode::SUCCESS
}

fn print_nfa(nfa: &Nfa) {
    println!("\nNFA transition table:");
    println!("State\tSymbol\tNext");
    for (state, edges) in nfa.to_transition_map() {
        for (label, to) in edges {
            let symbol = label.map_or_else(|| "ε".to_owned(), |c| c.to_string());
            println!("q{state}\t{symbol}\tq{to}");
        }
    }
    println!("Total NFA states: {}", nfa.num_states());
    println!("Start: q{}  Accept: q{}", nfa.start(), nfa.accept());
}

fn print_dfa(dfa: &Dfa) {
    println!("\nDFA transition table:");
    print!("State");
    for symbol in dfa.alphabet() {
        print!("\t{symbol}");
    }
    println!();

    for state in 0..dfa.num_states() as u32 {
        print!("q{state}");
        for &symbol in dfa.alphabet() {
            match dfa.transition(state, symbol) {
                Some(next) => print!("\tq{next}"),
                None => print!("\t-"),
            }
        }
        println!();
    }

    println!("Total DFA states: {}", dfa.num_states());
    if let Some(start) = dfa.start() {
        println!("Start: q{start}");
    }
    let finals: Vec<String> = dfa.final_states().iter().map(|s| format!("q{s}")).collect();
    println!("Final states: {}", finals.join(" "));
}

fn run_tokens(code: &str) {
    let classes = catalog::token_classes();
    let tokens = scanner::tokenize(code);

    println!("Input: {code}");
    println!("Tokens: {tokens:?}");
    for token in &tokens {
        println!("{token:?} classified as {}", classify(token, &classes));
    }

    let mut checker = SourceChecker::new();
    checker.check(code);
    if checker.is_clean() {
        println!("No issues found.");
    } else {
        for diagnostic in checker.diagnostics() {
            println!("{diagnostic}");
        }
    }

    let mut tracker = ScopeTracker::new();
    tracker.process_tokens(&tokens);
    print!("{}", tracker.table());
}
