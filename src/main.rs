// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Run the breadth-first search over the live Wikipedia link graph
// 3. Print the shortest chain of links, or a not-found message
// 4. Exit with code 0 either way ("not found" is an answer, not a failure)
//
// Rust concepts used:
// - async/await: Because we fetch many pages over the network
// - Result<T, E>: For error handling on the startup path
// - match: Pattern matching on the reconstructed path
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod extract; // src/extract/ - pulling article links out of page HTML
mod search; // src/search/ - breadth-first traversal and path reconstruction
mod wiki; // src/wiki/ - retrieving article pages from Wikipedia

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use search::{explore, reconstruct};
use wiki::WikiClient;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// Maximum number of pages one search may retrieve
//
// This keeps the bandwidth friendly: Wikipedia allows light crawling, but
// repeated high-volume requests from one source risk being blocked.
// Do not raise this.
const MAX_VISITS: usize = 2000;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // An unexpected startup error (e.g. the HTTP client failing to build)
    // is reported but doesn't change the exit code: the process always
    // exits 0, because "no path found" is a normal outcome, not a failure
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
    }
}

// This is the main application logic
async fn run() -> Result<()> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    println!("🔍 Searching for a link path: {} -> {}", cli.start, cli.target);
    println!("📊 Visit budget: {} pages\n", MAX_VISITS);

    // The live Wikipedia client; tests drive the same engine with a
    // fixed in-memory graph instead
    let client = WikiClient::new()?;

    // Traverse the link graph breadth-first until the target turns up,
    // the frontier runs dry, or the budget runs out
    let outcome = explore(&client, &cli.start, &cli.target, MAX_VISITS).await;

    println!("\n📄 Retrieved {} page(s)", outcome.pages_fetched);

    // The target's presence in the parent map decides the outcome
    match reconstruct(&outcome.parents, &cli.target) {
        Some(path) => print_path(&path),
        None => println!("❌ Couldn't find page {}", cli.target),
    }

    Ok(())
}

// Prints the final chain, one article per line
//
// The step count is the number of articles in the chain (hops + 1), so
// a direct link prints as "2 steps".
fn print_path(path: &[String]) {
    println!("✅ {} steps:", path.len());
    for article in path {
        println!("\t{}", article);
    }
}
