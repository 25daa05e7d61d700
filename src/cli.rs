// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The surface is deliberately tiny: two positional arguments and nothing
// else. Article names are taken exactly as they appear in Wikipedia URLs,
// so the page at
//   https://en.wikipedia.org/wiki/University_of_Victoria
// is named "University_of_Victoria".
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "wiki-pathfinder",
    version = "0.1.0",
    about = "Find the shortest chain of links between two Wikipedia articles",
    long_about = "wiki-pathfinder retrieves Wikipedia articles from the internet and performs a \
                  breadth-first traversal of their links to find the shortest path from one \
                  article to another. It retrieves at most 2000 pages per run to keep the \
                  bandwidth friendly.\n\n\
                  Example: wiki-pathfinder Raspberry Franz_Kafka"
)]
pub struct Cli {
    /// Article where the search starts, named as in its Wikipedia URL
    /// (e.g. "University_of_Victoria")
    ///
    /// This is a positional argument (required, no flag needed)
    pub start: String,

    /// Article the search is trying to reach, named the same way
    ///
    /// This is a positional argument (required)
    pub target: String,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why no subcommands?
//    - The tool does exactly one thing: search for a path
//    - Two positional arguments cover the whole surface
//    - clap still gives us --help and --version for free
//
// 2. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 3. Why String instead of &str?
//    - String is owned (the struct owns the data)
//    - &str is borrowed (references data owned elsewhere)
//    - We use String here because we need to own the CLI arguments
//
// 4. Where does the help text come from?
//    - The /// doc comments on each field become the help output
//    - Run with --help to see them rendered
// -----------------------------------------------------------------------------
