use clap::Parser;

/// Command line interface for the todo application.
///
/// The application itself is fully interactive; the only arguments handled
/// here are the standard help and version flags.
#[derive(Parser)]
#[command(name = "todo")]
#[command(version, about = "Menu-driven in-memory todo list", long_about = None)]
pub struct Cli {}
