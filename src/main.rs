use clap::Parser;
use std::io;
use std::process;
use todo::cli::Cli;
use todo::console::Console;
use todo::store::TaskStore;

fn main() {
    // Logs go to stderr; stdout belongs to the menu.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    Cli::parse();

    let mut store = TaskStore::new();
    let mut console = Console::new(&mut store, io::stdin().lock(), io::stdout().lock());

    if let Err(e) = console.run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
