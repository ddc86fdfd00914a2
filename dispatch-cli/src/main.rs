//! Piece Dispatch CLI
//!
//! Interactive menu over the dispatcher: a queue of upcoming pieces, a
//! reserve stack, five transformations and undo.

mod generate;
mod menu;
mod render;
mod session;

use std::io;

use clap::Parser;
use dispatch_core::Dispatcher;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::session::Session;

/// Interactive piece dispatch: upcoming-pieces queue, reserve stack and undo
#[derive(Parser, Debug)]
#[command(name = "dispatch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Random pieces placed in the queue at start
    #[arg(long, default_value_t = 5)]
    initial: usize,

    /// Seed for reproducible piece generation
    #[arg(long)]
    rng_seed: Option<u64>,

    /// Log filter (overrides RUST_LOG), e.g. "debug" or "dispatch_core=debug"
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    // Ctrl-C behaves like menu choice 0
    ctrlc::set_handler(|| {
        println!("\n\n{}", render::FAREWELL);
        std::process::exit(0);
    })
    .expect("Error setting Ctrl-C handler");

    let mut rng = match args.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut dispatcher = Dispatcher::new();
    let seeded = dispatcher.seed(generate::random_pieces(&mut rng, args.initial));
    info!(requested = args.initial, seeded, "queue populated");

    // Stdout stays unlocked between writes so the Ctrl-C handler can print.
    let mut session = Session::new(dispatcher, io::stdin().lock(), io::stdout());
    session.run()?;
    info!(
        queue_len = session.dispatcher().queue().len(),
        stack_len = session.dispatcher().stack().len(),
        "session ended"
    );
    Ok(())
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
