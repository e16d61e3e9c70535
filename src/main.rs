//! Wordlist Gen - Targeted wordlist generation for penetration testing
//!
//! Main entry point for the command-line application.

use clap::Parser;
use log::debug;
use std::process;
use std::time::Instant;

use wordlist_gen::cli::Args;
use wordlist_gen::generator::Bounds;
use wordlist_gen::processor::{Processor, ProcessorConfig};
use wordlist_gen::progress::{format_duration, print_banner, print_error, print_info, print_warning};
use wordlist_gen::prompt::Prompter;
use wordlist_gen::validate;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let started = Instant::now();

    // Print banner unless quiet mode
    if !args.quiet {
        print_banner();
    }

    let mut prompter = None;

    // Collect facts, from flags or interactively
    let profile = if args.needs_prompt() {
        session(&mut prompter)?.profile()?
    } else {
        args.to_profile()?
    };

    // Collect bounds
    let (min_length, max_length, combine) = match args.bounds() {
        Some(bounds) => bounds,
        None => {
            if prompter.is_none() && args.quiet {
                anyhow::bail!("--min-length, --max-length and --combine are required in quiet mode");
            }
            session(&mut prompter)?.bounds(args.min_length, args.max_length, args.combine)?
        }
    };
    validate::bounds(min_length, max_length, combine)?;
    let bounds = Bounds::new(min_length, max_length, combine)?;

    let tokens = profile.tokens();
    debug!("Collected {} tokens", tokens.len());
    if tokens.len() < 2 && !args.quiet {
        print_warning("Fewer than two facts collected; the wordlist will be empty");
    }

    // Ask before generating unless told not to
    if !args.yes && !args.dry_run && !session(&mut prompter)?.confirm("Generate a wordlist?")? {
        print_info("Nothing generated");
        return Ok(());
    }

    let config = ProcessorConfig::from_args(&args, tokens, bounds)?;
    Processor::new(config).process()?;

    if !args.quiet {
        print_info(&format!("Finished in {}", format_duration(started.elapsed())));
    }

    Ok(())
}

/// Open the interactive session on first use
fn session(slot: &mut Option<Prompter>) -> anyhow::Result<&mut Prompter> {
    if slot.is_none() {
        *slot = Some(Prompter::new()?);
    }
    slot.as_mut()
        .ok_or_else(|| anyhow::anyhow!("Interactive session unavailable"))
}
