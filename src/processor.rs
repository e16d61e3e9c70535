//! Core processing engine
//!
//! Streams candidates from the generator into the wordlist while the spinner
//! animates, then reports what was written.

use crate::cli::Args;
use crate::generator::{generate, selection_count, total_selections, Bounds};
use crate::output::{ensure_parent_dir, WordlistSink};
use crate::progress::{
    print_bullet, print_header, print_info, print_notice, print_success, GenerationStats, Spinner,
};

use colored::*;
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;

/// Update the spinner's candidate count every this many lines
const POSITION_STRIDE: u64 = 1024;

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub tokens: Vec<String>,
    pub bounds: Bounds,
    pub output_path: PathBuf,
    pub buffer_size: usize,
    pub dry_run: bool,
    pub quiet: bool,
    pub verbose: bool,
}

impl ProcessorConfig {
    pub fn from_args(args: &Args, tokens: Vec<String>, bounds: Bounds) -> anyhow::Result<Self> {
        Ok(Self {
            tokens,
            bounds,
            output_path: args.output.clone(),
            buffer_size: args.parse_buffer_size()?,
            dry_run: args.dry_run,
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }
}

/// Main processor
pub struct Processor {
    config: ProcessorConfig,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    /// Generate the wordlist (or only report on it in dry-run mode)
    pub fn process(&self) -> anyhow::Result<GenerationStats> {
        let config = &self.config;

        if !config.quiet {
            print_header("Collected data");
            print_info(&format!("Tokens: {}", config.tokens.len()));
            if config.verbose {
                for token in &config.tokens {
                    print_bullet(token);
                }
            }
        }

        if config.dry_run {
            return Ok(self.dry_run_report());
        }

        ensure_parent_dir(&config.output_path)?;
        let mut sink = WordlistSink::create(&config.output_path, config.buffer_size)?;

        if !config.quiet {
            print_header("Generating wordlist...");
            print_info(&format!("Output: {:?}", config.output_path));
        }

        let spinner = Spinner::start("Generating ...", config.quiet);
        let stats = self.generate_into(&mut sink, |written| {
            if written % POSITION_STRIDE == 0 {
                spinner.set_position(written);
            }
        })?;
        spinner.finish(stats.lines_written, &"Complete".green().to_string());

        info!(
            "Wrote {} candidates to {:?}",
            stats.lines_written, config.output_path
        );

        if !config.quiet {
            stats.print_summary();
            print_success(&format!(
                "{} passwords have been saved to {:?}",
                crate::progress::format_number(stats.lines_written),
                config.output_path
            ));
            print_notice();
        }

        Ok(stats)
    }

    /// Drain the generator into `sink`, flushing it at the end.
    ///
    /// `on_line` receives the running line count after every write.
    pub fn generate_into<W, F>(
        &self,
        sink: &mut WordlistSink<W>,
        on_line: F,
    ) -> anyhow::Result<GenerationStats>
    where
        W: Write,
        F: FnMut(u64),
    {
        let config = &self.config;
        let mut stats = GenerationStats::new(config.tokens.len(), &config.output_path);
        stats.selections_expected = total_selections(config.tokens.len(), &config.bounds);

        let mut candidates = generate(&config.tokens, config.bounds);
        let written = sink.drain(candidates.by_ref(), on_line)?;
        sink.flush()?;

        stats.selections_examined = candidates.selections_examined();
        stats.selections_accepted = candidates.selections_accepted();
        stats.lines_written = written;
        stats.bytes_written = sink.bytes_written();
        stats.finish();

        debug!(
            "Examined {} of {:?} expected selections, {} within length",
            stats.selections_examined, stats.selections_expected, stats.selections_accepted
        );

        Ok(stats)
    }

    /// Dry run report
    fn dry_run_report(&self) -> GenerationStats {
        let config = &self.config;
        let k = config.tokens.len();

        print_header("DRY RUN - No files will be written");

        println!("\n  {} Tokens (generation order):", "▶".green());
        let candidates = generate(&config.tokens, config.bounds);
        for token in candidates.tokens() {
            print_bullet(token);
        }

        println!("\n  {} Selections per arity:", "▶".green());
        for arity in 2..=config.bounds.max_tokens().min(k) {
            let count = selection_count(k, arity)
                .map(crate::progress::format_number)
                .unwrap_or_else(|| "too many to count".to_string());
            print_bullet(&format!("{} tokens: {}", arity, count));
        }

        let expected = total_selections(k, &config.bounds);
        println!("\n  {} Output configuration:", "▶".green());
        print_bullet(&format!("Output file: {:?}", config.output_path));
        print_bullet(&format!(
            "Length: {}-{}",
            config.bounds.min_length(),
            config.bounds.max_length()
        ));
        print_bullet(&format!(
            "Selections: {} (up to 3 candidates each)",
            expected
                .map(crate::progress::format_number)
                .unwrap_or_else(|| "too many to count".to_string())
        ));

        let mut stats = GenerationStats::new(k, &config.output_path);
        stats.selections_expected = expected;
        stats.finish();
        stats
    }
}
