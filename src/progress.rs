//! Progress display module
//!
//! Provides the banner, styled status lines, the generation spinner and the
//! final statistics display for the pentesting aesthetic.

use bytesize::ByteSize;
use colored::*;
use crossbeam_channel::{bounded, RecvTimeoutError, Sender};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How often the spinner redraws and checks for completion
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║   ██╗    ██╗ ██████╗ ██████╗ ██████╗ ██╗     ██╗███████╗████████╗           ║
║   ██║    ██║██╔═══██╗██╔══██╗██╔══██╗██║     ██║██╔════╝╚══██╔══╝           ║
║   ██║ █╗ ██║██║   ██║██████╔╝██║  ██║██║     ██║███████╗   ██║              ║
║   ██║███╗██║██║   ██║██╔══██╗██║  ██║██║     ██║╚════██║   ██║              ║
║   ╚███╔███╔╝╚██████╔╝██║  ██║██████╔╝███████╗██║███████║   ██║              ║
║    ╚══╝╚══╝  ╚═════╝ ╚═╝  ╚═╝╚═════╝ ╚══════╝╚═╝╚══════╝   ╚═╝              ║
║                                                                              ║
║    ██████╗ ███████╗███╗   ██╗                                                ║
║   ██╔════╝ ██╔════╝████╗  ██║                                                ║
║   ██║  ███╗█████╗  ██╔██╗ ██║                                                ║
║   ██║   ██║██╔══╝  ██║╚██╗██║                                                ║
║   ╚██████╔╝███████╗██║ ╚████║                                                ║
║    ╚═════╝ ╚══════╝╚═╝  ╚═══╝                                                ║
║                                                                              ║
║                   Targeted Password Candidate Generation                      ║
║                         For Penetration Testing                               ║
║                                                              v1.0.0          ║
╚══════════════════════════════════════════════════════════════════════════════╝
"#;

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print a bullet point
pub fn print_bullet(text: &str) {
    println!("  {} {}", "•".green(), text);
}

/// Print the responsible-use notice
pub fn print_notice() {
    println!();
    println!(
        "  {}",
        "The developers of this tool are not responsible for any misuse.".red()
    );
    println!("  {}", "Only test targets you are authorized to test.".red());
}

/// Create a styled spinner for generation progress.
///
/// The spinner is not ticked automatically; [`Spinner`] drives it.
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg} {human_pos} candidates")
            .unwrap()
            .tick_chars("|/-\\-"),
    );

    pb.set_message(msg.to_string());
    pb
}

/// Spinner animated on its own thread while generation runs.
///
/// The thread only sees a completion channel: it ticks every
/// [`TICK_INTERVAL`] until the channel fires or its sender is dropped.
/// Dropping the spinner stops and joins the thread.
pub struct Spinner {
    bar: ProgressBar,
    done: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    /// Start animating; `hidden` draws nothing but keeps the same lifecycle
    pub fn start(msg: &str, hidden: bool) -> Self {
        let bar = if hidden {
            ProgressBar::hidden()
        } else {
            create_spinner(msg)
        };

        let (done, signal) = bounded::<()>(1);
        let ticker = bar.clone();
        let handle = thread::spawn(move || loop {
            match signal.recv_timeout(TICK_INTERVAL) {
                Err(RecvTimeoutError::Timeout) => ticker.tick(),
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        Self {
            bar,
            done: Some(done),
            handle: Some(handle),
        }
    }

    /// Show how many candidates have been written so far
    pub fn set_position(&self, written: u64) {
        self.bar.set_position(written);
    }

    #[cfg(test)]
    fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop animating and leave `msg` on screen
    pub fn finish(mut self, written: u64, msg: &str) {
        self.stop();
        self.bar.set_position(written);
        self.bar.finish_with_message(msg.to_string());
    }

    fn stop(&mut self) {
        if let Some(done) = self.done.take() {
            let _ = done.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.stop();
            self.bar.abandon();
        }
    }
}

/// Generation statistics
#[derive(Debug, Clone)]
pub struct GenerationStats {
    pub tokens: usize,
    pub selections_expected: Option<u64>,
    pub selections_examined: u64,
    pub selections_accepted: u64,
    pub lines_written: u64,
    pub bytes_written: u64,
    pub output: PathBuf,
    pub start_time: Instant,
    pub elapsed: Duration,
}

impl GenerationStats {
    pub fn new(tokens: usize, output: &Path) -> Self {
        Self {
            tokens,
            selections_expected: None,
            selections_examined: 0,
            selections_accepted: 0,
            lines_written: 0,
            bytes_written: 0,
            output: output.to_path_buf(),
            start_time: Instant::now(),
            elapsed: Duration::ZERO,
        }
    }

    /// Freeze the elapsed time
    pub fn finish(&mut self) {
        self.elapsed = self.start_time.elapsed();
    }

    pub fn lines_per_second(&self) -> f64 {
        let elapsed = self.elapsed.as_secs_f64();
        if elapsed > 0.0 {
            self.lines_written as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        println!();
        println!("{}", "═".repeat(60).green());
        println!("{}", "                   GENERATION COMPLETE".green().bold());
        println!("{}", "═".repeat(60).green());
        println!();

        println!("  {} {}", "Tokens:         ".green(), format_number(self.tokens as u64));
        println!(
            "  {} {}",
            "Selections:     ".green(),
            format_number(self.selections_examined)
        );
        println!(
            "  {} {}",
            "Within length:  ".green(),
            format_number(self.selections_accepted)
        );
        println!(
            "  {} {}",
            "Candidates:     ".green().bold(),
            format_number(self.lines_written).green().bold()
        );
        println!("  {} {}", "Written:        ".green(), ByteSize(self.bytes_written));

        println!();
        println!("  {} {}", "Duration:       ".green(), format_duration(self.elapsed));
        println!(
            "  {} {:.2} lines/sec",
            "Throughput:     ".green(),
            self.lines_per_second()
        );
        println!("  {} {:?}", "Output:         ".green(), self.output);
        println!();
        println!("{}", "═".repeat(60).green());

        if self.lines_written == 0 {
            print_warning("No candidate fits the length bounds; the wordlist is empty");
        }
    }
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}h {}m", hours, mins)
    }
}
