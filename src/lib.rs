//! # Wordlist Gen
//!
//! Targeted wordlist generator for penetration testing.
//!
//! ## Features
//!
//! - **Profile driven**: Combines names, dates, numbers, words and symbols known about one target
//! - **Ordered combinations**: Every arrangement of 2 up to N facts per candidate
//! - **Case styles**: `johnsmith`, `Johnsmith` and `JohnSmith` for each combination
//! - **Length filtering**: Only candidates within the requested length range are kept
//! - **Streaming output**: Candidates are written as they are generated, never held in memory
//!
//! ## Usage
//!
//! ```bash
//! # Interactive session
//! wordlist-gen
//!
//! # Non-interactive
//! wordlist-gen --firstname john --dob 07/04/1990 -w rex -m 8 -M 16 -c 2 --yes
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wordlist_gen::generator::{generate, Bounds};
//!
//! let bounds = Bounds::new(4, 4, 1).unwrap();
//! let candidates: Vec<String> = generate(&["ab", "cd"], bounds).collect();
//!
//! assert_eq!(candidates, ["abcd", "Abcd", "AbCd", "cdab", "Cdab", "CdAb"]);
//! ```

pub mod cli;
pub mod error;
pub mod generator;
pub mod output;
pub mod processor;
pub mod profile;
pub mod progress;
pub mod prompt;
pub mod validate;

pub use cli::Args;
pub use error::{Error, Result};
pub use generator::{generate, Bounds, Candidates};
pub use processor::{Processor, ProcessorConfig};
pub use profile::{Person, Profile};
