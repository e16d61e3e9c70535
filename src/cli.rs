//! Command-line interface definition for wordlist-gen
//!
//! Provides argument parsing and validation for the wordlist generator.

use crate::output::DEFAULT_OUTPUT_NAME;
use crate::profile::{Person, Profile};
use crate::validate;
use clap::Parser;
use std::path::PathBuf;

/// Targeted wordlist generator for penetration testing
///
/// Combines what you know about a single target (names, dates, numbers,
/// words, symbols) into a wordlist of password candidates.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordlist-gen",
    author = "m0h1nd4",
    version,
    about = "Targeted wordlist generator for penetration testing",
    long_about = r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                           WORDLIST-GEN v1.0.0                                ║
║                   Targeted Password Candidate Generation                      ║
║                         For Penetration Testing                               ║
╚══════════════════════════════════════════════════════════════════════════════╝

Collects facts about a single target and writes every ordered combination of
them, in three case styles, to a wordlist. Run without target flags for an
interactive session.

EXAMPLES:
    # Interactive session
    wordlist-gen

    # Non-interactive, 2 or 3 facts per candidate, 8 to 16 characters
    wordlist-gen --firstname john --lastname smith --dob 07/04/1990 \
        -w rex -s '@!' -m 8 -M 16 -c 2 --yes

    # Count what would be generated without writing anything
    wordlist-gen --firstname john --nickname jj -w rex -m 6 -M 12 -c 3 --dry-run

COMBINING (-c):
    Data:  a b c d

    -c 1    -c 2    -c 3
    ab      abc     abcd
    ac      abd     abdc
    ad      acb     acbd
    ba      acd     acdb

    The higher the number, the longer generation takes.
"#,
    after_help = "Use responsibly and only against targets you are authorized to test."
)]
pub struct Args {
    /// Minimum candidate length
    #[arg(short = 'm', long, value_name = "LEN")]
    pub min_length: Option<usize>,

    /// Maximum candidate length (must be greater than the minimum)
    #[arg(short = 'M', long, value_name = "LEN")]
    pub max_length: Option<usize>,

    /// Up to how many additional facts to combine with the first one
    #[arg(short = 'c', long, value_name = "NUM")]
    pub combine: Option<usize>,

    /// Target first name
    #[arg(long, value_name = "NAME", help_heading = "Target")]
    pub firstname: Option<String>,

    /// Target middle name
    #[arg(long, value_name = "NAME", help_heading = "Target")]
    pub middlename: Option<String>,

    /// Target last name
    #[arg(long, value_name = "NAME", help_heading = "Target")]
    pub lastname: Option<String>,

    /// Target nickname
    #[arg(long, value_name = "NAME", help_heading = "Target")]
    pub nickname: Option<String>,

    /// Target username
    #[arg(long, value_name = "NAME", help_heading = "Target")]
    pub username: Option<String>,

    /// Target date of birth (MM/DD/YYYY)
    #[arg(long, value_name = "DATE", help_heading = "Target")]
    pub dob: Option<String>,

    /// Target age
    #[arg(long, value_name = "AGE", help_heading = "Target")]
    pub age: Option<String>,

    /// Target phone number
    #[arg(long, value_name = "NUMBER", help_heading = "Target")]
    pub phone: Option<String>,

    /// Target email address
    #[arg(long, value_name = "EMAIL", help_heading = "Target")]
    pub email: Option<String>,

    /// Partner first name
    #[arg(long, value_name = "NAME", help_heading = "Partner")]
    pub partner_firstname: Option<String>,

    /// Partner middle name
    #[arg(long, value_name = "NAME", help_heading = "Partner")]
    pub partner_middlename: Option<String>,

    /// Partner last name
    #[arg(long, value_name = "NAME", help_heading = "Partner")]
    pub partner_lastname: Option<String>,

    /// Partner nickname
    #[arg(long, value_name = "NAME", help_heading = "Partner")]
    pub partner_nickname: Option<String>,

    /// Partner username
    #[arg(long, value_name = "NAME", help_heading = "Partner")]
    pub partner_username: Option<String>,

    /// Partner date of birth (MM/DD/YYYY)
    #[arg(long, value_name = "DATE", help_heading = "Partner")]
    pub partner_dob: Option<String>,

    /// Partner age
    #[arg(long, value_name = "AGE", help_heading = "Partner")]
    pub partner_age: Option<String>,

    /// Partner phone number
    #[arg(long, value_name = "NUMBER", help_heading = "Partner")]
    pub partner_phone: Option<String>,

    /// Partner email address
    #[arg(long, value_name = "EMAIL", help_heading = "Partner")]
    pub partner_email: Option<String>,

    /// Engagement date (MM/DD/YYYY)
    #[arg(long, value_name = "DATE", help_heading = "Partner")]
    pub engaged: Option<String>,

    /// Additional word (favorite food, place, pet name, ...); repeatable
    #[arg(short, long = "word", value_name = "WORD", help_heading = "Extras")]
    pub words: Vec<String>,

    /// Symbols to mix in, each character becomes its own fact (e.g. "@#$_&-+()/")
    #[arg(short, long, value_name = "CHARS", help_heading = "Extras")]
    pub symbols: Option<String>,

    /// Ask for facts interactively even when some are given as flags
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,

    /// Output file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT_NAME)]
    pub output: PathBuf,

    /// Do not ask for confirmation before generating
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,

    /// Dry run - show what would be generated without writing files
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Buffer size for file operations (default: 8MB)
    #[arg(long, value_name = "SIZE", default_value = "8MB")]
    pub buffer_size: String,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Whether any fact about the target was given on the command line
    pub fn has_facts(&self) -> bool {
        let facts = [
            &self.firstname,
            &self.middlename,
            &self.lastname,
            &self.nickname,
            &self.username,
            &self.dob,
            &self.age,
            &self.phone,
            &self.email,
            &self.partner_firstname,
            &self.partner_middlename,
            &self.partner_lastname,
            &self.partner_nickname,
            &self.partner_username,
            &self.partner_dob,
            &self.partner_age,
            &self.partner_phone,
            &self.partner_email,
            &self.engaged,
            &self.symbols,
        ];
        facts.iter().any(|fact| fact.is_some()) || !self.words.is_empty()
    }

    /// Whether facts have to be asked for interactively
    pub fn needs_prompt(&self) -> bool {
        self.interactive || !self.has_facts()
    }

    /// Validate the facts given as flags and build a profile from them
    pub fn to_profile(&self) -> anyhow::Result<Profile> {
        let target = person_from_flags(
            [
                &self.firstname,
                &self.middlename,
                &self.lastname,
                &self.nickname,
            ],
            &self.username,
            &self.dob,
            &self.age,
            &self.phone,
            &self.email,
        )?;

        let partner = person_from_flags(
            [
                &self.partner_firstname,
                &self.partner_middlename,
                &self.partner_lastname,
                &self.partner_nickname,
            ],
            &self.partner_username,
            &self.partner_dob,
            &self.partner_age,
            &self.partner_phone,
            &self.partner_email,
        )?;

        let engaged_on = match self.engaged {
            Some(ref date) => validate::date("date engaged", date)?,
            None => None,
        };

        let symbols = match self.symbols {
            Some(ref symbols) => validate::symbols("symbols", symbols)?,
            None => Vec::new(),
        };

        Ok(Profile {
            target,
            partner,
            engaged_on,
            words: self.words.iter().filter_map(|w| validate::word(w)).collect(),
            symbols,
        })
    }

    /// Bounds given on the command line, if all three are present
    pub fn bounds(&self) -> Option<(usize, usize, usize)> {
        Some((self.min_length?, self.max_length?, self.combine?))
    }

    /// Parse buffer size string to bytes
    pub fn parse_buffer_size(&self) -> anyhow::Result<usize> {
        parse_size(&self.buffer_size)
    }
}

const NAME_FIELDS: [&str; 4] = ["firstname", "middlename", "lastname", "nickname"];

fn person_from_flags(
    names: [&Option<String>; 4],
    username: &Option<String>,
    dob: &Option<String>,
    age: &Option<String>,
    phone: &Option<String>,
    email: &Option<String>,
) -> anyhow::Result<Person> {
    let mut validated = [None, None, None, None];
    for ((slot, field), value) in validated.iter_mut().zip(NAME_FIELDS).zip(names) {
        if let Some(value) = value {
            *slot = validate::name(field, value)?;
        }
    }
    let [first_name, middle_name, last_name, nickname] = validated;

    Ok(Person {
        first_name,
        middle_name,
        last_name,
        nickname,
        username: username.as_deref().and_then(validate::username),
        birth_date: dob.as_deref().map(|d| validate::date("dob", d)).transpose()?.flatten(),
        age: age.as_deref().map(|a| validate::age("age", a)).transpose()?.flatten(),
        phone: phone
            .as_deref()
            .map(|p| validate::phone("phonenumber", p))
            .transpose()?
            .flatten(),
        email: email.as_deref().map(|e| validate::email("email", e)).transpose()?.flatten(),
    })
}

/// Parse human-readable size string to bytes
fn parse_size(size_str: &str) -> anyhow::Result<usize> {
    let size_str = size_str.trim().to_uppercase();

    let (num_str, multiplier) = if let Some(num) = size_str.strip_suffix("GB") {
        (num, 1024 * 1024 * 1024)
    } else if let Some(num) = size_str.strip_suffix("MB") {
        (num, 1024 * 1024)
    } else if let Some(num) = size_str.strip_suffix("KB") {
        (num, 1024)
    } else if let Some(num) = size_str.strip_suffix('B') {
        (num, 1)
    } else {
        (size_str.as_str(), 1)
    };

    let num: usize = num_str
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid size format: '{}'", size_str))?;

    Ok(num * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("wordlist-gen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(!args.has_facts());
        assert!(args.needs_prompt());
        assert_eq!(args.output, PathBuf::from("Wordlist.txt"));
        assert_eq!(args.bounds(), None);
        assert_eq!(args.parse_buffer_size().unwrap(), 8 * 1024 * 1024);
    }

    #[test]
    fn test_bounds_flags() {
        let args = parse(&["--firstname", "john", "-m", "6", "-M", "12", "-c", "2"]);
        assert!(args.has_facts());
        assert!(!args.needs_prompt());
        assert_eq!(args.bounds(), Some((6, 12, 2)));

        let partial = parse(&["-m", "6", "-M", "12"]);
        assert_eq!(partial.bounds(), None);
    }

    #[test]
    fn test_interactive_flag_forces_prompt() {
        let args = parse(&["--firstname", "john", "--interactive"]);
        assert!(args.needs_prompt());
    }

    #[test]
    fn test_to_profile() {
        let args = parse(&[
            "--firstname",
            "Mary Ann",
            "--username",
            "m_ann",
            "--dob",
            "03/15/1988",
            "--partner-age",
            "40",
            "--engaged",
            "06/01/2015",
            "-w",
            "new york",
            "-w",
            "luna",
            "-s",
            "@!",
        ]);
        let profile = args.to_profile().unwrap();

        assert_eq!(profile.target.first_name.as_deref(), Some("MaryAnn"));
        assert_eq!(profile.target.username.as_deref(), Some("m_ann"));
        assert_eq!(profile.partner.age, Some(40));
        assert_eq!(profile.words, vec!["newyork", "luna"]);
        assert_eq!(profile.symbols, vec!["@", "!"]);
        assert_eq!(
            profile.tokens(),
            vec![
                "MaryAnn", "m_ann", "03151988", "03", "15", "1988", "40", "06012015", "06", "01",
                "2015", "newyork", "luna", "@", "!",
            ]
        );
    }

    #[test]
    fn test_to_profile_rejects_invalid_fact() {
        assert!(parse(&["--lastname", "sm1th"]).to_profile().is_err());
        assert!(parse(&["--dob", "1990-07-04"]).to_profile().is_err());
        assert!(parse(&["--age", "120"]).to_profile().is_err());
        assert!(parse(&["--partner-email", "nobody"]).to_profile().is_err());
        assert!(parse(&["-s", "abc"]).to_profile().is_err());
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("64MB").unwrap(), 64 * 1024 * 1024);
        assert_eq!(parse_size("8GB").unwrap(), 8 * 1024 * 1024 * 1024);
        assert_eq!(parse_size("1024KB").unwrap(), 1024 * 1024);
        assert_eq!(parse_size("512").unwrap(), 512);
        assert!(parse_size("lots").is_err());
    }
}
