//! Interactive fact collection
//!
//! Asks the operator for everything known about the target, one fact at a
//! time. Invalid answers are reported and asked again; blank answers skip
//! the fact.

use crate::error::{Error, Result};
use crate::generator::capitalize;
use crate::profile::{Person, Profile};
use crate::progress::{print_error, print_header, print_info};
use crate::validate::{self, SUGGESTED_SYMBOLS};
use log::debug;
use rustyline::DefaultEditor;

/// Line-editor backed prompt session
pub struct Prompter {
    editor: DefaultEditor,
}

impl Prompter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    fn read(&mut self, prompt: &str) -> Result<String> {
        let line = self.editor.readline(prompt)?;
        Ok(line.trim().to_string())
    }

    /// Ask `label` until `parse` accepts the answer
    fn ask<T>(&mut self, label: &str, parse: impl Fn(&str) -> Result<T>) -> Result<T> {
        loop {
            let answer = self.read(&format!("\n-》{}: ", label))?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(Error::InvalidInput { field, reason }) => {
                    debug!("Rejected {}: {}", field, reason);
                    print_error("Invalid input. Please try again.");
                }
                Err(Error::InvalidBounds(reason)) => {
                    print_error(&format!("Invalid input: {}. Please try again.", reason));
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn ask_number(&mut self, label: &str, accept: impl Fn(usize) -> Result<()>) -> Result<usize> {
        self.ask(label, |answer| {
            let value: usize = answer
                .parse()
                .map_err(|_| Error::invalid("number", format!("'{}' is not a number", answer)))?;
            accept(value)?;
            Ok(value)
        })
    }

    /// Ask for one person's facts; `owner` prefixes every label
    fn person(&mut self, owner: &str) -> Result<Person> {
        let label = |fact: &str| {
            if owner.is_empty() {
                capitalize(fact)
            } else {
                format!("{}'s {}", owner, fact)
            }
        };

        Ok(Person {
            first_name: self.ask(&label("firstname"), |a| validate::name("firstname", a))?,
            middle_name: self.ask(&label("middlename"), |a| validate::name("middlename", a))?,
            last_name: self.ask(&label("lastname"), |a| validate::name("lastname", a))?,
            nickname: self.ask(&label("nickname"), |a| validate::name("nickname", a))?,
            username: self.ask(&label("username"), |a| Ok(validate::username(a)))?,
            birth_date: self.ask(&format!("{} (MM/DD/YYYY)", label("dob")), |a| {
                validate::date("dob", a)
            })?,
            age: self.ask(&label("age"), |a| validate::age("age", a))?,
            phone: self.ask(&format!("{} (+639123456789)", label("phonenumber")), |a| {
                validate::phone("phonenumber", a)
            })?,
            email: self.ask(&label("email"), |a| validate::email("email", a))?,
        })
    }

    /// Run the full question sequence for a profile
    pub fn profile(&mut self) -> Result<Profile> {
        print_header("Target");
        print_info("Put everything you know then press enter");
        print_info("Press enter to skip");
        let target = self.person("")?;

        print_header("Partner");
        print_info("Some additional information about the target's");
        print_info("life partner can be useful to enhance your wordlist");
        let partner = self.person("Partner")?;

        let engaged_on = self.ask("Date engaged (MM/DD/YYYY)", |a| {
            validate::date("date engaged", a)
        })?;

        print_header("Words");
        print_info("Add some words that can be a possible password");
        print_info("Like favorite food, place, pet name, etc");
        print_info("Press enter to finish");
        let mut words = Vec::new();
        while let Some(word) = self.ask("Words", |a| Ok(validate::word(a)))? {
            words.push(word);
        }

        print_header("Symbols");
        print_info("Put some symbols to strengthen your wordlist");
        print_info(SUGGESTED_SYMBOLS);
        let symbols = self.ask("Symbols", |a| validate::symbols("symbols", a))?;

        Ok(Profile {
            target,
            partner,
            engaged_on,
            words,
            symbols,
        })
    }

    /// Ask for whichever bounds were not given on the command line
    pub fn bounds(
        &mut self,
        min_length: Option<usize>,
        max_length: Option<usize>,
        combine: Option<usize>,
    ) -> Result<(usize, usize, usize)> {
        let min_length = match min_length {
            Some(value) => value,
            None => self.ask_number("Minimum password length", |min| {
                validate::bounds(min, min.saturating_add(1), 1)
            })?,
        };
        validate::bounds(min_length, min_length.saturating_add(1), 1)?;

        let max_length = match max_length {
            Some(value) => value,
            None => self.ask_number("Maximum password length", |max| {
                validate::bounds(min_length, max, 1)
            })?,
        };
        validate::bounds(min_length, max_length, 1)?;

        let combine = match combine {
            Some(value) => value,
            None => {
                print_header("Combining");
                for line in [
                    "Data:  a b c d",
                    "",
                    "1       2       3",
                    "ab      abc     abcd",
                    "ac      abd     abdc",
                    "ad      acb     acbd",
                    "ba      acd     acdb",
                ] {
                    println!("    {}", line);
                }
                print_info("WARNING! The higher the number, the longer it takes to create.");
                self.ask_number("Up to how many data to combine", |n| {
                    validate::bounds(min_length, max_length, n)
                })?
            }
        };

        Ok((min_length, max_length, combine))
    }

    /// Ask a yes/no question until answered
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        self.ask(&format!("{} [Y|N]", question), |answer| {
            match answer.to_uppercase().as_str() {
                "Y" => Ok(true),
                "N" => Ok(false),
                _ => Err(Error::invalid("answer", format!("'{}' is not Y or N", answer))),
            }
        })
    }
}
