use crate::types::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const KEY_DELIMITER: char = ':';

#[derive(Debug, Clone, Default)]
pub struct ProfileParser {
    strategy: MatchStrategy,
}

impl ProfileParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: MatchStrategy) -> Self {
        ProfileParser { strategy }
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Profile> {
        let path = path.as_ref();
        log::debug!("Parsing profile from {}", path.display());

        let file = File::open(path)?;
        self.parse_reader(BufReader::new(file))
    }

    pub fn parse_str(&self, text: &str) -> Result<Profile> {
        self.parse_reader(text.as_bytes())
    }

    /// Builds a profile from every recognized line of `reader`.
    ///
    /// The reader is owned by the call and released on return, whether the
    /// parse succeeds or fails. Numeric values that do not parse abort the
    /// whole parse; no partial profile is returned.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Profile> {
        let mut profile = Profile::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let line = line.trim_end_matches('\r');

            match self.strategy {
                MatchStrategy::Exact => match split_key_value(line) {
                    Some((field, value)) => profile.assign(field, value, line_number)?,
                    None => log::trace!("Skipping line {}: {:?}", line_number, line),
                },
                MatchStrategy::Substring => {
                    for field in Field::ALL {
                        if line.contains(field.keyword()) {
                            profile.assign(field, value_after_first_space(line), line_number)?;
                        }
                    }
                }
            }
        }

        log::debug!("Parsed profile: {:?}", profile);
        Ok(profile)
    }
}

/// Splits `Key: value` or `Key value` and resolves the key to a known field.
///
/// The key is the leading run of alphanumerics, so a colon inside a
/// space-delimited value stays part of the value.
fn split_key_value(line: &str) -> Option<(Field, &str)> {
    let line = line.trim_start();
    let key_end = line
        .find(|c: char| !c.is_alphanumeric())
        .unwrap_or(line.len());
    let field = Field::from_key(&line[..key_end])?;

    let rest = &line[key_end..];
    let value = match rest.trim_start().strip_prefix(KEY_DELIMITER) {
        Some(value) => value,
        None if rest.starts_with(char::is_whitespace) => rest,
        None => return None,
    };
    Some((field, value.trim()))
}

fn value_after_first_space(line: &str) -> &str {
    match line.find(' ') {
        Some(pos) => &line[pos + 1..],
        None => line,
    }
}

pub fn parse_profile_file(path: impl AsRef<Path>) -> Result<Profile> {
    ProfileParser::new().parse_file(path)
}

pub fn parse_profile_str(text: &str) -> Result<Profile> {
    ProfileParser::new().parse_str(text)
}
