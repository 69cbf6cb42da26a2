use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchStrategy {
    #[default]
    Exact,     // Split on the delimiter and compare the key exactly
    Substring, // Any line containing a keyword sets that field
}

impl From<&str> for MatchStrategy {
    fn from(s: &str) -> Self {
        match s {
            "exact" => MatchStrategy::Exact,
            "substring" => MatchStrategy::Substring,
            _ => MatchStrategy::Exact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Age,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Age, Field::Email, Field::Phone];

    /// The label that precedes this field's value on a line.
    pub fn keyword(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Age => "Age",
            Field::Email => "Email",
            Field::Phone => "Phone",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.keyword() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: i32,
    pub email: String,
    pub phone: i64,
}

impl Profile {
    pub fn new(name: impl Into<String>, age: i32, email: impl Into<String>, phone: i64) -> Self {
        Profile {
            name: name.into(),
            age,
            email: email.into(),
            phone,
        }
    }

    /// Coerces `value` to the type of `field` and stores it.
    pub(crate) fn assign(&mut self, field: Field, value: &str, line: usize) -> Result<()> {
        let format_error = |source: ParseIntError| ProfileError::Format {
            field,
            line,
            value: value.to_string(),
            source,
        };

        match field {
            Field::Name => self.name = value.to_string(),
            Field::Age => self.age = value.parse().map_err(format_error)?,
            Field::Email => self.email = value.to_string(),
            Field::Phone => self.phone = value.parse().map_err(format_error)?,
        }
        Ok(())
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", Field::Name, self.name)?;
        writeln!(f, "{}: {}", Field::Age, self.age)?;
        writeln!(f, "{}: {}", Field::Email, self.email)?;
        writeln!(f, "{}: {}", Field::Phone, self.phone)
    }
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error on line {line}: {field} value {value:?} is not an integer")]
    Format {
        field: Field,
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl ProfileError {
    pub fn is_io(&self) -> bool {
        matches!(self, ProfileError::Io(_))
    }

    pub fn is_format(&self) -> bool {
        matches!(self, ProfileError::Format { .. })
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
