use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_text_length};

/// Shared length bounds for human-readable fields (name, reading).
pub const TEXT_MIN: usize = 1;
pub const TEXT_MAX: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    code: i32,
    name: String,
}

impl Department {
    pub const CODE_MIN: i32 = 100;
    pub const CODE_MAX: i32 = 999;

    pub fn new(code: i32, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_range("department code", code, Self::CODE_MIN, Self::CODE_MAX)?;
        validate_text_length("department name", &name, TEXT_MIN, TEXT_MAX)?;
        Ok(Self { code, name })
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A staff member. Holds its department by value; the pair
/// (number, department code) is what the wire format keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staff {
    number: i32,
    name: String,
    ruby: String,
    department: Department,
}

impl Staff {
    pub const NUMBER_MIN: i32 = 1;
    pub const NUMBER_MAX: i32 = 9999;

    pub fn new(
        number: i32,
        name: impl Into<String>,
        ruby: impl Into<String>,
        department: Department,
    ) -> Result<Self> {
        let name = name.into();
        let ruby = ruby.into();
        validate_range("staff number", number, Self::NUMBER_MIN, Self::NUMBER_MAX)?;
        validate_text_length("staff name", &name, TEXT_MIN, TEXT_MAX)?;
        validate_text_length("phonetic reading", &ruby, TEXT_MIN, TEXT_MAX)?;
        Ok(Self {
            number,
            name,
            ruby,
            department,
        })
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ruby(&self) -> &str {
        &self.ruby
    }

    pub fn department(&self) -> &Department {
        &self.department
    }
}
