//! CSS-like selectors for widget queries.
//!
//! Supports:
//! - `"TextInput"` - by widget type name
//! - `"#arg-temperature"` - by ID (the widget's test ID)
//! - `"[data-testid='model-name']"` - by test ID
//! - `"[aria-label='Temperature']"` - by accessible name
//! - `"[role='button']"` - by accessible role

use sidebar_core::Widget;
use std::fmt;

/// Parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match by widget type name
    Type(String),
    /// Match by ID (e.g., `#my-id`)
    Id(String),
    /// Match by test ID (e.g., `[data-testid='foo']`)
    TestId(String),
    /// Match by attribute (e.g., `[aria-label='foo']`)
    Attribute {
        /// Attribute name
        name: String,
        /// Expected value
        value: String,
    },
}

impl Selector {
    /// Parse a selector string.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is invalid.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        SelectorParser::new(input.trim()).parse()
    }

    /// Check if this selector matches a widget.
    #[must_use]
    pub fn matches(&self, widget: &dyn Widget) -> bool {
        match self {
            Self::Type(name) => widget.type_name() == name,
            Self::Id(id) | Self::TestId(id) => widget.test_id() == Some(id.as_str()),
            Self::Attribute { name, value } => match name.as_str() {
                "aria-label" => widget.accessible_name() == Some(value.as_str()),
                "role" => widget.accessible_role().as_str() == value,
                _ => false,
            },
        }
    }
}

/// Selector parser.
pub struct SelectorParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> SelectorParser<'a> {
    /// Create a new parser.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Parse the selector.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or malformed.
    pub fn parse(&mut self) -> Result<Selector, SelectorError> {
        let first = self.peek_char().ok_or(SelectorError::Empty)?;

        let selector = match first {
            '#' => {
                self.advance();
                Selector::Id(self.read_identifier()?)
            }
            '[' => self.parse_attribute()?,
            _ if first.is_alphabetic() => Selector::Type(self.read_identifier()?),
            _ => return Err(SelectorError::UnexpectedChar(first)),
        };

        match self.peek_char() {
            None => Ok(selector),
            Some(c) => Err(SelectorError::UnexpectedChar(c)),
        }
    }

    fn parse_attribute(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // '['

        let name = self.read_until(&['=', ']']);
        if name.is_empty() || self.peek_char() != Some('=') {
            return Err(SelectorError::InvalidAttribute);
        }
        self.advance(); // '='

        let quote = self.peek_char().filter(|c| *c == '\'' || *c == '"');
        let value = if let Some(quote) = quote {
            self.advance();
            let value = self.read_until(&[quote]);
            if self.peek_char() != Some(quote) {
                return Err(SelectorError::UnclosedAttribute);
            }
            self.advance();
            value
        } else {
            self.read_until(&[']'])
        };

        if self.peek_char() != Some(']') {
            return Err(SelectorError::UnclosedAttribute);
        }
        self.advance();

        if name == "data-testid" {
            Ok(Selector::TestId(value))
        } else {
            Ok(Selector::Attribute { name, value })
        }
    }

    fn read_identifier(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        if self.pos == start {
            return Err(SelectorError::ExpectedIdentifier);
        }

        Ok(self.input[start..self.pos].to_string())
    }

    fn read_until(&mut self, stops: &[char]) -> String {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if stops.contains(&c) {
                break;
            }
            self.advance();
        }
        self.input[start..self.pos].to_string()
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }
}

/// Selector parsing error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// Empty selector
    Empty,
    /// Unexpected character
    UnexpectedChar(char),
    /// Expected identifier
    ExpectedIdentifier,
    /// Invalid attribute syntax
    InvalidAttribute,
    /// Unclosed attribute bracket or quote
    UnclosedAttribute,
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty selector"),
            Self::UnexpectedChar(c) => write!(f, "unexpected character: '{c}'"),
            Self::ExpectedIdentifier => write!(f, "expected identifier"),
            Self::InvalidAttribute => write!(f, "invalid attribute syntax"),
            Self::UnclosedAttribute => write!(f, "unclosed attribute"),
        }
    }
}

impl std::error::Error for SelectorError {}
