//! Records and the field registry used to read them.
//!
//! Sorting and searching never index a record by a raw string. A requested
//! attribute name is resolved once to a [`Field`], and the field's accessor
//! is used from then on.
//!
//! ```rust
//! use bubbletea_datatable::record::{Field, Record, Value};
//!
//! let car = Record::new("Honda", "Civic", 22000.0);
//! let field: Field = "price".parse().unwrap();
//! assert_eq!(field.value(&car), Value::Number(22000.0));
//! assert_eq!(field.value(&car).to_string(), "22000");
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// One row of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Manufacturer name.
    pub make: String,
    /// Model name.
    pub model: String,
    /// Listed price.
    pub price: f64,
}

impl Record {
    /// Creates a record.
    pub fn new(make: impl Into<String>, model: impl Into<String>, price: f64) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            price,
        }
    }
}

/// A borrowed field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// A string field.
    Text(&'a str),
    /// A numeric field.
    Number(f64),
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            // f64's Display already gives the shortest form: 25000, 19999.99
            Value::Number(n) => write!(f, "{}", n),
        }
    }
}

/// The named fields of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `make`, a string field.
    Make,
    /// `model`, a string field.
    Model,
    /// `price`, a numeric field.
    Price,
}

impl Field {
    /// Every field, in column order.
    pub const ALL: [Field; 3] = [Field::Make, Field::Model, Field::Price];

    /// The attribute name used to request this field.
    pub fn name(self) -> &'static str {
        match self {
            Field::Make => "make",
            Field::Model => "model",
            Field::Price => "price",
        }
    }

    /// Column heading for this field.
    pub fn title(self) -> &'static str {
        match self {
            Field::Make => "Make",
            Field::Model => "Model",
            Field::Price => "Price",
        }
    }

    /// Reads this field from a record.
    pub fn value(self, record: &Record) -> Value<'_> {
        (self.accessor())(record)
    }

    fn accessor(self) -> Accessor {
        match self {
            Field::Make => make,
            Field::Model => model,
            Field::Price => price,
        }
    }
}

type Accessor = for<'a> fn(&'a Record) -> Value<'a>;

fn make(r: &Record) -> Value<'_> {
    Value::Text(&r.make)
}

fn model(r: &Record) -> Value<'_> {
    Value::Text(&r.model)
}

fn price(r: &Record) -> Value<'_> {
    Value::Number(r.price)
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}
