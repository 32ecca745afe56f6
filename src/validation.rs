//! Menu Item Validation
//!
//! Pure checks run on every draft mutation and again before submit.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::models::MenuItem;

/// Editable scalar field of a menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    Name,
    Description,
    Price,
    Image,
    Category,
}

impl DraftField {
    pub const ALL: [DraftField; 5] = [
        DraftField::Name,
        DraftField::Description,
        DraftField::Price,
        DraftField::Image,
        DraftField::Category,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Description => "description",
            DraftField::Price => "price",
            DraftField::Image => "image",
            DraftField::Category => "category",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Name",
            DraftField::Description => "Description",
            DraftField::Price => "Price",
            DraftField::Image => "Image",
            DraftField::Category => "Category",
        }
    }
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown field: {}", s))
    }
}

/// Address of a validation message: a scalar field or one size entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldPath {
    Field(DraftField),
    Size(usize),
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Field(field) => f.write_str(field.as_str()),
            FieldPath::Size(index) => write!(f, "sizes.{}", index),
        }
    }
}

impl From<DraftField> for FieldPath {
    fn from(field: DraftField) -> Self {
        FieldPath::Field(field)
    }
}

/// Field path -> message. Empty means the draft may be submitted.
pub type ValidationErrors = BTreeMap<FieldPath, String>;

/// Validate a menu item draft
pub fn validate(item: &MenuItem) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for (field, value) in [
        (DraftField::Name, &item.name),
        (DraftField::Description, &item.description),
        (DraftField::Image, &item.image),
        (DraftField::Category, &item.category),
    ] {
        if value.trim().is_empty() {
            errors.insert(field.into(), format!("{} is required", field.label()));
        }
    }

    if item.price.is_blank() {
        errors.insert(DraftField::Price.into(), "Price is required".to_string());
    } else {
        match item.price.amount() {
            None => {
                errors.insert(DraftField::Price.into(), "Price must be a number".to_string());
            }
            Some(amount) if amount < 0.0 => {
                errors.insert(DraftField::Price.into(), "Price cannot be negative".to_string());
            }
            Some(_) => {}
        }
    }

    for (index, size) in item.sizes.iter().enumerate() {
        if size.trim().is_empty() {
            errors.insert(FieldPath::Size(index), "Size cannot be empty".to_string());
        }
    }

    errors
}
