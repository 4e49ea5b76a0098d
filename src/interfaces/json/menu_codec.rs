use crate::domain::menu::{Category, CategoryKind, MenuItem};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Wire form of a menu item: `{name, price, type, details}`.
///
/// `kind` stays a plain string so that records with an unrecognised type can
/// be read and then skipped instead of failing the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuRecord {
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub details: RecordDetails,
}

/// Category detail object. Empty for main courses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(
        default,
        rename = "portionSize",
        alias = "portion_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub portion_size: Option<String>,
}

impl From<&MenuItem> for MenuRecord {
    fn from(item: &MenuItem) -> Self {
        let details = match item.category() {
            Category::Beverage { size } => RecordDetails {
                size: Some(size.clone()),
                ..Default::default()
            },
            Category::Appetizer { portion_size } => RecordDetails {
                portion_size: Some(portion_size.clone()),
                ..Default::default()
            },
            Category::MainCourse => RecordDetails::default(),
        };
        Self {
            name: item.name().to_string(),
            price: item.price().value(),
            kind: item.kind().as_str().to_string(),
            details,
        }
    }
}

fn parse_kind(kind: &str) -> Option<CategoryKind> {
    match kind {
        "Beverage" => Some(CategoryKind::Beverage),
        "Appetizer" => Some(CategoryKind::Appetizer),
        "MainCourse" => Some(CategoryKind::MainCourse),
        _ => None,
    }
}

impl MenuRecord {
    /// Converts the record back into a menu item.
    ///
    /// Returns `Ok(None)` for an unknown type tag.
    pub fn into_item(self) -> Result<Option<MenuItem>> {
        let Some(kind) = parse_kind(&self.kind) else {
            return Ok(None);
        };
        let detail = match kind {
            CategoryKind::Beverage => self.details.size.as_deref(),
            CategoryKind::Appetizer => self.details.portion_size.as_deref(),
            CategoryKind::MainCourse => None,
        };
        MenuItem::create(kind, self.name, self.price, detail).map(Some)
    }
}

pub fn serialize(items: &[MenuItem]) -> Vec<MenuRecord> {
    items.iter().map(MenuRecord::from).collect()
}

/// Rebuilds menu items from records, keeping their order.
///
/// Records with an unrecognised `type` are dropped without error.
pub fn deserialize(records: Vec<MenuRecord>) -> Result<Vec<MenuItem>> {
    let mut items = Vec::with_capacity(records.len());
    for record in records {
        let name = record.name.clone();
        let kind = record.kind.clone();
        match record.into_item()? {
            Some(item) => items.push(item),
            None => tracing::debug!(%name, %kind, "skipping menu record with unknown type"),
        }
    }
    Ok(items)
}
