use super::money::Price;
use crate::error::OrderError;
use rust_decimal::Decimal;
use std::fmt;

/// Category tag of a menu item, without its detail payload.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CategoryKind {
    Beverage,
    Appetizer,
    MainCourse,
}

impl CategoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Beverage => "Beverage",
            CategoryKind::Appetizer => "Appetizer",
            CategoryKind::MainCourse => "MainCourse",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a menu item together with the detail that category requires.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Category {
    Beverage { size: String },
    Appetizer { portion_size: String },
    MainCourse,
}

impl Category {
    pub fn kind(&self) -> CategoryKind {
        match self {
            Category::Beverage { .. } => CategoryKind::Beverage,
            Category::Appetizer { .. } => CategoryKind::Appetizer,
            Category::MainCourse => CategoryKind::MainCourse,
        }
    }

    /// The category detail shown next to the price, if the category has one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Category::Beverage { size } => Some(size),
            Category::Appetizer { portion_size } => Some(portion_size),
            Category::MainCourse => None,
        }
    }
}

/// An immutable entry of the menu.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct MenuItem {
    name: String,
    price: Price,
    category: Category,
}

impl MenuItem {
    /// Builds a menu item of the given category.
    ///
    /// Beverages need a size and appetizers a portion size; a blank detail
    /// counts as missing. Any detail passed for a main course is ignored.
    pub fn create(
        kind: CategoryKind,
        name: impl Into<String>,
        price: Decimal,
        detail: Option<&str>,
    ) -> Result<Self, OrderError> {
        let name = name.into();
        let price = Price::new(price)?;
        let category = match kind {
            CategoryKind::Beverage => Category::Beverage {
                size: required_detail(&name, kind, detail)?,
            },
            CategoryKind::Appetizer => Category::Appetizer {
                portion_size: required_detail(&name, kind, detail)?,
            },
            CategoryKind::MainCourse => Category::MainCourse,
        };
        Ok(Self {
            name,
            price,
            category,
        })
    }

    pub fn beverage(
        name: impl Into<String>,
        price: Decimal,
        size: &str,
    ) -> Result<Self, OrderError> {
        Self::create(CategoryKind::Beverage, name, price, Some(size))
    }

    pub fn appetizer(
        name: impl Into<String>,
        price: Decimal,
        portion_size: &str,
    ) -> Result<Self, OrderError> {
        Self::create(CategoryKind::Appetizer, name, price, Some(portion_size))
    }

    pub fn main_course(name: impl Into<String>, price: Decimal) -> Result<Self, OrderError> {
        Self::create(CategoryKind::MainCourse, name, price, None)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn kind(&self) -> CategoryKind {
        self.category.kind()
    }

    /// Undiscounted price of `quantity` units, `None` on overflow.
    pub fn price_for(&self, quantity: u32) -> Option<Decimal> {
        self.price.value().checked_mul(Decimal::from(quantity))
    }
}

fn required_detail(
    name: &str,
    kind: CategoryKind,
    detail: Option<&str>,
) -> Result<String, OrderError> {
    match detail.map(str::trim) {
        Some(detail) if !detail.is_empty() => Ok(detail.to_string()),
        _ => Err(OrderError::ValidationError(format!(
            "{kind} '{name}' requires a {}",
            match kind {
                CategoryKind::Appetizer => "portion size",
                _ => "size",
            }
        ))),
    }
}

/// Label format: `{name} - ${price} ({detail})`, detail omitted for main courses.
impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.price)?;
        if let Some(detail) = self.category.detail() {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}
