use super::menu::MenuItem;
use crate::error::Result;

/// Durable storage for the menu catalog.
///
/// Implementations must preserve item order across `save` and `load`.
pub trait MenuStore {
    fn save(&mut self, items: &[MenuItem]) -> Result<()>;
    fn load(&self) -> Result<Vec<MenuItem>>;
}

pub type MenuStoreBox = Box<dyn MenuStore>;
