use crate::domain::menu::MenuItem;
use crate::error::Result;
use rust_decimal_macros::dec;

/// The house menu served by the demo binary.
pub fn house_menu() -> Result<Vec<MenuItem>> {
    Ok(vec![
        MenuItem::beverage("Coke", dec!(2.5), "Large")?,
        MenuItem::beverage("Fanta", dec!(2.5), "Medium")?,
        MenuItem::beverage("Water", dec!(1.0), "Small")?,
        MenuItem::appetizer("Spring Rolls", dec!(5.0), "Medium")?,
        MenuItem::appetizer("Garlic Bread", dec!(4.0), "4 pieces")?,
        MenuItem::main_course("Spaghetti", dec!(12.0))?,
        MenuItem::main_course("Steak", dec!(20.0))?,
        MenuItem::main_course("Salmon", dec!(18.0))?,
        MenuItem::main_course("Vegetarian Pasta", dec!(10.0))?,
        MenuItem::beverage("Orange Juice", dec!(3.0), "Medium")?,
        MenuItem::appetizer("Bruschetta", dec!(6.0), "6 pieces")?,
        MenuItem::beverage("Tea", dec!(1.5), "Small")?,
    ])
}
