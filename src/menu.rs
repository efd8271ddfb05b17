//! Menu fixtures for the browser.
//!
//! A menu is a restaurant name plus ordered categories of dishes. It is read
//! from TOML or JSON (picked by extension) and handed to the tab coordinator as
//! indexed sections. Without a file the built-in sample menu is used.

use anyhow::{Context, Result, anyhow};
use section_tabs_core::{Section, SectionData, index_sections};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MenuCategory {
    title: String,
    #[serde(default)]
    items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MenuFile {
    restaurant: String,
    #[serde(default)]
    sections: Vec<MenuCategory>,
}

/// A loaded menu ready for display.
#[derive(Debug, Clone)]
pub struct Menu {
    pub restaurant: String,
    pub sections: Vec<Section<MenuItem>>,
}

impl Menu {
    pub fn item_counts(&self) -> Vec<usize> {
        self.sections.iter().map(Section::len).collect()
    }

    fn from_file(file: MenuFile) -> Self {
        let sections = index_sections(
            file.sections
                .into_iter()
                .map(|category| SectionData::new(category.title, category.items)),
        );
        Menu {
            restaurant: file.restaurant,
            sections,
        }
    }
}

/// Load a menu fixture from disk.
pub fn load_menu(path: &Path) -> Result<Menu> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read menu at {}", path.display()))?;
    let file = parse_menu(&data, path)?;
    let menu = Menu::from_file(file);
    info!(
        path = %path.display(),
        restaurant = %menu.restaurant,
        sections = menu.sections.len(),
        items = menu.item_counts().iter().sum::<usize>(),
        "Loaded menu"
    );
    Ok(menu)
}

fn parse_menu(data: &str, path: &Path) -> Result<MenuFile> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("toml") => toml::from_str(data)
            .with_context(|| format!("Invalid menu TOML in {}", path.display())),
        Some("json") => serde_json::from_str(data)
            .with_context(|| format!("Invalid menu JSON in {}", path.display())),
        other => Err(anyhow!(
            "Unsupported menu format {:?} for {}",
            other.unwrap_or(""),
            path.display()
        )),
    }
}

/// Built-in menu shown when no fixture is given.
pub fn sample_menu() -> Menu {
    fn dish(name: &str, description: &str, price: f64) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            description: description.to_string(),
            price,
        }
    }

    let categories = vec![
        MenuCategory {
            title: "Popular".to_string(),
            items: vec![
                dish("Margherita", "Tomato, mozzarella, basil", 8.5),
                dish("Chicken Burger", "Grilled chicken, lettuce, mayo", 9.0),
                dish("Pad Thai", "Rice noodles, peanuts, lime", 10.5),
            ],
        },
        MenuCategory {
            title: "Pizza".to_string(),
            items: vec![
                dish("Margherita", "Tomato, mozzarella, basil", 8.5),
                dish("Pepperoni", "Spicy salami, mozzarella", 10.0),
                dish("Quattro Formaggi", "Four cheeses", 11.0),
                dish("Vegetariana", "Peppers, olives, mushrooms", 9.5),
                dish("Diavola", "Chili, salami, oregano", 10.5),
            ],
        },
        MenuCategory {
            title: "Burgers".to_string(),
            items: vec![
                dish("Classic Burger", "Beef, cheddar, pickles", 9.5),
                dish("Chicken Burger", "Grilled chicken, lettuce, mayo", 9.0),
                dish("Veggie Burger", "Bean patty, avocado", 8.5),
                dish("Double Stack", "Two patties, bacon", 12.0),
            ],
        },
        MenuCategory {
            title: "Noodles".to_string(),
            items: vec![
                dish("Pad Thai", "Rice noodles, peanuts, lime", 10.5),
                dish("Ramen", "Pork broth, egg, scallion", 11.5),
                dish("Chow Mein", "Egg noodles, vegetables", 9.0),
            ],
        },
        MenuCategory {
            title: "Sides".to_string(),
            items: vec![
                dish("Fries", "Sea salt", 3.0),
                dish("Onion Rings", "Beer batter", 3.5),
                dish("Side Salad", "Mixed leaves, vinaigrette", 3.5),
                dish("Garlic Bread", "Butter, parsley", 4.0),
            ],
        },
        MenuCategory {
            title: "Desserts".to_string(),
            items: vec![
                dish("Tiramisu", "Mascarpone, espresso", 5.5),
                dish("Brownie", "Warm, with vanilla ice cream", 5.0),
            ],
        },
        MenuCategory {
            title: "Drinks".to_string(),
            items: vec![
                dish("Cola", "330ml", 2.0),
                dish("Lemonade", "Fresh, homemade", 2.5),
                dish("Iced Tea", "Peach", 2.5),
                dish("Water", "Still or sparkling", 1.5),
            ],
        },
    ];

    let menu = Menu::from_file(MenuFile {
        restaurant: "Corner Kitchen".to_string(),
        sections: categories,
    });
    debug!(sections = menu.sections.len(), "Using built-in sample menu");
    menu
}
