use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Prices are stored in cents; the prompt layer converts decimal input.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub quantity: usize,
    pub category_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductList {
    pub products: Vec<Product>,
    next_id: u64,
}

impl Display for Product {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{} - {} | {} | Qty: {}",
            self.id,
            self.name,
            format_price(self.price),
            self.quantity,
        )
    }
}

pub fn format_price(price: u64) -> String {
    let numeral = price / 100;
    let decimal = price % 100;

    format!("${}.{}", numeral, format_args!("{:02}", decimal))
}

impl Product {
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    pub fn set_price(&mut self, price: u64) {
        self.price = price;
    }

    pub fn set_quantity(&mut self, quantity: usize) {
        self.quantity = quantity;
    }
}

#[allow(dead_code)]
impl ProductList {
    pub fn new() -> Self {
        ProductList {
            products: Vec::new(),
            next_id: 1,
        }
    }

    pub fn add(
        &mut self,
        name: &str,
        description: &str,
        price: u64,
        quantity: usize,
        category_id: u64,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let now = Utc::now();
        self.products.push(Product {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price,
            quantity,
            category_id,
            created_at: now,
            updated_at: now,
        });
        info!("Product {} created", id);
        id
    }

    pub fn product(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn product_mut(&mut self, id: u64) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// Overwrites the four editable fields and stamps `updated_at`. The id,
    /// category reference and creation time are untouched.
    pub fn update(
        &mut self,
        id: u64,
        name: &str,
        description: &str,
        price: u64,
        quantity: usize,
    ) -> bool {
        match self.product_mut(id) {
            Some(product) => {
                product.set_name(name);
                product.set_description(description);
                product.set_price(price);
                product.set_quantity(quantity);
                product.updated_at = Utc::now();
                info!("Product {} updated", id);
                true
            }
            None => false,
        }
    }

    /// Unconditional removal, no existence check; nothing references a product.
    pub fn remove(&mut self, id: u64) {
        self.products.retain(|p| p.id != id);
        info!("Product {} removed", id);
    }

    pub fn references_category(&self, category_id: u64) -> bool {
        self.products.iter().any(|p| p.category_id == category_id)
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}

impl Default for ProductList {
    fn default() -> Self {
        ProductList::new()
    }
}
