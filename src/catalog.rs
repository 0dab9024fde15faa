use crate::{
    category::{Category, CategoryList},
    product::{Product, ProductList},
};
use log::{Level as LogLevel, LevelFilter, Metadata, Record, SetLoggerError};
use serde::Serialize;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};
use ErrorMessage::*;

/// The whole catalog state, built once at startup and handed to every
/// operation. Cross-entity rules live here: product creation requires an
/// existing category, and a category cannot be removed while referenced.
#[derive(Debug, Default)]
pub struct Catalog {
    pub categories: CategoryList,
    pub products: ProductList,
}

#[derive(Debug)]
pub enum ErrorMessage {
    CategoryNotFound,
    ProductNotFound,
    CategoryInUse,
}

#[derive(Debug)]
struct CatalogError {
    message: String,
}

impl ErrorMessage {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            CategoryNotFound => "Category not found",
            ProductNotFound => "Product not found",
            CategoryInUse => "Cannot remove category: there are products associated with it",
        }
    }
}

impl Display for ErrorMessage {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CatalogError {}

impl CatalogError {
    pub fn boxed(message: String) -> Box<dyn Error> {
        Box::new(CatalogError { message })
    }

    pub fn store(message: ErrorMessage) -> Box<dyn Error> {
        CatalogError::boxed(format!("{}", message))
    }
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            categories: CategoryList::new(),
            products: ProductList::new(),
        }
    }

    /// A small explorable catalog for the --seed flag.
    pub fn sample() -> Self {
        let mut catalog = Catalog::new();
        let beverages = catalog.new_category("Beverages", "Drinks");
        let snacks = catalog.new_category("Snacks", "Salty and sweet");
        let _ = catalog.new_product("Cola", "330ml can", 500, 10, beverages);
        let _ = catalog.new_product("Orange juice", "1l bottle", 750, 4, beverages);
        let _ = catalog.new_product("Peanuts", "200g bag", 320, 25, snacks);
        catalog
    }

    pub fn new_category(&mut self, name: &str, description: &str) -> u64 {
        self.categories.add(name, description)
    }

    pub fn list_categories(&self) {
        println!("\nCategories:");
        for category in &self.categories.categories {
            println!("{}", category);
        }
    }

    pub fn find_category(&self, term: &str) -> Option<&Category> {
        self.categories.find(term)
    }

    pub fn update_category(
        &mut self,
        id: u64,
        name: &str,
        description: &str,
    ) -> Result<(), Box<dyn Error>> {
        match self.categories.category_mut(id) {
            Some(category) => {
                category.name = name.to_string();
                category.description = description.to_string();
                Ok(())
            }
            None => Err(CatalogError::store(CategoryNotFound)),
        }
    }

    /// The referential-integrity guard: refuses while any product still
    /// points at the category. There is no cascade.
    pub fn remove_category(&mut self, id: u64) -> Result<(), Box<dyn Error>> {
        if self.products.references_category(id) {
            return Err(CatalogError::store(CategoryInUse));
        }
        self.categories.remove(id);
        Ok(())
    }

    pub fn new_product(
        &mut self,
        name: &str,
        description: &str,
        price: u64,
        quantity: usize,
        category_id: u64,
    ) -> Result<u64, Box<dyn Error>> {
        if self.categories.category(category_id).is_none() {
            return Err(CatalogError::store(CategoryNotFound));
        }
        Ok(self
            .products
            .add(name, description, price, quantity, category_id))
    }

    fn category_name(&self, category_id: u64) -> &str {
        match self.categories.category(category_id) {
            Some(category) => category.name.as_str(),
            None => "(unknown)",
        }
    }

    pub fn list_products(&self) {
        println!("\nProducts:");
        for product in &self.products.products {
            println!(
                "{} | Category: {}",
                product,
                self.category_name(product.category_id)
            );
        }
    }

    /// Every product matching the term by id, by name substring, or by the
    /// resolved category name substring. Case-folded, as in the find
    /// operations of the category list.
    pub fn search_products(&self, term: &str) -> Vec<&Product> {
        let id = term.parse::<u64>().ok();
        let term = term.to_lowercase();
        self.products
            .products
            .iter()
            .filter(|p| {
                Some(p.id) == id
                    || p.name.to_lowercase().contains(&term)
                    || self.category_name(p.category_id).to_lowercase().contains(&term)
            })
            .collect()
    }

    pub fn update_product(
        &mut self,
        id: u64,
        name: &str,
        description: &str,
        price: u64,
        quantity: usize,
    ) -> Result<(), Box<dyn Error>> {
        if self.products.update(id, name, description, price, quantity) {
            Ok(())
        } else {
            Err(CatalogError::store(ProductNotFound))
        }
    }

    pub fn remove_product(&mut self, id: u64) {
        self.products.remove(id);
    }
}

/// Dumps the full record the way the interactive find operations report a
/// match, one JSON document per record.
pub fn print_record<T: Serialize + fmt::Debug>(record: &T) {
    match serde_json::to_string_pretty(record) {
        Ok(json) => println!("{}", json),
        Err(_) => println!("{:#?}", record),
    }
}

struct CatalogLogger;

impl log::Log for CatalogLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= LogLevel::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CatalogLogger = CatalogLogger;

pub fn init(quiet: bool) -> Result<(), SetLoggerError> {
    let level = if quiet {
        LevelFilter::Off
    } else {
        LevelFilter::Info
    };
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}
