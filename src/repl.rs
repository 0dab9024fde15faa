use {
    crate::catalog::{self, print_record, Catalog},
    clap::Parser,
    std::{
        error::Error,
        fmt::{self, Display, Formatter},
        io::{stdin, stdout, Write},
    },
    ErrorMessage::*,
};

struct Prompt;

#[derive(Parser, Debug)]
#[command(about = "Interactive category and product inventory manager")]
pub struct Cli {
    /// Start with a small sample catalog
    #[clap(long, short)]
    pub seed: bool,
    /// Suppress info logging
    #[clap(long, short)]
    pub quiet: bool,
}

#[derive(Debug)]
pub enum ErrorMessage {
    InvalidOption,
    InvalidNumber,
    InvalidPrice,
    InvalidQuantity,
    CategoryNotFound,
    ProductNotFound,
    NoProductsFound,
}

impl ErrorMessage {
    pub(crate) fn as_str(&self) -> &'static str {
        match *self {
            InvalidOption => "Invalid option",
            InvalidNumber => "Invalid number",
            InvalidPrice => "Invalid price",
            InvalidQuantity => "Invalid quantity",
            CategoryNotFound => "Category not found",
            ProductNotFound => "Product not found",
            NoProductsFound => "No products found",
        }
    }
}

impl Display for ErrorMessage {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug)]
struct ReplError {
    message: String,
}

impl Display for ReplError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ReplError {}

impl ReplError {
    pub fn boxed(message: String) -> Box<dyn Error> {
        Box::new(ReplError { message })
    }

    pub fn base(message: ErrorMessage) -> Box<dyn Error> {
        ReplError::boxed(format!("{}", message))
    }
}

/// The prompt contract: print the prompt, block for a line, hand back the
/// trimmed input. All coercion happens at the call site.
fn ask(prompt: &str) -> Result<String, Box<dyn Error>> {
    print!("{}", prompt);
    stdout().flush()?;
    let mut input = String::new();
    match stdin().read_line(&mut input) {
        Ok(_) => Ok(input.trim().to_string()),
        Err(e) => Err(Box::new(e)),
    }
}

fn read_number(prompt: &str) -> Result<u64, Box<dyn Error>> {
    match ask(prompt)?.parse::<u64>() {
        Ok(number) => Ok(number),
        Err(_) => Err(ReplError::base(InvalidNumber)),
    }
}

fn read_quantity(prompt: &str) -> Result<usize, Box<dyn Error>> {
    match ask(prompt)?.parse::<usize>() {
        Ok(quantity) => Ok(quantity),
        Err(_) => Err(ReplError::base(InvalidQuantity)),
    }
}

/// Accepts decimal input with either separator ("5.99" or "5,99") and
/// converts to cents.
fn read_price(prompt: &str) -> Result<u64, Box<dyn Error>> {
    let input = ask(prompt)?.replace(',', ".");
    match input.parse::<f64>() {
        Ok(price) if price >= 0.0 => Ok((price * 100.0).round() as u64),
        _ => Err(ReplError::base(InvalidPrice)),
    }
}

impl Prompt {
    fn create_category(catalog: &mut Catalog) -> Result<(), Box<dyn Error>> {
        let name = ask("Category name: ")?;
        let description = ask("Description: ")?;
        catalog.new_category(&name, &description);
        println!("Category created successfully!");
        Ok(())
    }

    fn find_category(catalog: &Catalog) -> Result<(), Box<dyn Error>> {
        let term = ask("Search by ID or name: ")?;
        match catalog.find_category(&term) {
            Some(category) => {
                println!("Category found:");
                print_record(category);
                Ok(())
            }
            None => Err(ReplError::base(CategoryNotFound)),
        }
    }

    fn update_category(catalog: &mut Catalog) -> Result<(), Box<dyn Error>> {
        let id = read_number("Category ID: ")?;
        if catalog.categories.category(id).is_none() {
            return Err(ReplError::base(CategoryNotFound));
        }
        let name = ask("New name: ")?;
        let description = ask("New description: ")?;
        catalog.update_category(id, &name, &description)?;
        println!("Category updated.");
        Ok(())
    }

    fn remove_category(catalog: &mut Catalog) -> Result<(), Box<dyn Error>> {
        let id = read_number("ID of the category to remove: ")?;
        catalog.remove_category(id)?;
        println!("Category removed.");
        Ok(())
    }

    fn create_product(catalog: &mut Catalog) -> Result<(), Box<dyn Error>> {
        let name = ask("Product name: ")?;
        let description = ask("Description: ")?;
        let price = read_price("Price: ")?;
        let quantity = read_quantity("Quantity: ")?;
        let category_id = read_number("Category ID: ")?;
        catalog.new_product(&name, &description, price, quantity, category_id)?;
        println!("Product created successfully!");
        Ok(())
    }

    fn find_product(catalog: &Catalog) -> Result<(), Box<dyn Error>> {
        let term = ask("Search by ID, name or category: ")?;
        let results = catalog.search_products(&term);
        if results.is_empty() {
            return Err(ReplError::base(NoProductsFound));
        }
        for product in results {
            print_record(product);
        }
        Ok(())
    }

    fn update_product(catalog: &mut Catalog) -> Result<(), Box<dyn Error>> {
        let id = read_number("Product ID: ")?;
        if catalog.products.product(id).is_none() {
            return Err(ReplError::base(ProductNotFound));
        }
        let name = ask("New name: ")?;
        let description = ask("New description: ")?;
        let price = read_price("New price: ")?;
        let quantity = read_quantity("New quantity: ")?;
        catalog.update_product(id, &name, &description, price, quantity)?;
        println!("Product updated.");
        Ok(())
    }

    fn remove_product(catalog: &mut Catalog) -> Result<(), Box<dyn Error>> {
        let id = read_number("ID of the product to remove: ")?;
        catalog.remove_product(id);
        println!("Product removed.");
        Ok(())
    }
}

fn print_menu() {
    println!(
        "\n==== MENU ====\n\
         1. Create category\n\
         2. List categories\n\
         3. Find category\n\
         4. Update category\n\
         5. Remove category\n\
         6. Create product\n\
         7. List products\n\
         8. Find product\n\
         9. Update product\n\
         10. Remove product\n\
         0. Exit"
    );
}

/// Reads the menu selection. `None` means stdin was closed, which the loop
/// treats as exit.
fn readline() -> Result<Option<String>, Box<dyn Error>> {
    print!("Choose an option: ");
    stdout().flush()?;
    let mut buffer = String::new();
    match stdin().read_line(&mut buffer) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(buffer.trim().to_string())),
        Err(e) => Err(Box::new(e)),
    }
}

fn resolve_selection(selection: &str, catalog: &mut Catalog) -> Result<bool, Box<dyn Error>> {
    match selection {
        "1" => Prompt::create_category(catalog).map(|_| true),
        "2" => {
            catalog.list_categories();
            Ok(true)
        }
        "3" => Prompt::find_category(catalog).map(|_| true),
        "4" => Prompt::update_category(catalog).map(|_| true),
        "5" => Prompt::remove_category(catalog).map(|_| true),
        "6" => Prompt::create_product(catalog).map(|_| true),
        "7" => {
            catalog.list_products();
            Ok(true)
        }
        "8" => Prompt::find_product(catalog).map(|_| true),
        "9" => Prompt::update_product(catalog).map(|_| true),
        "10" => Prompt::remove_product(catalog).map(|_| true),
        "0" => {
            println!("Goodbye.");
            Ok(false)
        }
        _ => Err(ReplError::base(InvalidOption)),
    }
}

/// Every error is local to the current operation: report it and re-render
/// the menu. The loop only ends on the exit selection or end of input.
fn run_repl(catalog: &mut Catalog) -> Result<(), Box<dyn Error>> {
    loop {
        print_menu();
        let selection = match readline()? {
            Some(selection) => selection,
            None => break,
        };
        match resolve_selection(&selection, catalog) {
            Ok(true) => continue,
            Ok(false) => break,
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}

pub fn run(args: Cli) -> Result<(), Box<dyn Error>> {
    catalog::init(args.quiet)?;
    let mut catalog = if args.seed {
        Catalog::sample()
    } else {
        Catalog::new()
    };
    run_repl(&mut catalog)
}
