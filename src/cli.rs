use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shop")]
#[command(about = "Terminal storefront for the shop REST API", long_about = None)]
pub struct Args {
    #[arg(short = 'v', long = "verbose", help = "Print request diagnostics")]
    pub verbose: bool,

    #[arg(
        long = "api-endpoint",
        help = "Custom API base URL (e.g., http://localhost:8080/api/v1)"
    )]
    pub api_endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and store the session token
    Login {
        username: String,
        password: String,
    },
    /// Sign out and discard the stored session token
    Logout,
    /// Create a new account
    Register {
        username: String,
        email: String,
        password: String,
        #[arg(long = "first-name")]
        first_name: Option<String>,
        #[arg(long = "last-name")]
        last_name: Option<String>,
        #[arg(long = "phone")]
        phone: Option<String>,
    },
    /// Show the signed-in user's profile
    Whoami,
    /// Browse the product catalog
    Products {
        #[arg(short = 'q', long = "query", help = "Full-text search")]
        query: Option<String>,
        #[arg(long = "min-price")]
        min_price: Option<f64>,
        #[arg(long = "max-price")]
        max_price: Option<f64>,
        #[arg(long = "brand", help = "Brand id filter, repeatable")]
        brand_ids: Vec<i64>,
        #[arg(long = "category")]
        category_id: Option<i64>,
        #[arg(long = "in-stock", help = "Only products currently in stock")]
        in_stock: bool,
        #[arg(long = "min-rating")]
        min_rating: Option<f64>,
        #[arg(long = "page")]
        page: Option<u32>,
        #[arg(long = "size")]
        size: Option<u32>,
        #[arg(long = "sort", help = "Sort order, repeatable (e.g. price,desc)")]
        sort: Vec<String>,
    },
    /// Show one product with its attributes
    Product { id: i64 },
    /// List product categories
    Categories,
    /// List brands
    Brands,
    /// Inspect or edit the cart
    Cart {
        #[command(subcommand)]
        action: CartCommand,
    },
    /// Manage favorite products
    Favorites {
        #[command(subcommand)]
        action: FavoritesCommand,
    },
    /// Manage the comparison list
    Compare {
        #[command(subcommand)]
        action: CompareCommand,
    },
    /// Create, track and pay orders
    Orders {
        #[command(subcommand)]
        action: OrdersCommand,
    },
    /// Read and write product reviews
    Reviews {
        #[command(subcommand)]
        action: ReviewsCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum CartCommand {
    /// Show the cart contents
    Show,
    /// Add a product to the cart
    Add {
        product_id: i64,
        #[arg(default_value_t = 1)]
        quantity: u32,
    },
    /// Change the quantity of a cart line
    Update { product_id: i64, quantity: u32 },
    /// Remove a product from the cart
    Remove { product_id: i64 },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum FavoritesCommand {
    /// List favorite products
    List {
        #[arg(long = "page")]
        page: Option<u32>,
        #[arg(long = "size")]
        size: Option<u32>,
    },
    /// Add or remove a product from favorites
    Toggle { product_id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum CompareCommand {
    /// Show the comparison list side by side
    Show,
    /// Add or remove a product from the comparison list
    Toggle { product_id: i64 },
    /// Empty the comparison list
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum OrdersCommand {
    /// List your orders
    List,
    /// Show one order
    Show { id: i64 },
    /// Check out the current cart
    Create {
        delivery_address: String,
        #[arg(long = "phone")]
        contact_phone: Option<String>,
    },
    /// Pay for an order
    Pay { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum ReviewsCommand {
    /// List reviews for a product
    List {
        product_id: i64,
        #[arg(long = "page")]
        page: Option<u32>,
        #[arg(long = "size")]
        size: Option<u32>,
    },
    /// Review a product (rating 1-5)
    Add {
        product_id: i64,
        rating: u8,
        #[arg(long = "comment")]
        comment: Option<String>,
    },
    /// Delete one of your reviews
    Delete { id: i64 },
}
