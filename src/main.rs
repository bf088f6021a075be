use clap::Parser;
use colored::*;
use std::process;

use shopfront::api::{ApiClient, Pageable, ProductFilters};
use shopfront::cli::{
    Args, CartCommand, Command, CompareCommand, FavoritesCommand, OrdersCommand, ReviewsCommand,
};
use shopfront::config::Config;
use shopfront::error::Result;
use shopfront::models::{NewReview, SaveUser, SignInRequest};
use shopfront::session::{FilesystemTokenStore, SessionManager};
use shopfront::ui::output::{
    display_cart, display_order, display_page_footer, display_product, display_product_details,
    display_review, display_user,
};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config = Config::from_env_and_args(&args);

    let session = SessionManager::new(FilesystemTokenStore::new());
    session.on_expire(|| {
        eprintln!("{}", "Session expired. Please sign in again.".yellow());
    });

    if config.verbose {
        eprintln!(
            "{}",
            format!("[shop] API endpoint: {}", config.api_endpoint).dimmed()
        );
        if session.token().is_some() {
            eprintln!("{}", "[shop] Restored persisted session token".dimmed());
        }
    }

    let client = match ApiClient::new(&config.api_endpoint, session) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&args.command, &client).await {
        eprintln!("{} {}", "Error:".red(), e);
        process::exit(1);
    }
}

async fn run(command: &Command, client: &ApiClient) -> Result<()> {
    match command {
        Command::Login { username, password } => {
            let response = client
                .sign_in(&SignInRequest {
                    username: username.clone(),
                    password: password.clone(),
                })
                .await?;
            client.session().set_token(Some(response.token))?;
            let user = client.profile().await?;
            println!("{}", format!("Signed in as {}.", user.username).green());
        }
        Command::Logout => {
            client.session().set_token(None)?;
            println!("Signed out.");
        }
        Command::Register {
            username,
            email,
            password,
            first_name,
            last_name,
            phone,
        } => {
            let user = client
                .sign_up(&SaveUser {
                    username: username.clone(),
                    email: email.clone(),
                    password: password.clone(),
                    confirm_password: password.clone(),
                    first_name: first_name.clone(),
                    last_name: last_name.clone(),
                    phone: phone.clone(),
                })
                .await?;
            println!(
                "{}",
                format!("Account {} created. You can sign in now.", user.username).green()
            );
        }
        Command::Whoami => {
            if client.session().token().is_none() {
                println!("Not signed in.");
                return Ok(());
            }
            match client.profile().await {
                Ok(user) => display_user(&user),
                Err(e) => {
                    // A token the server no longer accepts is dropped
                    let _ = client.session().set_token(None);
                    return Err(e);
                }
            }
        }
        Command::Products {
            query,
            min_price,
            max_price,
            brand_ids,
            category_id,
            in_stock,
            min_rating,
            page,
            size,
            sort,
        } => {
            let filters = ProductFilters {
                query: query.clone(),
                min_price: *min_price,
                max_price: *max_price,
                brand_ids: brand_ids.clone(),
                category_id: *category_id,
                in_stock: in_stock.then_some(true),
                min_rating: *min_rating,
            };
            let pageable = Pageable {
                page: *page,
                size: *size,
                sort: sort.clone(),
            };
            let result = client.products(&filters, &pageable).await?;
            for product in &result.content {
                display_product(product);
            }
            display_page_footer(&result);
        }
        Command::Product { id } => {
            let product = client.product(*id).await?;
            display_product_details(&product);
        }
        Command::Categories => {
            for category in client.categories().await? {
                match category.parent_id {
                    Some(parent_id) => {
                        println!("{:>6}  {}  (parent {})", category.id, category.name, parent_id)
                    }
                    None => println!("{:>6}  {}", category.id, category.name),
                }
            }
        }
        Command::Brands => {
            for brand in client.brands().await? {
                println!("{:>6}  {}", brand.id, brand.name);
            }
        }
        Command::Cart { action } => match action {
            CartCommand::Show => display_cart(&client.cart().await?),
            CartCommand::Add {
                product_id,
                quantity,
            } => display_cart(&client.add_to_cart(*product_id, *quantity).await?),
            CartCommand::Update {
                product_id,
                quantity,
            } => display_cart(&client.update_cart_quantity(*product_id, *quantity).await?),
            CartCommand::Remove { product_id } => {
                display_cart(&client.remove_from_cart(*product_id).await?)
            }
            CartCommand::Clear => {
                client.clear_cart().await?;
                println!("Cart cleared.");
            }
        },
        Command::Favorites { action } => match action {
            FavoritesCommand::List { page, size } => {
                let pageable = Pageable {
                    page: *page,
                    size: *size,
                    sort: Vec::new(),
                };
                let result = client.favorites(&pageable).await?;
                for product in &result.content {
                    display_product(product);
                }
                display_page_footer(&result);
            }
            FavoritesCommand::Toggle { product_id } => {
                client.toggle_favorite(*product_id).await?;
                println!("Toggled favorite for product {}.", product_id);
            }
        },
        Command::Compare { action } => match action {
            CompareCommand::Show => {
                let products = client.comparison().await?;
                if products.is_empty() {
                    println!("The comparison list is empty.");
                }
                for (i, product) in products.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    display_product_details(product);
                }
            }
            CompareCommand::Toggle { product_id } => {
                let products = client.toggle_comparison(*product_id).await?;
                println!("Comparing {} products.", products.len());
            }
            CompareCommand::Clear => {
                client.clear_comparison().await?;
                println!("Comparison list cleared.");
            }
        },
        Command::Orders { action } => match action {
            OrdersCommand::List => {
                let orders = client.orders().await?;
                if orders.is_empty() {
                    println!("No orders yet.");
                }
                for order in &orders {
                    display_order(order);
                }
            }
            OrdersCommand::Show { id } => display_order(&client.order(*id).await?),
            OrdersCommand::Create {
                delivery_address,
                contact_phone,
            } => {
                let order = client
                    .create_order(delivery_address, contact_phone.as_deref())
                    .await?;
                println!("{}", format!("Order #{} created.", order.id).green());
                display_order(&order);
            }
            OrdersCommand::Pay { id } => {
                let order = client.pay_order(*id).await?;
                println!("{}", format!("Order #{} is now {}.", order.id, order.status).green());
            }
        },
        Command::Reviews { action } => match action {
            ReviewsCommand::List {
                product_id,
                page,
                size,
            } => {
                let pageable = Pageable {
                    page: *page,
                    size: *size,
                    sort: Vec::new(),
                };
                let result = client.product_reviews(*product_id, &pageable).await?;
                for review in &result.content {
                    display_review(review);
                }
                display_page_footer(&result);
            }
            ReviewsCommand::Add {
                product_id,
                rating,
                comment,
            } => {
                let review = client
                    .add_review(&NewReview {
                        product_id: *product_id,
                        rating: *rating,
                        comment: comment.clone(),
                    })
                    .await?;
                println!("{}", format!("Review #{} posted.", review.id).green());
            }
            ReviewsCommand::Delete { id } => {
                client.delete_review(*id).await?;
                println!("Review deleted.");
            }
        },
    }
    Ok(())
}
