use crate::models::{Cart, Order, Page, Product, ProductDetails, Review, User};
use colored::*;

/// One catalog row: id, title, price, rating, availability.
pub fn display_product(product: &Product) {
    let stock = if product.quantity > 0 {
        "in stock".green()
    } else {
        "out of stock".red()
    };
    println!(
        "{:>6}  {:<40}  {:>10.2}  {}  {}",
        product.id,
        product.title,
        product.price,
        format!("{:.1}*", product.average_rating).yellow(),
        stock
    );
}

pub fn display_product_details(product: &ProductDetails) {
    println!("{}", product.title.bold());
    println!(
        "{} / {}  {:.1}*  {:.2}",
        product.brand_name, product.category_name, product.average_rating, product.price
    );
    if product.quantity > 0 {
        println!("{}", format!("{} in stock", product.quantity).green());
    } else {
        println!("{}", "out of stock".red());
    }
    if !product.description.is_empty() {
        println!();
        println!("{}", product.description);
    }
    if !product.attributes.is_empty() {
        println!();
        for attribute in &product.attributes {
            println!("  {:<24} {}", attribute.name, attribute.value);
        }
    }
}

/// Footer line for paginated listings, e.g. "page 1 of 5 (42 items)".
pub fn display_page_footer<T>(page: &Page<T>) {
    if page.empty {
        println!("{}", "No results.".dimmed());
        return;
    }
    println!(
        "{}",
        format!(
            "page {} of {} ({} items)",
            page.number + 1,
            page.total_pages,
            page.total_elements
        )
        .dimmed()
    );
}

pub fn display_cart(cart: &Cart) {
    if cart.items.is_empty() {
        println!("Your cart is empty.");
        return;
    }
    for item in &cart.items {
        println!(
            "{:>6}  {:<40}  {:>3} x {:>8.2}",
            item.product_id, item.product_title, item.quantity, item.price_per_unit
        );
    }
    println!(
        "{}",
        format!("total: {:.2} ({} items)", cart.total_price, cart.total_quantity).bold()
    );
}

pub fn display_order(order: &Order) {
    println!(
        "{}  {}  {:>10.2}  {}",
        format!("#{}", order.id).bold(),
        order.status.to_string().cyan(),
        order.total_price,
        order.created_at.dimmed()
    );
    println!("  deliver to: {}", order.delivery_address);
    if !order.contact_phone.is_empty() {
        println!("  contact: {}", order.contact_phone);
    }
    for item in &order.items {
        println!(
            "  {:>6}  {:<40}  {:>3} x {:>8.2}",
            item.product_id, item.product_title, item.quantity, item.price_at_purchase
        );
    }
}

pub fn display_user(user: &User) {
    println!("{} <{}>", user.username.bold(), user.email);
    let name = [user.first_name.as_deref(), user.last_name.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    if !name.is_empty() {
        println!("  name: {}", name);
    }
    if let Some(phone) = &user.phone {
        println!("  phone: {}", phone);
    }
    if !user.roles.is_empty() {
        println!("  roles: {}", user.roles.join(", "));
    }
}

pub fn display_review(review: &Review) {
    println!(
        "{}  {}  {}",
        format!("{}*", review.rating).yellow(),
        review.username.bold(),
        review.created_at.dimmed()
    );
    if let Some(comment) = &review.comment {
        println!("  {}", comment);
    }
}
