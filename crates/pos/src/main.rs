//! PoliMarket - point-of-sale terminal.
//!
//! An interactive terminal binding over the domain store. All behavior
//! lives in the `polimarket-pos` library; this binary parses one command
//! per line, invokes the matching store command, and prints the resulting
//! state.
//!
//! # Architecture
//!
//! - Domain store for catalog, cart, users, and session state
//! - File-backed persistence mirroring the cart and session snapshots
//! - Gemini client for on-demand product descriptions (disabled without
//!   `GEMINI_API_KEY`)
//!
//! # Usage
//!
//! ```bash
//! polimarket
//! polimarket --data-dir /tmp/polimarket
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
// This binary is the terminal surface; stdout is its UI.
#![allow(clippy::print_stdout)]

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;
use tokio::io::{AsyncBufReadExt, BufReader};

use polimarket_core::{ProductId, Username};
use polimarket_pos::config::PosConfig;
use polimarket_pos::gemini::DescriptionGenerator;
use polimarket_pos::storage::{FileBackend, Persistence};
use polimarket_pos::store::PosStore;

#[derive(Parser)]
#[command(name = "polimarket")]
#[command(author, version, about = "PoliMarket point-of-sale terminal")]
struct Cli {
    /// Directory for persisted state (overrides POLIMARKET_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

const HELP: &str = "\
Commands:
  login <username> <password>   Log in (seed accounts use password 123)
  logout                        Log out
  catalog                       List products
  cart                          Show cart lines, item count, and total
  view <product-id>             Open a product's detail panel
  close                         Close the detail panel
  describe                      Generate an AI description for the open product
  add <product-id>              Add one unit to the cart
  qty <product-id> <delta>      Change a line's quantity (e.g. qty p1 -2)
  checkout                      Settle the cart against stock
  add-product <name>|<price>|<stock>|<image-url>   (admin)
  sellers                       List sellers (admin)
  add-seller <username> <display name...>          (admin)
  delete-seller <username>                         (admin)
  help                          Show this help
  quit                          Exit";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "polimarket=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut config = PosConfig::from_env();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let backend = match FileBackend::open(&config.data_dir) {
        Ok(backend) => backend,
        Err(error) => {
            tracing::error!(%error, data_dir = %config.data_dir.display(), "failed to open data directory");
            std::process::exit(1);
        }
    };

    let mut store = PosStore::new(Persistence::new(backend));
    let generator = DescriptionGenerator::from_config(config.gemini.as_ref());

    println!("PoliMarket - type 'help' for commands, 'quit' to exit.");
    if !generator.is_configured() {
        println!("(AI descriptions are disabled: GEMINI_API_KEY is not set)");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print_prompt(&store);
        let Ok(Some(line)) = lines.next_line().await else {
            break;
        };
        if !dispatch(&mut store, &generator, line.trim()).await {
            break;
        }
    }
}

fn print_prompt(store: &PosStore) {
    match store.session() {
        Some(user) => print!("{} ({})> ", user.username, user.role),
        None => print!("> "),
    }
    let _ = std::io::stdout().flush();
}

/// Handle one input line. Returns `false` when the session should end.
async fn dispatch(store: &mut PosStore, generator: &DescriptionGenerator, line: &str) -> bool {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return true;
    };
    let rest = line.strip_prefix(command).unwrap_or("").trim();

    match command {
        "help" => println!("{HELP}"),
        "quit" | "exit" => return false,
        "login" => cmd_login(store, rest),
        "logout" => {
            store.logout();
            println!("Logged out.");
        }
        "catalog" => cmd_catalog(store),
        "cart" => cmd_cart(store),
        "view" => cmd_view(store, rest),
        "close" => store.close_product(),
        "describe" => cmd_describe(store, generator).await,
        "add" => cmd_add(store, rest),
        "qty" => cmd_qty(store, rest),
        "checkout" => cmd_checkout(store),
        "add-product" => cmd_add_product(store, rest),
        "sellers" => cmd_sellers(store),
        "add-seller" => cmd_add_seller(store, rest),
        "delete-seller" => cmd_delete_seller(store, rest),
        other => println!("Unknown command '{other}'. Type 'help' for the list."),
    }
    true
}

fn cmd_login(store: &mut PosStore, rest: &str) {
    let mut parts = rest.split_whitespace();
    let (Some(username), Some(password)) = (parts.next(), parts.next()) else {
        println!("Usage: login <username> <password>");
        return;
    };

    if store.login(username, password) {
        let user = store.session().map_or_else(String::new, |u| u.name.clone());
        println!("Bienvenido, {user}!");
    } else if let Some(error) = store.login_error() {
        println!("{error}");
    }
}

fn cmd_catalog(store: &PosStore) {
    for product in store.catalog() {
        println!(
            "{:>14}  {:<24} {:>10}  stock {}",
            product.id, product.name, product.price, product.stock
        );
    }
}

fn cmd_cart(store: &PosStore) {
    if store.cart().is_empty() {
        println!("The cart is empty.");
        return;
    }
    for line in store.cart() {
        println!(
            "{:>3} x {:<24} {:>10}  = {}",
            line.quantity,
            line.name,
            line.price,
            line.line_total()
        );
    }
    println!(
        "{} items, total {}",
        store.cart_item_count(),
        store.cart_total()
    );
}

fn cmd_view(store: &mut PosStore, rest: &str) {
    if rest.is_empty() {
        println!("Usage: view <product-id>");
        return;
    }
    let id = ProductId::new(rest);
    if !store.open_product(&id) {
        println!("No product with id '{rest}'.");
        return;
    }
    if let Some(product) = store.catalog().iter().find(|p| p.id == id) {
        println!("{} - {} (stock {})", product.name, product.price, product.stock);
        println!("{}", product.image_url);
        println!("Type 'describe' for an AI sales description.");
    }
}

async fn cmd_describe(store: &mut PosStore, generator: &DescriptionGenerator) {
    let Some(product_name) = store.begin_description_generation() else {
        println!("Open a product first with 'view <product-id>'.");
        return;
    };

    println!("Generating a description for {product_name}...");
    let description = generator.generate(&product_name).await;
    store.finish_description_generation(description);

    println!("{}", store.ai().description);
    if let Some(error) = generator.last_error() {
        println!("({error})");
    }
}

fn cmd_add(store: &mut PosStore, rest: &str) {
    if rest.is_empty() {
        println!("Usage: add <product-id>");
        return;
    }
    store.add_to_cart(&ProductId::new(rest));
    println!("{} items in the cart.", store.cart_item_count());
}

fn cmd_qty(store: &mut PosStore, rest: &str) {
    let mut parts = rest.split_whitespace();
    let (Some(id), Some(delta)) = (parts.next(), parts.next()) else {
        println!("Usage: qty <product-id> <delta>");
        return;
    };
    let Ok(delta) = delta.parse::<i64>() else {
        println!("Delta must be an integer, e.g. qty p1 -2");
        return;
    };
    store.update_quantity(&ProductId::new(id), delta);
    println!("{} items in the cart.", store.cart_item_count());
}

fn cmd_checkout(store: &mut PosStore) {
    match store.checkout() {
        Some(total) => println!("Venta registrada por un total de {total}!"),
        None => println!("The cart is empty."),
    }
}

fn cmd_add_product(store: &mut PosStore, rest: &str) {
    if !is_admin(store) {
        return;
    }

    let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
    let [name, price, stock, image_url] = fields.as_slice() else {
        println!("Usage: add-product <name>|<price>|<stock>|<image-url>");
        return;
    };

    store.open_add_product_form();
    store.set_new_product_name(*name);
    store.set_new_product_price(price.parse::<Decimal>().ok());
    store.set_new_product_stock(stock.parse::<i64>().ok());
    store.set_new_product_image_url(*image_url);

    if store.submit_new_product() {
        let newest = store.catalog().first();
        let id = newest.map_or_else(String::new, |p| p.id.to_string());
        println!("Product added with id {id}.");
    } else {
        println!("Rejected: name and image must be non-blank, price > 0, stock >= 0.");
        store.close_add_product_form();
    }
}

fn cmd_sellers(store: &mut PosStore) {
    if !is_admin(store) {
        return;
    }
    store.open_manage_sellers();
    for seller in store.sellers() {
        println!("{:<16} {}", seller.username, seller.name);
    }
}

fn cmd_add_seller(store: &mut PosStore, rest: &str) {
    if !is_admin(store) {
        return;
    }

    let mut parts = rest.splitn(2, char::is_whitespace);
    let (Some(username), Some(name)) = (parts.next(), parts.next()) else {
        println!("Usage: add-seller <username> <display name...>");
        return;
    };

    store.set_new_seller_username(username);
    store.set_new_seller_name(name.trim());

    if store.submit_new_seller() {
        println!("Seller '{username}' added (default password 123).");
    } else if let Some(error) = store.add_seller_error() {
        println!("{error}");
    } else {
        println!("Rejected: username and name must be non-blank.");
    }
}

fn cmd_delete_seller(store: &mut PosStore, rest: &str) {
    if !is_admin(store) {
        return;
    }

    let Ok(username) = Username::parse(rest) else {
        println!("Usage: delete-seller <username>");
        return;
    };

    // The store operation itself has no role check; keep the terminal
    // binding to seller rows like the original interface does.
    let is_seller = store
        .sellers()
        .any(|seller| seller.username == username);
    if !is_seller {
        println!("No seller named '{username}'.");
        return;
    }

    store.delete_seller(&username);
    println!("Seller '{username}' deleted.");
}

fn is_admin(store: &PosStore) -> bool {
    let admin = store.session().is_some_and(|user| user.role.is_admin());
    if !admin {
        println!("Admin login required.");
    }
    admin
}
