//! Seed data installed at store construction.

use polimarket_core::{Price, ProductId, Role, Username};

use crate::models::{Product, User};

/// Default password assigned to seed accounts and newly added sellers.
pub const DEFAULT_PASSWORD: &str = "123";

/// The authoritative user list at first start: one admin, four sellers.
#[must_use]
pub fn users() -> Vec<User> {
    vec![
        seed_user("mariocas", Role::Admin, "Mario Casas"),
        seed_user("jabuitrago", Role::Seller, "J. A. Buitrago"),
        seed_user("jleal", Role::Seller, "J. Leal"),
        seed_user("jpineda", Role::Seller, "J. Pineda"),
        seed_user("kgonzales", Role::Seller, "K. Gonzales"),
    ]
}

/// The starting catalog.
#[must_use]
pub fn catalog() -> Vec<Product> {
    vec![
        seed_product("p1", "Café Colombiano", 1550, 50, "https://picsum.photos/id/1060/400/300"),
        seed_product("p2", "Teclado Mecánico", 12000, 25, "https://picsum.photos/id/5/400/300"),
        seed_product("p3", "Libreta de Notas", 875, 100, "https://picsum.photos/id/24/400/300"),
        seed_product("p4", "Audífonos Inalámbricos", 8525, 40, "https://picsum.photos/id/1075/400/300"),
        seed_product("p5", "Botella de Agua", 2200, 80, "https://picsum.photos/id/1025/400/300"),
        seed_product("p6", "Mochila Urbana", 7500, 30, "https://picsum.photos/id/10/400/300"),
    ]
}

fn seed_user(username: &str, role: Role, name: &str) -> User {
    User {
        username: Username::parse(username).expect("seed usernames are valid"),
        password: DEFAULT_PASSWORD.to_owned(),
        role,
        name: name.to_owned(),
    }
}

fn seed_product(id: &str, name: &str, price_cents: i64, stock: i64, image_url: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_minor(price_cents, 2),
        stock,
        image_url: image_url.to_owned(),
    }
}
