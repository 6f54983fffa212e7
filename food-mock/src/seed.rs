//! Demo data

use crate::state::Store;
use shared::models::{
    CartItem, Category, DELIVERY_DELIVERED, ORDER_COMPLETED, ORDER_PENDING, Order, OrderDetail,
    Product, RATING_NOT_GIVEN, User, UserLevel,
};
use shared::{Money, Quantity};

pub const ADMIN_EMAIL: &str = "admin@food.test";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const CUSTOMER_EMAIL: &str = "ana@food.test";
pub const CUSTOMER_PASSWORD: &str = "secret123";
/// User id of [`CUSTOMER_EMAIL`]
pub const CUSTOMER_ID: i64 = 2;

const SEEDED_AT: &str = "2024-03-01 12:00:00";

fn money(amount: &str) -> Money {
    Money::parse(amount).unwrap_or(Money::ZERO)
}

fn user(id: i64, email: &str, password: &str, level: UserLevel) -> User {
    User {
        id,
        email: email.into(),
        password: Some(password.into()),
        user_level: level,
        dt_added: SEEDED_AT.into(),
    }
}

fn category(id: i64, name: &str, desc: &str) -> Category {
    Category {
        id,
        name: name.into(),
        desc: desc.into(),
    }
}

fn product(id: i64, name: &str, price: &str, category: &str) -> Product {
    Product {
        id,
        name: name.into(),
        desc: format!("{name}, made to order"),
        price: money(price),
        stock: Quantity(50),
        category: category.into(),
        image: format!("https://img.food.test/{id}.png"),
    }
}

fn cart_item(id: i64, product: &Product, user_id: i64, quantity: u32) -> CartItem {
    CartItem {
        id,
        product_id: product.id,
        user_id,
        price: product.price,
        quantity: Quantity(quantity),
        total_amount: product.price.times(quantity),
        dt_added: SEEDED_AT.into(),
    }
}

fn order(id: i64, user_id: i64, total: &str, status: &str, delivery: &str, ratings: &str) -> Order {
    Order {
        id,
        user_id,
        total_amount: money(total),
        order_status: status.into(),
        delivery_status: delivery.into(),
        ratings: ratings.into(),
        dt_added: SEEDED_AT.into(),
    }
}

fn detail(id: i64, order_id: i64, product: &Product, quantity: u32) -> OrderDetail {
    OrderDetail {
        id,
        order_id,
        product_id: product.id,
        quantity: Quantity(quantity),
        price: product.price,
        total_amount: product.price.times(quantity),
        dt_added: SEEDED_AT.into(),
    }
}

/// Three users, six categories, five products, a two-row cart for the
/// customer and three orders
///
/// Order 1 is completed, delivered and waiting for a rating.
pub fn demo_store() -> Store {
    let products = vec![
        product(1, "Nasi Lemak", "8.50", "Rice"),
        product(2, "Char Kuey Teow", "9.00", "Noodles"),
        product(3, "Teh Tarik", "2.50", "Drinks"),
        product(4, "Cendol", "4.20", "Desserts"),
        product(5, "Roti Canai", "1.80", "Sides"),
    ];

    Store {
        users: vec![
            user(1, ADMIN_EMAIL, ADMIN_PASSWORD, UserLevel::admin()),
            user(CUSTOMER_ID, CUSTOMER_EMAIL, CUSTOMER_PASSWORD, UserLevel::customer()),
            user(3, "ben@food.test", "password1", UserLevel::customer()),
        ],
        categories: vec![
            category(1, "Rice", "Rice dishes"),
            category(2, "Noodles", "Fried and soup noodles"),
            category(3, "Drinks", "Hot and cold drinks"),
            category(4, "Desserts", "Sweet things"),
            category(5, "Sides", "Small plates"),
            category(6, "Snacks", "Between meals"),
        ],
        cart: vec![
            cart_item(1, &products[0], CUSTOMER_ID, 2),
            cart_item(2, &products[2], CUSTOMER_ID, 1),
        ],
        orders: vec![
            order(1, CUSTOMER_ID, "11.00", ORDER_COMPLETED, DELIVERY_DELIVERED, RATING_NOT_GIVEN),
            order(2, CUSTOMER_ID, "9.00", ORDER_PENDING, ORDER_PENDING, RATING_NOT_GIVEN),
            order(3, 3, "4.20", ORDER_COMPLETED, DELIVERY_DELIVERED, "5"),
        ],
        order_details: vec![
            detail(1, 1, &products[0], 1),
            detail(2, 1, &products[2], 1),
            detail(3, 2, &products[1], 1),
            detail(4, 3, &products[3], 1),
        ],
        products,
        sessions: Default::default(),
    }
}
