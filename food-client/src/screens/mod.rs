//! Headless screens
//!
//! Each screen owns the local copy of the data it shows and exposes the
//! user actions as async methods. An action returns its outcome and also
//! leaves a [`Notice`](crate::Notice) for the view to show.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod login;
pub mod order_detail;
pub mod orders;
pub mod register;

pub use admin::{
    AdminResource, CategoryAdmin, CategoryDraft, CrudScreen, CrudState, OrderBoardScreen,
    ProductAdmin, ProductDraft, UserAdmin, UserDraft,
};
pub use cart::{CartScreen, CartView};
pub use catalog::{CatalogScreen, ProductDetailScreen, columns_for_width};
pub use login::LoginScreen;
pub use order_detail::OrderDetailScreen;
pub use orders::OrderHistoryScreen;
pub use register::RegisterScreen;
