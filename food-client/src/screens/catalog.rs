//! Customer catalog and product detail

use crate::http::HttpClient;
use crate::{ClientError, ClientResult, Notice, Route, SharedContext};
use shared::models::{CartItem, CartItemCreate, Product};
use shared::validation::{is_quantity_input, parse_quantity};
use shared::{Money, Quantity};

/// Narrowest a grid cell may get, in points
pub const MIN_ITEM_WIDTH: u32 = 150;

/// Grid columns that fit `width`; at least one
pub fn columns_for_width(width: u32) -> usize {
    ((width / MIN_ITEM_WIDTH) as usize).max(1)
}

/// Product grid of the customer home tab
pub struct CatalogScreen<C> {
    ctx: SharedContext<C>,
    user_id: i64,
    products: Vec<Product>,
    notice: Option<Notice>,
}

impl<C: HttpClient> CatalogScreen<C> {
    pub fn new(ctx: SharedContext<C>, user_id: i64) -> Self {
        Self {
            ctx,
            user_id,
            products: Vec::new(),
            notice: None,
        }
    }

    pub async fn load(&mut self) -> ClientResult<()> {
        match self.ctx.api.products().list().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "products loaded");
                self.products = products;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "error fetching products");
                self.notice = Some(Notice::error("Failed to load products"));
                Err(e)
            }
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Route for a tapped product
    pub fn open_product(&self, product_id: i64) -> Route {
        Route::ProductDetail {
            product_id,
            user_id: self.user_id,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}

pub struct ProductDetailScreen<C> {
    ctx: SharedContext<C>,
    product_id: i64,
    user_id: i64,
    product: Option<Product>,
    quantity: String,
    notice: Option<Notice>,
}

impl<C: HttpClient> ProductDetailScreen<C> {
    pub fn new(ctx: SharedContext<C>, product_id: i64, user_id: i64) -> Self {
        Self {
            ctx,
            product_id,
            user_id,
            product: None,
            quantity: "1".to_string(),
            notice: None,
        }
    }

    /// Fetch the product shown on this screen
    pub async fn load(&mut self) -> ClientResult<()> {
        match self.ctx.api.products().get(self.product_id).await {
            Ok(product) => {
                self.product = Some(product);
                Ok(())
            }
            Err(e) => {
                tracing::error!(product_id = self.product_id, error = %e, "error fetching product details");
                self.notice = Some(Notice::error("Failed to load product details"));
                Err(e)
            }
        }
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    /// Apply an edit of the quantity field
    ///
    /// Returns false and keeps the previous text unless `text` is a positive
    /// integer or empty.
    pub fn set_quantity(&mut self, text: &str) -> bool {
        if is_quantity_input(text) {
            self.quantity = text.to_string();
            true
        } else {
            false
        }
    }

    /// `POST /cart/{productId}/{userId}` with the current quantity
    pub async fn add_to_cart(&mut self) -> ClientResult<Option<CartItem>> {
        let quantity = match parse_quantity(&self.quantity) {
            Ok(q) => q,
            Err(e) => {
                self.notice = Some(Notice::error(e.to_string()));
                return Err(ClientError::Input(e));
            }
        };
        let price = self.product.as_ref().map_or(Money::ZERO, |p| p.price);
        let body = CartItemCreate {
            product_id: self.product_id,
            user_id: self.user_id,
            price,
            quantity: Quantity(quantity),
        };

        match self.ctx.api.cart().add(&body).await {
            Ok(item) => {
                tracing::info!(product_id = self.product_id, quantity, "product added to cart");
                self.notice = Some(Notice::success("Product added to cart successfully"));
                Ok(item)
            }
            Err(e) => {
                tracing::error!(error = %e, "error adding product to cart");
                self.notice = Some(Notice::error("Failed to add product to cart"));
                Err(e)
            }
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_for_width() {
        assert_eq!(columns_for_width(390), 2);
        assert_eq!(columns_for_width(450), 3);
        assert_eq!(columns_for_width(100), 1);
        assert_eq!(columns_for_width(0), 1);
    }
}
