//! Joins across resources for display
//!
//! The backend only offers per-resource endpoints, so cart and order views
//! are assembled here: one listing call, then a concurrent batch of
//! per-row lookups. Lookup results are keyed by entity id, never by
//! position, so a failed or reordered response cannot attach the wrong
//! product to a row.

use crate::api::Api;
use crate::http::HttpClient;
use crate::ClientResult;
use futures::future::join_all;
use shared::Money;
use shared::models::{CartItem, Order, OrderDetail, OrderStatus, Product};
use std::collections::{BTreeSet, HashMap};

/// Fetch every distinct product in `ids` concurrently
///
/// Failed lookups are logged and left out of the map.
pub async fn fetch_products<C, I>(api: &Api<C>, ids: I) -> HashMap<i64, Product>
where
    C: HttpClient,
    I: IntoIterator<Item = i64>,
{
    let ids: BTreeSet<i64> = ids.into_iter().collect();
    let products = api.products();
    let results = join_all(ids.iter().map(|&id| products.get(id))).await;

    ids.into_iter()
        .zip(results)
        .filter_map(|(id, result)| match result {
            Ok(product) if product.id == id => Some((id, product)),
            Ok(product) => {
                tracing::warn!(requested = id, returned = product.id, "product id mismatch");
                None
            }
            Err(e) => {
                tracing::warn!(product_id = id, error = %e, "product lookup failed");
                None
            }
        })
        .collect()
}

/// A cart row with its product
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: CartItem,
    pub product: Product,
}

/// Attach products to cart rows, keeping cart order
///
/// Rows whose product is absent from `products` are skipped; the count of
/// skipped rows is returned alongside.
pub fn join_cart(items: &[CartItem], products: &HashMap<i64, Product>) -> (Vec<CartLine>, usize) {
    let mut unresolved = 0;
    let lines = items
        .iter()
        .filter_map(|item| match products.get(&item.product_id) {
            Some(product) => Some(CartLine {
                item: item.clone(),
                product: product.clone(),
            }),
            None => {
                unresolved += 1;
                None
            }
        })
        .collect();
    (lines, unresolved)
}

/// Sum of line totals, rounded to 2 dp
pub fn cart_total(lines: &[CartLine]) -> Money {
    lines
        .iter()
        .map(|line| line.item.total_amount)
        .sum::<Money>()
        .rounded()
}

/// One detail row of an order, with the order's status copied on
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub detail: OrderDetail,
    pub status: OrderStatus,
    /// `None` when the product lookup failed
    pub product: Option<Product>,
}

impl OrderLine {
    pub fn product_name(&self) -> &str {
        self.product.as_ref().map_or("Unknown product", |p| p.name.as_str())
    }
}

/// All lines of one order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBlock {
    pub order: Order,
    pub lines: Vec<OrderLine>,
    pub expanded: bool,
}

impl OrderBlock {
    pub fn order_id(&self) -> i64 {
        self.order.id
    }

    /// Sum of the line totals
    pub fn lines_total(&self) -> Money {
        self.lines
            .iter()
            .map(|line| line.detail.total_amount)
            .sum::<Money>()
            .rounded()
    }

    pub fn awaits_rating(&self) -> bool {
        self.order.awaits_rating()
    }

    /// Replace the order record and re-copy its status onto every line
    pub fn apply_order(&mut self, order: Order) {
        let status = order.status();
        for line in &mut self.lines {
            line.status = status.clone();
        }
        self.order = order;
    }
}

/// The order record and its detail rows, fetched concurrently
pub async fn fetch_order_with_details<C: HttpClient>(
    api: &Api<C>,
    order_id: i64,
) -> ClientResult<(Order, Vec<OrderDetail>)> {
    let orders = api.orders();
    let details = api.order_details();
    futures::try_join!(orders.get(order_id), details.for_order(order_id))
}

/// Build one block per order id, preserving `order_ids` order
///
/// Orders whose record or details cannot be fetched are logged and left
/// out; the rest are still returned.
pub async fn fetch_order_blocks<C: HttpClient>(api: &Api<C>, order_ids: &[i64]) -> Vec<OrderBlock> {
    let fetched = join_all(
        order_ids
            .iter()
            .map(|&id| fetch_order_with_details(api, id)),
    )
    .await;

    let mut orders = Vec::with_capacity(order_ids.len());
    for (&id, result) in order_ids.iter().zip(fetched) {
        match result {
            Ok(pair) => orders.push(pair),
            Err(e) => tracing::warn!(order_id = id, error = %e, "dropping order from history"),
        }
    }

    let product_ids = orders
        .iter()
        .flat_map(|(_, details)| details.iter().map(|d| d.product_id));
    let products = fetch_products(api, product_ids).await;

    orders
        .into_iter()
        .map(|(order, details)| {
            let status = order.status();
            let lines = details
                .into_iter()
                .map(|detail| OrderLine {
                    product: products.get(&detail.product_id).cloned(),
                    status: status.clone(),
                    detail,
                })
                .collect();
            OrderBlock {
                order,
                lines,
                expanded: false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Quantity;

    fn product(id: i64, name: &str) -> Product {
        Product {
            id,
            name: name.into(),
            desc: String::new(),
            price: Money::parse("2.50").unwrap(),
            stock: Quantity(10),
            category: "Mains".into(),
            image: String::new(),
        }
    }

    fn cart_item(id: i64, product_id: i64, total: &str) -> CartItem {
        CartItem {
            id,
            product_id,
            user_id: 5,
            price: Money::parse("2.50").unwrap(),
            quantity: Quantity(1),
            total_amount: Money::parse(total).unwrap(),
            dt_added: String::new(),
        }
    }

    #[test]
    fn test_join_cart_keys_by_product_id() {
        let products = HashMap::from([(2, product(2, "Tea")), (1, product(1, "Rice"))]);
        let items = [cart_item(10, 1, "2.50"), cart_item(11, 2, "5.00")];
        let (lines, unresolved) = join_cart(&items, &products);
        assert_eq!(unresolved, 0);
        assert_eq!(lines[0].product.name, "Rice");
        assert_eq!(lines[1].product.name, "Tea");
    }

    #[test]
    fn test_join_cart_skips_missing_product() {
        let products = HashMap::from([(1, product(1, "Rice"))]);
        let items = [
            cart_item(10, 1, "2.50"),
            cart_item(11, 99, "5.00"),
            cart_item(12, 1, "2.50"),
        ];
        let (lines, unresolved) = join_cart(&items, &products);
        assert_eq!(unresolved, 1);
        assert_eq!(lines.len(), 2);
        assert_eq!(cart_total(&lines).to_string(), "5.00");
    }

    #[test]
    fn test_cart_total_rounds() {
        let products = HashMap::from([(1, product(1, "Rice"))]);
        let items = [cart_item(1, 1, "0.105"), cart_item(2, 1, "0.10")];
        let (lines, _) = join_cart(&items, &products);
        assert_eq!(cart_total(&lines).to_string(), "0.21");
        assert_eq!(cart_total(&[]).to_string(), "0.00");
    }
}
