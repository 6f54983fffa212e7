//! Cart aggregation, removal and checkout against the mock backend

mod common;

use common::{FlakyClient, customer_context, flaky_context, sign_in};
use food_client::ClientError;
use food_client::screens::CartScreen;
use food_mock::MockState;
use food_mock::seed::{CUSTOMER_EMAIL, CUSTOMER_ID, CUSTOMER_PASSWORD};

#[tokio::test]
async fn test_load_joins_products_and_totals() {
    let state = MockState::seeded();
    let mut screen = CartScreen::new(customer_context(&state).await, CUSTOMER_ID);

    let view = screen.load().await.unwrap();
    assert_eq!(view.lines.len(), 2);
    assert_eq!(view.unresolved, 0);
    assert_eq!(view.lines[0].product.name, "Nasi Lemak");
    assert_eq!(view.lines[1].product.name, "Teh Tarik");
    assert_eq!(view.total.to_string(), "19.50");
}

#[tokio::test]
async fn test_only_own_rows_are_shown() {
    let state = MockState::seeded();
    let mut screen = CartScreen::new(customer_context(&state).await, 3);
    let view = screen.load().await.unwrap();
    assert!(view.is_empty());
    assert_eq!(view.total.to_string(), "0.00");
}

#[tokio::test]
async fn test_failed_product_lookup_skips_row() {
    let state = MockState::seeded();
    let client = FlakyClient::new(&state, &["/product/3"]);
    let ctx = flaky_context(client);
    sign_in(&ctx, CUSTOMER_EMAIL, CUSTOMER_PASSWORD).await;
    let mut screen = CartScreen::new(ctx, CUSTOMER_ID);

    let view = screen.load().await.unwrap();
    assert_eq!(view.lines.len(), 1);
    assert_eq!(view.lines[0].product.id, 1);
    assert_eq!(view.unresolved, 1);
    // Only rendered rows count toward the total
    assert_eq!(view.total.to_string(), "17.00");
}

#[tokio::test]
async fn test_deleted_product_skips_row() {
    let state = MockState::seeded();
    state.write().await.products.retain(|p| p.id != 1);
    let mut screen = CartScreen::new(customer_context(&state).await, CUSTOMER_ID);

    let view = screen.load().await.unwrap();
    assert_eq!(view.lines.len(), 1);
    assert_eq!(view.lines[0].product.name, "Teh Tarik");
    assert_eq!(view.unresolved, 1);
}

#[tokio::test]
async fn test_remove_recomputes_total_from_remaining_rows() {
    let state = MockState::seeded();
    let mut screen = CartScreen::new(customer_context(&state).await, CUSTOMER_ID);
    screen.load().await.unwrap();

    screen.remove(1).await.unwrap();

    // Total reflects the list after deletion, not before it
    assert_eq!(screen.view().lines.len(), 1);
    assert_eq!(screen.total().to_string(), "2.50");
    assert!(state.snapshot().await.cart.iter().all(|c| c.id != 1));
}

#[tokio::test]
async fn test_failed_remove_keeps_row() {
    let state = MockState::seeded();
    let mut screen = CartScreen::new(customer_context(&state).await, CUSTOMER_ID);
    screen.load().await.unwrap();
    state.write().await.cart.retain(|c| c.id != 2);

    let err = screen.remove(2).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(screen.view().lines.len(), 2);
    assert_eq!(screen.total().to_string(), "19.50");
}

#[tokio::test]
async fn test_remove_unknown_row() {
    let state = MockState::seeded();
    let mut screen = CartScreen::new(customer_context(&state).await, CUSTOMER_ID);
    screen.load().await.unwrap();
    let err = screen.remove(42).await.unwrap_err();
    assert!(matches!(err, ClientError::NotInLocalState(_)));
}

#[tokio::test]
async fn test_checkout_clears_local_cart_only() {
    let state = MockState::seeded();
    let mut screen = CartScreen::new(customer_context(&state).await, CUSTOMER_ID);
    screen.load().await.unwrap();

    let order = screen.checkout().await.unwrap().expect("order in response");
    assert_eq!(order.user_id, CUSTOMER_ID);
    assert_eq!(order.total_amount.to_string(), "19.50");

    assert!(screen.view().is_empty());
    assert!(screen.total().is_zero());
    assert_eq!(screen.notice().unwrap().message, "Checkout successful");

    let store = state.snapshot().await;
    assert_eq!(store.cart.len(), 2, "server cart rows are not deleted");
    assert_eq!(
        store.order_details.iter().filter(|d| d.order_id == order.id).count(),
        2
    );
}

#[tokio::test]
async fn test_checkout_failure_keeps_cart() {
    let state = MockState::seeded();
    let client = FlakyClient::new(&state, &["/19.50"]);
    let ctx = flaky_context(client);
    sign_in(&ctx, CUSTOMER_EMAIL, CUSTOMER_PASSWORD).await;
    let mut screen = CartScreen::new(ctx, CUSTOMER_ID);
    screen.load().await.unwrap();

    assert!(screen.checkout().await.is_err());
    let notice = screen.notice().unwrap();
    assert!(notice.is_error());
    assert_eq!(notice.message, "Failed to checkout");
    assert_eq!(screen.view().lines.len(), 2);
}

#[tokio::test]
async fn test_empty_cart_checkout_rejected() {
    let state = MockState::seeded();
    let mut screen = CartScreen::new(customer_context(&state).await, 3);
    screen.load().await.unwrap();
    let err = screen.checkout().await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidState(_)));
    assert_eq!(state.snapshot().await.orders.len(), 3);
}
