//! Order history and rating against the mock backend

mod common;

use common::{FlakyClient, customer_context, flaky_context, sign_in};
use food_client::ClientError;
use food_client::screens::{OrderDetailScreen, OrderHistoryScreen};
use food_mock::MockState;
use food_mock::seed::{CUSTOMER_EMAIL, CUSTOMER_ID, CUSTOMER_PASSWORD};
use shared::models::RATING_NOT_GIVEN;

#[tokio::test]
async fn test_history_groups_lines_by_order() {
    let state = MockState::seeded();
    let mut screen = OrderHistoryScreen::new(customer_context(&state).await, CUSTOMER_ID);
    screen.load().await.unwrap();

    let ids: Vec<i64> = screen.blocks().iter().map(|b| b.order_id()).collect();
    assert_eq!(ids, vec![1, 2]);

    let first = screen.block(1).unwrap();
    assert_eq!(first.lines.len(), 2);
    assert!(first.lines.iter().all(|l| l.status.order_status == "Completed"));
    assert_eq!(first.lines[0].product_name(), "Nasi Lemak");
    assert_eq!(first.lines_total().to_string(), "11.00");
    assert!(first.awaits_rating());
    assert!(!screen.block(2).unwrap().awaits_rating());
}

#[tokio::test]
async fn test_failed_order_is_dropped_others_kept() {
    let state = MockState::seeded();
    let client = FlakyClient::new(&state, &["/orderdetails/user/2"]);
    let ctx = flaky_context(client);
    sign_in(&ctx, CUSTOMER_EMAIL, CUSTOMER_PASSWORD).await;
    let mut screen = OrderHistoryScreen::new(ctx, CUSTOMER_ID);
    screen.load().await.unwrap();

    let ids: Vec<i64> = screen.blocks().iter().map(|b| b.order_id()).collect();
    assert_eq!(ids, vec![1]);
}

#[tokio::test]
async fn test_missing_product_keeps_line() {
    let state = MockState::seeded();
    let client = FlakyClient::new(&state, &["/product/3"]);
    let ctx = flaky_context(client);
    sign_in(&ctx, CUSTOMER_EMAIL, CUSTOMER_PASSWORD).await;
    let mut screen = OrderHistoryScreen::new(ctx, CUSTOMER_ID);
    screen.load().await.unwrap();

    let block = screen.block(1).unwrap();
    assert_eq!(block.lines.len(), 2);
    assert!(block.lines[1].product.is_none());
    assert_eq!(block.lines[1].product_name(), "Unknown product");
}

#[tokio::test]
async fn test_toggle() {
    let state = MockState::seeded();
    let mut screen = OrderHistoryScreen::new(customer_context(&state).await, CUSTOMER_ID);
    screen.load().await.unwrap();
    assert_eq!(screen.toggle(1), Some(true));
    assert_eq!(screen.toggle(1), Some(false));
    assert_eq!(screen.toggle(99), None);
}

#[tokio::test]
async fn test_rate_replaces_only_ratings() {
    let state = MockState::seeded();
    let mut screen = OrderHistoryScreen::new(customer_context(&state).await, CUSTOMER_ID);
    screen.load().await.unwrap();

    // Server record moved on since the history was loaded
    state.write().await.orders[0].dt_added = "2024-03-02 08:00:00".into();

    screen.rate(1, 4).await.unwrap();

    let block = screen.block(1).unwrap();
    assert_eq!(block.order.ratings, "4");
    assert!(!block.awaits_rating());
    assert!(block.lines.iter().all(|l| l.status.ratings == "4"));

    let stored = state.snapshot().await.orders[0].clone();
    assert_eq!(stored.ratings, "4");
    assert_eq!(stored.dt_added, "2024-03-02 08:00:00");
    assert_eq!(stored.total_amount.to_string(), "11.00");
}

#[tokio::test]
async fn test_rate_rejects_out_of_range_without_request() {
    let state = MockState::seeded();
    let client = FlakyClient::new(&state, &[]);
    let calls = client.counter();
    let ctx = flaky_context(client);
    sign_in(&ctx, CUSTOMER_EMAIL, CUSTOMER_PASSWORD).await;
    let mut screen = OrderHistoryScreen::new(ctx, CUSTOMER_ID);
    screen.load().await.unwrap();
    let before = calls.load(std::sync::atomic::Ordering::SeqCst);

    let err = screen.rate(1, 6).await.unwrap_err();
    assert!(matches!(err, ClientError::Input(_)));
    assert!(screen.rate(1, 0).await.is_err());
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), before);
    assert_eq!(state.snapshot().await.orders[0].ratings, RATING_NOT_GIVEN);
}

#[tokio::test]
async fn test_rate_requires_completed_delivered_unrated() {
    let state = MockState::seeded();
    let mut screen = OrderHistoryScreen::new(customer_context(&state).await, CUSTOMER_ID);
    screen.load().await.unwrap();

    let err = screen.rate(2, 5).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidState(_)));
    let err = screen.rate(3, 5).await.unwrap_err();
    assert!(matches!(err, ClientError::NotInLocalState(_)));
}

#[tokio::test]
async fn test_order_detail_grand_total() {
    let state = MockState::seeded();
    let total = shared::Money::parse("11.00").ok();
    let mut screen = OrderDetailScreen::new(customer_context(&state).await, 1, total);
    screen.load().await.unwrap();
    assert_eq!(screen.details().len(), 2);
    assert_eq!(screen.grand_total().to_string(), "11.00");
    assert_eq!(screen.total_amount(), total);
}
