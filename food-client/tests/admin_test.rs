//! Admin back-office screens against the mock backend

mod common;

use common::{FlakyClient, admin_context, flaky_context, sign_in};
use food_client::screens::{
    CategoryAdmin, CategoryDraft, CrudScreen, CrudState, OrderBoardScreen, ProductAdmin,
    ProductDraft, UserAdmin,
};
use food_client::{ClientError, Route};
use food_mock::MockState;
use food_mock::seed::{ADMIN_EMAIL, ADMIN_PASSWORD};
use shared::models::{DELIVERY_DELIVERED, ORDER_CANCELLED, ORDER_COMPLETED, StatusAction};

#[tokio::test]
async fn test_category_add_appends() {
    let state = MockState::seeded();
    let mut screen = CrudScreen::<CategoryAdmin, _>::new(admin_context(&state).await);
    screen.load().await.unwrap();
    assert_eq!(screen.items().len(), 6);

    let added = screen
        .add(CategoryDraft {
            name: "Soups".into(),
            desc: "Warm bowls".into(),
        })
        .await
        .unwrap();
    assert_eq!(added.id, 7);
    assert_eq!(screen.items().last().unwrap().name, "Soups");
    assert_eq!(screen.notice().unwrap().message, "Category added successfully!");
}

#[tokio::test]
async fn test_category_add_requires_fields() {
    let state = MockState::seeded();
    let mut screen = CrudScreen::<CategoryAdmin, _>::new(admin_context(&state).await);
    screen.load().await.unwrap();

    let err = screen
        .add(CategoryDraft {
            name: "Soups".into(),
            desc: "  ".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Input(_)));
    assert_eq!(
        screen.notice().unwrap().message,
        "Name and description are required fields."
    );
    assert_eq!(state.snapshot().await.categories.len(), 6);
}

#[tokio::test]
async fn test_delete_unknown_id_is_rejected() {
    let state = MockState::seeded();
    let mut screen = CrudScreen::<CategoryAdmin, _>::new(admin_context(&state).await);
    screen.load().await.unwrap();
    let err = screen.request_delete(99).unwrap_err();
    assert!(matches!(err, ClientError::NotInLocalState(_)));
    assert_eq!(screen.state(), &CrudState::Idle);
}

#[tokio::test]
async fn test_delete_confirm_and_cancel() {
    let state = MockState::seeded();
    let mut screen = CrudScreen::<CategoryAdmin, _>::new(admin_context(&state).await);
    screen.load().await.unwrap();

    screen.request_delete(6).unwrap();
    assert_eq!(screen.state(), &CrudState::ConfirmingDelete { id: 6 });
    screen.cancel_delete();
    assert_eq!(screen.state(), &CrudState::Idle);

    screen.request_delete(6).unwrap();
    screen.confirm_delete().await.unwrap();
    assert_eq!(screen.items().len(), 5);
    assert!(state.snapshot().await.categories.iter().all(|c| c.id != 6));
}

#[tokio::test]
async fn test_failed_delete_keeps_row() {
    let state = MockState::seeded();
    let client = FlakyClient::new(&state, &["/category/2"]);
    let ctx = flaky_context(client);
    sign_in(&ctx, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let mut screen = CrudScreen::<CategoryAdmin, _>::new(ctx);
    screen.load().await.unwrap();

    screen.request_delete(2).unwrap();
    assert!(screen.confirm_delete().await.is_err());
    assert_eq!(screen.state(), &CrudState::Idle);
    assert_eq!(screen.items().len(), 6);
    assert_eq!(
        screen.notice().unwrap().message,
        "Failed to delete category. Please try again."
    );
}

#[tokio::test]
async fn test_delete_of_row_gone_from_server_keeps_row() {
    let state = MockState::seeded();
    let mut screen = CrudScreen::<UserAdmin, _>::new(admin_context(&state).await);
    screen.load().await.unwrap();
    state.write().await.users.retain(|u| u.id != 3);

    screen.request_delete(3).unwrap();
    let err = screen.confirm_delete().await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(screen.state(), &CrudState::Idle);
    assert_eq!(screen.items().len(), 3);
    assert!(screen.items().iter().any(|u| u.id == 3));
}

#[tokio::test]
async fn test_product_delete_of_row_gone_from_server_keeps_row() {
    let state = MockState::seeded();
    let mut screen = CrudScreen::<ProductAdmin, _>::new(admin_context(&state).await);
    screen.load().await.unwrap();
    state.write().await.products.retain(|p| p.id != 5);

    screen.request_delete(5).unwrap();
    assert!(screen.confirm_delete().await.unwrap_err().is_not_found());
    assert_eq!(screen.items().len(), 5);
}

#[tokio::test]
async fn test_user_edit_keeps_level_and_date() {
    let state = MockState::seeded();
    let before = state.snapshot().await.users[2].clone();
    let mut screen = CrudScreen::<UserAdmin, _>::new(admin_context(&state).await);
    screen.load().await.unwrap();

    let draft = screen.begin_edit(3).unwrap();
    assert_eq!(draft.email, "ben@food.test");
    draft.email = "benjamin@food.test".into();
    screen.confirm_edit().await.unwrap();

    assert_eq!(screen.state(), &CrudState::Idle);
    let after = state.snapshot().await.users[2].clone();
    assert_eq!(after.email, "benjamin@food.test");
    assert_eq!(after.user_level, before.user_level);
    assert_eq!(after.dt_added, before.dt_added);
    assert_eq!(screen.items()[2].email, "benjamin@food.test");
    assert_eq!(screen.notice().unwrap().message, "User updated successfully!");
}

#[tokio::test]
async fn test_edit_while_busy_is_rejected() {
    let state = MockState::seeded();
    let mut screen = CrudScreen::<UserAdmin, _>::new(admin_context(&state).await);
    screen.load().await.unwrap();

    screen.begin_edit(1).unwrap();
    assert!(matches!(
        screen.request_delete(2),
        Err(ClientError::InvalidState(_))
    ));
    screen.cancel_edit();
    assert_eq!(screen.state(), &CrudState::Idle);
    assert!(screen.draft_mut().is_none());
}

fn noodle_draft(price: &str) -> ProductDraft {
    ProductDraft {
        name: "Mee Goreng".into(),
        desc: "Fried noodles".into(),
        price: price.into(),
        stock: "12".into(),
        category: "Noodles".into(),
        image: "mee.png".into(),
    }
}

#[tokio::test]
async fn test_product_edit_replaces_row() {
    let state = MockState::seeded();
    let mut screen = CrudScreen::<ProductAdmin, _>::new(admin_context(&state).await);
    screen.load().await.unwrap();

    *screen.begin_edit(2).unwrap() = noodle_draft("7.80");
    screen.confirm_edit().await.unwrap();

    let row = screen.items().iter().find(|p| p.id == 2).unwrap();
    assert_eq!(row.name, "Mee Goreng");
    assert_eq!(row.price.to_string(), "7.80");
    assert_eq!(screen.items().len(), 5);
    let stored = state.snapshot().await.products[1].clone();
    assert_eq!(stored.name, "Mee Goreng");
}

#[tokio::test]
async fn test_product_edit_bad_price_keeps_form_open() {
    let state = MockState::seeded();
    let mut screen = CrudScreen::<ProductAdmin, _>::new(admin_context(&state).await);
    screen.load().await.unwrap();

    *screen.begin_edit(2).unwrap() = noodle_draft("seven");
    let err = screen.confirm_edit().await.unwrap_err();
    assert!(matches!(err, ClientError::Input(_)));
    assert!(matches!(screen.state(), CrudState::Editing { id: 2, .. }));
    assert_eq!(state.snapshot().await.products[1].name, "Char Kuey Teow");
}

#[tokio::test]
async fn test_product_category_names() {
    let state = MockState::seeded();
    let screen = CrudScreen::<ProductAdmin, _>::new(admin_context(&state).await);
    let names = screen.category_names().await.unwrap();
    assert_eq!(names.len(), 6);
    assert_eq!(names[0], "Rice");
}

#[tokio::test]
async fn test_order_board_complete_and_cancel() {
    let state = MockState::seeded();
    let mut screen = OrderBoardScreen::new(admin_context(&state).await);
    screen.load().await.unwrap();
    assert_eq!(screen.orders().len(), 3);

    screen.select(2).unwrap();
    screen.update_status(2, StatusAction::Complete).await.unwrap();
    assert_eq!(screen.selected(), None);
    let order = screen.order(2).unwrap();
    assert_eq!(order.order_status, ORDER_COMPLETED);
    assert_eq!(order.delivery_status, DELIVERY_DELIVERED);
    assert_eq!(
        screen.notice().unwrap().message,
        "Order status updated successfully!"
    );

    screen.update_status(1, StatusAction::Cancel).await.unwrap();
    assert_eq!(state.snapshot().await.orders[0].order_status, ORDER_CANCELLED);
}

#[tokio::test]
async fn test_status_body_carries_action_name() {
    let state = MockState::seeded();
    let client = FlakyClient::new(&state, &[]);
    let sent = client.sent();
    let ctx = flaky_context(client);
    sign_in(&ctx, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let mut screen = OrderBoardScreen::new(ctx);
    screen.load().await.unwrap();

    screen.update_status(2, StatusAction::Complete).await.unwrap();
    screen.update_status(1, StatusAction::Cancel).await.unwrap();

    let sent = sent.lock().unwrap();
    let puts: Vec<_> = sent.iter().filter(|(url, _)| url.contains("/order/")).collect();
    assert_eq!(puts.len(), 2);
    assert!(puts[0].0.ends_with("/order/complete/2"));
    assert_eq!(puts[0].1["orderStatus"], "complete");
    assert_eq!(puts[0].1["orderId"], 2);
    assert!(puts[1].0.ends_with("/order/cancel/1"));
    assert_eq!(puts[1].1["orderStatus"], "cancel");
    assert_eq!(puts[1].1["totalAmount"], "11.00");
}

#[tokio::test]
async fn test_order_board_unknown_order() {
    let state = MockState::seeded();
    let mut screen = OrderBoardScreen::new(admin_context(&state).await);
    screen.load().await.unwrap();

    assert!(matches!(screen.select(42), Err(ClientError::NotInLocalState(_))));
    let err = screen
        .update_status(42, StatusAction::Complete)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotInLocalState(_)));
}

#[tokio::test]
async fn test_order_board_view_details_route() {
    let state = MockState::seeded();
    let mut screen = OrderBoardScreen::new(admin_context(&state).await);
    screen.load().await.unwrap();

    let route = screen.view_details(1).unwrap();
    assert_eq!(
        route,
        Route::ViewOrderDetail {
            order_id: 1,
            total_amount: shared::Money::parse("11.00").ok(),
        }
    );
}
