//! Runs screens for one command and prints what they show

use crate::{AdminCommand, Command, CrudAction};
use anyhow::{Context, bail};
use food_client::aggregate::OrderBlock;
use food_client::screens::{
    AdminResource, CartScreen, CatalogScreen, CategoryAdmin, CategoryDraft, CrudScreen,
    LoginScreen, OrderBoardScreen, OrderDetailScreen, OrderHistoryScreen, ProductAdmin,
    ProductDetailScreen, ProductDraft, RegisterScreen, UserAdmin, UserDraft, columns_for_width,
};
use food_client::{CustomerTab, HttpClient, NetworkHttpClient, Navigator, Notice, Route, SharedContext};
use shared::models::{Category, Product, User};

type Ctx = SharedContext<NetworkHttpClient>;

const DEFAULT_WIDTH: u32 = 390;

pub async fn run(ctx: Ctx, command: Command) -> anyhow::Result<()> {
    let mut nav = Navigator::new();
    match command {
        Command::Login(credentials) => {
            let mut screen = LoginScreen::new(ctx.clone());
            screen.email = credentials.email;
            screen.password = credentials.password;
            let result = screen.submit().await;
            show_notice(screen.notice());
            nav.reset(result?);
            if let Some(token) = ctx.api.http().token().await {
                println!("export FOOD_API_TOKEN={token}");
            }
            open(&ctx, &nav).await?;
        }
        Command::Logout => {
            ctx.api.auth().logout().await?;
            println!("logged out");
            nav.reset(Route::Login);
        }
        Command::Register(credentials) => {
            let mut screen = RegisterScreen::new(ctx.clone());
            screen.email = credentials.email;
            screen.password = credentials.password;
            let result = screen.submit().await;
            show_notice(screen.notice());
            let (user, route) = result?;
            println!("registered user {} <{}>", user.id, user.email);
            nav.reset(route);
        }
        Command::Catalog { user_id, width } => {
            nav.reset(Route::customer_home(user_id));
            show_catalog(&ctx, user_id, width).await?;
        }
        Command::Product { id, user_id, add } => {
            nav.reset(Route::customer_home(user_id));
            nav.navigate(Route::ProductDetail {
                product_id: id,
                user_id,
            });
            let mut screen = ProductDetailScreen::new(ctx.clone(), id, user_id);
            screen.load().await?;
            if let Some(product) = screen.product() {
                print_product(product);
            }
            if let Some(quantity) = add {
                if !screen.set_quantity(&quantity) {
                    bail!("quantity must be a positive integer: {quantity:?}");
                }
                let result = screen.add_to_cart().await;
                show_notice(screen.notice());
                result?;
            }
        }
        Command::Cart {
            user_id,
            remove,
            checkout,
        } => {
            nav.reset(Route::customer_home(user_id));
            nav.select_tab(CustomerTab::Cart);
            let mut screen = CartScreen::new(ctx.clone(), user_id);
            screen.load().await?;
            if let Some(cart_id) = remove {
                screen.remove(cart_id).await?;
                println!("removed cart item {cart_id}");
            }
            print_cart(&screen);
            if checkout {
                let result = screen.checkout().await;
                show_notice(screen.notice());
                if let Some(order) = result? {
                    println!("order {} placed for {}", order.id, order.total_amount);
                }
            }
        }
        Command::Orders { user_id, rate } => {
            nav.reset(Route::customer_home(user_id));
            nav.select_tab(CustomerTab::Orders);
            let mut screen = OrderHistoryScreen::new(ctx.clone(), user_id);
            screen.load().await?;
            if let Some(args) = rate {
                let (order_id, rating) = match args.as_slice() {
                    [order_id, rating] => (*order_id, u8::try_from(*rating)?),
                    _ => bail!("--rate takes ORDER_ID RATING"),
                };
                let result = screen.rate(order_id, rating).await;
                show_notice(screen.notice());
                result?;
            }
            for block in screen.blocks() {
                print_order_block(block);
            }
        }
        Command::Admin(command) => {
            nav.reset(Route::AdminHome);
            admin(&ctx, &mut nav, command).await?;
        }
    }
    tracing::debug!(route = %nav.current(), depth = nav.depth(), "done");
    Ok(())
}

/// Render the screen on top of the stack
async fn open(ctx: &Ctx, nav: &Navigator) -> anyhow::Result<()> {
    match nav.current() {
        Route::AdminHome => {
            println!("Admin: orders | products | users | categories");
        }
        Route::CustomerHome { user_id, tab } => match tab {
            CustomerTab::Home => show_catalog(ctx, *user_id, DEFAULT_WIDTH).await?,
            CustomerTab::Cart => {
                let mut screen = CartScreen::new(ctx.clone(), *user_id);
                screen.load().await?;
                print_cart(&screen);
            }
            CustomerTab::Orders => {
                let mut screen = OrderHistoryScreen::new(ctx.clone(), *user_id);
                screen.load().await?;
                for block in screen.blocks() {
                    print_order_block(block);
                }
            }
        },
        other => println!("{other}"),
    }
    Ok(())
}

async fn admin(ctx: &Ctx, nav: &mut Navigator, command: AdminCommand) -> anyhow::Result<()> {
    match command {
        AdminCommand::Users { action } => {
            nav.navigate(Route::ManageUsers);
            crud::<UserAdmin>(ctx, action).await
        }
        AdminCommand::Categories { action } => {
            nav.navigate(Route::ManageCategories);
            crud::<CategoryAdmin>(ctx, action).await
        }
        AdminCommand::Products { action } => {
            nav.navigate(Route::ManageProducts);
            let mut screen = CrudScreen::<ProductAdmin, _>::new(ctx.clone());
            if action.is_none() {
                let names = screen.category_names().await?;
                println!("categories: {}", names.join(", "));
            }
            crud_on(&mut screen, action).await
        }
        AdminCommand::Orders {
            action,
            order_id,
            details,
        } => {
            nav.navigate(Route::ManageOrders);
            let mut board = OrderBoardScreen::new(ctx.clone());
            board.load().await?;

            if let Some(order_id) = details {
                let route = board.view_details(order_id)?;
                nav.navigate(route.clone());
                if let Route::ViewOrderDetail {
                    order_id,
                    total_amount,
                } = route
                {
                    let mut screen = OrderDetailScreen::new(ctx.clone(), order_id, total_amount);
                    screen.load().await?;
                    for d in screen.details() {
                        println!(
                            "  product {:>4}  x{:<3} {:>8}  = {:>8}  {}",
                            d.product_id, d.quantity, d.price, d.total_amount, d.dt_added
                        );
                    }
                    println!("grand total: {}", screen.grand_total());
                    if let Some(total) = screen.total_amount() {
                        println!("order total: {total}");
                    }
                }
                return Ok(());
            }

            if let Some(action) = action {
                let order_id = order_id.context("--order-id is required")?;
                board.select(order_id)?;
                let result = board.update_status(order_id, action).await;
                show_notice(board.notice());
                result?;
            }
            for order in board.orders() {
                println!(
                    "{:>4}  {:>8}  {:<10} {:<10} {}",
                    order.id,
                    order.total_amount,
                    order.order_status,
                    order.delivery_status,
                    order.ratings
                );
            }
            Ok(())
        }
    }
}

async fn crud<R>(ctx: &Ctx, action: Option<CrudAction>) -> anyhow::Result<()>
where
    R: AdminResource,
    R::Record: Row,
    R::Draft: Form,
{
    let mut screen = CrudScreen::<R, _>::new(ctx.clone());
    crud_on(&mut screen, action).await
}

async fn crud_on<R>(
    screen: &mut CrudScreen<R, NetworkHttpClient>,
    action: Option<CrudAction>,
) -> anyhow::Result<()>
where
    R: AdminResource,
    R::Record: Row,
    R::Draft: Form,
{
    screen.load().await?;
    let result = match action {
        None => Ok(()),
        Some(CrudAction::Add { fields }) => {
            let mut draft = R::Draft::default();
            apply_fields(&mut draft, &fields)?;
            screen.add(draft).await.map(|_| ())
        }
        Some(CrudAction::Edit { id, fields }) => {
            let draft = screen.begin_edit(id)?;
            apply_fields(draft, &fields)?;
            screen.confirm_edit().await
        }
        Some(CrudAction::Delete { id }) => {
            screen.request_delete(id)?;
            screen.confirm_delete().await
        }
    };
    show_notice(screen.notice());
    result?;
    for record in screen.items() {
        println!("{}", record.row());
    }
    Ok(())
}

/// One-line listing of an admin record
trait Row {
    fn row(&self) -> String;
}

impl Row for User {
    fn row(&self) -> String {
        let role = if self.is_admin() { "admin" } else { "customer" };
        format!("{:>4}  {:<30} {:<8} {}", self.id, self.email, role, self.dt_added)
    }
}

impl Row for Category {
    fn row(&self) -> String {
        format!("{:>4}  {:<16} {}", self.id, self.name, self.desc)
    }
}

impl Row for Product {
    fn row(&self) -> String {
        format!(
            "{:>4}  {:<24} {:>8}  stock {:<5} {}",
            self.id, self.name, self.price, self.stock, self.category
        )
    }
}

/// Admin form that can be filled from `key=value` pairs
trait Form {
    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()>;
}

impl Form for UserDraft {
    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        match key {
            "email" => self.email = value,
            "password" => self.password = value,
            _ => bail!("unknown user field {key:?}"),
        }
        Ok(())
    }
}

impl Form for CategoryDraft {
    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        match key {
            "name" => self.name = value,
            "desc" => self.desc = value,
            _ => bail!("unknown category field {key:?}"),
        }
        Ok(())
    }
}

impl Form for ProductDraft {
    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        match key {
            "name" => self.name = value,
            "desc" => self.desc = value,
            "price" => self.price = value,
            "stock" => self.stock = value,
            "category" => self.category = value,
            "image" => self.image = value,
            _ => bail!("unknown product field {key:?}"),
        }
        Ok(())
    }
}

fn apply_fields<F: Form>(form: &mut F, fields: &[String]) -> anyhow::Result<()> {
    for field in fields {
        let (key, value) = field
            .split_once('=')
            .with_context(|| format!("expected KEY=VALUE, got {field:?}"))?;
        form.set(key.trim(), value.to_string())?;
    }
    Ok(())
}

async fn show_catalog(ctx: &Ctx, user_id: i64, width: u32) -> anyhow::Result<()> {
    let mut screen = CatalogScreen::new(ctx.clone(), user_id);
    screen.load().await?;
    let columns = columns_for_width(width);
    for row in screen.products().chunks(columns) {
        let cells: Vec<String> = row
            .iter()
            .map(|p| format!("[{}] {} ${}", p.id, p.name, p.price))
            .collect();
        println!("{}", cells.join("   "));
    }
    Ok(())
}

fn print_product(product: &Product) {
    println!("{}", product.name);
    println!("  {}", product.desc);
    println!("  price:    {}", product.price);
    println!("  stock:    {}", product.stock);
    println!("  category: {}", product.category);
}

fn print_cart(screen: &CartScreen<NetworkHttpClient>) {
    let view = screen.view();
    for line in &view.lines {
        println!(
            "{:>4}  {:<24} x{:<3} {:>8}",
            line.item.id, line.product.name, line.item.quantity, line.item.total_amount
        );
    }
    if view.unresolved > 0 {
        println!("({} item(s) could not be shown)", view.unresolved);
    }
    println!("total: {}", view.total);
}

fn print_order_block(block: &OrderBlock) {
    let order = &block.order;
    println!(
        "order {}  {}  {} / {}  rating: {}",
        order.id, order.total_amount, order.order_status, order.delivery_status, order.ratings
    );
    for line in &block.lines {
        println!(
            "    {:<24} x{:<3} {:>8}",
            line.product_name(),
            line.detail.quantity,
            line.detail.total_amount
        );
    }
    if block.awaits_rating() {
        println!("    awaiting your rating (1-5)");
    }
}

fn show_notice(notice: Option<&Notice>) {
    if let Some(notice) = notice {
        if notice.is_error() {
            eprintln!("{notice}");
        } else {
            println!("{notice}");
        }
    }
}
