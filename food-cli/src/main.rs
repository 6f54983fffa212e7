//! `food`: terminal shell over the food-ordering client
//!
//! Each invocation runs one screen action against the backend configured by
//! `FOOD_API_*` variables (or `--api-url`) and prints the result.

mod shell;

use clap::{Args, Parser, Subcommand};
use food_client::{AppContext, AuthMode, ClientConfig};
use shared::models::StatusAction;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// API root, e.g. http://localhost:8080/api
    #[arg(long, env = "FOOD_API_BASE_URL")]
    api_url: Option<String>,

    /// `session` or `scan`
    #[arg(long, env = "FOOD_AUTH_MODE")]
    auth_mode: Option<AuthMode>,

    /// Session token printed by `food login`
    #[arg(long, env = "FOOD_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Request timeout in seconds (0 disables)
    #[arg(long, env = "FOOD_API_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Log as JSON lines
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct Credentials {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and open the landing screen
    Login(Credentials),
    /// Close the session given by `--token`
    Logout,
    /// Create a customer account
    Register(Credentials),
    /// Product grid
    Catalog {
        #[arg(long)]
        user_id: i64,
        /// Screen width used for the column count
        #[arg(long, default_value_t = 390)]
        width: u32,
    },
    /// Product detail, optionally adding it to the cart
    Product {
        id: i64,
        #[arg(long)]
        user_id: i64,
        /// Quantity to add to the cart
        #[arg(long)]
        add: Option<String>,
    },
    /// Cart of a user
    Cart {
        #[arg(long)]
        user_id: i64,
        /// Cart row to remove
        #[arg(long)]
        remove: Option<i64>,
        #[arg(long)]
        checkout: bool,
    },
    /// Order history of a user
    Orders {
        #[arg(long)]
        user_id: i64,
        /// Rate an order: ORDER_ID RATING
        #[arg(long, num_args = 2, value_names = ["ORDER_ID", "RATING"])]
        rate: Option<Vec<i64>>,
    },
    /// Admin back-office
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Subcommand, Debug)]
enum AdminCommand {
    Users {
        #[command(subcommand)]
        action: Option<CrudAction>,
    },
    Categories {
        #[command(subcommand)]
        action: Option<CrudAction>,
    },
    Products {
        #[command(subcommand)]
        action: Option<CrudAction>,
    },
    /// Order board
    Orders {
        /// complete | cancel
        #[arg(long, requires = "order_id")]
        action: Option<StatusAction>,
        #[arg(long)]
        order_id: Option<i64>,
        /// Show the detail rows of an order
        #[arg(long, conflicts_with = "action")]
        details: Option<i64>,
    },
}

/// Add, edit or delete; fields are `key=value` pairs
#[derive(Subcommand, Debug)]
enum CrudAction {
    Add {
        #[arg(value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },
    Edit {
        id: i64,
        #[arg(value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },
    Delete {
        id: i64,
    },
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "food_client=info,food=info".into());
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut config = ClientConfig::from_env()?;
    if let Some(url) = &cli.api_url {
        config = config.with_endpoints(food_client::Endpoints::from_api_root(url));
    }
    if let Some(mode) = cli.auth_mode {
        config = config.with_auth_mode(mode);
    }
    if let Some(token) = &cli.token {
        config = config.with_token(token.clone());
    }
    if let Some(timeout) = cli.timeout {
        config = config.with_timeout(timeout);
    }
    tracing::debug!(
        endpoints = ?config.endpoints,
        auth_mode = ?config.auth_mode,
        timeout = config.timeout,
        has_token = config.token.is_some(),
        "client configuration"
    );

    let ctx = AppContext::connect(&config)?;
    shell::run(ctx, cli.command).await
}
