//! Route graph and navigation stack
//!
//! A single stack of [`Route`]s. The customer home is one stack entry
//! holding a nested tab selection.

use shared::Money;
use std::fmt;

/// Tabs of the customer home
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerTab {
    #[default]
    Home,
    Cart,
    Orders,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    /// Admin menu
    AdminHome,
    ManageOrders,
    ManageUsers,
    ManageProducts,
    ManageCategories,
    ViewOrderDetail {
        order_id: i64,
        total_amount: Option<Money>,
    },
    CustomerHome {
        user_id: i64,
        tab: CustomerTab,
    },
    ProductDetail {
        product_id: i64,
        user_id: i64,
    },
}

impl Route {
    pub fn customer_home(user_id: i64) -> Self {
        Self::CustomerHome {
            user_id,
            tab: CustomerTab::Home,
        }
    }

    /// Admin-only screens
    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Self::AdminHome
                | Self::ManageOrders
                | Self::ManageUsers
                | Self::ManageProducts
                | Self::ManageCategories
                | Self::ViewOrderDetail { .. }
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => f.write_str("Login"),
            Self::Register => f.write_str("Register"),
            Self::AdminHome => f.write_str("Home"),
            Self::ManageOrders => f.write_str("ManageOrder"),
            Self::ManageUsers => f.write_str("ManageUsers"),
            Self::ManageProducts => f.write_str("ManageProducts"),
            Self::ManageCategories => f.write_str("ManageCategory"),
            Self::ViewOrderDetail { order_id, .. } => write!(f, "ViewOrderDetail({order_id})"),
            Self::CustomerHome { tab, .. } => write!(f, "CustomerHomePage/{tab:?}"),
            Self::ProductDetail { product_id, .. } => write!(f, "ProductDetailPage({product_id})"),
        }
    }
}

/// Navigation stack; never empty
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    /// Start at the login screen
    pub fn new() -> Self {
        Self::with_root(Route::Login)
    }

    pub fn with_root(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    pub fn current(&self) -> &Route {
        // `stack` always holds the root
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(%route, "navigate");
        self.stack.push(route);
    }

    /// Pop the top route. The root is never popped.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Replace the whole stack with `route` (after login or registration)
    pub fn reset(&mut self, route: Route) {
        tracing::debug!(%route, "reset navigation");
        self.stack.clear();
        self.stack.push(route);
    }

    /// Switch tabs when the customer home is on top
    pub fn select_tab(&mut self, tab: CustomerTab) -> bool {
        match self.stack.last_mut() {
            Some(Route::CustomerHome { tab: current, .. }) => {
                *current = tab;
                true
            }
            _ => false,
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_keeps_root() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Register);
        assert!(nav.back());
        assert!(!nav.back());
        assert_eq!(nav.current(), &Route::Login);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Register);
        nav.reset(Route::AdminHome);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current(), &Route::AdminHome);
    }

    #[test]
    fn test_select_tab_only_on_customer_home() {
        let mut nav = Navigator::with_root(Route::customer_home(5));
        assert!(nav.select_tab(CustomerTab::Cart));
        assert_eq!(
            nav.current(),
            &Route::CustomerHome {
                user_id: 5,
                tab: CustomerTab::Cart
            }
        );
        nav.navigate(Route::ProductDetail {
            product_id: 1,
            user_id: 5,
        });
        assert!(!nav.select_tab(CustomerTab::Orders));
    }
}
