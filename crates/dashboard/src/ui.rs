//! Terminal rendering of the dashboard state. Pure text out; the binary
//! decides when to print it.

use std::fmt::Write as _;

use crate::state::{DashboardState, ServiceId};

pub fn render(state: &DashboardState) -> String {
    let mut out = String::new();
    let tabs = match state.active_tab {
        ServiceId::Users => "[Users] Products",
        ServiceId::Products => "Users [Products]",
    };
    let busy = if state.busy { "  (loading...)" } else { "" };
    let _ = writeln!(out, "== Dashboard ==  {tabs}{busy}");

    if !state.message.is_empty() {
        let _ = writeln!(out, "! {}", state.message);
    }

    match state.active_tab {
        ServiceId::Users => render_users(&mut out, state),
        ServiceId::Products => render_products(&mut out, state),
    }

    if let Some((service, id)) = &state.pending_delete {
        let _ = writeln!(
            out,
            "Delete {} {}? type 'yes' to confirm, 'no' to cancel",
            service.title().to_lowercase(),
            id
        );
    }
    out
}

fn render_users(out: &mut String, state: &DashboardState) {
    if state.user_down {
        let _ = writeln!(out, "User service is unavailable. Cannot fetch users.");
        return;
    }
    if state.users.is_empty() {
        let _ = writeln!(out, "No users yet. Add your first user!");
        return;
    }
    let _ = writeln!(out, "Users ({})", state.users.len());
    for user in &state.users {
        let _ = writeln!(out, "  {}  {} <{}>", user.id, user.name, user.email);
    }
}

fn render_products(out: &mut String, state: &DashboardState) {
    if state.product_down {
        let _ = writeln!(out, "Product service is unavailable. Cannot fetch products.");
        return;
    }
    if state.products.is_empty() {
        let _ = writeln!(out, "No products available. Add your first product!");
        return;
    }
    let _ = writeln!(out, "Products ({})", state.products.len());
    for product in &state.products {
        let _ = writeln!(out, "  {}  {} ${:.2}", product.id, product.name, product.price);
    }
}
