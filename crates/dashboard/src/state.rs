//! UI state and its reducer.
//!
//! Every transition is `(state, event) -> state` with no I/O, so the
//! partial-failure rules are plain unit-testable functions. The controller
//! is the only producer of events.

use models::{Product, ProductDraft, User, UserDraft};

pub const MSG_USER_INVALID: &str = "Please enter a valid name and email.";
pub const MSG_PRODUCT_INVALID: &str = "Please enter a valid product name and price.";
pub const MSG_USERS_DOWN: &str = "User service is down. Users data unavailable.";
pub const MSG_PRODUCTS_DOWN: &str = "Product service is down. Products data unavailable.";
pub const MSG_BOTH_DOWN: &str = "Both User and Product services are down.";
pub const MSG_UNEXPECTED: &str = "Unexpected error! Please try again.";

/// One of the two backend services. Also identifies the dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceId {
    Users,
    Products,
}

impl ServiceId {
    pub fn title(&self) -> &'static str {
        match self {
            ServiceId::Users => "User",
            ServiceId::Products => "Product",
        }
    }
}

/// Mutation kind, used to word failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Delete,
}

pub fn failure_message(service: ServiceId, action: Action) -> String {
    let verb = match action {
        Action::Create => "add",
        Action::Delete => "delete",
    };
    let noun = match service {
        ServiceId::Users => "user",
        ServiceId::Products => "product",
    };
    format!("Failed to {verb} {noun}. {} service may be down.", service.title())
}

/// Draft fields for a new user, as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
}

impl UserForm {
    /// Presence check only; the draft is submitted as typed.
    pub fn validate(&self) -> Result<UserDraft, String> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(MSG_USER_INVALID.to_string());
        }
        Ok(UserDraft { name: self.name.clone(), email: self.email.clone() })
    }
}

/// Draft fields for a new product. Price stays raw text until submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
}

impl ProductForm {
    /// Name must be present and the price a positive number. The draft
    /// carries the trimmed name and the parsed price.
    pub fn validate(&self) -> Result<ProductDraft, String> {
        let price = self.price.trim().parse::<f64>().unwrap_or(f64::NAN);
        if self.name.trim().is_empty() || !(price > 0.0) {
            return Err(MSG_PRODUCT_INVALID.to_string());
        }
        Ok(ProductDraft { name: self.name.trim().to_string(), price })
    }
}

/// Outcome of one service's list call; the service tag travels with its
/// typed payload.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Users(Result<Vec<User>, String>),
    Products(Result<Vec<Product>, String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    TabSelected(ServiceId),
    UserFormEdited(UserForm),
    ProductFormEdited(ProductForm),
    RefreshStarted,
    RefreshSettled(FetchOutcome),
    /// The fan-out mechanism itself failed; both services are conservatively
    /// treated as down.
    RefreshAborted,
    MutationSubmitted(ServiceId),
    /// Local validation rejected the draft; no network call was made.
    MutationRejected(String),
    MutationSettled { service: ServiceId, action: Action, outcome: Result<(), String> },
    DeleteRequested(ServiceId, String),
    DeleteConfirmed,
    DeleteCancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    /// Last successfully fetched records; emptied when the service is down.
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub user_down: bool,
    pub product_down: bool,
    pub user_form: UserForm,
    pub product_form: ProductForm,
    /// True while a fetch or mutation is outstanding. Advisory: new
    /// submissions are ignored, in-flight requests are never aborted.
    pub busy: bool,
    /// The single most recent status/error line; latest overwrites.
    pub message: String,
    pub active_tab: ServiceId,
    /// Delete awaiting explicit confirmation.
    pub pending_delete: Option<(ServiceId, String)>,
    /// Tab captured at refresh start. Single-service failure messages are
    /// scoped to this snapshot, not to the live tab.
    fetch_tab: ServiceId,
    /// Services settled in the in-flight refresh.
    settled: u8,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            products: Vec::new(),
            user_down: false,
            product_down: false,
            user_form: UserForm::default(),
            product_form: ProductForm::default(),
            busy: false,
            message: String::new(),
            active_tab: ServiceId::Users,
            pending_delete: None,
            fetch_tab: ServiceId::Users,
            settled: 0,
        }
    }
}

impl DashboardState {
    pub fn down(&self, service: ServiceId) -> bool {
        match service {
            ServiceId::Users => self.user_down,
            ServiceId::Products => self.product_down,
        }
    }

    pub fn apply(&mut self, event: Event) {
        match event {
            Event::TabSelected(tab) => self.active_tab = tab,
            Event::UserFormEdited(form) => self.user_form = form,
            Event::ProductFormEdited(form) => self.product_form = form,
            Event::RefreshStarted => {
                self.busy = true;
                self.message.clear();
                self.user_down = false;
                self.product_down = false;
                self.fetch_tab = self.active_tab;
                self.settled = 0;
            }
            Event::RefreshSettled(outcome) => {
                match outcome {
                    FetchOutcome::Users(Ok(records)) => {
                        self.users = records;
                        self.user_down = false;
                    }
                    FetchOutcome::Users(Err(_)) => {
                        self.users.clear();
                        self.user_down = true;
                    }
                    FetchOutcome::Products(Ok(records)) => {
                        self.products = records;
                        self.product_down = false;
                    }
                    FetchOutcome::Products(Err(_)) => {
                        self.products.clear();
                        self.product_down = true;
                    }
                }
                self.settled += 1;
                if self.settled == 2 {
                    self.finish_refresh();
                }
            }
            Event::RefreshAborted => {
                self.users.clear();
                self.products.clear();
                self.user_down = true;
                self.product_down = true;
                self.message = MSG_UNEXPECTED.to_string();
                self.settled = 0;
                self.busy = false;
            }
            Event::MutationSubmitted(_) => {
                self.busy = true;
                self.message.clear();
            }
            Event::MutationRejected(reason) => self.message = reason,
            Event::MutationSettled { service, action, outcome } => match outcome {
                Ok(()) => {
                    // The follow-up refresh owns `busy` from here.
                    if action == Action::Create {
                        match service {
                            ServiceId::Users => self.user_form = UserForm::default(),
                            ServiceId::Products => self.product_form = ProductForm::default(),
                        }
                    }
                }
                Err(_) => {
                    match service {
                        ServiceId::Users => self.user_down = true,
                        ServiceId::Products => self.product_down = true,
                    }
                    self.message = failure_message(service, action);
                    self.busy = false;
                }
            },
            Event::DeleteRequested(service, id) => self.pending_delete = Some((service, id)),
            Event::DeleteConfirmed => self.pending_delete = None,
            Event::DeleteCancelled => self.pending_delete = None,
        }
    }

    /// Both branches have settled: compose the message and drop `busy`.
    /// A combined both-down message takes precedence; a single failure is
    /// announced only when its tab was active when the refresh started.
    fn finish_refresh(&mut self) {
        if self.user_down && self.product_down {
            self.message = MSG_BOTH_DOWN.to_string();
        } else if self.user_down && self.fetch_tab == ServiceId::Users {
            self.message = MSG_USERS_DOWN.to_string();
        } else if self.product_down && self.fetch_tab == ServiceId::Products {
            self.message = MSG_PRODUCTS_DOWN.to_string();
        }
        self.settled = 0;
        self.busy = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str) -> User {
        User { id: id.into(), name: name.into(), email: format!("{name}@x.com") }
    }

    fn settle_users(state: &mut DashboardState, outcome: Result<Vec<User>, &str>) {
        state.apply(Event::RefreshSettled(FetchOutcome::Users(
            outcome.map_err(|e| e.to_string()),
        )));
    }

    fn settle_products(state: &mut DashboardState, outcome: Result<Vec<Product>, &str>) {
        state.apply(Event::RefreshSettled(FetchOutcome::Products(
            outcome.map_err(|e| e.to_string()),
        )));
    }

    #[test]
    fn refresh_success_populates_both_and_clears_busy() {
        let mut state = DashboardState::default();
        state.apply(Event::RefreshStarted);
        assert!(state.busy);

        settle_users(&mut state, Ok(vec![user("u1", "ada")]));
        assert!(state.busy, "busy holds until both branches settle");
        settle_products(&mut state, Ok(vec![]));

        assert!(!state.busy);
        assert_eq!(state.users.len(), 1);
        assert!(state.products.is_empty());
        assert!(!state.user_down && !state.product_down);
        assert!(state.message.is_empty());
    }

    #[test]
    fn one_failure_keeps_the_other_branch_intact() {
        let mut state = DashboardState::default();
        state.apply(Event::RefreshStarted);
        settle_users(&mut state, Err("connection refused"));
        settle_products(&mut state, Ok(vec![Product {
            id: "p1".into(),
            name: "Desk".into(),
            price: 10.0,
        }]));

        assert!(state.user_down);
        assert!(state.users.is_empty());
        assert!(!state.product_down);
        assert_eq!(state.products.len(), 1);
    }

    #[test]
    fn settle_order_does_not_matter() {
        for users_first in [true, false] {
            let mut state = DashboardState::default();
            state.apply(Event::RefreshStarted);
            if users_first {
                settle_users(&mut state, Err("down"));
                settle_products(&mut state, Ok(vec![]));
            } else {
                settle_products(&mut state, Ok(vec![]));
                settle_users(&mut state, Err("down"));
            }
            assert!(state.user_down);
            assert!(!state.product_down);
            assert!(!state.busy);
            assert_eq!(state.message, MSG_USERS_DOWN);
        }
    }

    #[test]
    fn failure_message_is_scoped_to_the_tab_at_fetch_time() {
        let mut state = DashboardState::default();
        state.apply(Event::TabSelected(ServiceId::Products));
        state.apply(Event::RefreshStarted);
        settle_users(&mut state, Err("down"));
        settle_products(&mut state, Ok(vec![]));

        // Users failed but the products tab was active: down flag set, no
        // global message.
        assert!(state.user_down);
        assert!(state.message.is_empty());

        // Switching tabs afterwards must not retroactively surface it.
        state.apply(Event::TabSelected(ServiceId::Users));
        assert!(state.message.is_empty());
        assert!(state.user_down);
    }

    #[test]
    fn failure_message_shows_when_its_tab_was_active() {
        let mut state = DashboardState::default();
        state.apply(Event::RefreshStarted);
        settle_users(&mut state, Err("down"));
        settle_products(&mut state, Ok(vec![]));
        assert_eq!(state.message, MSG_USERS_DOWN);
    }

    #[test]
    fn both_down_message_takes_precedence() {
        let mut state = DashboardState::default();
        state.apply(Event::RefreshStarted);
        settle_users(&mut state, Err("down"));
        settle_products(&mut state, Err("down"));
        assert_eq!(state.message, MSG_BOTH_DOWN);
        assert!(state.user_down && state.product_down);
    }

    #[test]
    fn aborted_refresh_marks_everything_down() {
        let mut state = DashboardState::default();
        state.users = vec![user("u1", "ada")];
        state.apply(Event::RefreshStarted);
        state.apply(Event::RefreshAborted);

        assert!(state.users.is_empty() && state.products.is_empty());
        assert!(state.user_down && state.product_down);
        assert_eq!(state.message, MSG_UNEXPECTED);
        assert!(!state.busy);
    }

    #[test]
    fn refresh_clears_stale_message_and_down_flags() {
        let mut state = DashboardState::default();
        state.message = MSG_BOTH_DOWN.to_string();
        state.user_down = true;
        state.product_down = true;
        state.apply(Event::RefreshStarted);
        assert!(state.message.is_empty());
        assert!(!state.user_down && !state.product_down);
    }

    #[test]
    fn create_success_resets_only_that_form() {
        let mut state = DashboardState::default();
        state.user_form = UserForm { name: "Ada".into(), email: "a@x.com".into() };
        state.product_form = ProductForm { name: "Desk".into(), price: "10".into() };

        state.apply(Event::MutationSubmitted(ServiceId::Users));
        state.apply(Event::MutationSettled {
            service: ServiceId::Users,
            action: Action::Create,
            outcome: Ok(()),
        });

        assert_eq!(state.user_form, UserForm::default());
        assert_eq!(state.product_form.name, "Desk");
    }

    #[test]
    fn mutation_failure_marks_service_down_and_keeps_draft() {
        let mut state = DashboardState::default();
        state.user_form = UserForm { name: "Ada".into(), email: "a@x.com".into() };

        state.apply(Event::MutationSubmitted(ServiceId::Users));
        state.apply(Event::MutationSettled {
            service: ServiceId::Users,
            action: Action::Create,
            outcome: Err("status 500".into()),
        });

        assert!(state.user_down);
        assert!(!state.product_down);
        assert_eq!(state.message, "Failed to add user. User service may be down.");
        assert_eq!(state.user_form.name, "Ada");
        assert!(!state.busy);
    }

    #[test]
    fn delete_failure_message_names_the_operation() {
        let mut state = DashboardState::default();
        state.apply(Event::MutationSubmitted(ServiceId::Products));
        state.apply(Event::MutationSettled {
            service: ServiceId::Products,
            action: Action::Delete,
            outcome: Err("status 500".into()),
        });
        assert_eq!(state.message, "Failed to delete product. Product service may be down.");
        assert!(state.product_down);
    }

    #[test]
    fn cancelling_a_delete_leaves_no_trace() {
        let mut state = DashboardState::default();
        state.apply(Event::DeleteRequested(ServiceId::Users, "u1".into()));
        assert_eq!(state.pending_delete, Some((ServiceId::Users, "u1".to_string())));

        state.apply(Event::DeleteCancelled);
        assert!(state.pending_delete.is_none());
        assert!(state.message.is_empty());
        assert!(!state.busy);
    }

    #[test]
    fn user_form_requires_name_and_email() {
        assert!(UserForm::default().validate().is_err());
        assert!(UserForm { name: "Ada".into(), email: " ".into() }.validate().is_err());
        let draft = UserForm { name: "Ada".into(), email: "a@x.com".into() }.validate().unwrap();
        assert_eq!(draft.name, "Ada");
    }

    #[test]
    fn product_form_requires_positive_numeric_price() {
        assert!(ProductForm { name: "Desk".into(), price: "0".into() }.validate().is_err());
        assert!(ProductForm { name: "Desk".into(), price: "-1".into() }.validate().is_err());
        assert!(ProductForm { name: "Desk".into(), price: "cheap".into() }.validate().is_err());
        assert!(ProductForm { name: " ".into(), price: "10".into() }.validate().is_err());

        let draft = ProductForm { name: " Desk ".into(), price: "10.5".into() }.validate().unwrap();
        assert_eq!(draft.name, "Desk");
        assert_eq!(draft.price, 10.5);
    }
}
