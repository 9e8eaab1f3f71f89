use configs::DashboardConfig;
use models::{Product, User};
use tracing::error;

use crate::client::ResourceClient;
use crate::state::{Action, DashboardState, Event, FetchOutcome, ProductForm, ServiceId, UserForm};

/// The aggregator: one client per service plus the UI state. The only
/// component with cross-service awareness; every transition goes through
/// the reducer in [`crate::state`].
pub struct Dashboard {
    state: DashboardState,
    users: ResourceClient<User>,
    products: ResourceClient<Product>,
}

impl Dashboard {
    pub fn new(cfg: &DashboardConfig) -> Self {
        Self {
            state: DashboardState::default(),
            users: ResourceClient::new(&cfg.user_service_url),
            products: ResourceClient::new(&cfg.product_service_url),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Fan out to both services and wait for both to settle before folding
    /// the outcomes into state. One branch's failure never short-circuits
    /// or conditions the other.
    pub async fn refresh(&mut self) {
        self.state.apply(Event::RefreshStarted);

        let users = self.users.clone();
        let products = self.products.clone();
        let user_task = tokio::spawn(async move { users.list().await });
        let product_task = tokio::spawn(async move { products.list().await });
        let (user_res, product_res) = tokio::join!(user_task, product_task);

        match (user_res, product_res) {
            (Ok(users), Ok(products)) => {
                self.state.apply(Event::RefreshSettled(FetchOutcome::Users(
                    users.map_err(|e| e.to_string()),
                )));
                self.state.apply(Event::RefreshSettled(FetchOutcome::Products(
                    products.map_err(|e| e.to_string()),
                )));
            }
            // A branch that failed to join means the fan-out itself broke,
            // not a modeled service failure.
            _ => {
                error!("refresh fan-out failed to join");
                self.state.apply(Event::RefreshAborted);
            }
        }
    }

    /// Select a tab. If nothing has loaded yet, run a refresh so the tab
    /// shows current data or the correct error.
    pub async fn select_tab(&mut self, tab: ServiceId) {
        self.state.apply(Event::TabSelected(tab));
        if self.state.users.is_empty() && self.state.products.is_empty() {
            self.refresh().await;
        }
    }

    pub async fn submit_user(&mut self, form: UserForm) {
        if self.state.busy || self.state.user_down {
            return;
        }
        self.state.apply(Event::UserFormEdited(form));
        let draft = match self.state.user_form.validate() {
            Ok(draft) => draft,
            Err(reason) => {
                self.state.apply(Event::MutationRejected(reason));
                return;
            }
        };

        self.state.apply(Event::MutationSubmitted(ServiceId::Users));
        match self.users.create(&draft).await {
            Ok(_) => {
                self.state.apply(Event::MutationSettled {
                    service: ServiceId::Users,
                    action: Action::Create,
                    outcome: Ok(()),
                });
                self.refresh().await;
            }
            Err(e) => {
                error!(error = %e, "user create failed");
                self.state.apply(Event::MutationSettled {
                    service: ServiceId::Users,
                    action: Action::Create,
                    outcome: Err(e.to_string()),
                });
            }
        }
    }

    pub async fn submit_product(&mut self, form: ProductForm) {
        if self.state.busy || self.state.product_down {
            return;
        }
        self.state.apply(Event::ProductFormEdited(form));
        let draft = match self.state.product_form.validate() {
            Ok(draft) => draft,
            Err(reason) => {
                self.state.apply(Event::MutationRejected(reason));
                return;
            }
        };

        self.state.apply(Event::MutationSubmitted(ServiceId::Products));
        match self.products.create(&draft).await {
            Ok(_) => {
                self.state.apply(Event::MutationSettled {
                    service: ServiceId::Products,
                    action: Action::Create,
                    outcome: Ok(()),
                });
                self.refresh().await;
            }
            Err(e) => {
                error!(error = %e, "product create failed");
                self.state.apply(Event::MutationSettled {
                    service: ServiceId::Products,
                    action: Action::Create,
                    outcome: Err(e.to_string()),
                });
            }
        }
    }

    /// First step of the delete flow: record the pending confirmation.
    pub fn request_delete(&mut self, service: ServiceId, id: &str) {
        if self.state.busy || self.state.down(service) {
            return;
        }
        self.state.apply(Event::DeleteRequested(service, id.to_string()));
    }

    /// Second step: the user confirmed. Issue the single call, then re-sync
    /// everything from authoritative server state.
    pub async fn confirm_delete(&mut self) {
        let Some((service, id)) = self.state.pending_delete.clone() else {
            return;
        };
        self.state.apply(Event::DeleteConfirmed);

        self.state.apply(Event::MutationSubmitted(service));
        let outcome = match service {
            ServiceId::Users => self.users.delete(&id).await,
            ServiceId::Products => self.products.delete(&id).await,
        };
        match outcome {
            Ok(()) => {
                self.state.apply(Event::MutationSettled {
                    service,
                    action: Action::Delete,
                    outcome: Ok(()),
                });
                self.refresh().await;
            }
            Err(e) => {
                error!(error = %e, service = service.title(), "delete failed");
                self.state.apply(Event::MutationSettled {
                    service,
                    action: Action::Delete,
                    outcome: Err(e.to_string()),
                });
            }
        }
    }

    /// Declining the confirmation aborts with no state change and no message.
    pub fn cancel_delete(&mut self) {
        self.state.apply(Event::DeleteCancelled);
    }
}
