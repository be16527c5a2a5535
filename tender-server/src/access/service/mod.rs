use {
    super::repository::Repository,
    crate::{
        notification::TenderEvent,
        tender,
    },
    std::sync::Arc,
    tokio::sync::broadcast,
};

pub mod add_admin;
pub mod approve_vendor;
pub mod bulk_approve_vendors;
pub mod ensure_bootstrap_admin;
pub mod get_approved_vendors;
pub mod is_admin;
pub mod is_approved_vendor;
pub mod is_verified_vendor;
pub mod remove_admin;
pub mod revoke_approval;
pub mod revoke_vendor;
pub mod seed_allow_list;
pub mod verification;
pub mod verify_vendor;

pub struct ServiceInner {
    repo:         Arc<Repository>,
    tender_repo:  Arc<tender::repository::Repository>,
    event_sender: broadcast::Sender<TenderEvent>,
}

#[derive(Clone)]
pub struct Service(Arc<ServiceInner>);
impl std::ops::Deref for Service {
    type Target = ServiceInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Service {
    pub fn new(
        repo: Arc<Repository>,
        tender_repo: Arc<tender::repository::Repository>,
        event_sender: broadcast::Sender<TenderEvent>,
    ) -> Self {
        Self(Arc::new(ServiceInner {
            repo,
            tender_repo,
            event_sender,
        }))
    }

    pub(super) fn emit(&self, event: TenderEvent) {
        // Nobody listening is fine; notification delivery is best-effort.
        let _ = self.event_sender.send(event);
    }
}
