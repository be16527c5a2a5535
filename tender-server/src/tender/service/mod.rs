use {
    super::repository::Repository,
    crate::{
        access,
        notification::TenderEvent,
    },
    std::{
        sync::Arc,
        time::Duration,
    },
    tokio::sync::broadcast,
};

pub mod cancel_tender;
pub mod close_tender;
pub mod create_tender;
pub mod get_bid;
pub mod get_tender;
pub mod get_tender_bids;
pub mod get_tenders;
pub mod submit_bid;
pub mod verification;

#[derive(Clone, Debug)]
pub struct Config {
    pub max_deadline_ahead: Duration,
    pub max_page_size:      u64,
}

impl From<crate::config::TenderConfig> for Config {
    fn from(config: crate::config::TenderConfig) -> Self {
        Self {
            max_deadline_ahead: config.max_deadline_ahead,
            max_page_size:      config.max_page_size,
        }
    }
}

pub struct ServiceInner {
    repo:         Arc<Repository>,
    access:       access::service::Service,
    event_sender: broadcast::Sender<TenderEvent>,
    config:       Config,
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
        access: access::service::Service,
        event_sender: broadcast::Sender<TenderEvent>,
        config: Config,
    ) -> Self {
        Self(Arc::new(ServiceInner {
            repo,
            access,
            event_sender,
            config,
        }))
    }

    pub(super) fn emit(&self, event: TenderEvent) {
        // Nobody listening is fine; notification delivery is best-effort.
        let _ = self.event_sender.send(event);
    }
}

#[cfg(test)]
pub mod tests {
    use {
        super::{
            Config,
            Service,
        },
        crate::{
            access,
            tender::repository::{
                MockDatabase,
                Repository,
            },
        },
        std::{
            sync::Arc,
            time::Duration,
        },
        tokio::sync::broadcast,
    };

    impl Config {
        pub fn for_tests() -> Self {
            Self {
                max_deadline_ahead: Duration::from_secs(90 * 24 * 60 * 60),
                max_page_size:      100,
            }
        }
    }

    impl Service {
        pub fn new_with_mocks(
            tender_db: MockDatabase,
            access_db: access::repository::MockDatabase,
        ) -> (Service, access::service::Service) {
            let (event_sender, _) = broadcast::channel(100);
            let tender_repo = Arc::new(Repository::new(tender_db));
            let access_repo = Arc::new(access::repository::Repository::new(access_db));
            let access_service = access::service::Service::new(
                access_repo,
                tender_repo.clone(),
                event_sender.clone(),
            );
            let service = Service::new(
                tender_repo,
                access_service.clone(),
                event_sender,
                Config::for_tests(),
            );
            (service, access_service)
        }
    }
}
