use {
    crate::{
        access,
        api,
        config::{
            Config,
            RunOptions,
        },
        kernel::document_store::{
            DocumentStore,
            HttpDocumentStore,
            InMemoryDocumentStore,
        },
        metrics_api,
        notification::{
            self,
            LogSink,
            NotificationSink,
            WebhookSink,
        },
        state::{
            Store,
            StoreNew,
        },
        tender,
    },
    anyhow::anyhow,
    axum_prometheus::PrometheusMetricLayerBuilder,
    futures::future::join_all,
    sqlx::postgres::PgPoolOptions,
    std::{
        collections::HashMap,
        sync::{
            atomic::{
                AtomicBool,
                Ordering,
            },
            Arc,
        },
        time::Duration,
    },
    tokio::sync::{
        broadcast,
        RwLock,
    },
    tokio_util::task::TaskTracker,
};

const NOTIFICATIONS_CHAN_LEN: usize = 1000;

pub async fn start_server(run_options: RunOptions) -> anyhow::Result<()> {
    tokio::spawn(async move {
        tracing::info!("Registered shutdown signal handler...");
        tokio::signal::ctrl_c().await.unwrap();
        tracing::info!("Shut down signal received, waiting for tasks...");
        SHOULD_EXIT.store(true, Ordering::Release);
    });

    let config = Config::load(&run_options.config.config).map_err(|err| {
        anyhow!(
            "Failed to load config from file({path}): {:?}",
            err,
            path = run_options.config.config
        )
    })?;

    let db = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&run_options.server.database_url)
        .await
        .map_err(|err| anyhow!("Failed to connect to database: {:?}", err))?;

    let (event_sender, event_receiver) = broadcast::channel(NOTIFICATIONS_CHAN_LEN);
    let (prometheus_layer, metrics_recorder) = PrometheusMetricLayerBuilder::new()
        .with_prefix("tender_server")
        .with_default_metrics()
        .build_pair();

    let tender_repo = Arc::new(tender::repository::Repository::new(db.clone()));
    let access_repo = Arc::new(access::repository::Repository::new(db.clone()));
    tender_repo.warm_up().await?;
    access_repo.warm_up().await?;

    let access_service = access::service::Service::new(
        access_repo,
        tender_repo.clone(),
        event_sender.clone(),
    );
    access_service
        .ensure_bootstrap_admin(&config.bootstrap_admin)
        .await?;
    let tender_service = tender::service::Service::new(
        tender_repo,
        access_service.clone(),
        event_sender.clone(),
        config.tender.clone().into(),
    );

    let document_store: Arc<dyn DocumentStore> = match &config.document_gateway_url {
        Some(url) => Arc::new(HttpDocumentStore::new(url.clone())),
        None => {
            tracing::warn!("No document gateway configured; holding documents in memory");
            Arc::new(InMemoryDocumentStore::default())
        }
    };
    let notification_sink: Arc<dyn NotificationSink> = match &config.notification_webhook_url {
        Some(url) => Arc::new(WebhookSink::new(url.clone())),
        None => Arc::new(LogSink),
    };

    let store = Arc::new(Store {
        db,
        access_tokens: RwLock::new(HashMap::new()),
        metrics_recorder,
    });
    let task_tracker = TaskTracker::new();
    task_tracker.spawn(notification::run_notification_loop(
        event_receiver,
        notification_sink,
    ));
    let store_new = Arc::new(StoreNew {
        store: store.clone(),
        tender_service,
        access_service,
        document_store,
    });

    let server_loop = tokio::spawn(api::start_api(
        run_options.server.listen_addr,
        store_new,
        prometheus_layer,
    ));
    let metrics_loop = tokio::spawn(metrics_api::start_metrics(run_options, store));
    let results = join_all(vec![server_loop, metrics_loop]).await;
    task_tracker.close();
    task_tracker.wait().await;
    for result in results {
        result??;
    }
    Ok(())
}

// A static exit flag to indicate to running threads that we're shutting down. This is used to
// gracefully shutdown the application.
//
// NOTE: A more idiomatic approach would be to use a tokio::sync::broadcast channel, and to send a
// shutdown signal to all running tasks. However, this is a bit more complicated to implement and
// we don't rely on global state for anything else.
pub(crate) static SHOULD_EXIT: AtomicBool = AtomicBool::new(false);
pub const EXIT_CHECK_INTERVAL: Duration = Duration::from_secs(1);
