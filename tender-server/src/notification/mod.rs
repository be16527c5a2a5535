use {
    crate::{
        kernel::entities::{
            Address,
            TenderId,
        },
        server::{
            EXIT_CHECK_INTERVAL,
            SHOULD_EXIT,
        },
        tender::entities,
    },
    axum::async_trait,
    std::sync::{
        atomic::Ordering,
        Arc,
    },
    tokio::sync::broadcast,
};

mod sinks;

pub use sinks::{
    LogSink,
    WebhookSink,
};

/// Broadcast by the services after a mutation has committed, never before.
#[derive(Clone, Debug)]
pub enum TenderEvent {
    TenderCreated {
        tender: entities::Tender,
    },
    BidSubmitted {
        tender: entities::Tender,
        bid:    entities::Bid,
    },
    TenderClosed {
        tender: entities::Tender,
        award:  entities::TenderAward,
    },
    TenderCancelled {
        tender: entities::Tender,
    },
    VendorApproved {
        tender_id:   TenderId,
        vendor:      Address,
        approved_by: Address,
    },
    VendorApprovalRevoked {
        tender_id:  TenderId,
        vendor:     Address,
        revoked_by: Address,
    },
    VendorVerified {
        vendor: Address,
    },
    VendorRevoked {
        vendor: Address,
    },
    AdminAdded {
        admin:    Address,
        added_by: Address,
    },
    AdminRemoved {
        admin:      Address,
        removed_by: Address,
    },
}

#[async_trait]
pub trait NotificationSink: Send + Sync + 'static {
    async fn notify_new_tender(&self, tender: &entities::Tender) -> anyhow::Result<()>;
    async fn notify_bid_received(
        &self,
        tender: &entities::Tender,
        bid: &entities::Bid,
    ) -> anyhow::Result<()>;
    async fn notify_tender_closed(
        &self,
        tender: &entities::Tender,
        award: &entities::TenderAward,
    ) -> anyhow::Result<()>;
}

/// Drains the event channel and hands lifecycle events to the sink.
/// Best-effort by design: sink failures are logged and dropped so they can
/// never propagate back into a lifecycle operation.
pub async fn run_notification_loop(
    mut receiver: broadcast::Receiver<TenderEvent>,
    sink: Arc<dyn NotificationSink>,
) {
    tracing::info!("Starting notification loop...");
    while !SHOULD_EXIT.load(Ordering::Acquire) {
        tokio::select! {
            event = receiver.recv() => {
                match event {
                    Ok(event) => dispatch(&*sink, event).await,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Notification loop lagged; events dropped");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
            _ = tokio::time::sleep(EXIT_CHECK_INTERVAL) => {}
        }
    }
    tracing::info!("Shutting down notification loop...");
}

async fn dispatch(sink: &dyn NotificationSink, event: TenderEvent) {
    let result = match &event {
        TenderEvent::TenderCreated { tender } => sink.notify_new_tender(tender).await,
        TenderEvent::BidSubmitted { tender, bid } => sink.notify_bid_received(tender, bid).await,
        TenderEvent::TenderClosed { tender, award } => {
            sink.notify_tender_closed(tender, award).await
        }
        // Role changes are audit-logged but not pushed out.
        _ => {
            tracing::debug!(event = ?event, "Access control event");
            Ok(())
        }
    };
    if let Err(e) = result {
        tracing::warn!(error = e.to_string(), event = ?event, "Failed to deliver notification");
    }
}
