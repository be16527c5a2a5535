use {
    super::NotificationSink,
    crate::tender::entities,
    axum::async_trait,
};

/// Posts notification payloads to a configured webhook endpoint.
pub struct WebhookSink {
    client:      reqwest::Client,
    webhook_url: String,
}

impl WebhookSink {
    pub fn new(webhook_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url,
        }
    }

    async fn post(&self, payload: serde_json::Value) -> anyhow::Result<()> {
        self.client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl NotificationSink for WebhookSink {
    async fn notify_new_tender(&self, tender: &entities::Tender) -> anyhow::Result<()> {
        self.post(serde_json::json!({
            "type": "new_tender",
            "tender_id": tender.id,
            "title": tender.title,
            "deadline": tender.deadline.to_string(),
            "min_bid": tender.min_bid,
            "is_private": tender.is_private,
        }))
        .await
    }

    async fn notify_bid_received(
        &self,
        tender: &entities::Tender,
        bid: &entities::Bid,
    ) -> anyhow::Result<()> {
        self.post(serde_json::json!({
            "type": "bid_received",
            "tender_id": tender.id,
            "title": tender.title,
            "bid_id": bid.id,
            "amount": bid.amount,
        }))
        .await
    }

    async fn notify_tender_closed(
        &self,
        tender: &entities::Tender,
        award: &entities::TenderAward,
    ) -> anyhow::Result<()> {
        self.post(serde_json::json!({
            "type": "tender_closed",
            "tender_id": tender.id,
            "title": tender.title,
            "winning_bid_id": award.winning_bid_id,
            "winner": award.winner,
            "winning_amount": award.winning_amount,
        }))
        .await
    }
}

/// Fallback sink used when no webhook is configured.
pub struct LogSink;

#[async_trait]
impl NotificationSink for LogSink {
    async fn notify_new_tender(&self, tender: &entities::Tender) -> anyhow::Result<()> {
        tracing::info!(tender_id = tender.id, title = tender.title, "New tender");
        Ok(())
    }

    async fn notify_bid_received(
        &self,
        tender: &entities::Tender,
        bid: &entities::Bid,
    ) -> anyhow::Result<()> {
        tracing::info!(tender_id = tender.id, bid_id = bid.id, "Bid received");
        Ok(())
    }

    async fn notify_tender_closed(
        &self,
        tender: &entities::Tender,
        award: &entities::TenderAward,
    ) -> anyhow::Result<()> {
        tracing::info!(
            tender_id = tender.id,
            winning_bid_id = award.winning_bid_id,
            "Tender closed"
        );
        Ok(())
    }
}
