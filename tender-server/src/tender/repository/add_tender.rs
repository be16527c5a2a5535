use {
    super::Repository,
    crate::{
        api::RestError,
        kernel::entities::NO_WINNING_BID,
        tender::entities,
    },
};

impl Repository {
    /// Assigns the next sequential tender id. The id counter lock is held
    /// across the database write so ids are allocated in creation order.
    pub async fn add_tender(
        &self,
        create: entities::TenderCreate,
    ) -> Result<entities::Tender, RestError> {
        let mut next_id = self.in_memory_store.next_tender_id.lock().await;
        let tender = entities::Tender {
            id:             *next_id,
            title:          create.title,
            description:    create.description,
            deadline:       create.deadline,
            min_bid:        create.min_bid,
            owner:          create.owner,
            status:         entities::TenderStatus::Active,
            winning_bid_id: NO_WINNING_BID,
            created_at:     create.creation_time,
            document_hash:  create.document_hash,
            is_private:     create.is_private,
            bids_count:     0,
        };
        self.db
            .add_tender(&tender, &create.allowed_bidders)
            .await?;
        *next_id += 1;
        self.in_memory_store
            .tenders
            .write()
            .await
            .insert(tender.id, tender.clone());
        Ok(tender)
    }
}
