use {
    super::{
        create_tender::CreateTenderInput,
        Service,
    },
    crate::api::RestError,
    time::OffsetDateTime,
};

const DEFAULT_PAGE_SIZE: u64 = 20;

impl Service {
    /// All creation preconditions, checked before any state is touched.
    pub(super) fn validate_create_tender(
        &self,
        input: &CreateTenderInput,
        now: OffsetDateTime,
    ) -> Result<(), RestError> {
        if input.title.trim().is_empty() {
            return Err(RestError::BadParameters("title must not be empty".to_string()));
        }
        if input.description.trim().is_empty() {
            return Err(RestError::BadParameters(
                "description must not be empty".to_string(),
            ));
        }
        if input.deadline <= now {
            return Err(RestError::BadParameters(
                "deadline must be strictly in the future".to_string(),
            ));
        }
        if input.deadline > now + self.config.max_deadline_ahead {
            return Err(RestError::BadParameters(format!(
                "deadline must be within {} days",
                self.config.max_deadline_ahead.as_secs() / (24 * 60 * 60)
            )));
        }
        if input.min_bid == 0 {
            return Err(RestError::BadParameters(
                "minimum bid must be greater than 0".to_string(),
            ));
        }
        if input.is_private && input.allowed_bidders.is_empty() {
            return Err(RestError::BadParameters(
                "private tenders must specify allowed bidders".to_string(),
            ));
        }
        if !input.is_private && !input.allowed_bidders.is_empty() {
            return Err(RestError::BadParameters(
                "allowed bidders are only valid for private tenders".to_string(),
            ));
        }
        if input.allowed_bidders.iter().any(|a| a.trim().is_empty()) {
            return Err(RestError::BadParameters(
                "allowed bidders must not contain empty addresses".to_string(),
            ));
        }
        Ok(())
    }

    pub(super) fn clamp_page_limit(&self, limit: Option<u64>) -> u64 {
        limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(self.config.max_page_size)
    }
}
