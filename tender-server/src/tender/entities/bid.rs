use {
    crate::kernel::entities::{
        Address,
        Amount,
        BidId,
        TenderId,
    },
    strum::Display,
    time::OffsetDateTime,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum BidStatus {
    Pending,
    Won,
    Lost,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bid {
    /// Unique within the owning tender, assigned in submission order
    /// starting at 1.
    pub id:              BidId,
    pub tender_id:       TenderId,
    pub bidder:          Address,
    pub amount:          Amount,
    pub proposal:        String,
    pub status:          BidStatus,
    pub submission_time: OffsetDateTime,
}

/// Submission parameters. The repository assigns the id within the
/// tender's critical section.
#[derive(Clone, Debug)]
pub struct BidCreate {
    pub tender_id:       TenderId,
    pub bidder:          Address,
    pub amount:          Amount,
    pub proposal:        String,
    pub submission_time: OffsetDateTime,
}

/// The winning bid is the lexicographic minimum of
/// (amount, submission time, bid id). Returns None for an empty slice.
pub fn select_winner(bids: &[Bid]) -> Option<&Bid> {
    bids.iter()
        .min_by_key(|bid| (bid.amount, bid.submission_time, bid.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bid(id: BidId, amount: Amount, submitted_at: i64) -> Bid {
        Bid {
            id,
            tender_id: 1,
            bidder: format!("bidder-{id}"),
            amount,
            proposal: "proposal".to_string(),
            status: BidStatus::Pending,
            submission_time: OffsetDateTime::from_unix_timestamp(submitted_at).unwrap(),
        }
    }

    #[test]
    fn test_lowest_amount_wins() {
        let bids = vec![bid(1, 150, 1), bid(2, 150, 0), bid(3, 120, 2)];
        assert_eq!(select_winner(&bids).unwrap().id, 3);
    }

    #[test]
    fn test_amount_tie_broken_by_earliest_submission() {
        let bids = vec![bid(1, 150, 5), bid(2, 150, 3), bid(3, 200, 0)];
        assert_eq!(select_winner(&bids).unwrap().id, 2);
    }

    #[test]
    fn test_full_tie_broken_by_lowest_id() {
        let bids = vec![bid(2, 150, 3), bid(1, 150, 3)];
        assert_eq!(select_winner(&bids).unwrap().id, 1);
    }

    #[test]
    fn test_no_bids_no_winner() {
        assert!(select_winner(&[]).is_none());
    }
}
