use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::product::ProductId;

/// Vote ledger entry. Independent of `Product::vote_count`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub product_id: ProductId,
    pub timestamp: DateTime<Utc>,
}

/// Input for a ledger append; the timestamp is assigned by the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewVote {
    pub product_id: ProductId,
}

impl NewVote {
    pub fn into_vote(self, timestamp: DateTime<Utc>) -> Vote {
        Vote { product_id: self.product_id, timestamp }
    }
}
