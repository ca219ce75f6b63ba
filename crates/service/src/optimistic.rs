//! Caller-side optimistic voting.
//!
//! The local copy flips before the service answers; a failure puts the
//! previous `(vote_count, has_voted)` back. There is no retry.

use tracing::warn;

use models::product::{Product, VoteOutcome};

use crate::errors::ServiceError;
use crate::services::ProductService;

/// Toggle `local` immediately, confirm with the service, revert on error.
///
/// On success `local` takes the service's vote pair, which may differ from
/// the tentative one if `local` was stale.
pub async fn vote_optimistically(products: &ProductService, local: &mut Product) -> Result<VoteOutcome, ServiceError> {
    let previous = local.vote_state();
    local.toggle_vote();

    match products.vote(local.id).await {
        Ok(confirmed) => {
            local.restore_vote_state(confirmed.vote_state());
            Ok(if confirmed.has_voted { VoteOutcome::Voted } else { VoteOutcome::Removed })
        }
        Err(e) => {
            local.restore_vote_state(previous);
            warn!(product_id = local.id, error = %e, "optimistic vote reverted");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn success_keeps_confirmed_state() -> Result<(), anyhow::Error> {
        let ctx = test_support::context();
        let mut local = ctx.products.get_by_id(2).await?;

        let outcome = vote_optimistically(&ctx.products, &mut local).await?;
        assert_eq!(outcome, VoteOutcome::Voted);
        assert_eq!(local.vote_state(), (4, true));

        let outcome = vote_optimistically(&ctx.products, &mut local).await?;
        assert_eq!(outcome, VoteOutcome::Removed);
        assert_eq!(local.vote_state(), (3, false));
        Ok(())
    }

    #[tokio::test]
    async fn failure_reverts_local_copy() -> Result<(), anyhow::Error> {
        let ctx = test_support::context();
        let mut local = ctx.products.get_by_id(2).await?;
        ctx.products.delete(2).await?;

        let err = vote_optimistically(&ctx.products, &mut local).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(local.vote_state(), (3, false));
        Ok(())
    }

    #[tokio::test]
    async fn stale_copy_adopts_service_state() -> Result<(), anyhow::Error> {
        let ctx = test_support::context();
        let mut stale = ctx.products.get_by_id(1).await?;
        // someone else voted in the meantime
        ctx.products.vote(1).await?;

        let outcome = vote_optimistically(&ctx.products, &mut stale).await?;
        assert_eq!(outcome, VoteOutcome::Removed);
        assert_eq!(stale.vote_state(), (5, false));
        Ok(())
    }
}
