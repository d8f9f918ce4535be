//! SetPairScoreHandler - Command handler that writes one pair score.

use std::sync::Arc;

use tracing::info;

use crate::domain::compatibility::{CompatibilityPair, CompatibilityScore};
use crate::domain::foundation::{DomainError, OrganizationId};
use crate::domain::scoring::ProfileCode;
use crate::ports::CompatibilityPairRepository;

/// Command to set the score for an unordered pair of profile codes.
///
/// Keys are raw labels; either order is accepted.
#[derive(Debug, Clone)]
pub struct SetPairScoreCommand {
    pub organization_id: OrganizationId,
    pub a_key: String,
    pub b_key: String,
    pub score: f64,
}

pub struct SetPairScoreHandler {
    pairs: Arc<dyn CompatibilityPairRepository>,
}

impl SetPairScoreHandler {
    pub fn new(pairs: Arc<dyn CompatibilityPairRepository>) -> Self {
        Self { pairs }
    }

    /// Validates and upserts the pair, returning the canonical row.
    pub async fn handle(&self, cmd: SetPairScoreCommand) -> Result<CompatibilityPair, DomainError> {
        let a: ProfileCode = cmd.a_key.trim().parse()?;
        let b: ProfileCode = cmd.b_key.trim().parse()?;
        let score = CompatibilityScore::try_new(cmd.score)?;
        let pair = CompatibilityPair::new(a, b, score)?;

        self.pairs.upsert(cmd.organization_id, &pair).await?;

        info!(
            organization_id = %cmd.organization_id,
            pair = %pair.key(),
            score = score.value(),
            "Compatibility pair score set"
        );

        Ok(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCompatibilityPairRepository;
    use crate::domain::foundation::ErrorCode;

    fn command(org: OrganizationId, a: &str, b: &str, score: f64) -> SetPairScoreCommand {
        SetPairScoreCommand {
            organization_id: org,
            a_key: a.to_string(),
            b_key: b.to_string(),
            score,
        }
    }

    #[tokio::test]
    async fn reversed_write_updates_existing_row() {
        let repo = Arc::new(InMemoryCompatibilityPairRepository::new());
        let handler = SetPairScoreHandler::new(repo.clone());
        let org = OrganizationId::new();

        handler.handle(command(org, "B1", "A1", 40.0)).await.unwrap();
        let row = handler.handle(command(org, "A1", "B1", 55.0)).await.unwrap();

        assert_eq!(row.a_key, ProfileCode::A1);
        assert_eq!(row.b_key, ProfileCode::B1);

        let table = repo.load_table(org).await.unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.score_or_zero(ProfileCode::B1, ProfileCode::A1), 55.0);
    }

    #[tokio::test]
    async fn pairs_are_scoped_per_organization() {
        let repo = Arc::new(InMemoryCompatibilityPairRepository::new());
        let handler = SetPairScoreHandler::new(repo.clone());
        let org = OrganizationId::new();

        handler.handle(command(org, "A1", "C2", 70.0)).await.unwrap();

        let other = repo.load_table(OrganizationId::new()).await.unwrap();
        assert!(other.is_empty());
    }

    #[tokio::test]
    async fn rejects_invalid_writes() {
        let handler = SetPairScoreHandler::new(Arc::new(InMemoryCompatibilityPairRepository::new()));
        let org = OrganizationId::new();

        for cmd in [
            command(org, "A1", "A1", 50.0),
            command(org, "A1", "E1", 50.0),
            command(org, "A1", "B1", 101.0),
            command(org, "A1", "B1", -1.0),
        ] {
            let err = handler.handle(cmd).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationFailed);
        }
    }
}
