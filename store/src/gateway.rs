use std::sync::Arc;

use pokedeck_team::{NewTeam, StoredPokemon, TeamPatch, TeamRecord};

use crate::traits::TeamStore;
use crate::{Result, StoreError};

/// Team persistence operations on top of a [`TeamStore`].
///
/// Every failure is logged and returned unchanged; nothing is retried.
#[derive(Clone)]
pub struct TeamGateway {
    store: Arc<dyn TeamStore>,
}

impl TeamGateway {
    pub fn new(store: Arc<dyn TeamStore>) -> Self {
        Self { store }
    }

    /// Create a team with server timestamps and `favorite = false`
    pub async fn create_team(
        &self,
        user_id: &str,
        name: &str,
        pokemon: Vec<StoredPokemon>,
    ) -> Result<TeamRecord> {
        let team = NewTeam {
            user_id: user_id.to_string(),
            name: name.to_string(),
            pokemon,
        };

        let record = self.store.insert(team).await.inspect_err(|e| {
            tracing::error!(user_id, name, error = %e, "Failed to create team");
        })?;

        tracing::info!(team_id = %record.id, user_id, name, "Created team");
        Ok(record)
    }

    /// All teams of a user, newest first
    pub async fn teams_for_user(&self, user_id: &str) -> Result<Vec<TeamRecord>> {
        let mut teams = self.store.find_by_user(user_id).await.inspect_err(|e| {
            tracing::error!(user_id, error = %e, "Failed to list teams");
        })?;

        teams.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(teams)
    }

    /// A team by id, only if it belongs to `user_id`
    pub async fn team_for_user(&self, user_id: &str, team_id: &str) -> Result<Option<TeamRecord>> {
        let teams = self.teams_for_user(user_id).await?;
        Ok(teams.into_iter().find(|t| t.id == team_id))
    }

    /// Teams of a user marked as favorite, newest first
    pub async fn favorite_teams(&self, user_id: &str) -> Result<Vec<TeamRecord>> {
        let mut teams = self.teams_for_user(user_id).await?;
        teams.retain(|t| t.favorite);
        Ok(teams)
    }

    /// Exact-match check on the user's team names
    pub async fn check_team_name_exists(&self, user_id: &str, name: &str) -> Result<bool> {
        let matches = self
            .store
            .find_by_user_and_name(user_id, name)
            .await
            .inspect_err(|e| {
                tracing::error!(user_id, name, error = %e, "Failed to check team name");
            })?;

        Ok(!matches.is_empty())
    }

    /// Apply a partial update; the patch is not validated
    pub async fn update_team(&self, team_id: &str, patch: &TeamPatch) -> Result<()> {
        self.store.update(team_id, patch).await.inspect_err(|e| {
            tracing::error!(team_id, error = %e, "Failed to update team");
        })?;

        tracing::info!(
            team_id,
            name = patch.name.is_some(),
            pokemon = patch.pokemon.is_some(),
            favorite = patch.favorite.is_some(),
            "Updated team"
        );
        Ok(())
    }

    /// Flip the favorite flag, returning the new value
    pub async fn toggle_favorite(&self, team_id: &str) -> Result<bool> {
        let team = self
            .store
            .get(team_id)
            .await
            .inspect_err(|e| {
                tracing::error!(team_id, error = %e, "Failed to load team");
            })?
            .ok_or_else(|| StoreError::NotFound(team_id.to_string()))?;

        let favorite = !team.favorite;
        self.update_team(team_id, &TeamPatch::favorite(favorite)).await?;
        Ok(favorite)
    }

    /// Delete unconditionally; confirming is the caller's job
    pub async fn delete_team(&self, team_id: &str) -> Result<()> {
        self.store.delete(team_id).await.inspect_err(|e| {
            tracing::error!(team_id, error = %e, "Failed to delete team");
        })?;

        tracing::info!(team_id, "Deleted team");
        Ok(())
    }

    /// Number of teams across all users
    pub async fn count_teams(&self) -> Result<usize> {
        self.store.count().await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to count teams");
        })
    }
}
