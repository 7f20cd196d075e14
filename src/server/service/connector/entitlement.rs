use std::collections::BTreeSet;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    config::ConnectorConfig,
    data::connector::set::SetRepository,
    error::Error,
    model::{db::ConnectorUserModel, identity::CredentialStatus},
    service::user::identity::IdentityService,
};

/// Reason a linked user is denied every set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDenial {
    /// The user holds no valid refresh token at all.
    NoCredentials,
    /// Strict mode is enabled and some characters lack a valid refresh token.
    IncompleteCredentials,
    /// The user account is disabled.
    Inactive,
}

/// Decide whether a user may be granted any set.
///
/// Returns `None` when resolution may proceed.
pub fn gate_denial(
    active: bool,
    credentials: &CredentialStatus,
    strict_mode: bool,
) -> Option<GateDenial> {
    if !credentials.has_credentials() {
        return Some(GateDenial::NoCredentials);
    }

    if strict_mode && !credentials.all_valid() {
        return Some(GateDenial::IncompleteCredentials);
    }

    if !active {
        return Some(GateDenial::Inactive);
    }

    None
}

/// Resolves the sets a linked user is entitled to.
///
/// A resolver is meant to live for a single lookup session. The first non-empty result for a
/// linked user is cached and returned by later calls for that same linked user, gating is
/// still evaluated on every call.
pub struct EntitlementResolver<'a> {
    db: &'a DatabaseConnection,
    config: &'a ConnectorConfig,
    cache: Option<(i32, BTreeSet<String>)>,
}

impl<'a> EntitlementResolver<'a> {
    /// Creates a new instance of [`EntitlementResolver`] with an empty cache
    pub fn new(db: &'a DatabaseConnection, config: &'a ConnectorConfig) -> Self {
        Self {
            db,
            config,
            cache: None,
        }
    }

    /// Computes the `connector_id` of every set the linked user is entitled to.
    ///
    /// Only sets sharing the linked user's connector type are considered. A set is granted
    /// when any of its criteria matches the user directly, one of their roles or squads, or
    /// the corporation, alliance or a title of one of their credentialed characters. Public
    /// sets are granted to every user passing gating.
    ///
    /// # Returns
    /// - `Ok(BTreeSet<String>)` - Entitled set IDs, empty when the user is gated
    /// - `Err(Error::DbErr)` - The identity user does not exist or a query failed
    pub async fn resolve_entitlements(
        &mut self,
        linked_user: &ConnectorUserModel,
    ) -> Result<BTreeSet<String>, Error> {
        let identity = IdentityService::new(self.db);

        let user = identity.get_user(linked_user.user_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("user ID {}", linked_user.user_id))
        })?;
        let credentials = identity.get_credential_status(user.id).await?;

        if let Some(denial) = gate_denial(user.active, &credentials, self.config.strict_mode) {
            tracing::debug!(
                "{} user ID {} denied all sets: {:?}",
                linked_user.connector_type,
                user.id,
                denial
            );

            return Ok(BTreeSet::new());
        }

        if let Some((cached_id, sets)) = &self.cache {
            if *cached_id == linked_user.id && !sets.is_empty() {
                return Ok(sets.clone());
            }
        }

        let (affiliations, role_ids, squad_ids) = tokio::try_join!(
            identity.get_affiliations(&credentials.credentialed_character_ids),
            identity.get_role_ids(user.id),
            identity.get_squad_ids(user.id),
        )?;

        let set_repo = SetRepository::new(self.db);
        let connector_type = linked_user.connector_type.as_str();

        let (
            user_sets,
            role_sets,
            corporation_sets,
            title_sets,
            alliance_sets,
            squad_sets,
            public_sets,
        ) = tokio::try_join!(
            set_repo.get_user_sets(connector_type, user.id),
            set_repo.get_role_sets(connector_type, &role_ids),
            set_repo.get_corporation_sets(connector_type, &affiliations.corporation_ids),
            set_repo.get_title_sets(connector_type, &affiliations.title_ids),
            set_repo.get_alliance_sets(connector_type, &affiliations.alliance_ids),
            set_repo.get_squad_sets(connector_type, &squad_ids),
            set_repo.get_public_sets(connector_type),
        )?;

        let sets: BTreeSet<String> = [
            user_sets,
            role_sets,
            corporation_sets,
            title_sets,
            alliance_sets,
            squad_sets,
            public_sets,
        ]
        .into_iter()
        .flatten()
        .collect();

        tracing::debug!(
            "{} user ID {} entitled to {} sets",
            connector_type,
            user.id,
            sets.len()
        );

        self.cache = Some((linked_user.id, sets.clone()));

        Ok(sets)
    }

    /// Whether the linked user is entitled to the set with the provided `connector_id`.
    pub async fn is_entitled(
        &mut self,
        linked_user: &ConnectorUserModel,
        set_id: &str,
    ) -> Result<bool, Error> {
        Ok(self.resolve_entitlements(linked_user).await?.contains(set_id))
    }
}
