//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,
    include_connector_tables: bool,

    // Database fixtures to insert
    alliances: Vec<i64>,
    corporations: Vec<(i64, Option<i64>)>, // (corp_id, alliance_id)
    characters: Vec<(i64, i64, Option<i64>)>, // (char_id, corp_id, alliance_id)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            include_connector_tables: false,
            alliances: Vec::new(),
            corporations: Vec::new(),
            characters: Vec::new(),
        }
    }

    /// Add the identity tables to the test database.
    ///
    /// Creates the EVE tables (alliances, corporations, characters, titles) and the
    /// Heimdall user tables (users, character ownership, refresh tokens, roles, squads).
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add the connector tables to the test database.
    ///
    /// Creates the set, set criteria, linked user and connector log tables.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_connector_tables(mut self) -> Self {
        self.include_connector_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use heimdall_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), heimdall_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(ConnectorLog)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock alliance into database.
    pub fn with_mock_alliance(mut self, alliance_id: i64) -> Self {
        self.alliances.push(alliance_id);
        self
    }

    /// Insert mock corporation into database, creating its alliance if needed.
    pub fn with_mock_corporation(mut self, corporation_id: i64, alliance_id: Option<i64>) -> Self {
        self.corporations.push((corporation_id, alliance_id));
        self
    }

    /// Insert mock character into database with its corporation and alliance.
    pub fn with_mock_character(
        mut self,
        character_id: i64,
        corporation_id: i64,
        alliance_id: Option<i64>,
    ) -> Self {
        self.characters
            .push((character_id, corporation_id, alliance_id));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (user tables, connector tables, then custom tables)
    /// 2. Inserts database fixtures (alliances, corporations, characters)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_user_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::EveAlliance),
                schema.create_table_from_entity(entity::prelude::EveCorporation),
                schema.create_table_from_entity(entity::prelude::EveCharacter),
                schema.create_table_from_entity(entity::prelude::EveCorporationTitle),
                schema.create_table_from_entity(entity::prelude::EveCharacterTitle),
                schema.create_table_from_entity(entity::prelude::HeimdallUser),
                schema.create_table_from_entity(entity::prelude::HeimdallUserCharacter),
                schema.create_table_from_entity(entity::prelude::HeimdallRefreshToken),
                schema.create_table_from_entity(entity::prelude::HeimdallRole),
                schema.create_table_from_entity(entity::prelude::HeimdallUserRole),
                schema.create_table_from_entity(entity::prelude::HeimdallSquad),
                schema.create_table_from_entity(entity::prelude::HeimdallSquadMember),
            ]);
        }

        if self.include_connector_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::ConnectorSet),
                schema.create_table_from_entity(entity::prelude::ConnectorSetEntity),
                schema.create_table_from_entity(entity::prelude::ConnectorUser),
                schema.create_table_from_entity(entity::prelude::ConnectorLog),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert fixtures
        for alliance_id in self.alliances {
            setup.eve().insert_mock_alliance(alliance_id).await?;
        }

        for (corp_id, alliance_id) in self.corporations {
            setup
                .eve()
                .insert_mock_corporation(corp_id, alliance_id)
                .await?;
        }

        for (char_id, corp_id, alliance_id) in self.characters {
            setup
                .eve()
                .insert_mock_character(char_id, corp_id, alliance_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
