//! Table operations.
//!
//! Each operation has its own module composing the request from validated
//! values; [`TableManager`] validates, composes and delegates to the client.

/// Shared table types and helpers.
pub mod common;

/// CreateTable.
pub mod create_table;

/// DeleteTable.
pub mod delete_table;

/// DescribeTable.
pub mod describe_table;

/// ListTables.
pub mod list_tables;

/// DescribeTimeToLive and UpdateTimeToLive.
pub mod time_to_live;

/// UpdateTable.
pub mod update_table;

use crate::client::{self, CancellationToken, DynamoDbClient, SdkResult};
use crate::index::primary_index::PrimaryIndex;

use aws_sdk_dynamodb::{Client, operation};

/// Validates table requests and hands them to the database client.
///
/// Behaves like [`crate::item::ItemManager`]: outputs and service failures are
/// returned unchanged, and nothing is sent when validation fails or the token
/// is already cancelled.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_manager::client::CancellationToken;
/// use dynamodb_manager::index::{key, primary_index::PrimaryIndex};
/// use dynamodb_manager::table::TableManager;
///
/// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
/// let manager = TableManager::new(client);
/// let partition_key = key::PartitionKey::new("id", key::ScalarType::String)?;
/// let index = PrimaryIndex::new(partition_key, Default::default());
/// manager
///     .create_table("users", &index, Default::default(), &CancellationToken::new())
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct TableManager<C = Client> {
    client: C,
}

impl<C: DynamoDbClient> TableManager<C> {
    /// Manager delegating to `client`.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Create `table` keyed by `index`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_manager.create_table", skip(self, index, options, cancel), err)
    )]
    pub async fn create_table(
        &self,
        table: &str,
        index: &PrimaryIndex,
        options: create_table::TableOptions,
        cancel: &CancellationToken,
    ) -> SdkResult<operation::create_table::CreateTableOutput, operation::create_table::CreateTableError>
    {
        let input = client::prepare(create_table::build_input(table, index, options), cancel)?;
        self.client.create_table(input, cancel.clone()).await
    }

    /// Delete `table`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_manager.delete_table", skip(self, cancel), err)
    )]
    pub async fn delete_table(
        &self,
        table: &str,
        cancel: &CancellationToken,
    ) -> SdkResult<operation::delete_table::DeleteTableOutput, operation::delete_table::DeleteTableError>
    {
        let input = client::prepare(delete_table::build_input(table), cancel)?;
        self.client.delete_table(input, cancel.clone()).await
    }

    /// Describe `table`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_manager.describe_table", skip(self, cancel), err)
    )]
    pub async fn describe_table(
        &self,
        table: &str,
        cancel: &CancellationToken,
    ) -> SdkResult<
        operation::describe_table::DescribeTableOutput,
        operation::describe_table::DescribeTableError,
    > {
        let input = client::prepare(describe_table::build_input(table), cancel)?;
        self.client.describe_table(input, cancel.clone()).await
    }

    /// Describe the expiry settings of `table`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_manager.describe_time_to_live", skip(self, cancel), err)
    )]
    pub async fn describe_time_to_live(
        &self,
        table: &str,
        cancel: &CancellationToken,
    ) -> SdkResult<
        operation::describe_time_to_live::DescribeTimeToLiveOutput,
        operation::describe_time_to_live::DescribeTimeToLiveError,
    > {
        let input = client::prepare(time_to_live::build_describe_input(table), cancel)?;
        self.client.describe_time_to_live(input, cancel.clone()).await
    }

    /// List one page of table names.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_manager.list_tables", skip(self, cancel), err)
    )]
    pub async fn list_tables(
        &self,
        options: list_tables::ListTablesOptions,
        cancel: &CancellationToken,
    ) -> SdkResult<operation::list_tables::ListTablesOutput, operation::list_tables::ListTablesError>
    {
        let input = client::prepare(list_tables::build_input(options), cancel)?;
        self.client.list_tables(input, cancel.clone()).await
    }

    /// Change the throughput, streams or global secondary indexes of `table`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_manager.update_table", skip(self, options, cancel), err)
    )]
    pub async fn update_table(
        &self,
        table: &str,
        options: update_table::UpdateTableOptions,
        cancel: &CancellationToken,
    ) -> SdkResult<operation::update_table::UpdateTableOutput, operation::update_table::UpdateTableError>
    {
        let input = client::prepare(update_table::build_input(table, options), cancel)?;
        self.client.update_table(input, cancel.clone()).await
    }

    /// Enable or disable item expiry on `table`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_manager.update_time_to_live", skip(self, cancel), err)
    )]
    pub async fn update_time_to_live(
        &self,
        table: &str,
        options: time_to_live::TimeToLiveOptions,
        cancel: &CancellationToken,
    ) -> SdkResult<
        operation::update_time_to_live::UpdateTimeToLiveOutput,
        operation::update_time_to_live::UpdateTimeToLiveError,
    > {
        let input = client::prepare(time_to_live::build_update_input(table, options), cancel)?;
        self.client.update_time_to_live(input, cancel.clone()).await
    }

    /// The account's provisioned capacity quotas.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_manager.describe_limits", skip(self, cancel), err)
    )]
    pub async fn describe_limits(
        &self,
        cancel: &CancellationToken,
    ) -> SdkResult<
        operation::describe_limits::DescribeLimitsOutput,
        operation::describe_limits::DescribeLimitsError,
    > {
        let input = operation::describe_limits::DescribeLimitsInput::builder()
            .build()
            .map_err(crate::Error::from);
        let input = client::prepare(input, cancel)?;
        self.client.describe_limits(input, cancel.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::client::testing::{RecordingClient, Request};
    use crate::index::key;

    use aws_sdk_dynamodb::error;

    fn primary_index() -> PrimaryIndex {
        let partition_key = key::PartitionKey::new("id", key::ScalarType::String).unwrap();
        PrimaryIndex::new(partition_key, Default::default())
    }

    #[tokio::test]
    async fn test_create_table_reaches_client() {
        let manager = TableManager::new(RecordingClient::default());
        manager
            .create_table("users", &primary_index(), Default::default(), &CancellationToken::new())
            .await
            .unwrap();
        let expected =
            create_table::build_input("users", &primary_index(), Default::default()).unwrap();
        assert_eq!(manager.client().requests(), vec![Request::CreateTable(expected)]);
    }

    #[tokio::test]
    async fn test_every_operation_reaches_client() {
        let manager = TableManager::new(RecordingClient::default());
        let cancel = CancellationToken::new();
        manager.delete_table("users", &cancel).await.unwrap();
        manager.describe_table("users", &cancel).await.unwrap();
        manager.describe_time_to_live("users", &cancel).await.unwrap();
        manager.list_tables(Default::default(), &cancel).await.unwrap();
        manager
            .update_table("users", Default::default(), &cancel)
            .await
            .unwrap();
        manager
            .update_time_to_live("users", Default::default(), &cancel)
            .await
            .unwrap();
        manager.describe_limits(&cancel).await.unwrap();
        let requests = manager.client().requests();
        assert_eq!(requests.len(), 7);
        assert!(matches!(requests[0], Request::DeleteTable(_)));
        assert!(matches!(requests[1], Request::DescribeTable(_)));
        assert!(matches!(requests[2], Request::DescribeTimeToLive(_)));
        assert!(matches!(requests[3], Request::ListTables(_)));
        assert!(matches!(requests[4], Request::UpdateTable(_)));
        assert!(matches!(requests[5], Request::UpdateTimeToLive(_)));
        assert!(matches!(requests[6], Request::DescribeLimits(_)));
    }

    #[tokio::test]
    async fn test_cancelled_before_dispatch() {
        let manager = TableManager::new(RecordingClient::default());
        let cancel = CancellationToken::new();
        cancel.cancel();
        let error = manager.delete_table("users", &cancel).await.unwrap_err();
        assert!(matches!(error, error::SdkError::ConstructionFailure(_)));
        assert!(matches!(Error::find(&error), Some(Error::Cancelled)));
        assert!(manager.client().requests().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_table_not_dispatched() {
        let manager = TableManager::new(RecordingClient::default());
        let error = manager
            .create_table("u", &primary_index(), Default::default(), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(
            Error::find(&error),
            Some(Error::InvalidArgument { .. })
        ));
        assert!(manager.client().requests().is_empty());
    }

    #[tokio::test]
    async fn test_service_failure_passed_through() {
        let manager = TableManager::new(RecordingClient::unavailable());
        let error = manager
            .describe_table("users", &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(error, error::SdkError::TimeoutError(_)));
        assert!(Error::find(&error).is_none());
    }
}
