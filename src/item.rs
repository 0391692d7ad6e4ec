//! Item operations and the values they are built from.
//!
//! This module provides:
//! - [`primary_key::PrimaryKey`], [`table_item::TableItem`] and [`expression::Expression`]
//! - the per-operation options and request composition (one module per operation)
//! - [`ItemManager`], which validates, composes and delegates to the client

/// Options shared by item operations.
pub mod common;

/// DeleteItem.
pub mod delete_item;

/// Substitution values for expressions.
pub mod expression;

/// GetItem.
pub mod get_item;

/// Item addressing keys.
pub mod primary_key;

/// PutItem.
pub mod put_item;

/// Query.
pub mod query;

/// Scan.
pub mod scan;

/// Full items.
pub mod table_item;

/// UpdateItem.
pub mod update_item;

use crate::client::{self, CancellationToken, DynamoDbClient, SdkResult};

use aws_sdk_dynamodb::{Client, operation};

/// Validates item requests and hands them to the database client.
///
/// Responses and service failures come back untouched. Rejected input and a
/// token cancelled before dispatch surface as a construction failure, from
/// which [`crate::Error::find`] recovers the reason; the client is not called.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_manager::client::CancellationToken;
/// use dynamodb_manager::item::{ItemManager, table_item::TableItem};
///
/// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
/// let manager = ItemManager::new(client);
/// let item = TableItem::new().with_string("id", "1").with_number("visits", 0u32);
/// manager
///     .put_item("users", item, Default::default(), &CancellationToken::new())
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ItemManager<C = Client> {
    client: C,
}

impl<C: DynamoDbClient> ItemManager<C> {
    /// Manager delegating to `client`.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Create or replace `item` in `table`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_manager.put_item", skip(self, item, options, cancel), err)
    )]
    pub async fn put_item(
        &self,
        table: &str,
        item: table_item::TableItem,
        options: common::ItemOptions,
        cancel: &CancellationToken,
    ) -> SdkResult<operation::put_item::PutItemOutput, operation::put_item::PutItemError> {
        let input = client::prepare(put_item::build_input(table, item, options), cancel)?;
        self.client.put_item(input, cancel.clone()).await
    }

    /// Delete the item addressed by `key` from `table`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_manager.delete_item", skip(self, key, options, cancel), err)
    )]
    pub async fn delete_item(
        &self,
        table: &str,
        key: &primary_key::PrimaryKey,
        options: common::ItemOptions,
        cancel: &CancellationToken,
    ) -> SdkResult<operation::delete_item::DeleteItemOutput, operation::delete_item::DeleteItemError>
    {
        let input = client::prepare(delete_item::build_input(table, key, options), cancel)?;
        self.client.delete_item(input, cancel.clone()).await
    }

    /// Read the item addressed by `key` from `table`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_manager.get_item", skip(self, key, options, cancel), err)
    )]
    pub async fn get_item(
        &self,
        table: &str,
        key: &primary_key::PrimaryKey,
        options: common::ResponseOptions,
        cancel: &CancellationToken,
    ) -> SdkResult<operation::get_item::GetItemOutput, operation::get_item::GetItemError> {
        let input = client::prepare(get_item::build_input(table, key, options), cancel)?;
        self.client.get_item(input, cancel.clone()).await
    }

    /// Update the item addressed by `key` in `table`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_manager.update_item", skip(self, key, options, cancel), err)
    )]
    pub async fn update_item(
        &self,
        table: &str,
        key: &primary_key::PrimaryKey,
        options: common::UpdateItemOptions,
        cancel: &CancellationToken,
    ) -> SdkResult<operation::update_item::UpdateItemOutput, operation::update_item::UpdateItemError>
    {
        let input = client::prepare(update_item::build_input(table, key, options), cancel)?;
        self.client.update_item(input, cancel.clone()).await
    }

    /// Query `table` for the items matching `key_condition_expression`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_manager.query", skip(self, expression, options, cancel), err)
    )]
    pub async fn query(
        &self,
        table: &str,
        key_condition_expression: &str,
        expression: expression::Expression,
        options: query::QueryOptions,
        cancel: &CancellationToken,
    ) -> SdkResult<operation::query::QueryOutput, operation::query::QueryError> {
        let input = client::prepare(
            query::build_input(table, key_condition_expression, expression, options),
            cancel,
        )?;
        self.client.query(input, cancel.clone()).await
    }

    /// Scan `table`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_manager.scan", skip(self, options, cancel), err)
    )]
    pub async fn scan(
        &self,
        table: &str,
        options: scan::ScanOptions,
        cancel: &CancellationToken,
    ) -> SdkResult<operation::scan::ScanOutput, operation::scan::ScanError> {
        let input = client::prepare(scan::build_input(table, options), cancel)?;
        self.client.scan(input, cancel.clone()).await
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

    use aws_sdk_dynamodb::{error, types};

    fn key() -> primary_key::PrimaryKey {
        primary_key::PrimaryKey::new("id", types::AttributeValue::S("1".to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_put_item_reaches_client() {
        let manager = ItemManager::new(RecordingClient::default());
        let item = table_item::TableItem::new().with_string("id", "1");
        manager
            .put_item("users", item.clone(), Default::default(), &CancellationToken::new())
            .await
            .unwrap();
        let expected = put_item::build_input("users", item, Default::default()).unwrap();
        assert_eq!(manager.client().requests(), vec![Request::PutItem(expected)]);
    }

    #[tokio::test]
    async fn test_every_operation_reaches_client() {
        let manager = ItemManager::new(RecordingClient::default());
        let cancel = CancellationToken::new();
        manager
            .get_item("users", &key(), Default::default(), &cancel)
            .await
            .unwrap();
        manager
            .delete_item("users", &key(), Default::default(), &cancel)
            .await
            .unwrap();
        manager
            .update_item("users", &key(), Default::default(), &cancel)
            .await
            .unwrap();
        manager
            .query(
                "users",
                "id = :id",
                expression::Expression::new().with_string(":id", "1").unwrap(),
                Default::default(),
                &cancel,
            )
            .await
            .unwrap();
        manager.scan("users", Default::default(), &cancel).await.unwrap();
        manager.describe_limits(&cancel).await.unwrap();
        let requests = manager.client().requests();
        assert_eq!(requests.len(), 6);
        assert!(matches!(requests[0], Request::GetItem(_)));
        assert!(matches!(requests[1], Request::DeleteItem(_)));
        assert!(matches!(requests[2], Request::UpdateItem(_)));
        assert!(matches!(requests[3], Request::Query(_)));
        assert!(matches!(requests[4], Request::Scan(_)));
        assert!(matches!(requests[5], Request::DescribeLimits(_)));
    }

    #[tokio::test]
    async fn test_cancelled_before_dispatch() {
        let manager = ItemManager::new(RecordingClient::default());
        let cancel = CancellationToken::new();
        cancel.cancel();
        let error = manager
            .get_item("users", &key(), Default::default(), &cancel)
            .await
            .unwrap_err();
        assert!(matches!(error, error::SdkError::ConstructionFailure(_)));
        assert!(matches!(Error::find(&error), Some(Error::Cancelled)));
        assert!(manager.client().requests().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_input_not_dispatched() {
        let manager = ItemManager::new(RecordingClient::default());
        let error = manager
            .scan("u", Default::default(), &CancellationToken::new())
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
        let manager = ItemManager::new(RecordingClient::unavailable());
        let error = manager
            .delete_item("users", &key(), Default::default(), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(error, error::SdkError::TimeoutError(_)));
        assert!(Error::find(&error).is_none());
        assert_eq!(manager.client().requests().len(), 1);
    }
}
