//! The database client the managers delegate to.
//!
//! Managers never talk to the network themselves: they compose an SDK
//! operation input and hand it, with the caller's [`CancellationToken`], to a
//! [`DynamoDbClient`]. The trait is implemented for [`aws_sdk_dynamodb::Client`];
//! tests and callers with special transport needs can supply their own.

use crate::error::{self, Error};

use aws_sdk_dynamodb::{Client, operation};
use std::{future, sync::Arc};
use tokio::sync::watch;

/// Result of a delegated client call.
pub type SdkResult<T, E> = Result<T, aws_sdk_dynamodb::error::SdkError<E>>;

/// A cloneable, level-triggered cancellation signal.
///
/// Cancelling any clone cancels them all. A token cancelled before a manager
/// call makes the call fail without reaching the client; a token cancelled
/// while the SDK client is in flight abandons the request.
///
/// ```rust
/// use dynamodb_manager::client::CancellationToken;
///
/// let token = CancellationToken::new();
/// let clone = token.clone();
/// clone.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Clone, Debug)]
pub struct CancellationToken {
    sender: Arc<watch::Sender<bool>>,
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationToken {
    /// A token that is not cancelled.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Cancel this token and every clone of it.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Whether the token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Resolve once the token is cancelled.
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        if receiver.wait_for(|cancelled| *cancelled).await.is_err() {
            future::pending::<()>().await;
        }
    }
}

/// Turn a composed input into a dispatchable one.
///
/// Validation failures and an already-cancelled token become build errors, so
/// the caller sees them as `SdkError::ConstructionFailure` and the client is
/// never called.
pub(crate) fn prepare<T>(
    input: error::Result<T>,
    cancel: &CancellationToken,
) -> Result<T, aws_sdk_dynamodb::error::BuildError> {
    let input = input.map_err(aws_sdk_dynamodb::error::BuildError::other)?;
    if cancel.is_cancelled() {
        return Err(aws_sdk_dynamodb::error::BuildError::other(Error::Cancelled));
    }
    Ok(input)
}

/// Asynchronous database operations, one per request type.
///
/// Each operation takes one fully composed input and the caller's
/// cancellation token and resolves to the service response or failure.
pub trait DynamoDbClient: Send + Sync {
    /// CreateTable.
    fn create_table(
        &self,
        input: operation::create_table::CreateTableInput,
        cancel: CancellationToken,
    ) -> impl Future<
        Output = SdkResult<
            operation::create_table::CreateTableOutput,
            operation::create_table::CreateTableError,
        >,
    > + Send;

    /// DeleteTable.
    fn delete_table(
        &self,
        input: operation::delete_table::DeleteTableInput,
        cancel: CancellationToken,
    ) -> impl Future<
        Output = SdkResult<
            operation::delete_table::DeleteTableOutput,
            operation::delete_table::DeleteTableError,
        >,
    > + Send;

    /// DescribeTable.
    fn describe_table(
        &self,
        input: operation::describe_table::DescribeTableInput,
        cancel: CancellationToken,
    ) -> impl Future<
        Output = SdkResult<
            operation::describe_table::DescribeTableOutput,
            operation::describe_table::DescribeTableError,
        >,
    > + Send;

    /// DescribeTimeToLive.
    fn describe_time_to_live(
        &self,
        input: operation::describe_time_to_live::DescribeTimeToLiveInput,
        cancel: CancellationToken,
    ) -> impl Future<
        Output = SdkResult<
            operation::describe_time_to_live::DescribeTimeToLiveOutput,
            operation::describe_time_to_live::DescribeTimeToLiveError,
        >,
    > + Send;

    /// ListTables.
    fn list_tables(
        &self,
        input: operation::list_tables::ListTablesInput,
        cancel: CancellationToken,
    ) -> impl Future<
        Output = SdkResult<
            operation::list_tables::ListTablesOutput,
            operation::list_tables::ListTablesError,
        >,
    > + Send;

    /// UpdateTable.
    fn update_table(
        &self,
        input: operation::update_table::UpdateTableInput,
        cancel: CancellationToken,
    ) -> impl Future<
        Output = SdkResult<
            operation::update_table::UpdateTableOutput,
            operation::update_table::UpdateTableError,
        >,
    > + Send;

    /// UpdateTimeToLive.
    fn update_time_to_live(
        &self,
        input: operation::update_time_to_live::UpdateTimeToLiveInput,
        cancel: CancellationToken,
    ) -> impl Future<
        Output = SdkResult<
            operation::update_time_to_live::UpdateTimeToLiveOutput,
            operation::update_time_to_live::UpdateTimeToLiveError,
        >,
    > + Send;

    /// PutItem.
    fn put_item(
        &self,
        input: operation::put_item::PutItemInput,
        cancel: CancellationToken,
    ) -> impl Future<
        Output = SdkResult<operation::put_item::PutItemOutput, operation::put_item::PutItemError>,
    > + Send;

    /// DeleteItem.
    fn delete_item(
        &self,
        input: operation::delete_item::DeleteItemInput,
        cancel: CancellationToken,
    ) -> impl Future<
        Output = SdkResult<
            operation::delete_item::DeleteItemOutput,
            operation::delete_item::DeleteItemError,
        >,
    > + Send;

    /// GetItem.
    fn get_item(
        &self,
        input: operation::get_item::GetItemInput,
        cancel: CancellationToken,
    ) -> impl Future<
        Output = SdkResult<operation::get_item::GetItemOutput, operation::get_item::GetItemError>,
    > + Send;

    /// UpdateItem.
    fn update_item(
        &self,
        input: operation::update_item::UpdateItemInput,
        cancel: CancellationToken,
    ) -> impl Future<
        Output = SdkResult<
            operation::update_item::UpdateItemOutput,
            operation::update_item::UpdateItemError,
        >,
    > + Send;

    /// Query.
    fn query(
        &self,
        input: operation::query::QueryInput,
        cancel: CancellationToken,
    ) -> impl Future<Output = SdkResult<operation::query::QueryOutput, operation::query::QueryError>>
    + Send;

    /// Scan.
    fn scan(
        &self,
        input: operation::scan::ScanInput,
        cancel: CancellationToken,
    ) -> impl Future<Output = SdkResult<operation::scan::ScanOutput, operation::scan::ScanError>>
    + Send;

    /// DescribeLimits.
    fn describe_limits(
        &self,
        input: operation::describe_limits::DescribeLimitsInput,
        cancel: CancellationToken,
    ) -> impl Future<
        Output = SdkResult<
            operation::describe_limits::DescribeLimitsOutput,
            operation::describe_limits::DescribeLimitsError,
        >,
    > + Send;
}

/// copy the composed input fields onto a fluent builder
macro_rules! forward {
    ($builder:expr, $input:ident, { $($setter:ident => $field:ident),* $(,)? }) => {
        $builder $(.$setter($input.$field))*
    };
}

async fn race<T, E>(
    cancel: CancellationToken,
    call: impl Future<Output = SdkResult<T, E>>,
) -> SdkResult<T, E> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(aws_sdk_dynamodb::error::SdkError::timeout_error(Error::Cancelled)),
        result = call => result,
    }
}

/// Sends the fields this crate composes; other input fields are not forwarded.
impl DynamoDbClient for Client {
    async fn create_table(
        &self,
        input: operation::create_table::CreateTableInput,
        cancel: CancellationToken,
    ) -> SdkResult<operation::create_table::CreateTableOutput, operation::create_table::CreateTableError>
    {
        let builder = forward!(self.create_table(), input, {
            set_table_name => table_name,
            set_attribute_definitions => attribute_definitions,
            set_key_schema => key_schema,
            set_local_secondary_indexes => local_secondary_indexes,
            set_global_secondary_indexes => global_secondary_indexes,
            set_provisioned_throughput => provisioned_throughput,
            set_stream_specification => stream_specification,
        });
        race(cancel, builder.send()).await
    }

    async fn delete_table(
        &self,
        input: operation::delete_table::DeleteTableInput,
        cancel: CancellationToken,
    ) -> SdkResult<operation::delete_table::DeleteTableOutput, operation::delete_table::DeleteTableError>
    {
        let builder = forward!(self.delete_table(), input, { set_table_name => table_name });
        race(cancel, builder.send()).await
    }

    async fn describe_table(
        &self,
        input: operation::describe_table::DescribeTableInput,
        cancel: CancellationToken,
    ) -> SdkResult<
        operation::describe_table::DescribeTableOutput,
        operation::describe_table::DescribeTableError,
    > {
        let builder = forward!(self.describe_table(), input, { set_table_name => table_name });
        race(cancel, builder.send()).await
    }

    async fn describe_time_to_live(
        &self,
        input: operation::describe_time_to_live::DescribeTimeToLiveInput,
        cancel: CancellationToken,
    ) -> SdkResult<
        operation::describe_time_to_live::DescribeTimeToLiveOutput,
        operation::describe_time_to_live::DescribeTimeToLiveError,
    > {
        let builder =
            forward!(self.describe_time_to_live(), input, { set_table_name => table_name });
        race(cancel, builder.send()).await
    }

    async fn list_tables(
        &self,
        input: operation::list_tables::ListTablesInput,
        cancel: CancellationToken,
    ) -> SdkResult<operation::list_tables::ListTablesOutput, operation::list_tables::ListTablesError>
    {
        let builder = forward!(self.list_tables(), input, {
            set_exclusive_start_table_name => exclusive_start_table_name,
            set_limit => limit,
        });
        race(cancel, builder.send()).await
    }

    async fn update_table(
        &self,
        input: operation::update_table::UpdateTableInput,
        cancel: CancellationToken,
    ) -> SdkResult<operation::update_table::UpdateTableOutput, operation::update_table::UpdateTableError>
    {
        let builder = forward!(self.update_table(), input, {
            set_table_name => table_name,
            set_attribute_definitions => attribute_definitions,
            set_provisioned_throughput => provisioned_throughput,
            set_stream_specification => stream_specification,
            set_global_secondary_index_updates => global_secondary_index_updates,
        });
        race(cancel, builder.send()).await
    }

    async fn update_time_to_live(
        &self,
        input: operation::update_time_to_live::UpdateTimeToLiveInput,
        cancel: CancellationToken,
    ) -> SdkResult<
        operation::update_time_to_live::UpdateTimeToLiveOutput,
        operation::update_time_to_live::UpdateTimeToLiveError,
    > {
        let builder = forward!(self.update_time_to_live(), input, {
            set_table_name => table_name,
            set_time_to_live_specification => time_to_live_specification,
        });
        race(cancel, builder.send()).await
    }

    async fn put_item(
        &self,
        input: operation::put_item::PutItemInput,
        cancel: CancellationToken,
    ) -> SdkResult<operation::put_item::PutItemOutput, operation::put_item::PutItemError> {
        let builder = forward!(self.put_item(), input, {
            set_table_name => table_name,
            set_item => item,
            set_condition_expression => condition_expression,
            set_expression_attribute_names => expression_attribute_names,
            set_expression_attribute_values => expression_attribute_values,
            set_return_consumed_capacity => return_consumed_capacity,
            set_return_item_collection_metrics => return_item_collection_metrics,
            set_return_values => return_values,
        });
        race(cancel, builder.send()).await
    }

    async fn delete_item(
        &self,
        input: operation::delete_item::DeleteItemInput,
        cancel: CancellationToken,
    ) -> SdkResult<operation::delete_item::DeleteItemOutput, operation::delete_item::DeleteItemError>
    {
        let builder = forward!(self.delete_item(), input, {
            set_table_name => table_name,
            set_key => key,
            set_condition_expression => condition_expression,
            set_expression_attribute_names => expression_attribute_names,
            set_expression_attribute_values => expression_attribute_values,
            set_return_consumed_capacity => return_consumed_capacity,
            set_return_item_collection_metrics => return_item_collection_metrics,
            set_return_values => return_values,
        });
        race(cancel, builder.send()).await
    }

    async fn get_item(
        &self,
        input: operation::get_item::GetItemInput,
        cancel: CancellationToken,
    ) -> SdkResult<operation::get_item::GetItemOutput, operation::get_item::GetItemError> {
        let builder = forward!(self.get_item(), input, {
            set_table_name => table_name,
            set_key => key,
            set_consistent_read => consistent_read,
            set_projection_expression => projection_expression,
            set_expression_attribute_names => expression_attribute_names,
            set_return_consumed_capacity => return_consumed_capacity,
        });
        race(cancel, builder.send()).await
    }

    async fn update_item(
        &self,
        input: operation::update_item::UpdateItemInput,
        cancel: CancellationToken,
    ) -> SdkResult<operation::update_item::UpdateItemOutput, operation::update_item::UpdateItemError>
    {
        let builder = forward!(self.update_item(), input, {
            set_table_name => table_name,
            set_key => key,
            set_update_expression => update_expression,
            set_condition_expression => condition_expression,
            set_expression_attribute_names => expression_attribute_names,
            set_expression_attribute_values => expression_attribute_values,
            set_return_consumed_capacity => return_consumed_capacity,
            set_return_item_collection_metrics => return_item_collection_metrics,
            set_return_values => return_values,
        });
        race(cancel, builder.send()).await
    }

    async fn query(
        &self,
        input: operation::query::QueryInput,
        cancel: CancellationToken,
    ) -> SdkResult<operation::query::QueryOutput, operation::query::QueryError> {
        let builder = forward!(self.query(), input, {
            set_table_name => table_name,
            set_index_name => index_name,
            set_key_condition_expression => key_condition_expression,
            set_filter_expression => filter_expression,
            set_projection_expression => projection_expression,
            set_expression_attribute_names => expression_attribute_names,
            set_expression_attribute_values => expression_attribute_values,
            set_select => select,
            set_consistent_read => consistent_read,
            set_exclusive_start_key => exclusive_start_key,
            set_scan_index_forward => scan_index_forward,
            set_limit => limit,
            set_return_consumed_capacity => return_consumed_capacity,
        });
        race(cancel, builder.send()).await
    }

    async fn scan(
        &self,
        input: operation::scan::ScanInput,
        cancel: CancellationToken,
    ) -> SdkResult<operation::scan::ScanOutput, operation::scan::ScanError> {
        let builder = forward!(self.scan(), input, {
            set_table_name => table_name,
            set_index_name => index_name,
            set_filter_expression => filter_expression,
            set_projection_expression => projection_expression,
            set_expression_attribute_names => expression_attribute_names,
            set_expression_attribute_values => expression_attribute_values,
            set_select => select,
            set_consistent_read => consistent_read,
            set_exclusive_start_key => exclusive_start_key,
            set_limit => limit,
            set_segment => segment,
            set_total_segments => total_segments,
            set_return_consumed_capacity => return_consumed_capacity,
        });
        race(cancel, builder.send()).await
    }

    async fn describe_limits(
        &self,
        _input: operation::describe_limits::DescribeLimitsInput,
        cancel: CancellationToken,
    ) -> SdkResult<
        operation::describe_limits::DescribeLimitsOutput,
        operation::describe_limits::DescribeLimitsError,
    > {
        race(cancel, self.describe_limits().send()).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    use std::sync::Mutex;

    /// A request seen by [`RecordingClient`].
    #[derive(Clone, Debug, PartialEq)]
    pub(crate) enum Request {
        CreateTable(operation::create_table::CreateTableInput),
        DeleteTable(operation::delete_table::DeleteTableInput),
        DescribeTable(operation::describe_table::DescribeTableInput),
        DescribeTimeToLive(operation::describe_time_to_live::DescribeTimeToLiveInput),
        ListTables(operation::list_tables::ListTablesInput),
        UpdateTable(operation::update_table::UpdateTableInput),
        UpdateTimeToLive(operation::update_time_to_live::UpdateTimeToLiveInput),
        PutItem(operation::put_item::PutItemInput),
        DeleteItem(operation::delete_item::DeleteItemInput),
        GetItem(operation::get_item::GetItemInput),
        UpdateItem(operation::update_item::UpdateItemInput),
        Query(operation::query::QueryInput),
        Scan(operation::scan::ScanInput),
        DescribeLimits(operation::describe_limits::DescribeLimitsInput),
    }

    /// Records every request and answers with an empty output, or with a
    /// timeout failure when `unavailable` is set.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingClient {
        pub(crate) requests: Mutex<Vec<Request>>,
        pub(crate) unavailable: bool,
    }

    impl RecordingClient {
        pub(crate) fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Default::default()
            }
        }

        pub(crate) fn requests(&self) -> Vec<Request> {
            self.requests.lock().unwrap().clone()
        }

        fn record<T, E>(&self, request: Request, output: T) -> SdkResult<T, E> {
            self.requests.lock().unwrap().push(request);
            if self.unavailable {
                Err(aws_sdk_dynamodb::error::SdkError::timeout_error("service unavailable"))
            } else {
                Ok(output)
            }
        }
    }

    macro_rules! recorded {
        ($method:ident, $variant:ident, $module:ident, $input:ident, $output:ident, $error:ident) => {
            async fn $method(
                &self,
                input: operation::$module::$input,
                _cancel: CancellationToken,
            ) -> SdkResult<operation::$module::$output, operation::$module::$error> {
                self.record(
                    Request::$variant(input),
                    operation::$module::$output::builder().build(),
                )
            }
        };
    }

    impl DynamoDbClient for RecordingClient {
        recorded!(create_table, CreateTable, create_table, CreateTableInput, CreateTableOutput, CreateTableError);
        recorded!(delete_table, DeleteTable, delete_table, DeleteTableInput, DeleteTableOutput, DeleteTableError);
        recorded!(describe_table, DescribeTable, describe_table, DescribeTableInput, DescribeTableOutput, DescribeTableError);
        recorded!(describe_time_to_live, DescribeTimeToLive, describe_time_to_live, DescribeTimeToLiveInput, DescribeTimeToLiveOutput, DescribeTimeToLiveError);
        recorded!(list_tables, ListTables, list_tables, ListTablesInput, ListTablesOutput, ListTablesError);
        recorded!(update_table, UpdateTable, update_table, UpdateTableInput, UpdateTableOutput, UpdateTableError);
        recorded!(update_time_to_live, UpdateTimeToLive, update_time_to_live, UpdateTimeToLiveInput, UpdateTimeToLiveOutput, UpdateTimeToLiveError);
        recorded!(put_item, PutItem, put_item, PutItemInput, PutItemOutput, PutItemError);
        recorded!(delete_item, DeleteItem, delete_item, DeleteItemInput, DeleteItemOutput, DeleteItemError);
        recorded!(get_item, GetItem, get_item, GetItemInput, GetItemOutput, GetItemError);
        recorded!(update_item, UpdateItem, update_item, UpdateItemInput, UpdateItemOutput, UpdateItemError);
        recorded!(query, Query, query, QueryInput, QueryOutput, QueryError);
        recorded!(scan, Scan, scan, ScanInput, ScanOutput, ScanError);
        recorded!(describe_limits, DescribeLimits, describe_limits, DescribeLimitsInput, DescribeLimitsOutput, DescribeLimitsError);
    }
}
