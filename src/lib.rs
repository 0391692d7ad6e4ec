#![deny(missing_docs)]
#![deny(warnings)]

//! # DynamoDB Manager
//!
//! Validated, typed construction of Amazon DynamoDB table and item requests.
//!
//! ## Overview
//!
//! Table names, index names, key names and expression placeholders are checked
//! when the values holding them are built, so a request that reaches the
//! service is well formed. Managers compose the SDK's own input types from
//! these values and hand them to an injected [`client::DynamoDbClient`]; the
//! SDK's outputs and errors come back unchanged.
//!
//! ## Quick Example
//!
//! ```no_run
//! use aws_sdk_dynamodb::Client;
//! use dynamodb_manager::client::CancellationToken;
//! use dynamodb_manager::item::{ItemManager, expression::Expression, query::QueryOptions};
//! use dynamodb_manager::common::attribute_value::AttributeMapExt;
//!
//! # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ItemManager::new(client);
//! let output = manager
//!     .query(
//!         "orders",
//!         "customer = :customer",
//!         Expression::new().with_string(":customer", "c-42")?,
//!         QueryOptions {
//!             limit: Some(10),
//!             ..Default::default()
//!         },
//!         &CancellationToken::new(),
//!     )
//!     .await?;
//! for order in output.items() {
//!     let total: f64 = order.get_number("total")?;
//!     println!("{:?} {total}", order.get_string("id"));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`] - Name validation, attribute values and response options
//! - [`mod@index`] - Keys, projections and indexes
//! - [`mod@item`] - Item operations and [`item::ItemManager`]
//! - [`mod@table`] - Table operations and [`table::TableManager`]
//! - [`mod@client`] - The client seam and cancellation

/// The database client seam and cancellation.
pub mod client;

/// Name validation, attribute values and response options.
pub mod common;

/// Errors raised before a request is sent.
pub mod error;

/// Keys, projections and indexes.
///
/// This module provides:
/// - Partition and sort keys with their scalar types
/// - Primary, local and global secondary indexes
/// - Bounded collections of index names, attributes and provisions
pub mod index;

/// Item operations.
///
/// This module provides operations for:
/// - Putting, getting, updating and deleting single items
/// - Querying and scanning
pub mod item;

/// Table operations.
///
/// This module provides operations for:
/// - Creating, describing, updating and deleting tables
/// - Listing tables
/// - Managing item expiry
pub mod table;

pub use error::{Error, Result};
