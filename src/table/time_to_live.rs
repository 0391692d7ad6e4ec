use crate::common::validation;
use crate::error::Result;

use aws_sdk_dynamodb::{operation, types};

/// Suggested name for the expiry attribute.
pub const SUGGESTED_ATTRIBUTE_NAME: &str = "epoch_expires";

/// Options for UpdateTimeToLive.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimeToLiveOptions {
    /// Attribute holding the expiry time in epoch seconds.
    pub attribute_name: String,
    /// Whether expiry is enabled.
    pub enabled: bool,
}

impl Default for TimeToLiveOptions {
    fn default() -> Self {
        Self {
            attribute_name: SUGGESTED_ATTRIBUTE_NAME.to_string(),
            enabled: true,
        }
    }
}

/// Compose a DescribeTimeToLive request.
pub fn build_describe_input(
    table: &str,
) -> Result<operation::describe_time_to_live::DescribeTimeToLiveInput> {
    validation::validate_table_name(table, "table")?;
    let input = operation::describe_time_to_live::DescribeTimeToLiveInput::builder()
        .table_name(table)
        .build()?;
    Ok(input)
}

/// Compose an UpdateTimeToLive request.
///
/// ```rust
/// use dynamodb_manager::table::time_to_live;
///
/// let input = time_to_live::build_update_input("sessions", Default::default()).unwrap();
/// let specification = input.time_to_live_specification().unwrap();
/// assert_eq!(specification.attribute_name(), "epoch_expires");
/// assert!(specification.enabled());
/// ```
pub fn build_update_input(
    table: &str,
    options: TimeToLiveOptions,
) -> Result<operation::update_time_to_live::UpdateTimeToLiveInput> {
    validation::validate_table_name(table, "table")?;
    validation::validate_key_name(&options.attribute_name, "attribute_name")?;
    let specification = types::TimeToLiveSpecification::builder()
        .attribute_name(options.attribute_name)
        .enabled(options.enabled)
        .build()?;
    let input = operation::update_time_to_live::UpdateTimeToLiveInput::builder()
        .table_name(table)
        .time_to_live_specification(specification)
        .build()?;
    Ok(input)
}
