use crate::common::{self, SelectAttributes, validation};
use crate::error::{Error, Result};
use crate::item::{common as item_common, expression::Expression, primary_key::PrimaryKey};

use aws_sdk_dynamodb::operation;

/// Smallest page size a scan may ask for.
pub const MINIMUM_LIMIT: i32 = 1;

/// Lowest segment number.
pub const MINIMUM_SEGMENT: i32 = 0;

/// Highest segment number.
pub const MAXIMUM_SEGMENT: i32 = 999_999;

/// Fewest segments a parallel scan may be split into.
pub const MINIMUM_TOTAL_SEGMENTS: i32 = MINIMUM_SEGMENT + 1;

/// Most segments a parallel scan may be split into.
pub const MAXIMUM_TOTAL_SEGMENTS: i32 = MAXIMUM_SEGMENT + 1;

/// Options for Scan.
///
/// `segment` and `total_segments` describe a parallel scan. They are given
/// together, clamped, and the segment must stay below the total.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanOptions {
    /// Read options shared with GetItem and Query.
    pub response_options: item_common::ResponseOptions,
    /// Page size, raised to [`MINIMUM_LIMIT`] when lower.
    pub limit: Option<i32>,
    /// Segment to scan, clamped to [`MINIMUM_SEGMENT`]..=[`MAXIMUM_SEGMENT`].
    ///
    /// Each worker of a parallel scan reads its own segment. Requires
    /// `total_segments`.
    pub segment: Option<i32>,
    /// Number of segments, clamped to [`MINIMUM_TOTAL_SEGMENTS`]..=[`MAXIMUM_TOTAL_SEGMENTS`].
    pub total_segments: Option<i32>,
    /// Key of the last item of the previous page.
    ///
    /// Pass the `last_evaluated_key` of the previous output to continue.
    pub exclusive_start_key: Option<PrimaryKey>,
    /// Secondary index to scan instead of the table.
    pub index_name: Option<String>,
    /// Filter applied to every scanned item.
    pub filter_expression: Option<String>,
    /// Which attributes to return.
    pub select_attributes: SelectAttributes,
    /// Values referenced from the filter expression.
    pub expression: Expression,
}

/// Clamp a parallel scan's segment pair; both or neither must be given and
/// the segment must fall below the total.
fn segments(
    segment: Option<i32>,
    total_segments: Option<i32>,
) -> Result<(Option<i32>, Option<i32>)> {
    match (segment, total_segments) {
        (None, None) => Ok((None, None)),
        (Some(_), None) => Err(Error::missing_argument("total_segments")),
        (None, Some(_)) => Err(Error::missing_argument("segment")),
        (Some(segment), Some(total_segments)) => {
            let segment = segment.clamp(MINIMUM_SEGMENT, MAXIMUM_SEGMENT);
            let total_segments = total_segments.clamp(MINIMUM_TOTAL_SEGMENTS, MAXIMUM_TOTAL_SEGMENTS);
            if segment >= total_segments {
                return Err(Error::invalid_argument(
                    "segment",
                    format!("segment {segment} must be lower than total segments {total_segments}"),
                ));
            }
            Ok((Some(segment), Some(total_segments)))
        }
    }
}

/// Compose a Scan request.
pub fn build_input(table: &str, options: ScanOptions) -> Result<operation::scan::ScanInput> {
    validation::validate_table_name(table, "table")?;
    if let Some(index_name) = &options.index_name {
        validation::validate_index_name(index_name, "index_name")?;
    }
    let (segment, total_segments) = segments(options.segment, options.total_segments)?;
    let read_input = item_common::ReadInput::from(options.response_options);
    let builder = operation::scan::ScanInput::builder()
        .table_name(table)
        .set_expression_attribute_values(common::non_empty(options.expression.into()))
        .set_exclusive_start_key(
            options
                .exclusive_start_key
                .as_ref()
                .map(PrimaryKey::to_attribute_values),
        )
        .set_filter_expression(common::non_blank(options.filter_expression))
        .set_index_name(options.index_name)
        .set_limit(options.limit.map(|limit| limit.max(MINIMUM_LIMIT)))
        .set_segment(segment)
        .set_total_segments(total_segments)
        .select(options.select_attributes.into());
    let input = item_common::apply_read_input!(builder, read_input).build()?;
    Ok(input)
}
