use crate::error::{Error, Result};
use crate::index::{Index, collection, secondary_index};

use aws_sdk_dynamodb::types;
use indexmap::IndexMap;

/// Global secondary indexes of a table, at most five.
pub type GlobalSecondaryIndexCollection =
    collection::SecondaryIndexCollection<secondary_index::GlobalSecondaryIndex>;

/// Concatenate attribute definitions, defining each name once.
///
/// A name repeated with the same type is merged; a name repeated with a
/// different type is rejected.
pub(crate) fn merge_attribute_definitions<I>(
    definitions: I,
) -> Result<Option<Vec<types::AttributeDefinition>>>
where
    I: IntoIterator<Item = types::AttributeDefinition>,
{
    let mut merged: IndexMap<String, types::AttributeDefinition> = IndexMap::new();
    for definition in definitions {
        match merged.get(definition.attribute_name()) {
            Some(existing) if existing.attribute_type() != definition.attribute_type() => {
                return Err(Error::invalid_argument(
                    "attribute_definitions",
                    format!(
                        "attribute `{}` is defined as both {} and {}",
                        definition.attribute_name(),
                        existing.attribute_type().as_str(),
                        definition.attribute_type().as_str(),
                    ),
                ));
            }
            Some(_) => {}
            None => {
                merged.insert(definition.attribute_name().to_string(), definition);
            }
        }
    }
    if merged.is_empty() {
        Ok(None)
    } else {
        Ok(Some(merged.into_values().collect()))
    }
}

/// Attribute definitions of every key of `indexes`, in insertion order.
pub(crate) fn global_attribute_definitions(
    indexes: &GlobalSecondaryIndexCollection,
) -> Result<Vec<types::AttributeDefinition>> {
    let mut definitions = Vec::new();
    for index in indexes.iter() {
        definitions.extend(index.to_attribute_definitions()?);
    }
    Ok(definitions)
}
