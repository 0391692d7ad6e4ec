use crate::index::collection::NonKeyAttributeCollection;

use aws_sdk_dynamodb::types;

/// Which attributes are copied into a secondary index.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ProjectionType {
    /// Every table attribute.
    #[default]
    All,
    /// The key attributes plus the listed non-key attributes.
    Include,
    /// Only the key attributes.
    KeysOnly,
}

impl From<ProjectionType> for types::ProjectionType {
    fn from(projection_type: ProjectionType) -> Self {
        match projection_type {
            ProjectionType::All => Self::All,
            ProjectionType::Include => Self::Include,
            ProjectionType::KeysOnly => Self::KeysOnly,
        }
    }
}

/// Attributes copied (projected) from the table into an index.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IndexProjection {
    /// The projection type.
    pub projection_type: ProjectionType,
    /// Non-key attributes to project; only sent for [`ProjectionType::Include`].
    pub non_key_attributes: NonKeyAttributeCollection,
}

impl IndexProjection {
    /// Project every attribute.
    pub fn all() -> Self {
        Self::default()
    }

    /// Project the keys only.
    pub fn keys_only() -> Self {
        Self {
            projection_type: ProjectionType::KeysOnly,
            ..Default::default()
        }
    }

    /// Project the keys plus `non_key_attributes`.
    pub fn include(non_key_attributes: NonKeyAttributeCollection) -> Self {
        Self {
            projection_type: ProjectionType::Include,
            non_key_attributes,
        }
    }

    /// Wire form of the projection.
    pub fn to_projection(&self) -> types::Projection {
        let non_key_attributes = match self.projection_type {
            ProjectionType::Include if !self.non_key_attributes.is_empty() => Some(
                self.non_key_attributes
                    .iter()
                    .map(str::to_string)
                    .collect(),
            ),
            _ => None,
        };
        types::Projection::builder()
            .projection_type(self.projection_type.into())
            .set_non_key_attributes(non_key_attributes)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::all(
        IndexProjection::all(),
        types::Projection::builder()
            .projection_type(types::ProjectionType::All)
            .build()
    )]
    #[case::keys_only(
        IndexProjection::keys_only(),
        types::Projection::builder()
            .projection_type(types::ProjectionType::KeysOnly)
            .build()
    )]
    #[case::include(
        IndexProjection::include(NonKeyAttributeCollection::try_from_iter(["b", "a"]).unwrap()),
        types::Projection::builder()
            .projection_type(types::ProjectionType::Include)
            .non_key_attributes("b")
            .non_key_attributes("a")
            .build()
    )]
    #[case::include_empty(
        IndexProjection::include(NonKeyAttributeCollection::new()),
        types::Projection::builder()
            .projection_type(types::ProjectionType::Include)
            .build()
    )]
    #[case::attributes_ignored_for_all(
        IndexProjection {
            non_key_attributes: NonKeyAttributeCollection::try_from_iter(["a"]).unwrap(),
            ..Default::default()
        },
        types::Projection::builder()
            .projection_type(types::ProjectionType::All)
            .build()
    )]
    fn test_to_projection(#[case] projection: IndexProjection, #[case] expected: types::Projection) {
        assert_eq!(projection.to_projection(), expected);
    }
}
