use crate::common::validation;
use crate::error::{Error, Result};
use crate::index::provision::IndexProvision;

use indexmap::{IndexMap, IndexSet};

/// Most non-key attributes a projection may carry.
pub const MAXIMUM_NON_KEY_ATTRIBUTES: usize = 20;

/// Most entries an index collection may carry.
pub const MAXIMUM_INDEXES: usize = 5;

fn ensure_absent(contains: bool, name: &str, param: &str) -> Result<()> {
    if contains {
        let message = format!("`{name}` has already been added");
        return Err(Error::invalid_argument(param, message));
    }
    Ok(())
}

fn ensure_capacity(len: usize, maximum: usize, param: &str) -> Result<()> {
    if len >= maximum {
        let message = format!("unable to add entry; cannot exceed a maximum of {maximum} entries");
        return Err(Error::invalid_argument(param, message));
    }
    Ok(())
}

macro_rules! name_collection {
    ($(#[$meta:meta])* $collection:ident, $maximum:expr, $validate:path) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, Eq, PartialEq)]
        pub struct $collection(IndexSet<String>);

        impl $collection {
            /// Most names this collection holds.
            pub const MAXIMUM: usize = $maximum;

            /// Empty collection.
            pub fn new() -> Self {
                Self::default()
            }

            /// Validate `name` and append it.
            ///
            /// Fails on an invalid name, on a name already present (compared
            /// ordinally) and once the collection is full.
            pub fn add(&mut self, name: impl Into<String>) -> Result<()> {
                let name = name.into();
                $validate(&name, "name")?;
                ensure_absent(self.0.contains(&name), &name, "name")?;
                ensure_capacity(self.0.len(), Self::MAXIMUM, "name")?;
                self.0.insert(name);
                Ok(())
            }

            /// Whether `name` is present.
            pub fn contains(&self, name: &str) -> bool {
                self.0.contains(name)
            }

            /// Remove `name`, keeping the order of the rest.
            pub fn remove(&mut self, name: &str) -> bool {
                self.0.shift_remove(name)
            }

            /// Number of names.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Whether no names were added.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Names in insertion order.
            pub fn iter(&self) -> impl Iterator<Item = &str> {
                self.0.iter().map(String::as_str)
            }

            /// Build a collection from `names`, failing on the first rejected entry.
            pub fn try_from_iter<I, S>(names: I) -> Result<Self>
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                let mut collection = Self::new();
                for name in names {
                    collection.add(name)?;
                }
                Ok(collection)
            }
        }

        impl From<$collection> for Vec<String> {
            fn from(collection: $collection) -> Self {
                collection.0.into_iter().collect()
            }
        }
    };
}

name_collection!(
    /// Attribute names projected into a secondary index, at most twenty.
    NonKeyAttributeCollection,
    MAXIMUM_NON_KEY_ATTRIBUTES,
    validation::validate_key_name
);

name_collection!(
    /// Index names, at most five.
    IndexNameCollection,
    MAXIMUM_INDEXES,
    validation::validate_index_name
);

/// Anything identified by an index name.
pub trait Named {
    /// The index name.
    fn index_name(&self) -> &str;
}

/// Indexes (or index provisions) unique by index name, at most five.
#[derive(Clone, Debug, PartialEq)]
pub struct SecondaryIndexCollection<T>(IndexMap<String, T>);

/// Throughput updates for global secondary indexes, at most five.
pub type IndexProvisionCollection = SecondaryIndexCollection<IndexProvision>;

impl<T> Default for SecondaryIndexCollection<T> {
    fn default() -> Self {
        Self(IndexMap::new())
    }
}

impl<T: Named> SecondaryIndexCollection<T> {
    /// Most entries this collection holds.
    pub const MAXIMUM: usize = MAXIMUM_INDEXES;

    /// Empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry`, failing when its index name is already present or the
    /// collection is full.
    pub fn add(&mut self, entry: T) -> Result<()> {
        let name = entry.index_name().to_string();
        ensure_absent(self.0.contains_key(&name), &name, "index")?;
        ensure_capacity(self.0.len(), Self::MAXIMUM, "index")?;
        self.0.insert(name, entry);
        Ok(())
    }

    /// The entry named `index_name`.
    pub fn get(&self, index_name: &str) -> Option<&T> {
        self.0.get(index_name)
    }

    /// Whether an entry named `index_name` is present.
    pub fn contains(&self, index_name: &str) -> bool {
        self.0.contains_key(index_name)
    }

    /// Remove the entry named `index_name`, keeping the order of the rest.
    pub fn remove(&mut self, index_name: &str) -> Option<T> {
        self.0.shift_remove(index_name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no entries were added.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.values()
    }

    /// Build a collection from `entries`, failing on the first rejected entry.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(entries: I) -> Result<Self> {
        let mut collection = Self::new();
        for entry in entries {
            collection.add(entry)?;
        }
        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::index::provision::Throughput;
    use rstest::rstest;

    fn provision(name: &str) -> IndexProvision {
        IndexProvision::new(name, Throughput::default()).unwrap()
    }

    #[test]
    fn test_non_key_attributes_capacity() {
        let mut collection =
            NonKeyAttributeCollection::try_from_iter((0..20).map(|i| format!("attribute{i}"))).unwrap();
        assert_eq!(collection.len(), 20);
        let actual = collection.add("attribute20");
        assert!(matches!(actual, Err(Error::InvalidArgument { .. })));
        assert_eq!(collection.len(), 20);
    }

    #[test]
    fn test_index_names_capacity() {
        let mut collection =
            IndexNameCollection::try_from_iter(["gsi1", "gsi2", "gsi3", "gsi4", "gsi5"]).unwrap();
        assert!(collection.add("gsi6").is_err());
        assert!(!collection.contains("gsi6"));
    }

    #[test]
    fn test_index_provisions_capacity() {
        let mut collection =
            IndexProvisionCollection::try_from_iter(["ix1", "ix2", "ix3", "ix4", "ix5"].map(provision))
                .unwrap();
        assert!(collection.add(provision("ix6")).is_err());
        assert_eq!(collection.len(), 5);
    }

    #[rstest]
    #[case::first(vec![])]
    #[case::middle(vec!["b", "c"])]
    fn test_duplicate_rejected_at_any_size(#[case] others: Vec<&str>) {
        let mut names = IndexNameCollection::try_from_iter(["aaa"]).unwrap();
        let mut attributes = NonKeyAttributeCollection::try_from_iter(["a"]).unwrap();
        let mut provisions = IndexProvisionCollection::try_from_iter([provision("aaa")]).unwrap();
        for other in others {
            names.add(format!("{other}{other}{other}")).unwrap();
            attributes.add(other).unwrap();
            provisions.add(provision(&format!("{other}{other}{other}"))).unwrap();
        }
        assert!(names.add("aaa").is_err());
        assert!(attributes.add("a").is_err());
        assert!(provisions.add(provision("aaa")).is_err());
    }

    #[test]
    fn test_comparison_is_ordinal() {
        let mut names = IndexNameCollection::try_from_iter(["index"]).unwrap();
        names.add("INDEX").unwrap();
        assert_eq!(names.iter().collect::<Vec<_>>(), vec!["index", "INDEX"]);
    }

    #[rstest]
    #[case::index_name_too_short("ab")]
    #[case::index_name_invalid_character("a b")]
    fn test_index_name_validated_on_add(#[case] name: &str) {
        let mut names = IndexNameCollection::new();
        assert!(names.add(name).is_err());
        assert!(names.is_empty());
    }

    #[test]
    fn test_attribute_name_validated_on_add() {
        let mut attributes = NonKeyAttributeCollection::new();
        assert!(attributes.add(" ").is_err());
        assert!(attributes.add("a".repeat(256)).is_err());
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut attributes = NonKeyAttributeCollection::try_from_iter(["a", "b", "c"]).unwrap();
        assert!(attributes.remove("b"));
        assert!(!attributes.remove("b"));
        assert_eq!(Vec::<String>::from(attributes), vec!["a".to_string(), "c".to_string()]);
    }
}
