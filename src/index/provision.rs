use crate::common::validation;
use crate::error::Result;
use crate::index::collection::Named;

use aws_sdk_dynamodb::types;

/// Read and write capacity units provisioned for a table or index.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Throughput {
    /// Read capacity units.
    pub read_capacity_units: i64,
    /// Write capacity units.
    pub write_capacity_units: i64,
}

impl Default for Throughput {
    fn default() -> Self {
        Self {
            read_capacity_units: 5,
            write_capacity_units: 5,
        }
    }
}

impl Throughput {
    /// Wire form of the throughput.
    pub fn to_provisioned_throughput(self) -> Result<types::ProvisionedThroughput> {
        let throughput = types::ProvisionedThroughput::builder()
            .read_capacity_units(self.read_capacity_units)
            .write_capacity_units(self.write_capacity_units)
            .build()?;
        Ok(throughput)
    }
}

/// New throughput for an existing global secondary index.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct IndexProvision {
    index_name: String,
    throughput: Throughput,
}

impl IndexProvision {
    /// Validate the index name and pair it with `throughput`.
    pub fn new(index_name: impl Into<String>, throughput: Throughput) -> Result<Self> {
        let index_name = index_name.into();
        validation::validate_index_name(&index_name, "index_name")?;
        Ok(Self {
            index_name,
            throughput,
        })
    }

    /// The index to update.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// The new throughput.
    pub fn throughput(&self) -> Throughput {
        self.throughput
    }

    pub(crate) fn to_update_action(&self) -> Result<types::UpdateGlobalSecondaryIndexAction> {
        let action = types::UpdateGlobalSecondaryIndexAction::builder()
            .index_name(&self.index_name)
            .provisioned_throughput(self.throughput.to_provisioned_throughput()?)
            .build()?;
        Ok(action)
    }
}

impl Named for IndexProvision {
    fn index_name(&self) -> &str {
        &self.index_name
    }
}
