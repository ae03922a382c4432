use serde::{Deserialize, Serialize};

use stockwatch_core::error::ensure_not_blank;
use stockwatch_core::{CompanyId, DomainResult, Entity, WarehouseId};

/// A company owning one or more warehouses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
}

impl Company {
    pub fn new(id: CompanyId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        ensure_not_blank("company name", &name)?;
        Ok(Self { id, name })
    }
}

impl Entity for Company {
    type Id = CompanyId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// A warehouse. `company_id` is fixed at creation and is the only key used to
/// decide which company a warehouse's stock belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: WarehouseId,
    pub company_id: CompanyId,
    pub name: String,
}

impl Warehouse {
    pub fn new(id: WarehouseId, company_id: CompanyId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        ensure_not_blank("warehouse name", &name)?;
        Ok(Self { id, company_id, name })
    }

    pub fn belongs_to(&self, company_id: CompanyId) -> bool {
        self.company_id == company_id
    }
}

impl Entity for Warehouse {
    type Id = WarehouseId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
