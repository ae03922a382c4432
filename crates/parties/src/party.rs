use serde::{Deserialize, Serialize};

use stockwatch_core::error::ensure_not_blank;
use stockwatch_core::{DomainError, DomainResult, Entity, SupplierId};

/// A supplier that products are reordered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    #[serde(default)]
    pub contact_email: Option<String>,
}

impl Supplier {
    pub fn new(id: SupplierId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        ensure_not_blank("supplier name", &name)?;
        Ok(Self {
            id,
            name,
            contact_email: None,
        })
    }

    pub fn with_contact_email(mut self, email: impl Into<String>) -> DomainResult<Self> {
        let email = email.into();
        ensure_email(&email)?;
        self.contact_email = Some(email);
        Ok(self)
    }

    /// Re-check a supplier that was deserialized rather than constructed.
    pub fn validate(&self) -> DomainResult<()> {
        ensure_not_blank("supplier name", &self.name)?;
        if let Some(email) = &self.contact_email {
            ensure_email(email)?;
        }
        Ok(())
    }
}

fn ensure_email(email: &str) -> DomainResult<()> {
    if !email.contains('@') {
        return Err(DomainError::validation(format!("invalid contact email: {email}")));
    }
    Ok(())
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
