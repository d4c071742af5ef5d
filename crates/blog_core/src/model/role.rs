//! Role entity, parent of users.

use super::{check_max_len, check_required, Audit, Entity, EntityId, EntityValidationError};
use serde::{Deserialize, Serialize};

pub const NAME_MAX: usize = 30;
pub const DESCRIPTION_MAX: usize = 250;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Role {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        created_by_name: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            audit: Audit::new(created_by_name),
        }
    }
}

impl Entity for Role {
    const TABLE: &'static str = "Roles";

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut Audit {
        &mut self.audit
    }

    fn validate(&self) -> Result<(), EntityValidationError> {
        check_required("name", &self.name)?;
        check_max_len("name", &self.name, NAME_MAX)?;
        check_required("description", &self.description)?;
        check_max_len("description", &self.description, DESCRIPTION_MAX)?;
        self.audit.validate()
    }
}
