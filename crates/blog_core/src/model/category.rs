//! Category entity, parent of articles.

use super::{
    check_max_len, check_optional_max_len, check_required, Audit, Entity, EntityId,
    EntityValidationError,
};
use serde::{Deserialize, Serialize};

pub const NAME_MAX: usize = 70;
pub const DESCRIPTION_MAX: usize = 500;

/// Article category stored in `Categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Category {
    pub fn new(name: impl Into<String>, created_by_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: None,
            audit: Audit::new(created_by_name),
        }
    }
}

impl Entity for Category {
    const TABLE: &'static str = "Categories";

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
        check_optional_max_len("description", self.description.as_deref(), DESCRIPTION_MAX)?;
        self.audit.validate()
    }
}
