use serde::{Deserialize, Serialize};

use crate::id::{ResourceId, ResourceKey, VersionLabel};

/// Resource type name served by the store.
pub const RESOURCE_TYPE: &str = "PlanDefinition";

/// An external business identifier attached to a resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessIdentifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub value: String,
}

impl BusinessIdentifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            system: None,
            value: value.into(),
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// A named plan-definition record.
///
/// Once appended to a store a resource is immutable: the store hands out
/// clones, and changes go back in as a new revision via `update`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Assigned by the store on append; ignored on input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<BusinessIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Resource {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            identifiers: Vec::new(),
            description: None,
        }
    }

    pub fn with_identifier(mut self, identifier: BusinessIdentifier) -> Self {
        self.identifiers.push(identifier);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Copy of this resource carrying the given key and version label.
    pub fn stamped(&self, key: ResourceKey, version: VersionLabel) -> Self {
        Self {
            id: Some(ResourceId {
                key,
                version: Some(version),
            }),
            ..self.clone()
        }
    }

    pub fn key(&self) -> Option<ResourceKey> {
        self.id.as_ref().map(|id| id.key)
    }

    pub fn version(&self) -> Option<&VersionLabel> {
        self.id.as_ref().and_then(|id| id.version.as_ref())
    }
}
