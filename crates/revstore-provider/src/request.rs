use revstore_types::{parse_identifier, IdError, Resource, ResourceKey, VersionLabel};
use serde::{Deserialize, Serialize};

/// One operation against the store.
///
/// Serialized with an `op` tag, e.g. `{"op":"read_latest","key":1}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    ReadLatest { key: ResourceKey },
    ReadVersion { key: ResourceKey, version: VersionLabel },
    SearchByName { name: String },
    ListAll,
    History { key: ResourceKey },
    Create { resource: Resource },
    Update { key: ResourceKey, resource: Resource },
}

impl Request {
    /// Build a read from a raw identifier string.
    ///
    /// A version suffix selects `ReadVersion`, otherwise `ReadLatest`.
    pub fn read(raw: &str) -> Result<Self, IdError> {
        let id = parse_identifier(raw)?;
        Ok(match id.version {
            Some(version) => Self::ReadVersion { key: id.key, version },
            None => Self::ReadLatest { key: id.key },
        })
    }

    /// Build a history listing from a raw identifier; any version is ignored.
    pub fn history(raw: &str) -> Result<Self, IdError> {
        Ok(Self::History {
            key: parse_identifier(raw)?.key,
        })
    }

    pub fn search(name: impl Into<String>) -> Self {
        Self::SearchByName { name: name.into() }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ReadLatest { .. } => "read",
            Self::ReadVersion { .. } => "vread",
            Self::SearchByName { .. } => "search",
            Self::ListAll => "list",
            Self::History { .. } => "history",
            Self::Create { .. } => "create",
            Self::Update { .. } => "update",
        }
    }
}

/// Result of a successful request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "body", rename_all = "snake_case")]
pub enum Response {
    Resource(Resource),
    Bundle(Vec<Resource>),
}

impl Response {
    /// Flatten into the list of returned resources.
    pub fn into_resources(self) -> Vec<Resource> {
        match self {
            Self::Resource(r) => vec![r],
            Self::Bundle(rs) => rs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_without_version() {
        assert_eq!(
            Request::read("1").unwrap(),
            Request::ReadLatest { key: ResourceKey::new(1) }
        );
    }

    #[test]
    fn read_with_version() {
        assert_eq!(
            Request::read("PlanDefinition/1/_history/2").unwrap(),
            Request::ReadVersion {
                key: ResourceKey::new(1),
                version: VersionLabel::new("2"),
            }
        );
    }

    #[test]
    fn read_rejects_bad_key() {
        assert!(matches!(
            Request::read("x1"),
            Err(IdError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn history_drops_version() {
        assert_eq!(
            Request::history("3/_history/1").unwrap(),
            Request::History { key: ResourceKey::new(3) }
        );
    }

    #[test]
    fn deserialize_tagged_requests() {
        let reqs: Vec<Request> = serde_json::from_str(
            r#"[
                {"op": "read_version", "key": 1, "version": "1"},
                {"op": "search_by_name", "name": "Test"},
                {"op": "list_all"},
                {"op": "update", "key": 1, "resource": {"name": "Renamed"}}
            ]"#,
        )
        .unwrap();
        assert_eq!(reqs[1], Request::search("Test"));
        assert_eq!(reqs[2], Request::ListAll);
        assert_eq!(reqs[3].name(), "update");
        assert_eq!(reqs[0].name(), "vread");
    }

    #[test]
    fn response_flattens() {
        let one = Response::Resource(Resource::named("a"));
        assert_eq!(one.into_resources().len(), 1);
        let none = Response::Bundle(Vec::new());
        assert!(none.into_resources().is_empty());
    }
}
