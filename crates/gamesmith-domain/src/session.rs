//! Identity of the acting user and the template a wizard works against.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-issued identifier of the acting user.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a game template on the server.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Explicit session value handed to every wizard operation.
///
/// A session lives as long as the flow that created it; nothing about it is
/// persisted or resumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub template_id: Option<TemplateId>,
}

impl Session {
    /// Session for template authoring, which is not bound to a template.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            template_id: None,
        }
    }

    /// Session for building a game from `template_id`.
    pub fn for_template(user_id: UserId, template_id: TemplateId) -> Self {
        Self {
            user_id,
            template_id: Some(template_id),
        }
    }
}
