//! JSON request and response bodies exchanged with the game server.

use serde::{Deserialize, Serialize};

use crate::{AttributeMap, TemplateId, UserId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBuilderRequest {
    #[serde(rename = "templateID")]
    pub template_id: TemplateId,
    #[serde(rename = "userID")]
    pub user_id: UserId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignChoiceRequest {
    #[serde(rename = "userID")]
    pub user_id: UserId,
    #[serde(rename = "designChoice")]
    pub design_choice: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelBuilderRequest {
    #[serde(rename = "userID")]
    pub user_id: UserId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignQuestionResponse {
    #[serde(rename = "designQuestion")]
    pub design_question: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeMapBody {
    #[serde(rename = "attrMap")]
    pub attr_map: AttributeMap,
}

/// Entry of the template catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSummary {
    #[serde(alias = "templateID", alias = "templateId")]
    pub id: TemplateId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}
