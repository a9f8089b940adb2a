use serde::Serialize;

/// The product the visitor searched for, as shown in the results sidebar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalProduct {
    pub title: String,
    pub price: u32,
    pub image: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
