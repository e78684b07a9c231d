use poketype::{Buckets, Efficiency, Matchups, Revision, Type};
use serde::{Deserialize, Serialize};

/// One line of `batch` input.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct CalcRequest {
    /// Echoed back in the response
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub opponent: Vec<String>,
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default)]
    pub user: Vec<String>,
    #[serde(default)]
    pub generation: Option<u8>,
    #[serde(default)]
    pub revision: Option<Revision>,
    #[serde(default)]
    pub strict: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CalcResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub revision: Revision,
    pub multipliers: Efficiency,
    pub buckets: Buckets,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub error: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum BatchResponse {
    Ok(CalcResponse),
    Err(ErrorResponse),
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChartResponse {
    #[serde(rename = "type")]
    pub ty: Type,
    pub revision: Revision,
    pub perspective: &'static str,
    pub matchups: Matchups,
}
