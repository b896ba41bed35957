use crate::models::{OutputType, TaskType};
use serde::{Deserialize, Deserializer, Serialize};

// The provider may send `null` where an empty array or string is meant.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn known_task_type<'de, D>(deserializer: D) -> Result<Option<TaskType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

/// One generated image as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// `None` when the provider reports a task type this client does not know.
    #[serde(
        rename = "taskType",
        default,
        deserialize_with = "known_task_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub task_type: Option<TaskType>,
    #[serde(rename = "taskUUID", default, deserialize_with = "null_as_default")]
    pub task_uuid: String,
    #[serde(rename = "imageUUID", default, deserialize_with = "null_as_default")]
    pub image_uuid: String,
    #[serde(
        rename = "imageURL",
        alias = "imageUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    #[serde(
        rename = "imageBase64Data",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_base64_data: Option<String>,
    #[serde(
        rename = "imageDataURI",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_data_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(
        rename = "NSFWContent",
        alias = "nsfwContent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub nsfw_content: Option<bool>,
}

impl GenerationRecord {
    /// The image payload carried for the given output type, if the provider sent it.
    pub fn image(&self, output_type: OutputType) -> Option<&str> {
        match output_type {
            OutputType::Url => self.image_url.as_deref(),
            OutputType::Base64Data => self.image_base64_data.as_deref(),
            OutputType::DataUri => self.image_data_uri.as_deref(),
        }
    }
}

/// A diagnostic entry from the provider's error list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderError {
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(rename = "taskType", default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
    #[serde(rename = "taskUUID", default, skip_serializing_if = "Option::is_none")]
    pub task_uuid: Option<String>,
}

/// Top-level response body: successes and errors side by side, either may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<GenerationRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<ProviderError>,
}
