use crate::{
    error::{Result, RunwareError},
    models::Dimension,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskType {
    #[default]
    #[serde(rename = "imageInference")]
    ImageInference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputType {
    #[serde(rename = "base64Data")]
    Base64Data,
    #[serde(rename = "dataURI")]
    DataUri,
    #[serde(rename = "URL")]
    Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[serde(rename = "PNG")]
    Png,
    #[serde(rename = "JPEG")]
    Jpeg,
    #[serde(rename = "WEBP")]
    Webp,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::ImageInference => "imageInference",
        }
    }
}

impl OutputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputType::Base64Data => "base64Data",
            OutputType::DataUri => "dataURI",
            OutputType::Url => "URL",
        }
    }
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Webp => "WEBP",
        }
    }
}

impl FromStr for TaskType {
    type Err = RunwareError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "imageInference" => Ok(TaskType::ImageInference),
            other => Err(RunwareError::Config(format!(
                "unsupported task type: {:?}",
                other
            ))),
        }
    }
}

impl FromStr for OutputType {
    type Err = RunwareError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "base64Data" => Ok(OutputType::Base64Data),
            "dataURI" => Ok(OutputType::DataUri),
            "URL" => Ok(OutputType::Url),
            other => Err(RunwareError::Config(format!(
                "unsupported output type: {:?}",
                other
            ))),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RunwareError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "PNG" => Ok(OutputFormat::Png),
            "JPEG" | "JPG" => Ok(OutputFormat::Jpeg),
            "WEBP" => Ok(OutputFormat::Webp),
            _ => Err(RunwareError::Config(format!(
                "unsupported output format: {:?}",
                s
            ))),
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-side settings for one task. Every field left as `None` stays
/// absent from the request sent to the provider.
#[derive(Debug, Clone, Default)]
pub struct TaskOptions {
    pub task_type: Option<TaskType>,
    pub task_uuid: Option<String>,
    pub prompt: Option<String>,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub model: Option<String>,
    pub result_count: Option<u8>,
    pub upload_endpoint: Option<String>,
    pub check_nsfw: Option<bool>,
    pub include_cost: Option<bool>,
    pub output_type: Option<OutputType>,
    pub output_format: Option<OutputFormat>,
}

impl TaskOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_task_uuid(mut self, task_uuid: impl Into<String>) -> Self {
        self.task_uuid = Some(task_uuid.into());
        self
    }

    pub fn with_dimensions(mut self, width: Dimension, height: Dimension) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_result_count(mut self, count: u8) -> Self {
        self.result_count = Some(count);
        self
    }

    pub fn with_upload_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.upload_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_check_nsfw(mut self, enabled: bool) -> Self {
        self.check_nsfw = Some(enabled);
        self
    }

    pub fn with_include_cost(mut self, enabled: bool) -> Self {
        self.include_cost = Some(enabled);
        self
    }

    pub fn with_output(mut self, output_type: OutputType, output_format: OutputFormat) -> Self {
        self.output_type = Some(output_type);
        self.output_format = Some(output_format);
        self
    }

    /// Validate the options and freeze them into a descriptor. A missing task
    /// id is replaced by a fresh UUID v4.
    pub fn build(self) -> Result<TaskDescriptor> {
        if self.result_count == Some(0) {
            return Err(RunwareError::Config(
                "resultCount must be at least 1".into(),
            ));
        }

        let task_uuid = match self.task_uuid {
            Some(id) if !id.trim().is_empty() => id,
            _ => Uuid::new_v4().to_string(),
        };

        Ok(TaskDescriptor {
            task_type: self.task_type.unwrap_or_default(),
            task_uuid,
            prompt: self.prompt,
            width: self.width,
            height: self.height,
            model: self.model,
            result_count: self.result_count,
            upload_endpoint: self.upload_endpoint,
            check_nsfw: self.check_nsfw,
            include_cost: self.include_cost,
            output_type: self.output_type,
            output_format: self.output_format,
        })
    }
}

/// One normalized generation task, ready to be serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDescriptor {
    task_type: TaskType,
    task_uuid: String,
    prompt: Option<String>,
    width: Option<Dimension>,
    height: Option<Dimension>,
    model: Option<String>,
    result_count: Option<u8>,
    upload_endpoint: Option<String>,
    check_nsfw: Option<bool>,
    include_cost: Option<bool>,
    output_type: Option<OutputType>,
    output_format: Option<OutputFormat>,
}

impl TaskDescriptor {
    pub fn task_type(&self) -> TaskType {
        self.task_type
    }

    pub fn task_uuid(&self) -> &str {
        &self.task_uuid
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn width(&self) -> Option<Dimension> {
        self.width
    }

    pub fn height(&self) -> Option<Dimension> {
        self.height
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn result_count(&self) -> Option<u8> {
        self.result_count
    }

    pub fn upload_endpoint(&self) -> Option<&str> {
        self.upload_endpoint.as_deref()
    }

    pub fn check_nsfw(&self) -> Option<bool> {
        self.check_nsfw
    }

    pub fn include_cost(&self) -> Option<bool> {
        self.include_cost
    }

    pub fn output_type(&self) -> Option<OutputType> {
        self.output_type
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output_format
    }

    /// Provider field names and pixel values. Unset options and empty strings
    /// are left out entirely.
    pub fn to_wire(&self) -> WireTask<'_> {
        WireTask {
            task_type: self.task_type,
            task_uuid: &self.task_uuid,
            positive_prompt: non_empty(&self.prompt),
            width: self.width.map(|w| w.pixels()),
            height: self.height.map(|h| h.pixels()),
            model: non_empty(&self.model),
            number_of_results: self.result_count,
            upload_endpoint: non_empty(&self.upload_endpoint),
            check_nsfw: self.check_nsfw,
            include_cost: self.include_cost,
            output_type: self.output_type,
            output_format: self.output_format,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[derive(Debug, Serialize)]
pub struct WireTask<'a> {
    #[serde(rename = "taskType")]
    pub task_type: TaskType,
    #[serde(rename = "taskUUID")]
    pub task_uuid: &'a str,
    #[serde(rename = "positivePrompt", skip_serializing_if = "Option::is_none")]
    pub positive_prompt: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<&'a str>,
    #[serde(rename = "numberOfResults", skip_serializing_if = "Option::is_none")]
    pub number_of_results: Option<u8>,
    #[serde(rename = "uploadEndpoint", skip_serializing_if = "Option::is_none")]
    pub upload_endpoint: Option<&'a str>,
    #[serde(rename = "checkNSFW", skip_serializing_if = "Option::is_none")]
    pub check_nsfw: Option<bool>,
    #[serde(rename = "includeCost", skip_serializing_if = "Option::is_none")]
    pub include_cost: Option<bool>,
    #[serde(rename = "outputType", skip_serializing_if = "Option::is_none")]
    pub output_type: Option<OutputType>,
    #[serde(rename = "outputFormat", skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
}
