use crate::{
    error::{Result, RunwareError},
    models::{Dimension, TaskDescriptor, TaskOptions},
};
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;

/// Loosely typed settings for one task, keyed by option name.
pub type OptionMap = HashMap<String, Value>;

/// Turn loosely typed option maps into descriptors, preserving input order.
///
/// Unknown keys are ignored and `null` counts as unset. A value of the wrong
/// type, or a width/height that is not a resolution preset, fails the whole
/// batch.
pub fn configure(options: &[OptionMap]) -> Result<Vec<TaskDescriptor>> {
    options
        .iter()
        .enumerate()
        .map(|(index, map)| {
            parse_options(map)
                .and_then(TaskOptions::build)
                .map_err(|e| match e {
                    RunwareError::Config(msg) => {
                        RunwareError::Config(format!("task {}: {}", index, msg))
                    }
                    other => other,
                })
        })
        .collect()
}

pub fn parse_options(map: &OptionMap) -> Result<TaskOptions> {
    let mut options = TaskOptions::new();

    options.task_type = parse_str(map, &["taskType"])?;
    options.task_uuid = string(map, &["taskUUID", "taskID"])?;
    options.prompt = string(map, &["prompt"])?;
    options.width = dimension(map, "width")?;
    options.height = dimension(map, "height")?;
    options.model = string(map, &["model"])?;
    options.result_count = result_count(map)?;
    options.upload_endpoint = string(map, &["uploadEndpoint"])?;
    options.check_nsfw = boolean(map, "checkNSFW")?;
    options.include_cost = boolean(map, "includeCost")?;
    options.output_type = parse_str(map, &["outputType"])?;
    options.output_format = parse_str(map, &["outputFormat"])?;

    Ok(options)
}

fn lookup<'a>(map: &'a OptionMap, keys: &[&'static str]) -> Option<(&'static str, &'a Value)> {
    keys.iter()
        .find_map(|key| map.get(*key).map(|value| (*key, value)))
        .filter(|(_, value)| !value.is_null())
}

fn type_error(key: &str, expected: &str, value: &Value) -> RunwareError {
    RunwareError::Config(format!("{} must be {}, got {}", key, expected, value))
}

fn string(map: &OptionMap, keys: &[&'static str]) -> Result<Option<String>> {
    match lookup(map, keys) {
        None => Ok(None),
        Some((_, Value::String(s))) => Ok(Some(s.clone())),
        Some((key, other)) => Err(type_error(key, "a string", other)),
    }
}

fn parse_str<T>(map: &OptionMap, keys: &[&'static str]) -> Result<Option<T>>
where
    T: FromStr<Err = RunwareError>,
{
    string(map, keys)?.map(|s| s.parse::<T>()).transpose()
}

fn boolean(map: &OptionMap, key: &'static str) -> Result<Option<bool>> {
    match lookup(map, &[key]) {
        None => Ok(None),
        Some((_, Value::Bool(b))) => Ok(Some(*b)),
        Some((key, other)) => Err(type_error(key, "a boolean", other)),
    }
}

fn dimension(map: &OptionMap, key: &'static str) -> Result<Option<Dimension>> {
    match lookup(map, &[key]) {
        None => Ok(None),
        Some((_, Value::String(tag))) => tag
            .parse::<Dimension>()
            .map(Some)
            .map_err(|_| RunwareError::Config(format!("unsupported {} preset: {:?}", key, tag))),
        Some((key, other)) => Err(type_error(key, "a resolution preset tag", other)),
    }
}

fn result_count(map: &OptionMap) -> Result<Option<u8>> {
    match lookup(map, &["resultCount", "results", "numberOfResults"]) {
        None => Ok(None),
        Some((key, value)) => value
            .as_u64()
            .and_then(|n| u8::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| type_error(key, "an integer between 1 and 255", value)),
    }
}
