use base64::{engine::general_purpose::STANDARD, Engine as _};
use runware::{OptionMap, OutputType, RunwareClient, RunwareConfig};
use serde_json::json;
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_loaded = dotenv::dotenv().is_ok();

    runware::logger::init_with_config(
        runware::logger::LoggerConfig::development().with_level(runware::logger::LogLevel::Info),
    )?;

    if env_loaded {
        log::info!("✅ .env file loaded");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    let config = RunwareConfig::from_env();
    runware::logger::log_client_info(&config);

    let mut client = RunwareClient::from_config(config)?;

    // taskUUID is generated when omitted
    let options: OptionMap = serde_json::from_value(json!({
        "taskType": "imageInference",
        "prompt": "A dragon flying over mountains",
        "width": "sd_landscape_16_9_width",
        "height": "sd_landscape_16_9_height",
        "model": "runware:100@1",
        "results": 1,
        "checkNSFW": true,
        "includeCost": true,
        "outputType": "base64Data",
        "outputFormat": "PNG"
    }))?;
    client.configure(&[options])?;

    let records = {
        let _timer = runware::logger::timer("image inference");
        match client.generate().await {
            Ok(records) => records,
            Err(e) => {
                log::error!("❌ Failed to generate image: {}", e);
                return Err(e.into());
            }
        }
    };

    println!("{}", serde_json::to_string_pretty(&records)?);

    for record in &records {
        let Some(data) = record.image(OutputType::Base64Data) else {
            log::warn!("Record {} carried no base64 payload", record.image_uuid);
            continue;
        };
        let path = format!("{}.png", record.image_uuid);
        fs::write(&path, STANDARD.decode(data)?)?;
        log::info!("🖼️  Saved {}", path);
    }

    Ok(())
}
