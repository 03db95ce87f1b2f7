use base64::{engine::general_purpose, Engine as _};
use dialoguer::{Input, Select};
use logogen::{
    ColorScheme, Complexity, IconType, ImagesClient, Industry, LogoRequest, LogoStyle,
    OpenAiClient, OpenAiConfig,
};
use std::env;
use std::fmt::Display;
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file first
    match dotenv::dotenv() {
        Ok(_) => (),
        Err(_) => eprintln!("No .env file found, using system environment variables"),
    }

    logogen::logger::init_with_config(logogen::logger::LoggerConfig::development())?;

    log::info!("🔍 Checking OpenAI environment...");
    match env::var("OPENAI_API_KEY") {
        Ok(key) => {
            log::info!("✅ OpenAI API key found in environment");
            log::debug!("API key starts with: {}...", &key[..5.min(key.len())]);
        }
        Err(_) => {
            log::warn!("⚠️  OPENAI_API_KEY is not set, client creation will fail");
        }
    }
    if let Ok(base_url) = env::var("OPENAI_BASE_URL") {
        log::info!("OPENAI_BASE_URL: {}", base_url);
    }

    let config = OpenAiConfig::from_env();
    let client = match OpenAiClient::new(config) {
        Ok(client) => {
            log::info!("✅ OpenAI client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize OpenAI client: {}", e);
            return Err(e.into());
        }
    };

    log::info!("🖼️  Available image generation models:");
    for (id, name, provider) in ImagesClient::supported_models() {
        log::info!("  {} - {} ({})", id, name, provider);
    }

    println!("\nEnter the details for your logo design.\n");

    let brand_name: String = Input::new()
        .with_prompt("Brand/company name")
        .interact_text()?;
    let style = pick("Logo style", LogoStyle::all())?;
    let color_scheme = pick("Color scheme", ColorScheme::all())?;
    let icon_type = pick("Icon shape", IconType::all())?;
    let industry = pick_optional("Industry", Industry::all())?;
    let complexity = pick("Design complexity", Complexity::all())?;
    let additional_feature: String = Input::new()
        .with_prompt("Additional feature (optional)")
        .allow_empty(true)
        .interact_text()?;

    let mut request = LogoRequest::new(brand_name, style, color_scheme, icon_type, complexity);
    if let Some(industry) = industry {
        request = request.with_industry(industry);
    }
    if !additional_feature.trim().is_empty() {
        request = request.with_additional_feature(additional_feature.trim());
    }

    log::info!("🎨 Generating logo for '{}'...", request.brand_name);

    match client.generate_logo(&request).await {
        Ok(logo) => {
            log::info!("✅ Logo generation successful!");
            log::info!("🤖 Model used: {}", logo.model);

            if let Some(url) = &logo.url {
                log::info!("🖼️  Logo URL: {}", url);
            }

            if let Some(image_data) = &logo.image_data {
                let filename = format!(
                    "logo_{}_{}.png",
                    request.brand_name.replace(' ', "_").to_lowercase(),
                    chrono::Utc::now().timestamp()
                );

                match general_purpose::STANDARD.decode(image_data) {
                    Ok(image_bytes) => match fs::write(&filename, image_bytes) {
                        Ok(_) => log::info!("💾 Logo saved to: {}", filename),
                        Err(e) => log::error!("❌ Failed to save logo: {}", e),
                    },
                    Err(e) => log::error!("❌ Failed to decode base64 image: {}", e),
                }
            }

            if let Some(revised) = &logo.revised_prompt {
                log::info!("📝 Revised prompt from the service: {}", revised);
            }

            println!("\nPrompt used:\n{}", logo.prompt);
        }
        Err(e) => {
            log::error!("❌ Logo generation failed: {}", e);
            log::warn!("💡 Every failure is terminal for this attempt, run again to retry");
            return Err(e.into());
        }
    }

    Ok(())
}

fn pick<T: Copy + Display>(prompt: &str, options: &[T]) -> Result<T, dialoguer::Error> {
    let labels: Vec<String> = options.iter().map(|option| option.to_string()).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(options[selection])
}

fn pick_optional<T: Copy + Display>(
    prompt: &str,
    options: &[T],
) -> Result<Option<T>, dialoguer::Error> {
    let mut labels = vec!["(none)".to_string()];
    labels.extend(options.iter().map(|option| option.to_string()));
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    if selection == 0 {
        Ok(None)
    } else {
        Ok(Some(options[selection - 1]))
    }
}
