use anyhow::Result;

use bodax_core::AppConfig;

pub fn run(config: &AppConfig) -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() {
        println!("Config file: {}", path.display());
    } else {
        println!("Config file: {} (not present, using defaults)", path.display());
    }
    println!("Data directory: {}\n", config.data_dir().display());
    print!("{}", config.to_toml()?);
    Ok(())
}
