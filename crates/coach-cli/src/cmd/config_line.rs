use anyhow::Result;
use coach_core::RotationConfig;

pub fn run(from: &str, to: Vec<String>) -> Result<()> {
    println!("{}", line(from, to)?);
    Ok(())
}

fn line(from: &str, to: Vec<String>) -> Result<String> {
    let config = RotationConfig::new(from, to);
    config.validate()?;
    Ok(config.encode())
}
