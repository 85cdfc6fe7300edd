// ABOUTME: Status command implementation.
// ABOUTME: Reports the function's readiness state and the alias target.

use strofi::config::Config;
use strofi::error::Result;
use strofi::platform::{AliasOps, FunctionOps, HttpPlatform, PlatformErrorKind};

/// Query the platform for the current function state and alias target.
pub async fn status(config: Config) -> Result<()> {
    let platform = HttpPlatform::new(&config.platform.endpoint)?;

    let function = platform.get_function(&config.function).await?;
    println!("Function: {} ({})", config.function, config.region);
    println!("Version: {}", function.version);
    match function.reason {
        Some(reason) => println!("State: {} ({})", function.raw_state, reason),
        None => println!("State: {}", function.raw_state),
    }

    match platform.get_alias(&config.function, &config.alias).await {
        Ok(target) => {
            println!("Alias: {} → version {}", config.alias, target.version);
        }
        Err(e) if e.kind() == PlatformErrorKind::NotFound => {
            println!("Alias: {} (not created yet)", config.alias);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
