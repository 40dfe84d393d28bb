use std::error::Error;
use huelog::{console_log, LogConfig, LogTarget, Logger};
use serde_json::json;

fn main() -> Result<(), Box<dyn Error>> {
    let mut log = Logger::new();
    println!("==== Log test ==== {:?}", log.config());

    console_log!(log, "test.rs", "Hello", "World!")?;
    console_log!(log, "test.rs1", "Hello, World!")?;
    console_log!(log, "test.rs2", 42)?;
    console_log!(log, "test.rs3", json!({ "user": "ada", "roles": ["admin"] }))?;
    log.log(LogTarget::new("custom").color("#13c2c2"), &[json!("explicit color")])?;

    log.set_config(LogConfig::default().prefix("[").suffix("]").show_type(false));
    console_log!(log, "test.rs1", "same color, new decoration")?;
    Ok(())
}
