use std::env;

use chrono::prelude::Utc;
use env_logger::LogBuilder;

use err::Error;

/// Installs a stderr logger with timestamped records, filtered by `RUST_LOG`.
pub fn init() -> Result<(), Error> {
    let mut builder = LogBuilder::new();
    builder.format(|r| {
        format!(
            "{} {:<5} {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S.%f"),
            r.level(),
            r.args()
        )
    });
    if let Ok(v) = env::var("RUST_LOG") {
        builder.parse(&v);
    }
    builder.init().map_err(|e| Error::Logger(e.to_string()))
}
