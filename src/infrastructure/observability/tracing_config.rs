/// Configuration for tracing initialization, built from `Settings`.
pub struct TracingConfig {
    pub environment: String,
    pub level: String,
    pub json_format: bool,
}
