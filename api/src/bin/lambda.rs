//! AWS Lambda entry point
//!
//! Serves the stateless edge router (health, data ingestion, preflight) one
//! invocation at a time. Build with `--features lambda`.

use lambda_http::{run, tracing, Error};

use iot_gateway_api::config::AppConfig;
use iot_gateway_api::routes;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    // required to enable CloudWatch error logging by the runtime
    tracing::init_default_subscriber();

    let config = AppConfig::from_env()?;
    tracing::info!("Starting IoT Gateway Lambda handler");

    run(routes::create_edge_router(config.max_body_bytes)).await
}
