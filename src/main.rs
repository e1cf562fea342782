use std::sync::Arc;

use aws_config::BehaviorVersion;
use clap::Parser;
use dotenv::dotenv;
use reservation_intake_backend::config::Config;
use reservation_intake_backend::controller;
use reservation_intake_backend::repositories::dynamo_repo::DynamoConnectionRepo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let dynamo_connection = aws_sdk_dynamodb::Client::new(&aws_config);
    let reservation_store = Arc::new(DynamoConnectionRepo::new(
        dynamo_connection,
        config.reservations_table.clone(),
    ));

    controller::serve(reservation_store, &config).await
}
