use echoes::configuration::get_configuration;
use echoes::console;
use echoes::store::StoreClient;
use echoes::telemetry;
use echoes::workflow::SignupWorkflow;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_subscriber(telemetry::get_subscriber("echoes".into(), "info".into()));

    let configuration = get_configuration().expect("Failed to read configuration");
    let store = match configuration.configured_store() {
        Some(settings) => Some(StoreClient::new(&settings.url, settings.access_key.clone())?),
        None => {
            tracing::warn!("store credentials not found; submissions will be turned away");
            None
        }
    };

    let workflow = SignupWorkflow::new(store);
    console::run(&workflow).await?;
    Ok(())
}
