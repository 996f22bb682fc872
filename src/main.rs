use gz_movement::catalog::validate_catalog;
use gz_movement::checkout::CheckoutClient;
use gz_movement::config::AppConfig;
use gz_movement::server::{self, AppState};
use gz_movement::supabase::SupabaseClient;
use gz_movement::utilities::logger::init_logger;

use log::info;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => panic!("Invalid configuration: {}", e),
    };

    match init_logger(config.log_level) {
        Ok(_) => (),
        Err(e) => panic!("Error initializing logger: {}", e),
    };

    match validate_catalog() {
        Ok(_) => info!("Plan catalog validated"),
        Err(e) => panic!("Invalid plan catalog: {}", e),
    };

    let supabase = match SupabaseClient::new(&config.supabase_url, &config.supabase_anon_key) {
        Ok(client) => client,
        Err(e) => panic!("Error building auth service client: {}", e),
    };

    let checkout = match CheckoutClient::new(&config.checkout_url, config.checkout_timeout) {
        Ok(client) => client,
        Err(e) => panic!("Error building checkout client: {}", e),
    };

    info!("Checkout endpoint: {}", checkout.endpoint());

    server::init(Arc::new(AppState::new(config, supabase, checkout))).await;
}
