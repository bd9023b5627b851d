use std::error::Error;
use library_catalog::catalog::driver::run_demo;
use library_catalog::catalog::factory::create_catalog_service;
use library_catalog::core::domain::Configuration;
use library_catalog::gateway::GatewayPublisherVia;
use library_catalog::utils::logging::setup_tracing;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Configuration::from_env()?;
    setup_tracing(&config);

    let mut catalog_service = create_catalog_service(&config, GatewayPublisherVia::Logs);
    let stdout = std::io::stdout();
    run_demo(&mut stdout.lock(), catalog_service.as_mut())?;
    Ok(())
}
