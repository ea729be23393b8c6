pub mod api;
pub mod dashboards;
pub mod routes;
pub mod shared;
pub mod system;

use shared::data::{initialize_data_source, DataSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tokio::net::TcpListener;

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let data_dir = shared::config::get_data_dir(&config);
    tracing::info!("Serving dashboard data from {}", data_dir.display());
    initialize_data_source(DataSource::new(&data_dir, &config.data))?;

    let app = routes::configure_routes();
    let addr = config.server.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
