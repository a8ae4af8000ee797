//! Payment intake service binary.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use sqlx::migrate::Migrator;
use tokio::net::TcpListener;

use payment_intake::adapters::http::{api_router, PaymentHandlers};
use payment_intake::adapters::{MercadoPagoGateway, PostgresPaymentRepository};
use payment_intake::application::{
    CreatePaymentHandler, GetPaymentHandler, ListPaymentsHandler, UpdatePaymentHandler,
};
use payment_intake::config::AppConfig;
use payment_intake::ports::{PaymentGateway, PaymentRepository};
use payment_intake::telemetry;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!(error = %e, "Payment intake service failed");
        eprintln!("payment-intake: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;

    telemetry::init_tracing(&config.server);

    tracing::info!(
        environment = ?config.server.environment,
        database = %config.database.redacted_url(),
        sandbox = config.mercado_pago.is_test_mode(),
        "Starting payment intake service"
    );

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        let migrator = Migrator::new(Path::new("./migrations")).await?;
        migrator.run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let repository: Arc<dyn PaymentRepository> = Arc::new(PostgresPaymentRepository::new(pool));
    let gateway: Arc<dyn PaymentGateway> =
        Arc::new(MercadoPagoGateway::new(config.gateway_config()));

    let handlers = PaymentHandlers::new(
        Arc::new(CreatePaymentHandler::new(repository.clone(), gateway)),
        Arc::new(GetPaymentHandler::new(repository.clone())),
        Arc::new(UpdatePaymentHandler::new(repository.clone())),
        Arc::new(ListPaymentsHandler::new(repository)),
    );

    let app = api_router(handlers, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
