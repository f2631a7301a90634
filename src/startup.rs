use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::domain::WaitlistEmail;
use crate::email_client::EmailClient;
use crate::routes;

/// Address that hears about every new signup, if any.
pub struct OperatorEmail(pub Option<WaitlistEmail>);

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let email_client = configuration
            .email_client
            .client()
            .context("Failed to build the email client")?;
        if email_client.is_none() {
            tracing::warn!("No email provider API key configured, waitlist signups will be rejected");
        }
        let operator = configuration
            .email_client
            .operator()
            .map_err(|e| anyhow::anyhow!("Invalid operator notification address: {}", e))?;

        let address = format!(
            "{address}:{port}",
            address = configuration.application.host,
            port = configuration.application.port
        );
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind {}", address))?;
        let port = listener.local_addr()?.port();
        let server = run(listener, email_client, operator)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    email_client: Option<EmailClient>,
    operator: Option<WaitlistEmail>,
) -> Result<Server, std::io::Error> {
    let email_client = Data::new(email_client);
    let operator = Data::new(OperatorEmail(operator));
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(routes::landing::landing_page))
            .route("/health", web::get().to(routes::health_check::health_check))
            .route("/api/waitlist", web::post().to(routes::waitlist::join_waitlist))
            .app_data(email_client.clone())
            .app_data(operator.clone())
    })
        .listen(listener)?
        .run();
    Ok(server)
}
