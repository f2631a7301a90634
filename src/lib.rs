pub mod configuration;
pub mod domain;
pub mod email_client;
pub mod i18n;
pub mod routes;
pub mod startup;
pub mod telemetry;
