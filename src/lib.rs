pub mod configuration;
pub mod domain;
pub mod form;
pub mod notifications;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod webhook_client;
