// This crate holds the message bindings and gRPC client stubs for the
// DevHub device/gateway-management API. Everything on the wire is
// generated from the schema files under `proto/` at build time; the
// hand-written surface is limited to enum conversions and thin client
// helpers around the generated stubs.

pub mod api;
pub mod common;
pub mod stream;

pub mod application;
pub mod multicast_group;

pub mod auth;
pub mod env_var;

const API_HOST: &str = "DEVHUB_GRPC_HOST";
const DEFAULT_API_HOST: &str = "localhost";

const API_PORT: &str = "DEVHUB_GRPC_PORT";
const DEFAULT_API_PORT: u16 = 8080;

// Both services are served from the same endpoint, so the client
// modules share this helper.
pub(crate) fn endpoint() -> String {
    let host = env_var::get_or(API_HOST, DEFAULT_API_HOST.to_string());
    let port = env_var::get_or(API_PORT, DEFAULT_API_PORT);

    format!("http://{}:{}", host, port)
}
