pub mod accept_encoding;
/// Note: this is actually authentication.
/// It is named authorization because of the http header.
pub mod authorization;
