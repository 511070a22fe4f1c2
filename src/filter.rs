pub mod body;
pub mod header;
