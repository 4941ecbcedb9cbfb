/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod emitters;
pub mod filesystem;
