/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports are the interfaces the application core uses to
/// reach the file system, the console and the report renderers.
pub mod outbound;
