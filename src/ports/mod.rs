/// Ports layer - Interface definitions
///
/// Ports define the boundaries between the application core and
/// infrastructure. Only outbound (driven) ports exist: the CLI is the
/// single driver.
pub mod outbound;
