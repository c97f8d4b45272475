use crate::core::data::configuration::Configuration;
use crate::core::discovery::errors::DiscoveryError;
use crate::core::discovery::request::DiscoveryRequest;

pub type DiscoveryOutcome = Result<Configuration, DiscoveryError>;

/// Asynchronous source of discovered configurations. At most one request is
/// outstanding; a new request replaces one that has not started yet.
pub trait DiscoveryPort {
    fn request(&mut self, request: DiscoveryRequest);

    fn poll(&mut self) -> Option<DiscoveryOutcome>;
}
