/// Platform - Dependency injection container for all ports.
///
/// Hybrid approach:
/// - Stateless ports: `&'static` references (zero-cost)
/// - Stateful ports: `Arc<dyn Trait>` (ref-counted, when needed)
use crate::ports::{AlertPort, LoggerPort, NavigatorPort, TransportPort};
use std::sync::Arc;

#[derive(Clone)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    transport: Arc<dyn TransportPort>,
    alerter: Arc<dyn AlertPort>,
    navigator: Arc<dyn NavigatorPort>,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
            transport: Arc::new(crate::adapters::Transport::new()),
            alerter: Arc::new(crate::adapters::Alert::new()),
            navigator: Arc::new(crate::adapters::Navigator::new()),
        }
    }

    pub fn with_logger(mut self, logger: &'static dyn LoggerPort) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn TransportPort>) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_alerter(mut self, alerter: Arc<dyn AlertPort>) -> Self {
        self.alerter = alerter;
        self
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn NavigatorPort>) -> Self {
        self.navigator = navigator;
        self
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn transport(&self) -> &dyn TransportPort {
        &*self.transport
    }

    #[inline]
    pub fn alerter(&self) -> &dyn AlertPort {
        &*self.alerter
    }

    #[inline]
    pub fn navigator(&self) -> &dyn NavigatorPort {
        &*self.navigator
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
