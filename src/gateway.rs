pub mod events;
pub mod logs;
pub mod memory;
pub mod factory;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GatewayPublisherVia {
    Logs,
    Memory,
}
