use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogsPublisher writes domain events to the tracing subscriber instead of a
// message broker.
#[derive(Debug)]
pub struct LogsPublisher {
    topic: String,
}

impl LogsPublisher {
    pub fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
        }
    }
}

impl EventPublisher for LogsPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let payload = serde_json::to_string(event)?;
        info!(topic = self.topic.as_str(), event_id = event.event_id.as_str(), name = event.name.as_str(),
            kind = ?event.kind, key = event.key.as_str(), payload = payload.as_str(), "published domain event");
        Ok(())
    }
}
