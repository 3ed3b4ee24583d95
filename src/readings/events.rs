use tokio::sync::broadcast;

use crate::readings::log::Reading;

/// Fan-out channel for new readings. Publishing is fire-and-forget: no
/// acknowledgment, no delivery guarantee, and a send with zero subscribers
/// is simply dropped. Slow subscribers lose messages once the channel
/// buffer laps them.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<Reading>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn publish(&self, reading: Reading) {
        let _ = self.tx.send(reading);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Reading> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readings::{dto::ReadingPayload, log::ReadingLog};

    #[tokio::test]
    async fn subscribers_receive_published_readings() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();

        let log = ReadingLog::new();
        let reading = log.append(ReadingPayload {
            temperature: Some(25.5),
            humidity: Some(60.0),
            rain: Some(0.0),
        });
        bus.publish(reading.clone());

        let received = rx.recv().await.expect("event");
        assert_eq!(received, reading);
    }

    #[test]
    fn publish_without_subscribers_is_a_noop() {
        let bus = EventBus::new(8);
        let log = ReadingLog::new();
        bus.publish(log.append(ReadingPayload {
            temperature: None,
            humidity: None,
            rain: None,
        }));
    }
}
