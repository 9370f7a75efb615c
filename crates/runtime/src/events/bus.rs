use tokio::sync::broadcast;

use super::GameEvent;

/// Broadcast channel shared by the worker and every subscriber.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<GameEvent>,
}

impl EventBus {
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publishes to current subscribers. Having none is not an error.
    pub fn publish(&self, event: GameEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!("no subscribers for game event");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::with_capacity(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_events_published_after_subscribing() {
        let bus = EventBus::with_capacity(4);
        bus.publish(GameEvent::FloorEntered {
            floor: 1,
            boss_floor: false,
        });

        let mut rx = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);
        bus.publish(GameEvent::FloorEntered {
            floor: 2,
            boss_floor: false,
        });

        assert_eq!(
            rx.recv().await.unwrap(),
            GameEvent::FloorEntered {
                floor: 2,
                boss_floor: false
            }
        );
    }
}
