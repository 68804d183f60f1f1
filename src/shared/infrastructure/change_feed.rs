use futures_util::Stream;
use futures_util::stream;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

pub const DEFAULT_CAPACITY: usize = 256;

/// Fan-out of change notifications to any number of live subscribers.
pub struct ChangeFeed<T> {
    sender: broadcast::Sender<T>,
}

impl<T: Clone + Send + 'static> ChangeFeed<T> {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Returns the number of subscribers that received the change.
    pub fn publish(&self, change: T) -> usize {
        self.sender.send(change).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<T: Clone + Send + 'static> Default for ChangeFeed<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Adapts a receiver into a stream. Lagging skips the missed changes, a closed feed ends it.
pub fn stream<T: Clone + Send + 'static>(
    receiver: broadcast::Receiver<T>,
) -> impl Stream<Item = T> + Send + 'static {
    stream::unfold(receiver, |mut receiver| async move {
        loop {
            match receiver.recv().await {
                Ok(change) => return Some((change, receiver)),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "subscriber lagged behind the change feed");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    })
}

#[cfg(test)]
mod change_feed_tests {
    use super::*;
    use futures_util::StreamExt;

    #[test]
    fn it_should_publish_without_subscribers() {
        let feed = ChangeFeed::<u32>::default();
        assert_eq!(feed.publish(1), 0);
        assert_eq!(feed.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn it_should_deliver_changes_in_order() {
        let feed = ChangeFeed::<u32>::new(8);
        let mut changes = Box::pin(stream(feed.subscribe()));
        assert_eq!(feed.publish(1), 1);
        feed.publish(2);
        assert_eq!(changes.next().await, Some(1));
        assert_eq!(changes.next().await, Some(2));
    }

    #[tokio::test]
    async fn it_should_skip_missed_changes_when_lagging() {
        let feed = ChangeFeed::<u32>::new(2);
        let mut changes = Box::pin(stream(feed.subscribe()));
        for change in 0..5 {
            feed.publish(change);
        }
        assert_eq!(changes.next().await, Some(3));
        assert_eq!(changes.next().await, Some(4));
    }

    #[tokio::test]
    async fn it_should_end_the_stream_when_the_feed_is_dropped() {
        let feed = ChangeFeed::<u32>::new(2);
        let changes = stream(feed.subscribe());
        drop(feed);
        let collected: Vec<u32> = changes.collect().await;
        assert!(collected.is_empty());
    }
}
