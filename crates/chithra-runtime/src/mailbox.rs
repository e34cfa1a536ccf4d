//! Landmark frame hand-off
//!
//! Tracker callbacks run on their own schedule. They push frames into a
//! bounded queue that the tick drains at its start; when the queue is full
//! the oldest frame is dropped.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use chithra_core::LandmarkFrame;

#[derive(Debug)]
struct Queue {
    frames: VecDeque<LandmarkFrame>,
    capacity: usize,
    overflowed: u64,
}

/// Engine side of the hand-off
#[derive(Debug)]
pub struct LandmarkMailbox {
    queue: Arc<Mutex<Queue>>,
}

/// Tracker side of the hand-off
#[derive(Debug, Clone)]
pub struct LandmarkSender {
    queue: Arc<Mutex<Queue>>,
}

impl LandmarkMailbox {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            queue: Arc::new(Mutex::new(Queue {
                frames: VecDeque::with_capacity(capacity),
                capacity,
                overflowed: 0,
            })),
        }
    }

    pub fn sender(&self) -> LandmarkSender {
        LandmarkSender {
            queue: Arc::clone(&self.queue),
        }
    }

    /// Take every queued frame, oldest first
    pub fn drain(&self) -> Vec<LandmarkFrame> {
        self.queue.lock().frames.drain(..).collect()
    }

    /// Discard queued frames
    pub fn clear(&self) -> usize {
        let mut queue = self.queue.lock();
        let n = queue.frames.len();
        queue.frames.clear();
        n
    }

    pub fn len(&self) -> usize {
        self.queue.lock().frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Frames lost to a full queue
    pub fn overflowed(&self) -> u64 {
        self.queue.lock().overflowed
    }
}

impl LandmarkSender {
    /// Queue a frame; returns false if an older frame had to be dropped
    pub fn push(&self, frame: LandmarkFrame) -> bool {
        let mut queue = self.queue.lock();
        let mut kept_all = true;
        if queue.frames.len() >= queue.capacity {
            queue.frames.pop_front();
            queue.overflowed += 1;
            kept_all = false;
        }
        queue.frames.push_back(frame);
        kept_all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chithra_core::{Timestamp, Vec3, LANDMARK_COUNT};

    fn frame(ms: i64) -> LandmarkFrame {
        LandmarkFrame::new([Vec3::ZERO; LANDMARK_COUNT], Timestamp::from_millis(ms))
    }

    #[test]
    fn test_drain_in_order() {
        let mailbox = LandmarkMailbox::new(8);
        let sender = mailbox.sender();
        sender.push(frame(1));
        sender.push(frame(2));

        let frames = mailbox.drain();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].timestamp, Timestamp::from_millis(1));
        assert!(mailbox.is_empty());
    }

    #[test]
    fn test_full_queue_drops_oldest() {
        let mailbox = LandmarkMailbox::new(2);
        let sender = mailbox.sender();
        assert!(sender.push(frame(1)));
        assert!(sender.push(frame(2)));
        assert!(!sender.push(frame(3)));

        let frames = mailbox.drain();
        assert_eq!(frames[0].timestamp, Timestamp::from_millis(2));
        assert_eq!(mailbox.overflowed(), 1);
    }

    #[test]
    fn test_sender_from_another_thread() {
        let mailbox = LandmarkMailbox::new(64);
        let sender = mailbox.sender();
        let handle = std::thread::spawn(move || {
            for i in 0..10 {
                sender.push(frame(i));
            }
        });
        handle.join().unwrap();
        assert_eq!(mailbox.len(), 10);
        assert_eq!(mailbox.clear(), 10);
    }
}
