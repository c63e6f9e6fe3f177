//! Message bus
//!
//! Single-writer, multi-reader event queue with frame-aligned batches.
//! Messages accumulate in a pending buffer; once per frame the scheduler
//! takes the whole batch and broadcasts it to every system. Messages posted
//! *during* delivery land in the next batch, so a system reacting to a
//! message can never cause same-frame re-delivery loops.

use crate::ecs::EntityId;

/// Kinds of messages systems exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    /// Host loop should shut down (data unused)
    Quit,
    /// A key went down (data = key code)
    KeyPress,
    /// A key went up (data = key code)
    KeyRelease,
    /// Two entities collided (data = packed entity id pair)
    Collision,
    /// Round restarted; systems reset their entities (data unused)
    Restart,
    /// Zoom toggled (data = 0/1)
    Zoom,
    /// X-ray view toggled (data = 0/1)
    Xray,
}

/// An immutable tagged record posted on the bus.
///
/// `data` is a 32-bit payload whose interpretation depends on the type; a
/// Collision message packs two 16-bit entity ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    /// What happened
    pub message_type: MessageType,
    /// Type-dependent payload
    pub data: u32,
}

impl Message {
    /// Create a message with an explicit payload
    pub fn new(message_type: MessageType, data: u32) -> Self {
        Self { message_type, data }
    }

    /// Create a collision message for a mover that struck another entity.
    ///
    /// The mover goes in the high 16 bits, the struck entity in the low 16;
    /// both ids must fit in 16 bits (entity capacity is far below that).
    pub fn collision(mover: EntityId, other: EntityId) -> Self {
        debug_assert!(mover <= u16::MAX as u32 && other <= u16::MAX as u32);
        Self {
            message_type: MessageType::Collision,
            data: (mover << 16) | other,
        }
    }

    /// Unpack a collision payload into (mover, other)
    pub fn collision_pair(&self) -> (EntityId, EntityId) {
        (self.data >> 16, self.data & 0xFFFF)
    }

    /// Create a 0/1 toggle message (Zoom, Xray)
    pub fn toggle(message_type: MessageType, on: bool) -> Self {
        Self {
            message_type,
            data: u32::from(on),
        }
    }
}

/// Bounded, double-buffered message queue.
///
/// Overflow policy: the queue is bounded at construction; posting into a
/// full queue drops the new message with a `log::warn!`. Dropping the
/// newest (rather than asserting) keeps a runaway producer from killing the
/// game, and the warning makes the bug visible.
pub struct MessageBus {
    pending: Vec<Message>,
    spare: Vec<Message>,
    capacity: usize,
}

impl MessageBus {
    /// Create a bus holding at most `capacity` messages per frame
    pub fn new(capacity: usize) -> Self {
        Self {
            pending: Vec::with_capacity(capacity),
            spare: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Enqueue a message for delivery on the next batch.
    ///
    /// Silently drops (with a logged warning) if the queue is full.
    pub fn post(&mut self, message: Message) {
        if self.pending.len() >= self.capacity {
            log::warn!("message queue full ({}); dropping {message:?}", self.capacity);
            return;
        }
        self.pending.push(message);
    }

    /// Number of messages waiting for the next batch
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Take the current batch for delivery, in FIFO enqueue order.
    ///
    /// Installs the recycled spare buffer as the new pending queue, so
    /// messages posted while the caller iterates the batch are deferred to
    /// the next call. Return the batch via [`MessageBus::recycle_batch`] to
    /// keep steady-state operation allocation-free.
    pub fn take_batch(&mut self) -> Vec<Message> {
        std::mem::replace(&mut self.pending, std::mem::take(&mut self.spare))
    }

    /// Hand a drained batch buffer back for reuse
    pub fn recycle_batch(&mut self, mut batch: Vec<Message>) {
        batch.clear();
        self.spare = batch;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_preserves_fifo_order() {
        let mut bus = MessageBus::new(8);
        bus.post(Message::new(MessageType::Restart, 0));
        bus.post(Message::collision(1, 2));
        bus.post(Message::toggle(MessageType::Zoom, true));

        let batch = bus.take_batch();
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].message_type, MessageType::Restart);
        assert_eq!(batch[1].collision_pair(), (1, 2));
        assert_eq!(batch[2].data, 1);
    }

    #[test]
    fn posts_during_delivery_defer_to_next_batch() {
        let mut bus = MessageBus::new(8);
        bus.post(Message::new(MessageType::Restart, 0));

        let batch = bus.take_batch();
        for _message in &batch {
            // A handler reacting to the batch posts a new message.
            bus.post(Message::toggle(MessageType::Xray, true));
        }
        bus.recycle_batch(batch);

        // The reaction is not visible until the next batch.
        let next = bus.take_batch();
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].message_type, MessageType::Xray);
        bus.recycle_batch(next);

        assert!(bus.take_batch().is_empty());
    }

    #[test]
    fn overflow_drops_newest() {
        let mut bus = MessageBus::new(2);
        bus.post(Message::new(MessageType::Restart, 0));
        bus.post(Message::new(MessageType::Quit, 0));
        bus.post(Message::toggle(MessageType::Zoom, true));

        let batch = bus.take_batch();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].message_type, MessageType::Restart);
        assert_eq!(batch[1].message_type, MessageType::Quit);
    }

    #[test]
    fn collision_pair_round_trips() {
        let message = Message::collision(513, 7);
        assert_eq!(message.collision_pair(), (513, 7));
    }
}
