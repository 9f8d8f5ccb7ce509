//! Bounded, non-blocking event storage.
//!
//! This module provides [`RingQueue`], a fixed-capacity circular buffer with
//! an overwrite-on-full policy: a `put` on a full queue sheds the oldest
//! unread record instead of failing. The trade is deliberate - bounded
//! memory and bounded latency in exchange for event loss under sustained
//! overload. Embedders for whom losing an event is unacceptable should
//! front this queue with their own rejecting or blocking layer.
//!
//! The queue performs no internal synchronization. Producers and the
//! consumer must be serialized by the embedder (a lock, a critical section,
//! or a single-producer/single-consumer arrangement).

mod ring;

pub use ring::RingQueue;
