//! Fresh id generation for new nodes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{FILE_ID_PREFIX, FOLDER_ID_PREFIX, ID_SUFFIX_LEN};
use crate::node::NodeId;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// What an id is being minted for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdKind {
    Folder,
    File,
}

impl IdKind {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Folder => FOLDER_ID_PREFIX,
            Self::File => FILE_ID_PREFIX,
        }
    }
}

/// Source of node ids.
///
/// Implementations must not repeat an id within one session. The store
/// additionally skips any id already present in the tree.
pub trait IdGenerator {
    fn next_id(&mut self, kind: IdKind) -> NodeId;
}

/// Default generator: `<prefix>-<millis>-<suffix>`.
///
/// The millisecond stamp is forced to be strictly increasing, so two ids
/// minted in the same millisecond still differ before the random suffix is
/// even considered.
pub struct SessionIds {
    last_stamp: u64,
    rng: StdRng,
}

impl SessionIds {
    pub fn new() -> Self {
        Self {
            last_stamp: 0,
            rng: StdRng::from_entropy(),
        }
    }

    fn suffix(&mut self) -> String {
        (0..ID_SUFFIX_LEN)
            .map(|_| ALPHABET[self.rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

impl Default for SessionIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SessionIds {
    fn next_id(&mut self, kind: IdKind) -> NodeId {
        let stamp = now_millis().max(self.last_stamp + 1);
        self.last_stamp = stamp;
        let suffix = self.suffix();
        NodeId::from(format!("{}-{}-{}", kind.prefix(), stamp, suffix))
    }
}

/// Deterministic generator: `<prefix>-1`, `<prefix>-2`, ...
///
/// The counter is shared across kinds.
#[derive(Clone, Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, kind: IdKind) -> NodeId {
        self.next += 1;
        NodeId::from(format!("{}-{}", kind.prefix(), self.next))
    }
}

#[cfg(target_arch = "wasm32")]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
