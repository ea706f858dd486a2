//! Game id generation.

use mines_core::IdSource;
use uuid::Uuid;

/// Random v4 UUIDs rendered as hyphenated text
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
