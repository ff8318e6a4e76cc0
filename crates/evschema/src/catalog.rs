//! Built-in notification events.
//!
//! `SMS`, `EMAIL` and `PUSH` share their `id` and `sentAt` validators, so
//! the same `Arc<Validator>` instances back fields in all three schemas.

use std::sync::Arc;

use evschema_registry::{EventRegistry, RegistryConfig, Result};
use evschema_validate::{EventType, Validator};

pub const SMS: &str = "SMS";
pub const EMAIL: &str = "EMAIL";
pub const PUSH: &str = "PUSH";

struct Shared {
    id: Arc<Validator>,
    sent_at: Arc<Validator>,
    display_name: Arc<Validator>,
}

impl Shared {
    fn new() -> Self {
        Self {
            id: Arc::new(Validator::uuid().describe("unique message identifier")),
            sent_at: Arc::new(Validator::iso8601().describe("time the message was sent")),
            display_name: Arc::new(
                Validator::string()
                    .optional()
                    .describe("recipient display name"),
            ),
        }
    }
}

fn sms(shared: &Shared) -> EventType {
    let recipient = Validator::schema([
        ("name", Arc::clone(&shared.display_name)),
        (
            "phone",
            Arc::new(Validator::string().describe("E.164 phone number")),
        ),
    ]);

    EventType::new(
        SMS,
        [
            ("id", Arc::clone(&shared.id)),
            ("sentAt", Arc::clone(&shared.sent_at)),
            ("recipient", Arc::new(recipient)),
            ("body", Arc::new(Validator::string().describe("message text"))),
            (
                "segments",
                Arc::new(
                    Validator::integer()
                        .optional()
                        .describe("number of billed segments"),
                ),
            ),
        ],
    )
}

fn email(shared: &Shared) -> EventType {
    let recipient = Validator::schema([
        ("name", Arc::clone(&shared.display_name)),
        (
            "address",
            Arc::new(Validator::string().describe("mailbox address")),
        ),
    ]);

    EventType::new(
        EMAIL,
        [
            ("id", Arc::clone(&shared.id)),
            ("sentAt", Arc::clone(&shared.sent_at)),
            ("recipient", Arc::new(recipient)),
            ("subject", Arc::new(Validator::string())),
            ("body", Arc::new(Validator::string().optional())),
        ],
    )
}

fn push(shared: &Shared) -> EventType {
    EventType::new(
        PUSH,
        [
            ("id", Arc::clone(&shared.id)),
            ("sentAt", Arc::clone(&shared.sent_at)),
            (
                "deviceToken",
                Arc::new(Validator::string().describe("provider device token")),
            ),
            ("title", Arc::new(Validator::string())),
            (
                "badge",
                Arc::new(Validator::integer().optional().describe("app badge count")),
            ),
        ],
    )
}

/// The built-in events, sorted by name.
pub fn builtin_events() -> Vec<EventType> {
    let shared = Shared::new();
    vec![email(&shared), push(&shared), sms(&shared)]
}

/// Registry holding every built-in event, with default config.
pub fn builtin_registry() -> Result<EventRegistry> {
    builtin_registry_with_config(RegistryConfig::default())
}

/// Registry holding every built-in event, with explicit config.
pub fn builtin_registry_with_config(config: RegistryConfig) -> Result<EventRegistry> {
    let mut registry = EventRegistry::with_config(config);
    for event in builtin_events() {
        registry.register(event)?;
    }
    Ok(registry)
}
