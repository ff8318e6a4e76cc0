use std::collections::BTreeMap;
use std::sync::Arc;

use evschema_validate::{Contract, EventType};
use serde_json::Value;

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};

/// Name-keyed registry of event schemas.
pub struct EventRegistry {
    events: BTreeMap<String, Arc<EventType>>,
    config: RegistryConfig,
}

impl EventRegistry {
    /// Create an empty registry with default config.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with explicit config.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            events: BTreeMap::new(),
            config,
        }
    }

    /// Build a registry from a list of events with default config.
    pub fn from_events<I>(events: I) -> Result<Self>
    where
        I: IntoIterator<Item = EventType>,
    {
        let mut registry = Self::new();
        for event in events {
            registry.register(event)?;
        }
        Ok(registry)
    }

    /// Register an event under its own name.
    pub fn register(&mut self, event: EventType) -> Result<()> {
        let name = event.name().to_string();
        if self.events.contains_key(&name) {
            if !self.config.allow_overwrite {
                return Err(RegistryError::DuplicateEvent(name));
            }
            tracing::debug!(event = %name, "replacing registered event type");
        } else {
            tracing::debug!(event = %name, fields = event.schema().len(), "registered event type");
        }

        self.events.insert(name, Arc::new(event));
        Ok(())
    }

    /// Look up an event by name.
    pub fn get(&self, name: &str) -> Option<Arc<EventType>> {
        self.events.get(name).cloned()
    }

    /// Check if an event name is registered.
    pub fn has_event(&self, name: &str) -> bool {
        self.events.contains_key(name)
    }

    /// Registered event names, sorted.
    pub fn event_names(&self) -> Vec<&str> {
        self.events.keys().map(String::as_str).collect()
    }

    /// Registered events, sorted by name.
    pub fn events(&self) -> impl Iterator<Item = &EventType> {
        self.events.values().map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Contract of one event.
    pub fn contract(&self, name: &str) -> Result<Contract> {
        self.events
            .get(name)
            .map(|event| event.contract())
            .ok_or_else(|| RegistryError::UnknownEvent(name.to_string()))
    }

    /// Contracts of every event, keyed by event name.
    pub fn contracts(&self) -> Value {
        Value::Object(
            self.events
                .iter()
                .map(|(name, event)| (name.clone(), event.contract().to_value()))
                .collect(),
        )
    }

    /// Validate a decoded value against the named event.
    pub fn validate(&self, name: &str, value: &Value) -> Result<()> {
        let Some(event) = self.events.get(name) else {
            if self.config.fail_on_unknown_event {
                return Err(RegistryError::UnknownEvent(name.to_string()));
            }
            tracing::debug!(event = %name, "no event type registered, accepting payload");
            return Ok(());
        };

        event.validate(value).map_err(|source| {
            tracing::debug!(event = %name, errors = source.len(), "event validation failed");
            RegistryError::Validation {
                event: name.to_string(),
                source,
            }
        })
    }

    /// Decode a raw JSON payload and validate it against the named event.
    pub fn validate_payload(&self, name: &str, payload: &[u8]) -> Result<()> {
        if payload.len() > self.config.max_payload_size {
            return Err(RegistryError::PayloadTooLarge {
                size: payload.len(),
                max: self.config.max_payload_size,
            });
        }

        let value: Value = serde_json::from_slice(payload)?;
        self.validate(name, &value)
    }

    /// Get registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::new()
    }
}
