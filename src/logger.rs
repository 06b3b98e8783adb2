//! Structured log records for the host.
//!
//! The host accepts `{service, level, message, extra}` records and nothing it does
//! with them may change control flow, so sinks cannot fail.
use chrono::Utc;
use log::Level;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use uuid::Uuid;

use crate::entity::BackendFamily;

#[derive(Debug, Clone)]
pub struct LogRecord {
    pub service: String,
    pub level: Level,
    pub message: String,
    pub extra: Value,
}

/// Fire-and-forget destination for [`LogRecord`]s.
pub trait LogSink: Send + Sync {
    fn emit(&self, record: LogRecord);
}

/// Forwards records to the `log` facade, using the service name as target.
pub struct LogFacadeSink;

impl LogSink for LogFacadeSink {
    fn emit(&self, record: LogRecord) {
        let extra_is_empty = record.extra.as_object().map_or(true, |o| o.is_empty());
        if extra_is_empty {
            log::log!(target: record.service.as_str(), record.level, "{}", record.message);
        } else {
            log::log!(target: record.service.as_str(), record.level, "{} {}", record.message, record.extra);
        }
    }
}

/// Per-invocation logger: every record it emits carries the same invocation id.
#[derive(Clone)]
pub struct LaunchpadLogger {
    sink: Arc<dyn LogSink>,
    service: String,
    invocation_id: Uuid,
}

impl LaunchpadLogger {
    pub fn new(sink: Arc<dyn LogSink>, service: impl Into<String>) -> Self {
        Self {
            sink,
            service: service.into(),
            invocation_id: Uuid::new_v4(),
        }
    }

    /// Same sink and service, fresh invocation id.
    pub fn for_invocation(&self) -> Self {
        Self::new(self.sink.clone(), self.service.clone())
    }

    pub fn log(&self, level: Level, message: impl Into<String>, extra: Value) {
        let mut fields = match extra {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        fields.insert(
            "invocationId".to_string(),
            Value::String(self.invocation_id.to_string()),
        );

        self.sink.emit(LogRecord {
            service: self.service.clone(),
            level,
            message: message.into(),
            extra: Value::Object(fields),
        });
    }

    pub fn debug(&self, message: impl Into<String>, extra: Value) {
        self.log(Level::Debug, message, extra);
    }

    pub fn info(&self, message: impl Into<String>, extra: Value) {
        self.log(Level::Info, message, extra);
    }

    pub fn warn(&self, message: impl Into<String>, extra: Value) {
        self.log(Level::Warn, message, extra);
    }

    pub fn error(&self, message: impl Into<String>, extra: Value) {
        self.log(Level::Error, message, extra);
    }

    pub fn log_transaction(
        &self,
        family: BackendFamily,
        network: &str,
        tx_id: &str,
        kind: &str,
    ) {
        self.info(
            format!("Transaction logged: {}", kind),
            json!({
                "chain": family.as_str(),
                "network": network,
                "txHash": tx_id,
                "type": kind,
            }),
        );
    }

    pub fn log_deployment(
        &self,
        family: BackendFamily,
        network: &str,
        address: &str,
        token_name: &str,
        token_symbol: &str,
        tx_id: &str,
    ) {
        self.info(
            format!("Token deployed: {} ({})", token_name, token_symbol),
            json!({
                "chain": family.as_str(),
                "network": network,
                "tokenAddress": address,
                "tokenName": token_name,
                "tokenSymbol": token_symbol,
                "txHash": tx_id,
                "timestamp": Utc::now().to_rfc3339(),
            }),
        );
    }
}
