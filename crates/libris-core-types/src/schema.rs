//! Canonical schema constants for structured logging
//!
//! These constants keep field names identical across the store, the
//! repository implementations and the CLI.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Domain fields
pub const FIELD_TITLE: &str = "title";
pub const FIELD_QUERY: &str = "query";
pub const FIELD_SEARCH_BY: &str = "by";
pub const FIELD_OUTCOME: &str = "outcome";
pub const FIELD_STORE: &str = "store";

// Collection sizes
pub const FIELD_COUNT: &str = "count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Canonical outcome values
pub const OUTCOME_APPLIED: &str = "applied";
pub const OUTCOME_NOT_FOUND: &str = "not_found";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_outcomes_are_distinct() {
        assert_ne!(OUTCOME_APPLIED, OUTCOME_NOT_FOUND);
    }
}
