use opentelemetry::{KeyValue, metrics::UpDownCounter};
use std::sync::LazyLock;

static STATDS: LazyLock<UpDownCounter<i64>> = LazyLock::new(|| {
    logfire::i64_up_down_counter("wa_templates_statds")
        .with_description("WhatsApp template admin statistics")
        .with_unit("attempt")
        .build()
});

fn incr_statds(metric: String, value: String) {
    STATDS.add(1, &[KeyValue::new(metric, value)]);
}

/// Counts template mutations: "create", "update", "delete" or "rejected"
pub fn incr_template_action_statds(action: &str) {
    incr_statds("template_action".to_string(), action.into())
}
