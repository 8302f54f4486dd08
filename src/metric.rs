use opentelemetry::{KeyValue, metrics::UpDownCounter};
use std::sync::LazyLock;

static STATDS: LazyLock<UpDownCounter<i64>> = LazyLock::new(|| {
    logfire::i64_up_down_counter("vet_clinic_statds")
        .with_description("Vet clinic dashboard statistics")
        .with_unit("attempt")
        .build()
});

fn incr_statds(metric: String, value: String) {
    STATDS.add(1, &[KeyValue::new(metric, value)]);
}

pub fn incr_form_submission_statds(form: &str) {
    incr_statds("form_submission".to_string(), form.into())
}

pub fn incr_pets_api_statds(outcome: &str) {
    incr_statds("pets_api".to_string(), outcome.into())
}
