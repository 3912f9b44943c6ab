use crate::Labels;
use metrics::{counter, Counter};

pub struct Metrics {
    pub records: Counter,
    pub rejected_records: Counter,
    pub field_violations: Counter,
}

impl Metrics {
    pub fn new(labels: &Labels) -> Self {
        Metrics {
            records: counter!("struct_validation.records", labels.clone()),
            rejected_records: counter!("struct_validation.rejected_records", labels.clone()),
            field_violations: counter!("struct_validation.field_violations", labels.clone()),
        }
    }
}
