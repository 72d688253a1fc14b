use metrics::{
    Counter, CounterFn, Gauge, Histogram, HistogramFn, Key, KeyName, Metadata, Recorder,
    SharedString, Unit,
};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Values = Arc<Mutex<HashMap<String, f64>>>;

/// Counter totals and histogram sample counts, keyed by metric name
#[derive(Clone, Default)]
pub struct CapturingRecorder {
    values: Values,
}

impl CapturingRecorder {
    pub fn value(&self, name: &str) -> f64 {
        self.values.lock().unwrap().get(name).copied().unwrap_or(0.0)
    }

    fn handle(&self, key: &Key) -> Arc<CapturedMetric> {
        Arc::new(CapturedMetric {
            name: key.name().to_string(),
            values: Arc::clone(&self.values),
        })
    }
}

struct CapturedMetric {
    name: String,
    values: Values,
}

impl CapturedMetric {
    fn add(&self, amount: f64) {
        *self
            .values
            .lock()
            .unwrap()
            .entry(self.name.clone())
            .or_default() += amount;
    }
}

impl CounterFn for CapturedMetric {
    fn increment(&self, value: u64) {
        self.add(value as f64);
    }

    fn absolute(&self, value: u64) {
        self.values
            .lock()
            .unwrap()
            .insert(self.name.clone(), value as f64);
    }
}

impl HistogramFn for CapturedMetric {
    fn record(&self, _value: f64) {
        self.add(1.0);
    }
}

impl Recorder for CapturingRecorder {
    fn describe_counter(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}

    fn describe_gauge(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}

    fn describe_histogram(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {
    }

    fn register_counter(&self, key: &Key, _metadata: &Metadata<'_>) -> Counter {
        Counter::from_arc(self.handle(key))
    }

    fn register_gauge(&self, _key: &Key, _metadata: &Metadata<'_>) -> Gauge {
        Gauge::noop()
    }

    fn register_histogram(&self, key: &Key, _metadata: &Metadata<'_>) -> Histogram {
        Histogram::from_arc(self.handle(key))
    }
}
