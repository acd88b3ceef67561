use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Wall-clock duration of one conversion stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Per-stage timings of a conversion plus the overall total.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn with_total(total_ms: f64) -> Self {
        Self {
            total_ms,
            stages: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }

    /// Run `f`, record its duration under `label` and pass its value through.
    pub fn time<T>(&mut self, label: &str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.push(label, elapsed_ms(start));
        out
    }

    pub fn stage(&self, label: &str) -> Option<&StageTiming> {
        self.stages.iter().find(|s| s.label == label)
    }
}

pub(crate) fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_stage_is_recorded_in_order() {
        let mut t = TimingBreakdown::default();
        let v = t.time("sample", || 41 + 1);
        t.push("color", 0.5);
        assert_eq!(v, 42);
        let labels: Vec<&str> = t.stages.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["sample", "color"]);
        assert!(t.stage("sample").unwrap().elapsed_ms >= 0.0);
        assert!(t.stage("svg").is_none());
    }

    #[test]
    fn serializes_in_camel_case() {
        let t = TimingBreakdown::with_total(2.0);
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"totalMs\":2.0"));
    }
}
