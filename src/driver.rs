//! Method comparison driver
//!
//! Runs several counting methods over one shared adjacency matrix and
//! collects every outcome. A failing method is recorded and the remaining
//! methods still run.

use crate::engine::{Adjacency, Method, TriangleCount, TriangleCountError, TriangleCounter};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::{error, info, warn};

/// Result of running one method
#[derive(Debug, Clone, PartialEq)]
pub struct MethodOutcome {
    pub method: Method,
    pub result: Result<TriangleCount, TriangleCountError>,
}

impl MethodOutcome {
    pub fn triangles(&self) -> Option<u64> {
        self.result.as_ref().ok().map(|c| c.triangles)
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

impl Serialize for MethodOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MethodOutcome", 6)?;
        state.serialize_field("method", self.method.name())?;
        match &self.result {
            Ok(count) => {
                state.serialize_field("triangles", &Some(count.triangles))?;
                state.serialize_field("multiply_secs", &Some(count.multiply_secs))?;
                state.serialize_field("reduce_secs", &Some(count.reduce_secs))?;
                state.serialize_field("total_secs", &Some(count.total_secs()))?;
                state.serialize_field("error", &None::<String>)?;
            }
            Err(e) => {
                state.serialize_field("triangles", &None::<u64>)?;
                state.serialize_field("multiply_secs", &None::<f64>)?;
                state.serialize_field("reduce_secs", &None::<f64>)?;
                state.serialize_field("total_secs", &None::<f64>)?;
                state.serialize_field("error", &Some(e.to_string()))?;
            }
        }
        state.end()
    }
}

/// Outcomes of a comparison run, in the order the methods were requested
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ComparisonReport {
    pub outcomes: Vec<MethodOutcome>,
}

impl ComparisonReport {
    /// Common count when every successful method agrees
    ///
    /// `None` when no method succeeded or two of them disagree.
    pub fn consensus(&self) -> Option<u64> {
        let mut counts = self.outcomes.iter().filter_map(MethodOutcome::triangles);
        let first = counts.next()?;
        counts.all(|c| c == first).then_some(first)
    }

    pub fn failures(&self) -> impl Iterator<Item = &MethodOutcome> + '_ {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }

    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(MethodOutcome::is_ok)
    }
}

/// Run each of `methods` over `adjacency`
pub fn compare_methods(
    adjacency: &Adjacency,
    methods: &[Method],
    counter: &TriangleCounter,
) -> ComparisonReport {
    let outcomes: Vec<MethodOutcome> = methods
        .iter()
        .map(|&method| {
            let result = counter.count(adjacency, method);
            match &result {
                Ok(count) => {
                    info!("{} number of triangles in graph = {}", method, count.triangles);
                    info!("{} used time (in seconds): {:.6}", method, count.total_secs());
                }
                Err(e) => error!("{} failed: {}", method, e),
            }
            MethodOutcome { method, result }
        })
        .collect();

    let report = ComparisonReport { outcomes };
    if report.consensus().is_none() && report.outcomes.iter().filter(|o| o.is_ok()).count() > 1 {
        warn!("Methods disagree on the triangle count");
    }
    report
}
