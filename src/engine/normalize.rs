//! Conversion of a raw reduced sum into a triangle count

use super::error::{TriangleCountError, TriangleCountResult};
use super::method::Method;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// What to do when a raw sum is not an exact multiple of the method's divisor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NormalizationPolicy {
    /// Fail with `DataInvariantViolation`
    #[default]
    Strict,
    /// Truncate the quotient and log a warning
    Truncate,
}

/// Divide `raw` by the number of times `method` counts each triangle
pub fn normalize(raw: u64, method: Method, policy: NormalizationPolicy) -> TriangleCountResult<u64> {
    let divisor = method.divisor();
    let remainder = raw % divisor;

    if remainder != 0 {
        match policy {
            NormalizationPolicy::Strict => {
                return Err(TriangleCountError::DataInvariantViolation { method, raw, divisor });
            }
            NormalizationPolicy::Truncate => {
                warn!(
                    "{} raw sum {} leaves remainder {} modulo {}; input is not symmetric and loop-free",
                    method, raw, remainder, divisor
                );
            }
        }
    }

    Ok(raw / divisor)
}
