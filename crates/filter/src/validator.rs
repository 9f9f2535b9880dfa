//! Decade validation.
//!
//! The gatekeeper that turns a raw integer into a value the rest of the
//! core may trust. Checks run in a fixed order and the first failure
//! determines the reported reason.

use crate::decade;
use crate::error::{FilterError, Result};

/// Reason reported when the decade precedes [`decade::FLOOR_ERA`].
pub const BEFORE_FLOOR_ERA: &str = "decade precedes the supported floor era";

/// Reason reported when the value is not the start of a decade.
pub const NOT_A_DECADE_YEAR: &str = "value does not represent the start of a decade";

/// Verify `year` denotes the start of a supported decade.
///
/// The floor-era check runs before the boundary check, so a year that
/// fails both reports only the floor-era reason.
///
/// # Errors
/// [`FilterError::InvalidDecade`] carrying the reason for the first
/// failing check.
pub fn validate(year: i32) -> Result<()> {
    if !decade::is_not_before_floor_era(year) {
        return Err(FilterError::InvalidDecade {
            year,
            reason: BEFORE_FLOOR_ERA,
        });
    }
    if !decade::is_decade_year(year) {
        return Err(FilterError::InvalidDecade {
            year,
            reason: NOT_A_DECADE_YEAR,
        });
    }

    Ok(())
}
