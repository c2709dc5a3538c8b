use banca_data::models::Money;

pub const CONTRIBUTION_STEP: i64 = 10;
pub const CONTRIBUTION_MIN: i64 = 10;

/// Months of `contribution` (whole units) needed to close the gap to `target`.
///
/// Zero once the goal is reached. A non-positive contribution counts as 1.
pub fn months_to_target(current: Money, target: Money, contribution: i64) -> u32 {
    let remaining = (target - current).cents();
    if remaining <= 0 {
        return 0;
    }
    let per_month = contribution.max(1) * 100;
    let months = (remaining + per_month - 1) / per_month;
    u32::try_from(months).unwrap_or(u32::MAX)
}

/// Step the contribution stepper by 10. Only the floor is enforced.
pub fn adjust_contribution(contribution: i64, up: bool) -> i64 {
    let next = if up {
        contribution + CONTRIBUTION_STEP
    } else {
        contribution - CONTRIBUTION_STEP
    };
    next.max(CONTRIBUTION_MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_to_target_rounds_up() {
        let months = months_to_target(Money::from_units(400), Money::from_units(1_200), 100);
        assert_eq!(months, 8);

        let months = months_to_target(Money::from_units(400), Money::from_units(1_250), 100);
        assert_eq!(months, 9);
    }

    #[test]
    fn test_months_to_target_when_reached() {
        assert_eq!(months_to_target(Money::from_units(500), Money::from_units(500), 100), 0);
        assert_eq!(months_to_target(Money::from_units(900), Money::from_units(500), 100), 0);
    }

    #[test]
    fn test_zero_contribution_never_divides_by_zero() {
        assert_eq!(months_to_target(Money::ZERO, Money::from_units(10), 0), 10);
    }

    #[test]
    fn test_adjust_contribution_floor_only() {
        assert_eq!(adjust_contribution(100, true), 110);
        assert_eq!(adjust_contribution(100, false), 90);
        assert_eq!(adjust_contribution(10, false), 10);
        assert_eq!(adjust_contribution(0, false), 10);
        assert_eq!(adjust_contribution(0, true), 10);
        assert_eq!(adjust_contribution(500, true), 510);
        assert_eq!(adjust_contribution(1_000, true), 1_010);
    }
}
