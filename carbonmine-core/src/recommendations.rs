/// Reduction advice shown alongside any positive footprint. The list is fixed
/// and does not depend on which categories dominate the total.
pub static REDUCTION_RECOMMENDATIONS: [&str; 5] = [
    "Implement energy-efficient lighting and equipment in your facilities.",
    "Increase the use of renewable energy sources, such as solar or wind power.",
    "Implement waste reduction and recycling programs.",
    "Encourage employees to carpool, use public transportation, or drive electric or hybrid vehicles.",
    "Consider offsetting your carbon emissions by investing in carbon offset projects.",
];

/// Recommendations to display for a computed total: all of them when the
/// total is positive, none otherwise.
pub fn recommendations_for(total_t_co2e: f64) -> &'static [&'static str] {
    if total_t_co2e > 0.0 {
        &REDUCTION_RECOMMENDATIONS
    } else {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_totals_get_every_recommendation() {
        assert_eq!(recommendations_for(0.01).len(), 5);
        assert_eq!(recommendations_for(3824.9)[2], "Implement waste reduction and recycling programs.");
    }

    #[test]
    fn zero_and_negative_totals_get_none() {
        assert!(recommendations_for(0.0).is_empty());
        assert!(recommendations_for(-4.0).is_empty());
        assert!(recommendations_for(f64::NAN).is_empty());
    }
}
