use carbonmine_core::{
    builder::ProfileBuilder, estimate, factors::emission_factors, Estimator, FuelKeyPolicy,
    EstimationPolicy, FootprintError,
};
use carbonmine_schemas::{
    fuel::FuelType,
    profile::{CompanyProfile, ProfileSubmission},
};
use proptest::prelude::*;

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

fn fuel_strategy() -> impl Strategy<Value = FuelType> {
    prop_oneof![
        Just(FuelType::Diesel),
        Just(FuelType::Petrol),
        Just(FuelType::Gas),
    ]
}

prop_compose! {
    fn profile_strategy()(
        coal in 0.0..1e7f64,
        fuel in fuel_strategy(),
        liters in 0.0..1e7f64,
        employees in 0u64..100_000,
        kwh in 0.0..1e8f64,
        water in 0.0..1e9f64,
        waste in 0.0..1e6f64,
    ) -> CompanyProfile {
        ProfileBuilder::new()
            .name("generated")
            .annual_coal_production(coal)
            .fuel(fuel, liters)
            .employee_count(employees)
            .electricity_consumption(kwh)
            .water_consumption(water)
            .waste_generation(waste)
            .build()
    }
}

proptest! {
    #[test]
    fn total_is_the_weighted_sum(profile in profile_strategy()) {
        let f = emission_factors();
        let expected = profile.annual_coal_production * 1.04
            + profile.fuel_consumption * f.fuel_factor(profile.fuel_type)
            + profile.employee_count as f64 * 0.45
            + profile.electricity_consumption * 0.62
            + profile.water_consumption * 0.02
            + profile.waste_generation * 0.12;
        prop_assert!(close(estimate(&profile).total_t_co2e, expected));
    }

    #[test]
    fn estimate_is_pure(profile in profile_strategy()) {
        let first = estimate(&profile);
        let second = estimate(&profile.clone());
        prop_assert_eq!(first.total_t_co2e.to_bits(), second.total_t_co2e.to_bits());
    }

    #[test]
    fn valid_profiles_never_go_negative(profile in profile_strategy()) {
        prop_assert!(estimate(&profile).total_t_co2e >= 0.0);
    }

    #[test]
    fn switching_fuel_changes_only_the_fuel_term(
        profile in profile_strategy(),
        other in fuel_strategy(),
    ) {
        let switched = CompanyProfile { fuel_type: other, ..profile.clone() };
        let delta = estimate(&switched).total_t_co2e - estimate(&profile).total_t_co2e;
        let expected = profile.fuel_consumption
            * (emission_factors().fuel_factor(other) - emission_factors().fuel_factor(profile.fuel_type));
        let scale = estimate(&profile).total_t_co2e.max(estimate(&switched).total_t_co2e).max(1.0);
        prop_assert!((delta - expected).abs() <= 1e-9 * scale);
    }

    #[test]
    fn unknown_fuel_key_counts_as_no_fuel(
        profile in profile_strategy(),
        key in "[a-z]{0,8}".prop_filter("not a fuel", |k| FuelType::from_key(k).is_none()),
    ) {
        let estimator = Estimator::default();
        let mut unknown = ProfileSubmission::from(&profile);
        unknown.fuel_type = key;
        let no_fuel = CompanyProfile { fuel_consumption: 0.0, ..profile };

        let assessed = estimator.assess(&unknown).unwrap();
        prop_assert_eq!(assessed.result, estimate(&no_fuel));
    }
}

#[test]
fn reference_scenario() {
    let profile = ProfileBuilder::new()
        .name("Black Ridge Colliery")
        .annual_coal_production(1000.0)
        .fuel(FuelType::Diesel, 500.0)
        .employee_count(50)
        .electricity_consumption(2000.0)
        .water_consumption(10000.0)
        .waste_generation(20.0)
        .build();
    assert!(close(estimate(&profile).total_t_co2e, 3824.9));
}

#[test]
fn fuel_term_for_each_fuel_at_fixed_liters() {
    let liters = 500.0;
    let expected = [(FuelType::Diesel, 1320.0), (FuelType::Petrol, 1175.0), (FuelType::Gas, 925.0)];
    for (fuel, term) in expected {
        let profile = ProfileBuilder::new().fuel(fuel, liters).build();
        assert!(close(estimate(&profile).total_t_co2e, term), "{fuel}");
    }
}

#[test]
fn strict_policy_rejects_the_empty_fuel_key() {
    let estimator = Estimator::new(EstimationPolicy {
        fuel_key: FuelKeyPolicy::Strict,
        ..EstimationPolicy::default()
    });
    let submission = ProfileSubmission {
        fuel_type: String::new(),
        ..ProfileSubmission::default()
    };
    assert!(matches!(
        estimator.assess(&submission),
        Err(FootprintError::InvalidCategoryKey(key)) if key.is_empty()
    ));
}

#[test]
fn estimator_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Estimator>();

    let estimator = Estimator::default();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let profile = ProfileBuilder::new().annual_coal_production(i as f64).build();
                estimator.assess_profile(&profile).unwrap().result.total_t_co2e
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert!(close(handle.join().unwrap(), i as f64 * 1.04));
    }
}
