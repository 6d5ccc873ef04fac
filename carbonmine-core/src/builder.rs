use carbonmine_schemas::{fuel::FuelType, profile::CompanyProfile};

/// A fluent builder for constructing a `CompanyProfile`.
///
/// Fields that are never set keep the values an empty input form starts
/// with: zero for every quantity and diesel as the fuel.
#[derive(Debug, Default)]
pub struct ProfileBuilder {
    profile: CompanyProfile,
}

impl ProfileBuilder {
    /// Creates a new builder with every quantity at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.profile.name = name.into();
        self
    }

    /// Sets annual coal production in tons.
    pub fn annual_coal_production(mut self, tons: f64) -> Self {
        self.profile.annual_coal_production = tons;
        self
    }

    /// Sets the fuel type and the liters of it burned per year.
    pub fn fuel(mut self, fuel_type: FuelType, liters: f64) -> Self {
        self.profile.fuel_type = fuel_type;
        self.profile.fuel_consumption = liters;
        self
    }

    pub fn employee_count(mut self, employees: u64) -> Self {
        self.profile.employee_count = employees;
        self
    }

    /// Sets electricity consumption in kWh.
    pub fn electricity_consumption(mut self, kwh: f64) -> Self {
        self.profile.electricity_consumption = kwh;
        self
    }

    /// Sets water consumption in liters.
    pub fn water_consumption(mut self, liters: f64) -> Self {
        self.profile.water_consumption = liters;
        self
    }

    /// Sets waste generation in tons.
    pub fn waste_generation(mut self, tons: f64) -> Self {
        self.profile.waste_generation = tons;
        self
    }

    /// Consumes the builder and returns the profile.
    pub fn build(self) -> CompanyProfile {
        self.profile
    }
}
