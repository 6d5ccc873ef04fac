use crate::{error::FootprintError, policy::Assessment};
use csv::Writer;
use serde::Serialize;
use std::fs;
use std::io;

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    company: &'a str,
    fuel_type: &'a str,
    coal_production_t_co2e: f64,
    fuel_consumption_t_co2e: f64,
    employees_t_co2e: f64,
    electricity_consumption_t_co2e: f64,
    water_consumption_t_co2e: f64,
    waste_generation_t_co2e: f64,
    total_t_co2e: f64,
}

/// Writes one CSV row per assessment with the per-category breakdown.
pub struct ReportWriter<W: io::Write> {
    writer: Writer<W>,
    label: String,
}

impl ReportWriter<fs::File> {
    pub fn new(path: &str) -> Result<Self, FootprintError> {
        let writer = Writer::from_path(path)
            .map_err(|e| FootprintError::CsvError(path.to_string(), e))?;
        Ok(Self {
            writer,
            label: path.to_string(),
        })
    }
}

impl<W: io::Write> ReportWriter<W> {
    pub fn from_writer(inner: W) -> Self {
        Self {
            writer: Writer::from_writer(inner),
            label: "<writer>".to_string(),
        }
    }

    pub fn write(&mut self, assessment: &Assessment) -> Result<(), FootprintError> {
        let b = &assessment.breakdown;
        let row = ReportRow {
            company: &assessment.company_name,
            fuel_type: assessment.fuel_type.map_or("unknown", |fuel| fuel.key()),
            coal_production_t_co2e: b.coal_production,
            fuel_consumption_t_co2e: b.fuel_consumption,
            employees_t_co2e: b.employees,
            electricity_consumption_t_co2e: b.electricity_consumption,
            water_consumption_t_co2e: b.water_consumption,
            waste_generation_t_co2e: b.waste_generation,
            total_t_co2e: assessment.result.total_t_co2e,
        };
        self.writer
            .serialize(row)
            .map_err(|e| FootprintError::CsvError(self.label.clone(), e))?;
        self.writer
            .flush()
            .map_err(|e| FootprintError::FileIO(self.label.clone(), e))?;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> Result<W, FootprintError> {
        let label = self.label;
        self.writer
            .into_inner()
            .map_err(|e| FootprintError::FileIO(label, e.into_error()))
    }
}
