use crate::config::OutputConfig;
use crate::plotting;
use anyhow::{Context, Result};
use carbonmine_core::{
    factors::emission_factors, report::ReportWriter, Assessment, Estimator,
};
use carbonmine_schemas::profile::ProfileSubmission;
use std::fs;
use tracing::info;

/// Assesses every submission in order, stopping at the first one that the
/// policy rejects.
pub fn run_assessments(
    submissions: &[ProfileSubmission],
    estimator: &Estimator,
) -> Result<Vec<Assessment>> {
    info!(
        count = submissions.len(),
        policy = ?estimator.policy(),
        "assessing profiles"
    );
    submissions
        .iter()
        .enumerate()
        .map(|(i, submission)| {
            estimator.assess(submission).with_context(|| {
                format!("Failed to assess profile #{} ('{}')", i + 1, submission.name)
            })
        })
        .collect()
}

/// Prints the summary and writes whichever report artifacts are configured.
pub fn report_assessments(assessments: &[Assessment], output: &OutputConfig) -> Result<()> {
    print_summary_report(assessments);

    if let Some(csv_path) = &output.csv {
        let path = csv_path
            .to_str()
            .with_context(|| format!("CSV path {:?} is not valid UTF-8", csv_path))?;
        let mut writer = ReportWriter::new(path)?;
        for assessment in assessments {
            writer.write(assessment)?;
        }
        info!(path, "CSV report written");
    }

    if let Some(plot_dir) = &output.plot_dir {
        fs::create_dir_all(plot_dir)
            .with_context(|| format!("Failed to create plot directory: {:?}", plot_dir))?;
        for (i, assessment) in assessments.iter().enumerate() {
            plotting::plot_breakdown(plot_dir, i, assessment)?;
        }
        if assessments.len() > 1 {
            plotting::plot_totals(plot_dir, assessments)?;
        }
        info!(dir = %plot_dir.display(), "charts written");
    }

    Ok(())
}

/// The sentence shown under a computed footprint.
pub fn summary_sentence(assessment: &Assessment) -> String {
    format!(
        "Your company's carbon footprint is approximately {:.2} tons CO2e per year.",
        assessment.result.total_t_co2e
    )
}

fn print_summary_report(assessments: &[Assessment]) {
    println!("\n--- [Carbon Footprint Report] ---");
    println!("Generated: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("========================================");

    for assessment in assessments {
        let name = if assessment.company_name.is_empty() {
            "(unnamed company)"
        } else {
            assessment.company_name.as_str()
        };
        let fuel = assessment.fuel_type.map_or("unknown", |fuel| fuel.key());

        println!("\n{}", name);
        println!("  Fuel type: {}", fuel);
        println!("  Emissions by category (t CO2e/yr):");
        for impact in assessment.breakdown.impacts() {
            println!("    - {:<24} {:>14.2}", impact.metric, impact.value);
        }
        println!("  --------------------------------------");
        println!("    - {:<24} {:>14.2}", "Total", assessment.result.total_t_co2e);
        println!("\n  {}", summary_sentence(assessment));

        if !assessment.recommendations.is_empty() {
            println!("\n  Ways to Reduce Your Carbon Footprint:");
            for recommendation in assessment.recommendations {
                println!("    * {}", recommendation);
            }
        }
    }

    if assessments.len() > 1 {
        let combined: f64 = assessments.iter().map(|a| a.result.total_t_co2e).sum();
        println!("\n----------------------------------------");
        println!("Profiles assessed: {}", assessments.len());
        println!("Combined footprint: {:.2} t CO2e/yr", combined);
    }
    println!("========================================");
}

pub fn format_factor_table() -> String {
    let mut table = format!("{:<28} {:>8}  {}\n", "Category", "Factor", "Unit basis");
    table.push_str(&"-".repeat(60));
    table.push('\n');
    for entry in emission_factors().entries() {
        table.push_str(&format!(
            "{:<28} {:>8.2}  {}\n",
            entry.category, entry.factor.value, entry.factor.unit
        ));
    }
    table
}

pub fn print_factor_table() {
    print!("{}", format_factor_table());
}
