use anyhow::{Context, Result};
use carbonmine_core::{sources, EstimationPolicy, Estimator, FuelKeyPolicy, NegativeInputPolicy};
use carbonmine_schemas::profile::ProfileSubmission;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod config;
mod plotting;
mod workflow;

use config::{AppConfig, OutputConfig};

/// Annual carbon footprint estimates for coal-mining companies.
#[derive(Parser, Debug)]
#[command(name = "carbonmine", author, version, about, long_about = None)]
struct Cli {
    /// YAML configuration file (defaults to ./carbonmine.yaml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate footprints for every profile in the given files or directories
    Estimate {
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        #[command(flatten)]
        policy: PolicyArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Estimate a single footprint from command-line values
    Calc {
        #[command(flatten)]
        form: FormArgs,

        #[command(flatten)]
        policy: PolicyArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the emission factor table
    Factors,
}

#[derive(Args, Debug)]
struct PolicyArgs {
    /// Fail on an unknown fuel type instead of counting its fuel as zero
    #[arg(long)]
    strict_fuel: bool,

    /// How to treat negative quantities
    #[arg(long, value_enum)]
    negative: Option<NegativeArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum NegativeArg {
    Reject,
    Clamp,
    Allow,
}

impl From<NegativeArg> for NegativeInputPolicy {
    fn from(arg: NegativeArg) -> Self {
        match arg {
            NegativeArg::Reject => NegativeInputPolicy::Reject,
            NegativeArg::Clamp => NegativeInputPolicy::Clamp,
            NegativeArg::Allow => NegativeInputPolicy::Allow,
        }
    }
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Write a per-category CSV report to this file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write breakdown charts into this directory
    #[arg(long)]
    plot_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FormArgs {
    /// Company name
    #[arg(long, default_value = "")]
    name: String,

    /// Annual coal production (tons)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    coal: f64,

    /// Fuel type: diesel, petrol or gas
    #[arg(long, default_value = "diesel")]
    fuel: String,

    /// Fuel consumption (liters)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    fuel_liters: f64,

    /// Employee count
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    employees: f64,

    /// Electricity consumption (kWh)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    electricity: f64,

    /// Water consumption (liters)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    water: f64,

    /// Waste generation (tons)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    waste: f64,
}

impl From<FormArgs> for ProfileSubmission {
    fn from(form: FormArgs) -> Self {
        Self {
            name: form.name,
            annual_coal_production: form.coal,
            fuel_type: form.fuel,
            fuel_consumption: form.fuel_liters,
            employee_count: form.employees,
            electricity_consumption: form.electricity,
            water_consumption: form.water,
            waste_generation: form.waste,
        }
    }
}

/// Command-line flags win over the configuration file.
fn merge_policy(mut policy: EstimationPolicy, args: &PolicyArgs) -> EstimationPolicy {
    if args.strict_fuel {
        policy.fuel_key = FuelKeyPolicy::Strict;
    }
    if let Some(negative) = args.negative {
        policy.negative_input = negative.into();
    }
    policy
}

fn merge_output(output: OutputConfig, args: OutputArgs) -> OutputConfig {
    OutputConfig {
        csv: args.csv.or(output.csv),
        plot_dir: args.plot_dir.or(output.plot_dir),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Estimate {
            paths,
            policy,
            output,
        } => {
            let mut submissions = Vec::new();
            for path in &paths {
                let loaded = sources::load_submissions(path)
                    .with_context(|| format!("Failed to load profiles from {:?}", path))?;
                submissions.extend(loaded);
            }
            let estimator = Estimator::new(merge_policy(config.policy, &policy));
            let assessments = workflow::run_assessments(&submissions, &estimator)?;
            workflow::report_assessments(&assessments, &merge_output(config.output, output))?;
        }
        Command::Calc {
            form,
            policy,
            output,
        } => {
            let estimator = Estimator::new(merge_policy(config.policy, &policy));
            let submission = ProfileSubmission::from(form);
            let assessments = workflow::run_assessments(&[submission], &estimator)?;
            workflow::report_assessments(&assessments, &merge_output(config.output, output))?;
        }
        Command::Factors => workflow::print_factor_table(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn calc_flags_become_a_submission() {
        let cli = Cli::parse_from([
            "carbonmine", "calc", "--name", "North Pit", "--coal", "1000", "--fuel", "gas",
            "--fuel-liters", "500", "--employees", "50", "--waste", "-2",
        ]);
        let Command::Calc { form, .. } = cli.command else {
            panic!("expected calc");
        };
        let submission = ProfileSubmission::from(form);
        assert_eq!(submission.name, "North Pit");
        assert_eq!(submission.fuel_type, "gas");
        assert_eq!(submission.fuel_consumption, 500.0);
        assert_eq!(submission.employee_count, 50.0);
        assert_eq!(submission.waste_generation, -2.0);
        assert_eq!(submission.water_consumption, 0.0);
    }

    #[test]
    fn flags_override_configured_policy() {
        let configured = EstimationPolicy {
            fuel_key: FuelKeyPolicy::Permissive,
            negative_input: NegativeInputPolicy::Allow,
        };
        let args = PolicyArgs {
            strict_fuel: true,
            negative: Some(NegativeArg::Clamp),
        };
        let merged = merge_policy(configured, &args);
        assert_eq!(merged.fuel_key, FuelKeyPolicy::Strict);
        assert_eq!(merged.negative_input, NegativeInputPolicy::Clamp);

        let untouched = merge_policy(
            configured,
            &PolicyArgs {
                strict_fuel: false,
                negative: None,
            },
        );
        assert_eq!(untouched, configured);
    }

    #[test]
    fn output_flags_override_configured_paths() {
        let configured = OutputConfig {
            csv: Some(PathBuf::from("config.csv")),
            plot_dir: Some(PathBuf::from("plots")),
        };
        let merged = merge_output(
            configured,
            OutputArgs {
                csv: Some(PathBuf::from("flag.csv")),
                plot_dir: None,
            },
        );
        assert_eq!(merged.csv, Some(PathBuf::from("flag.csv")));
        assert_eq!(merged.plot_dir, Some(PathBuf::from("plots")));
    }
}
