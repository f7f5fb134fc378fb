//! Care Home Rota Demo
//!
//! Builds one week of morning, afternoon and night shifts for a small care
//! home, fills them through the scheduling service with in-memory stores and
//! prints the resulting rota.
//!
//! Run with: cargo run -p care-home [path/to/optimizer.toml]

use std::process::ExitCode;

use carerota::termination::{AssignmentLimitTermination, OrTermination, TimeTermination};
use carerota::{
    CarerotaError, DateRange, OptimizationConstraints, OptimizationResult, OptimizerConfig,
    SchedulingService,
};
use carerota_test::care_home::CareHome;
use carerota_test::{at, InMemoryShiftStore, InMemoryStaffDirectory, InMemoryTimeOffStore};
use chrono::Duration;
use owo_colors::OwoColorize;

const STAFF_COUNT: usize = 8;

fn main() -> ExitCode {
    carerota::console::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "optimizer.toml".to_string());

    let home = CareHome::week(STAFF_COUNT)
        .with_assignment("d1-am", "staff-02")
        .with_days_off("staff-03", 4, 5);

    let (constraints, limits) = match OptimizerConfig::load(&path) {
        Ok(config) => match config.constraints() {
            Ok(constraints) => (constraints, RunLimits::from(&config)),
            Err(e) => {
                eprintln!("{} {}: {}", "✗".bright_red(), path, e);
                return ExitCode::FAILURE;
            }
        },
        Err(e) => {
            println!(
                "{} {} ({}), using built-in constraints",
                "▸".bright_yellow(),
                path,
                e
            );
            (home.constraints(), RunLimits::default())
        }
    };

    match run(&home, &constraints, limits) {
        Ok(result) => {
            print_rota(&result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "✗".bright_red(), e);
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Default)]
struct RunLimits {
    time: Option<std::time::Duration>,
    assignments: Option<usize>,
}

impl From<&OptimizerConfig> for RunLimits {
    fn from(config: &OptimizerConfig) -> Self {
        Self {
            time: config.time_limit(),
            assignments: config.assignment_limit(),
        }
    }
}

fn run(
    home: &CareHome,
    constraints: &OptimizationConstraints,
    limits: RunLimits,
) -> Result<OptimizationResult, CarerotaError> {
    let org = &home.organization_id;
    let service = SchedulingService::new(
        InMemoryStaffDirectory::new().with_staff(org, home.staff.clone()),
        InMemoryShiftStore::new().with_shifts(org, home.shifts.clone()),
        InMemoryTimeOffStore::new().with_requests(org, home.time_off.clone()),
    );

    let week = DateRange::new(at(1, 0), at(1, 0) + Duration::days(8));
    let termination = OrTermination((
        limits.time.map(TimeTermination::new),
        limits.assignments.map(AssignmentLimitTermination::new),
        TimeTermination::seconds(60),
    ));
    let run = service.optimize(org, week, constraints, &termination)?;
    service.commit(&run)?;

    println!(
        "{} Committed {} assignments ({} eligibility checks)",
        "▸".bright_green(),
        run.assignments().len().to_string().bright_yellow(),
        run.outcome.statistics.eligibility_checks,
    );
    Ok(run.outcome.result)
}

fn print_rota(result: &OptimizationResult) {
    println!("\n{}", "Rota".bold());
    println!("{}", "-".repeat(44));
    for shift in &result.schedule {
        let assignee = match &shift.staff_id {
            Some(id) => id.as_str().bright_white().to_string(),
            None => "OPEN".bright_red().to_string(),
        };
        println!(
            "{:<10} {:<10} {}  {}",
            shift.id.as_str(),
            shift.shift_type.as_str(),
            shift.start_time.format("%a %H:%M"),
            assignee
        );
    }
    println!("{}", "-".repeat(44));

    let m = &result.metrics;
    println!(
        "utilization {:.1}%  overtime {:.1}h  unassigned {}  compliance {:.1}%",
        m.utilization_rate, m.overtime_hours, m.unassigned_shifts, m.certification_compliance
    );

    for conflict in &result.conflicts {
        println!(
            "{} [{}] {}",
            "!".bright_red(),
            conflict.severity,
            conflict.description
        );
    }
}
