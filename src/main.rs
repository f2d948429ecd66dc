mod cli;
mod config;
mod report;
mod types;
mod ui;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    let plan = match config::build_export_plan(&args) {
        Ok(p) => p,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    // Remove stale reports if requested; other files in the directory are kept
    if plan.clean {
        match report::clean_outputs(&plan.output_dir) {
            Ok(removed) => ui::status(&format!("removed {} stale reports from {}", removed, plan.output_dir.display())),
            Err(e) => ui::print_warning(&format!("failed to clean output directory: {}", e)),
        }
    }

    let record = match config::load_planned_record(&plan) {
        Ok(r) => r,
        Err(e) => {
            ui::print_error(&e);
            std::process::exit(1);
        }
    };

    if let Err(e) = report::export(&record, &plan.output_dir) {
        ui::print_error(&format!("Coverage export failed: {}", e));
        std::process::exit(1);
    }

    ui::status(&format!(
        "wrote coverage for {} examples ({} conversions) to {}",
        record.examples.len(),
        record.total_conversions(),
        plan.output_dir.display()
    ));

    if plan.print_summary {
        print!("{}", report::format_short_summary(&record));
    }
}
