use paxline::cli::Cli;
use paxline::config::Scenario;
use paxline::core::{collect_all_segments, Report, ReportGenerator};
use paxline::debug_println;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    let path = cli.file.clone().unwrap_or_else(Scenario::get_config_path);

    // Handle scenario commands
    if cli.init {
        if Scenario::init(&path)? {
            println!("Created scenario at {}", path.display());
        } else {
            println!("Scenario already exists at {}", path.display());
        }
        return Ok(());
    }

    let mut scenario = match &cli.file {
        Some(file) => Scenario::load_from_path(file)?,
        None => Scenario::load()?,
    };
    scenario.apply_env();

    if let Err(e) = scenario.apply_cli(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if cli.print {
        scenario.print()?;
        return Ok(());
    }

    if cli.check {
        scenario.check()?;
        for warning in scenario.tier_warnings() {
            println!("⚠ {}", warning);
        }
        println!("✓ Scenario valid");
        return Ok(());
    }

    debug_println!(
        "Projecting {} pax, mode {:?}, commission {}%",
        scenario.effective_capacity(),
        scenario.pricing_mode,
        scenario.commission_percent
    );
    let report = Report::build(&scenario, cli.resolution, cli.parallel);

    let generator = ReportGenerator::new(scenario.converter());
    let segments = collect_all_segments();

    if cli.json {
        println!("{}", generator.json(&report, &segments)?);
        return Ok(());
    }

    println!("{}", generator.headline(&report, &segments));
    println!();
    if cli.chart {
        println!("{}", generator.chart(&report.chart, report.crossing.as_ref()));
    } else {
        println!("{}", generator.table(&report.rows));
    }

    Ok(())
}
