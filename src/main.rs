use salesgen::{write_dataset, SimError, SimulationConfig, Simulator};
use std::path::Path;

fn main() -> Result<(), SimError> {
    // Progress goes to stdout alongside the final total
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let config = SimulationConfig::default();
    println!(
        "Generating {} days of sales starting {}",
        config.total_days, config.start_date
    );

    let (dataset, summary) = Simulator::new(config)?.run()?;
    write_dataset(&dataset, Path::new("."))?;

    println!("{}", summary.total_sales);
    Ok(())
}
