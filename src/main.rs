use vicsek::{Runner, Scenario, ScenarioConfig};
use vicsek::{write_params_csv, CsvStepWriter};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    #[arg(short, default_value = "outputs")]
    out_dir: String,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;

    let scenario = Scenario::build_scenario(scenario_cfg)?;
    let out_dir = PathBuf::from(&args.out_dir);

    let mut writer = CsvStepWriter::new(&out_dir)?;
    let mut runner = Runner::new(scenario);
    runner.run(&mut writer)?;

    println!("simulation finished in: {}", writer.sim_dir().display());

    write_params_csv(&out_dir, &runner.scenario.parameters)?;

    Ok(())
}
