use anyhow::Context;
use clap::Parser;
use rover_input::utils::{logger, validation::Validate};
use rover_input::{CliConfig, CompassDirections, InputConfig, InputError, InputManager, MissionPlan};
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let input_config = match load_input_config(&config) {
        Ok(input_config) => input_config,
        Err(e) => fail(&e),
    };
    let compass = match input_config.compass() {
        Ok(compass) => compass,
        Err(e) => fail(&e),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut manager = InputManager::new(
        stdin.lock(),
        stdout.lock(),
        &compass,
        &input_config.messages,
    );

    let plan = match manager.read_mission(config.rovers) {
        Ok(plan) => plan,
        Err(e) => fail(&e),
    };
    drop(manager);

    // 輸出給下游模擬器
    let mut out = io::stdout().lock();
    if config.json {
        let json = serde_json::to_string_pretty(&plan).context("rendering mission plan")?;
        writeln!(out, "{}", json)?;
    } else {
        write_plan(&mut out, &plan, &compass)?;
    }

    Ok(())
}

fn load_input_config(config: &CliConfig) -> rover_input::Result<InputConfig> {
    let input_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            InputConfig::from_file(path)?
        }
        None => InputConfig::default(),
    };
    input_config.validate()?;
    Ok(input_config)
}

fn write_plan<W: Write>(out: &mut W, plan: &MissionPlan, compass: &CompassDirections) -> io::Result<()> {
    writeln!(out, "{}", plan.surface)?;
    for rover in &plan.rovers {
        let facing = compass
            .symbol_for(rover.pose.direction_state)
            .unwrap_or('?');
        writeln!(out, "{} {} {}", rover.pose.x, rover.pose.y, facing)?;
        writeln!(out, "{}", rover.commands)?;
    }
    Ok(())
}

fn fail(e: &InputError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
