//! 命令行入口

mod cli;

use can_composer::app::config::{
    AppConfig, ConfigManager, ConfigValidator,
};
use can_composer::app::error::types::{
    ComposerError, Result,
};
use can_composer::app::logging::init_logging;
use can_composer::core::catalog::{
    compose_catalog_text, import_from_file,
    read_records, MessageCatalog,
};
use can_composer::core::frame::simulate_message_values;
use can_composer::core::params::{
    ParamTemplate, ParameterRegistry,
};
use clap::Parser;
use cli::{Args, Commands};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

fn main() -> Result<()> {
    // 初始化日志
    init_logging();

    // 解析命令行参数
    let args = Args::parse();

    // 加载并校验应用配置
    let mut config_manager = ConfigManager::new()?;
    config_manager.load()?;
    ConfigValidator::validate(config_manager.config())?;
    let config = config_manager.config().clone();

    // 内置 BMS 参数表作为注册表起点
    let mut registry = ParameterRegistry::with_defaults();

    match args.command {
        Commands::Params => run_params(&registry),
        Commands::GenerateParams => {
            run_generate_params(&mut registry, &config)
        }
        Commands::List { file } => {
            run_list(&file, &registry)
        }
        Commands::Check { file } => {
            run_check(&file, &registry)
        }
        Commands::Preview { file, index, seed } => {
            run_preview(&file, index, seed, &registry)
        }
    }
}

/// 打印注册表参数列表
fn run_params(
    registry: &ParameterRegistry,
) -> Result<()> {
    println!(
        "{:<20} {:<8} {:<6} {:<8} Description",
        "Parameter", "Type", "Unit", "Scale"
    );
    for param in registry.list_sorted() {
        println!(
            "{:<20} {:<8} {:<6} {:<8} {}",
            param.name,
            param.param_type.to_string(),
            param.unit,
            param.scale,
            param.description
        );
    }
    println!("\n{} parameters", registry.len());
    Ok(())
}

/// 按配置批量生成电芯/温度参数
fn run_generate_params(
    registry: &mut ParameterRegistry,
    config: &AppConfig,
) -> Result<()> {
    let num_cells = config.battery.total_cells();
    let num_temps = config.temp_sensors.total_sensors(
        config.battery.number_of_slaves,
    );

    let created_cells = registry.generate_sequential(
        "Cell",
        num_cells,
        &ParamTemplate::cell_voltage(),
    )?;
    let created_temps = registry.generate_sequential(
        "Temp",
        num_temps,
        &ParamTemplate::temp_sensor(),
    )?;

    println!(
        "Generated parameters for {} cells and {} temperature sensors ({} new)",
        num_cells,
        num_temps,
        created_cells + created_temps
    );
    println!(
        "Registry now holds {} parameters",
        registry.len()
    );
    Ok(())
}

/// 以文本列表形式打印目录文件
fn run_list(
    file: &Path,
    registry: &ParameterRegistry,
) -> Result<()> {
    let mut catalog = MessageCatalog::new();
    let count =
        import_from_file(&mut catalog, registry, file)?;

    println!("{}", compose_catalog_text(&catalog));
    println!("\n{} messages", count);
    Ok(())
}

/// 校验目录文件中的全部记录
fn run_check(
    file: &Path,
    registry: &ParameterRegistry,
) -> Result<()> {
    let records = read_records(file)?;

    let mut failures = 0;
    for (index, record) in records.iter().enumerate() {
        match record.to_definition(registry) {
            Ok(_) => {
                println!(
                    "record[{}] {} ... ok",
                    index, record.name
                );
            }
            Err(e) => {
                failures += 1;
                println!(
                    "record[{}] {} ... FAILED: {}",
                    index, record.name, e
                );
            }
        }
    }

    if failures > 0 {
        return Err(ComposerError::validation(
            "catalog",
            format!(
                "{} of {} records invalid",
                failures,
                records.len()
            ),
        ));
    }

    println!("All {} records valid", records.len());
    Ok(())
}

/// 为目录中的一条报文生成模拟发送字节
fn run_preview(
    file: &Path,
    index: usize,
    seed: Option<u64>,
    registry: &ParameterRegistry,
) -> Result<()> {
    let mut catalog = MessageCatalog::new();
    import_from_file(&mut catalog, registry, file)?;

    let def = catalog.list().get(index).ok_or(
        ComposerError::IndexOutOfRange {
            index,
            len: catalog.len(),
        },
    )?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let values =
        simulate_message_values(def, registry, &mut rng)?;

    println!(
        "Message with ID {} and {} bytes would be transmitted:",
        def.id, def.dlc
    );
    println!("Hex: {}", values.join(" "));
    Ok(())
}
