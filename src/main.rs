use catalog_lane::core::report::{render_json, render_text};
use catalog_lane::utils::logger;
use catalog_lane::{CliConfig, LaneDocument, LaneError, OutputFormat, TomlConfig};
use clap::Parser;

fn fail(e: &LaneError) -> ! {
    tracing::error!("❌ {} (severity: {:?})", e, e.severity());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn run(config: &CliConfig, file_config: &TomlConfig) -> catalog_lane::Result<String> {
    let settings = config.resolve(file_config)?;
    tracing::debug!("Run settings: {:?}", settings);

    let document = LaneDocument::from_file(&settings.input)?;
    let catalog = document.into_catalog(settings.base_url.as_ref())?;
    tracing::info!(
        "Loaded {} lanes ({} books) from {}",
        catalog.lanes().len(),
        catalog.book_count(),
        settings.input.display()
    );

    match settings.format {
        OutputFormat::Text => Ok(render_text(&catalog, settings.images_only)),
        OutputFormat::Json => render_json(&catalog, settings.images_only),
    }
}

fn main() {
    let config = CliConfig::parse();

    // 設定檔錯誤時，日誌尚未初始化，直接輸出到 stderr
    let file_config = match config.load_file_config() {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    if config.log_json || file_config.log_json() {
        logger::init_json_logger(config.verbose, file_config.log_level());
    } else {
        logger::init_cli_logger(config.verbose, file_config.log_level());
    }

    tracing::info!("Starting catalog-lane");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config, &file_config) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(e) => fail(&e),
    }
}
