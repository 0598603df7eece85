use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use taq_time::utils::{logger, validation::Validate};
use taq_time::{CliConfig, TaqError, TaqPreprocessor};

fn open_input(cli: &CliConfig) -> io::Result<Box<dyn Read>> {
    Ok(match &cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    })
}

fn open_output(cli: &CliConfig) -> io::Result<Box<dyn Write>> {
    Ok(match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}

fn run(cli: &CliConfig) -> Result<(), TaqError> {
    let config = cli.resolve()?;
    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    config.validate()?;

    let preprocessor = TaqPreprocessor::from_config(&config)?;
    let stats = preprocessor.process(open_input(cli)?, open_output(cli)?)?;

    if stats.rejected > 0 {
        tracing::warn!("{} of {} rows had unparseable timestamps", stats.rejected, stats.total);
    }

    Ok(())
}

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting taq-time");

    if let Err(e) = run(&cli) {
        tracing::error!("❌ Preprocessing failed: {}", e);
        eprintln!("❌ {}", e);

        let exit_code = match e {
            TaqError::ConfigValidationError { .. }
            | TaqError::InvalidConfigValueError { .. } => 2,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}
