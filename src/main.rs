use abraj::config::Command;
use abraj::core::oracle::Oracle;
use abraj::domain::signs::SIGNS;
use abraj::utils::error::ErrorSeverity;
use abraj::utils::{logger, validation::parse_date};
use abraj::{CliConfig, GeminiClient, GeneratorSettings, NarrativeResult, Result};
use clap::Parser;

type CliOracle = Oracle<GeminiClient, GeneratorSettings>;

fn print_narrative(result: &NarrativeResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{}", result.text);
    }
    Ok(())
}

async fn run(oracle: &CliOracle, command: Command, json: bool) -> Result<()> {
    match command {
        Command::Sign { date } => {
            let date = parse_date("date", &date)?;
            let record = oracle.classify_sign(date).record();
            if json {
                println!("{}", serde_json::to_string_pretty(record)?);
            } else {
                println!(
                    "{} | {} | {} | {}",
                    record.id, record.arabic_name, record.date_range, record.arabic_element
                );
            }
        }
        Command::Age { birth, as_of } => {
            let birth = parse_date("birth", &birth)?;
            let as_of = match as_of {
                Some(value) => parse_date("as_of", &value)?,
                None => oracle.today(),
            };
            let age = abraj::age_breakdown(birth, as_of)?;
            let sign = oracle.classify_sign(birth);
            if json {
                let payload = serde_json::json!({ "age": age, "sign": sign.record() });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!(
                    "العمر: {} سنة و{} شهر و{} يوم",
                    age.years, age.months, age.days
                );
                println!("البرج: {} ({})", sign.arabic_name(), sign);
            }
        }
        Command::Signs => {
            if json {
                println!("{}", serde_json::to_string_pretty(&SIGNS)?);
            } else {
                for record in SIGNS.iter() {
                    println!(
                        "{:<12} {:<8} {:<16} {}",
                        record.id.as_str(),
                        record.arabic_name,
                        record.date_range,
                        record.arabic_element
                    );
                }
            }
        }
        Command::Daily { sign } => {
            print_narrative(&oracle.fetch_daily_horoscope(sign).await, json)?;
        }
        Command::Analysis { sign } => {
            print_narrative(&oracle.fetch_deep_analysis(sign).await, json)?;
        }
        Command::Compat { sign, partner } => {
            print_narrative(&oracle.fetch_compatibility(sign, partner).await, json)?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.log_format, config.verbose);

    tracing::info!("Starting abraj CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config.command);
    }

    let outcome = match config.generator_settings() {
        Ok(settings) => {
            let generator = GeminiClient::from_config(&settings);
            let oracle = Oracle::new(generator, settings);
            run(&oracle, config.command.clone(), config.json).await
        }
        Err(e) => Err(e),
    };

    if let Err(e) = outcome {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ abraj failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}
