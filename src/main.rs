use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use conversion_kit::config::{validate_config, Config, ConfigLoader, DEFAULT_CONFIG_FILE};
use conversion_kit::{EncodedText, LengthUnit, Measurement, TextCodec, WideText};

#[derive(Parser)]
#[command(name = "conversion-kit")]
#[command(about = "Code page text marshaling and inch/millimeter conversion", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode stdin lines to hex of the code page bytes
    Encode,

    /// Decode hex lines from stdin back to text
    Decode,

    /// Convert a measurement to millimeters
    Metric {
        /// Value with optional unit (e.g. "2 in", "2in", "-0.5")
        #[arg(required = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Convert a measurement to inches
    Inches {
        /// Value with optional unit (e.g. "50 mm", "50mm")
        #[arg(required = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses `12.5`, `12.5 mm` or `12.5mm`; bare numbers take the configured unit
fn parse_measurement(input: &[String], default_unit: LengthUnit) -> Result<Measurement> {
    let joined = input.join(" ");
    if joined.trim().is_empty() {
        bail!("no measurement given");
    }

    if let Ok(value) = joined.trim().parse::<f64>() {
        return Ok(Measurement::with_unit(value, default_unit));
    }

    joined
        .parse::<Measurement>()
        .with_context(|| format!("cannot read measurement '{}'", joined))
}

fn encode_line(codec: &TextCodec, line: &str) -> String {
    let wide = WideText::from(line);
    codec.wide_to_bytes(Some(wide.as_slice())).to_hex()
}

async fn encode_lines<R, W>(codec: &TextCodec, reader: R, writer: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        writer.write_all(encode_line(codec, &line).as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }

    writer.flush().await?;
    Ok(())
}

async fn decode_lines<R, W>(codec: &TextCodec, reader: R, writer: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut line_number = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        let encoded = EncodedText::from_hex(&line)
            .with_context(|| format!("line {}: input is not hex", line_number))?;
        let decoded = codec.decode_to_string(encoded.as_bytes());
        writer.write_all(decoded.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }

    writer.flush().await?;
    Ok(())
}

fn measurement_report(config: &Config, target: LengthUnit, input: &[String]) -> Result<Value> {
    let default_unit = config.units.default_length_unit()?;
    let measurement = parse_measurement(input, default_unit)?;
    let converted = measurement.to_unit(target);
    debug!(from = %measurement, to = %converted, "converted measurement");

    Ok(json!({
        "input": measurement,
        "output": converted,
        "display": format!("{:.*}", config.units.precision, converted),
    }))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::new(&cli.config)
        .load_or_default()
        .with_context(|| format!("loading {}", cli.config.display()))?;
    validate_config(&config)?;

    init_logging(&config);
    info!("Starting Conversion-Kit v{}", env!("CARGO_PKG_VERSION"));

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    match cli.command {
        Commands::Encode => {
            let codec = TextCodec::from_config(&config.codec)?;
            encode_lines(&codec, stdin, &mut stdout).await
        }
        Commands::Decode => {
            let codec = TextCodec::from_config(&config.codec)?;
            decode_lines(&codec, stdin, &mut stdout).await
        }
        Commands::Metric { value } => {
            let report = measurement_report(&config, LengthUnit::Millimeter, &value)?;
            println!("{}", serde_json::to_string(&report)?);
            Ok(())
        }
        Commands::Inches { value } => {
            let report = measurement_report(&config, LengthUnit::Inch, &value)?;
            println!("{}", serde_json::to_string(&report)?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conversion_kit::ConversionError;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["conversion-kit", "--config", "alt.toml", "encode"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        assert!(matches!(cli.command, Commands::Encode));

        let cli = Cli::try_parse_from(["conversion-kit", "metric", "2", "in"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        match cli.command {
            Commands::Metric { value } => assert_eq!(value, words(&["2", "in"])),
            _ => panic!("Expected Metric"),
        }

        let cli = Cli::try_parse_from(["conversion-kit", "decode", "--config", "late.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("late.toml"));
        assert!(matches!(cli.command, Commands::Decode));
    }

    #[test]
    fn test_cli_negative_values() {
        let cli = Cli::try_parse_from(["conversion-kit", "inches", "-25.4", "mm"]).unwrap();
        match cli.command {
            Commands::Inches { value } => assert_eq!(value, words(&["-25.4", "mm"])),
            _ => panic!("Expected Inches"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_usage() {
        assert!(Cli::try_parse_from(["conversion-kit"]).is_err());
        assert!(Cli::try_parse_from(["conversion-kit", "transmogrify"]).is_err());
        assert!(Cli::try_parse_from(["conversion-kit", "metric"]).is_err());
        assert!(Cli::try_parse_from(["conversion-kit", "encode", "--config"]).is_err());
    }

    #[test]
    fn test_parse_measurement() {
        let bare = parse_measurement(&words(&["4"]), LengthUnit::Inch).unwrap();
        assert_eq!(bare, Measurement::inches(4.0));

        let split = parse_measurement(&words(&["4", "mm"]), LengthUnit::Inch).unwrap();
        assert_eq!(split, Measurement::millimeters(4.0));

        let joined = parse_measurement(&words(&["4mm"]), LengthUnit::Inch).unwrap();
        assert_eq!(joined, Measurement::millimeters(4.0));

        assert!(parse_measurement(&[], LengthUnit::Inch).is_err());
        assert!(parse_measurement(&words(&["4", "yd"]), LengthUnit::Inch).is_err());
    }

    #[test]
    fn test_encode_line() {
        let codec = TextCodec::default();
        assert_eq!(encode_line(&codec, "café"), "636166e9");
        assert_eq!(encode_line(&codec, "€1"), "8031");
        assert_eq!(encode_line(&codec, "日"), "3f");
        assert_eq!(encode_line(&codec, ""), "");
    }

    #[tokio::test]
    async fn test_encode_lines() {
        let codec = TextCodec::default();
        let mut output = Vec::new();
        encode_lines(&codec, "café\nA\n".as_bytes(), &mut output).await.unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "636166e9\n41\n");
    }

    #[tokio::test]
    async fn test_decode_lines() {
        let codec = TextCodec::default();
        let mut output = Vec::new();
        decode_lines(&codec, " 636166e9 \n8081\n".as_bytes(), &mut output)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "café\n€?\n");
    }

    #[tokio::test]
    async fn test_decode_lines_reports_bad_hex() {
        let codec = TextCodec::default();
        let mut output = Vec::new();
        let err = decode_lines(&codec, "41\nxyz\n".as_bytes(), &mut output)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("line 2"));
        assert!(matches!(
            err.downcast_ref::<ConversionError>(),
            Some(ConversionError::InvalidHex(_))
        ));
        assert_eq!(String::from_utf8(output).unwrap(), "A\n");
    }

    #[test]
    fn test_measurement_report() {
        let mut config = Config::default();
        config.units.precision = 2;

        let report = measurement_report(&config, LengthUnit::Millimeter, &words(&["1", "in"])).unwrap();
        assert_eq!(report["display"], "25.40 mm");
        assert_eq!(report["input"]["is_metric"], false);
        assert_eq!(report["output"]["is_metric"], true);

        let report = measurement_report(&config, LengthUnit::Inch, &words(&["50.8mm"])).unwrap();
        assert_eq!(report["display"], "2.00 in");
    }

    #[test]
    fn test_measurement_report_uses_default_unit() {
        let mut config = Config::default();
        config.units.default_unit = "mm".to_string();
        config.units.precision = 1;

        let report = measurement_report(&config, LengthUnit::Inch, &words(&["254"])).unwrap();
        assert_eq!(report["display"], "10.0 in");

        assert!(measurement_report(&config, LengthUnit::Inch, &words(&["ten"])).is_err());
    }
}
