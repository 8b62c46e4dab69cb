// Command line interface
use crate::logger;
use anyhow::{
    bail,
    Result,
};
use clap::{
    Arg,
    ArgAction,
    ArgMatches,
    Command,
};
use clap_complete::Shell;
use humansize::{
    format_size,
    BINARY,
};
use s3bytes::{
    load_config,
    sort_metrics,
    Client,
    Manager,
    MetricName,
    OutputType,
    Renderer,
    StorageType,
};
use std::io;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{
    debug,
    info,
};

const APP_NAME: &str = "s3bytes";

// Create the clap app
fn create_app() -> Command {
    Command::new(APP_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("S3 size checker")
        .long_about("Check the size of all buckets in S3 in one shot.")
        .arg(
            Arg::new("completion")
                .short('c')
                .long("completion")
                .value_name("SHELL")
                .value_parser(["bash", "zsh", "pwsh"])
                .help("print completion scripts"),
        )
        .arg(
            Arg::new("profile")
                .short('p')
                .long("profile")
                .env("AWS_PROFILE")
                .value_name("PROFILE")
                .help("set aws profile"),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .env("S3BYTES_LOG_LEVEL")
                .value_name("LEVEL")
                .default_value("info")
                .help("set log level"),
        )
        .arg(
            Arg::new("region")
                .short('r')
                .long("region")
                .action(ArgAction::Append)
                .value_name("REGION")
                .help("set target regions [default: all regions with no opt-in]"),
        )
        .arg(
            Arg::new("metric-name")
                .short('m')
                .long("metric-name")
                .value_name("METRIC")
                .default_value(MetricName::BucketSizeBytes.as_str())
                .help("set metric name"),
        )
        .arg(
            Arg::new("storage-type")
                .short('s')
                .long("storage-type")
                .value_name("TYPE")
                .default_value(StorageType::StandardStorage.as_str())
                .help("set storage type"),
        )
        .arg(
            Arg::new("prefix")
                .short('P')
                .long("prefix")
                .value_name("PREFIX")
                .help("set bucket name prefix"),
        )
        .arg(
            Arg::new("filter")
                .short('f')
                .long("filter")
                .value_name("EXPR")
                .help("set filter expression for metric values"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .env("S3BYTES_OUTPUT_TYPE")
                .value_name("FORMAT")
                .default_value(OutputType::CompressedText.as_str())
                .help("set output type"),
        )
}

/// Parse arguments and run the collection end to end.
pub async fn run() -> Result<()> {
    let matches = create_app().get_matches();

    if let Some(shell) = matches.get_one::<String>("completion") {
        return completion(shell);
    }

    logger::init(flag(&matches, "log-level"))?;

    let metric_name: MetricName = flag(&matches, "metric-name").parse()?;
    let storage_type: StorageType = flag(&matches, "storage-type").parse()?;
    let output_type: OutputType = flag(&matches, "output").parse()?;

    info!(%metric_name, %storage_type, %output_type, "started");

    let profile = matches.get_one::<String>("profile").map(String::as_str);
    let config = load_config(profile).await?;

    let mut man = Manager::new(Client::new(&config));

    let regions: Vec<String> = matches
        .get_many::<String>("region")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    man.set_region(regions)?;
    man.set_metric(metric_name, storage_type)?;
    man.set_prefix(flag(&matches, "prefix"))?;
    man.set_filter(flag(&matches, "filter"))?;

    let token = CancellationToken::new();

    {
        let token = token.clone();

        tokio::spawn(async move {
            if signal::ctrl_c().await.is_ok() {
                token.cancel();
            }
        });
    }

    let mut data = man.list(token).await?;

    debug!(manager = ?man, "collection finished");

    sort_metrics(&mut data);

    let stdout = io::stdout().lock();
    Renderer::new(stdout, &data, output_type).render()?;

    let total = match metric_name {
        MetricName::BucketSizeBytes => format_size(data.total.max(0) as u64, BINARY),
        MetricName::NumberOfObjects => data.total.to_string(),
    };

    info!(%total, "completed");

    Ok(())
}

fn completion(shell: &str) -> Result<()> {
    let shell = match shell {
        "bash" => Shell::Bash,
        "zsh"  => Shell::Zsh,
        "pwsh" => Shell::PowerShell,
        _      => bail!("unsupported shell: {shell:?}"),
    };

    clap_complete::generate(shell, &mut create_app(), APP_NAME, &mut io::stdout());

    Ok(())
}

fn flag<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_app() {
        create_app().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let matches = create_app().get_matches_from(vec![APP_NAME]);

        assert_eq!(flag(&matches, "metric-name"), "BucketSizeBytes");
        assert_eq!(flag(&matches, "storage-type"), "StandardStorage");
        assert_eq!(flag(&matches, "output"), "compressedtext");
        assert_eq!(flag(&matches, "log-level"), "info");
        assert_eq!(flag(&matches, "prefix"), "");
        assert!(matches.get_many::<String>("region").is_none());
    }

    #[test]
    fn test_repeatable_region() {
        let matches = create_app().get_matches_from(vec![
            APP_NAME,
            "-r",
            "ap-northeast-1",
            "-r",
            "us-east-1",
        ]);

        let regions: Vec<&String> = matches.get_many::<String>("region").unwrap().collect();

        assert_eq!(regions, vec!["ap-northeast-1", "us-east-1"]);
    }
}
