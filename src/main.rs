// s3bytes: check the size of all buckets in S3 in one shot.
#![forbid(unsafe_code)]
use std::process::ExitCode;

mod cli;
mod logger;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = cli::run().await {
        eprintln!("s3bytes: {err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
