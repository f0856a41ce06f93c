#![recursion_limit = "256"]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use tracing::info;

use itslog_aws::{AwsBaseConfig, S3Provider, SnsProvider};
use itslog_core::S3Event;
use itslog_notifier::telemetry::{self, LogTarget};
use itslog_notifier::{Notifier, function_handler};
use itslog_provider::LogPublisher;

/// ITS-LOG survey notifier.
#[derive(Parser, Debug)]
#[command(
    name = "itslog-notifier",
    about = "Publishes survey uploads and their sysdiagnose links to SNS"
)]
struct Cli {
    /// Without a subcommand, serve events from the Lambda runtime.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Handle a single S3 event read from a JSON file, then exit.
    Invoke {
        /// Path to an S3 event notification document.
        #[arg(short, long)]
        event: PathBuf,

        /// Log the notification instead of publishing it.
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    let target = if cli.command.is_some() {
        LogTarget::Terminal
    } else {
        LogTarget::Lambda
    };
    telemetry::init(target);

    let aws = AwsBaseConfig::from_env();
    info!(region = %aws.region, "building AWS clients");
    let s3 = S3Provider::new(&aws).await;

    match cli.command {
        None => {
            let notifier = Notifier::new(s3.clone(), s3, SnsProvider::new(&aws).await);
            lambda_runtime::run(service_fn(|event: LambdaEvent<S3Event>| {
                function_handler(&notifier, event)
            }))
            .await
        }
        Some(Commands::Invoke { event, dry_run }) => {
            let contents = std::fs::read_to_string(&event)?;
            let s3_event: S3Event = serde_json::from_str(&contents)?;
            info!(path = %event.display(), dry_run, "invoking notifier once");

            if dry_run {
                Notifier::new(s3.clone(), s3, LogPublisher::new("dry-run"))
                    .handle(&s3_event)
                    .await?;
            } else {
                Notifier::new(s3.clone(), s3, SnsProvider::new(&aws).await)
                    .handle(&s3_event)
                    .await?;
            }
            Ok(())
        }
    }
}
