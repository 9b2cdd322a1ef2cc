//! Subcommands.

use aftership_sdk::{
    AfterShip, ClientError, LastCheckpointQuery, LookupParams, ReqwestTransport, TrackingLocator,
};
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the most recent checkpoint of a tracking
    LastCheckpoint(LastCheckpointArgs),
}

/// Address a tracking by `--slug` + `--tracking-number` or by `--tracking-id`.
#[derive(clap::Args, Debug)]
pub struct LastCheckpointArgs {
    /// Courier slug (e.g. ups, fedex)
    #[arg(long)]
    pub slug: Option<String>,

    /// Courier tracking number
    #[arg(long)]
    pub tracking_number: Option<String>,

    /// AfterShip tracking id
    #[arg(long)]
    pub tracking_id: Option<String>,

    /// Checkpoint fields to return (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Language of translated checkpoint messages
    #[arg(long)]
    pub lang: Option<String>,
}

impl LastCheckpointArgs {
    /// Split into the SDK's lookup params and query.
    pub fn into_request(self) -> (LookupParams, LastCheckpointQuery) {
        let params = LookupParams {
            slug: self.slug,
            tracking_number: self.tracking_number,
            tracking_id: self.tracking_id,
        };
        let query = LastCheckpointQuery {
            fields: self.fields,
            lang: self.lang,
        };
        (params, query)
    }
}

impl Command {
    pub async fn run(self, client: &AfterShip<ReqwestTransport>) -> anyhow::Result<()> {
        match self {
            Command::LastCheckpoint(args) => last_checkpoint(client, args).await,
        }
    }
}

async fn last_checkpoint(
    client: &AfterShip<ReqwestTransport>,
    args: LastCheckpointArgs,
) -> anyhow::Result<()> {
    let (params, query) = args.into_request();
    let locator = TrackingLocator::try_from(&params).map_err(ClientError::from)?;

    let resp = client
        .last_checkpoint
        .fetch_last_checkpoint(&locator, &query)
        .await
        .map_err(|e| {
            if let Some(api) = e.as_api() {
                tracing::debug!(
                    code = api.code,
                    status = api.status,
                    remaining = ?api.rate_limit.remaining,
                    "request rejected by api"
                );
            }
            e
        })?;

    tracing::info!(
        limit = ?resp.rate_limit.limit,
        remaining = ?resp.rate_limit.remaining,
        reset = ?resp.rate_limit.reset,
        "rate limit"
    );

    println!("{}", serde_json::to_string_pretty(&resp.data)?);
    Ok(())
}
