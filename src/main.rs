//! Baccarat Fair Verifier
//!
//! Reconstructs one hand from revealed seeds and prints a JSON report.
//! Inputs come from the environment (see `baccarat_fair::config`).

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use baccarat_fair::{
    game::card::format_cards,
    proof::commitment::verify_reveal,
    ShoeTranscript, VerificationResult, VerifierConfig, VERSION,
};

/// Report printed to stdout.
#[derive(Serialize)]
struct Report {
    result: VerificationResult,
    player_cards: String,
    banker_cards: String,
    outcome: String,
    commitment_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transcript: Option<ShoeTranscript>,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Baccarat Fair Verifier v{}", VERSION);

    let config = VerifierConfig::from_env().context("invalid configuration")?;
    let request = &config.request;

    let commitment_verified = match &config.commitment {
        Some(commitment) => match verify_reveal(commitment, &request.server_seed) {
            Ok(()) => {
                info!("Server seed matches commitment {}", commitment.hash);
                Some(true)
            }
            Err(err) => {
                warn!("{}", err);
                Some(false)
            }
        },
        None => None,
    };

    info!("Verifying hand {}", request.nonce);
    let result = request
        .verify()
        .with_context(|| format!("verification of hand {} failed", request.nonce))?;

    info!("Shuffle seed: {}", result.shuffle_seed);
    info!("Player cards: {}", format_cards(&result.hand.player));
    info!("Banker cards: {}", format_cards(&result.hand.banker));
    info!("Result: {}", result.hand.outcome);

    let transcript = if config.transcript {
        Some(ShoeTranscript::from_shuffle_seed(result.shuffle_seed, None))
    } else {
        None
    };

    let report = Report {
        player_cards: format_cards(&result.hand.player),
        banker_cards: format_cards(&result.hand.banker),
        outcome: result.hand.outcome.to_string(),
        result,
        commitment_verified,
        transcript,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);

    if commitment_verified == Some(false) {
        anyhow::bail!("server seed does not match the published commitment");
    }
    Ok(())
}
