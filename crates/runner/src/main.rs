use auth::ApiCredentials;
use falconx_rest::{FalconxClient, GetQuoteRequest};
use model::QuoteSide;
use rust_decimal::Decimal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    common::init_logging();

    let mut args = std::env::args().skip(1);
    let base = args.next().unwrap_or_else(|| "BTC".to_string());
    let quote = args.next().unwrap_or_else(|| "USD".to_string());
    let quantity = args
        .next()
        .and_then(|q| q.parse::<Decimal>().ok())
        .unwrap_or(Decimal::ONE);

    let credentials = match ApiCredentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!(error = %e, "Failed to load credentials");
            std::process::exit(1);
        }
    };

    let client = match FalconxClient::new(credentials) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to build client");
            std::process::exit(1);
        }
    };

    info!(base = %base, quote = %quote, quantity = %quantity, "Requesting two-way quote");

    match client
        .get_quote(&GetQuoteRequest::new(
            base,
            quote,
            quantity,
            QuoteSide::TwoWay,
        ))
        .await
    {
        Ok(q) => {
            println!(
                "{}/{} | buy: {} | sell: {} | expires: {} | id: {}",
                q.token_pair.base_token,
                q.token_pair.quote_token,
                q.buy_price.map_or("-".to_string(), |p| p.to_string()),
                q.sell_price.map_or("-".to_string(), |p| p.to_string()),
                q.t_expiry,
                q.fx_quote_id
            );
        }
        Err(e) => {
            error!(error = %e, "Quote request failed");
            std::process::exit(1);
        }
    }
}
