use std::process::ExitCode;

use cardsift::config::Config;
use cardsift::domain::card::card_text;
use cardsift::domain::search::{aggregate, bucket_by_category};
use dotenv::dotenv;
use serde_json::json;

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(why) => {
            log::error!("Bad configuration - {why}");
            return ExitCode::FAILURE;
        }
    };

    let printings = match config.load_printings() {
        Ok(printings) => printings,
        Err(why) => {
            log::error!("Failed to load printings - {why}");
            return ExitCode::FAILURE;
        }
    };

    let groups = aggregate(printings, &config.filters, config.sort);
    let buckets = bucket_by_category(&groups, config.sort, config.bucket_limit);
    let selected = groups.first().map(|group| card_text(group.representative()));

    if groups.is_empty() {
        log::warn!("No printings matched the current filters");
    }

    let view = json!({
        "sort": config.sort,
        "groups": groups,
        "buckets": buckets,
        "selected": selected,
    });

    match serde_json::to_string_pretty(&view) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(why) => {
            log::error!("Error rendering view - {why:?}");
            ExitCode::FAILURE
        }
    }
}
