use clap::Parser;
use practice_kit::config::Command;
use practice_kit::utils::{logger, validation::Validate};
use practice_kit::{
    calculate_discount, CliConfig, CounterOptions, CounterStore, KitError, ReqwestClient,
    TomlConfig, UserPostsFetcher,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入設定檔（可選）
    let file_config = match &cli.config {
        Some(path) => TomlConfig::from_file(path),
        None => Ok(TomlConfig::default()),
    };
    let file_config = match file_config.and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    if cli.json_logs || file_config.json_logs() {
        logger::init_json_logger(cli.verbose, file_config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, file_config.log_level());
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli.command, &file_config).await {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run(command: Command, file_config: &TomlConfig) -> Result<(), KitError> {
    match command {
        Command::Discount { price, percent } => {
            let discounted = calculate_discount(price, percent)?;
            tracing::info!("{} with {}% off is {:.2}", price, percent, discounted);
            println!("{:.2}", discounted);
        }
        Command::Posts { user_id, base_url } => {
            let base_url = base_url.unwrap_or_else(|| file_config.posts.base_url.clone());
            let fetcher = UserPostsFetcher::with_base_url(ReqwestClient::new(), base_url);

            tracing::info!("Fetching posts for user {} from {}", user_id, fetcher.base_url());
            let summary = fetcher.fetch(user_id).await?;
            tracing::info!("✅ {}", summary.message);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Counter {
            initial,
            min,
            max,
            actions,
        } => {
            // 命令列參數優先於設定檔
            let defaults = file_config.counter_options();
            let options = CounterOptions {
                initial_value: initial.or(defaults.initial_value),
                min_value: min.or(defaults.min_value),
                max_value: max.or(defaults.max_value),
            };
            let store = CounterStore::with_options(options)?;

            print_view("start", &store);
            for step in actions {
                store.send(step.into());
                print_view(&format!("{:?}", step).to_lowercase(), &store);
            }
        }
    }

    Ok(())
}

fn print_view(label: &str, store: &CounterStore) {
    let view = store.view();
    let mut line = format!("{:>5}: {}", label, view.display);
    if view.decrement_disabled {
        line.push_str("  [dec disabled]");
    }
    if view.increment_disabled {
        line.push_str("  [inc disabled]");
    }
    for notice in [view.min_notice, view.max_notice].into_iter().flatten() {
        line.push_str("  ");
        line.push_str(notice);
    }
    println!("{}", line);
}
