use clap::Parser;
use randomuser::config::{Command, OutputFormat};
use randomuser::domain::ports::UserStore;
use randomuser::presentation::{export, render};
use randomuser::utils::error::ErrorSeverity;
use randomuser::utils::{logger, validation::Validate};
use randomuser::{
    AppConfig, CliArgs, MemoryUserStore, NavigationEvent, RandomUserClient, RandomUserError,
    SqliteUserStore, UserRepository, UserViewModel,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::debug!("CLI args: {:?}", args);

    // 載入並驗證配置
    let config = match args.resolve_config().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    if let Command::Options = args.command {
        println!("{}", render::render_options());
        return Ok(());
    }

    let client = match RandomUserClient::new(&config.api.base_url, config.timeout()) {
        Ok(client) => client,
        Err(e) => fail(&e),
    };

    let result = if config.storage.enabled {
        match SqliteUserStore::open(&config.storage.db_path) {
            Ok(store) => run(&args.command, &config, client, store).await,
            Err(e) => Err(e),
        }
    } else {
        tracing::info!("Cache disabled, users are kept for this run only");
        run(&args.command, &config, client, MemoryUserStore::new()).await
    };

    if let Err(e) = result {
        fail(&e);
    }

    Ok(())
}

async fn run<S: UserStore>(
    command: &Command,
    config: &AppConfig,
    client: RandomUserClient,
    store: S,
) -> randomuser::Result<()> {
    let view_model = UserViewModel::new(UserRepository::new(client, store)).await?;

    match command {
        Command::Generate {
            gender,
            nat,
            detail,
        } => {
            let gender = match gender {
                Some(gender) => *gender,
                None => config.default_gender()?,
            };
            let nat = match nat {
                Some(nat) => *nat,
                None => config.default_nationality()?,
            };
            let mut navigation = view_model.take_navigation_events();

            tracing::info!("Generating a {} user from {}", gender, nat.label());
            let user = view_model.load_user(gender, nat).await?;

            let navigate_to_list = navigation
                .as_mut()
                .is_some_and(|rx| matches!(rx.try_recv(), Ok(NavigationEvent::NavigateToUserList)));

            if *detail {
                println!("{}", render::render_user_detail(&user));
            } else if navigate_to_list {
                println!("{}", render::render_state(&view_model.state()));
            }
        }
        Command::List { format } => match format {
            OutputFormat::Table => println!("{}", render::render_state(&view_model.state())),
            OutputFormat::Json => {
                let users = view_model.repository().users_from_db().await?;
                println!("{}", export::users_to_json(&users)?);
            }
            OutputFormat::Csv => {
                let users = view_model.repository().users_from_db().await?;
                print!("{}", export::users_to_csv(&users)?);
            }
        },
        Command::Show { uuid } => match view_model.repository().find_user(uuid).await? {
            Some(user) => println!("{}", render::render_user_detail(&user)),
            None => return Err(RandomUserError::UserNotFound { uuid: uuid.clone() }),
        },
        Command::Clear => {
            let removed = view_model.repository().clear_users().await?;
            println!("Removed {} cached user(s)", removed);
        }
        Command::Options => println!("{}", render::render_options()),
    }

    Ok(())
}

fn fail(e: &RandomUserError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
