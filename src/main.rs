use clap::Parser;
use weddingbook::utils::{logger, validation::Validate};
use weddingbook::{
    AddressBook, AppConfig, BookError, CliCommand, CliConfig, Command, JsonAddressBookStorage,
    LocalStorage, TagCommand,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let mut config = match AppConfig::from_file_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config, e);
            eprintln!("💡 Make sure the file is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };
    cli.apply_overrides(&mut config);

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::info!("Starting weddingbook");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let storage = JsonAddressBookStorage::new(LocalStorage::new("."), config.address_book_path());

    match run(&cli.command, &storage).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ {} failed: {}", command_name(&cli.command), e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}

fn command_name(command: &CliCommand) -> &'static str {
    match command {
        CliCommand::Check => "check",
        CliCommand::Persons => "persons",
        CliCommand::Weddings => "weddings",
        CliCommand::Tag => TagCommand::COMMAND_WORD,
        CliCommand::Init => "init",
    }
}

async fn load_or_empty(
    storage: &JsonAddressBookStorage<LocalStorage>,
) -> Result<AddressBook, BookError> {
    Ok(storage.read_address_book().await?.unwrap_or_else(|| {
        tracing::info!("Starting with an empty address book");
        AddressBook::new()
    }))
}

async fn run(
    command: &CliCommand,
    storage: &JsonAddressBookStorage<LocalStorage>,
) -> Result<String, BookError> {
    match command {
        CliCommand::Check => {
            let book = load_or_empty(storage).await?;
            Ok(format!(
                "✅ {} is valid: {} persons, {} weddings",
                storage.file_path(),
                book.persons().len(),
                book.weddings().len()
            ))
        }
        CliCommand::Persons => {
            let book = load_or_empty(storage).await?;
            Ok(book
                .persons()
                .iter()
                .enumerate()
                .map(|(i, p)| format!("{}. {}", i + 1, p))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        CliCommand::Weddings => {
            let book = load_or_empty(storage).await?;
            let mut lines = Vec::new();
            for (i, wedding) in book.weddings().iter().enumerate() {
                lines.push(format!("{}. {}", i + 1, wedding));
                for participant in wedding.participants() {
                    lines.push(format!("   - {}", participant.name()));
                }
            }
            Ok(lines.join("\n"))
        }
        CliCommand::Tag => {
            let mut book = load_or_empty(storage).await?;
            let result = TagCommand.execute(&mut book)?;
            storage.save_address_book(&book).await?;
            Ok(result.feedback_to_user)
        }
        CliCommand::Init => {
            if storage.read_address_book().await?.is_some() {
                return Ok(format!("{} already exists", storage.file_path()));
            }
            storage.save_address_book(&AddressBook::new()).await?;
            Ok(format!("📁 Created {}", storage.file_path()))
        }
    }
}
