use clap::Parser;
use log::LevelFilter;
use nlarchive::application::{
    show_article, statistics, BrowseService, ConfigService, SearchService,
};
use nlarchive::cli::{
    format_article, format_keyword_list, format_stats, format_theme_list, format_view, Cli,
    Commands, Markers,
};
use nlarchive::domain::keywords::top_keywords;
use nlarchive::domain::{Record, Theme, ThemeFilter, ViewOptions};
use nlarchive::error::Result;
use nlarchive::infrastructure::{ArchiveSession, Config, CsvSource};
use std::path::Path;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // RUST_LOG, when set, takes precedence over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Browse {
        theme: None,
        full: false,
    });

    // Commands that never touch the data file
    match &command {
        Commands::Config { key, value, list } => {
            return manage_config(&cli.config, key.as_deref(), value.as_deref(), *list)
        }
        Commands::Themes => {
            print!("{}", format_theme_list());
            return Ok(());
        }
        Commands::Keywords { limit, pick: None } => {
            let config = Config::load(&cli.config)?;
            let keywords = top_keywords(limit.unwrap_or(config.keyword_limit));
            print!("{}", format_keyword_list(keywords));
            return Ok(());
        }
        _ => {}
    }

    let config = Config::load(&cli.config)?;
    let data_path = cli.data.unwrap_or_else(|| config.resolve_data_path());
    let mut session = ArchiveSession::new(CsvSource::new(data_path));
    let records = session.records();

    let outcome = render(command, &records, &config);

    // A missing data file is reported, but only after the (empty) view
    if let Some(load_error) = session.take_error() {
        if let Ok(text) = &outcome {
            print!("{}", text);
        }
        return Err(load_error);
    }

    print!("{}", outcome?);
    Ok(())
}

fn render(command: Commands, records: &[Record], config: &Config) -> Result<String> {
    let options = ViewOptions {
        preview_chars: config.preview_chars,
    };
    let markers = Markers::from(config);

    match command {
        Commands::Browse { theme, full } => {
            let filter = match theme {
                Some(t) => ThemeFilter::Only(Theme::from_str(&t)?),
                None => ThemeFilter::All,
            };
            let view = BrowseService::new(records, options).execute(filter);
            Ok(format_view(&view, markers, full))
        }
        Commands::Search { query, full } => {
            let view = SearchService::new(records, options).execute(&query);
            Ok(format_view(&view, markers, full))
        }
        Commands::Keywords {
            pick: Some(number), ..
        } => {
            let (_, view) = SearchService::new(records, options).execute_keyword(number)?;
            Ok(format_view(&view, markers, false))
        }
        Commands::Show { month, day } => {
            let detail = show_article(records, month, day)?;
            Ok(format_article(&detail))
        }
        Commands::Stats { query } => {
            let report = statistics(records, config.archive_year, query.as_deref());
            Ok(format_stats(&report))
        }
        Commands::Keywords { pick: None, .. } | Commands::Themes | Commands::Config { .. } => {
            Ok(String::new())
        }
    }
}

fn manage_config(
    path: &Path,
    key: Option<&str>,
    value: Option<&str>,
    list: bool,
) -> Result<()> {
    let service = ConfigService::new(path.to_path_buf());

    if list {
        let config = service.list()?;
        for key in Config::KEYS {
            println!("{} = {}", key, config.get(key)?);
        }
        Ok(())
    } else if let Some(k) = key {
        if let Some(v) = value {
            service.set(k, v)?;
            println!("Set {} = {}", k, v);
        } else {
            println!("{}", service.get(k)?);
        }
        Ok(())
    } else {
        println!("Usage: nlarchive config [--list | <key> [<value>]]");
        println!("Valid keys: {}", Config::KEYS.join(", "));
        Ok(())
    }
}
