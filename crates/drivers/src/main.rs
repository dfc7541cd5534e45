mod config;
mod host;
mod logging;

use std::process::ExitCode;

use bookrack_adapters::{present_book_detail, present_book_row, present_route};
use bookrack_application::{LoadOptions, PageLifecycle};
use bookrack_domain::{EntryId, PAGE_DETAIL, PAGE_SEARCH};
use config::AppConfig;
use host::PageHost;

fn main() -> ExitCode {
    logging::init_logging();
    let args: Vec<String> = std::env::args().collect();
    let host = PageHost::new(AppConfig::from_env());

    let command = parse_command(&args);
    match run_command(command, &host) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

#[derive(Debug, Clone)]
enum Command {
    List,
    Search { query: String },
    Open { entry_id: i64 },
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    if args.len() <= 1 {
        return Ok(Command::List);
    }

    match args[1].as_str() {
        "list" => Ok(Command::List),
        "search" => {
            if args.len() < 3 {
                return Err(CommandError::Usage("missing search query".to_string()));
            }
            Ok(Command::Search {
                query: args[2..].join(" "),
            })
        }
        "open" => {
            if args.len() < 3 {
                return Err(CommandError::Usage("missing entry id".to_string()));
            }
            let entry_id = args[2]
                .parse::<i64>()
                .map_err(|_| CommandError::Usage(format!("invalid entry id: {}", args[2])))?;
            Ok(Command::Open { entry_id })
        }
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn run_command(
    command: Result<Command, CommandError>,
    host: &PageHost,
) -> Result<(), CommandError> {
    match command? {
        Command::List => {
            let page = host
                .open_list_page()
                .map_err(|error| CommandError::Runtime(format!("list failed: {error}")))?;
            if page.view_state().books.is_empty() {
                println!("no books in catalog");
                return Ok(());
            }
            for book in &page.view_state().books {
                println!("{}", present_book_row(book));
            }
            Ok(())
        }
        Command::Search { query } => {
            let mut list = host
                .open_list_page()
                .map_err(|error| CommandError::Runtime(format!("search failed: {error}")))?;
            list.to_search();

            let route = host
                .follow_navigation()
                .map_err(|error| CommandError::Runtime(format!("search failed: {error}")))?
                .ok_or_else(|| {
                    CommandError::Runtime("no navigation request was issued".to_string())
                })?;
            if route.path() != PAGE_SEARCH {
                return Err(CommandError::Runtime(format!(
                    "unexpected route: {}",
                    route.path()
                )));
            }
            println!("{}", present_route(&route));
            list.on_hide();

            let mut page = host
                .open_search_page()
                .map_err(|error| CommandError::Runtime(format!("search failed: {error}")))?;
            page.search(&query)
                .map_err(|error| CommandError::Runtime(format!("search failed: {error}")))?;

            if page.view_state().matches.is_empty() {
                println!("no matches for '{query}'");
            } else {
                for book in &page.view_state().matches {
                    println!("{}", present_book_row(book));
                }
            }
            list.on_unload();
            Ok(())
        }
        Command::Open { entry_id } => {
            let entry_id = EntryId::new(entry_id)
                .map_err(|error| CommandError::Usage(format!("invalid entry id: {error}")))?;
            let mut list = host
                .open_list_page()
                .map_err(|error| CommandError::Runtime(format!("open failed: {error}")))?;

            host.tap_entry(&list, entry_id)
                .map_err(|error| CommandError::Runtime(format!("open failed: {error}")))?;
            let route = host
                .follow_navigation()
                .map_err(|error| CommandError::Runtime(format!("open failed: {error}")))?
                .ok_or_else(|| {
                    CommandError::Runtime("no navigation request was issued".to_string())
                })?;
            if route.path() != PAGE_DETAIL {
                return Err(CommandError::Runtime(format!(
                    "unexpected route: {}",
                    route.path()
                )));
            }
            println!("{}", present_route(&route));
            list.on_hide();

            let detail = host
                .open_detail_page(&LoadOptions::from_query(route.query()))
                .map_err(|error| CommandError::Runtime(format!("open failed: {error}")))?;
            if let Some(book) = &detail.view_state().book {
                println!("{}", present_book_detail(book));
            }
            list.on_unload();
            Ok(())
        }
    }
}

fn print_usage() {
    println!("usage:");
    println!("  bookrack list");
    println!("  bookrack search <query>");
    println!("  bookrack open <entry_id>");
}
