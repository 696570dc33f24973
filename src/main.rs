use anyhow::Result;

use review_dashboard::api::ApiError;
use review_dashboard::cli::Command;
use review_dashboard::{
    handle_export, handle_login, handle_logout, handle_respond, handle_reviews, handle_stats,
    handle_update_type, handle_watch, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        if matches!(e.downcast_ref::<ApiError>(), Some(ApiError::Unauthorized)) {
            eprintln!("Сессия истекла. Выполните вход: review-dashboard login <токен>");
        } else {
            eprintln!("Error: {e}");
        }
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Stats => handle_stats(),
        Command::Reviews(args) => handle_reviews(args),
        Command::Export { out } => handle_export(out),
        Command::Respond { id, text } => handle_respond(id, text),
        Command::UpdateType { id, kind } => handle_update_type(id, (*kind).into()),
        Command::Watch { interval } => handle_watch(*interval),
        Command::Login { token } => handle_login(token),
        Command::Logout => handle_logout(),
    }
}
