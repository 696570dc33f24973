pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod display;
pub mod domain;
pub mod export;
pub mod http;
pub mod listing;
pub mod rating;
pub mod services;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use crate::api::PlatformClient;
use crate::auth::{AuthEvent, AuthStore};
use crate::cli::{Cli, Command, ReviewListArgs};
use crate::config::AppConfig;
use crate::display::console::{render_category_ratings, render_review, render_snapshot, review_count};
use crate::domain::models::ReviewKind;
use crate::export::export_reviews_csv;
use crate::listing::{SortDirection, SortField};
use crate::rating::normalize_reviews;
use crate::services::{DashboardService, Poller, build_review_page};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_stats() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let mut service = DashboardService::new(platform_client(&config)?);

        let Some(state) = service.refresh().await? else {
            return Ok(());
        };

        print!("{}", render_snapshot(&state.snapshot, &state.trends));
        println!("\nРейтинги по критериям:");
        print!("{}", render_category_ratings(&state.category_ratings));
        Ok(())
    })
}

pub fn handle_reviews(args: &ReviewListArgs) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let client = platform_client(&config)?;

        let raw = client.manager_reviews().await?;
        let reviews = normalize_reviews(&raw);

        let page = build_review_page(
            &reviews,
            &args.to_filter(),
            SortField::from(args.sort),
            SortDirection::from(args.direction),
            args.page,
            args.page_size.unwrap_or(config.dashboard.page_size),
        );

        if page.items.is_empty() {
            println!("Нет отзывов по заданным фильтрам.");
            return Ok(());
        }

        println!(
            "Страница {}/{}, всего {}",
            page.page,
            page.total_pages,
            review_count(page.total_items)
        );
        for review in &page.items {
            print!("{}", render_review(review));
        }
        Ok(())
    })
}

pub fn handle_export(out: &Path) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let client = platform_client(&config)?;

        let raw = client.manager_reviews().await?;
        let mut reviews = normalize_reviews(&raw);
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let csv = export_reviews_csv(&reviews)?;
        std::fs::write(out, csv)
            .with_context(|| format!("Failed to write CSV to {}", out.display()))?;

        println!("Экспортировано {} в {}", review_count(reviews.len()), out.display());
        Ok(())
    })
}

pub fn handle_respond(review_id: &str, text: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let client = platform_client(&config)?;
        client.respond_to_review(review_id, text).await?;
        println!("Ответ на отзыв {review_id} опубликован.");
        Ok(())
    })
}

pub fn handle_update_type(review_id: &str, kind: ReviewKind) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let client = platform_client(&config)?;
        client.update_review_type(review_id, kind).await?;
        println!("Тип отзыва {review_id} изменён на \"{}\".", kind.as_str());
        Ok(())
    })
}

pub fn handle_watch(interval_secs: Option<u64>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let interval =
            Duration::from_secs(interval_secs.unwrap_or(config.dashboard.refresh_interval_secs));

        let auth = AuthStore::from_env();
        let mut auth_events = auth.subscribe();
        let client = Arc::new(PlatformClient::new(&config.api, auth)?);

        let service = DashboardService::new(client);
        let (poller, mut states) = Poller::spawn(service, interval);

        println!("Обновление каждые {} с, Ctrl+C для выхода.", interval.as_secs());

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => break,
                _ = auth_events.changed() => {
                    if *auth_events.borrow() == AuthEvent::SessionExpired {
                        println!("Сессия истекла, выполните вход заново.");
                        break;
                    }
                }
                state = states.recv() => {
                    let Some(state) = state else { break };
                    println!("--- {} ---", chrono::Local::now().format("%H:%M:%S"));
                    print!("{}", render_snapshot(&state.snapshot, &state.trends));
                }
            }
        }

        poller.shutdown().await;
        Ok(())
    })
}

pub fn handle_login(token: &str) -> Result<()> {
    AuthStore::from_env().store_token(token)?;
    println!("Токен сохранён.");
    Ok(())
}

pub fn handle_logout() -> Result<()> {
    AuthStore::from_env().clear()?;
    println!("Токен удалён.");
    Ok(())
}

fn platform_client(config: &AppConfig) -> Result<Arc<PlatformClient>> {
    let auth = AuthStore::from_env();
    Ok(Arc::new(PlatformClient::new(&config.api, auth)?))
}
