mod config;
mod differ;
mod extractor;
mod matcher;
mod model;
mod normalizer;
mod notifier;
mod scraper;
mod selector;
mod storage;
mod utils;

use chrono::Timelike;
use config::{AppConfig, load_config};
use model::{AppError, PersistedState, Snapshot, StoredProduct};
use notifier::format;
use notifier::telegram::TelegramNotifier;
use scraper::fetcher::SkladClient;
use scraper::paginator;
use scraper::traits::CatalogApi;
use std::time::Duration;
use storage::state::StateStore;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration from file
    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let store = StateStore::new(&config.state_file);
    let mut state = match store.load() {
        Ok(s) => s,
        Err(e) => {
            error!("State load error: {:?}", e);
            return;
        }
    };

    if let Err(e) = run(&config, &store, &mut state).await {
        error!("Run aborted: {:?}", e);
        // хотя бы отметку heartbeat надо сохранить, иначе он уйдёт повторно
        if let Err(e) = store.save(&state) {
            error!("State save failed: {:?}", e);
        }
    }
}

/// Один полный цикл мониторинга; запускается внешним планировщиком.
/// На каждом успешном пути выхода состояние сохраняется ровно один раз.
async fn run(
    config: &AppConfig,
    store: &StateStore,
    state: &mut PersistedState,
) -> Result<(), AppError> {
    let now = utils::moscow_now();
    let telegram = TelegramNotifier::new(config)?;

    if let Some(today) =
        utils::heartbeat_date(&now, config.work_start_hour, state.last_heartbeat_date.as_deref())
    {
        telegram
            .send_text(&format!(
                "✅ Бот работает. Мониторинг: {:02}:00–{:02}:00 МСК.",
                config.work_start_hour, config.work_end_hour
            ))
            .await?;
        state.last_heartbeat_date = Some(today);
    }

    if !utils::is_work_time(&now, config.work_start_hour, config.work_end_hour) {
        info!("Outside the work window (hour {}), skipping run", now.hour());
        store.save(state)?;
        return Ok(());
    }

    if config.shop_cookie.is_empty() {
        warn!("No shop cookie configured, product pages will likely be empty");
        telegram
            .send_text("⚠️ Не задан cookie каталога. Скорее всего товары будут 0.")
            .await?;
    }

    let api = SkladClient::new(config)?;

    info!("Fetching categories...");
    let raw_categories = api.fetch_categories().await?;
    let categories = selector::select_categories(&raw_categories, config);
    info!(
        "Matched {} of {} categories",
        categories.len(),
        raw_categories.len()
    );

    if categories.is_empty() {
        telegram
            .send_text(&format!(
                "⚠️ Не нашёл категорий по фильтру '{}' + '{}'.",
                config.keyword_sale, config.keyword_tobacco
            ))
            .await?;
        store.save(state)?;
        return Ok(());
    }

    let page_delay = Duration::from_millis(config.page_delay_ms);
    let mut current = Snapshot::new();
    let mut per_category: Vec<(String, Vec<StoredProduct>)> = Vec::new();
    let mut zero_debug_lines: Vec<String> = Vec::new();

    for category in &categories {
        info!("Fetching products for '{}'...", category.name);
        let (raw, digest) =
            paginator::fetch_all(&api, category, config.page_size, page_delay).await?;

        let mut items: Vec<StoredProduct> = Vec::new();
        for entry in &raw {
            if let Some(record) = normalizer::normalize_product(entry, &category.name) {
                current.insert(record.id.clone(), record.stored());
                items.push(record.stored());
            }
        }
        items.sort_by_key(|p| p.name.to_lowercase());
        info!(
            "Category '{}': {} raw entries, {} products",
            category.name,
            raw.len(),
            items.len()
        );

        // категория без единого товара — собираем слепок ответа для диагностики
        if items.is_empty() {
            zero_debug_lines.push(format!("ℹ️ DEBUG [{}]: {}", category.name, digest.summary()));
        }
        per_category.push((category.name.clone(), items));
    }

    // Первый запуск: полный список вместо дельты
    if !state.initialized {
        info!("First run, sending the full list");
        let report =
            format::render_full_list(&per_category, &config.keyword_sale, &config.keyword_tobacco);
        telegram.send_blocks(&report).await?;

        if !zero_debug_lines.is_empty() {
            let mut lines = vec!["(если в какой-то категории 0 — вот почему)".to_string()];
            lines.extend(zero_debug_lines);
            telegram
                .send_blocks(&format::chunk_lines(&lines, format::MAX_CHUNK_CHARS))
                .await?;
        }

        state.initialized = true;
        state.snapshot = current;
        store.save(state)?;
        return Ok(());
    }

    let changes = differ::diff(&state.snapshot, &current);
    state.snapshot = current;
    // сохраняем до отправки: упавшая доставка не должна дублировать алерты
    store.save(state)?;

    if changes.is_empty() {
        info!("No changes this run");
        return Ok(());
    }

    info!(
        "Changes: {} added, {} price updates",
        changes.added.len(),
        changes.changed.len()
    );
    telegram.send_blocks(&format::render_changes(&changes)).await?;
    Ok(())
}
