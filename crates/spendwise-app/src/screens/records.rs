//! Records screen - tables, filters, create/edit/delete
//!
//! Handlers:
//! - show_records: Render the income and expense sections
//! - add_record: Create a record, then re-fetch
//! - edit_record: Update a record, prefilled from the snapshot
//! - delete_record: Delete a record after confirmation
//! - show_categories: Print the category suggestions

use spendwise_core::{
    category_suggestions, filter_records, FilterState, Record, RecordDraft, RecordStore,
    RecordType,
};
use spendwise_utils::{format_amount, truncate};

use crate::{prompt, render_unauthenticated, App, AppError, AppResult};

const FALLBACK_FETCH: &str = "Помилка отримання записів.";
const FALLBACK_SAVE: &str = "Помилка при збереженні запису.";
const FALLBACK_DELETE: &str = "Помилка видалення запису.";
const MSG_SAVE_OK: &str = "Запис успішно збережено!";
const MSG_CONFIRM_DELETE: &str = "Ви впевнені, що хочете видалити цей запис?";

/// Optional field overrides for an edit; unset fields keep the
/// record's current values
#[derive(Debug, Clone, Default)]
pub struct DraftPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub amount: Option<String>,
    pub description: Option<String>,
    pub date_time: Option<String>,
}

impl DraftPatch {
    fn apply(self, mut draft: RecordDraft) -> RecordDraft {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(category) = self.category {
            draft.category = category;
        }
        if let Some(amount) = self.amount {
            draft.amount = amount;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(date_time) = self.date_time {
            draft.date_time = date_time;
        }
        draft
    }
}

/// Render the records view: both sections, or one when `section` is
/// given. Without a session the greeting is shown instead.
pub async fn show_records(
    app: &mut App,
    section: Option<RecordType>,
    filter: FilterState,
) -> AppResult<()> {
    let session = match app.session() {
        Ok(Some(session)) => session,
        _ => {
            println!("{}", render_unauthenticated());
            return Ok(());
        }
    };

    let mut store = RecordStore::new(app.gateway.clone(), session.id);
    if let Err(error) = store.refresh().await {
        log::debug!("Record fetch failed: {}", error);
        app.notifications.error(error.user_message(FALLBACK_FETCH));
        return Err(AppError::CommandFailed);
    }

    println!("Вітаємо, {}!", session.username);

    // Each section owns an independent filter state
    let sections: &[RecordType] = match section {
        Some(record_type) => match record_type {
            RecordType::Income => &[RecordType::Income],
            RecordType::Expense => &[RecordType::Expense],
        },
        None => &[RecordType::Income, RecordType::Expense],
    };
    for record_type in sections {
        let section_filter = filter.clone();
        let records = filter_records(store.records(), *record_type, &section_filter);
        println!();
        println!("{}", section_title(*record_type));
        println!(
            "{}",
            render_table(&records, app.config.display.description_limit)
        );
    }
    Ok(())
}

/// Create a record and refresh the snapshot
pub async fn add_record(
    app: &mut App,
    record_type: RecordType,
    draft: RecordDraft,
) -> AppResult<()> {
    let session = app.require_session()?;
    let mut store = RecordStore::new(app.gateway.clone(), session.id);

    match store.create(record_type, &draft).await {
        Ok(_) => {
            app.notifications.success(MSG_SAVE_OK);
            Ok(())
        }
        Err(error) => {
            app.notifications.error(error.user_message(FALLBACK_SAVE));
            Err(AppError::CommandFailed)
        }
    }
}

/// Update a record; unspecified fields keep their current values
pub async fn edit_record(app: &mut App, id: i64, patch: DraftPatch) -> AppResult<()> {
    let session = app.require_session()?;
    let mut store = RecordStore::new(app.gateway.clone(), session.id);

    if let Err(error) = store.refresh().await {
        app.notifications.error(error.user_message(FALLBACK_FETCH));
        return Err(AppError::CommandFailed);
    }
    let record_type = match store.find(id) {
        Some(record) => record.record_type,
        None => {
            app.notifications.error(FALLBACK_SAVE);
            return Err(AppError::CommandFailed);
        }
    };
    let draft = match store.draft_for(id) {
        Ok(base) => patch.apply(base),
        Err(error) => {
            app.notifications.error(error.user_message(FALLBACK_SAVE));
            return Err(AppError::CommandFailed);
        }
    };

    match store.update(id, record_type, &draft).await {
        Ok(_) => {
            app.notifications.success(MSG_SAVE_OK);
            Ok(())
        }
        Err(error) => {
            app.notifications.error(error.user_message(FALLBACK_SAVE));
            Err(AppError::CommandFailed)
        }
    }
}

/// Delete a record after confirmation; silent on success apart from
/// the refreshed view
pub async fn delete_record(app: &mut App, id: i64, assume_yes: bool) -> AppResult<()> {
    let session = app.require_session()?;
    let mut store = RecordStore::new(app.gateway.clone(), session.id);

    if let Err(error) = store.refresh().await {
        app.notifications.error(error.user_message(FALLBACK_FETCH));
        return Err(AppError::CommandFailed);
    }
    let record_type = match store.find(id) {
        Some(record) => record.record_type,
        None => {
            app.notifications.error(FALLBACK_DELETE);
            return Err(AppError::CommandFailed);
        }
    };

    if !prompt::confirm(MSG_CONFIRM_DELETE, assume_yes)? {
        return Ok(());
    }

    match store.delete(id, record_type).await {
        Ok(_) => Ok(()),
        Err(error) => {
            app.notifications.error(error.user_message(FALLBACK_DELETE));
            Err(AppError::CommandFailed)
        }
    }
}

/// Print the category suggestions per record type
pub fn show_categories(record_type: Option<RecordType>) {
    let sections: &[RecordType] = match record_type {
        Some(RecordType::Income) => &[RecordType::Income],
        Some(RecordType::Expense) => &[RecordType::Expense],
        None => &[RecordType::Income, RecordType::Expense],
    };
    for record_type in sections {
        println!("{}:", section_title(*record_type));
        for category in category_suggestions(*record_type) {
            println!("  {}", category);
        }
    }
}

fn section_title(record_type: RecordType) -> &'static str {
    match record_type {
        RecordType::Income => "Доходи",
        RecordType::Expense => "Витрати",
    }
}

const COLUMNS: [&str; 6] = ["ID", "Назва", "Категорія", "Сума", "Опис", "Дата"];

/// Render one record section as a text table
pub fn render_table(records: &[Record], description_limit: usize) -> String {
    if records.is_empty() {
        return "(немає записів)".to_string();
    }

    let rows: Vec<[String; 6]> = records
        .iter()
        .map(|record| {
            [
                record.id.to_string(),
                record.name.clone(),
                record.category.clone(),
                format_amount(record.amount),
                truncate(&record.description, description_limit),
                display_datetime(record),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut output = String::new();
    output.push_str(&render_row(&COLUMNS.map(String::from), &widths));
    output.push('\n');
    output.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        output.push('\n');
        output.push_str(&render_row(row, &widths));
    }
    output
}

fn render_row(cells: &[String; 6], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width - cell.chars().count();
            format!("{}{}", cell, " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

fn display_datetime(record: &Record) -> String {
    match record.datetime_naive() {
        Some(dt) => dt.format("%d.%m.%Y, %H:%M:%S").to_string(),
        None => record.date_time.clone(),
    }
}

// ==================== Tests ====================
