use chrono::{DateTime, Local};
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;
use stacktable_core::{AppViewModel, SortDirection};

use super::constants::{COLUMN_HEADERS, KEY_HINTS};
use super::layout;

pub fn draw(
    frame: &mut Frame,
    view: &AppViewModel,
    filter_active: bool,
    last_refresh: Option<DateTime<Local>>,
) {
    let (table_area, filter_area, status_area) = layout::split(frame.area());

    let header = Row::new(COLUMN_HEADERS.iter().map(|heading| Cell::from(*heading)))
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = view.rows.iter().map(|row| {
        Row::new(vec![
            Cell::from(row.title.clone()),
            Cell::from(row.view_count.clone()),
            Cell::from(row.score.clone()),
            Cell::from(row.link.clone()),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Fill(2),
            Constraint::Length(9),
            Constraint::Length(7),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(table_title(view)),
    );
    frame.render_widget(table, table_area);

    frame.render_widget(Paragraph::new(filter_text(view, filter_active)), filter_area);
    frame.render_widget(Paragraph::new(status_text(view, last_refresh)), status_area);
}

fn table_title(view: &AppViewModel) -> String {
    format!(
        " Questions — sort: {} {} ",
        view.sort_field.as_str(),
        direction_label(view.sort_direction)
    )
}

fn filter_text(view: &AppViewModel, filter_active: bool) -> String {
    if filter_active {
        format!("filter: {}_", view.filter)
    } else if view.filter.is_empty() {
        KEY_HINTS.to_string()
    } else {
        format!("filter: {}   ({})", view.filter, KEY_HINTS)
    }
}

fn status_text(view: &AppViewModel, last_refresh: Option<DateTime<Local>>) -> String {
    let state_label = if view.is_loading {
        "loading"
    } else if view.is_rate_limit_reached {
        "fetch failed / rate limited"
    } else {
        "ready"
    };
    let refreshed = last_refresh
        .map(|at| format!(" | updated {}", at.format("%H:%M:%S")))
        .unwrap_or_default();
    format!(
        "{} | {} results | page {}/{}{}",
        state_label,
        view.results_length,
        view.page_index + 1,
        view.page_count.max(1),
        refreshed
    )
}

fn direction_label(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::None => "(default order)",
        SortDirection::Asc => "asc",
        SortDirection::Desc => "desc",
    }
}
