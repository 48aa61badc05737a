//! Browser screen rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    },
    Frame,
};

use crate::catalog::Listing;
use crate::tui::state::{BrowserState, RowId};
use crate::tui::theme::Theme;

/// Terminal lines one row occupies in the list.
const BRAND_ROW_LINES: usize = 1;
const LISTING_ROW_LINES: usize = 4;

pub fn render(frame: &mut Frame, state: &BrowserState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Catalog
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state, theme);
    render_search_bar(frame, chunks[1], state, theme);
    if state.view.is_empty() {
        render_no_results(frame, chunks[2], theme);
    } else {
        render_catalog(frame, chunks[2], state, theme);
    }
    render_help(frame, chunks[3], theme);
}

fn render_header(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let header = Line::from(vec![
        Span::styled(" Showroom", theme.header),
        Span::styled(
            format!(
                "  {} brands • {} listings",
                state.catalog.brands.len(),
                state.catalog.listing_count()
            ),
            theme.muted,
        ),
    ]);

    frame.render_widget(Paragraph::new(header), area);
}

fn render_search_bar(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let mut spans = vec![
        Span::raw("Search: "),
        Span::raw(state.query().to_string()),
        Span::styled("█", theme.cursor),
    ];
    if !state.query().is_empty() {
        spans.push(Span::styled(
            format!("   {} matches", state.view.listing_count()),
            theme.muted,
        ));
    }

    let input = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(input, area);
}

fn render_no_results(frame: &mut Frame, area: Rect, theme: &Theme) {
    let notice = Paragraph::new(vec![
        Line::raw(""),
        Line::raw(""),
        Line::styled("No listings match your search.", theme.notice),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM));

    frame.render_widget(notice, area);
}

fn render_catalog(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let height = area.height.saturating_sub(1) as usize;
    let start = window_start(state, height);

    let mut items = Vec::new();
    let mut used = 0;
    for (index, row) in state.rows().iter().enumerate().skip(start) {
        let lines = row_lines(*row);
        if used + lines > height && used > 0 {
            break;
        }
        used += lines;
        let focused = index == state.selected;

        match *row {
            RowId::Brand { section } => {
                if let Some(item) = brand_item(state, section, focused, theme) {
                    items.push(item);
                }
            }
            RowId::Listing { section, row } => {
                if let Some(listing) = state.listing(section, row) {
                    items.push(listing_item(listing, focused, theme));
                }
            }
        }
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM));
    frame.render_widget(list, area);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"));
    let mut scrollbar_state = ScrollbarState::new(state.rows().len()).position(state.selected);
    frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
}

/// First row to draw so the selected row still fits on screen.
fn window_start(state: &BrowserState, height: usize) -> usize {
    let rows = state.rows();
    if rows.is_empty() {
        return 0;
    }
    let selected = state.selected.min(rows.len() - 1);

    let mut start = selected;
    let mut used = 0;
    for index in (0..=selected).rev() {
        used += row_lines(rows[index]);
        if used > height {
            break;
        }
        start = index;
    }
    start
}

fn row_lines(row: RowId) -> usize {
    match row {
        RowId::Brand { .. } => BRAND_ROW_LINES,
        RowId::Listing { .. } => LISTING_ROW_LINES,
    }
}

fn brand_item<'a>(
    state: &'a BrowserState,
    section: usize,
    focused: bool,
    theme: &Theme,
) -> Option<ListItem<'a>> {
    let brand = state.section_brand(section)?;
    let count = state
        .view
        .sections
        .get(section)
        .map(|s| s.listings.len())
        .unwrap_or(0);
    let expand_icon = if state.is_expanded(section) { "▼" } else { "▶" };

    let line = Line::from(vec![
        Span::styled(format!("{} {} ({}) ", expand_icon, brand.name, count), theme.brand),
        Span::styled(format!("  {}", brand.logo), theme.muted),
    ]);

    let mut item = ListItem::new(line);
    if focused {
        item = item.style(theme.selected);
    }
    Some(item)
}

fn listing_item<'a>(listing: &'a Listing, focused: bool, theme: &Theme) -> ListItem<'a> {
    let availability = if listing.available {
        Span::styled("available", theme.available)
    } else {
        Span::styled("unavailable", theme.unavailable)
    };

    let title = Line::from(vec![
        Span::styled(format!("  {}", listing.full_name), theme.listing_title),
        Span::raw("  "),
        availability,
    ]);

    let rate = Line::from(vec![
        Span::styled(format!("    from €{}/day", listing.rate), theme.rate),
        Span::styled(format!("  {}", listing.path), theme.muted),
    ]);

    let lines = vec![title, slider_line(listing, theme), rate, Line::raw("")];

    let mut item = ListItem::new(lines);
    if focused {
        item = item.style(theme.selected);
    }
    item
}

/// One line of slider markers, the active image highlighted.
fn slider_line(listing: &Listing, theme: &Theme) -> Line<'static> {
    if !listing.has_images() {
        return Line::from(Span::styled("    no image available", theme.muted));
    }

    let mut spans = vec![Span::styled("    ◂ ", theme.slider_arrow)];
    for index in 0..listing.images().len() {
        if index == listing.slide() {
            spans.push(Span::styled("●", theme.slider_active));
        } else {
            spans.push(Span::styled("○", theme.slider_inactive));
        }
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("▸", theme.slider_arrow));
    spans.push(Span::styled(
        format!(
            "  {} ({}/{})",
            listing.current_image().unwrap_or(""),
            listing.slide() + 1,
            listing.images().len()
        ),
        theme.muted,
    ));

    Line::from(spans)
}

fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let help = Line::from(vec![
        Span::raw(" type to search  "),
        Span::styled("•", theme.help_text),
        Span::raw("  "),
        Span::styled("↑↓", theme.help_key),
        Span::raw(" Move  "),
        Span::styled("•", theme.help_text),
        Span::raw("  "),
        Span::styled("Enter", theme.help_key),
        Span::raw(" Expand  "),
        Span::styled("•", theme.help_text),
        Span::raw("  "),
        Span::styled("←→", theme.help_key),
        Span::raw(" Slide  "),
        Span::styled("•", theme.help_text),
        Span::raw("  "),
        Span::styled("Esc", theme.help_key),
        Span::raw(" Clear/Quit"),
    ]);

    frame.render_widget(Paragraph::new(help), area);
}
