//! Panel rendering for the peers and transactions lists.
//!
//! Both panels are plain selectable lists. Scrolling is left to ratatui's
//! `ListState`, which keeps the selected row in view; a scrollbar appears
//! when a list overflows its panel.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::scrollbar,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use super::helpers::create_border_block;
use crate::domain::TransactionSummary;
use crate::state::{App, Focus};
use crate::theme::{
    ACCENT_COLOR, HIGHLIGHT_STYLE, MUTED_COLOR, PRIMARY_COLOR, SELECTED_STYLE, SUCCESS_COLOR,
    WARNING_COLOR,
};

/// Rows per transaction item.
const TXN_HEIGHT: usize = 3;

// ============================================================================
// Public Panel Rendering Functions
// ============================================================================

/// Renders the peers known to the node's network map.
pub fn render_peers(app: &App, frame: &mut Frame, area: Rect) {
    let is_focused = app.ui.focus == Focus::Peers;
    let peers = app.store.peers();
    let title = format!("Peers ({})", peers.len());
    let panel = create_border_block(&title, is_focused);
    let inner = panel.inner(area);
    frame.render_widget(panel, area);

    if peers.is_empty() {
        render_empty(frame, inner, "No peers");
        return;
    }

    let items: Vec<ListItem> = peers
        .iter()
        .map(|peer| {
            ListItem::new(Line::from(Span::styled(
                peer.display_name(),
                Style::default().fg(ACCENT_COLOR),
            )))
        })
        .collect();

    render_list(frame, inner, items, app.ui.peer_index, is_focused, 1);
}

/// Renders the displayed transaction listing, most recent first.
pub fn render_transactions(app: &App, frame: &mut Frame, area: Rect) {
    let is_focused = app.ui.focus == Focus::Transactions;
    let transactions = &app.data.transactions;
    let title = format!("{} ({})", app.data.scope.title(), transactions.len());
    let panel = create_border_block(&title, is_focused);
    let inner = panel.inner(area);
    frame.render_widget(panel, area);

    if transactions.is_empty() {
        render_empty(frame, inner, "No transactions");
        return;
    }

    let items: Vec<ListItem> = transactions
        .iter()
        .map(|payload| transaction_item(&TransactionSummary::from_data(payload)))
        .collect();

    render_list(
        frame,
        inner,
        items,
        app.ui.transaction_index,
        is_focused,
        TXN_HEIGHT,
    );
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn transaction_item(summary: &TransactionSummary) -> ListItem<'static> {
    let mut first = vec![Span::styled(
        summary.title.clone(),
        Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(status) = &summary.status {
        first.push(Span::raw("  "));
        first.push(Span::styled(status.clone(), status_style(status)));
    }

    let mut second = Vec::new();
    if let Some(reference) = &summary.reference {
        second.push(Span::styled(
            format!("#{reference}  "),
            Style::default().fg(ACCENT_COLOR),
        ));
    }
    if let Some(parties) = &summary.parties {
        second.push(Span::styled(
            parties.clone(),
            Style::default().fg(MUTED_COLOR),
        ));
    }

    ListItem::new(vec![Line::from(first), Line::from(second), Line::from("")])
}

fn status_style(status: &str) -> Style {
    let upper = status.to_ascii_uppercase();
    let color = if upper.contains("PENDING") {
        WARNING_COLOR
    } else {
        SUCCESS_COLOR
    };
    Style::default().fg(color)
}

fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let empty = Paragraph::new(message.to_string())
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(empty, area);
}

/// Draws a selectable list with a `▶` marker and, on overflow, a scrollbar.
fn render_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem<'static>>,
    selected: usize,
    is_focused: bool,
    item_height: usize,
) {
    let len = items.len();
    let highlight = if is_focused {
        HIGHLIGHT_STYLE
    } else {
        SELECTED_STYLE
    };
    let list = List::new(items)
        .highlight_style(highlight)
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(selected.min(len.saturating_sub(1))));
    frame.render_stateful_widget(list, area, &mut state);

    let visible = area.height as usize / item_height.max(1);
    if len > visible {
        let mut scrollbar_state = ScrollbarState::new(len).position(state.offset());
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .symbols(scrollbar::VERTICAL)
            .begin_symbol(None)
            .end_symbol(None)
            .style(Style::default().fg(if is_focused { PRIMARY_COLOR } else { MUTED_COLOR }));
        frame.render_stateful_widget(
            scrollbar,
            area,
            &mut scrollbar_state,
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
