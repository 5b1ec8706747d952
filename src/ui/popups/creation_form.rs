//! Creation form popup.
//!
//! Renders a [`CreationForm`] for either workflow: the four input fields, the
//! validation error and CUSIP hint, the fixed counterparty of a transfer and
//! the peer list captured when the form opened.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::domain::WorkflowKind;
use crate::domain::request::{TRANSFER_BUYER, TRANSFER_COUNTRY, TRANSFER_LOCATION};
use crate::state::{CreationForm, FormField};
use crate::theme::{ACCENT_COLOR, ERROR_COLOR, LABEL_STYLE, MUTED_COLOR, PRIMARY_COLOR, WARNING_COLOR};
use crate::ui::helpers::{create_popup_block, render_popup_help};
use crate::ui::layout::centered_popup_area;

const POPUP_WIDTH: u16 = 64;
/// 4 fields × 3 rows, 3 status rows, 2 help rows, 2 border rows.
const POPUP_HEIGHT: u16 = 19;

/// Render a creation form.
pub fn render(frame: &mut Frame, area: Rect, form: &CreationForm) {
    let popup_area = centered_popup_area(area, POPUP_WIDTH, POPUP_HEIGHT);
    frame.render_widget(Clear, popup_area);

    let block = create_popup_block(form.kind.title());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    for (index, field) in FormField::ALL.into_iter().enumerate() {
        render_field(frame, rows[index], form, field);
    }

    frame.render_widget(Paragraph::new(status_line(form)), rows[4]);
    frame.render_widget(Paragraph::new(counterparty_line(form.kind)), rows[5]);
    frame.render_widget(Paragraph::new(peers_line(form)), rows[6]);

    render_popup_help(
        frame,
        popup_area,
        "Tab:Next  Shift+Tab:Prev  Enter:Submit  Esc:Cancel",
    );
}

fn render_field(frame: &mut Frame, area: Rect, form: &CreationForm, field: FormField) {
    let value = form.field_value(field);
    let is_active = field == form.active_field;
    let invalid = field == FormField::Value && form.form_error;

    let border_style = if invalid {
        Style::default().fg(ERROR_COLOR)
    } else if is_active {
        Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_COLOR)
    };

    let display = if value.is_empty() {
        placeholder(field)
    } else {
        value
    };
    let content = if is_active {
        format!("{display}_")
    } else {
        display.to_string()
    };

    let paragraph = Paragraph::new(content)
        .style(if value.is_empty() {
            Style::default().fg(MUTED_COLOR)
        } else {
            Style::default()
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(field.label()),
        );

    frame.render_widget(paragraph, area);
}

const fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Value => "<number greater than 0>",
        FormField::Cusip => "e.g. US0378331005",
        FormField::AssetName => "<optional>",
        FormField::PurchaseCost => "e.g. 1000 USD",
    }
}

/// The validation error takes precedence over the CUSIP hint.
fn status_line(form: &CreationForm) -> Line<'static> {
    if form.form_error {
        Line::from(Span::styled(
            "[x] Value must be a number greater than 0",
            Style::default().fg(ERROR_COLOR),
        ))
    } else if form.cusip_missing() {
        Line::from(Span::styled(
            "CUSIP is empty",
            Style::default().fg(WARNING_COLOR),
        ))
    } else {
        Line::from("")
    }
}

fn counterparty_line(kind: WorkflowKind) -> Line<'static> {
    match kind {
        WorkflowKind::Transfer => Line::from(vec![
            Span::styled("Buyer: ", LABEL_STYLE),
            Span::styled(
                format!("{TRANSFER_BUYER}, {TRANSFER_LOCATION}, {TRANSFER_COUNTRY}"),
                Style::default().fg(ACCENT_COLOR),
            ),
        ]),
        WorkflowKind::Transaction => Line::from(""),
    }
}

fn peers_line(form: &CreationForm) -> Line<'static> {
    let peers = form.peers();
    let names = if peers.is_empty() {
        "none known".to_string()
    } else {
        peers
            .iter()
            .map(|peer| peer.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    };
    Line::from(vec![
        Span::styled("Peers: ", LABEL_STYLE),
        Span::styled(names, Style::default().fg(MUTED_COLOR)),
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{NodeMother, buffer_text, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    fn draw(terminal: &mut Terminal<TestBackend>, form: &CreationForm) -> String {
        terminal
            .draw(|frame| render(frame, frame.area(), form))
            .unwrap();
        buffer_text(terminal)
    }

    #[rstest]
    fn test_empty_transaction_form(mut test_terminal: Terminal<TestBackend>) {
        let form = CreationForm::open(WorkflowKind::Transaction, Vec::new());
        let text = draw(&mut test_terminal, &form);

        assert!(text.contains("Create Transaction"));
        assert!(text.contains("<number greater than 0>_"));
        assert!(text.contains("Purchase Cost"));
        assert!(text.contains("CUSIP is empty"));
        assert!(text.contains("Peers: none known"));
        assert!(!text.contains("Buyer:"));
    }

    #[rstest]
    fn test_transfer_form_shows_fixed_buyer(mut test_terminal: Terminal<TestBackend>) {
        let mut form = CreationForm::open(
            WorkflowKind::Transfer,
            NodeMother::peers(&["O=PartyB,L=New York,C=US"]),
        );
        form.cusip = "US0378331005".to_string();
        let text = draw(&mut test_terminal, &form);

        assert!(text.contains("Create Transfer"));
        assert!(text.contains("Buyer: O=SecurityBuyer, L=New York, C-US"));
        assert!(text.contains("Peers: O=PartyB,L=New York,C=US"));
        assert!(!text.contains("CUSIP is empty"));
    }

    #[rstest]
    fn test_rejected_form_shows_error(mut test_terminal: Terminal<TestBackend>) {
        let mut form = CreationForm::open(WorkflowKind::Transaction, Vec::new());
        form.value = "-3".to_string();
        let _ = form.submit();
        let text = draw(&mut test_terminal, &form);

        assert!(text.contains("[x] Value must be a number greater than 0"));
        assert!(!text.contains("CUSIP is empty"));
        assert!(text.contains("-3_"));
    }

    #[test]
    fn test_status_line_precedence() {
        let mut form = CreationForm::open(WorkflowKind::Transaction, Vec::new());
        insta::assert_snapshot!(status_line(&form).to_string(), @"CUSIP is empty");
        form.form_error = true;
        insta::assert_snapshot!(
            status_line(&form).to_string(),
            @"[x] Value must be a number greater than 0"
        );
    }
}
