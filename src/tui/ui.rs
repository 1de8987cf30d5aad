use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::App;
use crate::core::view;
use crate::tui::TuiState;
use crate::tui::components::EntryList;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(3), Min(0), Length(2)]);
    let [header_area, list_area, footer_area] = layout.areas(frame.area());

    // Header: title + current search query
    let query_span = if app.query.is_empty() {
        Span::styled(
            "None",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(app.query.as_str(), Style::default().fg(Color::Cyan))
    };
    let header = Paragraph::new(vec![
        Line::from("Select files and folders to include."),
        Line::from(vec![Span::raw("Search query: "), query_span]),
        Line::default(),
    ]);
    frame.render_widget(header, header_area);

    // Listing
    let rows = view::rows(app);
    EntryList::new(&rows, app.cursor, &mut tui.entry_list).render(frame, list_area);

    // Footer: key help, then the commit status once it is set
    let key = |text: &'static str| Span::styled(text, Style::default().fg(Color::Green));
    let help = Line::from(vec![
        Span::raw("Use "),
        key("Up"),
        Span::raw(" / "),
        key("Down"),
        Span::raw(" to navigate, "),
        key("Left"),
        Span::raw(" / "),
        key("Right"),
        Span::raw(" to select, and "),
        key("Enter"),
        Span::raw(" to proceed."),
    ]);
    let status = Line::styled(app.status_message.as_str(), Style::default().fg(Color::Green));
    frame.render_widget(Paragraph::new(vec![help, status]), footer_area);
}
