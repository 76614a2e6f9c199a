use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

const ACCENT: Color = Color::Yellow;
const TEXT_DIM: Color = Color::DarkGray;

/// Split the screen into info line, rating box and footer
fn layout(area: Rect, app: &App) -> [Rect; 3] {
    let box_height = app.props.size.scale() + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),          // Info line
            Constraint::Length(box_height), // Rating box
            Constraint::Min(0),
            Constraint::Length(1),          // Footer
        ])
        .split(area);

    [chunks[0], chunks[1], chunks[3]]
}

/// Where the stars themselves are drawn, for mouse hit testing
pub fn rating_area(area: Rect, app: &App) -> Rect {
    let [_, rating_box, _] = layout(area, app);
    rating_block(false).inner(rating_box)
}

fn rating_block(focused_hint: bool) -> Block<'static> {
    let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let block = Block::default()
        .title(Span::styled(" Rating ", title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT_DIM));

    if focused_hint {
        block.title_bottom(Line::from(" ←→ Space ").right_aligned())
    } else {
        block
    }
}

pub fn draw(f: &mut Frame, app: &App) {
    let [info, rating_box, footer] = layout(f.area(), app);

    draw_info_line(f, app, info);
    draw_rating(f, app, rating_box);
    draw_footer(f, footer);
}

fn draw_info_line(f: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(ref msg) = app.status_message {
        Line::from(Span::styled(msg.clone(), Style::default().fg(Color::Red)))
    } else {
        let mut spans = vec![
            Span::styled(
                format!(" {}/{} ", app.props.filled_count(), app.props.star_count),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(click) = app.last_click {
            spans.push(Span::styled(
                format!("│ star {} reported {}", click.index + 1, click.reported),
                Style::default().fg(TEXT_DIM),
            ));
        }
        Line::from(spans)
    };

    f.render_widget(Paragraph::new(line), area);
}

fn draw_rating(f: &mut Frame, app: &App, area: Rect) {
    let block = rating_block(true);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(&app.props, inner);

    // Underline the focused star
    if let Some(slot) = starrate::star_slots(&app.props, inner).get(app.focused as usize) {
        let cursor = Rect {
            height: 1,
            ..*slot
        };
        f.buffer_mut()
            .set_style(cursor, Style::default().add_modifier(Modifier::UNDERLINED));
    }
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let hints = [
        ("click", "Rate"),
        ("←→", "Move"),
        ("Space", "Select"),
        ("1-9", "Star"),
        ("q", "Quit"),
    ];

    // Responsive: show fewer hints on narrow terminals
    let max_hints = if area.width < 50 { 3 } else { hints.len() };

    let hint_spans: Vec<Span> = hints
        .iter()
        .take(max_hints)
        .flat_map(|(key, action)| {
            vec![
                Span::styled(*key, Style::default().fg(ACCENT)),
                Span::styled(format!(" {} │ ", action), Style::default().fg(TEXT_DIM)),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center);

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use starrate::RatingProps;

    #[test]
    fn test_rating_area_matches_drawn_stars() {
        let app = App::new(RatingProps::new(2));
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|f| draw(f, &app)).unwrap();

        let area = rating_area(Rect::new(0, 0, 40, 10), &app);
        assert_eq!(area, Rect::new(1, 2, 38, 1));

        let buf = terminal.backend().buffer();
        assert_eq!(buf[(1, 2)].symbol(), "★");
        assert_eq!(buf[(3, 2)].symbol(), "★");
        assert_eq!(buf[(5, 2)].symbol(), "☆");
    }

    #[test]
    fn test_info_line_shows_value() {
        let app = App::new(RatingProps::new(3));
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|f| draw(f, &app)).unwrap();

        let buf = terminal.backend().buffer();
        let info: String = (0..6).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert_eq!(info, " 3/5  ");
    }
}
