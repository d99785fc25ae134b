use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::app::App;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Seconds remaining at which the countdown turns red.
const TIMER_WARNING_SECS: u32 = 5;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.session().current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_status_row(frame, chunks[0], app);
    render_question_text(frame, chunks[1], app, &question.text);
    render_options(
        frame,
        chunks[2],
        &question.options,
        app.session().selected_option(),
    );
    render_controls(frame, chunks[3], app);

    if app.hint_visible() {
        render_hint_popup(frame, area, &question.hint);
    }
}

fn render_status_row(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let chunks = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .split(area);

    let timer_color = if session.time_left() <= TIMER_WARNING_SECS {
        Color::Red
    } else {
        Color::Cyan
    };
    let timer = Paragraph::new(format!("Time: {}s", session.time_left()))
        .alignment(Alignment::Left)
        .fg(timer_color);
    frame.render_widget(timer, chunks[0]);

    let progress = Paragraph::new(format!(
        "{}/{}",
        session.current_index() + 1,
        session.total_questions()
    ))
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(progress, chunks[1]);

    let score = Paragraph::new(format!("Score: {}", session.score()))
        .alignment(Alignment::Right)
        .fg(Color::Cyan);
    frame.render_widget(score, chunks[2]);
}

fn render_question_text(frame: &mut Frame, area: Rect, app: &App, text: &str) {
    let numbered = format!("{}. {}", app.session().current_index() + 1, text);
    let widget = Paragraph::new(numbered)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, options: &[String; 4], selected: Option<usize>) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = selected == Some(index);
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let text = if session.is_last_question() && session.can_advance() {
        "j/k select  ·  enter submit  ·  h hint  ·  q quit"
    } else if session.can_advance() {
        "j/k select  ·  enter next  ·  h hint  ·  q quit"
    } else {
        "j/k select an option  ·  h hint  ·  q quit"
    };

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_hint_popup(frame: &mut Frame, area: Rect, hint: &str) {
    let popup = centered_rect(area, 60, 7);
    frame.render_widget(Clear, popup);

    let widget = Paragraph::new(hint)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .fg(Color::Yellow)
        .block(
            Block::default()
                .title(" Hint ")
                .borders(Borders::ALL)
                .border_style(Color::Yellow)
                .padding(Padding::uniform(1)),
        );
    frame.render_widget(widget, popup);
}

fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}
