//! UI rendering for the TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::features::chat::{Sender, QUICK_PROMPTS};
use crate::features::focus::TimerState;
use crate::tui::app::{App, Screen, MENU_ITEMS};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    match app.screen {
        Screen::Menu => render_menu(frame, app),
        Screen::Chat => render_chat(frame, app),
        Screen::Blocker => render_blocker(frame, app),
    }
}

/// Render the main menu.
fn render_menu(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Menu list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let header = Paragraph::new(" studymate - what would you like to do today? ")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem<'_>> = MENU_ITEMS
        .iter()
        .map(|(icon, title, _)| ListItem::new(format!("  {icon}  {title}")))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(app.menu_selected));
    frame.render_stateful_widget(list, chunks[1], &mut state);

    render_status_bar(frame, app, chunks[2], "j/k:nav | Enter:open | q:quit");
}

/// Render the assistant chat screen.
fn render_chat(frame: &mut Frame<'_>, app: &App) {
    let show_quick_prompts = app.timeline.messages().len() == 1;
    let prompts_height = if show_quick_prompts {
        QUICK_PROMPTS.len() as u16 + 2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                   // Messages
            Constraint::Length(prompts_height),   // Quick prompts
            Constraint::Length(3),                // Input
            Constraint::Length(1),                // Status bar
        ])
        .split(frame.area());

    let mut items: Vec<ListItem<'_>> = app
        .timeline
        .messages()
        .iter()
        .map(|message| {
            let (name_style, text_style) = match message.sender {
                Sender::User => (
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                    Style::default(),
                ),
                Sender::Assistant => (
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                    Style::default(),
                ),
            };

            let line = Line::from(vec![
                Span::styled(
                    format!("[{}] ", message.timestamp_local().format("%H:%M")),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("{}: ", message.sender), name_style),
                Span::styled(message.text.clone(), text_style),
            ]);
            ListItem::new(line)
        })
        .collect();

    if app.timeline.is_composing() {
        items.push(ListItem::new(Span::styled(
            "assistant is typing...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let messages = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Assistant chat "),
    );
    frame.render_widget(messages, chunks[0]);

    if show_quick_prompts {
        let lines: Vec<Line<'_>> = QUICK_PROMPTS
            .iter()
            .enumerate()
            .map(|(index, prompt)| Line::from(format!("  {}. {prompt}", index + 1)))
            .collect();
        let prompts = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Quick prompts (press a number) ")
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(prompts, chunks[1]);
    }

    let input = Paragraph::new(app.input.as_str())
        .block(Block::default().borders(Borders::ALL).title(" Message "));
    frame.render_widget(input, chunks[2]);

    render_status_bar(frame, app, chunks[3], "Enter:send | Esc:menu");
}

/// Render the distraction blocker screen.
fn render_blocker(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Main panels
            Constraint::Length(4), // Study sessions
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    render_study_panel(frame, app, panels[0]);
    render_apps_panel(frame, app, panels[1]);
    render_sessions_panel(frame, app, chunks[1]);
    render_status_bar(
        frame,
        app,
        chunks[2],
        "Space:toggle | s:study mode | t/p/r:timer | ?:help | Esc:menu",
    );
}

/// Render study-mode state and the countdown timer.
fn render_study_panel(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let (mode_text, mode_style) = if app.focus.study_mode_active() {
        (
            "Study mode ON - apps blocked",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "Study mode off",
            Style::default().fg(Color::DarkGray),
        )
    };

    let timer = app.focus.timer();
    let timer_style = match timer.state() {
        TimerState::Running => Style::default().fg(Color::Green),
        TimerState::Paused => Style::default().fg(Color::Yellow),
        TimerState::Finished => Style::default().fg(Color::Red),
        TimerState::Idle => Style::default(),
    };
    let timer_note = match timer.state() {
        TimerState::Running => "counting down",
        TimerState::Paused => "paused",
        TimerState::Finished => "finished - take a break!",
        TimerState::Idle => "press t to start",
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(mode_text, mode_style)),
        Line::from(""),
        Line::from(Span::styled(
            format!("      {}      ", timer.format_remaining()),
            timer_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            timer_note,
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Study mode "));
    frame.render_widget(panel, area);
}

/// Render the blockable-app roster.
fn render_apps_panel(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .focus
        .apps()
        .iter()
        .map(|entry| {
            let flag = if entry.blocked {
                Span::styled("[blocked]", Style::default().fg(Color::Red))
            } else {
                Span::styled("[allowed]", Style::default().fg(Color::Green))
            };
            let line = Line::from(vec![
                Span::raw(format!("{} {:12}", entry.icon, entry.name)),
                Span::styled(
                    format!("{:>8}  ", entry.time_spent),
                    Style::default().fg(Color::DarkGray),
                ),
                flag,
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Apps "))
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(Some(app.selected_app));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the study-session summary.
fn render_sessions_panel(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let spans: Vec<Span<'_>> = app
        .focus
        .sessions()
        .iter()
        .map(|session| {
            let style = if session.completed {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(
                format!(
                    " {} {} ({}) ",
                    if session.completed { "✓" } else { "·" },
                    session.subject,
                    session.duration
                ),
                style,
            )
        })
        .collect();

    let summary = format!(
        " {} of {} completed ",
        app.focus.completed_sessions(),
        app.focus.sessions().len()
    );

    let panel = Paragraph::new(vec![Line::from(spans), Line::from(summary)]).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Today's sessions "),
    );
    frame.render_widget(panel, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect, hint: &str) {
    let text = app.status.as_deref().unwrap_or(hint);
    let status = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
