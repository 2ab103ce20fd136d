//! Ratatui view for the demo binary.
//!
//! Pure presentation: reads the console's published state and draws it.
//! Which regions are visible, which page is active, and what every line of
//! text says is decided entirely by [`FleetConsole`]; nothing here mutates.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

use crate::camera::CameraRig;
use crate::fleet::FleetCoordinator;
use crate::transitions::TransitionDriver;
use crate::window::{FleetConsole, PAGE_COMMAND, PAGE_COUNT, PAGE_EVENTS, PAGE_FORMATIONS};

const PAGE_TITLES: [&str; PAGE_COUNT] = ["status", "events", "command", "formations"];

pub fn render<F, C, T>(frame: &mut Frame, console: &FleetConsole<F, C, T>)
where
    F: FleetCoordinator,
    C: CameraRig,
    T: TransitionDriver,
{
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    if console.state().main_open() {
        render_main(frame, console, area);
    } else {
        let hint = Paragraph::new("press Esc to open the console, Tab to pick a drone")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, area);
    }

    if console.state().overview_active() {
        render_overview(frame, console, area);
    }
    if console.state().selection_active() {
        render_selection(frame, console, area);
    }
    if console.alert().active() {
        render_alert(frame, console, area);
    }
}

fn render_main<F, C, T>(frame: &mut Frame, console: &FleetConsole<F, C, T>, area: Rect)
where
    F: FleetCoordinator,
    C: CameraRig,
    T: TransitionDriver,
{
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(console.header_text())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(header, rows[0]);

    let tabs: Vec<String> = PAGE_TITLES
        .iter()
        .enumerate()
        .map(|(i, title)| {
            if i == console.current_page() {
                format!("[{}:{}]", i + 1, title)
            } else {
                format!(" {}:{} ", i + 1, title)
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(tabs.join(" ")), rows[1]);

    match console.current_page() {
        PAGE_EVENTS => render_events(frame, console, rows[2]),
        PAGE_COMMAND => render_command(frame, console, rows[2]),
        PAGE_FORMATIONS => render_formations(frame, console, rows[2]),
        _ => render_status(frame, console, rows[2]),
    }

    frame.render_widget(
        Paragraph::new(console.status_log()).style(Style::default().fg(Color::DarkGray)),
        rows[3],
    );
}

fn render_status<F, C, T>(frame: &mut Frame, console: &FleetConsole<F, C, T>, area: Rect)
where
    F: FleetCoordinator,
    C: CameraRig,
    T: TransitionDriver,
{
    let selected = console.selected_drone().unwrap_or("none");
    let lines = vec![
        Line::from(format!("selected drone: {}", selected)),
        Line::from(format!("interacting: {}", console.interacting())),
    ];
    let block = Block::default().borders(Borders::ALL).title("fleet status");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_events<F, C, T>(frame: &mut Frame, console: &FleetConsole<F, C, T>, area: Rect)
where
    F: FleetCoordinator,
    C: CameraRig,
    T: TransitionDriver,
{
    let block = Block::default().borders(Borders::ALL).title("drone events");
    if console.lists().events_placeholder() {
        let empty = Paragraph::new("no events")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }
    let items: Vec<ListItem> = console
        .lists()
        .events()
        .iter()
        .map(|entry| ListItem::new(format!("{}: {}", entry.drone_id, entry.message)))
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn render_command<F, C, T>(frame: &mut Frame, console: &FleetConsole<F, C, T>, area: Rect)
where
    F: FleetCoordinator,
    C: CameraRig,
    T: TransitionDriver,
{
    let block = Block::default()
        .borders(Borders::ALL)
        .title("formation command");
    let check = if console.check_result().is_empty() {
        "-"
    } else {
        console.check_result()
    };
    let lines = vec![
        Line::from(format!("count: {}", console.count_text())),
        Line::from(format!("check: {}", check)),
        Line::from(format!("path:  {}", console.path_text())),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_formations<F, C, T>(frame: &mut Frame, console: &FleetConsole<F, C, T>, area: Rect)
where
    F: FleetCoordinator,
    C: CameraRig,
    T: TransitionDriver,
{
    let block = Block::default()
        .borders(Borders::ALL)
        .title("formation groups");
    if console.lists().formations_placeholder() {
        let empty = Paragraph::new("no formations")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }
    let items: Vec<ListItem> = console
        .lists()
        .formations()
        .iter()
        .map(|entry| {
            ListItem::new(format!(
                "#{} {} ({} drones)",
                entry.index, entry.name, entry.drone_count
            ))
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn render_overview<F, C, T>(frame: &mut Frame, console: &FleetConsole<F, C, T>, area: Rect)
where
    F: FleetCoordinator,
    C: CameraRig,
    T: TransitionDriver,
{
    let rect = centered(area, 40, 60);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("path overview");
    let Some(session) = console.session() else {
        frame.render_widget(Paragraph::new("no route").block(block), rect);
        return;
    };
    let items: Vec<ListItem> = session
        .waypoints()
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let line = format!("{} {}", if i == session.index() { ">" } else { " " }, point);
            let style = if i == session.index() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();
    frame.render_widget(List::new(items).block(block), rect);
}

fn render_selection<F, C, T>(frame: &mut Frame, console: &FleetConsole<F, C, T>, area: Rect)
where
    F: FleetCoordinator,
    C: CameraRig,
    T: TransitionDriver,
{
    let rect = centered(area, 40, 60);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("select drone");
    let items: Vec<ListItem> = console
        .roster()
        .entries()
        .iter()
        .map(|entry| {
            // formation members are color-tagged apart from loose drones
            let style = if entry.highlighted {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };
            let line = if entry.label.is_empty() {
                entry.id.clone()
            } else {
                format!("{} [{}]", entry.id, entry.label)
            };
            ListItem::new(line).style(style)
        })
        .collect();
    frame.render_widget(List::new(items).block(block), rect);
}

fn render_alert<F, C, T>(frame: &mut Frame, console: &FleetConsole<F, C, T>, area: Rect)
where
    F: FleetCoordinator,
    C: CameraRig,
    T: TransitionDriver,
{
    let rect = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };
    let alert = Paragraph::new(console.alert().text()).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Clear, rect);
    frame.render_widget(alert, rect);
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x) / 100) as u16;
    let height = (u32::from(area.height) * u32::from(percent_y) / 100) as u16;
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
