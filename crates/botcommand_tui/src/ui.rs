//! UI rendering for the dashboard.

use crate::{App, EditForm, LoginField, LoginState, Panel, PanelRecord, PanelState, Section, View};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Row, Table, Wrap},
};
use strum::IntoEnumIterator;

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App) {
    match app.view {
        View::Login => draw_login(f, app),
        View::Dashboard => draw_dashboard(f, app),
    }
}

fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Rectangle of `width` x `height` centred in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[tracing::instrument(skip_all)]
fn draw_login(f: &mut Frame, app: &App) {
    let form = &app.login;
    let area = centered(f.area(), 60, 18);
    f.render_widget(Clear, area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .title("BotCommand Login")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Length(2), // State
            Constraint::Min(0),    // Error and debug info
            Constraint::Length(2), // Help
        ])
        .margin(1)
        .split(inner);

    let field_style = |field: LoginField| {
        if form.focused() == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        }
    };

    let username = Paragraph::new(form.username()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Username")
            .border_style(field_style(LoginField::Username)),
    );
    f.render_widget(username, chunks[0]);

    let password = Paragraph::new(form.masked_password()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Password")
            .border_style(field_style(LoginField::Password)),
    );
    f.render_widget(password, chunks[1]);

    let state = match form.state() {
        LoginState::Submitting => "Logging in...",
        _ => "",
    };
    f.render_widget(Paragraph::new(state), chunks[2]);

    let mut lines = Vec::new();
    if let Some(error) = form.error() {
        lines.push(Line::from(Span::styled(error, Style::default().fg(Color::Red))));
    }
    if let Some(info) = form.debug_info() {
        lines.push(Line::from(Span::styled(
            info,
            Style::default().fg(Color::DarkGray),
        )));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[3]);

    let help = if form.is_preview() {
        "Tab: Switch field | Enter: Login | F2: Direct login (preview) | Esc: Quit"
    } else {
        "Tab: Switch field | Enter: Login | Esc: Quit"
    };
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::Gray)),
        chunks[4],
    );
}

#[tracing::instrument(skip_all)]
fn draw_dashboard(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(0)])
        .split(chunks[1]);
    draw_sidebar(f, app, body[0]);

    let main = match app.banner() {
        Some(banner) => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(0)])
                .split(body[1]);
            draw_banner(f, banner, parts[0]);
            parts[1]
        }
        None => body[1],
    };

    match app.section {
        Section::Home => draw_home(f, app, main),
        Section::Commands => draw_panel(f, &app.commands, main),
        Section::ReactionRoles => draw_panel(f, &app.reaction_roles, main),
        Section::YouTubeFeeds => draw_panel(f, &app.youtube_feeds, main),
        Section::AutoMod => draw_panel(f, &app.automod_rules, main),
        Section::Logging => draw_panel(f, &app.logs, main),
        Section::Settings => draw_settings(f, app, main),
    }

    if let Some(form) = app.form() {
        draw_form(f, form, main);
    }

    draw_status_bar(f, app, chunks[2]);
}

/// Draw the header.
fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let env = if app.is_preview() { " [preview]" } else { "" };
    let user = app
        .user
        .as_ref()
        .map(|u| format!(" - {}", u.username))
        .unwrap_or_default();
    let title = format!("BotCommand Dashboard{}{}", env, user);
    let header = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = Section::iter()
        .enumerate()
        .map(|(i, section)| {
            let style = if section == app.section {
                selected_style()
            } else {
                Style::default()
            };
            ListItem::new(format!("{} {}", i + 1, section)).style(style)
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Menu"));
    f.render_widget(list, area);
}

fn draw_banner(f: &mut Frame, banner: &str, area: Rect) {
    let widget = Paragraph::new(banner)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Red));
    f.render_widget(widget, area);
}

fn draw_panel<R: PanelRecord>(f: &mut Frame, panel: &Panel<R>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} - {}", R::TITLE, R::DESCRIPTION));

    if panel.state() == PanelState::Loading {
        f.render_widget(Paragraph::new("Loading...").block(block), area);
        return;
    }

    let header = Row::new(R::columns().to_vec())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = panel
        .rows()
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let style = if i == panel.selected() {
                selected_style()
            } else {
                Style::default()
            };
            Row::new(record.cells()).style(style)
        })
        .collect();

    let widths: Vec<Constraint> = R::columns()
        .iter()
        .map(|_| Constraint::Ratio(1, R::columns().len() as u32))
        .collect();

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

fn draw_form(f: &mut Frame, form: &EditForm, area: Rect) {
    let height = form.fields().len() as u16 * 3 + 4;
    let area = centered(area, area.width.saturating_sub(8).max(40), height);
    f.render_widget(Clear, area);

    let title = match form.mode() {
        crate::FormMode::Create => "Add".to_string(),
        crate::FormMode::Edit(id) => format!("Edit {}", id),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints: Vec<Constraint> = form.fields().iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Min(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in form.fields().iter().enumerate() {
        let border = if i == form.focused() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let widget = Paragraph::new(field.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(field.label)
                .border_style(border),
        );
        f.render_widget(widget, chunks[i]);
    }

    let footer = match form.error() {
        Some(error) => Line::from(Span::styled(error, Style::default().fg(Color::Red))),
        None => Line::from("Enter: Save | Tab: Next field | Esc: Cancel"),
    };
    f.render_widget(Paragraph::new(footer), chunks[form.fields().len()]);
}

#[tracing::instrument(skip_all)]
fn draw_home(f: &mut Frame, app: &App, area: Rect) {
    let home = &app.home;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let stats = home.stats();
    let mut stat_lines = vec![
        format!("Commands used:      {}", stats.total_commands_used),
        format!("Active users:       {}", stats.active_users),
        format!("Moderation actions: {}", stats.moderation_actions),
        format!("Messages today:     {}", stats.messages_today),
        format!("New members (week): {}", stats.new_members_week),
    ];
    if let Some(channels) = &stats.top_channels {
        stat_lines.push(String::new());
        stat_lines.push("Top channels:".to_string());
        for channel in channels {
            stat_lines.push(format!("  #{} ({})", channel.name, channel.messages));
        }
    }
    let title = if home.state() == PanelState::Loading {
        "Server Stats (loading)"
    } else {
        "Server Stats"
    };
    f.render_widget(
        Paragraph::new(stat_lines.join("\n"))
            .block(Block::default().borders(Borders::ALL).title(title)),
        top[0],
    );

    let status = home.status();
    let on_off = |on: bool| if on { "Enabled" } else { "Disabled" };
    let mut status_lines = vec![
        format!("Auto-moderation:  {}", on_off(status.auto_moderation)),
        format!("Welcome messages: {}", on_off(status.welcome_messages)),
        format!("Logging:          {}", on_off(status.logging)),
        format!("Uptime:           {}", status.uptime),
        format!("Version:          {}", status.version),
        format!("Servers:          {}", status.servers),
    ];
    if let Some(count) = status.commands_registered {
        status_lines.push(format!("Commands:         {}", count));
    }
    f.render_widget(
        Paragraph::new(status_lines.join("\n"))
            .block(Block::default().borders(Borders::ALL).title("Bot Status")),
        top[1],
    );

    let welcome = home.welcome();
    let welcome_lines = [
        format!("Channel: #{}", welcome.channel),
        format!(
            "DM: {} | Assign role: {}",
            if welcome.send_dm { "yes" } else { "no" },
            if welcome.assign_role { welcome.role.as_str() } else { "no" }
        ),
        String::new(),
        format!("Preview: {}", home.welcome_preview()),
    ];
    f.render_widget(
        Paragraph::new(welcome_lines.join("\n"))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Welcome Message (e: edit)"),
            )
            .wrap(Wrap { trim: true }),
        chunks[1],
    );
}

#[tracing::instrument(skip_all)]
fn draw_settings(f: &mut Frame, app: &App, area: Rect) {
    let panel = &app.settings;
    let items: Vec<ListItem> = crate::SettingsField::iter()
        .map(|field| {
            let style = if field == panel.focused() {
                selected_style()
            } else {
                Style::default()
            };
            ListItem::new(format!("{:<26}{}", field.to_string(), panel.value(field))).style(style)
        })
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    f.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title("General Settings")),
        chunks[0],
    );
    if let Some(message) = panel.message() {
        f.render_widget(
            Paragraph::new(message).style(Style::default().fg(Color::Green)),
            chunks[1],
        );
    }
}

/// Draw the status bar with help text.
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.section {
        _ if app.form().is_some() => "Enter: Save | Tab: Next field | Esc: Cancel",
        Section::Home => "1-7: Section | E: Edit welcome | R: Reload | L: Logout | Q: Quit",
        Section::Settings => {
            "↑↓: Field | Space: Change | Ctrl+S: Save | Tab: Section | Q: Quit"
        }
        Section::YouTubeFeeds => {
            "↑↓: Navigate | A: Add | E: Edit | D: Delete | Space: Toggle | M: @everyone | Q: Quit"
        }
        _ => "↑↓: Navigate | A: Add | E: Edit | D: Delete | Space: Toggle | R: Reload | Q: Quit",
    };

    let status_text = if app.is_busy() {
        format!("{} | Working... | {}", app.status_message, help_text)
    } else {
        format!("{} | {}", app.status_message, help_text)
    };
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}
