//! 视图层模块
//!
//! 包含主渲染入口和各页面视图

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::form::{EditField, EditForm};
use super::router::Screen;
use super::state::{App, Notice};
use crate::config::AppConfig;
use crate::models::MenuItem;
use components::{render_dialog_framework, render_input_widget};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题栏
            Constraint::Min(10),   // 页面
            Constraint::Length(4), // 帮助（窄终端下折成两行）
        ])
        .split(frame.area());

    let screen = &app.router.current().screen;
    render_header(frame, &app.config, screen, chunks[0]);

    match screen {
        Screen::MenuList => render_menu_list(frame, app, chunks[1]),
        Screen::Detail(item) => render_detail(frame, &app.config, item, chunks[1]),
        Screen::Edit(form) => render_edit_form(frame, &app.config, form, chunks[1]),
    }

    render_help(frame, app, chunks[2]);

    if let Some(notice) = &app.notice {
        render_notice(frame, &app.config, notice);
    }
}

/// 页面标题
pub fn screen_title<'a>(config: &'a AppConfig, screen: &Screen) -> &'a str {
    match screen {
        Screen::MenuList => &config.app_title,
        other => other.name(),
    }
}

fn render_header(frame: &mut Frame, config: &AppConfig, screen: &Screen, area: Rect) {
    let title = Paragraph::new(screen_title(config, screen).to_string())
        .style(
            Style::default()
                .fg(Color::White)
                .bg(config.accent_color())
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

/// 一张菜单卡片：图片、标题、价格和两个操作
fn card_lines<'a>(item: &'a MenuItem, config: &AppConfig) -> Vec<Line<'a>> {
    vec![
        Line::from(Span::styled(
            format!("🖼  {}", item.image),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            item.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            item.price.as_str(),
            Style::default()
                .fg(config.price_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("[View Details]  [Edit]"),
        Line::from(""),
    ]
}

fn render_menu_list(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let heading = Paragraph::new(app.config.list_heading.clone())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(app.config.accent_color())
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(heading, chunks[0]);

    let items: Vec<ListItem> = app
        .menu
        .items()
        .iter()
        .map(|item| ListItem::new(card_lines(item, &app.config)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !app.menu.is_empty() {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(list, chunks[1], &mut state);
}

/// 详情页只依赖传入的快照
pub fn detail_lines<'a>(item: &'a MenuItem, config: &AppConfig) -> Vec<Line<'a>> {
    vec![
        Line::from(Span::styled(
            item.title.as_str(),
            Style::default()
                .fg(config.accent_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("🖼  {}", item.image),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            item.price.as_str(),
            Style::default()
                .fg(config.price_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(item.description.as_str()),
    ]
}

fn render_detail(frame: &mut Frame, config: &AppConfig, item: &MenuItem, area: Rect) {
    let detail = Paragraph::new(detail_lines(item, config))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(detail, area);
}

fn render_edit_form(frame: &mut Frame, config: &AppConfig, form: &EditForm, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Edit Menu Item",
            Style::default()
                .fg(config.accent_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("🖼  {}", form.item().image),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    for (field, slot) in EditField::ALL.iter().zip(&chunks[1..4]) {
        render_input_widget(
            frame,
            *slot,
            form.value(*field),
            field.placeholder(),
            form.focus == *field,
            config.accent_color(),
        );
    }

    let button = Paragraph::new("[ Save Changes ]")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(button, chunks[4]);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.notice.is_some() {
        "[Enter] OK"
    } else {
        match &app.router.current().screen {
            Screen::MenuList => "[j/k] 选择  [Enter] 详情  [e] 编辑  [q] 退出",
            Screen::Detail(_) => "[Esc] 返回",
            Screen::Edit(_) => "[Tab] 字段  [Enter] 保存  [Esc] 放弃",
        }
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_notice(frame: &mut Frame, config: &AppConfig, notice: &Notice) {
    let area = centered_rect(50, 30, frame.area());
    let inner = render_dialog_framework(frame, area, &notice.title, config.accent_color());

    let text = vec![
        Line::from(notice.body.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            notice.shown_at.format("%H:%M:%S").to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, inner);
}
