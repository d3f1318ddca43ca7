mod config;
mod error;
mod logging;
mod models;
mod ui;

use std::io;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::config::{config_path, data_dir, load_config};
use crate::error::Result;
use crate::models::Menu;
use crate::ui::{App, handle_key_event, render};

fn main() -> Result<()> {
    // 配置文件路径 (~/.config/course-menu/config.toml)
    let config = load_config(&config_path()?)?;

    // 日志写入 (~/.local/share/course-menu/logs/)
    let logging = logging::init(&data_dir()?, &config.log_filter);

    // 每次启动都从初始菜单开始
    let mut app = App::new(Menu::initial(), config);
    tracing::info!(
        items = app.menu.len(),
        unique_ids = app.menu.has_unique_ids(),
        "menu seeded"
    );

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(guard) = &logging {
        println!("日志位于 {}", guard.log_dir().display());
    }

    Ok(result?)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && handle_key_event(app, key) {
                break;
            }
        }
    }
    Ok(())
}
