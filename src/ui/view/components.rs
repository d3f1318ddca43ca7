//! 通用 UI 组件
//!
//! 对话框、输入框等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// 单行输入框的水平滚动量与光标列：光标始终落在文本末尾之后且可见
pub fn input_scroll(value: &str, width: u16) -> (u16, u16) {
    let text_width = u16::try_from(value.width()).unwrap_or(u16::MAX);
    let offset = text_width.saturating_sub(width.saturating_sub(1));
    (offset, text_width - offset)
}

/// [组件] 带有标题和占位文字的单行输入框，聚焦时显示光标，超长时水平滚动
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    value: &str,
    placeholder: &str,
    is_focused: bool,
    active_color: Color,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let block = Block::default()
        .title(placeholder.to_string())
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    let (offset, cursor_col) = input_scroll(value, inner.width);

    let input = if value.is_empty() {
        Paragraph::new(placeholder.to_string()).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(value.to_string())
            .style(Style::default().fg(Color::Reset))
            .scroll((0, offset))
    };
    frame.render_widget(input.block(block), area);

    if is_focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position((inner.x + cursor_col, inner.y));
    }
}
