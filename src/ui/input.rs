//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::router::Screen;
use super::state::App;

/// 根据当前页面和按键获取对应的 Action
pub fn get_action(screen: &Screen, notice_open: bool, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // 提示弹窗打开时只接受关闭按键
    if notice_open {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::DismissNotice),
            _ => None,
        };
    }

    match screen {
        Screen::MenuList => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Enter | KeyCode::Char('v') => Some(Action::ViewDetails),
            KeyCode::Char('e') => Some(Action::EditSelected),
            _ => None,
        },
        Screen::Detail(_) => match key.code {
            KeyCode::Esc
            | KeyCode::Backspace
            | KeyCode::Left
            | KeyCode::Char('q')
            | KeyCode::Char('h') => Some(Action::Back),
            _ => None,
        },
        Screen::Edit(_) => match key.code {
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Enter => Some(Action::Save),
            KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Input(c))
            }
            _ => None,
        },
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    let action = get_action(&app.router.current().screen, app.notice.is_some(), key);
    match action {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::models::Menu;
    use crate::ui::form::EditForm;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn edit_screen() -> Screen {
        Screen::Edit(EditForm::new(Menu::initial().items()[0].clone()))
    }

    #[test]
    fn test_list_keys() {
        let list = Screen::MenuList;
        assert_eq!(get_action(&list, false, press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(get_action(&list, false, press(KeyCode::Enter)), Some(Action::ViewDetails));
        assert_eq!(get_action(&list, false, press(KeyCode::Char('e'))), Some(Action::EditSelected));
        assert_eq!(get_action(&list, false, press(KeyCode::Esc)), None);
    }

    #[test]
    fn test_edit_keys_type_letters() {
        let edit = edit_screen();
        assert_eq!(get_action(&edit, false, press(KeyCode::Char('q'))), Some(Action::Input('q')));
        assert_eq!(get_action(&edit, false, press(KeyCode::Enter)), Some(Action::Save));
        assert_eq!(get_action(&edit, false, press(KeyCode::Esc)), Some(Action::Back));
        assert_eq!(get_action(&edit, false, press(KeyCode::BackTab)), Some(Action::PrevField));
    }

    #[test]
    fn test_notice_swallows_keys() {
        let list = Screen::MenuList;
        assert_eq!(get_action(&list, true, press(KeyCode::Char('e'))), None);
        assert_eq!(get_action(&list, true, press(KeyCode::Enter)), Some(Action::DismissNotice));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(get_action(&edit_screen(), true, ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn test_handle_key_event_flow() {
        let mut app = App::new(Menu::initial(), AppConfig::default());
        assert!(!handle_key_event(&mut app, press(KeyCode::Char('v'))));
        assert_eq!(app.router.current().screen.name(), "Detail");
        assert!(!handle_key_event(&mut app, press(KeyCode::Char('q'))));
        assert_eq!(app.router.current().screen, Screen::MenuList);
        assert!(handle_key_event(&mut app, press(KeyCode::Char('q'))));
    }
}
