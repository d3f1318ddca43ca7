//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各页面的处理方法

use uuid::Uuid;

use super::actions::Action;
use super::form::EditForm;
use super::router::Screen;
use super::state::{App, EditLookup, Notice};
use crate::models::ReplaceOutcome;

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => {
                tracing::info!("quit requested");
                return true;
            }
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::ViewDetails => {
                self.select_for_detail();
            }
            Action::EditSelected => {
                self.select_for_edit();
            }

            Action::Back => self.go_back(),
            Action::Save => self.save_edit(),

            Action::NextField => {
                if let Some(form) = self.edit_form_mut() {
                    form.focus_next();
                }
            }
            Action::PrevField => {
                if let Some(form) = self.edit_form_mut() {
                    form.focus_prev();
                }
            }
            Action::Input(c) => {
                if let Some(form) = self.edit_form_mut() {
                    form.input(c);
                }
            }
            Action::DeleteChar => {
                if let Some(form) = self.edit_form_mut() {
                    form.delete_char();
                }
            }

            Action::DismissNotice => self.notice = None,
        }
        false
    }

    // ============ 列表页 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.menu.len() {
            self.selected_index += 1;
        }
    }

    /// 打开详情页，传入选中条目的只读快照
    pub fn select_for_detail(&mut self) -> Option<Uuid> {
        let item = self.selected_item()?.clone();
        Some(self.router.push(Screen::Detail(item)))
    }

    /// 打开选中条目的编辑页
    pub fn select_for_edit(&mut self) -> EditLookup {
        match self.selected_item_id() {
            Some(id) => self.edit_item(&id),
            None => EditLookup::NotFound,
        }
    }

    /// 按 id 从当前菜单重新取条目再打开编辑页；找不到时不导航
    pub fn edit_item(&mut self, id: &str) -> EditLookup {
        match self.menu.get(id) {
            Some(item) => {
                let form = EditForm::new(item.clone());
                EditLookup::Opened(self.router.push(Screen::Edit(form)))
            }
            None => {
                tracing::debug!(id, "edit target not found, navigation skipped");
                EditLookup::NotFound
            }
        }
    }

    // ============ 编辑页 ============

    fn edit_form_mut(&mut self) -> Option<&mut EditForm> {
        match &mut self.router.current_mut().screen {
            Screen::Edit(form) => Some(form),
            _ => None,
        }
    }

    /// 保存：写回菜单，弹出提示并返回上一页
    pub fn save_edit(&mut self) {
        let outcome = match &self.router.current().screen {
            Screen::Edit(form) => form.save(&mut self.menu),
            _ => return,
        };

        match outcome {
            ReplaceOutcome::Replaced(old) => {
                tracing::info!(id = %old.id, "menu item replaced");
            }
            ReplaceOutcome::NotFound => {
                tracing::warn!("edited item no longer in menu, nothing replaced");
            }
        }

        self.notice = Some(Notice::saved());
        self.router.pop();
    }

    // ============ 通用操作 ============

    /// 返回上一页；编辑页未保存的内容直接丢弃
    pub fn go_back(&mut self) {
        if !self.router.can_go_back() {
            return;
        }
        self.router.pop();
        tracing::debug!(depth = self.router.depth(), "navigated back");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::models::{Menu, MenuItem};

    fn app() -> App {
        App::new(Menu::initial(), AppConfig::default())
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.dispatch(Action::Input(c));
        }
    }

    fn clear_field(app: &mut App) {
        for _ in 0..64 {
            app.dispatch(Action::DeleteChar);
        }
    }

    #[test]
    fn test_navigation_bounds() {
        let mut app = app();
        app.dispatch(Action::MoveSelectionUp);
        assert_eq!(app.selected_index, 0);
        for _ in 0..5 {
            app.dispatch(Action::MoveSelectionDown);
        }
        assert_eq!(app.selected_index, 2);
    }

    #[test]
    fn test_view_details_does_not_mutate() {
        let mut app = app();
        app.dispatch(Action::MoveSelectionDown);
        app.dispatch(Action::ViewDetails);

        match &app.router.current().screen {
            Screen::Detail(item) => assert_eq!(item.id, "2"),
            other => panic!("expected detail screen, got {:?}", other),
        }
        assert_eq!(app.menu, Menu::initial());

        app.dispatch(Action::Back);
        assert_eq!(app.router.current().screen, Screen::MenuList);
        assert_eq!(app.menu, Menu::initial());
    }

    #[test]
    fn test_edit_price_scenario() {
        let mut app = app();
        app.dispatch(Action::MoveSelectionDown);
        app.dispatch(Action::EditSelected);
        assert_eq!(app.router.current().screen.name(), "EditMenu");

        app.dispatch(Action::NextField);
        clear_field(&mut app);
        type_str(&mut app, "R175");
        app.dispatch(Action::Save);

        assert_eq!(app.router.current().screen, Screen::MenuList);
        let notice = app.notice.clone().unwrap();
        assert_eq!(notice.title, "Menu updated!");

        let seed = Menu::initial();
        let items = app.menu.items();
        assert_eq!(items[0], seed.items()[0]);
        assert_eq!(items[2], seed.items()[2]);
        assert_eq!(items[1].id, "2");
        assert_eq!(items[1].title, "Mains");
        assert_eq!(items[1].price, "R175");
        assert_eq!(items[1].image, seed.items()[1].image);

        // 列表立即反映修改
        assert_eq!(app.selected_item().unwrap().price, "R175");

        app.dispatch(Action::DismissNotice);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_edit_reads_live_item() {
        let mut app = app();
        app.dispatch(Action::EditSelected);
        clear_field(&mut app);
        type_str(&mut app, "Soup");
        app.dispatch(Action::Save);

        app.dispatch(Action::EditSelected);
        match &app.router.current().screen {
            Screen::Edit(form) => assert_eq!(form.title, "Soup"),
            other => panic!("expected edit screen, got {:?}", other),
        }
    }

    #[test]
    fn test_back_discards_edit() {
        let mut app = app();
        app.dispatch(Action::EditSelected);
        type_str(&mut app, " and more");
        app.dispatch(Action::Back);

        assert_eq!(app.router.current().screen, Screen::MenuList);
        assert_eq!(app.menu, Menu::initial());
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_edit_missing_id_is_noop() {
        let mut app = app();
        assert_eq!(app.edit_item("404"), EditLookup::NotFound);
        assert_eq!(app.router.depth(), 1);
        assert_eq!(app.menu, Menu::initial());

        let mut empty = App::new(Menu::default(), AppConfig::default());
        assert_eq!(empty.select_for_edit(), EditLookup::NotFound);
        assert!(empty.select_for_detail().is_none());
        assert!(!empty.router.can_go_back());
    }

    #[test]
    fn test_round_trip_title() {
        let mut app = app();
        app.dispatch(Action::MoveSelectionDown);

        app.dispatch(Action::EditSelected);
        clear_field(&mut app);
        type_str(&mut app, "X");
        app.dispatch(Action::Save);
        assert_eq!(app.menu.get("2").unwrap().title, "X");

        app.dispatch(Action::EditSelected);
        clear_field(&mut app);
        type_str(&mut app, "Mains");
        app.dispatch(Action::Save);

        assert_eq!(app.menu, Menu::initial());
    }

    #[test]
    fn test_save_accepts_empty_fields() {
        let mut app = App::new(
            Menu::new(vec![MenuItem::new("a", "Tea", "R20", "img", "Hot")]),
            AppConfig::default(),
        );
        app.dispatch(Action::EditSelected);
        for _ in 0..3 {
            clear_field(&mut app);
            app.dispatch(Action::NextField);
        }
        app.dispatch(Action::Save);

        let item = app.menu.get("a").unwrap();
        assert_eq!(item, &MenuItem::new("a", "", "", "img", ""));
        assert!(app.notice.is_some());
    }

    #[test]
    fn test_form_actions_ignored_outside_edit() {
        let mut app = app();
        app.dispatch(Action::Input('x'));
        app.dispatch(Action::Save);
        app.dispatch(Action::Back);
        assert_eq!(app.menu, Menu::initial());
        assert!(app.notice.is_none());
        assert!(app.dispatch(Action::Quit));
    }
}
