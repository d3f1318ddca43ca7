//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use chrono::{DateTime, Local};
use uuid::Uuid;

use super::router::Router;
use crate::config::AppConfig;
use crate::models::{Menu, MenuItem};

/// 应用状态
pub struct App {
    pub menu: Menu, // 菜单只归 App 所有，编辑页通过 MenuMutator 写回
    pub router: Router,
    pub selected_index: usize,
    pub notice: Option<Notice>,
    pub config: AppConfig,
}

/// 弹窗提示（保存成功后显示）
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub shown_at: DateTime<Local>,
}

impl Notice {
    pub fn saved() -> Self {
        Self {
            title: "Menu updated!".to_string(),
            body: "The menu item has been successfully updated.".to_string(),
            shown_at: Local::now(),
        }
    }
}

/// 打开编辑页的结果
#[derive(Debug, Clone, PartialEq)]
pub enum EditLookup {
    Opened(Uuid),
    NotFound, // id 已不存在，没有发生导航
}

impl App {
    /// 创建新的应用实例
    pub fn new(menu: Menu, config: AppConfig) -> Self {
        Self {
            menu,
            router: Router::new(),
            selected_index: 0,
            notice: None,
            config,
        }
    }

    /// 获取当前选中的条目
    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.menu.items().get(self.selected_index)
    }

    /// 获取当前选中的条目 ID
    pub fn selected_item_id(&self) -> Option<String> {
        self.selected_item().map(|item| item.id.clone())
    }
}
