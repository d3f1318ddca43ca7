//! 导航栈
//!
//! 每个页面连同进入时携带的参数一起入栈，根页面（菜单列表）永远不会出栈

use uuid::Uuid;

use super::form::EditForm;
use crate::models::MenuItem;

/// 页面及其导航参数
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    MenuList,
    Detail(MenuItem), // 只读快照
    Edit(EditForm),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::MenuList => "MenuList",
            Screen::Detail(_) => "Detail",
            Screen::Edit(_) => "EditMenu",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub key: Uuid,
    pub screen: Screen,
}

impl Route {
    fn new(screen: Screen) -> Self {
        Self {
            key: Uuid::new_v4(),
            screen,
        }
    }
}

#[derive(Debug)]
pub struct Router {
    root: Route,
    stack: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            root: Route::new(Screen::MenuList),
            stack: Vec::new(),
        }
    }

    /// 压入新页面，返回路由 key
    pub fn push(&mut self, screen: Screen) -> Uuid {
        let route = Route::new(screen);
        let key = route.key;
        tracing::debug!(screen = route.screen.name(), %key, "route pushed");
        self.stack.push(route);
        key
    }

    /// 返回上一页，被弹出页面的本地状态随之丢弃；已在根页面时返回 None
    pub fn pop(&mut self) -> Option<Route> {
        let route = self.stack.pop()?;
        tracing::debug!(screen = route.screen.name(), key = %route.key, "route popped");
        Some(route)
    }

    pub fn current(&self) -> &Route {
        self.stack.last().unwrap_or(&self.root)
    }

    pub fn current_mut(&mut self) -> &mut Route {
        match self.stack.last_mut() {
            Some(route) => route,
            None => &mut self.root,
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    pub fn can_go_back(&self) -> bool {
        !self.stack.is_empty()
    }
}
