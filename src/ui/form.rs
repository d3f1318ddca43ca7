//! 编辑表单
//!
//! 三个字段各自独立编辑，初值来自进入页面时传入的条目

use crate::models::{MenuItem, MenuItemPatch, MenuMutator, ReplaceOutcome};

/// 输入字段类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Title,
    Price,
    Description,
}

impl EditField {
    pub const ALL: [EditField; 3] = [EditField::Title, EditField::Price, EditField::Description];

    pub fn next(self) -> Self {
        match self {
            EditField::Title => EditField::Price,
            EditField::Price => EditField::Description,
            EditField::Description => EditField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            EditField::Title => EditField::Description,
            EditField::Price => EditField::Title,
            EditField::Description => EditField::Price,
        }
    }

    /// 空输入框中显示的占位文字
    pub fn placeholder(self) -> &'static str {
        match self {
            EditField::Title => "Title",
            EditField::Price => "Price (Rands)",
            EditField::Description => "Description",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    item: MenuItem,
    pub title: String,
    pub price: String,
    pub description: String,
    pub focus: EditField,
}

impl EditForm {
    pub fn new(item: MenuItem) -> Self {
        let MenuItemPatch {
            title,
            price,
            description,
        } = MenuItemPatch::from_item(&item);
        Self {
            item,
            title,
            price,
            description,
            focus: EditField::Title,
        }
    }

    /// 进入页面时传入的原始条目
    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    pub fn value(&self, field: EditField) -> &str {
        match field {
            EditField::Title => &self.title,
            EditField::Price => &self.price,
            EditField::Description => &self.description,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            EditField::Title => &mut self.title,
            EditField::Price => &mut self.price,
            EditField::Description => &mut self.description,
        }
    }

    pub fn input(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn delete_char(&mut self) {
        self.focused_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn patch(&self) -> MenuItemPatch {
        MenuItemPatch {
            title: self.title.clone(),
            price: self.price.clone(),
            description: self.description.clone(),
        }
    }

    /// 不做任何校验，直接按 id 替换
    pub fn save<M: MenuMutator + ?Sized>(&self, mutator: &mut M) -> ReplaceOutcome {
        mutator.replace_by_id(&self.item.id, self.patch())
    }
}
