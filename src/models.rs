/// 菜单条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    pub price: String, // 展示用文本，如 "R89"
    pub image: String, // 图片 URI，只展示不加载
    pub description: String,
}

impl MenuItem {
    pub fn new(id: &str, title: &str, price: &str, image: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            price: price.to_string(),
            image: image.to_string(),
            description: description.to_string(),
        }
    }
}

/// 编辑表单提交的三个可编辑字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemPatch {
    pub title: String,
    pub price: String,
    pub description: String,
}

impl MenuItemPatch {
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            title: item.title.clone(),
            price: item.price.clone(),
            description: item.description.clone(),
        }
    }

    /// 生成完整的新记录，id 与 image 保持不变
    pub fn apply_to(&self, item: &MenuItem) -> MenuItem {
        MenuItem {
            id: item.id.clone(),
            image: item.image.clone(),
            title: self.title.clone(),
            price: self.price.clone(),
            description: self.description.clone(),
        }
    }
}

/// 替换操作的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplaceOutcome {
    Replaced(MenuItem), // 被替换掉的旧记录
    NotFound,
}

/// 对菜单的唯一写能力：按 id 整条替换
pub trait MenuMutator {
    fn replace_by_id(&mut self, id: &str, patch: MenuItemPatch) -> ReplaceOutcome;
}

/// 运行时菜单（插入顺序即展示顺序）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// 启动时的初始菜单，每次调用都返回一份全新的实例
    pub fn initial() -> Self {
        Self::new(vec![
            MenuItem::new(
                "1",
                "Starters",
                "R89",
                "https://via.placeholder.com/150/FF5733/FFFFFF?text=Caesar+Salad",
                "Fresh romaine with Caesar dressing and croutons.",
            ),
            MenuItem::new(
                "2",
                "Mains",
                "R159",
                "https://via.placeholder.com/150/33FF57/FFFFFF?text=Grilled+Salmon",
                "Grilled salmon fillet served with seasonal vegetables.",
            ),
            MenuItem::new(
                "3",
                "Desserts",
                "R69",
                "https://via.placeholder.com/150/3357FF/FFFFFF?text=Chocolate+Cake",
                "Rich chocolate cake topped with whipped cream.",
            ),
        ])
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_unique_ids(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.items.iter().all(|item| seen.insert(item.id.as_str()))
    }
}

impl MenuMutator for Menu {
    fn replace_by_id(&mut self, id: &str, patch: MenuItemPatch) -> ReplaceOutcome {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(slot) => {
                let updated = patch.apply_to(slot);
                ReplaceOutcome::Replaced(std::mem::replace(slot, updated))
            }
            None => ReplaceOutcome::NotFound,
        }
    }
}
