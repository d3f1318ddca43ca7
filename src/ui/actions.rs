//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,

    // 列表页上的两个按钮
    ViewDetails,
    EditSelected,

    // 导航
    Back,

    // 编辑表单
    Save,
    NextField,
    PrevField,
    Input(char),
    DeleteChar,

    DismissNotice,
}
