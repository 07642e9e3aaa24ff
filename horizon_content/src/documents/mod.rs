//! Plain-text documents and console copy.

/// Horizontal rule used around console sections.
pub const RULE: &str = "============================================================";

/// First line printed by the setup tool.
pub const BANNER: &str = "🚀 Beyond the Horizon - 项目快速设置";

/// Guidance printed after a successful setup. Starts with a blank line.
pub const NEXT_STEPS: &str = include_str!("../../templates/next_steps.txt");

/// Hint printed after a failed setup.
pub const FAILURE_HINT: &str = "请检查文件权限和磁盘空间，然后重试。";

/// A static text file written at the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextDocument {
    pub file_name: &'static str,
    pub contents: &'static str,
}

pub const GITIGNORE: TextDocument = TextDocument {
    file_name: ".gitignore",
    contents: include_str!("../../templates/gitignore.txt"),
};

pub const DEVELOPMENT_TODOS: TextDocument = TextDocument {
    file_name: "DEVELOPMENT_TODOS.md",
    contents: include_str!("../../templates/DEVELOPMENT_TODOS.md"),
};
