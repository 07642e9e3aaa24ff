//! Project directory layout.

use std::path::Path;

/// Top-level area of the Godot project a directory belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectoryGroup {
    Assets,
    Audio,
    Scenes,
    Scripts,
    Resources,
    Exports,
}

impl DirectoryGroup {
    /// Short label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            DirectoryGroup::Assets => "assets",
            DirectoryGroup::Audio => "audio",
            DirectoryGroup::Scenes => "scenes",
            DirectoryGroup::Scripts => "scripts",
            DirectoryGroup::Resources => "resources",
            DirectoryGroup::Exports => "exports",
        }
    }
}

impl std::fmt::Display for DirectoryGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A directory the project expects to exist, relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEntry {
    pub group: DirectoryGroup,
    /// Forward-slash separated path relative to the project root.
    pub path: &'static str,
}

impl LayoutEntry {
    const fn new(group: DirectoryGroup, path: &'static str) -> Self {
        Self { group, path }
    }

    /// The entry as a filesystem path.
    pub fn as_path(&self) -> &Path {
        Path::new(self.path)
    }
}

/// Directory that holds the generated JSON configuration.
pub const RESOURCES_DIR: &str = "resources";

const PROJECT_LAYOUT: [LayoutEntry; 17] = [
    LayoutEntry::new(DirectoryGroup::Assets, "assets/fonts"),
    LayoutEntry::new(DirectoryGroup::Assets, "assets/icons"),
    LayoutEntry::new(DirectoryGroup::Audio, "audio/bgm"),
    LayoutEntry::new(DirectoryGroup::Audio, "audio/sfx/ambience"),
    LayoutEntry::new(DirectoryGroup::Audio, "audio/sfx/obstacles"),
    LayoutEntry::new(DirectoryGroup::Audio, "audio/sfx/ui"),
    LayoutEntry::new(DirectoryGroup::Scenes, "scenes/main"),
    LayoutEntry::new(DirectoryGroup::Scenes, "scenes/prefabs"),
    LayoutEntry::new(DirectoryGroup::Scenes, "scenes/ui"),
    LayoutEntry::new(DirectoryGroup::Scripts, "scripts/core"),
    LayoutEntry::new(DirectoryGroup::Scripts, "scripts/systems"),
    LayoutEntry::new(DirectoryGroup::Scripts, "scripts/ui"),
    LayoutEntry::new(DirectoryGroup::Scripts, "scripts/utils"),
    LayoutEntry::new(DirectoryGroup::Resources, RESOURCES_DIR),
    LayoutEntry::new(DirectoryGroup::Exports, "exports/windows"),
    LayoutEntry::new(DirectoryGroup::Exports, "exports/linux"),
    LayoutEntry::new(DirectoryGroup::Exports, "exports/mac"),
];

/// All directories the scaffolder creates, in creation order.
pub fn project_layout() -> &'static [LayoutEntry] {
    &PROJECT_LAYOUT
}
