//! The setup procedure: directories first, then configuration and documents.

use std::io::Write;
use std::path::{Path, PathBuf};

use horizon_content::{
    default_scenes, project_layout, FeedbackConfig, TextDocument, DEVELOPMENT_TODOS,
    FEEDBACK_CONFIG_FILE, GITIGNORE, NEXT_STEPS, RESOURCES_DIR, SCENES_CONFIG_FILE,
};
use serde::Serialize;
use tracing::info;

use crate::emit::{write_json, write_text};
use crate::error::{Result, SetupError};
use crate::scaffold::{scaffold_directories, DirectoryStatus, ScaffoldedDirectory};

/// Runtime parameters for a setup run.
#[derive(Debug, Clone)]
pub struct SetupOptions {
    /// Project root all layout paths are resolved against.
    pub root: PathBuf,
}

impl SetupOptions {
    /// Set up a project rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for SetupOptions {
    /// The current working directory. Paths are used unprefixed.
    fn default() -> Self {
        Self::with_root(PathBuf::new())
    }
}

/// Steps of the setup, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetupStep {
    Directories,
    SceneConfig,
    FeedbackConfig,
    Gitignore,
    DevelopmentTodos,
}

impl SetupStep {
    pub const ALL: [SetupStep; 5] = [
        SetupStep::Directories,
        SetupStep::SceneConfig,
        SetupStep::FeedbackConfig,
        SetupStep::Gitignore,
        SetupStep::DevelopmentTodos,
    ];

    /// Console header printed when the step starts.
    pub fn header(&self) -> &'static str {
        match self {
            SetupStep::Directories => "📁 创建项目目录结构...",
            SetupStep::SceneConfig => "📋 创建场景配置文件...",
            SetupStep::FeedbackConfig => "📝 创建反馈文案配置...",
            SetupStep::Gitignore => "🚫 创建 .gitignore 文件...",
            SetupStep::DevelopmentTodos => "📋 创建开发任务清单...",
        }
    }
}

/// Everything a successful run touched.
#[derive(Debug, Clone, Default)]
pub struct SetupReport {
    pub directories: Vec<ScaffoldedDirectory>,
    /// Written files, relative to the project root.
    pub files: Vec<PathBuf>,
}

impl SetupReport {
    /// Number of directories that did not exist before the run.
    pub fn created_directories(&self) -> usize {
        self.directories
            .iter()
            .filter(|d| d.status == DirectoryStatus::Created)
            .count()
    }
}

/// Runs the setup steps against a project root, writing progress to a console sink.
pub struct ProjectSetup<'a, W: Write> {
    root: &'a Path,
    out: &'a mut W,
    report: SetupReport,
}

impl<'a, W: Write> ProjectSetup<'a, W> {
    pub fn new(options: &'a SetupOptions, out: &'a mut W) -> Self {
        Self {
            root: &options.root,
            out,
            report: SetupReport::default(),
        }
    }

    /// Run every step in order. The first failure aborts the rest.
    pub fn run(mut self) -> Result<SetupReport> {
        for (index, step) in SetupStep::ALL.into_iter().enumerate() {
            if index > 0 {
                writeln!(self.out).map_err(SetupError::Console)?;
            }
            writeln!(self.out, "{}", step.header()).map_err(SetupError::Console)?;
            self.run_step(step)?;
            info!(?step, "setup step complete");
        }

        self.out
            .write_all(NEXT_STEPS.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(SetupError::Console)?;

        info!(
            created = self.report.created_directories(),
            files = self.report.files.len(),
            "project setup complete"
        );
        Ok(self.report)
    }

    fn run_step(&mut self, step: SetupStep) -> Result<()> {
        match step {
            SetupStep::Directories => {
                self.report.directories =
                    scaffold_directories(self.root, project_layout(), &mut *self.out)?;
                Ok(())
            }
            SetupStep::SceneConfig => {
                let relative = Path::new(RESOURCES_DIR).join(SCENES_CONFIG_FILE);
                self.emit_json(relative, &default_scenes())
            }
            SetupStep::FeedbackConfig => {
                let relative = Path::new(RESOURCES_DIR).join(FEEDBACK_CONFIG_FILE);
                self.emit_json(relative, &FeedbackConfig::default())
            }
            SetupStep::Gitignore => self.emit_document(&GITIGNORE),
            SetupStep::DevelopmentTodos => self.emit_document(&DEVELOPMENT_TODOS),
        }
    }

    fn emit_json<T: Serialize + ?Sized>(&mut self, relative: PathBuf, value: &T) -> Result<()> {
        write_json(&self.root.join(&relative), value)?;
        self.record_file(relative)
    }

    fn emit_document(&mut self, document: &TextDocument) -> Result<()> {
        let relative = PathBuf::from(document.file_name);
        write_text(&self.root.join(&relative), document.contents)?;
        self.record_file(relative)
    }

    fn record_file(&mut self, relative: PathBuf) -> Result<()> {
        // Console paths always use forward slashes.
        let display = relative.to_string_lossy().replace('\\', "/");
        writeln!(self.out, "  ✅ 创建文件: {}", display).map_err(SetupError::Console)?;
        self.report.files.push(relative);
        Ok(())
    }
}

/// Run the full setup with the given options.
pub fn run_setup(options: &SetupOptions, out: &mut impl Write) -> Result<SetupReport> {
    ProjectSetup::new(options, out).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run_in_temp_dir() -> (TempDir, SetupReport, String) {
        let dir = TempDir::new().unwrap();
        let mut out = Vec::new();
        let report = run_setup(&SetupOptions::with_root(dir.path()), &mut out).unwrap();
        (dir, report, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_report_lists_all_outputs() {
        let (_dir, report, _) = run_in_temp_dir();

        assert_eq!(report.directories.len(), project_layout().len());
        assert_eq!(report.created_directories(), project_layout().len());
        assert_eq!(
            report.files,
            vec![
                PathBuf::from("resources/scenes_config.json"),
                PathBuf::from("resources/feedback_config.json"),
                PathBuf::from(".gitignore"),
                PathBuf::from("DEVELOPMENT_TODOS.md"),
            ]
        );
    }

    #[test]
    fn test_console_sections_in_order() {
        let (_dir, _, console) = run_in_temp_dir();

        let mut cursor = 0;
        for step in SetupStep::ALL {
            cursor += console[cursor..].find(step.header()).unwrap();
        }
        assert!(console.starts_with("📁 创建项目目录结构...\n"));
        assert!(console.contains("\n\n📋 创建场景配置文件...\n  ✅ 创建文件: resources/scenes_config.json\n"));
        assert!(console.contains("🎉 项目设置完成！"));
    }

    #[test]
    fn test_documents_match_content() {
        let (dir, _, _) = run_in_temp_dir();

        let todos = std::fs::read_to_string(dir.path().join("DEVELOPMENT_TODOS.md")).unwrap();
        assert_eq!(todos, DEVELOPMENT_TODOS.contents);
        let gitignore = std::fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert_eq!(gitignore, GITIGNORE.contents);
    }

    #[test]
    fn test_second_run_reports_existing_directories() {
        let dir = TempDir::new().unwrap();
        let options = SetupOptions::with_root(dir.path());
        run_setup(&options, &mut Vec::new()).unwrap();

        let report = run_setup(&options, &mut Vec::new()).unwrap();
        assert_eq!(report.created_directories(), 0);
        assert_eq!(report.files.len(), 4);
    }

    #[test]
    fn test_failure_stops_before_any_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("scripts"), "").unwrap();
        let mut out = Vec::new();

        let result = run_setup(&SetupOptions::with_root(dir.path()), &mut out);

        assert!(result.is_err());
        assert!(!dir.path().join(".gitignore").exists());
        assert!(!dir.path().join("resources").exists());
        let console = String::from_utf8(out).unwrap();
        assert!(!console.contains("🎉"));
    }

    #[test]
    fn test_default_options_use_working_directory() {
        let root = SetupOptions::default().root;
        assert_eq!(root, PathBuf::new());
        assert_eq!(root.join("assets/fonts"), PathBuf::from("assets/fonts"));
    }

    struct ClosedConsole;

    impl Write for ClosedConsole {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_closed_console_is_reported_as_console_error() {
        let dir = TempDir::new().unwrap();

        let err = run_setup(&SetupOptions::with_root(dir.path()), &mut ClosedConsole).unwrap_err();

        assert!(matches!(err, SetupError::Console(_)));
        assert!(err.path().is_none());
    }

    #[test]
    fn test_write_failure_keeps_file_path() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".gitignore")).unwrap();

        let err = run_setup(&SetupOptions::with_root(dir.path()), &mut Vec::new()).unwrap_err();

        assert!(matches!(err, SetupError::WriteFile { .. }));
        assert_eq!(err.path(), Some(dir.path().join(".gitignore").as_path()));
    }
}
