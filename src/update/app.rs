//! App message handlers (file operations, lifecycle)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages (file operations)
///
/// Requests turn into [`Cmd`]s for the runtime; completions update the model.
/// Creating or loading a file starts a fresh history, saving never does.
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::NewFile(path) => Some(Cmd::CreateFile { path }),

        AppMsg::LoadFile(path) => Some(Cmd::LoadFile { path }),

        AppMsg::SaveFile(path) => {
            if let Some(path) = path {
                model.document_mut().file_path = Some(path);
            }
            match model.document().file_path.clone() {
                Some(path) => {
                    let content = model.document().snapshot();
                    Some(Cmd::SaveFile { path, content })
                }
                None => {
                    model
                        .ui
                        .set_status("No file specified. Use 'save <filename>' to specify a file.");
                    None
                }
            }
        }

        AppMsg::FileCreated { path, result } => {
            match result {
                Ok(()) => {
                    model.document_mut().reset();
                    model.document_mut().file_path = Some(path.clone());
                    tracing::info!("Created {}", path.display());
                    model
                        .ui
                        .set_status(format!("New file '{}' created and loaded.", path.display()));
                }
                Err(e) => {
                    tracing::warn!("Failed to create {}: {}", path.display(), e);
                    model
                        .ui
                        .set_status(e.user_message(&path.display().to_string()));
                }
            }
            None
        }

        AppMsg::FileLoaded { path, result } => {
            match result {
                Ok(content) => {
                    model.document_mut().load(&content);
                    model.document_mut().file_path = Some(path.clone());
                    tracing::info!("Loaded {} ({} bytes)", path.display(), content.len());
                    model.ui.set_status(format!(
                        "Loaded text from '{}':\n{}",
                        path.display(),
                        content
                    ));
                }
                Err(e) => {
                    tracing::warn!("Failed to load {}: {}", path.display(), e);
                    model
                        .ui
                        .set_status(e.user_message(&path.display().to_string()));
                }
            }
            None
        }

        AppMsg::SaveCompleted { path, result } => {
            match result {
                Ok(()) => {
                    tracing::info!("Saved {}", path.display());
                    model
                        .ui
                        .set_status(format!("Text saved to '{}'", path.display()));
                }
                Err(e) => {
                    tracing::warn!("Failed to save {}: {}", path.display(), e);
                    model
                        .ui
                        .set_status(format!("Error saving '{}': {}", path.display(), e));
                }
            }
            None
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::FileOpenError;
    use std::path::PathBuf;

    #[test]
    fn test_save_without_path_reports_missing_file() {
        let mut model = AppModel::default();
        assert_eq!(update_app(&mut model, AppMsg::SaveFile(None)), None);
        assert_eq!(
            model.ui.status_message,
            "No file specified. Use 'save <filename>' to specify a file."
        );
    }

    #[test]
    fn test_save_with_path_sets_current_file() {
        let mut model = AppModel::default();
        model.document_mut().insert("hello");

        let cmd = update_app(&mut model, AppMsg::SaveFile(Some(PathBuf::from("out.txt"))));
        assert_eq!(
            cmd,
            Some(Cmd::SaveFile {
                path: PathBuf::from("out.txt"),
                content: "hello".to_string(),
            })
        );
        assert_eq!(model.document().file_path, Some(PathBuf::from("out.txt")));

        // A later bare save reuses the remembered path
        let cmd = update_app(&mut model, AppMsg::SaveFile(None));
        assert!(matches!(cmd, Some(Cmd::SaveFile { .. })));
    }

    #[test]
    fn test_save_completed_keeps_history() {
        let mut model = AppModel::default();
        model.document_mut().insert("hello");

        update_app(
            &mut model,
            AppMsg::SaveCompleted {
                path: PathBuf::from("out.txt"),
                result: Ok(()),
            },
        );
        assert!(model.document().can_undo());
        assert_eq!(model.ui.status_message, "Text saved to 'out.txt'");
    }

    #[test]
    fn test_file_loaded_resets_history() {
        let mut model = AppModel::default();
        model.document_mut().insert("old");

        update_app(
            &mut model,
            AppMsg::FileLoaded {
                path: PathBuf::from("in.txt"),
                result: Ok("new text".to_string()),
            },
        );
        assert_eq!(model.document().snapshot(), "new text");
        assert!(!model.document().can_undo());
        assert_eq!(model.document().file_path, Some(PathBuf::from("in.txt")));
        assert_eq!(
            model.ui.status_message,
            "Loaded text from 'in.txt':\nnew text"
        );
    }

    #[test]
    fn test_file_loaded_error_keeps_document() {
        let mut model = AppModel::default();
        model.document_mut().insert("keep");

        update_app(
            &mut model,
            AppMsg::FileLoaded {
                path: PathBuf::from("missing.txt"),
                result: Err(FileOpenError::NotFound),
            },
        );
        assert_eq!(model.document().snapshot(), "keep");
        assert!(model.document().can_undo());
        assert_eq!(model.ui.status_message, "File 'missing.txt' not found.");
    }

    #[test]
    fn test_file_created_resets_document() {
        let mut model = AppModel::default();
        model.document_mut().insert("old");
        model.document_mut().undo().unwrap();

        update_app(
            &mut model,
            AppMsg::FileCreated {
                path: PathBuf::from("new.txt"),
                result: Ok(()),
            },
        );
        assert_eq!(model.document().snapshot(), "");
        assert!(!model.document().can_redo());
        assert_eq!(
            model.ui.status_message,
            "New file 'new.txt' created and loaded."
        );
    }

    #[test]
    fn test_quit_requests_quit() {
        let mut model = AppModel::default();
        assert_eq!(update_app(&mut model, AppMsg::Quit), Some(Cmd::Quit));
    }
}
