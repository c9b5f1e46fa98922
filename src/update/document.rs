//! Document update functions for text editing and undo/redo

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::AppModel;

/// Handle document messages (text editing, undo/redo)
///
/// Every outcome, including the no-op ones, is reported through the status
/// queue. None of these produce a side effect command.
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::Insert(text) => {
            let content = model.document_mut().insert(&text);
            let status = format!(
                "Inserted: '{}' -> {}",
                content,
                model.current_text_line()
            );
            model.ui.set_status(status);
        }

        DocumentMsg::DeleteAll(pattern) => match model.document_mut().delete_all(&pattern) {
            Ok(_) => {
                let status = format!(
                    "Deleted all instances of: '{}' -> {}",
                    pattern,
                    model.current_text_line()
                );
                model.ui.set_status(status);
            }
            Err(e) => model.ui.set_status(e.user_message()),
        },

        DocumentMsg::Undo => match model.document_mut().undo() {
            Ok(kind) => {
                let status = format!("Undo {} -> {}", kind.label(), model.current_text_line());
                model.ui.set_status(status);
            }
            Err(e) => model.ui.set_status(e.user_message()),
        },

        DocumentMsg::Redo => match model.document_mut().redo() {
            Ok(kind) => {
                let status = format!("Redo {} -> {}", kind.label(), model.current_text_line());
                model.ui.set_status(status);
            }
            Err(e) => model.ui.set_status(e.user_message()),
        },

        DocumentMsg::Display => {
            let status = model.current_text_line();
            model.ui.set_status(status);
        }
    }

    None
}
