//! Application state and core logic

use crate::config::TuiConfig;
use crate::service::{
    artifact_url, classify_generate, classify_modify, GenerateRequest, GenerationClient,
    GenerationService, ModifyRequest,
};
use crate::state::{AppState, Form, ModelForm, OperationResult, DEFAULT_SIZE_MM};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the generation service
    service: Arc<dyn GenerationService>,
    /// Base address used to build download links
    server_url: String,
    /// Finished request outcomes, tagged with their sequence number
    outcome_tx: mpsc::UnboundedSender<(u64, OperationResult)>,
    outcome_rx: mpsc::UnboundedReceiver<(u64, OperationResult)>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub async fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_default();
        let client = GenerationClient::from_config(&config);
        let server_url = client.base_url().to_string();

        let mut app = Self::with_service(Arc::new(client), server_url);
        app.state.form = ModelForm::with_defaults(
            config.default_size.unwrap_or(DEFAULT_SIZE_MM),
            config.default_complexity.unwrap_or_default(),
        );

        // Probe the service so the status bar can show reachability
        app.state.service_connected = app.service.check_connection().await;

        Ok(app)
    }

    fn with_service(service: Arc<dyn GenerationService>, server_url: String) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            service,
            server_url,
            outcome_tx,
            outcome_rx,
            quit: false,
            copy_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Base address of the generation service
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Submit the current form to the generate endpoint
    pub fn submit_generate(&mut self) {
        let request = GenerateRequest::from_form(&self.state.form);
        let seq = self.state.begin_request();
        tracing::info!(seq, prompt = %request.prompt, "submitting generate request");

        let service = Arc::clone(&self.service);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = classify_generate(service.generate_model(request).await);
            // The receiver only closes on shutdown
            let _ = tx.send((seq, outcome));
        });
    }

    /// Submit the current form to the modify endpoint
    pub fn submit_modify(&mut self) {
        let request = ModifyRequest::from_form(&self.state.form);
        let seq = self.state.begin_request();
        tracing::info!(seq, prompt = %request.prompt, "submitting modify request");

        let service = Arc::clone(&self.service);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = classify_modify(service.modify_model(request).await);
            let _ = tx.send((seq, outcome));
        });
    }

    /// Drain finished request outcomes. A response superseded by a newer
    /// submit is dropped so it cannot overwrite newer state.
    pub fn poll_outcomes(&mut self) {
        while let Ok((seq, outcome)) = self.outcome_rx.try_recv() {
            if self.state.apply_outcome(seq, outcome) {
                tracing::debug!(seq, "applied request outcome");
            } else {
                tracing::info!(seq, "dropped stale response");
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Submit and copy shortcuts work from any field
        let has_modifier = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(crate::platform::COPY_MODIFIER);
        if has_modifier {
            match key.code {
                KeyCode::Char('g') => {
                    self.submit_generate();
                    return Ok(());
                }
                KeyCode::Char('r') => {
                    self.submit_modify();
                    return Ok(());
                }
                KeyCode::Char('y') => {
                    self.copy_download_link();
                    return Ok(());
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left if self.state.form.is_buttons_row_active() => {
                self.state.form.prev_button();
            }
            KeyCode::Right if self.state.form.is_buttons_row_active() => {
                self.state.form.next_button();
            }
            KeyCode::Left if self.state.form.is_complexity_active() => {
                self.state.form.complexity.cycle_prev();
            }
            KeyCode::Right if self.state.form.is_complexity_active() => {
                self.state.form.complexity.cycle_next();
            }
            KeyCode::Enter if self.state.form.is_buttons_row_active() => {
                match self.state.form.selected_button {
                    0 => self.submit_generate(),
                    _ => self.submit_modify(),
                }
            }
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Esc => match self.state.operation {
                OperationResult::Idle => self.quit = true,
                // No cancellation of in-flight requests
                OperationResult::Loading => {}
                _ => self.state.operation = OperationResult::Idle,
            },
            KeyCode::Char(c) if !self.state.form.is_buttons_row_active() => {
                let ch = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    c.to_ascii_uppercase()
                } else {
                    c
                };
                self.state.form.get_active_field_mut().push_char(ch);
            }
            KeyCode::Backspace if !self.state.form.is_buttons_row_active() => {
                self.state.form.get_active_field_mut().pop_char();
            }
            _ => {}
        }
        Ok(())
    }

    /// Copy the download link of the displayed success result
    fn copy_download_link(&mut self) {
        if let OperationResult::Success { file_ref, .. } = &self.state.operation {
            let url = artifact_url(&self.server_url, file_ref);
            match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(url.clone()))
            {
                Ok(()) => self.copy_message = Some("Download link copied!".to_string()),
                Err(err) => {
                    tracing::warn!("clipboard unavailable: {err}");
                    // Still show the link so it can be copied by hand
                    self.copy_message = Some(url);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Complexity, RequestKind};
    use crate::service::{GenerateResponse, MockGenerationService, ModifyResponse, ServiceError};
    use pretty_assertions::assert_eq;

    fn app_with(service: MockGenerationService) -> App {
        App::with_service(Arc::new(service), "http://127.0.0.1:8000".to_string())
    }

    fn app() -> App {
        app_with(MockGenerationService::new())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_into_active_field(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    /// Receive and apply one finished request outcome
    async fn settle(app: &mut App) {
        let (seq, outcome) = app.outcome_rx.recv().await.expect("request outcome");
        app.state.apply_outcome(seq, outcome);
    }

    mod submit_generate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_enters_loading_synchronously_then_success() {
            let mut service = MockGenerationService::new();
            service.expect_generate_model().times(1).returning(|_| {
                Ok(GenerateResponse {
                    file: Some("out.step".to_string()),
                    error: None,
                })
            });
            let mut app = app_with(service);

            app.submit_generate();
            assert_eq!(app.state.operation, OperationResult::Loading);

            settle(&mut app).await;
            assert_eq!(
                app.state.operation,
                OperationResult::Success {
                    kind: RequestKind::Generate,
                    file_ref: "out.step".to_string(),
                }
            );
        }

        #[tokio::test]
        async fn test_forwards_form_fields() {
            let mut service = MockGenerationService::new();
            service
                .expect_generate_model()
                .withf(|request| {
                    request.prompt == "a gear"
                        && request.size == 100.0
                        && request.complexity == Complexity::High
                })
                .times(1)
                .returning(|_| Ok(GenerateResponse::default()));
            let mut app = app_with(service);

            type_into_active_field(&mut app, "a gear");
            app.state.form.complexity.push_char('h');
            app.submit_generate();
            settle(&mut app).await;
        }

        #[tokio::test]
        async fn test_empty_prompt_is_forwarded() {
            let mut service = MockGenerationService::new();
            service
                .expect_generate_model()
                .withf(|request| request.prompt.is_empty())
                .times(1)
                .returning(|_| {
                    Ok(GenerateResponse {
                        file: Some("out.stl".to_string()),
                        error: None,
                    })
                });
            let mut app = app_with(service);

            app.submit_generate();
            settle(&mut app).await;
            assert!(matches!(
                app.state.operation,
                OperationResult::Success { .. }
            ));
        }

        #[tokio::test]
        async fn test_shape_rejection_yields_domain_hint() {
            let mut service = MockGenerationService::new();
            service.expect_generate_model().returning(|_| {
                Ok(GenerateResponse {
                    file: None,
                    error: Some("Shape not recognized: blah".to_string()),
                })
            });
            let mut app = app_with(service);

            app.submit_generate();
            settle(&mut app).await;
            assert_eq!(
                app.state.operation,
                OperationResult::DomainError {
                    message: "Shape not recognized. Please describe a valid shape.".to_string(),
                }
            );
        }

        #[tokio::test]
        async fn test_failure_with_detail() {
            let mut service = MockGenerationService::new();
            service.expect_generate_model().returning(|_| {
                Err(ServiceError::Rejected {
                    detail: Some("boom".to_string()),
                })
            });
            let mut app = app_with(service);

            app.submit_generate();
            settle(&mut app).await;
            assert_eq!(
                app.state.operation,
                OperationResult::TransportError {
                    message: "Error generating model: boom".to_string(),
                }
            );
        }

        #[tokio::test]
        async fn test_failure_without_detail_uses_fallback() {
            let mut service = MockGenerationService::new();
            service
                .expect_generate_model()
                .returning(|_| Err(ServiceError::Rejected { detail: None }));
            let mut app = app_with(service);

            app.submit_generate();
            settle(&mut app).await;
            assert_eq!(
                app.state.operation,
                OperationResult::TransportError {
                    message: "Error generating model: Server error.".to_string(),
                }
            );
        }
    }

    mod submit_modify {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_success_reads_modified_file_field() {
            let mut service = MockGenerationService::new();
            service.expect_modify_model().times(1).returning(|_| {
                Ok(ModifyResponse {
                    modified_file: Some("mod.stl".to_string()),
                    error: None,
                })
            });
            let mut app = app_with(service);

            app.submit_modify();
            assert_eq!(app.state.operation, OperationResult::Loading);
            settle(&mut app).await;
            assert_eq!(
                app.state.operation,
                OperationResult::Success {
                    kind: RequestKind::Modify,
                    file_ref: "mod.stl".to_string(),
                }
            );
        }

        #[tokio::test]
        async fn test_forwards_modification_field() {
            let mut service = MockGenerationService::new();
            service
                .expect_modify_model()
                .withf(|request| request.modification == "increase size by 10mm")
                .times(1)
                .returning(|_| Ok(ModifyResponse::default()));
            let mut app = app_with(service);

            app.state.form.set_active_field(3);
            type_into_active_field(&mut app, "increase size by 10mm");
            app.submit_modify();
            settle(&mut app).await;
        }

        #[tokio::test]
        async fn test_shape_rejection_uses_modify_hint() {
            let mut service = MockGenerationService::new();
            service.expect_modify_model().returning(|_| {
                Ok(ModifyResponse {
                    modified_file: None,
                    error: Some("Shape not recognized: blah".to_string()),
                })
            });
            let mut app = app_with(service);

            app.submit_modify();
            settle(&mut app).await;
            assert_eq!(
                app.state.operation,
                OperationResult::DomainError {
                    message: "Shape not recognized. Try modifying a valid model.".to_string(),
                }
            );
        }

        #[tokio::test]
        async fn test_failure_uses_modify_prefix() {
            let mut service = MockGenerationService::new();
            service.expect_modify_model().returning(|_| {
                Err(ServiceError::Rejected {
                    detail: Some("boom".to_string()),
                })
            });
            let mut app = app_with(service);

            app.submit_modify();
            settle(&mut app).await;
            assert_eq!(
                app.state.operation,
                OperationResult::TransportError {
                    message: "Error modifying model: boom".to_string(),
                }
            );
        }
    }

    mod result_lifecycle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_new_submit_clears_displayed_result() {
            let mut service = MockGenerationService::new();
            service
                .expect_generate_model()
                .returning(|_| Ok(GenerateResponse::default()));
            let mut app = app_with(service);
            app.state.operation = OperationResult::Success {
                kind: RequestKind::Modify,
                file_ref: "old.stl".to_string(),
            };

            app.submit_generate();
            assert_eq!(app.state.operation, OperationResult::Loading);
        }

        #[tokio::test]
        async fn test_stale_response_does_not_overwrite_newer_state() {
            let mut service = MockGenerationService::new();
            // Responses are distinguishable by the prompt that produced them.
            service.expect_generate_model().times(2).returning(|request| {
                Ok(GenerateResponse {
                    file: Some(format!("{}.stl", request.prompt)),
                    error: None,
                })
            });
            let mut app = app_with(service);

            type_into_active_field(&mut app, "first");
            app.submit_generate();
            app.state.form.prompt.clear();
            type_into_active_field(&mut app, "second");
            app.submit_generate();

            // Both responses arrive; only the latest may be applied.
            settle(&mut app).await;
            settle(&mut app).await;
            assert_eq!(
                app.state.operation,
                OperationResult::Success {
                    kind: RequestKind::Generate,
                    file_ref: "second.stl".to_string(),
                }
            );
        }

        #[tokio::test]
        async fn test_form_input_persists_across_requests() {
            let mut service = MockGenerationService::new();
            service
                .expect_generate_model()
                .returning(|_| Ok(GenerateResponse::default()));
            let mut app = app_with(service);

            type_into_active_field(&mut app, "cube");
            app.submit_generate();
            settle(&mut app).await;
            assert_eq!(app.state.form.prompt.as_text(), "cube");
        }
    }

    mod key_handling {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_tab_cycles_fields() {
            let mut app = app();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert_eq!(app.state.form.active_field_index, 1);
            app.handle_key(key(KeyCode::BackTab)).unwrap();
            assert_eq!(app.state.form.active_field_index, 0);
        }

        #[test]
        fn test_chars_edit_active_field() {
            let mut app = app();
            type_into_active_field(&mut app, "cone");
            assert_eq!(app.state.form.prompt.as_text(), "cone");
            app.handle_key(key(KeyCode::Backspace)).unwrap();
            assert_eq!(app.state.form.prompt.as_text(), "con");
        }

        #[test]
        fn test_arrow_keys_cycle_complexity() {
            let mut app = app();
            app.state.form.set_active_field(2);
            app.handle_key(key(KeyCode::Right)).unwrap();
            assert_eq!(
                app.state.form.complexity.as_complexity(),
                Complexity::High
            );
            app.handle_key(key(KeyCode::Left)).unwrap();
            app.handle_key(key(KeyCode::Left)).unwrap();
            assert_eq!(app.state.form.complexity.as_complexity(), Complexity::Low);
        }

        #[test]
        fn test_arrow_keys_select_button_on_buttons_row() {
            let mut app = app();
            app.state.form.set_active_field(4);
            app.handle_key(key(KeyCode::Right)).unwrap();
            assert_eq!(app.state.form.selected_button, 1);
            app.handle_key(key(KeyCode::Left)).unwrap();
            assert_eq!(app.state.form.selected_button, 0);
        }

        #[test]
        fn test_chars_are_ignored_on_buttons_row() {
            let mut app = app();
            app.state.form.set_active_field(4);
            app.handle_key(key(KeyCode::Char('x'))).unwrap();
            assert_eq!(app.state.form.prompt.as_text(), "");
            assert_eq!(app.state.form.modification.as_text(), "");
        }

        #[tokio::test]
        async fn test_enter_on_buttons_row_submits_selected_operation() {
            let mut service = MockGenerationService::new();
            service
                .expect_modify_model()
                .times(1)
                .returning(|_| Ok(ModifyResponse::default()));
            let mut app = app_with(service);

            app.state.form.set_active_field(4);
            app.handle_key(key(KeyCode::Right)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.operation, OperationResult::Loading);
            settle(&mut app).await;
        }

        #[tokio::test]
        async fn test_ctrl_g_submits_generate_from_any_field() {
            let mut service = MockGenerationService::new();
            service
                .expect_generate_model()
                .times(1)
                .returning(|_| Ok(GenerateResponse::default()));
            let mut app = app_with(service);

            app.state.form.set_active_field(3);
            app.handle_key(ctrl('g')).unwrap();
            assert_eq!(app.state.operation, OperationResult::Loading);
            settle(&mut app).await;
        }

        #[test]
        fn test_esc_dismisses_error_result() {
            let mut app = app();
            app.state.operation = OperationResult::TransportError {
                message: "boom".to_string(),
            };
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert_eq!(app.state.operation, OperationResult::Idle);
            assert!(!app.should_quit());
        }

        #[test]
        fn test_esc_does_not_dismiss_loading() {
            let mut app = app();
            app.state.operation = OperationResult::Loading;
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert_eq!(app.state.operation, OperationResult::Loading);
            assert!(!app.should_quit());
        }

        #[test]
        fn test_esc_quits_when_idle() {
            let mut app = app();
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_enter_advances_field_outside_buttons_row() {
            let mut app = app();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.form.active_field_index, 1);
        }
    }
}
