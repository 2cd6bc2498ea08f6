use folio_contact::{ContactSubmission, Field, SubmissionResult, ValidationErrors};

use crate::{FormField, Transition, TransitionStatus, TransitionTiming};

/// Which of the three contact panels should be shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelVisibility {
    pub form: bool,
    pub error_banner: bool,
    pub success: bool,
}

impl PanelVisibility {
    pub fn derive(result: Option<&SubmissionResult>, submitting: bool) -> Self {
        let success = result.is_some_and(SubmissionResult::is_success);

        Self {
            form: !success,
            error_banner: !submitting && result.is_some_and(SubmissionResult::has_errors),
            success,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelTimings {
    pub form: TransitionTiming,
    pub error_banner: TransitionTiming,
    pub success: TransitionTiming,
}

impl Default for PanelTimings {
    fn default() -> Self {
        Self {
            form: TransitionTiming::new(1600, 1600, true),
            error_banner: TransitionTiming::new(400, 400, false),
            success: TransitionTiming::new(1200, 0, true),
        }
    }
}

/// Client side state of the contact form.
///
/// Field values are never cleared by a submission outcome, so a failed
/// submission can be corrected and sent again.
#[derive(Debug, Clone)]
pub struct FormState {
    values: ContactSubmission,
    submitting: bool,
    result: Option<SubmissionResult>,
    form: Transition,
    error_banner: Transition,
    success: Transition,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(PanelTimings::default())
    }
}

impl FormState {
    pub fn new(timings: PanelTimings) -> Self {
        let visibility = PanelVisibility::derive(None, false);

        Self {
            values: ContactSubmission::default(),
            submitting: false,
            result: None,
            form: Transition::new(timings.form, visibility.form),
            error_banner: Transition::new(timings.error_banner, visibility.error_banner),
            success: Transition::new(timings.success, visibility.success),
        }
    }

    /// Update an input by name. Returns `false` for unknown inputs.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        let Some(field) = FormField::find(name) else {
            return false;
        };

        let value = field.clamp(value);
        match field.name {
            "name" => self.values.name = value,
            "email" => self.values.email = value,
            "message" => self.values.message = value,
            _ => return false,
        }

        true
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.values.name),
            "email" => Some(&self.values.email),
            "message" => Some(&self.values.message),
            _ => None,
        }
    }

    pub fn submission(&self) -> ContactSubmission {
        self.values.clone()
    }

    /// The same rules the server applies, for inline feedback before sending.
    pub fn client_errors(&self) -> ValidationErrors {
        self.values.field_errors()
    }

    /// Mark a submission in flight. Returns `None` if one is already pending.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.submitting {
            return None;
        }

        self.submitting = true;
        self.sync();

        Some(self.submission())
    }

    pub fn finish_submit(&mut self, result: SubmissionResult) {
        tracing::debug!(
            success = result.is_success(),
            failure = result.is_failure(),
            "contact submission finished"
        );

        self.submitting = false;
        self.result = Some(result);
        self.sync();
    }

    pub fn tick(&mut self, elapsed_ms: u64) {
        self.form.tick(elapsed_ms);
        self.error_banner.tick(elapsed_ms);
        self.success.tick(elapsed_ms);
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    pub fn visibility(&self) -> PanelVisibility {
        PanelVisibility::derive(self.result.as_ref(), self.submitting)
    }

    pub fn form_status(&self) -> TransitionStatus {
        self.form.current_state()
    }

    pub fn error_banner_status(&self) -> TransitionStatus {
        self.error_banner.current_state()
    }

    pub fn success_status(&self) -> TransitionStatus {
        self.success.current_state()
    }

    /// Text of the error banner.
    pub fn error_message(&self) -> Option<&str> {
        self.result.as_ref().and_then(SubmissionResult::errors_message)
    }

    /// Inline error for one input, from the last response.
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.result
            .as_ref()
            .and_then(SubmissionResult::field_errors)
            .and_then(|errors| errors.get(field))
    }

    fn sync(&mut self) {
        let visibility = self.visibility();

        self.form.set_predicate(visibility.form);
        self.error_banner.set_predicate(visibility.error_banner);
        self.success.set_predicate(visibility.success);
    }
}
