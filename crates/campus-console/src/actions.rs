//! Form and delete actions.

use campus_client::{ClientError, Mutation, Payload, Transport};
use campus_core::enums::Dashboard;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::console::Console;
use crate::error::ConsoleError;
use crate::forms::{FormKind, FormMode, FormState};
use crate::toast::Toast;

/// Yes/no prompt shown before destructive actions.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Result of a user action that can be declined, rejected or fail remotely.
///
/// Everything but [`Outcome::Done`] leaves the tables untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The request succeeded; carries the success toast text.
    Done(String),
    /// The user declined the confirmation. Nothing was sent.
    Cancelled,
    /// Client-side validation failed. Nothing was sent.
    Rejected(String),
    /// The backend refused or the request failed.
    Failed(String),
}

impl Outcome {
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

fn to_value(record: &impl Serialize) -> Result<Value, ClientError> {
    serde_json::to_value(record).map_err(|e| ClientError::Parse(e.to_string()))
}

impl<T: Transport> Console<T> {
    fn ensure_form(&self, kind: FormKind) -> Result<(), ConsoleError> {
        self.ensure_tab(kind.tab())?;
        self.session()?;
        Ok(())
    }

    /// Open an empty form. On the university dashboard faculty and
    /// department forms are pre-set to the session's university.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::UnknownTab`] if the dashboard does not manage
    /// this entity.
    pub fn open_add(&mut self, kind: FormKind) -> Result<&FormState, ConsoleError> {
        self.ensure_form(kind)?;
        let mut form = FormState::empty(kind);
        if self.page.dashboard == Dashboard::University
            && form.fields.contains_key("university_id")
            && let Some(id) = self.session()?.university_id()
        {
            form.fields.insert("university_id".into(), id.to_string());
        }
        Ok(&*self.page.form.insert(form))
    }

    /// Fetch the record and open the form filled with it.
    ///
    /// A failed fetch pushes an error toast and leaves the form closed.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::UnknownTab`] if the dashboard does not manage
    /// this entity.
    pub async fn open_edit(&mut self, kind: FormKind, id: i64) -> Result<Outcome, ConsoleError> {
        self.ensure_form(kind)?;
        let client = &self.client;
        let record = match kind {
            FormKind::University => client.get_university(id).await.and_then(|r| to_value(&r)),
            FormKind::Faculty => client.get_faculty(id).await.and_then(|r| to_value(&r)),
            FormKind::Department => client.get_department(id).await.and_then(|r| to_value(&r)),
            FormKind::Admin => client.get_admin(id).await.and_then(|r| to_value(&r)),
        };
        match record {
            Ok(record) => {
                self.page.form = Some(FormState::populated(kind, id, &record));
                Ok(Outcome::Done(format!("Editing {} #{id}", kind.as_str())))
            }
            Err(error) => {
                warn!(%error, form = %kind, id, "failed to load record for editing");
                let message = error.user_message();
                self.toast(Toast::error(message.clone()));
                Ok(Outcome::Failed(message))
            }
        }
    }

    /// Set one input of the open form.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::FormNotOpen`] or [`ConsoleError::UnknownField`].
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), ConsoleError> {
        let form = self.page.form.as_mut().ok_or(ConsoleError::FormNotOpen)?;
        if form.kind.field(name).is_none() {
            return Err(ConsoleError::UnknownField {
                form: form.kind,
                field: name.to_string(),
            });
        }
        form.fields.insert(name.to_string(), value.to_string());
        Ok(())
    }

    pub fn close_form(&mut self) {
        self.page.form = None;
    }

    /// Submit the open form: POST without an id, PUT to `.../{id}` with one.
    ///
    /// On success the form closes, a success toast is pushed and the
    /// affected table and the stats are reloaded. Validation errors and
    /// backend errors push an error toast and keep the form open.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::FormNotOpen`] without an open form.
    pub async fn submit(&mut self) -> Result<Outcome, ConsoleError> {
        let form = self.page.form.as_ref().ok_or(ConsoleError::FormNotOpen)?;
        let (kind, mode) = (form.kind, form.mode);
        let payload = match form.payload() {
            Ok(payload) => payload,
            Err(invalid) => {
                let message = invalid.to_string();
                self.toast(Toast::error(message.clone()));
                return Ok(Outcome::Rejected(message));
            }
        };

        match self.send_form(kind, mode, payload).await {
            Ok(mutation) => {
                let verb = if mode == FormMode::Add { "created" } else { "updated" };
                let message = mutation
                    .message
                    .unwrap_or_else(|| format!("{} {verb} successfully", kind.label()));
                self.page.form = None;
                self.toast(Toast::success(message.clone()));
                self.reload(kind.tab()).await?;
                self.refresh_stats().await?;
                Ok(Outcome::Done(message))
            }
            Err(error) => {
                warn!(%error, form = %kind, "form submission failed");
                let message = error.user_message();
                self.toast(Toast::error(message.clone()));
                Ok(Outcome::Failed(message))
            }
        }
    }

    async fn send_form(&self, kind: FormKind, mode: FormMode, payload: Payload) -> Result<Mutation, ClientError> {
        let client = &self.client;
        match (kind, mode) {
            (FormKind::University, FormMode::Add) => client.create_university(payload).await,
            (FormKind::University, FormMode::Edit(id)) => client.update_university(id, payload).await,
            (FormKind::Faculty, FormMode::Add) => client.create_faculty(payload).await,
            (FormKind::Faculty, FormMode::Edit(id)) => client.update_faculty(id, payload).await,
            (FormKind::Department, FormMode::Add) => client.create_department(payload).await,
            (FormKind::Department, FormMode::Edit(id)) => client.update_department(id, payload).await,
            (FormKind::Admin, FormMode::Add) => client.create_admin(payload).await,
            (FormKind::Admin, FormMode::Edit(id)) => client.update_admin(id, payload).await,
        }
    }

    /// Ask, then delete a university or an admin.
    ///
    /// Declining sends nothing. After a successful delete the table and
    /// the stats are reloaded.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Unsupported`] for faculties and departments,
    /// which cannot be deleted from the dashboards.
    pub async fn delete(&mut self, kind: FormKind, id: i64, confirm: &impl Confirm) -> Result<Outcome, ConsoleError> {
        match kind {
            FormKind::Faculty => {
                return Err(ConsoleError::Unsupported {
                    action: "delete",
                    entity: "faculties",
                });
            }
            FormKind::Department => {
                return Err(ConsoleError::Unsupported {
                    action: "delete",
                    entity: "departments",
                });
            }
            FormKind::University | FormKind::Admin => self.ensure_form(kind)?,
        }

        let prompt = format!("Are you sure you want to delete this {}?", kind.as_str());
        if !confirm.confirm(&prompt) {
            return Ok(Outcome::Cancelled);
        }

        let result = match kind {
            FormKind::Admin => self.client.delete_admin(id).await,
            _ => self.client.delete_university(id).await,
        };
        match result {
            Ok(mutation) => {
                let message = mutation
                    .message
                    .unwrap_or_else(|| format!("{} deleted successfully", kind.label()));
                self.toast(Toast::success(message.clone()));
                self.reload(kind.tab()).await?;
                self.refresh_stats().await?;
                Ok(Outcome::Done(message))
            }
            Err(error) => {
                warn!(%error, form = %kind, id, "delete failed");
                let message = error.user_message();
                self.toast(Toast::error(message.clone()));
                Ok(Outcome::Failed(message))
            }
        }
    }

    /// Users are read-only on both dashboards.
    ///
    /// # Errors
    ///
    /// Always returns [`ConsoleError::Unsupported`].
    pub const fn edit_user(&self, _id: i64) -> Result<(), ConsoleError> {
        Err(ConsoleError::Unsupported {
            action: "edit",
            entity: "users",
        })
    }
}
