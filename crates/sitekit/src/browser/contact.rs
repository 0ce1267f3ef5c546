//! Contact form validation and submission.

use super::dom;
use super::events::Listener;
use super::fetch;
use sitekit_core::{
    Command, ContactConfig, ContactFields, ContactForm, ContactMessage, FormPhase, State,
    SubmitOutcome, FIELD_NAMES,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, FormData, HtmlFormElement};

/// Wired contact form.
pub struct ContactFormView {
    _listener: Listener,
    form: Rc<RefCell<ContactForm>>,
}

impl ContactFormView {
    /// Take over submission of the contact form.
    ///
    /// Returns `None` when the page has no form with the configured id.
    pub fn mount(document: &Document, config: &ContactConfig) -> Option<Self> {
        let form = document
            .get_element_by_id(&config.form_id)?
            .dyn_into::<HtmlFormElement>()
            .ok()?;
        let page = FormPage {
            document: document.clone(),
            status: document.get_element_by_id(&config.status_id),
            error_attribute: config.error_attribute.clone(),
            form: form.clone(),
        };
        let state = Rc::new(RefCell::new(ContactForm::new(config.messages.clone())));

        let handler_state = state.clone();
        let listener = Listener::new(form.as_ref(), "submit", move |event: Event| {
            event.prevent_default();
            let msg = ContactMessage::Submit {
                fields: page.fields(),
                action: page.form.get_attribute("action"),
            };
            let cmd = handler_state.borrow_mut().update(msg);
            perform(&page, &handler_state, cmd);
        })?;

        Some(Self {
            _listener: listener,
            form: state,
        })
    }

    /// Current form phase.
    pub fn phase(&self) -> FormPhase {
        self.form.borrow().phase()
    }
}

/// The form and the page elements it writes to.
#[derive(Clone)]
struct FormPage {
    document: Document,
    form: HtmlFormElement,
    status: Option<Element>,
    error_attribute: String,
}

impl FormPage {
    fn fields(&self) -> ContactFields {
        match FormData::new_with_form(&self.form) {
            Ok(data) => ContactFields::from_lookup(|name| data.get(name).as_string()),
            Err(_) => ContactFields::default(),
        }
    }

    fn set_status(&self, text: &str) {
        if let Some(status) = &self.status {
            dom::set_text(status, text);
        }
    }

    fn set_error(&self, field: &str, message: &str) {
        let selector = format!("[{}=\"{field}\"]", self.error_attribute);
        if let Some(slot) = dom::query(&self.document, &selector) {
            dom::set_text(&slot, message);
        }
    }

    fn clear_errors(&self) {
        for field in FIELD_NAMES {
            self.set_error(field, "");
        }
    }
}

fn perform(page: &FormPage, state: &Rc<RefCell<ContactForm>>, cmd: Command) {
    for cmd in cmd.flatten() {
        match cmd {
            Command::None | Command::Batch(_) => {}
            Command::SetStatus(text) => page.set_status(&text),
            Command::ClearErrors => page.clear_errors(),
            Command::ShowError { field, message } => page.set_error(&field, &message),
            Command::ResetForm => page.form.reset(),
            Command::Submit { action } => {
                log::debug!("contact: posting to '{action}'");
                let page = page.clone();
                let state = state.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = match fetch::post_form(&page.form).await {
                        Ok(status) => SubmitOutcome::from_status(status),
                        Err(err) => {
                            log::warn!("contact: {err}");
                            SubmitOutcome::from(err)
                        }
                    };
                    if let SubmitOutcome::Rejected { status } = &outcome {
                        log::warn!("contact: server answered {status}");
                    }
                    let next = state.borrow_mut().update(ContactMessage::Completed(outcome));
                    perform(&page, &state, next);
                });
            }
        }
    }
}
