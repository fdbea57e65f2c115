// apps/page-sim/src/page.rs
//
// Console-backed stand-ins for the booking page. Each collaborator prints
// what the real page would do to the document.

use tracing::info;

use shared_dom::{FormReset, Notification, SubmitAffordance, ThemeSink, Viewport};

pub struct ConsoleButton {
    state: shared_dom::stubs::StubSubmitButton,
}

impl ConsoleButton {
    pub fn new(label: &str) -> Self {
        Self {
            state: shared_dom::stubs::StubSubmitButton::new(label),
        }
    }
}

impl SubmitAffordance for ConsoleButton {
    fn disable(&self) {
        info!("[page] submit button disabled");
        self.state.disable();
    }

    fn enable(&self) {
        info!("[page] submit button enabled");
        self.state.enable();
    }

    fn set_label(&self, text: &str) {
        info!("[page] submit button label -> {:?}", text);
        self.state.set_label(text);
    }

    fn label(&self) -> String {
        self.state.label()
    }
}

pub struct ConsoleBanner;

impl Notification for ConsoleBanner {
    fn show(&self) {
        info!("[page] success banner shown");
    }

    fn hide(&self) {
        info!("[page] success banner hidden");
    }
}

pub struct ConsoleViewport;

impl Viewport for ConsoleViewport {
    fn scroll_to_top(&self) {
        info!("[page] viewport scrolled to top");
    }
}

pub struct ConsoleForm;

impl FormReset for ConsoleForm {
    fn reset_all(&self) {
        info!("[page] form fields reset");
    }
}

pub struct ConsoleDocumentRoot;

impl ThemeSink for ConsoleDocumentRoot {
    fn apply_theme(&self, theme_attr: &str) {
        info!("[page] document data-theme -> {:?}", theme_attr);
    }
}
